//! Control-panel draft state and the parameter-change callback.
//!
//! The user edits a draft; nothing propagates until Apply hands a full copy
//! of the draft to a [`ParamsListener`]. Date edits obey the picker rules:
//! no date in the future, start never after end, end never before start.

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::domain::{Asset, DashboardParams, Strategy};

/// Receiver of applied parameters. Invoked once per Apply.
pub trait ParamsListener {
    fn on_params_change(&mut self, params: DashboardParams);
}

/// Which date picker is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

/// Why a picker refused a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickRejection {
    #[error("date {0} is in the future")]
    InFuture(NaiveDate),
    #[error("start date {0} would be after the end date")]
    AfterEnd(NaiveDate),
    #[error("end date {0} would be before the start date")]
    BeforeStart(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamsDraft {
    draft: DashboardParams,
}

impl ParamsDraft {
    pub fn new(initial: DashboardParams) -> Self {
        Self { draft: initial }
    }

    pub fn params(&self) -> &DashboardParams {
        &self.draft
    }

    pub fn set_asset(&mut self, asset: Asset) {
        self.draft.asset = asset;
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.draft.strategy = strategy;
    }

    pub fn cycle_asset(&mut self, forward: bool) {
        self.draft.asset = if forward {
            self.draft.asset.next()
        } else {
            self.draft.asset.prev()
        };
    }

    pub fn cycle_strategy(&mut self, forward: bool) {
        self.draft.strategy = if forward {
            self.draft.strategy.next()
        } else {
            self.draft.strategy.prev()
        };
    }

    pub fn date(&self, field: DateField) -> NaiveDate {
        match field {
            DateField::Start => self.draft.start_date,
            DateField::End => self.draft.end_date,
        }
    }

    /// Whether the picker for `field` would accept `date`.
    pub fn check(&self, field: DateField, date: NaiveDate, today: NaiveDate) -> Result<(), PickRejection> {
        if date > today {
            return Err(PickRejection::InFuture(date));
        }
        match field {
            DateField::Start if date > self.draft.end_date => Err(PickRejection::AfterEnd(date)),
            DateField::End if date < self.draft.start_date => Err(PickRejection::BeforeStart(date)),
            _ => Ok(()),
        }
    }

    pub fn set_date(&mut self, field: DateField, date: NaiveDate, today: NaiveDate) -> Result<(), PickRejection> {
        self.check(field, date, today)?;
        match field {
            DateField::Start => self.draft.start_date = date,
            DateField::End => self.draft.end_date = date,
        }
        Ok(())
    }

    /// Move a date by `days` (negative moves back), subject to the picker rules.
    pub fn shift_date(
        &mut self,
        field: DateField,
        days: i64,
        today: NaiveDate,
    ) -> Result<NaiveDate, PickRejection> {
        let current = self.date(field);
        let step = Days::new(days.unsigned_abs());
        let target = if days >= 0 {
            current.checked_add_days(step)
        } else {
            current.checked_sub_days(step)
        }
        .unwrap_or(current);
        self.set_date(field, target, today)?;
        Ok(target)
    }

    /// Hand a full copy of the draft to the listener.
    pub fn apply<L: ParamsListener + ?Sized>(&self, listener: &mut L) {
        listener.on_params_change(self.draft.clone());
    }
}

impl Default for ParamsDraft {
    fn default() -> Self {
        Self::new(DashboardParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 1)
    }

    #[derive(Default)]
    struct Recorder(Vec<DashboardParams>);

    impl ParamsListener for Recorder {
        fn on_params_change(&mut self, params: DashboardParams) {
            self.0.push(params);
        }
    }

    #[test]
    fn edits_do_not_propagate_until_apply() {
        let mut draft = ParamsDraft::default();
        let mut rec = Recorder::default();
        draft.set_asset(Asset::Msft);
        draft.set_strategy(Strategy::Momentum);
        assert!(rec.0.is_empty());

        draft.apply(&mut rec);
        assert_eq!(rec.0.len(), 1);
        assert_eq!(rec.0[0].asset, Asset::Msft);
        assert_eq!(rec.0[0].strategy, Strategy::Momentum);
    }

    #[test]
    fn start_cannot_pass_end() {
        let mut draft = ParamsDraft::default();
        assert_eq!(
            draft.set_date(DateField::Start, date(2024, 1, 5), today()),
            Err(PickRejection::AfterEnd(date(2024, 1, 5)))
        );
        assert!(draft.set_date(DateField::Start, date(2023, 12, 31), today()).is_ok());
    }

    #[test]
    fn end_cannot_precede_start() {
        let mut draft = ParamsDraft::default();
        assert_eq!(
            draft.set_date(DateField::End, date(2022, 12, 31), today()),
            Err(PickRejection::BeforeStart(date(2022, 12, 31)))
        );
        assert_eq!(draft.params().end_date, date(2023, 12, 31));
    }

    #[test]
    fn future_dates_refused() {
        let mut draft = ParamsDraft::default();
        assert_eq!(
            draft.set_date(DateField::End, date(2024, 6, 2), today()),
            Err(PickRejection::InFuture(date(2024, 6, 2)))
        );
        assert!(draft.set_date(DateField::End, today(), today()).is_ok());
    }

    #[test]
    fn shift_respects_rules() {
        let mut draft = ParamsDraft::default();
        assert_eq!(draft.shift_date(DateField::Start, 7, today()), Ok(date(2023, 1, 8)));
        assert_eq!(draft.shift_date(DateField::End, -1, today()), Ok(date(2023, 12, 30)));
        // Pushing end before start is refused and leaves the draft untouched.
        assert!(draft.shift_date(DateField::End, -400, today()).is_err());
        assert_eq!(draft.date(DateField::End), date(2023, 12, 30));
    }

    #[test]
    fn cycling_asset_and_strategy() {
        let mut draft = ParamsDraft::default();
        draft.cycle_asset(true);
        assert_eq!(draft.params().asset, Asset::Qqq);
        draft.cycle_strategy(false);
        assert_eq!(draft.params().strategy, Strategy::Momentum);
    }
}
