//! Domain types: assets, strategies, dashboard parameters.

pub mod asset;
pub mod params;
pub mod strategy;

pub use asset::Asset;
pub use params::DashboardParams;
pub use strategy::Strategy;
