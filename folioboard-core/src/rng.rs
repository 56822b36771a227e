//! Seedable random sources.
//!
//! The dashboard has two independent consumers of randomness: the series
//! generator and the metric jitter. A master seed is expanded into one
//! sub-seed per stream via BLAKE3, so drawing jitter never shifts the walk
//! that a seeded series would produce. Without a master seed every stream is
//! seeded from OS entropy.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Named random streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Series,
    Jitter,
}

impl Stream {
    fn tag(self) -> &'static [u8] {
        match self {
            Stream::Series => b"series",
            Stream::Jitter => b"jitter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedHierarchy {
    master_seed: Option<u64>,
}

impl SeedHierarchy {
    pub fn new(master_seed: Option<u64>) -> Self {
        Self { master_seed }
    }

    pub fn seeded(master_seed: u64) -> Self {
        Self::new(Some(master_seed))
    }

    pub fn entropy() -> Self {
        Self::new(None)
    }

    pub fn master_seed(&self) -> Option<u64> {
        self.master_seed
    }

    pub fn is_deterministic(&self) -> bool {
        self.master_seed.is_some()
    }

    /// Derive the sub-seed for a stream. `None` when running unseeded.
    pub fn sub_seed(&self, stream: Stream) -> Option<u64> {
        let master = self.master_seed?;
        let mut hasher = blake3::Hasher::new();
        hasher.update(&master.to_le_bytes());
        hasher.update(stream.tag());
        let hash = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        Some(u64::from_le_bytes(bytes))
    }

    pub fn rng_for(&self, stream: Stream) -> StdRng {
        match self.sub_seed(stream) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for SeedHierarchy {
    fn default() -> Self {
        Self::entropy()
    }
}
