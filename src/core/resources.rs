//! Core domain: per-run configuration.

use bevy::prelude::*;

/// Configuration fixed for the lifetime of one run.
#[derive(Resource, Debug, Clone)]
pub struct RunConfig {
    /// Seed for the room-selection RNG; the room order of a run is
    /// reproducible from this value alone.
    pub seed: u64,
}

impl RunConfig {
    /// Seed from `GALLEY_SEED` when set, otherwise roll a fresh one.
    pub fn from_env() -> Self {
        let seed = std::env::var("GALLEY_SEED")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(rand::random);
        Self { seed }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { seed: 0 }
    }
}
