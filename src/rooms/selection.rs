//! Rooms domain: pluggable next-room selection.

use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// How the next room is chosen when a door is activated. Kept as a
/// replaceable policy resource so variants can be swapped without touching
/// the door or transition code.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum SelectionPolicy {
    UniformRandom,
    /// Every `n`th visit routes to `special_room` instead of rolling.
    EveryNthSpecial { n: u32, special_room: usize },
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::UniformRandom
    }
}

/// Seeded RNG dedicated to room selection, so a run's room order is
/// reproducible from the run seed alone.
#[derive(Resource, Debug)]
pub struct RoomRng(pub ChaCha8Rng);

impl RoomRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for RoomRng {
    fn default() -> Self {
        Self::from_seed(0)
    }
}

/// Pick the catalog index of the next room. `rooms_visited` is the count
/// before this transition, so the upcoming visit is `rooms_visited + 1`.
pub fn select_next(
    policy: &SelectionPolicy,
    rng: &mut RoomRng,
    catalog_len: usize,
    rooms_visited: u32,
) -> usize {
    if catalog_len == 0 {
        return 0;
    }
    match policy {
        SelectionPolicy::UniformRandom => rng.0.random_range(0..catalog_len),
        SelectionPolicy::EveryNthSpecial { n, special_room } => {
            let n = (*n).max(1);
            if (rooms_visited + 1) % n == 0 {
                (*special_room).min(catalog_len - 1)
            } else {
                rng.0.random_range(0..catalog_len)
            }
        }
    }
}
