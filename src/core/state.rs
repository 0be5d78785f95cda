//! Core domain: top-level game states.

use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// One frame of startup so loaded resources exist before play begins.
    #[default]
    Boot,
    Playing,
}
