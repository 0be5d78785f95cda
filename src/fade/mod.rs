//! Fade domain: screen fade overlay and ramp control.

mod overlay;
mod systems;

#[cfg(test)]
mod tests;

pub use overlay::{FadeOverlay, FadeRamp, ScreenFade};

use bevy::prelude::*;

pub struct FadePlugin;

impl Plugin for FadePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenFade>()
            .add_systems(Startup, systems::spawn_fade_overlay)
            .add_systems(
                Update,
                (systems::tick_fade, systems::apply_fade_overlay).chain(),
            );
    }
}
