//! Fade domain: overlay spawn and per-tick ramp advancement.

use bevy::prelude::*;

use crate::fade::{FadeOverlay, ScreenFade};

/// Side length of the overlay quad, large enough to cover any clamped view.
const OVERLAY_SIZE: f32 = 100_000.0;
/// Z layer above room content, actors, and projectiles.
const OVERLAY_Z: f32 = 500.0;

pub(crate) fn spawn_fade_overlay(mut commands: Commands, fade: Res<ScreenFade>) {
    commands.spawn((
        FadeOverlay,
        Sprite {
            color: Color::srgba(0.0, 0.0, 0.0, fade.level()),
            custom_size: Some(Vec2::splat(OVERLAY_SIZE)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, OVERLAY_Z),
    ));
}

pub(crate) fn tick_fade(time: Res<Time>, mut fade: ResMut<ScreenFade>) {
    fade.tick(time.delta_secs());
}

pub(crate) fn apply_fade_overlay(
    fade: Res<ScreenFade>,
    mut overlay: Query<&mut Sprite, With<FadeOverlay>>,
) {
    for mut sprite in &mut overlay {
        sprite.color = Color::srgba(0.0, 0.0, 0.0, fade.level());
    }
}
