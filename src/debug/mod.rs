//! Dev-only helpers, compiled behind the `dev-tools` feature.

use bevy::prelude::*;

use crate::combat::Enemy;
use crate::rooms::{
    RoomCatalog, RoomTarget, RoomTransitionController, TransitionRequest,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, reload_current_room);
    }
}

/// R reloads the current room in place: clears its enemies and re-runs the
/// transition without touching the visit counter.
fn reload_current_room(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    catalog: Option<Res<RoomCatalog>>,
    mut controller: ResMut<RoomTransitionController>,
    enemies: Query<Entity, With<Enemy>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }
    let Some(catalog) = catalog else {
        return;
    };

    for entity in &enemies {
        commands.entity(entity).despawn();
    }

    let identity = controller.identity();
    let target = if identity.is_tutorial {
        RoomTarget::Tutorial
    } else {
        RoomTarget::Indexed(identity.id)
    };
    let request = TransitionRequest {
        target,
        increment_visits: false,
    };
    match controller.try_begin(request, catalog.rooms.len()) {
        Ok(()) => info!("[DEBUG] Reloading current room"),
        Err(err) => warn!("[DEBUG] Reload rejected: {err}"),
    }
}
