//! Rooms domain: catalog loading, the transition driver, enemy tracking,
//! and door activation.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::camera::RefreshCameraBounds;
use crate::combat::Enemy;
use crate::fade::ScreenFade;
use crate::movement::{InputFreeze, MovementInput, Player, apply_pose};
use crate::rooms::catalog::{CATALOG_PATH, RoomCatalog};
use crate::rooms::components::{DoorGate, RoomContent, SpawnMarker};
use crate::rooms::events::{RoomClearedEvent, RoomEnteredEvent};
use crate::rooms::selection::{RoomRng, SelectionPolicy, select_next};
use crate::rooms::spawn::spawn_room_content;
use crate::rooms::transition::{
    RoomIdentity, RoomTarget, RoomTransitionController, TransitionError, TransitionPhase,
    TransitionRequest, TransitionTuning,
};

pub(crate) fn load_room_catalog(mut commands: Commands) {
    let catalog = match RoomCatalog::load(CATALOG_PATH) {
        Ok(catalog) => {
            info!("[ROOMS] Loaded {} rooms from {}", catalog.rooms.len(), CATALOG_PATH);
            catalog
        }
        Err(err) => {
            error!("[ROOMS] Failed to load room catalog ({err}), using builtin rooms");
            RoomCatalog::builtin()
        }
    };
    commands.insert_resource(catalog);
}

/// Advance the transition state machine by one tick.
///
/// Each phase is a suspension point: fade completion, the one-tick content
/// settle, the freeze window, and the per-tick deadzone poll all park here
/// between frames. Nothing outside this system mutates the phase except
/// [`RoomTransitionController::try_begin`].
pub(crate) fn drive_transition(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<TransitionTuning>,
    catalog: Res<RoomCatalog>,
    mut controller: ResMut<RoomTransitionController>,
    mut fade: ResMut<ScreenFade>,
    mut refresh: MessageWriter<RefreshCameraBounds>,
    mut entered: MessageWriter<RoomEnteredEvent>,
    content: Query<Entity, With<RoomContent>>,
    markers: Query<&Transform, (With<SpawnMarker>, Without<Player>)>,
    mut doors: Query<&mut DoorGate>,
    mut player: Query<(Entity, &mut Transform, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    match controller.phase {
        TransitionPhase::Idle | TransitionPhase::Faulted(_) => {}

        TransitionPhase::FadingOut => {
            if fade.reached(1.0) {
                controller.phase = TransitionPhase::Swapping;
            } else if !fade.is_ramping() {
                fade.ramp_to(1.0, tuning.fade_duration);
            }
        }

        TransitionPhase::Swapping => {
            let Some(request) = controller.pending.take() else {
                warn!("[TRANSITION] Swap reached with no pending request");
                controller.phase = TransitionPhase::Idle;
                return;
            };

            let (def, identity) = match request.target {
                RoomTarget::Tutorial => (
                    &catalog.tutorial,
                    RoomIdentity {
                        id: 0,
                        is_tutorial: true,
                    },
                ),
                RoomTarget::Indexed(index) => {
                    let Some(def) = catalog.rooms.get(index) else {
                        // Catalog shrank between admission and swap.
                        error!("[TRANSITION] Room index {index} vanished from the catalog");
                        controller.last_error = Some(TransitionError::InvalidRoomIndex);
                        controller.phase = TransitionPhase::Faulted(TransitionError::InvalidRoomIndex);
                        return;
                    };
                    (
                        def,
                        RoomIdentity {
                            id: index,
                            is_tutorial: false,
                        },
                    )
                }
            };

            for entity in &content {
                commands.entity(entity).despawn();
            }
            spawn_room_content(&mut commands, def);

            controller.identity = identity;
            controller.enemies_alive = 0;
            if request.increment_visits {
                controller.rooms_visited += 1;
            }
            info!(
                "[TRANSITION] Swapped to room '{}' (visit {})",
                def.name, controller.rooms_visited
            );
            controller.phase = TransitionPhase::Settling {
                ticks: tuning.settle_ticks,
            };
        }

        TransitionPhase::Settling { ticks } => {
            if ticks > 0 {
                controller.phase = TransitionPhase::Settling { ticks: ticks - 1 };
                return;
            }
            let Some((entity, mut transform, mut velocity)) = player.iter_mut().next() else {
                return;
            };
            match markers.iter().next() {
                Some(marker) => {
                    apply_pose(
                        &mut transform,
                        &mut velocity,
                        marker.translation.truncate(),
                        marker.rotation,
                    );
                    commands
                        .entity(entity)
                        .insert(InputFreeze::new(tuning.freeze_duration));
                    controller.phase = TransitionPhase::Placing {
                        freeze_remaining: tuning.freeze_duration,
                    };
                }
                None => {
                    // Screen stays obscured; a new request recovers from here.
                    error!("[TRANSITION] Generated room content has no spawn marker");
                    controller.last_error = Some(TransitionError::MissingSpawnMarker);
                    controller.phase =
                        TransitionPhase::Faulted(TransitionError::MissingSpawnMarker);
                }
            }
        }

        TransitionPhase::Placing { freeze_remaining } => {
            let remaining = freeze_remaining - dt;
            if remaining > 0.0 {
                controller.phase = TransitionPhase::Placing {
                    freeze_remaining: remaining,
                };
                return;
            }
            // Re-apply the pose once the freeze ends, in case something
            // nudged the player during the window.
            if let (Some(marker), Some((_, mut transform, mut velocity))) =
                (markers.iter().next(), player.iter_mut().next())
            {
                apply_pose(
                    &mut transform,
                    &mut velocity,
                    marker.translation.truncate(),
                    marker.rotation,
                );
            }
            controller.phase = TransitionPhase::ValidatingSpawn { elapsed: 0.0 };
        }

        TransitionPhase::ValidatingSpawn { elapsed } => {
            let Some(marker) = markers.iter().next() else {
                error!("[TRANSITION] Spawn marker disappeared during validation");
                controller.last_error = Some(TransitionError::MissingSpawnMarker);
                controller.phase = TransitionPhase::Faulted(TransitionError::MissingSpawnMarker);
                return;
            };
            let Some((_, mut transform, mut velocity)) = player.iter_mut().next() else {
                return;
            };

            let marker_pos = marker.translation.truncate();
            let distance = transform.translation.truncate().distance(marker_pos);
            if distance > tuning.spawn_deadzone_distance {
                let elapsed = elapsed + dt;
                if elapsed < tuning.spawn_validation_timeout {
                    controller.phase = TransitionPhase::ValidatingSpawn { elapsed };
                    return;
                }
                // Hard recovery: force the player onto the marker and move on.
                warn!(
                    "[TRANSITION] Spawn validation timed out at distance {distance:.1}, forcing placement"
                );
                controller.last_error = Some(TransitionError::SpawnValidationTimeout);
                apply_pose(&mut transform, &mut velocity, marker_pos, marker.rotation);
            }

            refresh.write(RefreshCameraBounds);
            let unlock = controller.enemies_alive == 0;
            for mut door in &mut doors {
                door.locked = !unlock;
            }
            if unlock {
                info!("[TRANSITION] Room has no enemies, doors open");
            }
            controller.phase = TransitionPhase::FadingIn;
        }

        TransitionPhase::FadingIn => {
            if fade.reached(0.0) {
                controller.phase = TransitionPhase::Idle;
                let identity = controller.identity;
                entered.write(RoomEnteredEvent {
                    id: identity.id,
                    is_tutorial: identity.is_tutorial,
                    rooms_visited: controller.rooms_visited,
                });
                info!("[TRANSITION] Transition complete, controller idle");
            } else if !fade.is_ramping() {
                fade.ramp_to(0.0, tuning.fade_duration);
            }
        }
    }
}

/// Enemies self-register as they are spawned. Runs after the driver so
/// content spawned during a swap is counted the same tick.
pub(crate) fn track_enemy_spawns(
    spawned: Query<Entity, Added<Enemy>>,
    mut controller: ResMut<RoomTransitionController>,
) {
    for _ in &spawned {
        controller.register_enemy();
    }
}

/// Enemies self-unregister on despawn, covering death and abnormal removal.
/// The one-to-zero crossing unlocks every current-room door exactly once.
/// Old-room enemies removed during a swap are harmless here: the count was
/// already reset to zero, so no crossing can fire.
pub(crate) fn track_enemy_deaths(
    mut removed: RemovedComponents<Enemy>,
    mut controller: ResMut<RoomTransitionController>,
    mut doors: Query<&mut DoorGate>,
    mut cleared: MessageWriter<RoomClearedEvent>,
) {
    for _ in removed.read() {
        if controller.unregister_enemy() {
            info!("[ROOMS] Room cleared, unlocking doors");
            for mut door in &mut doors {
                door.locked = false;
            }
            cleared.write(RoomClearedEvent);
        }
    }
}

/// Start a transition when the player interacts next to an unlocked door.
/// Activation while a transition is in flight is declined without logging,
/// matching the one-transition-at-a-time admission policy.
pub(crate) fn activate_doors(
    input: Res<MovementInput>,
    tuning: Res<TransitionTuning>,
    policy: Res<SelectionPolicy>,
    mut rng: ResMut<RoomRng>,
    catalog: Res<RoomCatalog>,
    mut controller: ResMut<RoomTransitionController>,
    player: Query<&Transform, With<Player>>,
    doors: Query<(&Transform, &DoorGate), Without<Player>>,
) {
    if !input.interact_just_pressed {
        return;
    }
    let Some(player_transform) = player.iter().next() else {
        return;
    };
    if !controller.is_idle() {
        return;
    }
    let player_pos = player_transform.translation.truncate();

    for (transform, door) in &doors {
        if transform.translation.truncate().distance(player_pos) > tuning.door_interact_radius {
            continue;
        }
        if door.locked {
            info!("[ROOMS] Door is locked");
            continue;
        }

        let next = select_next(&policy, &mut rng, catalog.rooms.len(), controller.rooms_visited);
        let request = TransitionRequest {
            target: RoomTarget::Indexed(next),
            increment_visits: true,
        };
        match controller.try_begin(request, catalog.rooms.len()) {
            Ok(()) => info!("[ROOMS] Door activated, heading to room {next}"),
            Err(err) => warn!("[ROOMS] Transition rejected: {err}"),
        }
        break;
    }
}

/// Door sprites mirror their locked state.
pub(crate) fn sync_door_visuals(mut doors: Query<(&DoorGate, &mut Sprite), Changed<DoorGate>>) {
    for (door, mut sprite) in &mut doors {
        sprite.color = if door.locked {
            Color::srgb(0.35, 0.2, 0.15)
        } else {
            Color::srgb(0.3, 0.7, 0.35)
        };
    }
}
