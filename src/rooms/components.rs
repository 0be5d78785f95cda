//! Rooms domain: components owned by room content.

use bevy::prelude::*;

/// Tags every entity belonging to the current room. The transition driver
/// despawns all `RoomContent` at the start of a swap, so doors, walls, the
/// spawn marker, and enemies die with the room they belong to.
#[derive(Component, Debug)]
pub struct RoomContent;

/// Anchor point where the player is placed on room entry.
#[derive(Component, Debug)]
pub struct SpawnMarker;

/// A door leading out of the current room.
///
/// Doors are room content: a door unlocked by clearing the room is destroyed
/// with that room, so re-locking on entry is enforced by lifecycle rather
/// than an explicit reset.
#[derive(Component, Debug)]
pub struct DoorGate {
    pub locked: bool,
}
