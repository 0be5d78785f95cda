//! Rooms domain: messages emitted by the transition controller.

use bevy::ecs::message::Message;

/// Emitted once per completed transition, after the fade-in finishes.
#[derive(Debug, Clone, Copy)]
pub struct RoomEnteredEvent {
    pub id: usize,
    pub is_tutorial: bool,
    pub rooms_visited: u32,
}

impl Message for RoomEnteredEvent {}

/// Emitted when the live enemy count crosses from one to zero.
#[derive(Debug, Clone, Copy)]
pub struct RoomClearedEvent;

impl Message for RoomClearedEvent {}
