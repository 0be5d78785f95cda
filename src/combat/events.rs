//! Combat domain: events for player damage and death.

use bevy::ecs::message::Message;

#[derive(Debug)]
pub struct PlayerDamagedEvent {
    pub amount: f32,
}

impl Message for PlayerDamagedEvent {}

#[derive(Debug)]
pub struct PlayerDiedEvent;

impl Message for PlayerDiedEvent {}
