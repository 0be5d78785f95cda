//! Combat domain: components and combat-related state types.

use bevy::prelude::*;

/// Marks an entity as a hostile enemy. Registration with the room
/// transition controller keys off this component's add/remove lifecycle.
#[derive(Component, Debug)]
pub struct Enemy;

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Invulnerability window - entity cannot take damage while active.
/// The window alone suppresses repeat hits; there is no per-tick dedup.
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub timer: f32,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.timer > 0.0
    }
}

/// Player stat block. Defense reduces incoming damage to a floor of zero.
#[derive(Component, Debug, Clone)]
pub struct PlayerStats {
    pub max_hp: f32,
    pub defense: f32,
    pub attack_damage: f32,
    pub attack_range: f32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            max_hp: 3.0,
            defense: 0.0,
            attack_damage: 1.0,
            attack_range: 60.0,
        }
    }
}

impl PlayerStats {
    /// Damage actually taken after defense, never below zero.
    pub fn adjusted_damage(&self, raw: f32) -> f32 {
        (raw - self.defense).max(0.0)
    }
}

/// How an enemy fights. A single dispatch point replaces the original
/// per-style subclass hierarchy.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum AttackStyle {
    Melee {
        range: f32,
        damage: f32,
        cooldown: f32,
    },
    Ranged {
        preferred_distance: f32,
        projectile_speed: f32,
        damage: f32,
        cooldown: f32,
    },
}

impl AttackStyle {
    pub fn melee() -> Self {
        Self::Melee {
            range: 48.0,
            damage: 1.0,
            cooldown: 1.0,
        }
    }

    pub fn ranged() -> Self {
        Self::Ranged {
            preferred_distance: 180.0,
            projectile_speed: 400.0,
            damage: 1.0,
            cooldown: 1.5,
        }
    }

    pub fn cooldown(&self) -> f32 {
        match self {
            Self::Melee { cooldown, .. } | Self::Ranged { cooldown, .. } => *cooldown,
        }
    }
}

/// Seconds until the owning enemy may attack again.
#[derive(Component, Debug, Default)]
pub struct AttackTimer {
    pub remaining: f32,
}

impl AttackTimer {
    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// Per-enemy locomotion tuning.
#[derive(Component, Debug, Clone)]
pub struct EnemyMotion {
    pub move_speed: f32,
}

impl Default for EnemyMotion {
    fn default() -> Self {
        Self { move_speed: 120.0 }
    }
}

/// A projectile in flight toward the player.
#[derive(Component, Debug)]
pub struct Projectile {
    pub velocity: Vec2,
    pub damage: f32,
    pub lifetime: f32,
}

#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    /// Invulnerability window granted after the player takes a hit.
    pub invulnerability_window: f32,
    /// Radius within which a projectile counts as hitting the player.
    pub projectile_hit_radius: f32,
    /// Slack band added to ranged keep-distance checks.
    pub ranged_slack: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            invulnerability_window: 0.8,
            projectile_hit_radius: 20.0,
            ranged_slack: 16.0,
        }
    }
}
