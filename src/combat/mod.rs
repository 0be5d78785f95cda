//! Combat domain: enemies, attack styles, projectiles, and player damage.

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    AttackStyle, AttackTimer, Enemy, EnemyMotion, Health, Invulnerable, PlayerStats, Projectile,
};
pub use events::{PlayerDamagedEvent, PlayerDiedEvent};

use bevy::prelude::*;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<components::CombatTuning>()
            .add_message::<PlayerDamagedEvent>()
            .add_message::<PlayerDiedEvent>()
            .add_systems(
                Update,
                (
                    systems::tick_invulnerability,
                    systems::apply_enemy_movement,
                    systems::execute_enemy_attacks,
                    systems::update_projectiles,
                    systems::player_attack,
                    systems::apply_player_damage,
                    systems::despawn_dead_enemies,
                )
                    .chain(),
            );
    }
}
