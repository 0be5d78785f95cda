//! Persistence domain: boot-time load and save-on-room-entry.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{Health, PlayerStats};
use crate::persistence::store::{SAVE_PATH, SaveStore, keys};
use crate::rooms::RoomEnteredEvent;

pub(crate) fn open_save_store(mut commands: Commands) {
    commands.insert_resource(SaveStore::open(SAVE_PATH));
}

/// Apply saved player stats to a freshly spawned player.
pub(crate) fn apply_saved_stats(
    store: Option<Res<SaveStore>>,
    mut players: Query<(&mut Health, &mut PlayerStats), Added<PlayerStats>>,
) {
    let Some(store) = store else {
        return;
    };
    for (mut health, mut stats) in &mut players {
        if let Some(max_hp) = store.get_parsed::<f32>(keys::PLAYER_MAX_HP) {
            stats.max_hp = max_hp;
            health.max = max_hp;
            health.current = max_hp;
            info!("[SAVE] Restored player max hp {max_hp:.1}");
        }
    }
}

/// Write progress after every completed transition.
pub(crate) fn save_on_room_entered(
    mut entered: MessageReader<RoomEnteredEvent>,
    store: Option<ResMut<SaveStore>>,
    players: Query<&PlayerStats>,
) {
    let Some(mut store) = store else {
        return;
    };
    let mut dirty = false;
    for event in entered.read() {
        store.set(keys::CURRENT_ROOM, event.id);
        store.set(keys::ROOMS_VISITED, event.rooms_visited);
        if let Some(stats) = players.iter().next() {
            store.set(keys::PLAYER_MAX_HP, stats.max_hp);
        }
        dirty = true;
    }
    if dirty {
        match store.write() {
            Ok(()) => info!("[SAVE] Progress saved"),
            Err(err) => warn!("[SAVE] Failed to write save file: {err}"),
        }
    }
}
