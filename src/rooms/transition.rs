//! Rooms domain: the transition state machine and its controller resource.

use bevy::prelude::*;
use std::fmt;

/// Failures local to the transition controller. None of these crosses into
/// other systems; the worst case (`MissingSpawnMarker`) parks the controller
/// in a diagnosable faulted phase with the screen still obscured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    InvalidRoomIndex,
    MissingSpawnMarker,
    SpawnValidationTimeout,
    ConcurrentTransitionRejected,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRoomIndex => write!(f, "target room index is outside the catalog"),
            Self::MissingSpawnMarker => write!(f, "generated room content has no spawn marker"),
            Self::SpawnValidationTimeout => {
                write!(f, "player did not reach the spawn deadzone in time")
            }
            Self::ConcurrentTransitionRejected => {
                write!(f, "a transition is already in progress")
            }
        }
    }
}

/// Where a transition is headed. The tutorial sits outside the random
/// catalog and is only reachable explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomTarget {
    Tutorial,
    Indexed(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRequest {
    pub target: RoomTarget,
    pub increment_visits: bool,
}

/// Phases of the transition sequence. Every timed wait is a value carried
/// by the phase and advanced once per tick; no two phases ever overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    Idle,
    FadingOut,
    Swapping,
    /// Newly spawned content gets this many whole ticks to finish its own
    /// initialization before the driver queries it.
    Settling { ticks: u32 },
    Placing { freeze_remaining: f32 },
    ValidatingSpawn { elapsed: f32 },
    FadingIn,
    /// Stuck but diagnosable; a new request is accepted from here.
    Faulted(TransitionError),
}

/// Identity of the active room, replaced atomically on swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomIdentity {
    pub id: usize,
    pub is_tutorial: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct TransitionTuning {
    pub fade_duration: f32,
    pub freeze_duration: f32,
    pub spawn_deadzone_distance: f32,
    pub spawn_validation_timeout: f32,
    pub settle_ticks: u32,
    pub door_interact_radius: f32,
}

impl Default for TransitionTuning {
    fn default() -> Self {
        Self {
            fade_duration: 0.5,
            freeze_duration: 0.3,
            spawn_deadzone_distance: 48.0,
            spawn_validation_timeout: 2.0,
            settle_ticks: 1,
            door_interact_radius: 56.0,
        }
    }
}

/// Owns room identity, the visit counter, the live enemy count, and the
/// transition state machine. Doors, enemies, and the boot sequence all go
/// through this resource instead of poking room state directly.
#[derive(Resource, Debug)]
pub struct RoomTransitionController {
    pub(crate) identity: RoomIdentity,
    pub(crate) rooms_visited: u32,
    pub(crate) enemies_alive: u32,
    pub(crate) phase: TransitionPhase,
    pub(crate) pending: Option<TransitionRequest>,
    pub(crate) last_error: Option<TransitionError>,
}

impl Default for RoomTransitionController {
    fn default() -> Self {
        Self {
            identity: RoomIdentity {
                id: 0,
                is_tutorial: true,
            },
            rooms_visited: 0,
            enemies_alive: 0,
            phase: TransitionPhase::Idle,
            pending: None,
            last_error: None,
        }
    }
}

impl RoomTransitionController {
    /// Admission control for a new transition.
    ///
    /// Only one transition may be in flight: requests made while the phase
    /// is neither `Idle` nor `Faulted` are dropped with no side effects.
    /// Accepting from `Faulted` is the recovery path out of a
    /// missing-spawn-marker stuck state. An indexed target outside the
    /// catalog is rejected before any state changes.
    pub fn try_begin(
        &mut self,
        request: TransitionRequest,
        catalog_len: usize,
    ) -> Result<(), TransitionError> {
        if !matches!(
            self.phase,
            TransitionPhase::Idle | TransitionPhase::Faulted(_)
        ) {
            return Err(TransitionError::ConcurrentTransitionRejected);
        }
        if let RoomTarget::Indexed(index) = request.target {
            if index >= catalog_len {
                return Err(TransitionError::InvalidRoomIndex);
            }
        }
        self.pending = Some(request);
        self.phase = TransitionPhase::FadingOut;
        Ok(())
    }

    pub fn register_enemy(&mut self) {
        self.enemies_alive = self.enemies_alive.saturating_add(1);
    }

    /// Decrement the live enemy count, clamped at zero.
    /// Returns true exactly on the one-to-zero crossing.
    pub fn unregister_enemy(&mut self) -> bool {
        if self.enemies_alive == 0 {
            return false;
        }
        self.enemies_alive -= 1;
        self.enemies_alive == 0
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == TransitionPhase::Idle
    }

    pub fn identity(&self) -> RoomIdentity {
        self.identity
    }

    pub fn current_room_id(&self) -> usize {
        self.identity.id
    }

    pub fn rooms_visited(&self) -> u32 {
        self.rooms_visited
    }

    pub fn enemies_alive(&self) -> u32 {
        self.enemies_alive
    }

    pub fn last_error(&self) -> Option<TransitionError> {
        self.last_error
    }
}
