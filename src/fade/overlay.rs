//! Fade domain: fade level state and overlay marker.

use bevy::prelude::*;

/// Full-screen overlay entity whose sprite alpha mirrors the fade level.
#[derive(Component, Debug)]
pub struct FadeOverlay;

/// A single in-flight fade ramp, linear in elapsed-time fraction.
#[derive(Debug, Clone)]
pub struct FadeRamp {
    pub from: f32,
    pub to: f32,
    pub elapsed: f32,
    pub duration: f32,
}

/// Screen obscurity level: 0.0 = fully visible, 1.0 = fully obscured.
/// Owned exclusively by the fade systems; other domains only call [`ScreenFade::ramp_to`].
#[derive(Resource, Debug)]
pub struct ScreenFade {
    level: f32,
    ramp: Option<FadeRamp>,
}

impl Default for ScreenFade {
    fn default() -> Self {
        // Boot starts obscured so the first room entry fades in cleanly.
        Self {
            level: 1.0,
            ramp: None,
        }
    }
}

impl ScreenFade {
    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn is_ramping(&self) -> bool {
        self.ramp.is_some()
    }

    /// True once the level sits at `target` with no ramp in flight.
    pub fn reached(&self, target: f32) -> bool {
        self.ramp.is_none() && (self.level - target).abs() < f32::EPSILON
    }

    /// Begin a ramp toward `target` over `duration` seconds.
    ///
    /// At most one ramp may be in flight; calls made while a ramp is active
    /// are ignored. Ramping to the current level completes immediately, so
    /// requesting the same target twice is idempotent.
    pub fn ramp_to(&mut self, target: f32, duration: f32) {
        let target = target.clamp(0.0, 1.0);
        if self.ramp.is_some() {
            info!("[FADE] ramp_to({}) ignored, ramp already active", target);
            return;
        }
        if (self.level - target).abs() < f32::EPSILON {
            return;
        }
        if duration <= 0.0 {
            self.level = target;
            return;
        }
        self.ramp = Some(FadeRamp {
            from: self.level,
            to: target,
            elapsed: 0.0,
            duration,
        });
    }

    /// Advance the active ramp by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let Some(ramp) = self.ramp.as_mut() else {
            return;
        };
        ramp.elapsed += dt;
        let t = (ramp.elapsed / ramp.duration).clamp(0.0, 1.0);
        self.level = ramp.from + (ramp.to - ramp.from) * t;
        if t >= 1.0 {
            self.level = ramp.to;
            self.ramp = None;
        }
    }
}
