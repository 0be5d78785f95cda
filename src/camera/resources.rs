//! Camera domain: clamp rect, viewport extents, and smoothing state.

use bevy::prelude::*;

/// Marker for the camera entity whose anchor follows the player.
#[derive(Component, Debug)]
pub struct CameraAnchor;

/// Smooth-damp velocity state for the camera anchor.
#[derive(Component, Debug, Default)]
pub struct FollowVelocity(pub Vec2);

/// Which world axis the clamp rect treats as horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampAxis {
    #[default]
    X,
    Y,
}

/// Axis-aligned camera clamp rectangle in world units.
///
/// `horizontal` names the world axis mapped onto the left/right limits.
/// Rooms may be authored rotated by 90 degrees; the bounds refresh picks the
/// axis with the larger wall spread as horizontal so such rooms still clamp
/// along their long side.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraClampRect {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub horizontal: ClampAxis,
}

impl Default for CameraClampRect {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl CameraClampRect {
    /// Limit large enough to never clamp in practice.
    pub const UNBOUNDED_LIMIT: f32 = 1.0e6;

    pub fn unbounded() -> Self {
        Self {
            left: -Self::UNBOUNDED_LIMIT,
            right: Self::UNBOUNDED_LIMIT,
            bottom: -Self::UNBOUNDED_LIMIT,
            top: Self::UNBOUNDED_LIMIT,
            horizontal: ClampAxis::X,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.left <= -Self::UNBOUNDED_LIMIT
            && self.right >= Self::UNBOUNDED_LIMIT
            && self.bottom <= -Self::UNBOUNDED_LIMIT
            && self.top >= Self::UNBOUNDED_LIMIT
    }

    /// Clamp a desired focus point into the rect inset by the viewport
    /// half-extents. An inverted clamp range (room smaller than the viewport)
    /// collapses to the rect midpoint instead of producing an inverted clamp.
    pub fn clamp_focus(&self, desired: Vec2, half_extents: Vec2) -> Vec2 {
        let (h, v) = match self.horizontal {
            ClampAxis::X => (desired.x, desired.y),
            ClampAxis::Y => (desired.y, desired.x),
        };
        let h = clamp_or_midpoint(h, self.left + half_extents.x, self.right - half_extents.x);
        let v = clamp_or_midpoint(v, self.bottom + half_extents.y, self.top - half_extents.y);
        match self.horizontal {
            ClampAxis::X => Vec2::new(h, v),
            ClampAxis::Y => Vec2::new(v, h),
        }
    }
}

fn clamp_or_midpoint(value: f32, min: f32, max: f32) -> f32 {
    if min > max {
        (min + max) * 0.5
    } else {
        value.clamp(min, max)
    }
}

/// Visible half-extents of the camera viewport in world units.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraViewport {
    pub half_extents: Vec2,
}

impl Default for CameraViewport {
    fn default() -> Self {
        Self {
            half_extents: Vec2::new(640.0, 360.0),
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct CameraTuning {
    /// Time constant for the critically damped follow.
    pub smooth_time: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self { smooth_time: 0.08 }
    }
}

/// Critically damped smoothing toward a target with a fixed time constant.
/// Port of the standard SmoothDamp routine; never overshoots the target.
pub fn smooth_damp(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f32,
    dt: f32,
) -> Vec2 {
    let smooth_time = smooth_time.max(1.0e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    let change = current - target;
    let temp = (*velocity + change * omega) * dt;
    *velocity = (*velocity - temp * omega) * exp;
    let mut output = target + (change + temp) * exp;
    // Clamp to the target if the step carried past it.
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec2::ZERO;
    }
    output
}
