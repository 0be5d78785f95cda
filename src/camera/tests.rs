//! Camera domain: tests for bounds derivation, clamping, and smoothing.

use bevy::prelude::*;

use super::resources::smooth_damp;
use super::systems::compute_bounds;
use super::{CameraClampRect, ClampAxis};

fn room_walls(width: f32, height: f32, thickness: f32) -> Vec<(Vec2, Vec2)> {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let ht = thickness * 0.5;
    vec![
        (Vec2::new(-hw - ht, 0.0), Vec2::new(ht, hh)),
        (Vec2::new(hw + ht, 0.0), Vec2::new(ht, hh)),
        (Vec2::new(0.0, -hh - ht), Vec2::new(hw + thickness, ht)),
        (Vec2::new(0.0, hh + ht), Vec2::new(hw + thickness, ht)),
    ]
}

// -----------------------------------------------------------------------------
// compute_bounds
// -----------------------------------------------------------------------------

#[test]
fn test_no_walls_yields_unbounded() {
    let bounds = compute_bounds(std::iter::empty());
    assert!(bounds.is_unbounded());
}

#[test]
fn test_bounds_enclose_room_walls() {
    let bounds = compute_bounds(room_walls(800.0, 500.0, 40.0).into_iter());
    assert_eq!(bounds.horizontal, ClampAxis::X);
    assert!((bounds.left - -440.0).abs() < 1.0e-3);
    assert!((bounds.right - 440.0).abs() < 1.0e-3);
    assert!((bounds.bottom - -290.0).abs() < 1.0e-3);
    assert!((bounds.top - 290.0).abs() < 1.0e-3);
}

#[test]
fn test_rotated_room_picks_larger_spread_axis() {
    // Tall room: the y spread is larger, so y becomes the horizontal axis.
    let bounds = compute_bounds(room_walls(400.0, 900.0, 40.0).into_iter());
    assert_eq!(bounds.horizontal, ClampAxis::Y);
    assert!(bounds.right > bounds.top);
}

// -----------------------------------------------------------------------------
// clamp_focus
// -----------------------------------------------------------------------------

#[test]
fn test_unbounded_rect_never_clamps() {
    let bounds = CameraClampRect::unbounded();
    let desired = Vec2::new(12_345.0, -9_876.0);
    assert_eq!(bounds.clamp_focus(desired, Vec2::new(640.0, 360.0)), desired);
}

#[test]
fn test_clamp_focus_insets_by_half_extents() {
    let bounds = CameraClampRect {
        left: -400.0,
        right: 400.0,
        bottom: -300.0,
        top: 300.0,
        horizontal: ClampAxis::X,
    };
    let half = Vec2::new(100.0, 50.0);

    let clamped = bounds.clamp_focus(Vec2::new(1000.0, -1000.0), half);
    assert_eq!(clamped, Vec2::new(300.0, -250.0));

    // Inside the inset rect: untouched.
    let inside = Vec2::new(10.0, -20.0);
    assert_eq!(bounds.clamp_focus(inside, half), inside);
}

#[test]
fn test_inverted_range_collapses_to_midpoint() {
    // Room narrower than the viewport on x.
    let bounds = CameraClampRect {
        left: -50.0,
        right: 50.0,
        bottom: -300.0,
        top: 300.0,
        horizontal: ClampAxis::X,
    };
    let clamped = bounds.clamp_focus(Vec2::new(500.0, 0.0), Vec2::new(100.0, 50.0));
    assert_eq!(clamped.x, 0.0);
    assert!(clamped.x.is_finite());
}

#[test]
fn test_swapped_axis_clamps_y_with_horizontal_limits() {
    let bounds = CameraClampRect {
        left: -400.0,
        right: 400.0,
        bottom: -100.0,
        top: 100.0,
        horizontal: ClampAxis::Y,
    };
    let half = Vec2::new(100.0, 50.0);
    let clamped = bounds.clamp_focus(Vec2::new(1000.0, 1000.0), half);
    // y runs along the horizontal limits, x along the vertical ones.
    assert_eq!(clamped.y, 300.0);
    assert_eq!(clamped.x, 50.0);
}

// -----------------------------------------------------------------------------
// smooth_damp
// -----------------------------------------------------------------------------

#[test]
fn test_smooth_damp_converges_without_overshoot() {
    let target = Vec2::new(100.0, 0.0);
    let mut current = Vec2::ZERO;
    let mut velocity = Vec2::ZERO;

    for _ in 0..120 {
        current = smooth_damp(current, target, &mut velocity, 0.08, 1.0 / 60.0);
        assert!(current.x <= target.x + 1.0e-3, "overshot: {}", current.x);
    }
    assert!((current - target).length() < 1.0);
}

#[test]
fn test_smooth_damp_holds_at_target() {
    let target = Vec2::new(5.0, 5.0);
    let mut velocity = Vec2::ZERO;
    let next = smooth_damp(target, target, &mut velocity, 0.08, 1.0 / 60.0);
    assert!((next - target).length() < 1.0e-4);
}
