//! Fade domain: tests for ramp progression and the single-ramp policy.

use super::ScreenFade;

#[test]
fn test_default_starts_obscured() {
    let fade = ScreenFade::default();
    assert_eq!(fade.level(), 1.0);
    assert!(!fade.is_ramping());
    assert!(fade.reached(1.0));
}

#[test]
fn test_ramp_interpolates_linearly() {
    let mut fade = ScreenFade::default();
    fade.ramp_to(0.0, 0.5);
    assert!(fade.is_ramping());

    fade.tick(0.25);
    assert!((fade.level() - 0.5).abs() < 1.0e-5);

    fade.tick(0.25);
    assert_eq!(fade.level(), 0.0);
    assert!(!fade.is_ramping());
    assert!(fade.reached(0.0));
}

#[test]
fn test_ramp_clamps_past_duration() {
    let mut fade = ScreenFade::default();
    fade.ramp_to(0.0, 0.1);
    fade.tick(5.0);
    assert_eq!(fade.level(), 0.0);
    assert!(!fade.is_ramping());
}

#[test]
fn test_second_ramp_while_active_is_ignored() {
    let mut fade = ScreenFade::default();
    fade.ramp_to(0.0, 1.0);
    fade.tick(0.5);

    // A competing ramp back toward obscured must not take over.
    fade.ramp_to(1.0, 1.0);
    fade.tick(0.5);

    assert_eq!(fade.level(), 0.0);
}

#[test]
fn test_ramp_to_current_level_is_noop() {
    let mut fade = ScreenFade::default();
    fade.ramp_to(1.0, 0.5);
    assert!(!fade.is_ramping());
    assert!(fade.reached(1.0));
}

#[test]
fn test_zero_duration_snaps() {
    let mut fade = ScreenFade::default();
    fade.ramp_to(0.0, 0.0);
    assert_eq!(fade.level(), 0.0);
    assert!(!fade.is_ramping());
}

#[test]
fn test_target_clamped_to_unit_range() {
    let mut fade = ScreenFade::default();
    fade.ramp_to(3.0, 0.0);
    assert_eq!(fade.level(), 1.0);
    fade.ramp_to(-2.0, 0.0);
    assert_eq!(fade.level(), 0.0);
}
