// Host-side tests for the rotation momentum integrator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod momentum {
    include!("../src/core/momentum.rs");
}

use momentum::RotationState;

fn still() -> RotationState {
    RotationState {
        idle_step: 0.0,
        ..RotationState::default()
    }
}

#[test]
fn velocity_decays_geometrically_without_input() {
    let mut r = still();
    r.velocity = 0.5;
    let v0 = r.velocity;
    for n in 1..=10 {
        r.tick();
        let expected = v0 * r.friction.powi(n);
        assert!((r.velocity - expected).abs() < 1e-6, "tick {}", n);
    }
}

#[test]
fn small_velocity_snaps_to_exact_zero() {
    let mut r = still();
    r.velocity = 0.01;
    for _ in 0..50 {
        r.tick();
    }
    assert!(r.velocity.abs() <= 0.01 * 0.92f32.powi(50) + 1e-9);
    for _ in 50..70 {
        r.tick();
    }
    assert_eq!(r.velocity, 0.0);
}

#[test]
fn drag_moves_angle_immediately_and_adds_momentum() {
    let mut r = still();
    r.apply_delta(100.0);
    assert!((r.angle - 100.0 * r.drag_angle_scale).abs() < 1e-6);
    assert!((r.velocity - 100.0 * r.sensitivity).abs() < 1e-6);

    let before = r.angle;
    r.tick();
    // The momentum keeps spinning after the pointer stops.
    assert!(r.angle > before);
}

#[test]
fn touch_and_wheel_only_add_velocity() {
    let mut r = still();
    r.apply_touch(50.0);
    assert_eq!(r.angle, 0.0);
    assert!((r.velocity - 50.0 * r.sensitivity).abs() < 1e-6);

    let mut w = still();
    w.apply_wheel(120.0);
    assert_eq!(w.angle, 0.0);
    assert!((w.velocity - 120.0 * w.wheel_sensitivity).abs() < 1e-6);
}

#[test]
fn idle_rotation_continues_at_rest() {
    let mut r = RotationState::default();
    for _ in 0..100 {
        r.tick();
    }
    assert_eq!(r.velocity, 0.0);
    assert!((r.angle - 100.0 * r.idle_step).abs() < 1e-4);
}

#[test]
fn opposite_drags_cancel_momentum() {
    let mut r = still();
    r.apply_delta(40.0);
    r.apply_delta(-40.0);
    assert!(r.velocity.abs() < 1e-7);
    assert!(r.angle.abs() < 1e-7);
}
