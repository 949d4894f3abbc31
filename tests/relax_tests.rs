// Host-side tests for exponential relaxation and the input sampler.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod relax {
    include!("../src/core/relax.rs");
}
mod input {
    include!("../src/core/input.rs");
}

use glam::Vec3;
use input::{InputEvent, InputSampler, Sample};
use relax::{lerp_color, relax};

#[test]
fn relax_converges_monotonically_without_overshoot() {
    for (start, target) in [(0.0f32, 1.0f32), (1.0, 0.0)] {
        let mut v = start;
        let mut prev_gap = (target - v).abs();
        for _ in 0..200 {
            v = relax(v, target, 0.15);
            let gap = (target - v).abs();
            assert!(gap <= prev_gap);
            assert!(v >= 0.0 && v <= 1.0, "overshoot: {}", v);
            prev_gap = gap;
        }
        assert!(prev_gap < 1e-6);
    }
}

#[test]
fn relax_at_target_is_a_fixed_point() {
    assert_eq!(relax(0.3, 0.3, 0.15), 0.3);
}

#[test]
fn lerp_color_endpoints() {
    let a = Vec3::new(0.1, 0.2, 0.3);
    let b = Vec3::new(0.9, 0.8, 0.7);
    assert_eq!(lerp_color(a, b, 0.0), a);
    assert!((lerp_color(a, b, 1.0) - b).length() < 1e-6);
}

#[test]
fn sampler_turns_positions_into_deltas() {
    let mut s = InputSampler::new(400.0);
    match s.sample(InputEvent::PointerMove { x: 410.0, y: 20.0 }) {
        Sample::Drag { delta, cursor } => {
            assert_eq!(delta, 10.0);
            assert_eq!(cursor.y, 20.0);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(s.last_x(), 410.0);
    // Touch shares the same horizontal anchor.
    assert_eq!(
        s.sample(InputEvent::TouchMove { x: 400.0 }),
        Sample::Touch { delta: -10.0 }
    );
}

#[test]
fn wheel_does_not_move_the_anchor() {
    let mut s = InputSampler::new(100.0);
    assert_eq!(
        s.sample(InputEvent::Wheel { delta_y: 53.0 }),
        Sample::Wheel { delta: 53.0 }
    );
    assert_eq!(s.last_x(), 100.0);
}
