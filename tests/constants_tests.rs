// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;
use glam::Vec3;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_rates_are_fractions() {
    for rate in [
        SCROLL_SMOOTHING,
        CAMERA_SMOOTHING,
        HOVER_RELAX_RATE,
        THEME_RELAX_RATE,
    ] {
        assert!(rate > 0.0 && rate < 1.0);
    }
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
    assert!(VELOCITY_EPSILON > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pick_proxy_encloses_the_visible_cube() {
    assert!(HIT_BOX_SIZE > CUBE_SIZE);
    // The whole proxy stays in front of the camera.
    assert!(CAMERA_DISTANCE - HIT_BOX_SIZE * 0.5 > CAMERA_NEAR);
    assert!(CAMERA_FAR > CAMERA_DISTANCE + PARTICLE_SPREAD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn compact_scene_is_lighter() {
    assert!(PARTICLE_COUNT_COMPACT < PARTICLE_COUNT);
    assert!(PARTICLE_COUNT_COMPACT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn face_layout_fractions_fit_the_face() {
    assert!(FACE_BORDER_WIDTH > 0.0 && FACE_BORDER_WIDTH < 0.5);
    let icon_inset = (1.0 - 1.0 / FACE_ICON_ZOOM) * 0.5;
    assert!(icon_inset > FACE_BORDER_WIDTH);
    assert!(TEXT_FACE_STROKE_INSET + TEXT_FACE_STROKE_WIDTH < 0.5);
    assert!(TEXT_FACE_FONT_SIZE < 1.0);
}

#[test]
fn hex_colors_decode() {
    assert_eq!(color_from_hex(0xffffff), Vec3::ONE);
    assert_eq!(color_from_hex(0x000000), Vec3::ZERO);
    let c = color_from_hex(DARK_BG_HEX);
    assert!((c.x - 10.0 / 255.0).abs() < 1e-6);
    let l = color_from_hex(LIGHT_BG_HEX);
    assert!(l.z > l.x);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_timings_are_positive() {
    assert!(TYPE_INTERVAL_MS > 0);
    assert!(LOADING_TICK_MS > 0);
    assert!(LOADING_HIDE_DELAY_MS > 0);
    assert!(SECTION_REVEAL_THRESHOLD < WORK_ITEM_THRESHOLD);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(FPS_LOG_INTERVAL_SECS > 0.0);
    assert_eq!(THEME_TOGGLE_IDS.len(), 2);
}
