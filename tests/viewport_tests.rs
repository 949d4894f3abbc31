// Host-side tests for the mobile viewport lock.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod viewport {
    include!("../src/core/viewport.rs");
}

use viewport::{backing_size, canvas_css_size, ViewportLock};

#[test]
fn desktop_sizes_always_apply() {
    let mut v = ViewportLock::default();
    assert_eq!(v.apply(1280.0, 720.0), Some((1280.0, 720.0)));
    assert_eq!(v.apply(1280.0, 600.0), Some((1280.0, 600.0)));
    assert_eq!(v.locked(), None);
}

#[test]
fn mobile_height_only_changes_are_ignored() {
    let mut v = ViewportLock::default();
    assert_eq!(v.apply(390.0, 844.0), Some((390.0, 844.0)));
    // Address bar collapsing.
    assert_eq!(v.apply(390.0, 760.0), None);
    assert_eq!(v.locked(), Some((390.0, 844.0)));
}

#[test]
fn mobile_width_change_relocks() {
    let mut v = ViewportLock::default();
    v.apply(390.0, 844.0);
    assert_eq!(v.apply(600.0, 400.0), Some((600.0, 400.0)));
    assert_eq!(v.locked(), Some((600.0, 400.0)));
}

#[test]
fn degenerate_sizes_are_skipped() {
    let mut v = ViewportLock::default();
    assert_eq!(v.apply(0.0, 500.0), None);
    assert_eq!(v.apply(500.0, -1.0), None);
    assert_eq!(v.apply(f32::NAN, 500.0), None);
    assert_eq!(v.apply(f32::INFINITY, 500.0), None);
    assert_eq!(v.locked(), None);
}

#[test]
fn breakpoint_is_inclusive_for_desktop() {
    let mut v = ViewportLock::default();
    assert_eq!(v.apply(768.0, 500.0), Some((768.0, 500.0)));
    assert_eq!(v.apply(768.0, 400.0), Some((768.0, 400.0)));
}

#[test]
fn locked_size_pins_the_canvas_css_size() {
    let mut lock = ViewportLock::default();
    let applied = lock.apply(390.0, 844.0).unwrap();
    // Address bar collapses: the lock keeps the first size, and so must the canvas.
    assert_eq!(lock.apply(390.0, 700.0), None);
    assert_eq!(
        canvas_css_size(applied.0, applied.1),
        ("390px".to_string(), "844px".to_string())
    );
}

#[test]
fn backing_store_follows_capped_pixel_ratio() {
    assert_eq!(backing_size(390.0, 844.0, 3.0, 2.0), (780, 1688));
    assert_eq!(backing_size(1280.0, 720.0, 1.0, 2.0), (1280, 720));
    assert_eq!(backing_size(0.0, 0.0, 1.0, 2.0), (1, 1));
}
