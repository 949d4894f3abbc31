// Host-side tests for page chrome helpers and the loading bar.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod page {
    include!("../src/core/page.rs");
}

use page::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn nav_visible_at_top_or_when_pointer_near_top() {
    let mut nav = NavState::default();
    assert!(nav.visible());
    assert!(!nav.on_scroll(300.0));
    assert!(nav.on_pointer(40.0));
    assert!(!nav.on_pointer(400.0));
    assert!(nav.on_scroll(10.0));
}

#[test]
fn back_to_top_threshold() {
    assert!(!back_to_top_visible(0.0));
    assert!(!back_to_top_visible(500.0));
    assert!(back_to_top_visible(501.0));
}

#[test]
fn reveal_offsets_and_stagger() {
    assert_eq!(reveal_offset(true), "100px");
    assert_eq!(reveal_offset(false), "40px");
    assert_eq!(work_item_delay_ms(0), 100);
    assert_eq!(work_item_delay_ms(3), 700);
}

#[test]
fn loading_progress_reaches_full_monotonically() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut p = LoadingProgress::default();
    let mut prev = p.percent();
    let mut steps = 0;
    while !p.is_done() {
        let now = p.step(&mut rng);
        assert!(now >= prev);
        assert!(now - prev <= LoadingProgress::MAX_STEP);
        assert!(now <= 100.0);
        prev = now;
        steps += 1;
        assert!(steps < 10_000);
    }
    assert_eq!(p.percent(), 100.0);
    // At most 15 per tick, so a full bar takes at least seven ticks.
    assert!(steps >= 7);
}
