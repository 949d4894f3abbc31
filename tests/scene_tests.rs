// Host-side tests for the per-frame scene update.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod relax {
    include!("../src/core/relax.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod cube {
    include!("../src/core/cube.rs");
}
mod hit {
    include!("../src/core/hit.rs");
}
mod input {
    include!("../src/core/input.rs");
}
mod momentum {
    include!("../src/core/momentum.rs");
}
mod faces {
    include!("../src/core/faces.rs");
}
mod theme {
    include!("../src/core/theme.rs");
}
mod viewport {
    include!("../src/core/viewport.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod router {
    include!("../src/core/router.rs");
}

use constants::*;
use faces::FaceTable;
use input::InputEvent;
use rand::rngs::StdRng;
use rand::SeedableRng;
use router::{handle_click, ClickOutcome, Navigator};
use scene::{combined_invert, scatter_particles, Scene, SceneParams};
use theme::{MemoryThemeStore, Theme};

const W: f32 = 1280.0;
const H: f32 = 720.0;

fn still_params() -> SceneParams {
    let mut p = SceneParams::default();
    p.rotation.idle_step = 0.0;
    p
}

fn scene_with(theme: Theme) -> Scene {
    let mut s = Scene::new(still_params(), FaceTable::portfolio(), theme, W, H);
    s.go_live();
    s
}

#[derive(Default)]
struct RecordingNav {
    opened: Vec<String>,
    scrolled: Vec<String>,
}

impl Navigator for RecordingNav {
    fn open_url(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }

    fn scroll_to(&mut self, anchor: &str) -> bool {
        self.scrolled.push(anchor.to_string());
        true
    }
}

#[test]
fn scene_ignores_input_until_live() {
    let mut s = Scene::new(still_params(), FaceTable::portfolio(), Theme::Dark, W, H);
    for i in 0..40 {
        let hovered = s.handle_input(InputEvent::PointerMove {
            x: W / 2.0 + i as f32 * 25.0,
            y: H / 2.0,
        });
        assert_eq!(hovered, None);
    }
    s.handle_input(InputEvent::Wheel { delta_y: 400.0 });
    assert_eq!(s.rotation.velocity, 0.0);
    assert_eq!(s.hover.hovered, None);

    let mut nav = RecordingNav::default();
    let face = s.face_at(W / 2.0, H / 2.0);
    assert_eq!(face, None);
    assert_eq!(
        handle_click(&s.faces, false, face, &mut nav),
        ClickOutcome::Missed
    );
    assert!(nav.opened.is_empty() && nav.scrolled.is_empty());

    s.go_live();
    assert!(s.face_at(W / 2.0, H / 2.0).is_some());
}

#[test]
fn scroll_drives_pitch_only() {
    let mut s = scene_with(Theme::Dark);
    let first = s.frame(0.0);
    assert!((first.pitch - BASE_TILT).abs() < 1e-6);
    let mut last = first;
    for _ in 0..20 {
        last = s.frame(500.0);
    }
    assert_eq!(last.yaw, first.yaw);
    assert!(last.pitch > first.pitch);
    let expected = s.smoothed_scroll() * SCROLL_PITCH_SCALE + BASE_TILT;
    assert!((last.pitch - expected).abs() < 1e-6);
}

#[test]
fn drag_drives_yaw_only() {
    let mut s = scene_with(Theme::Dark);
    s.handle_input(InputEvent::PointerMove {
        x: W / 2.0 + 200.0,
        y: 10.0,
    });
    let out = s.frame(0.0);
    assert!(out.yaw > 0.0);
    assert!((out.pitch - BASE_TILT).abs() < 1e-6);
}

#[test]
fn smoothed_scroll_approaches_target() {
    let mut s = scene_with(Theme::Dark);
    s.frame(100.0);
    assert!((s.smoothed_scroll() - 10.0).abs() < 1e-4);
    for _ in 0..200 {
        s.frame(100.0);
    }
    assert!((s.smoothed_scroll() - 100.0).abs() < 1e-2);
    assert!((s.camera_z() - CAMERA_DISTANCE).abs() < 1e-6);
}

#[test]
fn particles_spin_and_follow_scroll() {
    let mut s = scene_with(Theme::Dark);
    s.frame(0.0);
    s.frame(0.0);
    let (pitch, yaw) = s.particle_rotation();
    assert_eq!(pitch, 0.0);
    assert!((yaw - 2.0 * PARTICLE_SPIN_STEP).abs() < 1e-7);

    s.frame(1000.0);
    let (pitch, _) = s.particle_rotation();
    let expected = s.smoothed_scroll() * SCROLL_PITCH_SCALE * PARTICLE_PITCH_RATIO;
    assert!((pitch - expected).abs() < 1e-7);
}

#[test]
fn hovered_face_fades_against_light_theme() {
    let mut s = scene_with(Theme::Light);
    let (w, h) = s.viewport();
    let face = s
        .handle_input(InputEvent::PointerMove {
            x: w / 2.0,
            y: h / 2.0,
        })
        .expect("cube under the viewport center");
    let mut out = s.frame(0.0);
    for _ in 0..100 {
        out = s.frame(0.0);
    }
    assert!(out.face_invert[face] < 0.01);
    for (i, v) in out.face_invert.iter().enumerate() {
        if i != face {
            assert!((v - 1.0).abs() < 1e-6, "face {}", i);
        }
    }
}

#[test]
fn invert_sources_combine_by_absolute_difference() {
    assert_eq!(combined_invert(0.0, 0.0), 0.0);
    assert_eq!(combined_invert(1.0, 0.0), 1.0);
    assert_eq!(combined_invert(0.0, 1.0), 1.0);
    assert_eq!(combined_invert(1.0, 1.0), 0.0);
    assert!((combined_invert(0.25, 0.75) - 0.5).abs() < 1e-6);
}

#[test]
fn theme_toggle_moves_background_over_frames() {
    let mut s = scene_with(Theme::Dark);
    let mut store = MemoryThemeStore::default();
    let before = s.frame(0.0);
    assert_eq!(s.toggle_theme(&mut store), Theme::Light);
    let after = s.frame(0.0);
    assert!(after.theme_invert > 0.0 && after.theme_invert < 1.0);
    assert!(after.background.x > before.background.x);
    assert!(after.line_gray < before.line_gray);
}

#[test]
fn touch_and_wheel_keep_hover() {
    let mut s = scene_with(Theme::Dark);
    let hovered = s.handle_input(InputEvent::PointerMove {
        x: W / 2.0,
        y: H / 2.0,
    });
    assert!(hovered.is_some());
    assert_eq!(s.handle_input(InputEvent::Wheel { delta_y: 40.0 }), hovered);
    assert_eq!(s.handle_input(InputEvent::TouchMove { x: 10.0 }), hovered);
    assert!(s.rotation.velocity != 0.0);
}

#[test]
fn pointer_far_from_cube_clears_hover() {
    let mut s = scene_with(Theme::Dark);
    s.handle_input(InputEvent::PointerMove {
        x: W / 2.0,
        y: H / 2.0,
    });
    assert_eq!(s.handle_input(InputEvent::PointerMove { x: 2.0, y: 2.0 }), None);
    assert_eq!(s.hover.hovered, None);
}

#[test]
fn mobile_resize_ignores_height_changes() {
    let mut s = Scene::new(still_params(), FaceTable::portfolio(), Theme::Dark, 390.0, 844.0);
    assert_eq!(s.resize(390.0, 700.0), None);
    assert_eq!(s.viewport(), (390.0, 844.0));
    assert_eq!(s.resize(844.0, 390.0), Some((844.0, 390.0)));
    assert!((s.camera().aspect - 844.0 / 390.0).abs() < 1e-5);
}

#[test]
fn narrow_viewports_get_fewer_particles() {
    assert_eq!(SceneParams::for_viewport_width(400.0).particle_count, PARTICLE_COUNT_COMPACT);
    assert_eq!(SceneParams::for_viewport_width(1400.0).particle_count, PARTICLE_COUNT);
}

#[test]
fn particles_stay_inside_the_spread() {
    let mut rng = StdRng::seed_from_u64(7);
    let pts = scatter_particles(PARTICLE_COUNT, PARTICLE_SPREAD, &mut rng);
    assert_eq!(pts.len(), PARTICLE_COUNT);
    let half = PARTICLE_SPREAD * 0.5;
    assert!(pts.iter().all(|p| p.abs().max_element() <= half));
}
