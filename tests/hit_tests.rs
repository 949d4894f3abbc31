// Host-side tests for camera rays and face picking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
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

use camera::{pixel_to_ndc, Camera};
use constants::*;
use cube::{face_center, face_corners, face_for_axis, FACE_FRAMES};
use glam::{Mat4, Vec2, Vec3};
use hit::{face_center_world, resolve, ProxyVolume};

const W: f32 = 1280.0;
const H: f32 = 720.0;

fn camera() -> Camera {
    let eye = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);
    Camera {
        eye,
        forward: (CAMERA_LOOK_AT - eye).normalize(),
        up: Vec3::Y,
        aspect: W / H,
        fovy_radians: CAMERA_FOV_DEG.to_radians(),
        znear: CAMERA_NEAR,
        zfar: CAMERA_FAR,
    }
}

fn model(pitch: f32, yaw: f32) -> Mat4 {
    Mat4::from_rotation_x(pitch) * Mat4::from_rotation_y(yaw)
}

#[test]
fn pixel_to_ndc_maps_corners_and_center() {
    assert_eq!(pixel_to_ndc(0.0, 0.0, W, H), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(pixel_to_ndc(W, H, W, H), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(pixel_to_ndc(W / 2.0, H / 2.0, W, H), Some(Vec2::ZERO));
    assert_eq!(pixel_to_ndc(1.0, 1.0, 0.0, H), None);
}

#[test]
fn projected_point_unprojects_onto_the_same_ray() {
    let cam = camera();
    let p = Vec3::new(0.3, -0.4, 0.5);
    let px = cam.project(p, W, H).expect("in front of camera");
    let ndc = pixel_to_ndc(px.x, px.y, W, H).expect("valid viewport");
    let ray = cam.ray_through_ndc(ndc);
    let to_p = (p - ray.origin).normalize();
    assert!(ray.dir.dot(to_p) > 0.99999);
}

#[test]
fn face_axis_mapping_matches_frames() {
    for axis in 0..3 {
        for positive in [true, false] {
            let f = face_for_axis(axis, positive);
            let n = FACE_FRAMES[f].normal;
            let sign = if positive { 1.0 } else { -1.0 };
            assert_eq!(n[axis], sign);
        }
    }
}

#[test]
fn face_corners_wind_counter_clockwise_from_outside() {
    for face in 0..FACE_COUNT {
        let [tl, _tr, bl, br] = face_corners(face, 1.0);
        let n = (bl - tl).cross(br - tl);
        assert!(n.dot(FACE_FRAMES[face].normal) > 0.0, "face {}", face);
        assert!((face_center(face, 1.0) - FACE_FRAMES[face].normal).length() < 1e-6);
    }
}

#[test]
fn resolving_a_visible_face_center_returns_that_face() {
    let cam = camera();
    for yaw in [0.0f32, 0.4, 1.1, 2.5, -0.7] {
        let m = model(BASE_TILT, yaw);
        let proxy = ProxyVolume::new(HIT_BOX_SIZE, m);
        let mut checked = 0;
        for face in 0..FACE_COUNT {
            let center = face_center_world(face, HIT_BOX_SIZE, m);
            let normal = m.transform_vector3(FACE_FRAMES[face].normal);
            let facing = (cam.eye - center).normalize().dot(normal);
            if facing < 0.2 {
                continue;
            }
            let px = cam.project(center, W, H).expect("in front of camera");
            assert_eq!(
                resolve(px.x, px.y, W, H, &cam, &proxy),
                Some(face),
                "yaw {} face {}",
                yaw,
                face
            );
            checked += 1;
        }
        assert!(checked >= 1);
    }
}

#[test]
fn corner_pixels_miss() {
    let cam = camera();
    let proxy = ProxyVolume::new(HIT_BOX_SIZE, model(BASE_TILT, 0.3));
    assert_eq!(resolve(0.0, 0.0, W, H, &cam, &proxy), None);
    assert_eq!(resolve(W - 1.0, H - 1.0, W, H, &cam, &proxy), None);
}

#[test]
fn degenerate_viewport_never_hits() {
    let cam = camera();
    let proxy = ProxyVolume::new(HIT_BOX_SIZE, Mat4::IDENTITY);
    assert_eq!(resolve(W / 2.0, H / 2.0, 0.0, 0.0, &cam, &proxy), None);
}

#[test]
fn proxy_margin_catches_near_misses() {
    let cam = camera();
    let visible = ProxyVolume::new(CUBE_SIZE, Mat4::IDENTITY);
    let proxy = ProxyVolume::new(HIT_BOX_SIZE, Mat4::IDENTITY);
    // On the proxy's front face, just outside the visible cube's silhouette.
    let p = Vec3::new(0.78, 0.0, HIT_BOX_SIZE * 0.5);
    let px = cam.project(p, W, H).expect("in front of camera");
    assert_eq!(resolve(px.x, px.y, W, H, &cam, &visible), None);
    assert_eq!(
        resolve(px.x, px.y, W, H, &cam, &proxy),
        Some(face_for_axis(2, true))
    );
}

#[test]
fn ray_through_the_box_reports_entry_then_exit() {
    let cam = camera();
    let proxy = ProxyVolume::new(HIT_BOX_SIZE, Mat4::IDENTITY);
    let px = cam.project(Vec3::ZERO, W, H).expect("in front of camera");
    let ndc = pixel_to_ndc(px.x, px.y, W, H).expect("valid viewport");
    let hits = proxy.intersect(&cam.ray_through_ndc(ndc));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].face, face_for_axis(2, true));
    assert_eq!(hits[1].face, face_for_axis(2, false));
    assert!(hits[0].distance < hits[1].distance);
}
