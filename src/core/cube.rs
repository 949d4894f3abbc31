use glam::Vec3;

/// Orientation of one cube face as seen from outside the cube: the outward
/// normal plus the directions that map to image right and image up.
#[derive(Clone, Copy, Debug)]
pub struct FaceFrame {
    pub normal: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// Face index -> frame. The index doubles as the material slot, so mesh
/// generation and picking share this one table.
pub const FACE_FRAMES: [FaceFrame; 6] = [
    // +X
    FaceFrame {
        normal: Vec3::X,
        right: Vec3::NEG_Z,
        up: Vec3::Y,
    },
    // -X
    FaceFrame {
        normal: Vec3::NEG_X,
        right: Vec3::Z,
        up: Vec3::Y,
    },
    // +Y
    FaceFrame {
        normal: Vec3::Y,
        right: Vec3::X,
        up: Vec3::NEG_Z,
    },
    // -Y
    FaceFrame {
        normal: Vec3::NEG_Y,
        right: Vec3::X,
        up: Vec3::Z,
    },
    // +Z
    FaceFrame {
        normal: Vec3::Z,
        right: Vec3::X,
        up: Vec3::Y,
    },
    // -Z
    FaceFrame {
        normal: Vec3::NEG_Z,
        right: Vec3::NEG_X,
        up: Vec3::Y,
    },
];

/// Face index for an axis (0 = X, 1 = Y, 2 = Z) and the sign of the
/// outward normal.
#[inline]
pub fn face_for_axis(axis: usize, positive: bool) -> usize {
    axis * 2 + if positive { 0 } else { 1 }
}

/// Corners of face `face` for a cube with half edge `half`, ordered
/// top-left, top-right, bottom-left, bottom-right in image space.
pub fn face_corners(face: usize, half: f32) -> [Vec3; 4] {
    let f = FACE_FRAMES[face];
    let c = f.normal * half;
    let r = f.right * half;
    let u = f.up * half;
    [c - r + u, c + r + u, c - r - u, c + r - u]
}

/// Center of face `face` for a cube with half edge `half`.
#[inline]
pub fn face_center(face: usize, half: f32) -> Vec3 {
    FACE_FRAMES[face].normal * half
}

/// The twelve edges of an axis-aligned cube with half edge `half`.
pub fn cube_edges(half: f32) -> [[Vec3; 2]; 12] {
    let v = |x: f32, y: f32, z: f32| Vec3::new(x * half, y * half, z * half);
    [
        [v(-1.0, -1.0, -1.0), v(1.0, -1.0, -1.0)],
        [v(-1.0, 1.0, -1.0), v(1.0, 1.0, -1.0)],
        [v(-1.0, -1.0, 1.0), v(1.0, -1.0, 1.0)],
        [v(-1.0, 1.0, 1.0), v(1.0, 1.0, 1.0)],
        [v(-1.0, -1.0, -1.0), v(-1.0, 1.0, -1.0)],
        [v(1.0, -1.0, -1.0), v(1.0, 1.0, -1.0)],
        [v(-1.0, -1.0, 1.0), v(-1.0, 1.0, 1.0)],
        [v(1.0, -1.0, 1.0), v(1.0, 1.0, 1.0)],
        [v(-1.0, -1.0, -1.0), v(-1.0, -1.0, 1.0)],
        [v(1.0, -1.0, -1.0), v(1.0, -1.0, 1.0)],
        [v(-1.0, 1.0, -1.0), v(-1.0, 1.0, 1.0)],
        [v(1.0, 1.0, -1.0), v(1.0, 1.0, 1.0)],
    ]
}
