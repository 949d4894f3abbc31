use glam::Vec3;

// Shared scene tuning constants used by the core and the web frontend.

// Camera
pub const CAMERA_DISTANCE: f32 = 5.0; // fixed target eye Z
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_LOOK_AT: Vec3 = Vec3::new(0.0, -0.2, 0.0);

// Cube geometry (edge lengths)
pub const CUBE_SIZE: f32 = 1.3;
pub const HIT_BOX_SIZE: f32 = 1.7; // invisible pick proxy, larger than the visible cube
pub const FACE_COUNT: usize = 6;

// Momentum
pub const FRICTION: f32 = 0.92;
pub const DRAG_SENSITIVITY: f32 = 0.0008; // px -> velocity
pub const DRAG_ANGLE_SCALE: f32 = 0.002; // px -> immediate angle
pub const WHEEL_SENSITIVITY: f32 = 0.001;
pub const IDLE_ROTATION_STEP: f32 = 0.005; // radians per frame
pub const VELOCITY_EPSILON: f32 = 1e-4;

// Per-frame smoothing factors (fraction of remaining distance per frame)
pub const SCROLL_SMOOTHING: f32 = 0.1;
pub const CAMERA_SMOOTHING: f32 = 0.05;
pub const HOVER_RELAX_RATE: f32 = 0.15;
pub const THEME_RELAX_RATE: f32 = 0.15;

// Scroll -> pitch mapping
pub const SCROLL_PITCH_SCALE: f32 = 0.002;
pub const BASE_TILT: f32 = 0.6;

// Background particles
pub const PARTICLE_COUNT: usize = 120;
pub const PARTICLE_COUNT_COMPACT: usize = 60;
pub const PARTICLE_SPREAD: f32 = 20.0; // edge of the cube the particles are scattered in
pub const PARTICLE_SPIN_STEP: f32 = 0.002;
pub const PARTICLE_PITCH_RATIO: f32 = 0.2;
pub const PARTICLE_SIZE: f32 = 0.05;
pub const PARTICLE_OPACITY: f32 = 0.4;

// Wireframe overlay
pub const WIRE_OPACITY: f32 = 0.3;

// Theme colors (sRGB)
pub const DARK_BG_HEX: u32 = 0x0a0a0a;
pub const LIGHT_BG_HEX: u32 = 0xf4f4f5;

// Face texture layout, as fractions of the face edge
pub const FACE_BG_GRAY: f32 = 0.04;
pub const FACE_BORDER_WIDTH: f32 = 0.05;
pub const FACE_ICON_ZOOM: f32 = 1.2; // icon shrinks by this factor inside the border
pub const TEXT_FACE_BG_HEX: u32 = 0x0a0a0a;
pub const TEXT_FACE_STROKE_HEX: u32 = 0x333333;
pub const TEXT_FACE_STROKE_INSET: f32 = 10.0 / 512.0;
pub const TEXT_FACE_STROKE_WIDTH: f32 = 4.0 / 512.0;
pub const TEXT_FACE_FONT_SIZE: f32 = 72.0 / 512.0;

// Layout breakpoint below which the viewport is treated as mobile
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

#[inline]
pub fn color_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}
