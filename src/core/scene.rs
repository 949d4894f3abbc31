use super::camera::Camera;
use super::constants::*;
use super::faces::FaceTable;
use super::hit::{resolve, ProxyVolume};
use super::input::{InputEvent, InputSampler, Sample};
use super::momentum::RotationState;
use super::relax::relax;
use super::theme::{Theme, ThemeState, ThemeStore};
use super::viewport::ViewportLock;
use glam::{Mat4, Vec3};
use rand::Rng;

/// Every tuning number of the scene. One scene type covers both the full
/// and the reduced (narrow viewport) variant.
#[derive(Clone, Copy, Debug)]
pub struct SceneParams {
    pub camera_distance: f32,
    pub camera_fov_deg: f32,
    pub camera_look_at: Vec3,
    pub cube_size: f32,
    pub hit_box_size: f32,
    pub scroll_smoothing: f32,
    pub camera_smoothing: f32,
    pub scroll_pitch_scale: f32,
    pub base_tilt: f32,
    pub hover_rate: f32,
    pub theme_rate: f32,
    pub particle_count: usize,
    pub particle_spread: f32,
    pub particle_spin_step: f32,
    pub particle_pitch_ratio: f32,
    pub particle_size: f32,
    pub particle_opacity: f32,
    pub wire_opacity: f32,
    pub rotation: RotationState,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            camera_distance: CAMERA_DISTANCE,
            camera_fov_deg: CAMERA_FOV_DEG,
            camera_look_at: CAMERA_LOOK_AT,
            cube_size: CUBE_SIZE,
            hit_box_size: HIT_BOX_SIZE,
            scroll_smoothing: SCROLL_SMOOTHING,
            camera_smoothing: CAMERA_SMOOTHING,
            scroll_pitch_scale: SCROLL_PITCH_SCALE,
            base_tilt: BASE_TILT,
            hover_rate: HOVER_RELAX_RATE,
            theme_rate: THEME_RELAX_RATE,
            particle_count: PARTICLE_COUNT,
            particle_spread: PARTICLE_SPREAD,
            particle_spin_step: PARTICLE_SPIN_STEP,
            particle_pitch_ratio: PARTICLE_PITCH_RATIO,
            particle_size: PARTICLE_SIZE,
            particle_opacity: PARTICLE_OPACITY,
            wire_opacity: WIRE_OPACITY,
            rotation: RotationState::default(),
        }
    }
}

impl SceneParams {
    /// Narrow viewports get the lighter particle field.
    pub fn for_viewport_width(width: f32) -> Self {
        let mut p = Self::default();
        if width < MOBILE_BREAKPOINT_PX {
            p.particle_count = PARTICLE_COUNT_COMPACT;
        }
        p
    }
}

/// Which face the pointer is over and the relaxed highlight of every face.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverState {
    pub hovered: Option<usize>,
    pub intensity: [f32; FACE_COUNT],
}

impl HoverState {
    /// One frame of relaxation toward 1 for the hovered face, 0 elsewhere.
    pub fn step(&mut self, rate: f32) {
        for (i, v) in self.intensity.iter_mut().enumerate() {
            let target = if self.hovered == Some(i) { 1.0 } else { 0.0 };
            *v = relax(*v, target, rate);
        }
    }
}

/// Hovered faces in light mode fade back toward the dark look: the two
/// invert sources cancel instead of adding.
#[inline]
pub fn combined_invert(theme_invert: f32, hover: f32) -> f32 {
    (theme_invert - hover).abs()
}

/// Random positions for the background particles, uniform in a cube of edge
/// `spread` centered on the origin.
pub fn scatter_particles(count: usize, spread: f32, rng: &mut impl Rng) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
            )
        })
        .collect()
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameOutput {
    pub view: Mat4,
    pub proj: Mat4,
    pub model: Mat4,
    pub particle_model: Mat4,
    pub background: Vec3,
    pub line_gray: f32,
    pub theme_invert: f32,
    pub face_invert: [f32; FACE_COUNT],
    pub yaw: f32,
    pub pitch: f32,
}

/// State of the interactive cube scene. Input handlers and the frame loop
/// mutate it through a shared handle; it never touches the host directly.
pub struct Scene {
    pub params: SceneParams,
    pub faces: FaceTable,
    pub rotation: RotationState,
    pub hover: HoverState,
    pub theme: ThemeState,
    sampler: InputSampler,
    viewport_lock: ViewportLock,
    viewport: (f32, f32),
    scroll: f32,
    camera_z: f32,
    particle_yaw: f32,
    particle_pitch: f32,
    live: bool,
}

impl Scene {
    pub fn new(params: SceneParams, faces: FaceTable, theme: Theme, width: f32, height: f32) -> Self {
        let mut theme_state = ThemeState::new(theme);
        theme_state.rate = params.theme_rate;
        let mut viewport_lock = ViewportLock::default();
        let viewport = viewport_lock.apply(width, height).unwrap_or((1.0, 1.0));
        Self {
            params,
            faces,
            rotation: params.rotation,
            hover: HoverState::default(),
            theme: theme_state,
            sampler: InputSampler::new(width * 0.5),
            viewport_lock,
            viewport,
            scroll: 0.0,
            camera_z: params.camera_distance,
            particle_yaw: 0.0,
            particle_pitch: 0.0,
            live: false,
        }
    }

    /// Accept input once the cube is actually on screen. Until then pointer
    /// events are dropped and nothing can be hit.
    pub fn go_live(&mut self) {
        self.live = true;
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Returns the applied size if the resize went through.
    pub fn resize(&mut self, width: f32, height: f32) -> Option<(f32, f32)> {
        let applied = self.viewport_lock.apply(width, height)?;
        self.viewport = applied;
        Some(applied)
    }

    pub fn camera(&self) -> Camera {
        let (w, h) = self.viewport;
        let eye = Vec3::new(0.0, 0.0, self.camera_z);
        // Look direction is fixed at the rest position of the eye.
        let rest_eye = Vec3::new(0.0, 0.0, self.params.camera_distance);
        Camera {
            eye,
            forward: (self.params.camera_look_at - rest_eye).normalize(),
            up: Vec3::Y,
            aspect: w / h.max(1.0),
            fovy_radians: self.params.camera_fov_deg.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.rotation.angle
    }

    /// Scroll only ever drives pitch.
    pub fn pitch(&self) -> f32 {
        self.scroll * self.params.scroll_pitch_scale + self.params.base_tilt
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch()) * Mat4::from_rotation_y(self.yaw())
    }

    pub fn proxy(&self) -> ProxyVolume {
        ProxyVolume::new(self.params.hit_box_size, self.model())
    }

    /// Face under viewport pixel (`x`, `y`).
    pub fn face_at(&self, x: f32, y: f32) -> Option<usize> {
        if !self.live {
            return None;
        }
        let (w, h) = self.viewport;
        resolve(x, y, w, h, &self.camera(), &self.proxy())
    }

    /// Feed one input event. Returns the hovered face after pointer moves.
    pub fn handle_input(&mut self, ev: InputEvent) -> Option<usize> {
        if !self.live {
            return None;
        }
        match self.sampler.sample(ev) {
            Sample::Drag { delta, cursor } => {
                self.rotation.apply_delta(delta);
                let face = self.face_at(cursor.x, cursor.y);
                if face != self.hover.hovered {
                    log::debug!("[scene] hover {:?} -> {:?}", self.hover.hovered, face);
                }
                self.hover.hovered = face;
                face
            }
            Sample::Touch { delta } => {
                self.rotation.apply_touch(delta);
                self.hover.hovered
            }
            Sample::Wheel { delta } => {
                self.rotation.apply_wheel(delta);
                self.hover.hovered
            }
        }
    }

    pub fn toggle_theme(&mut self, store: &mut dyn ThemeStore) -> Theme {
        self.theme.toggle(store)
    }

    /// Advance one display frame given the page's raw scroll offset.
    pub fn frame(&mut self, scroll_y: f32) -> FrameOutput {
        let p = self.params;
        self.scroll = relax(self.scroll, scroll_y, p.scroll_smoothing);
        self.camera_z = relax(self.camera_z, p.camera_distance, p.camera_smoothing);

        self.rotation.tick();
        let yaw = self.yaw();
        let pitch = self.pitch();

        let scroll_offset = self.scroll * p.scroll_pitch_scale;
        self.particle_yaw += p.particle_spin_step;
        self.particle_pitch = scroll_offset * p.particle_pitch_ratio;

        let theme_invert = self.theme.step();

        self.hover.step(p.hover_rate);
        let mut face_invert = [0.0; FACE_COUNT];
        for (out, h) in face_invert.iter_mut().zip(self.hover.intensity) {
            *out = combined_invert(theme_invert, h);
        }

        let camera = self.camera();
        FrameOutput {
            view: camera.view_matrix(),
            proj: camera.projection_matrix(),
            model: self.model(),
            particle_model: Mat4::from_rotation_x(self.particle_pitch)
                * Mat4::from_rotation_y(self.particle_yaw),
            background: self.theme.background(),
            line_gray: self.theme.line_gray(),
            theme_invert,
            face_invert,
            yaw,
            pitch,
        }
    }

    pub fn smoothed_scroll(&self) -> f32 {
        self.scroll
    }

    pub fn camera_z(&self) -> f32 {
        self.camera_z
    }

    pub fn particle_rotation(&self) -> (f32, f32) {
        (self.particle_pitch, self.particle_yaw)
    }
}
