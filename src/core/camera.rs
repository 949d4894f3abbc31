use glam::{Mat4, Vec2, Vec3, Vec4};

/// Right-handed perspective camera looking along a fixed direction.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

/// World-space ray with a normalized direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.forward, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Ray from the eye through a point in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p1 - self.eye).normalize(),
        }
    }

    /// Project a world-space point to viewport pixels (origin top-left).
    /// Returns `None` for points behind the eye.
    pub fn project(&self, world: Vec3, viewport_w: f32, viewport_h: f32) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport_w,
            (1.0 - ndc.y) * 0.5 * viewport_h,
        ))
    }
}

/// Convert viewport pixels to NDC in [-1, 1] with Y pointing up.
#[inline]
pub fn pixel_to_ndc(px: f32, py: f32, viewport_w: f32, viewport_h: f32) -> Option<Vec2> {
    if !(viewport_w > 0.0 && viewport_h > 0.0) {
        return None;
    }
    Some(Vec2::new(
        (px / viewport_w) * 2.0 - 1.0,
        -(py / viewport_h) * 2.0 + 1.0,
    ))
}
