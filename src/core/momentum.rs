use super::constants::{
    DRAG_ANGLE_SCALE, DRAG_SENSITIVITY, FRICTION, IDLE_ROTATION_STEP, VELOCITY_EPSILON,
    WHEEL_SENSITIVITY,
};

/// Yaw angle plus residual angular velocity of the cube.
///
/// Pointer drags feed two independent accumulators: the angle moves
/// immediately and the velocity keeps spinning the cube afterwards. The
/// velocity decays by `friction` on every [`RotationState::tick`].
#[derive(Clone, Copy, Debug)]
pub struct RotationState {
    pub angle: f32,
    pub velocity: f32,
    pub friction: f32,
    pub sensitivity: f32,
    pub drag_angle_scale: f32,
    pub wheel_sensitivity: f32,
    pub idle_step: f32,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            angle: 0.0,
            velocity: 0.0,
            friction: FRICTION,
            sensitivity: DRAG_SENSITIVITY,
            drag_angle_scale: DRAG_ANGLE_SCALE,
            wheel_sensitivity: WHEEL_SENSITIVITY,
            idle_step: IDLE_ROTATION_STEP,
        }
    }
}

impl RotationState {
    /// Pointer drag of `delta_px` horizontal pixels.
    pub fn apply_delta(&mut self, delta_px: f32) {
        self.velocity += delta_px * self.sensitivity;
        self.angle += delta_px * self.drag_angle_scale;
    }

    /// Touch drags only impart momentum.
    pub fn apply_touch(&mut self, delta_px: f32) {
        self.velocity += delta_px * self.sensitivity;
    }

    pub fn apply_wheel(&mut self, delta_y: f32) {
        self.velocity += delta_y * self.wheel_sensitivity;
    }

    /// Advance one rendered frame.
    pub fn tick(&mut self) {
        self.angle += self.idle_step;
        self.angle += self.velocity;
        self.velocity *= self.friction;
        if self.velocity.abs() < VELOCITY_EPSILON {
            self.velocity = 0.0;
        }
    }
}
