use glam::Vec2;

/// Host input normalized to the handful of signals the scene reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    TouchMove { x: f32 },
    Wheel { delta_y: f32 },
}

/// Per-event delta extracted by [`InputSampler::sample`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    Drag { delta: f32, cursor: Vec2 },
    Touch { delta: f32 },
    Wheel { delta: f32 },
}

/// Tracks the last horizontal pointer position so that absolute event
/// coordinates become per-event deltas. Mouse and touch share the anchor.
#[derive(Clone, Copy, Debug)]
pub struct InputSampler {
    last_x: f32,
}

impl InputSampler {
    pub fn new(initial_x: f32) -> Self {
        Self { last_x: initial_x }
    }

    pub fn last_x(&self) -> f32 {
        self.last_x
    }

    pub fn sample(&mut self, ev: InputEvent) -> Sample {
        match ev {
            InputEvent::PointerMove { x, y } => {
                let delta = x - self.last_x;
                self.last_x = x;
                Sample::Drag {
                    delta,
                    cursor: Vec2::new(x, y),
                }
            }
            InputEvent::TouchMove { x } => {
                let delta = x - self.last_x;
                self.last_x = x;
                Sample::Touch { delta }
            }
            InputEvent::Wheel { delta_y } => Sample::Wheel { delta: delta_y },
        }
    }
}
