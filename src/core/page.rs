use rand::Rng;

// Thresholds for the page chrome around the cube.
pub const NAV_TOP_THRESHOLD_PX: f64 = 50.0;
pub const NAV_REVEAL_ZONE_PX: f64 = 100.0;
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 500.0;

/// The navigation bar shows while the page is at the top or the pointer
/// is near the top edge.
#[derive(Clone, Copy, Debug)]
pub struct NavState {
    at_top: bool,
    hovering: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            at_top: true,
            hovering: false,
        }
    }
}

impl NavState {
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.at_top = scroll_y < NAV_TOP_THRESHOLD_PX;
        self.visible()
    }

    pub fn on_pointer(&mut self, client_y: f64) -> bool {
        self.hovering = client_y < NAV_REVEAL_ZONE_PX;
        self.visible()
    }

    pub fn visible(&self) -> bool {
        self.at_top || self.hovering
    }
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD_PX
}

/// Initial downward offset of a section before it fades in.
#[inline]
pub fn reveal_offset(is_project_details: bool) -> &'static str {
    if is_project_details {
        "100px"
    } else {
        "40px"
    }
}

/// Stagger for the n-th work item's entrance.
#[inline]
pub fn work_item_delay_ms(index: usize) -> i32 {
    100 + index as i32 * 200
}

/// Fake loading bar: random increments until full.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadingProgress {
    percent: f32,
}

impl LoadingProgress {
    pub const MAX_STEP: f32 = 15.0;

    pub fn step(&mut self, rng: &mut impl Rng) -> f32 {
        self.percent = (self.percent + rng.gen::<f32>() * Self::MAX_STEP).min(100.0);
        self.percent
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn is_done(&self) -> bool {
        self.percent >= 100.0
    }
}
