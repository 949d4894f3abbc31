use super::constants::MOBILE_BREAKPOINT_PX;

/// Filters window resizes before they reach the camera and canvas.
///
/// Narrow (mobile) viewports lock their first size and only follow width
/// changes, so the browser chrome sliding in and out does not rescale the
/// cube. Degenerate sizes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewportLock {
    locked: Option<(f32, f32)>,
}

impl ViewportLock {
    /// Returns the size to apply, or `None` to keep the current one.
    pub fn apply(&mut self, width: f32, height: f32) -> Option<(f32, f32)> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return None;
        }
        if width >= MOBILE_BREAKPOINT_PX {
            return Some((width, height));
        }
        match self.locked {
            Some((lw, _)) if lw == width => None,
            _ => {
                self.locked = Some((width, height));
                self.locked
            }
        }
    }

    pub fn locked(&self) -> Option<(f32, f32)> {
        self.locked
    }
}

/// CSS `width`/`height` values that pin the canvas to an applied size, so
/// the stylesheet cannot stretch it while the lock holds.
pub fn canvas_css_size(width: f32, height: f32) -> (String, String) {
    (format!("{}px", width), format!("{}px", height))
}

/// Backing-store pixels for a CSS size at device pixel ratio `dpr`, capped
/// at `max_dpr` and never zero.
pub fn backing_size(width: f32, height: f32, dpr: f64, max_dpr: f64) -> (u32, u32) {
    let dpr = dpr.min(max_dpr);
    let w = (width as f64 * dpr) as u32;
    let h = (height as f64 * dpr) as u32;
    (w.max(1), h.max(1))
}
