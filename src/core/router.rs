use super::faces::FaceTable;

/// CSS selector of page elements that keep their own click behavior even
/// where the cube overlaps them.
pub const INTERACTIVE_SELECTOR: &str = "a, button, .nav, .work-item, .contact-email, .social-link";

/// Outbound side effects of a face click.
pub trait Navigator {
    fn open_url(&mut self, url: &str);
    /// Smooth-scroll to `anchor`. Returns `false` if the target is missing.
    fn scroll_to(&mut self, anchor: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceAction {
    OpenUrl(&'static str),
    ScrollTo(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click landed on page UI; the cube ignored it.
    PassedThrough,
    /// The click missed the cube.
    Missed,
    Routed(usize, Option<FaceAction>),
}

/// Face index -> action dispatch.
pub fn route(faces: &FaceTable, face: usize, nav: &mut dyn Navigator) -> Option<FaceAction> {
    let config = faces.get(face)?;
    if let Some(url) = config.url {
        nav.open_url(url);
        return Some(FaceAction::OpenUrl(url));
    }
    let anchor = faces.section(face)?;
    // A missing target is not an error.
    _ = nav.scroll_to(anchor);
    Some(FaceAction::ScrollTo(anchor))
}

/// Full click path: interactive page elements win over the cube.
pub fn handle_click(
    faces: &FaceTable,
    target_is_interactive: bool,
    face: Option<usize>,
    nav: &mut dyn Navigator,
) -> ClickOutcome {
    if target_is_interactive {
        return ClickOutcome::PassedThrough;
    }
    match face {
        Some(i) => ClickOutcome::Routed(i, route(faces, i, nav)),
        None => ClickOutcome::Missed,
    }
}
