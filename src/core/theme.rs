use super::constants::{color_from_hex, DARK_BG_HEX, LIGHT_BG_HEX, THEME_RELAX_RATE};
use super::relax::{lerp_color, relax};
use glam::Vec3;

/// Storage key of the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Global invert amount the scene blends toward.
    pub fn target_invert(self) -> f32 {
        if self.is_light() {
            1.0
        } else {
            0.0
        }
    }

    /// Glyph shown on the toggle buttons.
    pub fn icon(self) -> &'static str {
        if self.is_light() {
            "☾"
        } else {
            "☀"
        }
    }

    pub fn icon_transform(self) -> &'static str {
        if self.is_light() {
            "rotate(360deg)"
        } else {
            "rotate(0deg)"
        }
    }
}

/// Durable key-value home of the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme);
}

/// In-memory store for host-side tests.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryThemeStore {
    pub value: Option<String>,
}

#[cfg(test)]
impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.value.as_deref().and_then(Theme::parse)
    }

    fn save(&mut self, theme: Theme) {
        self.value = Some(theme.as_str().to_string());
    }
}

/// Target theme plus the continuously relaxed invert amount the renderer
/// reads. Toggling never changes `invert` directly.
#[derive(Clone, Copy, Debug)]
pub struct ThemeState {
    pub theme: Theme,
    pub invert: f32,
    pub rate: f32,
}

impl ThemeState {
    /// Start already settled on `theme`.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            invert: theme.target_invert(),
            rate: THEME_RELAX_RATE,
        }
    }

    /// Flip the theme and persist it. The blend catches up over the
    /// following frames.
    pub fn toggle(&mut self, store: &mut dyn ThemeStore) -> Theme {
        self.theme = self.theme.toggled();
        store.save(self.theme);
        self.theme
    }

    /// One frame of relaxation toward the target; returns the new invert.
    pub fn step(&mut self) -> f32 {
        self.invert = relax(self.invert, self.theme.target_invert(), self.rate);
        self.invert
    }

    pub fn background(&self) -> Vec3 {
        lerp_color(
            color_from_hex(DARK_BG_HEX),
            color_from_hex(LIGHT_BG_HEX),
            self.invert,
        )
    }

    /// Gray level of the wireframe and particles.
    pub fn line_gray(&self) -> f32 {
        1.0 - self.invert
    }
}

/// Theme at startup: an explicit `light-mode` marker or a stored preference.
pub fn initial_theme(marked_light: bool, store: &dyn ThemeStore) -> Theme {
    if marked_light || store.load() == Some(Theme::Light) {
        Theme::Light
    } else {
        Theme::Dark
    }
}
