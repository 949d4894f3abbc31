use super::constants::{
    color_from_hex, FACE_BG_GRAY, FACE_BORDER_WIDTH, FACE_COUNT, FACE_ICON_ZOOM,
    TEXT_FACE_BG_HEX, TEXT_FACE_FONT_SIZE, TEXT_FACE_STROKE_HEX, TEXT_FACE_STROKE_INSET,
    TEXT_FACE_STROKE_WIDTH,
};
use fnv::FnvHashMap;
use glam::Vec3;
use std::fmt;

/// Minimal 2D drawing backend a face visual paints into. All lengths are
/// fractions of the (square) face edge.
pub trait FacePainter {
    fn fill(&mut self, color: Vec3);
    /// Solid band of `width` along all four edges.
    fn border(&mut self, color: Vec3, width: f32);
    /// Outline stroke inset by `inset` from the edges.
    fn stroke_inset(&mut self, color: Vec3, inset: f32, width: f32);
    /// Draw a loaded image asset inside a square inset by `inset`.
    /// Returns `false` if the asset is not available.
    fn image(&mut self, asset: &str, inset: f32, invert: bool) -> bool;
    /// Bold label centered on the face.
    fn text(&mut self, text: &str, font_size: f32, color: Vec3);
}

/// Something that can produce a face texture.
pub trait FaceVisual: fmt::Debug {
    fn paint(&self, painter: &mut dyn FacePainter);
    /// Short human-readable name, used for logs and as a fallback label.
    fn label(&self) -> &str;
    /// Image asset this visual needs loaded before painting.
    fn asset(&self) -> Option<&str> {
        None
    }
}

/// Icon on a dark tile with a white border.
#[derive(Clone, Debug)]
pub struct ImageFace {
    pub asset: &'static str,
    /// Black glyphs are drawn inverted so they read on the dark tile.
    pub black_icon: bool,
    pub fallback: &'static str,
}

impl ImageFace {
    pub fn new(asset: &'static str, fallback: &'static str) -> Self {
        Self {
            asset,
            black_icon: false,
            fallback,
        }
    }

    pub fn black(mut self) -> Self {
        self.black_icon = true;
        self
    }
}

impl FaceVisual for ImageFace {
    fn paint(&self, painter: &mut dyn FacePainter) {
        painter.fill(Vec3::splat(FACE_BG_GRAY));
        painter.border(Vec3::ONE, FACE_BORDER_WIDTH);
        let inset = (1.0 - 1.0 / FACE_ICON_ZOOM) * 0.5;
        if !painter.image(self.asset, inset, self.black_icon) {
            painter.text(self.fallback, TEXT_FACE_FONT_SIZE, Vec3::ONE);
        }
    }

    fn label(&self) -> &str {
        self.fallback
    }

    fn asset(&self) -> Option<&str> {
        Some(self.asset)
    }
}

/// Text label drawn on a dark tile.
#[derive(Clone, Debug)]
pub struct TextFace {
    pub text: String,
}

impl TextFace {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl FaceVisual for TextFace {
    fn paint(&self, painter: &mut dyn FacePainter) {
        painter.fill(color_from_hex(TEXT_FACE_BG_HEX));
        painter.stroke_inset(
            color_from_hex(TEXT_FACE_STROKE_HEX),
            TEXT_FACE_STROKE_INSET,
            TEXT_FACE_STROKE_WIDTH,
        );
        painter.text(&self.text, TEXT_FACE_FONT_SIZE, Vec3::ONE);
    }

    fn label(&self) -> &str {
        &self.text
    }
}

/// Visual and click behavior of one cube face.
#[derive(Debug)]
pub struct FaceConfig {
    pub index: usize,
    pub visual: Box<dyn FaceVisual>,
    pub url: Option<&'static str>,
}

/// The six faces plus the face -> page section table used by faces without
/// an external link.
#[derive(Debug)]
pub struct FaceTable {
    faces: Vec<FaceConfig>,
    sections: FnvHashMap<usize, &'static str>,
}

impl FaceTable {
    /// Build a table from exactly [`FACE_COUNT`] visual/url pairs; indices
    /// are assigned in order.
    pub fn new(entries: Vec<(Box<dyn FaceVisual>, Option<&'static str>)>) -> Self {
        debug_assert_eq!(entries.len(), FACE_COUNT);
        let faces = entries
            .into_iter()
            .take(FACE_COUNT)
            .enumerate()
            .map(|(index, (visual, url))| FaceConfig { index, visual, url })
            .collect();
        Self {
            faces,
            sections: default_sections(),
        }
    }

    pub fn with_sections(mut self, sections: &[(usize, &'static str)]) -> Self {
        self.sections = sections.iter().copied().collect();
        self
    }

    /// The landing page's social/contact cube.
    pub fn portfolio() -> Self {
        Self::new(vec![
            (
                Box::new(ImageFace::new("assets/linkedin.svg", "in")),
                Some("https://www.linkedin.com/"),
            ),
            (
                Box::new(ImageFace::new("assets/github.svg", "GH")),
                Some("https://github.com/"),
            ),
            (
                Box::new(ImageFace::new("assets/lazyhooks.svg", "PyPI").black()),
                Some("https://pypi.org/project/lazyhooks/"),
            ),
            (
                Box::new(ImageFace::new("assets/mail.svg", "@")),
                Some("mailto:hello@example.com"),
            ),
            (
                Box::new(ImageFace::new("assets/x.svg", "X")),
                Some("https://x.com/"),
            ),
            (
                Box::new(ImageFace::new("assets/whatsapp.svg", "WA")),
                Some("https://wa.me/"),
            ),
        ])
    }

    pub fn get(&self, index: usize) -> Option<&FaceConfig> {
        self.faces.get(index)
    }

    pub fn section(&self, index: usize) -> Option<&'static str> {
        self.sections.get(&index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FaceConfig> {
        self.faces.iter()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

fn default_sections() -> FnvHashMap<usize, &'static str> {
    [
        (0, "#work"),
        (1, "#about"),
        (2, "#work"),
        (3, "#work"),
        (4, "#work"),
        (5, "#contact"),
    ]
    .into_iter()
    .collect()
}
