use crate::core::{FacePainter, FaceTable};
use fnv::FnvHashMap;
use glam::Vec3;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Edge length of every face texture, in pixels.
pub const FACE_TEXTURE_SIZE: u32 = 512;

/// RGBA8 pixels of one face, row-major from the top-left corner.
pub type FacePixels = Vec<u8>;

pub type FaceImages = FnvHashMap<String, web::HtmlImageElement>;

async fn load_image(src: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(src);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", src, e))?;
    Ok(img)
}

/// Icon assets of a table, by face index. Collected up front so no borrow
/// of the table is held across the loads.
pub fn face_assets(table: &FaceTable) -> Vec<(usize, String)> {
    table
        .iter()
        .filter_map(|f| f.visual.asset().map(|a| (f.index, a.to_string())))
        .collect()
}

/// Fetch and decode every icon. Failed icons are left out; their faces
/// paint a text fallback instead.
pub async fn load_face_images(assets: Vec<(usize, String)>) -> FaceImages {
    let mut images = FaceImages::default();
    for (index, asset) in assets {
        match load_image(&asset).await {
            Ok(img) => {
                images.insert(asset, img);
            }
            Err(e) => log::warn!("[faces] face {} icon unavailable: {:?}", index, e),
        }
    }
    images
}

fn css_rgb(c: Vec3) -> String {
    let c = (c.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    format!("rgb({}, {}, {})", c.x as u8, c.y as u8, c.z as u8)
}

/// Paints into an offscreen 2D canvas.
struct CanvasFacePainter<'a> {
    ctx: web::CanvasRenderingContext2d,
    size: f64,
    images: &'a FaceImages,
}

impl FacePainter for CanvasFacePainter<'_> {
    fn fill(&mut self, color: Vec3) {
        self.ctx.set_fill_style_str(&css_rgb(color));
        self.ctx.fill_rect(0.0, 0.0, self.size, self.size);
    }

    fn border(&mut self, color: Vec3, width: f32) {
        let s = self.size;
        let bw = width as f64 * s;
        self.ctx.set_fill_style_str(&css_rgb(color));
        self.ctx.fill_rect(0.0, 0.0, s, bw);
        self.ctx.fill_rect(0.0, s - bw, s, bw);
        self.ctx.fill_rect(0.0, 0.0, bw, s);
        self.ctx.fill_rect(s - bw, 0.0, bw, s);
    }

    fn stroke_inset(&mut self, color: Vec3, inset: f32, width: f32) {
        let s = self.size;
        let i = inset as f64 * s;
        self.ctx.set_stroke_style_str(&css_rgb(color));
        self.ctx.set_line_width(width as f64 * s);
        self.ctx.stroke_rect(i, i, s - 2.0 * i, s - 2.0 * i);
    }

    fn image(&mut self, asset: &str, inset: f32, invert: bool) -> bool {
        let Some(img) = self.images.get(asset) else {
            return false;
        };
        let s = self.size;
        let i = inset as f64 * s;
        if invert {
            self.ctx.set_filter("invert(1)");
        }
        let drawn = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(img, i, i, s - 2.0 * i, s - 2.0 * i)
            .is_ok();
        self.ctx.set_filter("none");
        drawn
    }

    fn text(&mut self, text: &str, font_size: f32, color: Vec3) {
        let s = self.size;
        self.ctx.set_fill_style_str(&css_rgb(color));
        self.ctx.set_font(&format!(
            "bold {}px Inter, system-ui, sans-serif",
            (font_size as f64 * s).round()
        ));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        _ = self.ctx.fill_text(text, s * 0.5, s * 0.5);
    }
}

/// Rasterize every face of `table` into RGBA8 layers.
pub fn paint_faces(
    document: &web::Document,
    table: &FaceTable,
    images: &FaceImages,
) -> anyhow::Result<Vec<FacePixels>> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(FACE_TEXTURE_SIZE);
    canvas.set_height(FACE_TEXTURE_SIZE);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let size = FACE_TEXTURE_SIZE as f64;
    let mut painter = CanvasFacePainter {
        ctx,
        size,
        images,
    };
    let mut layers = Vec::with_capacity(table.len());
    for face in table.iter() {
        painter.ctx.clear_rect(0.0, 0.0, size, size);
        face.visual.paint(&mut painter);
        let data = painter
            .ctx
            .get_image_data(0.0, 0.0, size, size)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        layers.push(data.data().0);
        log::info!("[faces] painted face {} ({})", face.index, face.visual.label());
    }
    Ok(layers)
}
