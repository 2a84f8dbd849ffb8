use std::io::Cursor;
use std::sync::OnceLock;

use ab_glyph::{Font, FontArc, GlyphId, Outline, OutlineCurve, ScaleFont};
use egui::{Color32, Pos2};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use super::{GLYPH_COLOR, GLYPH_SIZE, RenderSurface, ScaleStack};
use crate::error::{Result, SketchError};

/// egui's bundled fonts, text face first, emoji faces as fallback.
const FONT_ORDER: [&str; 4] = ["Ubuntu-Light", "NotoEmoji-Regular", "emoji-icon-font", "Hack"];

fn bundled_fonts() -> &'static [FontArc] {
    static FONTS: OnceLock<Vec<FontArc>> = OnceLock::new();
    FONTS.get_or_init(|| {
        let definitions = egui::FontDefinitions::default();
        FONT_ORDER
            .iter()
            .filter_map(|name| {
                let data = definitions.font_data.get(*name)?;
                match FontArc::try_from_vec(data.font.to_vec()) {
                    Ok(font) => Some(font),
                    Err(err) => {
                        log::warn!("Skipping font {name}: {err}");
                        None
                    }
                }
            })
            .collect()
    })
}

/// An offscreen RGBA raster, used for export.
pub struct RasterSurface {
    pixmap: Pixmap,
    scales: ScaleStack,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or(SketchError::MissingRenderTarget { width, height })?;
        Ok(Self {
            pixmap,
            scales: ScaleStack::default(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha color at a pixel, `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color32::from_rgba_unmultiplied(
            c.red(),
            c.green(),
            c.blue(),
            c.alpha(),
        ))
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let (width, height) = (self.width(), self.height());
        let mut rgba = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        let image = image::RgbaImage::from_raw(width, height, rgba)
            .ok_or(SketchError::MissingRenderTarget { width, height })?;

        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    fn base_transform(&self) -> Transform {
        let s = self.scales.current();
        Transform::from_scale(s, s)
    }
}

fn paint_for(color: Color32) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r(), color.g(), color.b(), color.a());
    paint.anti_alias = true;
    paint
}

impl RenderSurface for RasterSurface {
    fn clear(&mut self, fill: Color32) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(fill.r(), fill.g(), fill.b(), fill.a()));
    }

    fn draw_path(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width: thickness,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint_for(color),
            &stroke,
            self.base_transform(),
            None,
        );
    }

    fn draw_glyph(&mut self, text: &str, x: f32, y: f32, rotation: f32) {
        let Some(path) = text_path(bundled_fonts(), text) else {
            log::debug!("Nothing to draw for glyph {text:?}");
            return;
        };
        let transform = self
            .base_transform()
            .pre_concat(Transform::from_translate(x, y))
            .pre_concat(Transform::from_rotate(rotation.to_degrees()));
        self.pixmap.fill_path(
            &path,
            &paint_for(GLYPH_COLOR),
            FillRule::Winding,
            transform,
            None,
        );
    }

    fn begin_scaled_region(&mut self, scale: f32) {
        self.scales.push(scale);
    }

    fn end_scaled_region(&mut self) {
        self.scales.pop();
    }
}

/// Outline of `text` laid out on one line, centered on the origin.
fn text_path(fonts: &[FontArc], text: &str) -> Option<Path> {
    let primary = fonts.first()?;
    let glyphs: Vec<(&FontArc, GlyphId)> = text
        .chars()
        .map(|c| {
            let font = fonts
                .iter()
                .find(|f| f.glyph_id(c).0 != 0)
                .unwrap_or(primary);
            (font, font.glyph_id(c))
        })
        .collect();

    let width: f32 = glyphs
        .iter()
        .map(|(font, id)| font.as_scaled(GLYPH_SIZE).h_advance(*id))
        .sum();
    let metrics = primary.as_scaled(GLYPH_SIZE);
    // Puts the middle of the ascent..descent band on y = 0.
    let baseline = (metrics.ascent() + metrics.descent()) / 2.0;

    let mut pb = PathBuilder::new();
    let mut pen_x = -width / 2.0;
    for (font, id) in glyphs {
        let scaled = font.as_scaled(GLYPH_SIZE);
        if let Some(outline) = font.outline(id) {
            append_outline(
                &mut pb,
                &outline,
                pen_x,
                baseline,
                (scaled.h_scale_factor(), scaled.v_scale_factor()),
            );
        }
        pen_x += scaled.h_advance(id);
    }
    pb.finish()
}

fn append_outline(
    pb: &mut PathBuilder,
    outline: &Outline,
    pen_x: f32,
    baseline: f32,
    (h_scale, v_scale): (f32, f32),
) {
    // Font units are y-up.
    let map = |p: ab_glyph::Point| (pen_x + p.x * h_scale, baseline - p.y * v_scale);
    let mut last: Option<ab_glyph::Point> = None;

    for curve in &outline.curves {
        let (start, end) = match curve {
            OutlineCurve::Line(a, b) => (*a, *b),
            OutlineCurve::Quad(a, _, c) => (*a, *c),
            OutlineCurve::Cubic(a, _, _, d) => (*a, *d),
        };
        let continues = last.is_some_and(|l| l.x == start.x && l.y == start.y);
        if !continues {
            if last.is_some() {
                pb.close();
            }
            let (sx, sy) = map(start);
            pb.move_to(sx, sy);
        }
        match curve {
            OutlineCurve::Line(_, b) => {
                let (bx, by) = map(*b);
                pb.line_to(bx, by);
            }
            OutlineCurve::Quad(_, b, c) => {
                let (bx, by) = map(*b);
                let (cx, cy) = map(*c);
                pb.quad_to(bx, by, cx, cy);
            }
            OutlineCurve::Cubic(_, b, c, d) => {
                let (bx, by) = map(*b);
                let (cx, cy) = map(*c);
                let (dx, dy) = map(*d);
                pb.cubic_to(bx, by, cx, cy, dx, dy);
            }
        }
        last = Some(end);
    }
    if last.is_some() {
        pb.close();
    }
}
