//! Font loading and glyph outlining for canvas text.
//!
//! Text is drawn by converting glyph outlines into a single fill path, so it
//! shares anti-aliasing and blending with everything else on the surface.

use std::path::Path;

use ab_glyph::{Font, FontArc, GlyphId, OutlineCurve, PxScale, ScaleFont};
use bevy_egui::egui;
use tiny_skia::PathBuilder;

use super::error::{CanvasError, CanvasResult};

/// A loaded font that can measure and outline text at any pixel size.
#[derive(Clone)]
pub struct GlyphFont {
    font: FontArc,
}

impl std::fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphFont")
            .field("glyph_count", &self.font.glyph_count())
            .finish()
    }
}

impl GlyphFont {
    pub fn from_bytes(data: Vec<u8>) -> CanvasResult<Self> {
        FontArc::try_from_vec(data)
            .map(|font| Self { font })
            .map_err(|e| CanvasError::FontLoad(e.to_string()))
    }

    pub fn from_path(path: &Path) -> CanvasResult<Self> {
        let data = std::fs::read(path).map_err(|source| CanvasError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data)
    }

    /// The first proportional font that ships with egui.
    pub fn bundled() -> CanvasResult<Self> {
        let definitions = egui::FontDefinitions::default();
        let name = definitions
            .families
            .get(&egui::FontFamily::Proportional)
            .and_then(|names| names.first())
            .ok_or_else(|| CanvasError::FontLoad("no bundled proportional font".into()))?;
        let data = definitions
            .font_data
            .get(name)
            .ok_or_else(|| CanvasError::FontLoad(format!("bundled font {name:?} has no data")))?;
        Self::from_bytes(data.font.to_vec())
    }

    /// Scale such that one em equals `size` pixels (CSS `font-size` semantics).
    fn px_scale(&self, size: f32) -> PxScale {
        let units_per_em = self.font.units_per_em().unwrap_or(1000.0);
        PxScale::from(size * self.font.height_unscaled() / units_per_em)
    }

    /// Horizontal advance of `text` at `size`, including kerning.
    pub fn advance_width(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(self.px_scale(size));
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        width
    }

    /// Outline `text` so that it is centered horizontally on `cx` and the
    /// middle of the em box sits on `cy`.
    ///
    /// Returns `None` when nothing would be drawn (empty text, whitespace only,
    /// or no glyph outlines).
    pub fn outline_centered(
        &self,
        text: &str,
        size: f32,
        cx: f32,
        cy: f32,
    ) -> Option<tiny_skia::Path> {
        if text.is_empty() || !size.is_finite() || size <= 0.0 {
            return None;
        }

        let scaled = self.font.as_scaled(self.px_scale(size));
        let h_scale = scaled.h_scale_factor();
        let v_scale = scaled.v_scale_factor();
        let (ascent, descent) = (scaled.ascent(), scaled.descent());

        let mut caret = cx - self.advance_width(text, size) / 2.0;
        let baseline = cy + (ascent + descent) / 2.0;

        let mut builder = PathBuilder::new();
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            if let Some(outline) = self.font.outline(id) {
                let to_px = |p: ab_glyph::Point| (caret + p.x * h_scale, baseline - p.y * v_scale);
                append_curves(&mut builder, &outline.curves, to_px);
            }
            caret += scaled.h_advance(id);
            previous = Some(id);
        }

        builder.finish()
    }
}

/// Append outline curves, starting a new contour whenever a curve does not
/// continue from the previous end point.
fn append_curves(
    builder: &mut PathBuilder,
    curves: &[OutlineCurve],
    to_px: impl Fn(ab_glyph::Point) -> (f32, f32),
) {
    let mut last: Option<ab_glyph::Point> = None;
    for curve in curves {
        let (start, end) = match curve {
            OutlineCurve::Line(a, b) => (*a, *b),
            OutlineCurve::Quad(a, _, b) => (*a, *b),
            OutlineCurve::Cubic(a, _, _, b) => (*a, *b),
        };

        if last != Some(start) {
            if last.is_some() {
                builder.close();
            }
            let (x, y) = to_px(start);
            builder.move_to(x, y);
        }

        match curve {
            OutlineCurve::Line(_, b) => {
                let (x, y) = to_px(*b);
                builder.line_to(x, y);
            }
            OutlineCurve::Quad(_, c, b) => {
                let (cx, cy) = to_px(*c);
                let (x, y) = to_px(*b);
                builder.quad_to(cx, cy, x, y);
            }
            OutlineCurve::Cubic(_, c1, c2, b) => {
                let (c1x, c1y) = to_px(*c1);
                let (c2x, c2y) = to_px(*c2);
                let (x, y) = to_px(*b);
                builder.cubic_to(c1x, c1y, c2x, c2y, x, y);
            }
        }
        last = Some(end);
    }
    if last.is_some() {
        builder.close();
    }
}
