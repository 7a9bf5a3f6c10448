//! Fixed-size raster surface the editor draws into.
//!
//! Mirrors the small subset of a 2D canvas context the editor needs: a solid
//! fill, an open path that is stroked one segment at a time, and centered text.

use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::color::HexColor;
use super::error::{CanvasError, CanvasResult};
use super::font::GlyphFont;

/// The open freehand path. Only the last point is needed to extend it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OpenPath {
    last: (f32, f32),
}

pub struct Surface {
    pixmap: Pixmap,
    path: Option<OpenPath>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("path", &self.path)
            .finish()
    }
}

impl Surface {
    /// Create a transparent surface. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;
        Ok(Self { pixmap, path: None })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Pixel at (x, y) as RGBA, or `None` outside the surface.
    #[allow(dead_code)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: HexColor) {
        self.pixmap.fill(color.to_skia());
    }

    /// Start a new freehand path at (x, y), discarding any open one.
    pub fn begin_path(&mut self, x: f32, y: f32) {
        self.path = Some(OpenPath { last: (x, y) });
    }

    pub fn has_open_path(&self) -> bool {
        self.path.is_some()
    }

    /// Extend the open path to (x, y) and stroke the new segment.
    ///
    /// Without an open path this only starts one. Invalid widths are ignored.
    pub fn line_to(&mut self, x: f32, y: f32, color: HexColor, width: f32) {
        let Some(path) = self.path.as_mut() else {
            self.begin_path(x, y);
            return;
        };
        let (x0, y0) = path.last;
        path.last = (x, y);

        if !width.is_finite() || width <= 0.0 {
            return;
        }

        let mut builder = PathBuilder::new();
        builder.move_to(x0, y0);
        builder.line_to(x, y);
        let Some(segment) = builder.finish() else {
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&segment, &solid_paint(color), &stroke, Transform::identity(), None);
    }

    pub fn close_path(&mut self) {
        self.path = None;
    }

    /// Fill `text` centered both ways on (x, y).
    pub fn fill_text_centered(
        &mut self,
        font: &GlyphFont,
        text: &str,
        size: f32,
        color: HexColor,
        x: f32,
        y: f32,
    ) {
        if let Some(outline) = font.outline_centered(text, size, x, y) {
            self.pixmap.fill_path(
                &outline,
                &solid_paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}

fn solid_paint(color: HexColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}
