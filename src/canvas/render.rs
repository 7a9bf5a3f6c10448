//! Background fill plus annotation replay.

use crate::editor::TextAnnotation;

use super::color::HexColor;
use super::error::CanvasResult;
use super::font::GlyphFont;
use super::surface::Surface;

/// Repaint `surface` from scratch: fill with `background`, then draw every
/// annotation in order with its own color, size and anchor.
///
/// Freehand strokes already on the surface are painted over. Without a font
/// only the background is drawn.
pub fn render(
    surface: &mut Surface,
    background: HexColor,
    annotations: &[TextAnnotation],
    font: Option<&GlyphFont>,
) {
    surface.fill(background);

    let Some(font) = font else {
        return;
    };
    for annotation in annotations {
        surface.fill_text_centered(
            font,
            &annotation.text,
            annotation.font_size.as_f32(),
            annotation.color,
            annotation.x,
            annotation.y,
        );
    }
}

/// Allocate a surface of the given size and render into it.
pub fn render_new(
    width: u32,
    height: u32,
    background: HexColor,
    annotations: &[TextAnnotation],
    font: Option<&GlyphFont>,
) -> CanvasResult<Surface> {
    let mut surface = Surface::new(width, height)?;
    render(&mut surface, background, annotations, font);
    Ok(surface)
}
