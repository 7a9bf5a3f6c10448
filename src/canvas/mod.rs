//! Raster drawing surface for the editor.
//!
//! Everything in this module is independent of the ECS: a [`Surface`] is a
//! plain pixel buffer with a handful of drawing operations, and [`render`] is a
//! pure function that repaints it from the background color and annotation
//! list.
//!
//! ## Module Structure
//!
//! - [`color`] - `#rrggbb` colors and conversions
//! - [`surface`] - Pixel buffer, freehand path stroking, centered text
//! - [`font`] - Font loading and glyph outlining
//! - [`render`] - Background fill and annotation replay
//! - [`error`] - Construction errors

mod color;
mod error;
mod font;
mod render;
mod surface;

pub use color::HexColor;
pub use error::CanvasResult;
pub use font::GlyphFont;
pub use render::{render, render_new};
pub use surface::Surface;
