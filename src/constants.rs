//! Centralized constants used across the application.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Share of the central panel height given to the canvas when it is mounted
pub const CANVAS_HEIGHT_FRACTION: f32 = 0.8;

/// Width of the frame drawn around the canvas, in points
pub const CANVAS_BORDER_WIDTH: f32 = 2.0;
