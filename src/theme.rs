//! Centralized color theme for the editor chrome.
//!
//! Canvas content colors come from the user; these only style the UI around it.

use bevy_egui::egui;

/// Dimmed backdrop behind the toolbar and canvas
pub const BACKDROP: egui::Color32 = egui::Color32::from_rgb(64, 64, 64);

/// Toolbar panel fill
pub const TOOLBAR_FILL: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

/// Frame around the drawing surface
pub const CANVAS_BORDER: egui::Color32 = egui::Color32::BLACK;

/// Secondary label text in the toolbar
pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;
