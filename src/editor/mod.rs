//! The canvas editor: state, input protocols and replay.
//!
//! ## Module Structure
//!
//! - [`state`] - `EditorState`, `CanvasSurface` and `CanvasFont` resources
//! - [`input`] - Pointer messages from the canvas view and their routing
//! - [`prompt`] - Modal text entry state
//! - [`annotation`] - Text annotation records
//! - [`mode`] - Draw/text mode
//! - [`size`] - Line width / font size policy

mod annotation;
mod input;
mod mode;
mod prompt;
mod size;
mod state;

pub use annotation::TextAnnotation;
pub use input::CanvasPointer;
pub use prompt::TextPrompt;
pub use size::StrokeSize;
pub use state::{CanvasFont, CanvasSurface, EditorState};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::canvas::GlyphFont;
use crate::config::{AppConfig, ConfigLoaded};

/// Ordering of editor work inside the egui pass. UI systems that emit pointer
/// messages run before `Input`; anything that changes the background or
/// annotations runs before `Replay`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditorSet {
    Input,
    Replay,
}

/// Seed editor state and load the annotation font from config
fn init_editor_from_config(
    config: Res<AppConfig>,
    mut state: ResMut<EditorState>,
    mut canvas_font: ResMut<CanvasFont>,
) {
    let data = &config.data;
    *state = EditorState::new(
        data.stroke_color,
        data.background_color,
        StrokeSize::new(data.size),
    );

    canvas_font.font = load_font(data.font_path.as_deref());
}

fn load_font(path: Option<&std::path::Path>) -> Option<GlyphFont> {
    if let Some(path) = path {
        match GlyphFont::from_path(path) {
            Ok(font) => {
                info!("Loaded font from {:?}", path);
                return Some(font);
            }
            Err(e) => warn!("{}, falling back to bundled font", e),
        }
    }

    match GlyphFont::bundled() {
        Ok(font) => Some(font),
        Err(e) => {
            error!("No font available for text annotations: {}", e);
            None
        }
    }
}

/// Repaint background and annotations after either changed
fn replay_canvas(
    mut state: ResMut<EditorState>,
    mut canvas: ResMut<CanvasSurface>,
    canvas_font: Res<CanvasFont>,
) {
    if !state.needs_replay() {
        return;
    }
    let Some(surface) = canvas.edit() else {
        return;
    };
    state.replay(surface, canvas_font.get());
    if !state.annotations().is_empty() {
        debug!("Replayed {} annotation(s)", state.annotations().len());
    }
}

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EditorState>()
            .init_resource::<CanvasSurface>()
            .init_resource::<CanvasFont>()
            .init_resource::<TextPrompt>()
            .add_message::<CanvasPointer>()
            .configure_sets(
                EguiPrimaryContextPass,
                (EditorSet::Input, EditorSet::Replay).chain(),
            )
            .add_systems(Startup, init_editor_from_config.after(ConfigLoaded))
            .add_systems(
                EguiPrimaryContextPass,
                input::handle_canvas_pointer.in_set(EditorSet::Input),
            )
            .add_systems(
                EguiPrimaryContextPass,
                replay_canvas.in_set(EditorSet::Replay),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::HexColor;

    #[test]
    fn test_load_font_falls_back_to_bundled() {
        let font = load_font(Some(std::path::Path::new("missing/font.ttf")));
        assert!(font.is_some());
    }

    #[test]
    fn test_replay_system_runs_only_when_needed() {
        let mut app = App::new();
        app.init_resource::<EditorState>()
            .init_resource::<CanvasSurface>()
            .init_resource::<CanvasFont>()
            .add_systems(Update, replay_canvas);

        {
            let world = app.world_mut();
            let mut state = world.remove_resource::<EditorState>().unwrap();
            world
                .resource_mut::<CanvasSurface>()
                .mount(8, 8, &mut state, None)
                .unwrap();
            world.insert_resource(state);
        }

        let revision = app.world().resource::<CanvasSurface>().revision();
        app.update();
        assert_eq!(app.world().resource::<CanvasSurface>().revision(), revision);

        app.world_mut()
            .resource_mut::<EditorState>()
            .set_background_color(HexColor::rgb(0, 0, 255));
        app.update();

        let canvas = app.world().resource::<CanvasSurface>();
        assert!(canvas.revision() > revision);
        assert_eq!(canvas.surface().unwrap().pixel(4, 4), Some([0, 0, 255, 255]));
        assert!(!app.world().resource::<EditorState>().needs_replay());
    }
}
