mod canvas_view;
mod notifications;
mod text_prompt;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::ConfigResetNotification;
use crate::editor::{EditorSet, TextPrompt};

/// Resource that tracks whether any modal dialog is currently open.
/// The canvas view checks this to avoid emitting pointer input while the
/// user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block canvas input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    prompt: Res<TextPrompt>,
    config_reset: Res<ConfigResetNotification>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = prompt.is_open() || config_reset.show;
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<canvas_view::CanvasTexture>()
            // Top panel must render before the central panel so the canvas
            // is laid out in the space left below the toolbar
            .add_systems(
                EguiPrimaryContextPass,
                (toolbar::toolbar_ui, canvas_view::canvas_view_ui)
                    .chain()
                    .before(EditorSet::Input),
            )
            // Dialogs may add annotations, so they finish before the replay
            .add_systems(
                EguiPrimaryContextPass,
                (
                    text_prompt::text_prompt_ui,
                    notifications::config_reset_notification_ui,
                )
                    .after(EditorSet::Input)
                    .before(EditorSet::Replay),
            )
            .add_systems(
                EguiPrimaryContextPass,
                canvas_view::sync_canvas_texture.after(EditorSet::Replay),
            )
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
