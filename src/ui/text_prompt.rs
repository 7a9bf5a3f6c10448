use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::editor::{CanvasFont, CanvasSurface, EditorState, TextPrompt};

/// Modal text entry for placing a text annotation.
///
/// Enter or OK places the text at the click that opened the prompt; Escape,
/// Cancel or a click outside discards it.
pub fn text_prompt_ui(
    mut contexts: EguiContexts,
    mut prompt: ResMut<TextPrompt>,
    mut state: ResMut<EditorState>,
    mut canvas: ResMut<CanvasSurface>,
    canvas_font: Res<CanvasFont>,
) -> Result {
    if !prompt.is_open() {
        return Ok(());
    }

    let mut confirmed = false;
    let mut cancelled = false;
    // The click that opened the prompt must not count as a backdrop click
    let just_opened = prompt.request_focus;

    let modal = egui::Modal::new(egui::Id::new("text_prompt")).show(contexts.ctx_mut()?, |ui| {
        ui.set_min_width(280.0);
        ui.label("Enter your text:");
        if let Some(anchor) = prompt.anchor() {
            ui.label(
                egui::RichText::new(format!("at ({:.0}, {:.0})", anchor.x, anchor.y))
                    .weak()
                    .small(),
            );
        }
        ui.add_space(6.0);

        let response = ui.add(
            egui::TextEdit::singleline(&mut prompt.buffer)
                .hint_text("Text...")
                .desired_width(260.0),
        );
        if prompt.request_focus {
            response.request_focus();
            prompt.request_focus = false;
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            confirmed = true;
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                confirmed = true;
            }
            if ui.button("Cancel").clicked() {
                cancelled = true;
            }
        });
    });

    if confirmed {
        if let Some(pending) = prompt.confirm()
            && let Some(surface) = canvas.edit()
        {
            state.place_text(
                surface,
                canvas_font.get(),
                &pending.text,
                pending.x,
                pending.y,
            );
        }
    } else if cancelled || (modal.should_close() && !just_opened) {
        prompt.cancel();
    }

    Ok(())
}
