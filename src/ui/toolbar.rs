use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::canvas::HexColor;
use crate::editor::EditorState;
use crate::theme;

/// Text currently in the size field. Kept separately from the parsed size so
/// the user can type freely; it snaps back to the applied value on blur.
#[derive(Default)]
pub struct SizeField {
    text: Option<String>,
}

/// Control row: stroke color, background color, size and mode toggle
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<EditorState>,
    mut size_field: Local<SizeField>,
) -> Result {
    egui::TopBottomPanel::top("controls")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8))
                .fill(theme::TOOLBAR_FILL),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                // Stroke / text color
                ui.label(egui::RichText::new("Color:").color(theme::LABEL_TEXT));
                let mut stroke = state.stroke_color.to_array();
                if ui
                    .color_edit_button_srgb(&mut stroke)
                    .on_hover_text("Stroke and text color")
                    .changed()
                {
                    state.stroke_color = HexColor::from_array(stroke);
                }
                ui.label(egui::RichText::new(state.stroke_color.to_string()).weak());

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                // Background color
                ui.label(egui::RichText::new("Background:").color(theme::LABEL_TEXT));
                let mut background = state.background_color().to_array();
                if ui
                    .color_edit_button_srgb(&mut background)
                    .on_hover_text("Canvas background (repaints and clears strokes)")
                    .changed()
                {
                    state.set_background_color(HexColor::from_array(background));
                }
                ui.label(egui::RichText::new(state.background_color().to_string()).weak());

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                // Line width / font size
                ui.label(egui::RichText::new("Size:").color(theme::LABEL_TEXT));
                let text = size_field
                    .text
                    .get_or_insert_with(|| state.size.to_string());
                let response = ui.add(
                    egui::TextEdit::singleline(text)
                        .desired_width(48.0)
                        .hint_text("16"),
                );
                if response.changed() && state.size.apply_input(text) {
                    debug!("Size set to {}", state.size);
                }
                if response.lost_focus() {
                    *text = state.size.to_string();
                }
                ui.label(egui::RichText::new("px").weak());

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                // Mode toggle
                let button = egui::Button::new(
                    egui::RichText::new(state.mode.button_label()).size(14.0).strong(),
                )
                .min_size(egui::vec2(0.0, 28.0));
                if ui.add(button).clicked() {
                    state.toggle_mode();
                }
            });
        });
    Ok(())
}
