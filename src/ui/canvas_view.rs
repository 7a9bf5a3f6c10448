//! Central panel showing the drawing surface.
//!
//! The surface is created at the size of the first layout and shown 1:1 in
//! UI points, so pointer positions relative to the canvas rect are surface
//! pixel coordinates.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::canvas::Surface;
use crate::constants::{CANVAS_BORDER_WIDTH, CANVAS_HEIGHT_FRACTION};
use crate::editor::{CanvasFont, CanvasPointer, CanvasSurface, EditorState};
use crate::theme;

use super::DialogState;

const TEXTURE_OPTIONS: egui::TextureOptions = egui::TextureOptions::NEAREST;

/// GPU copy of the surface and the surface revision it holds
#[derive(Resource, Default)]
pub struct CanvasTexture {
    handle: Option<egui::TextureHandle>,
    revision: u64,
}

impl CanvasTexture {
    /// Texture id for the surface, creating or refreshing the texture as needed
    fn texture_id(&mut self, ctx: &egui::Context, surface: &Surface, revision: u64) -> egui::TextureId {
        match &mut self.handle {
            Some(handle) => {
                if self.revision != revision {
                    handle.set(surface_image(surface), TEXTURE_OPTIONS);
                    self.revision = revision;
                }
                handle.id()
            }
            None => {
                let handle = ctx.load_texture("sketchpad-canvas", surface_image(surface), TEXTURE_OPTIONS);
                let id = handle.id();
                self.handle = Some(handle);
                self.revision = revision;
                id
            }
        }
    }

    /// Refresh an existing texture; does nothing before the first upload
    fn refresh(&mut self, surface: &Surface, revision: u64) {
        if let Some(handle) = self.handle.as_mut()
            && self.revision != revision
        {
            handle.set(surface_image(surface), TEXTURE_OPTIONS);
            self.revision = revision;
        }
    }
}

fn surface_image(surface: &Surface) -> egui::ColorImage {
    egui::ColorImage::from_rgba_premultiplied(
        [surface.width() as usize, surface.height() as usize],
        surface.data(),
    )
}

/// Pointer state for one frame, relative to the canvas rect
#[derive(Debug, Clone, Copy, Default)]
struct PointerFrame {
    /// Pointer position in canvas coordinates, if known
    pos: Option<egui::Vec2>,
    /// Pointer is geometrically inside the canvas
    inside: bool,
    /// Canvas is the topmost widget under the pointer
    hovered: bool,
    pressed: bool,
    released: bool,
    moved: bool,
    clicked: bool,
}

/// Translate one frame of pointer state into canvas pointer messages.
/// `was_inside` carries the inside flag across frames to detect leaving.
fn pointer_messages(frame: PointerFrame, was_inside: &mut bool) -> Vec<CanvasPointer> {
    let mut messages = Vec::new();

    if let Some(pos) = frame.pos {
        if frame.pressed && frame.hovered {
            messages.push(CanvasPointer::Down { x: pos.x, y: pos.y });
        }
        if frame.moved && frame.inside {
            messages.push(CanvasPointer::Move { x: pos.x, y: pos.y });
        }
    }

    if frame.released && frame.inside {
        messages.push(CanvasPointer::Up);
    }
    if *was_inside && !frame.inside {
        messages.push(CanvasPointer::Leave);
    }
    *was_inside = frame.inside;

    if frame.clicked
        && let Some(pos) = frame.pos
    {
        messages.push(CanvasPointer::Click { x: pos.x, y: pos.y });
    }

    messages
}

#[allow(clippy::too_many_arguments)]
pub fn canvas_view_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<EditorState>,
    mut canvas: ResMut<CanvasSurface>,
    canvas_font: Res<CanvasFont>,
    mut texture: ResMut<CanvasTexture>,
    dialog_state: Res<DialogState>,
    mut pointer_events: MessageWriter<CanvasPointer>,
    mut was_inside: Local<bool>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    egui::CentralPanel::default()
        .frame(
            egui::Frame::central_panel(&ctx.style())
                .fill(theme::BACKDROP)
                .inner_margin(egui::Margin::same(16)),
        )
        .show(ctx, |ui| {
            if !canvas.is_mounted() {
                let available = ui.available_size();
                let width = available.x.floor().max(1.0) as u32;
                let height = (available.y * CANVAS_HEIGHT_FRACTION).floor().max(1.0) as u32;
                if let Err(e) = canvas.mount(width, height, &mut state, canvas_font.get()) {
                    error!("Failed to create canvas: {}", e);
                    return;
                }
            }

            let revision = canvas.revision();
            let Some(surface) = canvas.surface() else {
                return;
            };
            let size = egui::vec2(surface.width() as f32, surface.height() as f32);
            let texture_id = texture.texture_id(ui.ctx(), surface, revision);

            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ui.painter().image(texture_id, rect, uv, egui::Color32::WHITE);
            ui.painter().rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(CANVAS_BORDER_WIDTH, theme::CANVAS_BORDER),
                egui::StrokeKind::Outside,
            );

            if dialog_state.any_modal_open {
                *was_inside = false;
                return;
            }

            let frame = ui.input(|i| {
                let latest = i.pointer.latest_pos();
                PointerFrame {
                    pos: latest.map(|p| p - rect.min),
                    inside: latest.is_some_and(|p| rect.contains(p)),
                    hovered: response.hovered(),
                    pressed: i.pointer.primary_pressed(),
                    released: i.pointer.primary_released(),
                    moved: i.pointer.delta() != egui::Vec2::ZERO,
                    clicked: response.clicked(),
                }
            });
            for message in pointer_messages(frame, &mut was_inside) {
                pointer_events.write(message);
            }

            if response.hovered() {
                ui.ctx().set_cursor_icon(state.mode.cursor_icon());
            }
        });
    Ok(())
}

/// Push pixels changed by input handling or replay to the texture
pub fn sync_canvas_texture(canvas: Res<CanvasSurface>, mut texture: ResMut<CanvasTexture>) {
    if let Some(surface) = canvas.surface() {
        texture.refresh(surface, canvas.revision());
    }
}
