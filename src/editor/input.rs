//! Pointer input on the canvas, in canvas pixel coordinates.

use bevy::prelude::*;

use super::mode::EditorMode;
use super::prompt::TextPrompt;
use super::state::{CanvasSurface, EditorState};

/// Pointer activity over the canvas, emitted by the canvas view.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum CanvasPointer {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Leave,
    Click { x: f32, y: f32 },
}

/// Route one pointer event to the draw or text protocol.
pub fn apply_pointer(
    event: CanvasPointer,
    state: &mut EditorState,
    canvas: &mut CanvasSurface,
    prompt: &mut TextPrompt,
) {
    // The prompt is modal
    if prompt.is_open() {
        return;
    }

    match event {
        CanvasPointer::Down { x, y } => {
            if let Some(surface) = canvas.edit() {
                state.pointer_down(surface, x, y);
            }
        }
        CanvasPointer::Move { x, y } => {
            if state.mode != EditorMode::Draw || !state.is_drawing_active() {
                return;
            }
            if let Some(surface) = canvas.edit() {
                state.pointer_move(surface, x, y);
            }
        }
        CanvasPointer::Up | CanvasPointer::Leave => {
            if let Some(surface) = canvas.edit() {
                state.pointer_up(surface);
            }
        }
        CanvasPointer::Click { x, y } => {
            if state.mode == EditorMode::Text && canvas.is_mounted() {
                prompt.open_at(x, y);
            }
        }
    }
}

pub fn handle_canvas_pointer(
    mut events: MessageReader<CanvasPointer>,
    mut state: ResMut<EditorState>,
    mut canvas: ResMut<CanvasSurface>,
    mut prompt: ResMut<TextPrompt>,
) {
    for event in events.read() {
        apply_pointer(*event, &mut state, &mut canvas, &mut prompt);
    }
}
