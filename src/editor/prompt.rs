//! Modal text entry opened by a click in text mode.
//!
//! While open, the prompt holds the click position and blocks all other
//! canvas input until the user confirms or cancels.

use bevy::prelude::*;

/// Text confirmed in the prompt together with the click that opened it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingText {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Resource, Default, Debug)]
pub struct TextPrompt {
    anchor: Option<Vec2>,
    pub buffer: String,
    /// Set on open so the UI focuses the text field once
    pub request_focus: bool,
}

impl TextPrompt {
    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<Vec2> {
        self.anchor
    }

    /// Open at a canvas position. Ignored if already open.
    pub fn open_at(&mut self, x: f32, y: f32) {
        if self.is_open() {
            return;
        }
        self.anchor = Some(Vec2::new(x, y));
        self.buffer.clear();
        self.request_focus = true;
    }

    /// Close with the entered text. Empty input yields nothing.
    pub fn confirm(&mut self) -> Option<PendingText> {
        let anchor = self.anchor.take()?;
        let text = std::mem::take(&mut self.buffer);
        self.request_focus = false;
        if text.is_empty() {
            return None;
        }
        Some(PendingText {
            text,
            x: anchor.x,
            y: anchor.y,
        })
    }

    pub fn cancel(&mut self) {
        self.anchor = None;
        self.buffer.clear();
        self.request_focus = false;
    }
}
