use bevy_egui::egui;

/// How pointer input on the canvas is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Draw,
    Text,
}

impl EditorMode {
    pub fn toggled(self) -> Self {
        match self {
            EditorMode::Draw => EditorMode::Text,
            EditorMode::Text => EditorMode::Draw,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EditorMode::Draw => "Drawing",
            EditorMode::Text => "Text",
        }
    }

    /// Label for the mode toggle button
    pub fn button_label(&self) -> String {
        format!("Mode: {}", self.display_name())
    }

    pub fn cursor_icon(&self) -> egui::CursorIcon {
        match self {
            EditorMode::Draw => egui::CursorIcon::Crosshair,
            EditorMode::Text => egui::CursorIcon::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_draw() {
        assert_eq!(EditorMode::default(), EditorMode::Draw);
    }

    #[test]
    fn test_toggle_flips_between_modes() {
        assert_eq!(EditorMode::Draw.toggled(), EditorMode::Text);
        assert_eq!(EditorMode::Text.toggled(), EditorMode::Draw);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for mode in [EditorMode::Draw, EditorMode::Text] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(EditorMode::Draw.button_label(), "Mode: Drawing");
        assert_eq!(EditorMode::Text.button_label(), "Mode: Text");
    }

    #[test]
    fn test_cursor_icons() {
        assert_eq!(EditorMode::Draw.cursor_icon(), egui::CursorIcon::Crosshair);
        assert_eq!(EditorMode::Text.cursor_icon(), egui::CursorIcon::Text);
    }
}
