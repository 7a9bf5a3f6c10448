//! Editor state resources and the draw/text protocols.

use bevy::prelude::*;

use crate::canvas::{self, CanvasResult, GlyphFont, HexColor, Surface};

use super::annotation::{Annotations, TextAnnotation};
use super::mode::EditorMode;
use super::size::StrokeSize;

/// Everything the editor remembers between input events.
///
/// The background color and annotation list are only reachable through
/// setters so that every change to them schedules a replay.
#[derive(Resource, Debug)]
pub struct EditorState {
    pub stroke_color: HexColor,
    pub size: StrokeSize,
    pub mode: EditorMode,
    background_color: HexColor,
    is_drawing_active: bool,
    annotations: Annotations,
    needs_replay: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(HexColor::BLACK, HexColor::WHITE, StrokeSize::DEFAULT)
    }
}

impl EditorState {
    pub fn new(stroke_color: HexColor, background_color: HexColor, size: StrokeSize) -> Self {
        Self {
            stroke_color,
            size,
            mode: EditorMode::default(),
            background_color,
            is_drawing_active: false,
            annotations: Annotations::default(),
            needs_replay: true,
        }
    }

    pub fn background_color(&self) -> HexColor {
        self.background_color
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn is_drawing_active(&self) -> bool {
        self.is_drawing_active
    }

    pub fn needs_replay(&self) -> bool {
        self.needs_replay
    }

    /// Change the background. Returns true (and schedules a replay) only if
    /// the color actually changed.
    pub fn set_background_color(&mut self, color: HexColor) -> bool {
        if color == self.background_color {
            return false;
        }
        debug!("Background color {} -> {}", self.background_color, color);
        self.background_color = color;
        self.needs_replay = true;
        true
    }

    /// Flip between draw and text mode. Strokes, annotations and the drawing
    /// flag are left alone.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        debug!("Mode switched to {}", self.mode.display_name());
    }

    pub fn pointer_down(&mut self, surface: &mut Surface, x: f32, y: f32) {
        if self.mode != EditorMode::Draw {
            return;
        }
        surface.begin_path(x, y);
        self.is_drawing_active = true;
    }

    pub fn pointer_move(&mut self, surface: &mut Surface, x: f32, y: f32) {
        if self.mode != EditorMode::Draw || !self.is_drawing_active {
            return;
        }
        surface.line_to(x, y, self.stroke_color, self.size.as_f32());
    }

    /// Pointer released or left the canvas.
    ///
    /// Gated on draw mode like the other handlers, so a mode switch in the
    /// middle of a stroke leaves the flag set until the next release in draw
    /// mode. Moves stay gated on the mode, so nothing is drawn meanwhile.
    pub fn pointer_up(&mut self, surface: &mut Surface) {
        if self.mode != EditorMode::Draw {
            return;
        }
        if surface.has_open_path() {
            debug!("Stroke finished");
        }
        surface.close_path();
        self.is_drawing_active = false;
    }

    /// Place a text label centered on (x, y).
    ///
    /// Empty text and draw mode are no-ops. Otherwise the text is drawn
    /// immediately and recorded, which schedules a replay. Returns true if an
    /// annotation was added.
    pub fn place_text(
        &mut self,
        surface: &mut Surface,
        font: Option<&GlyphFont>,
        text: &str,
        x: f32,
        y: f32,
    ) -> bool {
        if self.mode != EditorMode::Text || text.is_empty() {
            return false;
        }

        match font {
            Some(font) => surface.fill_text_centered(
                font,
                text,
                self.size.as_f32(),
                self.stroke_color,
                x,
                y,
            ),
            None => warn!("No font loaded, text {:?} recorded but not drawn", text),
        }

        self.annotations.push(TextAnnotation {
            text: text.to_string(),
            color: self.stroke_color,
            font_size: self.size,
            x,
            y,
        });
        self.needs_replay = true;
        info!(
            "Placed text annotation #{} at ({:.0}, {:.0})",
            self.annotations.len(),
            x,
            y
        );
        true
    }

    /// Repaint the surface from the background and annotations.
    pub fn replay(&mut self, surface: &mut Surface, font: Option<&GlyphFont>) {
        canvas::render(
            surface,
            self.background_color,
            self.annotations.as_slice(),
            font,
        );
        self.needs_replay = false;
    }
}

/// The drawing surface, created on the first layout of the canvas view.
#[derive(Resource, Default)]
pub struct CanvasSurface {
    surface: Option<Surface>,
    /// Bumped whenever the pixels may have changed
    revision: u64,
}

impl CanvasSurface {
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Mutable access for drawing. Counts as a change.
    pub fn edit(&mut self) -> Option<&mut Surface> {
        let surface = self.surface.as_mut()?;
        self.revision += 1;
        Some(surface)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Create the surface at its on-screen size and paint the initial state.
    /// The size stays fixed afterwards; mounting twice is a no-op.
    pub fn mount(
        &mut self,
        width: u32,
        height: u32,
        state: &mut EditorState,
        font: Option<&GlyphFont>,
    ) -> CanvasResult<()> {
        if self.surface.is_some() {
            return Ok(());
        }
        let surface = canvas::render_new(
            width,
            height,
            state.background_color,
            state.annotations.as_slice(),
            font,
        )?;
        state.needs_replay = false;
        self.surface = Some(surface);
        self.revision += 1;
        info!("Canvas mounted at {}x{}", width, height);
        Ok(())
    }
}

/// Font used for text annotations, if one could be loaded.
#[derive(Resource, Default)]
pub struct CanvasFont {
    pub font: Option<GlyphFont>,
}

impl CanvasFont {
    pub fn get(&self) -> Option<&GlyphFont> {
        self.font.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: HexColor = HexColor::rgb(255, 0, 0);
    const WHITE_PX: [u8; 4] = [255, 255, 255, 255];

    fn mounted(state: &mut EditorState) -> Surface {
        let mut surface = Surface::new(120, 80).unwrap();
        state.replay(&mut surface, None);
        surface
    }

    #[test]
    fn test_default_state() {
        let state = EditorState::default();
        assert_eq!(state.stroke_color, HexColor::BLACK);
        assert_eq!(state.background_color(), HexColor::WHITE);
        assert_eq!(state.size.get(), 16);
        assert_eq!(state.mode, EditorMode::Draw);
        assert!(!state.is_drawing_active());
        assert!(state.annotations().is_empty());
        assert!(state.needs_replay());
    }

    #[test]
    fn test_replay_clears_flag() {
        let mut state = EditorState::default();
        let _surface = mounted(&mut state);
        assert!(!state.needs_replay());
    }

    #[test]
    fn test_draw_stroke_scenario() {
        let mut state = EditorState::default();
        state.stroke_color = RED;
        state.size = StrokeSize::new(4);
        let mut surface = mounted(&mut state);

        state.pointer_down(&mut surface, 10.0, 10.0);
        assert!(state.is_drawing_active());
        state.pointer_move(&mut surface, 20.0, 20.0);
        state.pointer_up(&mut surface);

        assert!(!state.is_drawing_active());
        assert!(!surface.has_open_path());
        assert_eq!(surface.pixel(15, 15), Some([255, 0, 0, 255]));
        assert_eq!(surface.pixel(60, 60), Some(WHITE_PX));
        assert!(state.annotations().is_empty());
        assert!(!state.needs_replay());
    }

    #[test]
    fn test_move_without_down_draws_nothing() {
        let mut state = EditorState::default();
        let mut surface = mounted(&mut state);
        state.pointer_move(&mut surface, 10.0, 10.0);
        state.pointer_move(&mut surface, 50.0, 50.0);
        assert_eq!(surface.pixel(30, 30), Some(WHITE_PX));
    }

    #[test]
    fn test_draw_handlers_ignored_in_text_mode() {
        let mut state = EditorState::default();
        state.toggle_mode();
        let mut surface = mounted(&mut state);

        state.pointer_down(&mut surface, 10.0, 10.0);
        assert!(!state.is_drawing_active());
        state.pointer_move(&mut surface, 50.0, 50.0);
        assert_eq!(surface.pixel(30, 30), Some(WHITE_PX));
    }

    #[test]
    fn test_toggle_mid_stroke_keeps_flag_but_stops_drawing() {
        let mut state = EditorState::default();
        let mut surface = mounted(&mut state);

        state.pointer_down(&mut surface, 10.0, 40.0);
        state.toggle_mode();
        state.pointer_move(&mut surface, 110.0, 40.0);
        state.pointer_up(&mut surface);

        assert!(state.is_drawing_active());
        assert_eq!(surface.pixel(60, 40), Some(WHITE_PX));

        // Back in draw mode the next release clears it
        state.toggle_mode();
        state.pointer_up(&mut surface);
        assert!(!state.is_drawing_active());
    }

    #[test]
    fn test_toggle_does_not_touch_pixels_or_annotations() {
        let mut state = EditorState::default();
        let mut surface = mounted(&mut state);
        state.pointer_down(&mut surface, 0.0, 0.0);
        state.pointer_move(&mut surface, 100.0, 70.0);
        state.pointer_up(&mut surface);
        let before = surface.data().to_vec();

        state.toggle_mode();
        state.toggle_mode();

        assert_eq!(state.mode, EditorMode::Draw);
        assert_eq!(surface.data(), &before[..]);
        assert!(state.annotations().is_empty());
        assert!(!state.needs_replay());
    }

    #[test]
    fn test_place_text_scenario() {
        let font = GlyphFont::bundled().unwrap();
        let mut state = EditorState::default();
        state.stroke_color = RED;
        state.size = StrokeSize::new(24);
        state.toggle_mode();
        let mut surface = mounted(&mut state);

        assert!(state.place_text(&mut surface, Some(&font), "Hi", 100.0, 50.0));

        assert_eq!(
            state.annotations().as_slice(),
            &[TextAnnotation {
                text: "Hi".to_string(),
                color: RED,
                font_size: StrokeSize::new(24),
                x: 100.0,
                y: 50.0,
            }]
        );
        assert!(state.needs_replay());
        assert!(surface.data().chunks_exact(4).any(|px| px == [255, 0, 0, 255]));
    }

    #[test]
    fn test_place_text_rejects_empty_and_draw_mode() {
        let font = GlyphFont::bundled().unwrap();
        let mut state = EditorState::default();
        let mut surface = mounted(&mut state);

        assert!(!state.place_text(&mut surface, Some(&font), "Hi", 10.0, 10.0));
        state.toggle_mode();
        assert!(!state.place_text(&mut surface, Some(&font), "", 10.0, 10.0));

        assert!(state.annotations().is_empty());
        assert!(!state.needs_replay());
    }

    #[test]
    fn test_place_text_without_font_still_records() {
        let mut state = EditorState::default();
        state.toggle_mode();
        let mut surface = mounted(&mut state);
        assert!(state.place_text(&mut surface, None, "label", 5.0, 5.0));
        assert_eq!(state.annotations().len(), 1);
    }

    #[test]
    fn test_annotation_captures_settings_at_placement() {
        let mut state = EditorState::default();
        state.toggle_mode();
        let mut surface = mounted(&mut state);

        state.place_text(&mut surface, None, "first", 1.0, 1.0);
        state.stroke_color = RED;
        state.size = StrokeSize::new(40);
        state.place_text(&mut surface, None, "second", 2.0, 2.0);

        let items = state.annotations().as_slice();
        assert_eq!(items[0].color, HexColor::BLACK);
        assert_eq!(items[0].font_size, StrokeSize::DEFAULT);
        assert_eq!(items[1].color, RED);
        assert_eq!(items[1].font_size.get(), 40);
    }

    #[test]
    fn test_background_change_replays_and_erases_strokes() {
        let font = GlyphFont::bundled().unwrap();
        let mut state = EditorState::default();
        state.toggle_mode();
        let mut surface = mounted(&mut state);
        state.place_text(&mut surface, Some(&font), "Hi", 60.0, 40.0);
        state.replay(&mut surface, Some(&font));

        state.toggle_mode();
        state.pointer_down(&mut surface, 0.0, 75.0);
        state.pointer_move(&mut surface, 120.0, 75.0);
        state.pointer_up(&mut surface);

        assert!(state.set_background_color(RED));
        assert!(state.needs_replay());
        state.replay(&mut surface, Some(&font));

        let expected =
            canvas::render_new(120, 80, RED, state.annotations().as_slice(), Some(&font)).unwrap();
        assert_eq!(surface.data(), expected.data());
        assert_eq!(surface.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(surface.pixel(60, 75), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_same_background_is_not_a_change() {
        let mut state = EditorState::default();
        let _surface = mounted(&mut state);
        assert!(!state.set_background_color(HexColor::WHITE));
        assert!(!state.needs_replay());
    }

    #[test]
    fn test_mount_paints_background_once() {
        let mut state = EditorState::default();
        state.set_background_color(RED);
        let mut canvas = CanvasSurface::default();
        assert!(!canvas.is_mounted());

        canvas.mount(10, 10, &mut state, None).unwrap();
        assert!(canvas.is_mounted());
        assert!(!state.needs_replay());
        assert_eq!(canvas.surface().unwrap().pixel(5, 5), Some([255, 0, 0, 255]));

        // Size is fixed for the lifetime of the canvas
        canvas.mount(50, 50, &mut state, None).unwrap();
        assert_eq!(canvas.surface().unwrap().width(), 10);
    }

    #[test]
    fn test_edit_bumps_revision() {
        let mut state = EditorState::default();
        let mut canvas = CanvasSurface::default();
        assert!(canvas.edit().is_none());
        assert_eq!(canvas.revision(), 0);

        canvas.mount(4, 4, &mut state, None).unwrap();
        let mounted_revision = canvas.revision();
        assert!(canvas.edit().is_some());
        assert!(canvas.revision() > mounted_revision);
    }
}
