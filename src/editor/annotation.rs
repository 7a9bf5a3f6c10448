//! Text annotations placed on the canvas.

use crate::canvas::HexColor;

use super::size::StrokeSize;

/// One placed text label. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnnotation {
    pub text: String,
    pub color: HexColor,
    pub font_size: StrokeSize,
    /// Anchor point in canvas pixels; the text is centered on it.
    pub x: f32,
    pub y: f32,
}

/// Append-only, insertion-ordered list of annotations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotations {
    items: Vec<TextAnnotation>,
}

impl Annotations {
    pub fn push(&mut self, annotation: TextAnnotation) {
        self.items.push(annotation);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[TextAnnotation] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(text: &str, x: f32) -> TextAnnotation {
        TextAnnotation {
            text: text.to_string(),
            color: HexColor::BLACK,
            font_size: StrokeSize::DEFAULT,
            x,
            y: 0.0,
        }
    }

    #[test]
    fn test_annotations_start_empty() {
        let annotations = Annotations::default();
        assert!(annotations.is_empty());
        assert_eq!(annotations.len(), 0);
    }

    #[test]
    fn test_push_preserves_order_and_prior_items() {
        let mut annotations = Annotations::default();
        annotations.push(label("one", 1.0));
        let snapshot = annotations.as_slice().to_vec();

        annotations.push(label("two", 2.0));
        annotations.push(label("three", 3.0));

        assert_eq!(annotations.len(), 3);
        assert_eq!(&annotations.as_slice()[..1], &snapshot[..]);
        let texts: Vec<&str> = annotations.as_slice().iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }
}
