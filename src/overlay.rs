// Overlay shapes placed over recognized words.
//
// One transparent, outlined rectangle per recognized word, carrying the
// tooltip text and the word text for the clipboard action. The shape list
// keeps a positional sentinel at each end (the displayed image slot and the
// status anchor), mirroring the canvas layout: word shapes always live
// strictly between them.

use crate::types::{BoundingBox, RecognizedWord};

/// A single clickable hit-region over a recognized word.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayShape {
    pub bounds: BoundingBox,
    /// Text shown while hovering the shape.
    pub tooltip: String,
    /// Exact text copied to the clipboard on right-click.
    pub word_text: String,
    sentinel: bool,
}

impl OverlayShape {
    pub fn from_word(word: &RecognizedWord) -> Self {
        Self {
            bounds: word.bounding_box,
            tooltip: format_tooltip(&word.text, word.confidence),
            word_text: word.text.clone(),
            sentinel: false,
        }
    }

    fn sentinel() -> Self {
        Self {
            bounds: BoundingBox::new(0, 0, 0, 0),
            tooltip: String::new(),
            word_text: String::new(),
            sentinel: true,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.sentinel
    }
}

/// Tooltip line combining the word text and its confidence rounded to two
/// decimal places.
pub fn format_tooltip(text: &str, confidence: f32) -> String {
    format!("OCR Locator: {text}, Accuracy: {confidence:.2}%")
}

/// The overlay shape collection for the currently displayed image.
#[derive(Debug)]
pub struct OverlaySet {
    shapes: Vec<OverlayShape>,
}

impl OverlaySet {
    pub fn new() -> Self {
        Self {
            shapes: vec![OverlayShape::sentinel(), OverlayShape::sentinel()],
        }
    }

    /// Remove every previously added shape, keeping only the two positional
    /// sentinels at the ends of the collection.
    pub fn clear(&mut self) {
        let len = self.shapes.len();
        self.shapes.drain(1..len - 1);
    }

    /// Clear, then add one shape per recognized word, in engine order.
    pub fn rebuild(&mut self, words: &[RecognizedWord]) {
        self.clear();
        let end = self.shapes.len() - 1;
        for (i, word) in words.iter().enumerate() {
            self.shapes.insert(end + i, OverlayShape::from_word(word));
        }
    }

    /// Word shapes only, in insertion order.
    pub fn word_shapes(&self) -> impl Iterator<Item = &OverlayShape> {
        self.shapes.iter().filter(|s| !s.is_sentinel())
    }

    pub fn word_count(&self) -> usize {
        self.shapes.len() - 2
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn get_word_shape(&self, index: usize) -> Option<&OverlayShape> {
        self.word_shapes().nth(index)
    }

    /// Topmost word shape under the given image-space point. Later insertions
    /// sit above earlier ones, so the scan runs back to front.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        let mut index = self.word_count();
        for shape in self.shapes.iter().rev() {
            if shape.is_sentinel() {
                continue;
            }
            index -= 1;
            if shape.bounds.contains_point(x, y) {
                return Some(index);
            }
        }
        None
    }
}

impl Default for OverlaySet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x: i32, y: i32, w: i32, h: i32, conf: f32) -> RecognizedWord {
        RecognizedWord {
            text: text.to_string(),
            bounding_box: BoundingBox::new(x, y, w, h),
            confidence: conf,
        }
    }

    #[test]
    fn one_shape_per_word_at_word_bounds() {
        let words = vec![
            word("alpha", 10, 20, 30, 12, 95.0),
            word("beta", 60, 20, 25, 12, 80.5),
        ];
        let mut overlays = OverlaySet::new();
        overlays.rebuild(&words);

        assert_eq!(overlays.word_count(), 2);
        for (shape, w) in overlays.word_shapes().zip(&words) {
            assert_eq!(shape.bounds, w.bounding_box);
            assert_eq!(shape.word_text, w.text);
        }
    }

    #[test]
    fn tooltip_rounds_confidence_to_two_decimals() {
        assert_eq!(
            format_tooltip("invoice", 91.4567),
            "OCR Locator: invoice, Accuracy: 91.46%"
        );
        assert_eq!(
            format_tooltip("x", 100.0),
            "OCR Locator: x, Accuracy: 100.00%"
        );
    }

    #[test]
    fn clear_keeps_exactly_the_two_sentinels() {
        for n in [0usize, 1, 7] {
            let words: Vec<_> = (0..n)
                .map(|i| word("w", i as i32 * 10, 0, 8, 8, 50.0))
                .collect();
            let mut overlays = OverlaySet::new();
            overlays.rebuild(&words);
            assert_eq!(overlays.word_count(), n);

            overlays.clear();
            assert_eq!(overlays.len(), 2);
            assert_eq!(overlays.word_count(), 0);
        }
    }

    #[test]
    fn hit_test_returns_topmost_shape() {
        let words = vec![
            word("under", 0, 0, 50, 50, 10.0),
            word("over", 10, 10, 20, 20, 20.0),
        ];
        let mut overlays = OverlaySet::new();
        overlays.rebuild(&words);

        // Overlapping area resolves to the later insertion.
        assert_eq!(overlays.hit_test(15, 15), Some(1));
        // Non-overlapping corner still hits the first shape.
        assert_eq!(overlays.hit_test(45, 45), Some(0));
        assert_eq!(overlays.hit_test(200, 200), None);
    }

    #[test]
    fn hit_region_matches_word_box_edges() {
        let words = vec![word("edge", 10, 10, 20, 10, 99.0)];
        let mut overlays = OverlaySet::new();
        overlays.rebuild(&words);

        assert_eq!(overlays.hit_test(10, 10), Some(0));
        assert_eq!(overlays.hit_test(29, 19), Some(0));
        assert_eq!(overlays.hit_test(30, 10), None);
        assert_eq!(overlays.hit_test(10, 20), None);
    }
}
