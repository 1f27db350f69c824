use ocr_inspector::overlay::{OverlaySet, format_tooltip};
use ocr_inspector::types::{BoundingBox, RecognizedWord};

fn word(text: &str, x: i32, y: i32, w: i32, h: i32, conf: f32) -> RecognizedWord {
    RecognizedWord {
        text: text.to_string(),
        bounding_box: BoundingBox::new(x, y, w, h),
        confidence: conf,
    }
}

#[test]
fn every_word_gets_a_shape_at_its_bounding_box() {
    let words = vec![
        word("invoice", 12, 34, 56, 14, 97.25),
        word("total", 80, 34, 40, 14, 88.0),
        word("42.00", 130, 34, 44, 14, 91.4567),
    ];
    let mut overlays = OverlaySet::new();
    overlays.rebuild(&words);

    assert_eq!(overlays.word_count(), words.len());
    for (shape, w) in overlays.word_shapes().zip(&words) {
        assert_eq!(shape.bounds.x, w.bounding_box.x);
        assert_eq!(shape.bounds.y, w.bounding_box.y);
        assert_eq!(shape.bounds.width, w.bounding_box.width);
        assert_eq!(shape.bounds.height, w.bounding_box.height);
    }
}

#[test]
fn rebuild_replaces_previous_pass_entirely() {
    let mut overlays = OverlaySet::new();
    overlays.rebuild(&[
        word("old", 0, 0, 10, 10, 50.0),
        word("words", 20, 0, 10, 10, 50.0),
    ]);
    overlays.rebuild(&[word("new", 5, 5, 10, 10, 60.0)]);

    assert_eq!(overlays.word_count(), 1);
    let shape = overlays.get_word_shape(0).unwrap();
    assert_eq!(shape.word_text, "new");
}

#[test]
fn clearing_preserves_only_the_positional_sentinels() {
    for previous_count in [0usize, 1, 25] {
        let words: Vec<_> = (0..previous_count)
            .map(|i| word("w", (i as i32) * 15, 0, 10, 10, 70.0))
            .collect();
        let mut overlays = OverlaySet::new();
        overlays.rebuild(&words);
        overlays.clear();

        assert_eq!(overlays.len(), 2, "previous count {previous_count}");
        assert_eq!(overlays.word_count(), 0);
        assert!(overlays.word_shapes().next().is_none());
    }
}

#[test]
fn right_click_target_carries_exactly_its_own_text() {
    let words = vec![
        word("alpha", 0, 0, 30, 10, 90.0),
        word("beta", 40, 0, 30, 10, 91.0),
        word("gamma", 80, 0, 30, 10, 92.0),
    ];
    let mut overlays = OverlaySet::new();
    overlays.rebuild(&words);

    let hit = overlays.hit_test(45, 5).unwrap();
    assert_eq!(overlays.get_word_shape(hit).unwrap().word_text, "beta");
}

#[test]
fn tooltip_confidence_has_exactly_two_decimals() {
    assert_eq!(
        format_tooltip("sample", 91.4567),
        "OCR Locator: sample, Accuracy: 91.46%"
    );
    assert_eq!(
        format_tooltip("sample", 7.0),
        "OCR Locator: sample, Accuracy: 7.00%"
    );
    assert_eq!(
        format_tooltip("sample", 99.999),
        "OCR Locator: sample, Accuracy: 100.00%"
    );
}
