// Application coordinator.
//
// `App` owns the per-pass state: the currently displayed frame, the latest
// recognition results, the overlay shapes and the status line. Every user
// action funnels into one linear pass: source image -> recognize -> rebuild
// overlays. No queuing, caching or concurrent recognition.

use std::path::Path;
use std::time::Duration;

use windows::Win32::Foundation::HWND;

use crate::constants::STATUS_READY;
use crate::error::{AppError, AppResult, ScreenshotError};
use crate::ocr::{OcrEngineConfig, recognize_image};
use crate::overlay::OverlaySet;
use crate::platform::windows::gdi::{image_to_screenshot, screenshot_to_image};
use crate::screenshot;
use crate::settings::Settings;
use crate::types::{RecognizedWord, ScreenshotData};

pub struct App {
    settings: Settings,
    /// Frame currently shown in the window, if any.
    frame: Option<ScreenshotData>,
    /// Latest recognition results, replaced wholesale on each pass.
    words: Vec<RecognizedWord>,
    overlays: OverlaySet,
    status: String,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            frame: None,
            words: Vec::new(),
            overlays: OverlaySet::new(),
            status: STATUS_READY.to_string(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn frame(&self) -> Option<&ScreenshotData> {
        self.frame.as_ref()
    }

    pub fn words(&self) -> &[RecognizedWord] {
        &self.words
    }

    pub fn overlays(&self) -> &OverlaySet {
        &self.overlays
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Outcome of the file picker. `None` (cancel) leaves the displayed
    /// image and the overlay set unchanged.
    pub fn on_image_selected(&mut self, path: Option<&Path>) -> AppResult<()> {
        let Some(path) = path else {
            return Ok(());
        };
        let img = image::open(path)?;
        self.run_recognition_pass(img)
    }

    /// Hide the window, capture the full primary display, restore the
    /// window, then recognize the captured frame.
    pub fn capture_and_recognize(&mut self, hwnd: HWND) -> AppResult<()> {
        let delay = Duration::from_millis(self.settings.capture_delay_ms);
        let shot = screenshot::capture_full_display(hwnd, delay)?;
        let img = screenshot_to_image(&shot).ok_or_else(|| {
            AppError::Screenshot(ScreenshotError::CaptureError(
                "Capture buffer has inconsistent dimensions".to_string(),
            ))
        })?;
        self.run_recognition_pass(img)
    }

    /// One synchronous pass: recognize, then replace the result set and the
    /// overlay shapes. The original color frame stays on display; grayscale
    /// conversion happens inside the OCR boundary only.
    fn run_recognition_pass(&mut self, img: image::DynamicImage) -> AppResult<()> {
        let config = OcrEngineConfig::from_settings(&self.settings);
        let words = recognize_image(&img, &config).map_err(AppError::Other)?;

        self.overlays.rebuild(&words);
        self.words = words;
        self.frame = Some(image_to_screenshot(&img));
        Ok(())
    }

    /// Word text for the overlay shape at `index`, for the clipboard action.
    pub fn word_text_at(&self, index: usize) -> Option<String> {
        self.overlays
            .get_word_shape(index)
            .map(|shape| shape.word_text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_dialog_leaves_state_unchanged() {
        let mut app = App::new(Settings::default());
        app.on_image_selected(None).unwrap();

        assert!(app.frame().is_none());
        assert!(app.words().is_empty());
        assert_eq!(app.overlays().len(), 2);
        assert_eq!(app.status(), STATUS_READY);
    }

    #[test]
    fn word_text_lookup_is_index_exact() {
        use crate::types::BoundingBox;

        let mut app = App::new(Settings::default());
        let words = vec![
            RecognizedWord {
                text: "first".to_string(),
                bounding_box: BoundingBox::new(0, 0, 10, 10),
                confidence: 90.0,
            },
            RecognizedWord {
                text: "second".to_string(),
                bounding_box: BoundingBox::new(20, 0, 10, 10),
                confidence: 80.0,
            },
        ];
        app.overlays.rebuild(&words);
        app.words = words;

        assert_eq!(app.word_text_at(0).as_deref(), Some("first"));
        assert_eq!(app.word_text_at(1).as_deref(), Some("second"));
        assert_eq!(app.word_text_at(2), None);
    }
}
