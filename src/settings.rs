// Application settings, persisted as settings.json next to the executable.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CAPTURE_DELAY_MS, DEFAULT_OCR_DATA_DIR, DEFAULT_OCR_LANGUAGE, DEFAULT_PAGE_SEG_MODE,
};

fn default_ocr_data_dir() -> String {
    DEFAULT_OCR_DATA_DIR.to_string()
}

fn default_ocr_language() -> String {
    DEFAULT_OCR_LANGUAGE.to_string()
}

fn default_page_seg_mode() -> u32 {
    DEFAULT_PAGE_SEG_MODE
}

fn default_capture_delay_ms() -> u64 {
    DEFAULT_CAPTURE_DELAY_MS
}

fn default_outline_color() -> (u8, u8, u8) {
    (0, 0, 255)
}

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory containing the Tesseract language data.
    #[serde(default = "default_ocr_data_dir")]
    pub ocr_data_dir: String,

    /// OCR language code (e.g. "eng").
    #[serde(default = "default_ocr_language")]
    pub ocr_language: String,

    /// Tesseract page segmentation mode.
    #[serde(default = "default_page_seg_mode")]
    pub page_seg_mode: u32,

    /// Pause between hiding the window and copying the screen.
    #[serde(default = "default_capture_delay_ms")]
    pub capture_delay_ms: u64,

    /// Overlay rectangle outline color.
    #[serde(default = "default_outline_color")]
    pub outline_color: (u8, u8, u8),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ocr_data_dir: default_ocr_data_dir(),
            ocr_language: default_ocr_language(),
            page_seg_mode: default_page_seg_mode(),
            capture_delay_ms: default_capture_delay_ms(),
            outline_color: default_outline_color(),
        }
    }
}

impl Settings {
    /// Settings file lives next to the executable.
    fn settings_path() -> PathBuf {
        let mut path = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
        path.set_file_name("settings.json");
        path
    }

    /// Load settings from disk, falling back to defaults (and writing them
    /// out) when the file is missing or unreadable.
    pub fn load() -> Self {
        let path = Self::settings_path();
        if let Ok(content) = fs::read_to_string(&path) {
            if let Ok(settings) = serde_json::from_str::<Settings>(&content) {
                return settings;
            }
        }

        let default_settings = Settings::default();
        let _ = default_settings.save();
        default_settings
    }

    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::settings_path(), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.ocr_data_dir, "TrainData");
        assert_eq!(settings.ocr_language, "eng");
        assert_eq!(settings.page_seg_mode, 11);
        assert_eq!(settings.capture_delay_ms, 500);
        assert_eq!(settings.outline_color, (0, 0, 255));
    }

    #[test]
    fn partial_json_keeps_overrides() {
        let settings: Settings =
            serde_json::from_str(r#"{"ocr_language": "deu", "capture_delay_ms": 250}"#).unwrap();
        assert_eq!(settings.ocr_language, "deu");
        assert_eq!(settings.capture_delay_ms, 250);
        assert_eq!(settings.page_seg_mode, 11);
    }
}
