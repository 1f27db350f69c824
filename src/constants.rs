// UI metrics, colors and fixed strings shared across modules.

#[cfg(windows)]
use windows::Win32::Foundation::COLORREF;

#[cfg(windows)]
macro_rules! RGB {
    ($r:expr, $g:expr, $b:expr) => {
        COLORREF(($r as u32) | (($g as u32) << 8) | (($b as u32) << 16))
    };
}

// Overlay styling
pub const OVERLAY_OUTLINE_THICKNESS: i32 = 1;

// Tooltip styling
#[cfg(windows)]
pub const COLOR_TOOLTIP_BG: COLORREF = RGB!(255, 255, 225);
#[cfg(windows)]
pub const COLOR_TOOLTIP_BORDER: COLORREF = RGB!(118, 118, 118);
#[cfg(windows)]
pub const COLOR_TOOLTIP_TEXT: COLORREF = RGB!(32, 32, 32);
pub const TOOLTIP_PADDING: i32 = 6;
pub const TOOLTIP_CURSOR_OFFSET: i32 = 16;

// Toolbar / status bar
#[cfg(windows)]
pub const COLOR_TOOLBAR_BG: COLORREF = RGB!(245, 245, 245);
#[cfg(windows)]
pub const COLOR_TOOLBAR_BORDER: COLORREF = RGB!(200, 200, 200);
#[cfg(windows)]
pub const COLOR_BUTTON_BG: COLORREF = RGB!(255, 255, 255);
#[cfg(windows)]
pub const COLOR_BUTTON_HOVER: COLORREF = RGB!(229, 241, 251);
#[cfg(windows)]
pub const COLOR_TEXT_NORMAL: COLORREF = RGB!(64, 64, 64);
#[cfg(windows)]
pub const COLOR_STATUS_BG: COLORREF = RGB!(240, 240, 240);
pub const TOOLBAR_HEIGHT: i32 = 40;
pub const BUTTON_WIDTH: i32 = 120;
pub const BUTTON_HEIGHT: i32 = 28;
pub const BUTTON_SPACING: i32 = 8;
pub const TOOLBAR_PADDING: i32 = 8;
pub const STATUS_BAR_HEIGHT: i32 = 24;

// Initial window size
pub const DEFAULT_WINDOW_WIDTH: i32 = 1100;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 800;

// Image source selection
pub const IMAGE_FILE_FILTER: &str =
    "Image files (*.jpg, *.jpeg, *.png, *.bmp)\0*.jpg;*.jpeg;*.png;*.bmp\0\0";

// Screen capture: the main window needs a moment to finish hiding before the
// screen is copied, otherwise it shows up in its own capture.
pub const DEFAULT_CAPTURE_DELAY_MS: u64 = 500;

// Resolution hint handed to the OCR engine for captured bitmaps.
pub const OCR_SOURCE_DPI: i32 = 300;

// OCR engine defaults
pub const DEFAULT_OCR_DATA_DIR: &str = "TrainData";
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";
/// Tesseract PSM 11: sparse text, find as much text as possible in no
/// particular order.
pub const DEFAULT_PAGE_SEG_MODE: u32 = 11;

// Status line messages
pub const STATUS_READY: &str = "Ready";

pub fn status_copied(text: &str) -> String {
    format!("The OCR Locator value '{text}' has been successfully copied to the clipboard.")
}
