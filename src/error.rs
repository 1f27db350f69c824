// Unified Error Handling Module
//
// Centralized error types for consistent error management across the application

use std::io;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    #[error("Screenshot error: {0}")]
    Screenshot(#[from] ScreenshotError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("UI error: {0}")]
    UI(#[from] UIError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Windows API error: {0}")]
    Windows(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// OCR-related errors
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR initialization failed: {0}")]
    InitializationError(String),

    #[error("OCR processing failed: {0}")]
    ProcessingError(String),
}

/// Screen-capture related errors
#[derive(Debug, Error)]
pub enum ScreenshotError {
    #[error("Display settings query failed: {0}")]
    DisplayQueryError(String),

    #[error("Invalid display geometry: {width}x{height}")]
    InvalidGeometry { width: u32, height: u32 },

    #[error("Screen capture failed: {0}")]
    CaptureError(String),

    #[error("Clipboard operation failed: {0}")]
    ClipboardError(String),
}

/// UI-related errors
#[derive(Debug, Error)]
pub enum UIError {
    #[error("Window creation failed: {0}")]
    WindowCreationError(String),

    #[error("Dialog operation failed: {0}")]
    DialogError(String),
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convert Windows HRESULT to AppError
#[cfg(windows)]
impl From<windows::core::Error> for AppError {
    fn from(err: windows::core::Error) -> Self {
        AppError::Windows(format!("Windows API error: {err:?}"))
    }
}
