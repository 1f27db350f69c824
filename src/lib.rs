#[cfg(windows)]
pub mod app;
pub mod constants;
pub mod error;
#[cfg(windows)]
pub mod file_dialog;
pub mod message;
pub mod ocr;
pub mod overlay;
#[cfg(windows)]
pub mod platform;
#[cfg(windows)]
pub mod screenshot;
pub mod settings;
pub mod types;
#[cfg(windows)]
pub mod ui;

#[cfg(windows)]
pub use app::App;
pub use error::{AppError, AppResult};
pub use message::Command;
pub use types::*;

pub const WINDOW_CLASS_NAME: &str = "OcrInspectorWindow";
