// OCR boundary: Tesseract via leptess.

pub mod engine;

pub use engine::{OcrEngineConfig, recognize_image};
