// Tesseract engine wrapper.
//
// The engine is initialized fresh for every recognition pass (no pooling or
// reuse across calls) and dropped at the end of it. Tesseract requires a
// single-channel image, so the color input is converted to grayscale before
// recognition; the caller keeps displaying the original color image.

use anyhow::{Context, Result, anyhow};
use image::DynamicImage;
use leptess::{LepTess, Variable};

use crate::constants::OCR_SOURCE_DPI;
use crate::settings::Settings;
use crate::types::{BoundingBox, RecognizedWord};

/// Per-call engine configuration, read from settings.
#[derive(Debug, Clone)]
pub struct OcrEngineConfig {
    /// Language-data directory (e.g. "TrainData").
    pub data_dir: String,
    /// Language code (e.g. "eng").
    pub language: String,
    /// Page segmentation mode; 11 treats the input as sparse text.
    pub page_seg_mode: u32,
}

impl OcrEngineConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            data_dir: settings.ocr_data_dir.clone(),
            language: settings.ocr_language.clone(),
            page_seg_mode: settings.page_seg_mode,
        }
    }
}

/// Run recognition over a decoded color image and return the recognized
/// words in the engine's own order, with bounding boxes in the pixel space
/// of the input image and confidence on a 0-100 scale.
///
/// Blocks the calling thread for the duration of the pass.
pub fn recognize_image(
    img: &DynamicImage,
    config: &OcrEngineConfig,
) -> Result<Vec<RecognizedWord>> {
    let start_time = std::time::Instant::now();

    let mut lt = LepTess::new(Some(&config.data_dir), &config.language).map_err(|e| {
        anyhow!(
            "failed to initialize Tesseract (data dir '{}', language '{}'): {e}",
            config.data_dir,
            config.language
        )
    })?;

    lt.set_variable(
        Variable::TesseditPagesegMode,
        &config.page_seg_mode.to_string(),
    )
    .map_err(|e| anyhow!("failed to set page segmentation mode: {e}"))?;

    // Tesseract requires a grayscale image; hand it over as PNG bytes.
    let gray = img.to_luma8();
    let mut png_bytes = Vec::new();
    gray.write_to(
        &mut std::io::Cursor::new(&mut png_bytes),
        image::ImageFormat::Png,
    )
    .context("failed to encode grayscale image")?;

    lt.set_image_from_mem(&png_bytes)
        .map_err(|e| anyhow!("failed to load image into Tesseract: {e}"))?;

    // Resolution hint for recognition accuracy. Must follow set_image.
    lt.set_source_resolution(OCR_SOURCE_DPI);

    let words = extract_words(&mut lt);

    #[cfg(debug_assertions)]
    println!(
        "OCR pass: {} words in {:?}",
        words.len(),
        start_time.elapsed()
    );
    #[cfg(not(debug_assertions))]
    let _ = start_time;

    Ok(words)
}

/// Walk the word-level component boxes and read text and confidence for each.
///
/// `get_component_boxes` returns `None` when the image contains no text;
/// that is an empty result, not an error. Blank texts are skipped; no
/// re-sorting or deduplication is applied.
fn extract_words(lt: &mut LepTess) -> Vec<RecognizedWord> {
    let boxes = match lt.get_component_boxes(leptess::capi::TessPageIteratorLevel_RIL_WORD, true) {
        Some(boxes) => boxes,
        None => return Vec::new(),
    };

    let mut words = Vec::new();
    for bbox in &boxes {
        let geom = bbox.get_geometry();

        // Restrict recognition to this word's box.
        lt.set_rectangle(geom.x, geom.y, geom.w, geom.h);

        let text = lt.get_utf8_text().unwrap_or_default().trim().to_string();
        if text.is_empty() {
            continue;
        }

        let confidence = lt.mean_text_conf() as f32;

        words.push(RecognizedWord {
            text,
            bounding_box: BoundingBox::new(geom.x, geom.y, geom.w, geom.h),
            confidence,
        });
    }

    words
}
