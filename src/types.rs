// Core data types shared between the OCR boundary, the capture path and the
// overlay renderer.

/// Bounding box of a recognized word, in pixel space of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Immutable OCR result record. Produced by the engine, consumed read-only by
/// the overlay renderer; the whole set is replaced on each recognition pass.
#[derive(Debug, Clone)]
pub struct RecognizedWord {
    pub text: String,
    pub bounding_box: BoundingBox,
    /// Confidence score on a 0-100 scale.
    pub confidence: f32,
}

/// Primary display parameters read from the foreign display-settings query.
///
/// The underlying `DEVMODEW` carries ~20 legacy fields; only the ones used to
/// size and position the capture buffer are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayGeometry {
    pub origin_x: i32,
    pub origin_y: i32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub bits_per_pixel: u32,
}

/// A captured or decoded frame: top-down 32-bit BGRA pixels.
#[derive(Debug, Clone)]
pub struct ScreenshotData {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}
