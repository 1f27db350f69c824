// GDI helpers for moving pixel buffers between the image crate and HDCs.

use image::{DynamicImage, RgbaImage};
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, DIB_RGB_COLORS, HDC, SetDIBitsToDevice,
};

use crate::types::ScreenshotData;

/// Convert RGBA bytes to the BGRA channel order GDI expects. Alpha is carried
/// through unchanged.
pub fn rgba_to_bgra(rgba: &[u8]) -> Vec<u8> {
    let mut bgra = rgba.to_vec();
    for px in bgra.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    bgra
}

/// Convert a top-down BGRA capture buffer into an `image` RGBA frame.
pub fn screenshot_to_image(shot: &ScreenshotData) -> Option<DynamicImage> {
    let rgba = rgba_to_bgra(&shot.data); // the swap is symmetric
    RgbaImage::from_raw(shot.width, shot.height, rgba).map(DynamicImage::ImageRgba8)
}

/// Decode a `DynamicImage` into a top-down BGRA frame for display.
pub fn image_to_screenshot(img: &DynamicImage) -> ScreenshotData {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    ScreenshotData {
        width,
        height,
        data: rgba_to_bgra(rgba.as_raw()),
    }
}

/// Blit a top-down BGRA frame onto the device context at the given origin.
pub fn draw_frame(hdc: HDC, x: i32, y: i32, frame: &ScreenshotData) {
    let bmi = BITMAPINFO {
        bmiHeader: BITMAPINFOHEADER {
            biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: frame.width as i32,
            biHeight: -(frame.height as i32), // top-down rows
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            biSizeImage: 0,
            biXPelsPerMeter: 0,
            biYPelsPerMeter: 0,
            biClrUsed: 0,
            biClrImportant: 0,
        },
        bmiColors: [Default::default(); 1],
    };

    unsafe {
        SetDIBitsToDevice(
            hdc,
            x,
            y,
            frame.width,
            frame.height,
            0,
            0,
            0,
            frame.height,
            frame.data.as_ptr() as *const std::ffi::c_void,
            &bmi,
            DIB_RGB_COLORS,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_bgra_swap_is_symmetric() {
        let rgba = vec![10u8, 20, 30, 255, 1, 2, 3, 4];
        let bgra = rgba_to_bgra(&rgba);
        assert_eq!(bgra, vec![30, 20, 10, 255, 3, 2, 1, 4]);
        assert_eq!(rgba_to_bgra(&bgra), rgba);
    }

    #[test]
    fn screenshot_round_trips_through_image() {
        let shot = ScreenshotData {
            width: 2,
            height: 1,
            data: vec![255, 0, 0, 255, 0, 255, 0, 255],
        };
        let img = screenshot_to_image(&shot).unwrap();
        let back = image_to_screenshot(&img);
        assert_eq!(back.width, shot.width);
        assert_eq!(back.height, shot.height);
        assert_eq!(back.data, shot.data);
    }
}
