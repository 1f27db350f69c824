// GDI screen copy.

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BitBlt, CreateCompatibleBitmap, CreateCompatibleDC,
    DIB_RGB_COLORS, DeleteDC, DeleteObject, GetDC, GetDIBits, ReleaseDC, SRCCOPY, SelectObject,
};

use crate::error::ScreenshotError;
use crate::types::{DisplayGeometry, ScreenshotData};

/// Buffer dimensions and byte size for a capture of `geometry`: exactly the
/// queried pixel width and height, four bytes per pixel.
pub fn buffer_layout(geometry: &DisplayGeometry) -> (i32, i32, usize) {
    let width = geometry.pixel_width as i32;
    let height = geometry.pixel_height as i32;
    let size = geometry.pixel_width as usize * geometry.pixel_height as usize * 4;
    (width, height, size)
}

/// Copy the display region described by `geometry` into a 32-bit BGRA buffer.
///
/// The buffer dimensions equal the queried pixel width and height exactly.
pub fn capture_screen(geometry: &DisplayGeometry) -> Result<ScreenshotData, ScreenshotError> {
    super::validate_geometry(geometry)?;

    let (width, height, data_size) = buffer_layout(geometry);

    unsafe {
        let screen_dc = GetDC(Some(HWND(std::ptr::null_mut())));
        if screen_dc.is_invalid() {
            return Err(ScreenshotError::CaptureError(
                "Failed to get screen DC".to_string(),
            ));
        }

        let mem_dc = CreateCompatibleDC(Some(screen_dc));
        if mem_dc.is_invalid() {
            ReleaseDC(Some(HWND(std::ptr::null_mut())), screen_dc);
            return Err(ScreenshotError::CaptureError(
                "Failed to create memory DC".to_string(),
            ));
        }

        let bitmap = CreateCompatibleBitmap(screen_dc, width, height);
        if bitmap.is_invalid() {
            let _ = DeleteDC(mem_dc);
            ReleaseDC(Some(HWND(std::ptr::null_mut())), screen_dc);
            return Err(ScreenshotError::CaptureError(
                "Failed to create bitmap".to_string(),
            ));
        }

        let old_bitmap = SelectObject(mem_dc, bitmap.into());

        let blt = BitBlt(
            mem_dc,
            0,
            0,
            width,
            height,
            Some(screen_dc),
            geometry.origin_x,
            geometry.origin_y,
            SRCCOPY,
        );

        SelectObject(mem_dc, old_bitmap);

        if blt.is_err() {
            let _ = DeleteDC(mem_dc);
            ReleaseDC(Some(HWND(std::ptr::null_mut())), screen_dc);
            let _ = DeleteObject(bitmap.into());
            return Err(ScreenshotError::CaptureError(
                "Failed to capture screen".to_string(),
            ));
        }

        let mut bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: width,
                biHeight: -height, // top-down rows
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

        let mut pixel_data = vec![0u8; data_size];

        let lines_copied = GetDIBits(
            screen_dc,
            bitmap,
            0,
            height as u32,
            Some(pixel_data.as_mut_ptr() as *mut std::ffi::c_void),
            &mut bmi,
            DIB_RGB_COLORS,
        );

        let _ = DeleteDC(mem_dc);
        ReleaseDC(Some(HWND(std::ptr::null_mut())), screen_dc);
        let _ = DeleteObject(bitmap.into());

        if lines_copied > 0 {
            Ok(ScreenshotData {
                width: geometry.pixel_width,
                height: geometry.pixel_height,
                data: pixel_data,
            })
        } else {
            Err(ScreenshotError::CaptureError(
                "Failed to extract pixel data from bitmap".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_matches_queried_display_dimensions() {
        let geometry = DisplayGeometry {
            origin_x: 0,
            origin_y: 0,
            pixel_width: 2560,
            pixel_height: 1440,
            bits_per_pixel: 32,
        };
        let (width, height, size) = buffer_layout(&geometry);
        assert_eq!(width, 2560);
        assert_eq!(height, 1440);
        assert_eq!(size, 2560 * 1440 * 4);
    }
}
