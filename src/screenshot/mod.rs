// Screen capture.
//
// The capture buffer is sized from a foreign display-settings query rather
// than the virtual-screen metrics, matching the geometry the OCR pass will
// see. Capture of the full display is orchestrated around hiding the main
// window so the application does not appear in its own capture.

pub mod capture;

use std::time::Duration;

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{SW_HIDE, SW_SHOW, ShowWindow};

use crate::error::ScreenshotError;
use crate::types::{DisplayGeometry, ScreenshotData};

pub use capture::capture_screen;

/// Query the current geometry of the primary display.
pub fn display_geometry() -> Result<DisplayGeometry, ScreenshotError> {
    use windows::Win32::Graphics::Gdi::{DEVMODEW, ENUM_CURRENT_SETTINGS, EnumDisplaySettingsW};
    use windows::core::PCWSTR;

    let mut devmode = DEVMODEW {
        dmSize: std::mem::size_of::<DEVMODEW>() as u16,
        ..Default::default()
    };

    let ok = unsafe { EnumDisplaySettingsW(PCWSTR::null(), ENUM_CURRENT_SETTINGS, &mut devmode) };
    if !ok.as_bool() {
        return Err(ScreenshotError::DisplayQueryError(
            "EnumDisplaySettingsW failed for the primary display".to_string(),
        ));
    }

    // dmPosition lives in the display-devices arm of the DEVMODEW union.
    let position = unsafe { devmode.Anonymous1.Anonymous2.dmPosition };

    let geometry = DisplayGeometry {
        origin_x: position.x,
        origin_y: position.y,
        pixel_width: devmode.dmPelsWidth,
        pixel_height: devmode.dmPelsHeight,
        bits_per_pixel: devmode.dmBitsPerPel,
    };
    validate_geometry(&geometry)?;
    Ok(geometry)
}

/// A zeroed `DEVMODEW` would produce a zero-sized capture buffer; reject it.
pub fn validate_geometry(geometry: &DisplayGeometry) -> Result<(), ScreenshotError> {
    if geometry.pixel_width == 0 || geometry.pixel_height == 0 {
        return Err(ScreenshotError::InvalidGeometry {
            width: geometry.pixel_width,
            height: geometry.pixel_height,
        });
    }
    Ok(())
}

/// Hide the given window, wait for the hide to visually complete, capture the
/// full primary display, then restore the window.
///
/// The fixed pause is a sequencing hack, not a synchronization primitive: it
/// carries no guarantee on a slow system.
pub fn capture_full_display(
    hwnd: HWND,
    delay: Duration,
) -> Result<ScreenshotData, ScreenshotError> {
    unsafe {
        let _ = ShowWindow(hwnd, SW_HIDE);
    }
    std::thread::sleep(delay);

    let result = display_geometry().and_then(|geometry| capture_screen(&geometry));

    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_geometry_is_rejected() {
        let geometry = DisplayGeometry::default();
        assert!(matches!(
            validate_geometry(&geometry),
            Err(ScreenshotError::InvalidGeometry {
                width: 0,
                height: 0
            })
        ));
    }

    #[test]
    fn nonzero_geometry_passes() {
        let geometry = DisplayGeometry {
            origin_x: 0,
            origin_y: 0,
            pixel_width: 2560,
            pixel_height: 1440,
            bits_per_pixel: 32,
        };
        assert!(validate_geometry(&geometry).is_ok());
    }
}
