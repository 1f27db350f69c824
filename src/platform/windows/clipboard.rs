// Write-only system clipboard access.

use windows::Win32::Foundation::{HANDLE, HWND};
use windows::Win32::System::DataExchange::{
    CloseClipboard, EmptyClipboard, OpenClipboard, SetClipboardData,
};
use windows::Win32::System::Memory::{GMEM_MOVEABLE, GlobalAlloc, GlobalLock, GlobalUnlock};

use crate::error::ScreenshotError;

/// Put the given text on the system clipboard as `CF_UNICODETEXT`.
pub fn copy_text(hwnd: HWND, text: &str) -> Result<(), ScreenshotError> {
    unsafe {
        if OpenClipboard(Some(hwnd)).is_err() {
            return Err(ScreenshotError::ClipboardError(
                "Failed to open clipboard".to_string(),
            ));
        }

        let _ = EmptyClipboard();

        let wide_text: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();

        let result = match GlobalAlloc(GMEM_MOVEABLE, wide_text.len() * 2) {
            Ok(h_mem) => {
                let p_mem = GlobalLock(h_mem);
                if p_mem.is_null() {
                    Err(ScreenshotError::ClipboardError(
                        "Failed to lock clipboard memory".to_string(),
                    ))
                } else {
                    std::ptr::copy_nonoverlapping(
                        wide_text.as_ptr(),
                        p_mem as *mut u16,
                        wide_text.len(),
                    );
                    let _ = GlobalUnlock(h_mem);

                    // Ownership of the allocation passes to the clipboard.
                    match SetClipboardData(13u32, Some(HANDLE(h_mem.0))) {
                        // CF_UNICODETEXT = 13
                        Ok(_) => Ok(()),
                        Err(e) => Err(ScreenshotError::ClipboardError(format!(
                            "SetClipboardData failed: {e:?}"
                        ))),
                    }
                }
            }
            Err(e) => Err(ScreenshotError::ClipboardError(format!(
                "GlobalAlloc failed: {e:?}"
            ))),
        };

        let _ = CloseClipboard();
        result
    }
}
