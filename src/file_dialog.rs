use windows::{
    Win32::{Foundation::*, UI::Controls::Dialogs::*},
    core::*,
};

use crate::constants::IMAGE_FILE_FILTER;
use crate::platform::windows::to_wide_chars;

/// Show the native file picker restricted to common raster formats.
///
/// Returns `None` when the user cancels; callers treat that as a silent
/// no-op.
pub fn show_open_image_dialog(hwnd: HWND) -> Option<String> {
    unsafe {
        let mut file_name = [0u16; 260]; // MAX_PATH

        let filter_wide = to_wide_chars(IMAGE_FILE_FILTER);
        let title_wide = to_wide_chars("Open Image");

        let mut ofn = OPENFILENAMEW {
            lStructSize: std::mem::size_of::<OPENFILENAMEW>() as u32,
            hwndOwner: hwnd,
            lpstrFilter: PCWSTR(filter_wide.as_ptr()),
            lpstrFile: PWSTR(file_name.as_mut_ptr()),
            nMaxFile: file_name.len() as u32,
            lpstrTitle: PCWSTR(title_wide.as_ptr()),
            Flags: OFN_FILEMUSTEXIST | OFN_PATHMUSTEXIST | OFN_HIDEREADONLY,
            nFilterIndex: 1,
            ..Default::default()
        };

        if GetOpenFileNameW(&mut ofn).as_bool() {
            let file_path = PWSTR(file_name.as_mut_ptr()).to_string().ok()?;
            Some(file_path)
        } else {
            // User cancelled the dialog.
            None
        }
    }
}
