#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

#[cfg(windows)]
use windows::Win32::UI::HiDpi::{PROCESS_PER_MONITOR_DPI_AWARE, SetProcessDpiAwareness};
#[cfg(windows)]
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, TranslateMessage,
};
#[cfg(windows)]
use windows::core::Result;

#[cfg(windows)]
use ocr_inspector::app::App;
#[cfg(windows)]
use ocr_inspector::settings::Settings;
#[cfg(windows)]
use ocr_inspector::ui::MainWindow;

#[cfg(not(windows))]
fn main() {
    eprintln!("ocr_inspector is a Windows-only application.");
}

#[cfg(windows)]
fn main() -> Result<()> {
    unsafe {
        SetProcessDpiAwareness(PROCESS_PER_MONITOR_DPI_AWARE)?;
    }

    let settings = Settings::load();
    let app = App::new(settings);
    MainWindow::create(app)?;

    unsafe {
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
    Ok(())
}
