// Main application window.
//
// Everything is drawn with GDI into a back buffer: the two-button toolbar,
// the loaded image with one outlined hit-region per recognized word, the
// tooltip for the hovered region and the status line. Raw Win32 events are
// translated into `Command`s and executed against the `App` state.

use std::path::Path;

use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::*;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::VK_ESCAPE;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::PCWSTR;

use crate::WINDOW_CLASS_NAME;
use crate::app::App;
use crate::constants::*;
use crate::file_dialog::show_open_image_dialog;
use crate::message::Command;
use crate::platform::windows::{clipboard, gdi, to_wide_chars};

struct ToolbarButton {
    rect: RECT,
    label: &'static str,
    command: Command,
}

pub struct MainWindow {
    hwnd: HWND,
    app: App,
    buttons: Vec<ToolbarButton>,
    /// Word-shape index currently under the cursor, if any.
    hovered_shape: Option<usize>,
    /// Toolbar-button index currently under the cursor, if any.
    hovered_button: Option<usize>,
    cursor: POINT,
}

/// Index of the toolbar button containing the client-space point, if any.
fn button_index_at(buttons: &[ToolbarButton], x: i32, y: i32) -> Option<usize> {
    buttons
        .iter()
        .position(|b| x >= b.rect.left && x < b.rect.right && y >= b.rect.top && y < b.rect.bottom)
}

impl MainWindow {
    /// Register the window class, create the window and hand ownership of
    /// `app` to it. Runs until the window is destroyed.
    pub fn create(app: App) -> windows::core::Result<HWND> {
        unsafe {
            let instance = GetModuleHandleW(None)?;
            let class_name = to_wide_chars(WINDOW_CLASS_NAME);

            let window_class = WNDCLASSW {
                lpfnWndProc: Some(Self::window_proc),
                hInstance: instance.into(),
                lpszClassName: PCWSTR(class_name.as_ptr()),
                hCursor: LoadCursorW(None, IDC_ARROW)?,
                hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
                style: CS_HREDRAW | CS_VREDRAW,
                ..Default::default()
            };

            if RegisterClassW(&window_class) == 0 {
                return Err(windows::core::Error::from_win32());
            }

            let title = to_wide_chars("OCR Inspector");
            let hwnd = CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                PCWSTR(class_name.as_ptr()),
                PCWSTR(title.as_ptr()),
                WS_OVERLAPPEDWINDOW,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                DEFAULT_WINDOW_WIDTH,
                DEFAULT_WINDOW_HEIGHT,
                None,
                None,
                Some(instance.into()),
                None,
            )?;

            let window = MainWindow {
                hwnd,
                app,
                buttons: Self::create_buttons(),
                hovered_shape: None,
                hovered_button: None,
                cursor: POINT::default(),
            };

            let window_ptr = Box::into_raw(Box::new(window));
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, window_ptr as isize);

            let _ = ShowWindow(hwnd, SW_SHOW);
            let _ = UpdateWindow(hwnd);

            Ok(hwnd)
        }
    }

    fn create_buttons() -> Vec<ToolbarButton> {
        let top = (TOOLBAR_HEIGHT - BUTTON_HEIGHT) / 2;
        let mut x = TOOLBAR_PADDING;
        let mut buttons = Vec::new();
        for (label, command) in [
            ("Load Image", Command::LoadImage),
            ("Capture Screen", Command::CaptureScreen),
        ] {
            buttons.push(ToolbarButton {
                rect: RECT {
                    left: x,
                    top,
                    right: x + BUTTON_WIDTH,
                    bottom: top + BUTTON_HEIGHT,
                },
                label,
                command,
            });
            x += BUTTON_WIDTH + BUTTON_SPACING;
        }
        buttons
    }

    /// Execute a command against the application state. Failures land on the
    /// status line; there is no retry or partial-result recovery.
    fn execute_command(&mut self, command: Command) {
        match command {
            Command::LoadImage => {
                // Cancelled dialog: nothing changes, not even the status line.
                if let Some(path) = show_open_image_dialog(self.hwnd) {
                    let result = self.app.on_image_selected(Some(Path::new(&path)));
                    self.finish_recognition_pass(result);
                }
            }
            Command::CaptureScreen => {
                let result = self.app.capture_and_recognize(self.hwnd);
                self.finish_recognition_pass(result);
            }
            Command::CopyWord(index) => {
                if let Some(text) = self.app.word_text_at(index) {
                    match clipboard::copy_text(self.hwnd, &text) {
                        Ok(()) => self.app.set_status(status_copied(&text)),
                        Err(e) => self.app.set_status(format!("Copy failed: {e}")),
                    }
                    self.request_redraw();
                }
            }
            Command::SetStatus(status) => {
                self.app.set_status(status);
                self.request_redraw();
            }
            Command::RequestRedraw => self.request_redraw(),
            Command::Quit => unsafe {
                let _ = DestroyWindow(self.hwnd);
            },
            Command::None => {}
        }
    }

    fn finish_recognition_pass(&mut self, result: crate::error::AppResult<()>) {
        match result {
            Ok(()) => self.execute_command(Command::SetStatus(STATUS_READY.to_string())),
            Err(e) => {
                #[cfg(debug_assertions)]
                eprintln!("recognition pass failed: {e}");
                self.app.set_status(format!("Error: {e}"));
            }
        }
        self.hovered_shape = None;
        self.request_redraw();
    }

    fn request_redraw(&self) {
        unsafe {
            let _ = InvalidateRect(Some(self.hwnd), None, false);
        }
    }

    fn client_rect(&self) -> RECT {
        let mut rect = RECT::default();
        unsafe {
            let _ = GetClientRect(self.hwnd, &mut rect);
        }
        rect
    }

    /// Translate a client-space point into image space, if it falls on the
    /// image surface.
    fn image_point(&self, x: i32, y: i32) -> Option<(i32, i32)> {
        let frame = self.app.frame()?;
        let ix = x;
        let iy = y - TOOLBAR_HEIGHT;
        if ix >= 0 && iy >= 0 && (ix as u32) < frame.width && (iy as u32) < frame.height {
            Some((ix, iy))
        } else {
            None
        }
    }

    fn on_mouse_move(&mut self, x: i32, y: i32) {
        self.cursor = POINT { x, y };
        let shape = self
            .image_point(x, y)
            .and_then(|(ix, iy)| self.app.overlays().hit_test(ix, iy));
        let button = button_index_at(&self.buttons, x, y);

        let changed = shape != self.hovered_shape || button != self.hovered_button;
        self.hovered_shape = shape;
        self.hovered_button = button;

        // The tooltip is anchored to the cursor, so a hovered shape repaints
        // on every move; otherwise only hover transitions do.
        if changed || shape.is_some() {
            self.request_redraw();
        }
    }

    fn on_left_button_up(&mut self, x: i32, y: i32) {
        if let Some(index) = button_index_at(&self.buttons, x, y) {
            let command = self.buttons[index].command.clone();
            self.execute_command(command);
        }
    }

    fn on_right_button_up(&mut self, x: i32, y: i32) {
        let command = self
            .image_point(x, y)
            .and_then(|(ix, iy)| self.app.overlays().hit_test(ix, iy))
            .map(Command::CopyWord)
            .unwrap_or(Command::None);
        self.execute_command(command);
    }

    // Painting

    fn paint(&mut self) {
        unsafe {
            let mut ps = PAINTSTRUCT::default();
            let hdc = BeginPaint(self.hwnd, &mut ps);

            let client = self.client_rect();
            let width = client.right - client.left;
            let height = client.bottom - client.top;

            // Back buffer to avoid flicker.
            let mem_dc = CreateCompatibleDC(Some(hdc));
            let buffer = CreateCompatibleBitmap(hdc, width.max(1), height.max(1));
            let old_bitmap = SelectObject(mem_dc, buffer.into());
            let old_font = SelectObject(mem_dc, GetStockObject(DEFAULT_GUI_FONT));
            SetBkMode(mem_dc, TRANSPARENT);

            self.draw_background(mem_dc, &client);
            self.draw_image_and_overlays(mem_dc);
            self.draw_toolbar(mem_dc, width);
            self.draw_status_bar(mem_dc, &client);
            self.draw_tooltip(mem_dc, &client);

            let _ = BitBlt(hdc, 0, 0, width, height, Some(mem_dc), 0, 0, SRCCOPY);

            SelectObject(mem_dc, old_font);
            SelectObject(mem_dc, old_bitmap);
            let _ = DeleteObject(buffer.into());
            let _ = DeleteDC(mem_dc);

            let _ = EndPaint(self.hwnd, &ps);
        }
    }

    fn draw_background(&self, hdc: HDC, client: &RECT) {
        unsafe {
            let brush = GetStockObject(WHITE_BRUSH);
            FillRect(hdc, client, HBRUSH(brush.0));
        }
    }

    fn draw_toolbar(&self, hdc: HDC, width: i32) {
        unsafe {
            let bar = RECT {
                left: 0,
                top: 0,
                right: width,
                bottom: TOOLBAR_HEIGHT,
            };
            let bg = CreateSolidBrush(COLOR_TOOLBAR_BG);
            FillRect(hdc, &bar, bg);
            let _ = DeleteObject(bg.into());

            let border = CreateSolidBrush(COLOR_TOOLBAR_BORDER);
            let line = RECT {
                left: 0,
                top: TOOLBAR_HEIGHT - 1,
                right: width,
                bottom: TOOLBAR_HEIGHT,
            };
            FillRect(hdc, &line, border);
            let _ = DeleteObject(border.into());

            for (index, button) in self.buttons.iter().enumerate() {
                let hovered = self.hovered_button == Some(index);
                let fill = CreateSolidBrush(if hovered {
                    COLOR_BUTTON_HOVER
                } else {
                    COLOR_BUTTON_BG
                });
                FillRect(hdc, &button.rect, fill);
                let _ = DeleteObject(fill.into());

                let frame = CreateSolidBrush(COLOR_TOOLBAR_BORDER);
                FrameRect(hdc, &button.rect, frame);
                let _ = DeleteObject(frame.into());

                SetTextColor(hdc, COLOR_TEXT_NORMAL);
                let mut label: Vec<u16> = button.label.encode_utf16().collect();
                let mut text_rect = button.rect;
                DrawTextW(
                    hdc,
                    &mut label,
                    &mut text_rect,
                    DT_CENTER | DT_VCENTER | DT_SINGLELINE,
                );
            }
        }
    }

    fn draw_image_and_overlays(&self, hdc: HDC) {
        let Some(frame) = self.app.frame() else {
            return;
        };

        gdi::draw_frame(hdc, 0, TOOLBAR_HEIGHT, frame);

        unsafe {
            // Transparent fill, fixed-width outline.
            let (r, g, b) = self.app.settings().outline_color;
            let color = COLORREF((r as u32) | ((g as u32) << 8) | ((b as u32) << 16));
            let pen = CreatePen(PS_SOLID, OVERLAY_OUTLINE_THICKNESS, color);
            let old_pen = SelectObject(hdc, pen.into());
            let old_brush = SelectObject(hdc, GetStockObject(NULL_BRUSH));

            for shape in self.app.overlays().word_shapes() {
                let bounds = shape.bounds;
                let _ = Rectangle(
                    hdc,
                    bounds.x,
                    TOOLBAR_HEIGHT + bounds.y,
                    bounds.x + bounds.width,
                    TOOLBAR_HEIGHT + bounds.y + bounds.height,
                );
            }

            SelectObject(hdc, old_brush);
            SelectObject(hdc, old_pen);
            let _ = DeleteObject(pen.into());
        }
    }

    fn draw_status_bar(&self, hdc: HDC, client: &RECT) {
        unsafe {
            let bar = RECT {
                left: 0,
                top: client.bottom - STATUS_BAR_HEIGHT,
                right: client.right,
                bottom: client.bottom,
            };
            let bg = CreateSolidBrush(COLOR_STATUS_BG);
            FillRect(hdc, &bar, bg);
            let _ = DeleteObject(bg.into());

            SetTextColor(hdc, COLOR_TEXT_NORMAL);
            let mut text: Vec<u16> = self.app.status().encode_utf16().collect();
            if text.is_empty() {
                return;
            }
            let mut text_rect = RECT {
                left: bar.left + TOOLBAR_PADDING,
                top: bar.top,
                right: bar.right - TOOLBAR_PADDING,
                bottom: bar.bottom,
            };
            DrawTextW(
                hdc,
                &mut text,
                &mut text_rect,
                DT_LEFT | DT_VCENTER | DT_SINGLELINE | DT_END_ELLIPSIS,
            );
        }
    }

    fn draw_tooltip(&self, hdc: HDC, client: &RECT) {
        let Some(index) = self.hovered_shape else {
            return;
        };
        let Some(shape) = self.app.overlays().get_word_shape(index) else {
            return;
        };

        unsafe {
            let mut text: Vec<u16> = shape.tooltip.encode_utf16().collect();

            // Measure, then place next to the cursor, clamped to the client
            // area.
            let mut measure = RECT::default();
            DrawTextW(hdc, &mut text, &mut measure, DT_CALCRECT | DT_SINGLELINE);
            let w = measure.right - measure.left + 2 * TOOLTIP_PADDING;
            let h = measure.bottom - measure.top + 2 * TOOLTIP_PADDING;

            let mut left = self.cursor.x + TOOLTIP_CURSOR_OFFSET;
            let mut top = self.cursor.y + TOOLTIP_CURSOR_OFFSET;
            if left + w > client.right {
                left = (client.right - w).max(0);
            }
            if top + h > client.bottom - STATUS_BAR_HEIGHT {
                top = (self.cursor.y - h - TOOLTIP_CURSOR_OFFSET).max(0);
            }

            let tip = RECT {
                left,
                top,
                right: left + w,
                bottom: top + h,
            };
            let bg = CreateSolidBrush(COLOR_TOOLTIP_BG);
            FillRect(hdc, &tip, bg);
            let _ = DeleteObject(bg.into());

            let border = CreateSolidBrush(COLOR_TOOLTIP_BORDER);
            FrameRect(hdc, &tip, border);
            let _ = DeleteObject(border.into());

            SetTextColor(hdc, COLOR_TOOLTIP_TEXT);
            let mut text_rect = RECT {
                left: tip.left + TOOLTIP_PADDING,
                top: tip.top + TOOLTIP_PADDING,
                right: tip.right - TOOLTIP_PADDING,
                bottom: tip.bottom - TOOLTIP_PADDING,
            };
            DrawTextW(hdc, &mut text, &mut text_rect, DT_LEFT | DT_SINGLELINE);
        }
    }

    // Window procedure

    unsafe extern "system" fn window_proc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        unsafe {
            let window_ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut MainWindow;

            match msg {
                WM_PAINT => {
                    if !window_ptr.is_null() {
                        (*window_ptr).paint();
                        return LRESULT(0);
                    }
                    DefWindowProcW(hwnd, msg, wparam, lparam)
                }
                WM_MOUSEMOVE => {
                    if !window_ptr.is_null() {
                        let x = (lparam.0 as i16) as i32;
                        let y = ((lparam.0 >> 16) as i16) as i32;
                        (*window_ptr).on_mouse_move(x, y);
                    }
                    LRESULT(0)
                }
                WM_LBUTTONUP => {
                    if !window_ptr.is_null() {
                        let x = (lparam.0 as i16) as i32;
                        let y = ((lparam.0 >> 16) as i16) as i32;
                        (*window_ptr).on_left_button_up(x, y);
                    }
                    LRESULT(0)
                }
                WM_RBUTTONUP => {
                    if !window_ptr.is_null() {
                        let x = (lparam.0 as i16) as i32;
                        let y = ((lparam.0 >> 16) as i16) as i32;
                        (*window_ptr).on_right_button_up(x, y);
                    }
                    LRESULT(0)
                }
                WM_KEYDOWN => {
                    if !window_ptr.is_null() && wparam.0 as u16 == VK_ESCAPE.0 {
                        (*window_ptr).execute_command(Command::Quit);
                        return LRESULT(0);
                    }
                    DefWindowProcW(hwnd, msg, wparam, lparam)
                }
                WM_ERASEBKGND => {
                    // The back buffer repaints everything.
                    LRESULT(1)
                }
                WM_SIZE => {
                    if !window_ptr.is_null() {
                        (*window_ptr).request_redraw();
                    }
                    LRESULT(0)
                }
                WM_DESTROY => {
                    PostQuitMessage(0);
                    LRESULT(0)
                }
                WM_NCDESTROY => {
                    if !window_ptr.is_null() {
                        SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
                        drop(Box::from_raw(window_ptr));
                    }
                    DefWindowProcW(hwnd, msg, wparam, lparam)
                }
                _ => DefWindowProcW(hwnd, msg, wparam, lparam),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbar_hit_resolves_to_one_button_or_none() {
        let buttons = MainWindow::create_buttons();
        let first = buttons[0].rect;
        let second = buttons[1].rect;

        assert_eq!(button_index_at(&buttons, first.left, first.top), Some(0));
        assert_eq!(
            button_index_at(&buttons, second.left + 1, second.bottom - 1),
            Some(1)
        );
        // The gap between buttons and the bar strip below them hover nothing,
        // so moving through them does not count as a hover change.
        assert_eq!(button_index_at(&buttons, first.right, first.top), None);
        assert_eq!(
            button_index_at(&buttons, first.left, TOOLBAR_HEIGHT - 1),
            None
        );
        assert_eq!(button_index_at(&buttons, first.left, TOOLBAR_HEIGHT + 5), None);
    }
}
