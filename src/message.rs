// UI-event to action dispatch.
//
// Window event handlers translate raw Win32 messages into commands; the main
// window executes them against the `App` state. Keeps the event handlers free
// of business logic.

/// Command enum describing the action a UI event requests.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Request a repaint of the main window
    RequestRedraw,
    /// Open the file picker and run recognition on the chosen image
    LoadImage,
    /// Hide the window, capture the screen, run recognition
    CaptureScreen,
    /// Copy the text of the overlay shape at this index to the clipboard
    CopyWord(usize),
    /// Replace the status line text
    SetStatus(String),
    /// Exit the application
    Quit,
    /// No operation
    None,
}
