pub mod window;

pub use window::MainWindow;
