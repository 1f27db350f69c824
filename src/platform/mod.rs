// Platform interop layer. Windows-only today.

pub mod windows;
