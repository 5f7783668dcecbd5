pub mod decision;
pub mod launcher;
pub mod match_filter;
pub mod process_directory;
pub mod selector;
pub mod window_system;

pub use launcher::{LaunchMode, Launcher};
pub use window_system::{create_window_system, WindowSystem};
