pub mod session_lines;
pub mod session_range;
pub mod session_window;
