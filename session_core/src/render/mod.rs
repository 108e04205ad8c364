pub mod line_drawer;
pub mod session_renderer;
