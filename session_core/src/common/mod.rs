pub mod enums;
pub mod session_error;
pub mod time;
