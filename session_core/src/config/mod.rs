pub mod config_with_check;
pub mod session_config;
