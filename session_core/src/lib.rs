pub mod common;
pub mod config;
pub mod host;
pub mod indicator;
pub mod line;
pub mod render;
pub mod session;
pub mod style;
pub mod traits;

pub use config::session_config::SessionConfig;
pub use indicator::asian_session::AsianSessionIndicator;
pub use traits::host_trait::{Bars, Chart, HostContext, Indicator};
