use chrono::NaiveDate;
use tracing::{debug, info};

use crate::common::time::is_trading_day;
use crate::config::session_config::SessionConfig;
use crate::render::session_renderer::SessionRenderer;
use crate::session::session_range::SessionRange;
use crate::traits::host_trait::{HostContext, Indicator};

/// Overlay indicator drawing the Asian session high, low and midpoint
#[derive(Debug, Clone)]
pub struct AsianSessionIndicator {
    config: SessionConfig,
}

impl AsianSessionIndicator {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn draw_session(&self, date: NaiveDate, host: &mut HostContext<'_>) -> Option<SessionRange> {
        SessionRenderer::new(&self.config).draw_session(date, host.bars, &mut *host.chart)
    }
}

impl Indicator for AsianSessionIndicator {
    fn initialize(&mut self, host: &mut HostContext<'_>) {
        let today = host.server_time.date();
        info!(
            %today,
            start_hour = self.config.session_start_hour,
            end_hour = self.config.session_end_hour,
            utc_offset = self.config.utc_offset_hours,
            show_history = self.config.show_history,
            "asian session indicator loaded"
        );
        if !is_trading_day(today) {
            return;
        }
        self.draw_session(today, host);
    }

    fn calculate(&mut self, index: usize, host: &mut HostContext<'_>) {
        let date = host.bars.open_time(index).date();
        if !self.config.show_history && date != host.server_time.date() {
            return;
        }
        if !is_trading_day(date) {
            return;
        }
        if let Some(range) = self.draw_session(date, host) {
            debug!(
                index,
                %date,
                high = range.high,
                low = range.low,
                mid = range.mid,
                "session range"
            );
        }
    }
}
