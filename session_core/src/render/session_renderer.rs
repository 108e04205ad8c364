use chrono::NaiveDate;
use tracing::debug;

use super::line_drawer::draw_line;
use crate::common::time::is_trading_day;
use crate::config::session_config::SessionConfig;
use crate::session::{
    session_lines::build_lines, session_range::SessionRange, session_window::SessionWindow,
};
use crate::traits::host_trait::{Bars, Chart};

/// Draws the session box for one calendar day
#[derive(Debug, Clone, Copy)]
pub struct SessionRenderer<'a> {
    config: &'a SessionConfig,
}

impl<'a> SessionRenderer<'a> {
    pub fn new(config: &'a SessionConfig) -> Self {
        Self { config }
    }

    /// Draw the five session lines for `date`.
    ///
    /// Weekends and days without a bar inside the session draw nothing and
    /// return `None`.
    pub fn draw_session(
        &self,
        date: NaiveDate,
        bars: &dyn Bars,
        chart: &mut dyn Chart,
    ) -> Option<SessionRange> {
        if !is_trading_day(date) {
            debug!(%date, "weekend, skip");
            return None;
        }

        let window = SessionWindow::for_date(date, self.config);
        let Some(range) = SessionRange::scan(bars, &window) else {
            debug!(%date, start = %window.session_start, end = %window.session_end, "no bars in session");
            return None;
        };

        for line in build_lines(&window, &range, self.config).iter() {
            draw_line(chart, line, self.config.show_history, date);
        }
        Some(range)
    }
}
