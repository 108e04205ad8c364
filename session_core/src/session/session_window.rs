use chrono::{NaiveDate, NaiveDateTime};

use crate::common::time::at_hour;
use crate::config::session_config::SessionConfig;

/// Session boundaries for one calendar day, recomputed on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    pub session_start: NaiveDateTime,
    pub session_end: NaiveDateTime,
    pub extend_end: NaiveDateTime,
}

impl SessionWindow {
    /// Each boundary is `date + (hour - utc_offset)` hours and may fall on a
    /// neighbouring day.
    pub fn for_date(date: NaiveDate, config: &SessionConfig) -> Self {
        let offset = config.utc_offset_hours;
        Self {
            session_start: at_hour(date, config.session_start_hour - offset),
            session_end: at_hour(date, config.session_end_hour - offset),
            extend_end: at_hour(date, config.extend_until_hour - offset),
        }
    }

    /// Inclusive at both ends
    pub fn contains(&self, time: NaiveDateTime) -> bool {
        time >= self.session_start && time <= self.session_end
    }
}
