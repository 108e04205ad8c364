use serde::Serialize;
use tracing::trace;

use super::session_window::SessionWindow;
use crate::traits::host_trait::Bars;

/// High, low and midpoint of the bars opened inside a session window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionRange {
    pub high: f64,
    pub low: f64,
    pub mid: f64,
}

impl SessionRange {
    pub fn new(high: f64, low: f64) -> Self {
        Self {
            high,
            low,
            mid: (high + low) / 2.0,
        }
    }

    /// Walk bars newest to oldest and stop at the first one opened before the
    /// session start. Relies on ascending open times; with unordered bars the
    /// result is undefined.
    ///
    /// Returns `None` when no bar opened inside the window.
    pub fn scan(bars: &dyn Bars, window: &SessionWindow) -> Option<Self> {
        let mut extremes: Option<(f64, f64)> = None;

        for i in (0..bars.count()).rev() {
            let t = bars.open_time(i);
            if t < window.session_start {
                break;
            }
            if t <= window.session_end {
                let (high, low) = (bars.high(i), bars.low(i));
                trace!(index = i, %t, high, low, "bar inside session");
                extremes = Some(match extremes {
                    Some((h, l)) => (h.max(high), l.min(low)),
                    None => (high, low),
                });
            }
        }

        extremes.map(|(high, low)| Self::new(high, low))
    }
}
