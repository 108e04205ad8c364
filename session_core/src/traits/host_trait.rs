use chrono::NaiveDateTime;

use crate::style::host_style::{HostColor, HostLineStyle};

/// Bar sequence supplied by the chart host.
///
/// Open times must be strictly ascending by index; the session scan walks
/// backward and stops at the first bar older than the session start.
pub trait Bars {
    /// Number of bars available
    fn count(&self) -> usize;

    /// Open time of bar `index`
    fn open_time(&self, index: usize) -> NaiveDateTime;

    /// High price of bar `index`
    fn high(&self, index: usize) -> f64;

    /// Low price of bar `index`
    fn low(&self, index: usize) -> f64;
}

/// Drawing surface of the chart host
pub trait Chart {
    /// Draw a trend line, replacing any object already drawn under `tag`
    #[allow(clippy::too_many_arguments)]
    fn draw_trend_line(
        &mut self,
        tag: &str,
        start_time: NaiveDateTime,
        start_price: f64,
        end_time: NaiveDateTime,
        end_price: f64,
        color: HostColor,
        thickness: u32,
        style: HostLineStyle,
    );
}

/// What the host lends an indicator for the duration of one callback
pub struct HostContext<'a> {
    pub server_time: NaiveDateTime,
    pub bars: &'a dyn Bars,
    pub chart: &'a mut dyn Chart,
}

impl<'a> HostContext<'a> {
    pub fn new(server_time: NaiveDateTime, bars: &'a dyn Bars, chart: &'a mut dyn Chart) -> Self {
        Self {
            server_time,
            bars,
            chart,
        }
    }
}

/// Lifecycle hooks the host calls: once at load, then once per bar index
pub trait Indicator {
    fn initialize(&mut self, host: &mut HostContext<'_>);

    fn calculate(&mut self, index: usize, host: &mut HostContext<'_>);
}
