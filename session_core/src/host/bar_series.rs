use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::common::session_error::SessionError;
use crate::traits::host_trait::Bars;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub open_time: NaiveDateTime,
    pub high: f64,
    pub low: f64,
}

impl Bar {
    pub fn new(open_time: NaiveDateTime, high: f64, low: f64) -> Self {
        Self {
            open_time,
            high,
            low,
        }
    }
}

/// In-memory bar source that only accepts bars in strictly ascending time
#[derive(Debug, Clone, Default)]
pub struct BarSeries {
    lst: Vec<Bar>,
}

impl BarSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bars(bars: impl IntoIterator<Item = Bar>) -> Result<Self, SessionError> {
        let mut series = Self::new();
        for bar in bars {
            series.push(bar)?;
        }
        Ok(series)
    }

    /// Append a bar, checking prices and time order
    pub fn push(&mut self, bar: Bar) -> Result<(), SessionError> {
        let index = self.lst.len();
        if !bar.high.is_finite() || !bar.low.is_finite() {
            return Err(SessionError::InvalidBar {
                index,
                msg: format!("non-finite price high={} low={}", bar.high, bar.low),
            });
        }
        if bar.low > bar.high {
            return Err(SessionError::InvalidBar {
                index,
                msg: format!("low={} above high={}", bar.low, bar.high),
            });
        }
        if let Some(last) = self.lst.last() {
            if bar.open_time <= last.open_time {
                return Err(SessionError::NotMonotonous { index });
            }
        }
        self.lst.push(bar);
        Ok(())
    }

    pub fn last(&self) -> Option<&Bar> {
        self.lst.last()
    }

    pub fn len(&self) -> usize {
        self.lst.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lst.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.lst.iter()
    }
}

impl Index<usize> for BarSeries {
    type Output = Bar;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lst[index]
    }
}

impl Bars for BarSeries {
    fn count(&self) -> usize {
        self.lst.len()
    }

    fn open_time(&self, index: usize) -> NaiveDateTime {
        self.lst[index].open_time
    }

    fn high(&self, index: usize) -> f64 {
        self.lst[index].high
    }

    fn low(&self, index: usize) -> f64 {
        self.lst[index].low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_push_in_order() {
        let series = BarSeries::from_bars([Bar::new(t(0), 2.0, 1.0), Bar::new(t(1), 3.0, 2.0)])
            .unwrap();
        assert_eq!(series.count(), 2);
        assert_eq!(series.open_time(1), t(1));
        assert_eq!(series.high(1), 3.0);
        assert_eq!(series.low(0), 1.0);
    }

    #[test]
    fn test_rejects_out_of_order() {
        let mut series = BarSeries::new();
        series.push(Bar::new(t(2), 2.0, 1.0)).unwrap();
        assert!(matches!(
            series.push(Bar::new(t(2), 2.0, 1.0)),
            Err(SessionError::NotMonotonous { index: 1 })
        ));
        assert!(series.push(Bar::new(t(1), 2.0, 1.0)).is_err());
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_rejects_inverted_prices() {
        let mut series = BarSeries::new();
        assert!(matches!(
            series.push(Bar::new(t(0), 1.0, 2.0)),
            Err(SessionError::InvalidBar { index: 0, .. })
        ));
        assert!(series.push(Bar::new(t(0), f64::NAN, 1.0)).is_err());
        assert!(series.is_empty());
    }
}
