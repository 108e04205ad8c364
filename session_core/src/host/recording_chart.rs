use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::style::host_style::{HostColor, HostLineStyle};
use crate::traits::host_trait::Chart;

/// A trend line as the host stored it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawnLine {
    pub tag: String,
    pub start_time: NaiveDateTime,
    pub start_price: f64,
    pub end_time: NaiveDateTime,
    pub end_price: f64,
    pub color: HostColor,
    pub thickness: u32,
    pub style: HostLineStyle,
}

/// Chart surface that keeps drawn objects in memory, keyed by tag
#[derive(Debug, Default)]
pub struct RecordingChart {
    lines: BTreeMap<String, DrawnLine>,
    submissions: usize,
}

impl RecordingChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tag: &str) -> Option<&DrawnLine> {
        self.lines.get(tag)
    }

    /// Drawn lines ordered by tag
    pub fn lines(&self) -> impl Iterator<Item = &DrawnLine> {
        self.lines.values()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.lines.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total draw calls received, replacements included
    pub fn submissions(&self) -> usize {
        self.submissions
    }
}

impl Chart for RecordingChart {
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
    ) {
        self.submissions += 1;
        self.lines.insert(
            tag.to_string(),
            DrawnLine {
                tag: tag.to_string(),
                start_time,
                start_price,
                end_time,
                end_price,
                color,
                thickness,
                style,
            },
        );
    }
}
