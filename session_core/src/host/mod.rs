pub mod bar_series;
pub mod recording_chart;
