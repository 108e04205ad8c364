use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use session_core::common::enums::{LineColor, LineStyle, LineThickness};
use session_core::host::bar_series::{Bar, BarSeries};
use session_core::host::recording_chart::RecordingChart;
use session_core::line::line_definition::LineVisual;
use session_core::{AsianSessionIndicator, HostContext, Indicator, SessionConfig};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
}

/// Hourly bars: low = day * 100 + hour, high = low + 1
fn hourly_bars(from: NaiveDateTime, hours: i64) -> BarSeries {
    BarSeries::from_bars((0..hours).map(|h| {
        let t = from + Duration::hours(h);
        let low = f64::from(t.day() * 100 + t.hour());
        Bar::new(t, low + 1.0, low)
    }))
    .unwrap()
}

fn replay(config: SessionConfig, bars: &BarSeries, server_time: NaiveDateTime) -> RecordingChart {
    let mut chart = RecordingChart::new();
    let mut indicator = AsianSessionIndicator::new(config);
    let mut host = HostContext::new(server_time, bars, &mut chart);
    indicator.initialize(&mut host);
    for index in 0..bars.len() {
        indicator.calculate(index, &mut host);
    }
    chart
}

#[test]
fn live_mode_draws_only_today() {
    // Mon 13th 00:00 .. Wed 15th 10:00
    let bars = hourly_bars(date(13).and_hms_opt(0, 0, 0).unwrap(), 59);
    let now = bars.last().unwrap().open_time;
    assert_eq!(now, date(15).and_hms_opt(10, 0, 0).unwrap());

    let chart = replay(SessionConfig::default(), &bars, now);

    assert_eq!(chart.len(), 5);
    let high = chart.get("Asia_HighLine").unwrap();
    let low = chart.get("Asia_LowLine").unwrap();
    let mid = chart.get("Asia_MidLine").unwrap();
    assert_eq!(high.start_price, 1507.0);
    assert_eq!(low.start_price, 1500.0);
    assert_eq!(mid.start_price, 1503.5);
    assert_eq!(high.start_time, date(15).and_hms_opt(0, 0, 0).unwrap());
    assert_eq!(high.end_time, date(15).and_hms_opt(16, 0, 0).unwrap());

    let right = chart.get("Asia_RightLine").unwrap();
    assert_eq!(right.start_time, date(15).and_hms_opt(6, 0, 0).unwrap());
    assert_eq!(right.end_time, right.start_time);
    assert_eq!((right.start_price, right.end_price), (1507.0, 1500.0));
}

#[test]
fn live_mode_refines_as_bars_arrive() {
    let start = date(15).and_hms_opt(0, 0, 0).unwrap();
    let mut bars = BarSeries::new();
    let mut chart = RecordingChart::new();
    let mut indicator = AsianSessionIndicator::new(SessionConfig::default());
    let mut highs = Vec::new();

    for h in 0..4 {
        let t = start + Duration::hours(h);
        let low = 10.0 - h as f64;
        bars.push(Bar::new(t, 20.0 + h as f64, low)).unwrap();
        let mut host = HostContext::new(t, &bars, &mut chart);
        indicator.calculate(bars.len() - 1, &mut host);
        highs.push(chart.get("Asia_HighLine").unwrap().start_price);
    }

    assert_eq!(highs, vec![20.0, 21.0, 22.0, 23.0]);
    assert_eq!(chart.get("Asia_LowLine").unwrap().start_price, 7.0);
    assert_eq!(chart.len(), 5);
    assert_eq!(chart.submissions(), 20);
}

#[test]
fn history_mode_tags_every_trading_day() {
    // Fri 17th 00:00 .. Mon 20th 23:00
    let bars = hourly_bars(date(17).and_hms_opt(0, 0, 0).unwrap(), 96);
    let config = SessionConfig {
        show_history: true,
        ..SessionConfig::default()
    };
    let chart = replay(config, &bars, bars.last().unwrap().open_time);

    assert_eq!(chart.len(), 10);
    assert!(chart.tags().all(|t| t.ends_with("_20250117") || t.ends_with("_20250120")));

    let friday = chart.get("Asia_HighLine_20250117").unwrap();
    assert_eq!(friday.start_price, 1707.0);
    assert_eq!(chart.get("Asia_LowLine_20250117").unwrap().start_price, 1700.0);
    let monday = chart.get("Asia_MidLine_20250120").unwrap();
    assert_eq!(monday.start_price, 2003.5);
}

#[test]
fn weekend_server_time_draws_nothing() {
    // Sat 18th 00:00 .. 12:00
    let bars = hourly_bars(date(18).and_hms_opt(0, 0, 0).unwrap(), 13);
    let chart = replay(SessionConfig::default(), &bars, bars.last().unwrap().open_time);
    assert_eq!(chart.submissions(), 0);
}

#[test]
fn missing_session_bars_draws_nothing() {
    // Wed 15th 08:00 onwards, session ends at 06:00
    let bars = hourly_bars(date(15).and_hms_opt(8, 0, 0).unwrap(), 6);
    let chart = replay(SessionConfig::default(), &bars, bars.last().unwrap().open_time);
    assert!(chart.is_empty());
}

#[test]
fn styles_only_change_appearance() {
    let bars = hourly_bars(date(15).and_hms_opt(0, 0, 0).unwrap(), 12);
    let now = bars.last().unwrap().open_time;
    let plain = replay(SessionConfig::default(), &bars, now);
    let styled = replay(
        SessionConfig {
            mid_line: LineVisual::new(LineColor::Purple, LineStyle::Solid, LineThickness::Five),
            left_line: LineVisual::new(LineColor::Green, LineStyle::Lines, LineThickness::Two),
            ..SessionConfig::default()
        },
        &bars,
        now,
    );

    for (a, b) in plain.lines().zip(styled.lines()) {
        assert_eq!(a.tag, b.tag);
        assert_eq!((a.start_time, a.end_time), (b.start_time, b.end_time));
        assert_eq!((a.start_price, a.end_price), (b.start_price, b.end_price));
    }
    assert_ne!(
        plain.get("Asia_MidLine").unwrap().color,
        styled.get("Asia_MidLine").unwrap().color
    );
    assert_eq!(styled.get("Asia_MidLine").unwrap().thickness, 5);
}
