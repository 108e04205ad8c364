use chrono::NaiveDate;
use tracing::debug;

use crate::common::{enums::LineId, time::to_date_str};
use crate::line::line_definition::LineDefinition;
use crate::style::style_mapper::{to_color, to_line_style, to_thickness};
use crate::traits::host_trait::Chart;

pub const TAG_PREFIX: &str = "Asia";

/// Chart object tag for a line.
///
/// Without history every day shares one tag per line, so today's lines keep
/// overwriting the same objects. With history the tag carries the date.
pub fn line_tag(id: LineId, date: NaiveDate, show_history: bool) -> String {
    if show_history {
        format!("{}_{}_{}", TAG_PREFIX, id, to_date_str(date))
    } else {
        format!("{}_{}", TAG_PREFIX, id)
    }
}

/// Map the line's styles and hand it to the chart under its tag
pub fn draw_line(chart: &mut dyn Chart, line: &LineDefinition, show_history: bool, date: NaiveDate) {
    let tag = line_tag(line.id, date, show_history);
    debug!(
        %tag,
        start = %line.start_time,
        end = %line.end_time,
        start_price = line.start_price,
        end_price = line.end_price,
        "draw line"
    );
    chart.draw_trend_line(
        &tag,
        line.start_time,
        line.start_price,
        line.end_time,
        line.end_price,
        to_color(line.visual.color),
        to_thickness(line.visual.thickness),
        to_line_style(line.visual.style),
    );
}
