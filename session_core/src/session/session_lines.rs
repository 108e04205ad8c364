use super::{session_range::SessionRange, session_window::SessionWindow};
use crate::common::enums::LineId;
use crate::config::session_config::SessionConfig;
use crate::line::line_definition::LineDefinition;

/// The five session lines: three horizontals from session start to the
/// extension end, and two borders spanning high to low.
///
/// The right border sits at the session end, not the extension end.
pub fn build_lines(
    window: &SessionWindow,
    range: &SessionRange,
    config: &SessionConfig,
) -> [LineDefinition; 5] {
    let horizontal = |id: LineId, price: f64| {
        LineDefinition::new(
            id,
            window.session_start,
            price,
            window.extend_end,
            price,
            config.visual(id),
        )
    };
    let border = |id: LineId, time| {
        LineDefinition::new(id, time, range.high, time, range.low, config.visual(id))
    };

    [
        horizontal(LineId::HighLine, range.high),
        horizontal(LineId::LowLine, range.low),
        horizontal(LineId::MidLine, range.mid),
        border(LineId::LeftLine, window.session_start),
        border(LineId::RightLine, window.session_end),
    ]
}
