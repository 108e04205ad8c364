use serde_json::Value;
use std::collections::HashMap;

use super::config_with_check::ConfigWithCheck;
use crate::common::{
    enums::{LineColor, LineId, LineStyle, LineThickness},
    session_error::SessionError,
};
use crate::line::line_definition::LineVisual;

/// Accepted range for every hour-like parameter, offsets included
const HOUR_LIMIT: i32 = 48;

/// Session indicator parameters. Built once at load, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub session_start_hour: i32,
    pub session_end_hour: i32,
    pub extend_until_hour: i32,
    pub show_history: bool,
    pub utc_offset_hours: i32,
    pub top_line: LineVisual,
    pub bottom_line: LineVisual,
    pub mid_line: LineVisual,
    pub left_line: LineVisual,
    pub right_line: LineVisual,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let lines = LineVisual::new(LineColor::Orange, LineStyle::Lines, LineThickness::One);
        let mid = LineVisual::new(LineColor::Orange, LineStyle::Dotted, LineThickness::One);
        let border = LineVisual::new(LineColor::White, LineStyle::Dotted, LineThickness::One);
        Self {
            session_start_hour: 1,
            session_end_hour: 7,
            extend_until_hour: 17,
            show_history: false,
            utc_offset_hours: 1,
            top_line: lines,
            bottom_line: lines,
            mid_line: mid,
            left_line: border,
            right_line: border,
        }
    }
}

impl SessionConfig {
    pub fn new(conf: Option<HashMap<String, Value>>) -> Result<Self, SessionError> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());
        let default = Self::default();

        let config = Self {
            session_start_hour: get_hour(&mut conf, "session_start_hour")?
                .unwrap_or(default.session_start_hour),
            session_end_hour: get_hour(&mut conf, "session_end_hour")?
                .unwrap_or(default.session_end_hour),
            extend_until_hour: get_hour(&mut conf, "extend_until_hour")?
                .unwrap_or(default.extend_until_hour),
            show_history: conf.get("show_history")?.unwrap_or(default.show_history),
            utc_offset_hours: get_hour(&mut conf, "utc_offset_hours")?
                .unwrap_or(default.utc_offset_hours),
            top_line: get_visual(&mut conf, "top", default.top_line)?,
            bottom_line: get_visual(&mut conf, "bottom", default.bottom_line)?,
            mid_line: get_visual(&mut conf, "mid", default.mid_line)?,
            left_line: get_visual(&mut conf, "left", default.left_line)?,
            right_line: get_visual(&mut conf, "right", default.right_line)?,
        };

        conf.check()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SessionError> {
        let conf: HashMap<String, Value> = serde_json::from_str(json)?;
        Self::new(Some(conf))
    }

    /// Visual attributes configured for `id`
    pub fn visual(&self, id: LineId) -> LineVisual {
        match id {
            LineId::HighLine => self.top_line,
            LineId::LowLine => self.bottom_line,
            LineId::MidLine => self.mid_line,
            LineId::LeftLine => self.left_line,
            LineId::RightLine => self.right_line,
        }
    }
}

fn get_hour(conf: &mut ConfigWithCheck, key: &str) -> Result<Option<i32>, SessionError> {
    let hour: Option<i32> = conf.get(key)?;
    match hour {
        Some(h) if !(-HOUR_LIMIT..=HOUR_LIMIT).contains(&h) => Err(SessionError::invalid_parameter(
            key,
            format!("{} outside [-{}, {}]", h, HOUR_LIMIT, HOUR_LIMIT),
        )),
        _ => Ok(hour),
    }
}

fn get_visual(
    conf: &mut ConfigWithCheck,
    prefix: &str,
    default: LineVisual,
) -> Result<LineVisual, SessionError> {
    Ok(LineVisual {
        color: conf
            .get_parsed(&format!("{}_line_color", prefix))?
            .unwrap_or(default.color),
        style: conf
            .get_parsed(&format!("{}_line_style", prefix))?
            .unwrap_or(default.style),
        thickness: conf
            .get_parsed(&format!("{}_line_thickness", prefix))?
            .unwrap_or(default.thickness),
    })
}
