use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::common::enums::{LineColor, LineId, LineStyle, LineThickness};

/// Visual attributes of one line, as chosen in the parameter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineVisual {
    pub color: LineColor,
    pub style: LineStyle,
    pub thickness: LineThickness,
}

impl LineVisual {
    pub fn new(color: LineColor, style: LineStyle, thickness: LineThickness) -> Self {
        Self {
            color,
            style,
            thickness,
        }
    }
}

/// One segment in time/price space, built fresh for every render.
///
/// Horizontal lines vary in time only, vertical lines in price only. The
/// ordering of the endpoints is not checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineDefinition {
    pub id: LineId,
    pub start_time: NaiveDateTime,
    pub start_price: f64,
    pub end_time: NaiveDateTime,
    pub end_price: f64,
    pub visual: LineVisual,
}

impl LineDefinition {
    pub fn new(
        id: LineId,
        start_time: NaiveDateTime,
        start_price: f64,
        end_time: NaiveDateTime,
        end_price: f64,
        visual: LineVisual,
    ) -> Self {
        Self {
            id,
            start_time,
            start_price,
            end_time,
            end_price,
            visual,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.start_price == self.end_price
    }

    pub fn is_vertical(&self) -> bool {
        self.start_time == self.end_time
    }
}
