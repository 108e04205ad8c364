//! Translation of parameter-panel style choices into host drawing values.
//!
//! Every match is exhaustive so a new variant fails to compile until it is
//! mapped here.

use super::host_style::{HostColor, HostLineStyle};
use crate::common::enums::{LineColor, LineStyle, LineThickness};

pub fn to_color(color: LineColor) -> HostColor {
    match color {
        LineColor::White => HostColor::rgb(0xFF, 0xFF, 0xFF),
        LineColor::Black => HostColor::rgb(0x00, 0x00, 0x00),
        LineColor::Gray => HostColor::rgb(0x80, 0x80, 0x80),
        LineColor::Red => HostColor::rgb(0xFF, 0x00, 0x00),
        LineColor::Green => HostColor::rgb(0x00, 0x80, 0x00),
        LineColor::Blue => HostColor::rgb(0x00, 0x00, 0xFF),
        LineColor::Yellow => HostColor::rgb(0xFF, 0xFF, 0x00),
        LineColor::Orange => HostColor::rgb(0xFF, 0xA5, 0x00),
        LineColor::Purple => HostColor::rgb(0x80, 0x00, 0x80),
        LineColor::Aqua => HostColor::rgb(0x00, 0xFF, 0xFF),
    }
}

pub fn to_line_style(style: LineStyle) -> HostLineStyle {
    match style {
        LineStyle::Solid => HostLineStyle::Solid,
        LineStyle::Dotted => HostLineStyle::Dots,
        LineStyle::DotsRare => HostLineStyle::DotsRare,
        LineStyle::Lines => HostLineStyle::Lines,
        LineStyle::LinesDots => HostLineStyle::LinesDots,
    }
}

pub fn to_thickness(thickness: LineThickness) -> u32 {
    match thickness {
        LineThickness::One => 1,
        LineThickness::Two => 2,
        LineThickness::Three => 3,
        LineThickness::Four => 4,
        LineThickness::Five => 5,
    }
}
