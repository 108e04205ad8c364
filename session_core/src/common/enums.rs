use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Logical line names, one per drawn segment
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum LineId {
    HighLine,
    LowLine,
    MidLine,
    LeftLine,
    RightLine,
}

/// Line colors selectable from the parameter panel
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum LineColor {
    White,
    Black,
    Gray,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Aqua,
}

/// Line patterns selectable from the parameter panel
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum LineStyle {
    Solid,
    Dotted,
    DotsRare,
    Lines,
    LinesDots,
}

/// Line widths selectable from the parameter panel
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum LineThickness {
    One,
    Two,
    Three,
    Four,
    Five,
}
