// Grid stress signal - state codes and their presentation
use crate::domain::errors::UnmappedCodeError;

/// A display color, named the way the charts refer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

impl Color {
    pub const fn new(name: &'static str, rgb: (u8, u8, u8)) -> Self {
        Self { name, rgb }
    }
}

pub const LAWN_GREEN: Color = Color::new("lawngreen", (124, 252, 0));
pub const GREEN: Color = Color::new("g", (0, 128, 0));
pub const ORANGE: Color = Color::new("orange", (255, 165, 0));
pub const RED: Color = Color::new("red", (255, 0, 0));

/// Coarse classification of how favorable grid conditions are for consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateCode {
    SuperGreen = -1,
    Green = 1,
    Orange = 3,
    Red = 4,
}

impl StateCode {
    pub fn color(self) -> Color {
        match self {
            StateCode::SuperGreen => LAWN_GREEN,
            StateCode::Green => GREEN,
            StateCode::Orange => ORANGE,
            StateCode::Red => RED,
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            StateCode::SuperGreen => "Strom bevorzugt nutzen",
            StateCode::Green => "Strom wie gewohnt nutzen",
            StateCode::Orange => "Stromverbrauch reduzieren um Kosten und CO2 zu sparen",
            StateCode::Red => "Stromverbrauch reduzieren um Strommangel zu verhindern",
        }
    }
}

impl TryFrom<i64> for StateCode {
    type Error = UnmappedCodeError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(StateCode::SuperGreen),
            1 => Ok(StateCode::Green),
            3 => Ok(StateCode::Orange),
            4 => Ok(StateCode::Red),
            other => Err(UnmappedCodeError { code: other }),
        }
    }
}

/// Look up the display color for a raw state code.
pub fn color_for(code: i64) -> Result<Color, UnmappedCodeError> {
    StateCode::try_from(code).map(StateCode::color)
}

/// Look up the consumption recommendation for a raw state code.
pub fn text_for(code: i64) -> Result<&'static str, UnmappedCodeError> {
    StateCode::try_from(code).map(StateCode::recommendation)
}
