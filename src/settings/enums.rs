//! Settings enum types.

use crate::draw::Color;
use crate::geometry::Axis;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the container the brace's tips face.
///
/// `left`/`up` place the tips on the far half of the cross axis and the pointer
/// at the near edge; `right`/`down` mirror that.
#[derive(
    Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Axis the brace spans: up/down run horizontally, left/right vertically.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Horizontal,
            Direction::Left | Direction::Right => Axis::Vertical,
        }
    }

    /// Whether the tips sit at `edge` (true) or at zero (false) on the cross axis.
    pub fn tips_on_edge(self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color specification - a name, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "black"
///
/// # Hex color, with optional alpha
/// color = "#212121"
///
/// # Custom RGB color (0-255 per component)
/// color = [33, 33, 33]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black, gray)
    /// or a `#rgb`, `#rrggbb`, `#rrggbbaa` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`], or `None` if the name is not recognized.
    pub fn to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => {
                let trimmed = name.trim();
                if trimmed.starts_with('#') {
                    Color::from_hex(trimmed)
                } else {
                    crate::util::name_to_color(trimmed)
                }
            }
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Name(value.to_string())
    }
}
