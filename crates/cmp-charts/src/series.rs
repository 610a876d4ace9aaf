//! Series descriptors and theme palettes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed palette assigned to goals by index, cycling when the goal list is
/// longer than the palette.
pub const GOAL_PALETTE: [Rgb; 5] = [
    Rgb::new(0xb6, 0xcb, 0x1a),
    Rgb::new(0xf8, 0x7c, 0x01),
    Rgb::new(0x04, 0x81, 0xf7),
    Rgb::new(0x3c, 0xbc, 0xb6),
    Rgb::new(0xe3, 0x4c, 0x00),
];

pub fn goal_color(index: usize) -> Rgb {
    GOAL_PALETTE[index % GOAL_PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesRole {
    Bar,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSide {
    Left,
    Right,
}

/// One plotted series: which data field it reads, how the legend labels it
/// and how it is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDesc {
    pub key: String,
    pub display_name: String,
    pub color: Rgb,
    pub role: SeriesRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_group: Option<String>,
    pub axis: AxisSide,
}

impl SeriesDesc {
    pub fn line(key: &str, display_name: &str, color: Rgb) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
            color,
            role: SeriesRole::Line,
            stack_group: None,
            axis: AxisSide::Left,
        }
    }

    pub fn bar(key: &str, display_name: &str, color: Rgb) -> Self {
        Self {
            role: SeriesRole::Bar,
            ..Self::line(key, display_name, color)
        }
    }

    pub fn in_stack(mut self, group: &str) -> Self {
        self.stack_group = Some(group.to_string());
        self
    }

    pub fn on_right_axis(mut self) -> Self {
        self.axis = AxisSide::Right;
        self
    }
}
