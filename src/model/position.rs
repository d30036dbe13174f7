//! Screen-corner placement for the toggle button and the panel.
//!
//! Both resolvers are total: any string that is not one of the four corner
//! names resolves as `bottom-right`.

#[cfg(test)]
#[path = "position_test.rs"]
mod position_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Distance of the toggle button from the two screen edges of its corner.
pub const TOGGLE_EDGE_OFFSET_PX: u16 = 20;
/// Distance of the panel from the toggle container, enough to clear the button.
pub const PANEL_STACK_OFFSET_PX: u16 = 80;
pub const WIDGET_Z_INDEX: u16 = 1000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl Position {
    pub const ALL: [Self; 4] = [Self::BottomRight, Self::BottomLeft, Self::TopRight, Self::TopLeft];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
            Self::TopRight => "top-right",
            Self::TopLeft => "top-left",
        }
    }

    /// Parse a corner name, falling back to `bottom-right`.
    #[must_use]
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim() {
            "bottom-left" => Self::BottomLeft,
            "top-right" => Self::TopRight,
            "top-left" => Self::TopLeft,
            _ => Self::BottomRight,
        }
    }

    fn vertical(self) -> VerticalEdge {
        match self {
            Self::BottomRight | Self::BottomLeft => VerticalEdge::Bottom,
            Self::TopRight | Self::TopLeft => VerticalEdge::Top,
        }
    }

    fn horizontal(self) -> HorizontalEdge {
        match self {
            Self::BottomRight | Self::TopRight => HorizontalEdge::Right,
            Self::BottomLeft | Self::TopLeft => HorizontalEdge::Left,
        }
    }
}

impl From<&str> for Position {
    fn from(raw: &str) -> Self {
        Self::parse_or_default(raw)
    }
}

impl From<String> for Position {
    fn from(raw: String) -> Self {
        Self::parse_or_default(&raw)
    }
}

impl From<Position> for &'static str {
    fn from(position: Position) -> Self {
        position.as_str()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// Absolute offsets from one vertical and one horizontal edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub vertical: VerticalEdge,
    pub vertical_px: u16,
    pub horizontal: HorizontalEdge,
    pub horizontal_px: u16,
}

impl Anchor {
    /// Inline CSS declarations for the two offsets, e.g. `bottom: 20px; right: 20px;`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let v = match self.vertical {
            VerticalEdge::Top => "top",
            VerticalEdge::Bottom => "bottom",
        };
        let h = match self.horizontal {
            HorizontalEdge::Left => "left",
            HorizontalEdge::Right => "right",
        };
        format!("{v}: {}px; {h}: {}px;", self.vertical_px, self.horizontal_px)
    }
}

/// Placement of the fixed container that holds the toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToggleStyle {
    pub anchor: Anchor,
    pub z_index: u16,
}

impl ToggleStyle {
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("position: fixed; z-index: {}; {}", self.z_index, self.anchor.to_css())
    }
}

/// Placement of the panel relative to the toggle container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PanelStyle {
    pub anchor: Anchor,
}

impl PanelStyle {
    #[must_use]
    pub fn to_css(&self) -> String {
        self.anchor.to_css()
    }
}

#[must_use]
pub fn resolve_toggle_style(position: Position) -> ToggleStyle {
    ToggleStyle {
        anchor: Anchor {
            vertical: position.vertical(),
            vertical_px: TOGGLE_EDGE_OFFSET_PX,
            horizontal: position.horizontal(),
            horizontal_px: TOGGLE_EDGE_OFFSET_PX,
        },
        z_index: WIDGET_Z_INDEX,
    }
}

/// The panel sits flush with the toggle's horizontal edge and stacks away
/// from the vertical edge, so it opens above a bottom toggle and below a top one.
#[must_use]
pub fn resolve_panel_style(position: Position) -> PanelStyle {
    PanelStyle {
        anchor: Anchor {
            vertical: position.vertical(),
            vertical_px: PANEL_STACK_OFFSET_PX,
            horizontal: position.horizontal(),
            horizontal_px: 0,
        },
    }
}
