//! Layout modes and the axis helpers that let one placement routine serve
//! both flow directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::primitives::{EdgeInsets, Point, Rect, Size};

/// The four flow strategies the engine can run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Items fill a row left to right until the viewport width is used up,
    /// then wrap to the next row. A new section always starts a new row.
    #[default]
    Vertical,
    /// Items fill a column top to bottom until the viewport height is used
    /// up, then wrap to the next column. A new section always starts a new
    /// column.
    Horizontal,
    /// Rows like `Vertical`, but each row is kept centered on the viewport
    /// width as items join it.
    CenteredVertical,
    /// Columns like `Horizontal`, but each column is kept centered on the
    /// viewport height as items join it.
    CenteredHorizontal,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 4] = [
        LayoutMode::Vertical,
        LayoutMode::Horizontal,
        LayoutMode::CenteredVertical,
        LayoutMode::CenteredHorizontal,
    ];

    /// The axis items are packed along before wrapping.
    pub fn primary_axis(self) -> Axis {
        match self {
            LayoutMode::Vertical | LayoutMode::CenteredVertical => Axis::X,
            LayoutMode::Horizontal | LayoutMode::CenteredHorizontal => Axis::Y,
        }
    }

    pub fn fit_strategy(self) -> FitStrategy {
        match self {
            LayoutMode::Vertical | LayoutMode::Horizontal => FitStrategy::Directional,
            LayoutMode::CenteredVertical | LayoutMode::CenteredHorizontal => FitStrategy::Centered,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutMode::Vertical => "vertical",
            LayoutMode::Horizontal => "horizontal",
            LayoutMode::CenteredVertical => "centered_vertical",
            LayoutMode::CenteredHorizontal => "centered_horizontal",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutMode {
    type Err = LayoutError;

    /// Accepts the snake_case names, with `-` allowed in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        LayoutMode::ALL
            .into_iter()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| LayoutError::UnknownMode(s.to_string()))
    }
}

/// How an item decides whether it still fits on the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStrategy {
    /// Cursor-based: the item fits if it ends before the trailing inset.
    Directional,
    /// Budget-based: a per-line space counter must stay non-negative, and
    /// the line re-centers every time an item joins it.
    Centered,
}

/// The primary (packing) axis. The wrap axis is always the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Extent of `size` along this axis.
    #[inline]
    pub fn main(self, size: Size) -> f32 {
        match self {
            Axis::X => size.width,
            Axis::Y => size.height,
        }
    }

    /// Extent of `size` along the wrap axis.
    #[inline]
    pub fn cross(self, size: Size) -> f32 {
        match self {
            Axis::X => size.height,
            Axis::Y => size.width,
        }
    }

    /// Build a point from (primary, wrap) coordinates.
    #[inline]
    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Axis::X => Point::new(main, cross),
            Axis::Y => Point::new(cross, main),
        }
    }

    /// Build a size from (primary, wrap) extents.
    #[inline]
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::X => Size::new(main, cross),
            Axis::Y => Size::new(cross, main),
        }
    }

    /// Mutable access to a frame's origin along this axis.
    #[inline]
    pub fn main_origin_mut(self, rect: &mut Rect) -> &mut f32 {
        match self {
            Axis::X => &mut rect.x,
            Axis::Y => &mut rect.y,
        }
    }

    /// Trailing edge of a frame along this axis.
    #[inline]
    pub fn main_end(self, rect: &Rect) -> f32 {
        match self {
            Axis::X => rect.right(),
            Axis::Y => rect.bottom(),
        }
    }

    /// Trailing edge of a frame along the wrap axis.
    #[inline]
    pub fn cross_end(self, rect: &Rect) -> f32 {
        match self {
            Axis::X => rect.bottom(),
            Axis::Y => rect.right(),
        }
    }

    /// Project section insets onto this axis.
    pub fn insets(self, insets: EdgeInsets) -> AxisInsets {
        match self {
            Axis::X => AxisInsets {
                main_leading: insets.left,
                main_trailing: insets.right,
                wrap_leading: insets.top,
                wrap_trailing: insets.bottom,
            },
            Axis::Y => AxisInsets {
                main_leading: insets.top,
                main_trailing: insets.bottom,
                wrap_leading: insets.left,
                wrap_trailing: insets.right,
            },
        }
    }
}

/// Section insets expressed relative to the primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisInsets {
    pub main_leading: f32,
    pub main_trailing: f32,
    pub wrap_leading: f32,
    pub wrap_trailing: f32,
}

impl AxisInsets {
    /// Combined inset along the primary axis.
    pub fn main_total(&self) -> f32 {
        self.main_leading + self.main_trailing
    }
}

// =========================================================================
// Tests
// =========================================================================
