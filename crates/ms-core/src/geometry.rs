// ABOUTME: Pixel geometry value types shared by the layout engine and hosts.
// ABOUTME: Defines orientation, sizes, points, rectangles, and resize cursors.

use serde::{Deserialize, Serialize};

/// How panes are arranged inside a container.
///
/// `Vertical` means vertical divider lines, so panes run left-to-right.
/// `Horizontal` means horizontal divider lines, so panes run top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }

    /// Extent along the axis panes are laid out on
    pub fn primary(self, size: Size) -> i32 {
        match self {
            Orientation::Vertical => size.width,
            Orientation::Horizontal => size.height,
        }
    }

    /// Extent across the axis panes are laid out on
    pub fn secondary(self, size: Size) -> i32 {
        match self {
            Orientation::Vertical => size.height,
            Orientation::Horizontal => size.width,
        }
    }

    /// Coordinate of a point along the primary axis
    pub fn primary_coord(self, point: Point) -> i32 {
        match self {
            Orientation::Vertical => point.x,
            Orientation::Horizontal => point.y,
        }
    }

    /// Cursor shown while a divider is being dragged
    pub fn resize_cursor(self) -> CursorStyle {
        match self {
            Orientation::Vertical => CursorStyle::ColResize,
            Orientation::Horizontal => CursorStyle::RowResize,
        }
    }

    /// Style class name hosts can put on the container element
    pub fn class_name(self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }

    pub fn toggled(self) -> Orientation {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

/// Container extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Pointer position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangle in container pixel coordinates.
/// Width and height may be zero or negative when the container is too small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect from primary-axis offset/extent and the full cross-axis extent
    pub fn along(orientation: Orientation, offset: i32, extent: i32, cross: i32) -> Self {
        match orientation {
            Orientation::Vertical => Self::new(offset, 0, extent, cross),
            Orientation::Horizontal => Self::new(0, offset, cross, extent),
        }
    }

    /// Extent along the orientation's primary axis
    pub fn primary_extent(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }
}

/// Pointer cursor requested while the pointer is captured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    ColResize,
    RowResize,
}
