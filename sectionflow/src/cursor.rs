//! Running placement cursor for one layout pass.
//!
//! The cursor works in axis-relative coordinates: `main` runs along the
//! primary axis (x for vertical modes), `wrap` along the axis new lines
//! stack on. It is rebuilt from scratch on every pass.

use crate::mode::{Axis, AxisInsets};
use crate::primitives::{Point, Size};

#[derive(Debug, Clone)]
pub struct FlowCursor {
    axis: Axis,
    /// Next free position on the current line.
    main: f32,
    /// Wrap-axis offset shared by every item on the current line.
    wrap: f32,
    /// Furthest wrap-axis edge reached so far, including insets.
    wrap_extent: f32,
    /// Number of items placed on the current line.
    line_len: usize,
}

impl FlowCursor {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            main: 0.0,
            wrap: 0.0,
            wrap_extent: 0.0,
            line_len: 0,
        }
    }

    pub fn wrap_extent(&self) -> f32 {
        self.wrap_extent
    }

    pub fn line_len(&self) -> usize {
        self.line_len
    }

    /// Start a section on a fresh line, after its leading wrap inset.
    ///
    /// Sections never share a line, even when the previous line had room.
    pub fn begin_section(&mut self, insets: &AxisInsets) {
        self.wrap += insets.wrap_leading;
        self.wrap_extent += insets.wrap_leading;
        self.main = insets.main_leading;
        self.line_len = 0;
    }

    /// Close the section: add its trailing wrap inset and move the cursor
    /// past it.
    pub fn end_section(&mut self, insets: &AxisInsets) {
        self.wrap_extent += insets.wrap_trailing;
        self.wrap = self.wrap_extent;
        self.line_len = 0;
    }

    /// Whether an item of `item_main` extent still fits on the current line.
    ///
    /// The first item of a line always fits; an oversized item therefore
    /// ends up alone on its own line instead of being skipped.
    pub fn fits(&self, item_main: f32, spacing: f32, trailing_inset: f32, limit: f32) -> bool {
        self.line_len == 0 || self.main + spacing + item_main + trailing_inset <= limit
    }

    /// Move past the inter-item gap before appending to the current line.
    pub fn advance_spacing(&mut self, spacing: f32) {
        if self.line_len > 0 {
            self.main += spacing;
        }
    }

    /// Close the current line and open a new one below (or beside) it.
    pub fn break_line(&mut self, main_start: f32, line_spacing: f32) {
        tracing::trace!(
            "closing line at wrap offset {} with {} items",
            self.wrap,
            self.line_len
        );
        self.main = main_start;
        self.wrap = self.wrap_extent + line_spacing;
        self.line_len = 0;
    }

    /// Override the primary-axis position of the next item.
    pub fn set_main(&mut self, main: f32) {
        self.main = main;
    }

    /// Place an item at the cursor and advance past it. Returns its origin.
    pub fn place(&mut self, size: Size) -> Point {
        let origin = self.axis.point(self.main, self.wrap);
        self.main += self.axis.main(size);
        self.wrap_extent = self.wrap_extent.max(self.wrap + self.axis.cross(size));
        self.line_len += 1;
        origin
    }
}
