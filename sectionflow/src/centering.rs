//! Incremental re-centering for the centered modes.
//!
//! A line is kept centered on the viewport while it fills: the first item
//! is placed centered on its own, and every item that joins afterwards
//! pushes all of its line-mates back by half of the space it consumes
//! (its extent plus the gap before it). After k items the line is exactly
//! centered, so margins on both sides stay equal at every step.
//!
//! The open line is the index range `[line_start, current)` of the
//! attribute store; nothing outside that range is ever touched.

use crate::mode::Axis;
use crate::store::AttributeStore;

#[derive(Debug, Clone)]
pub struct CenteringPass {
    axis: Axis,
    /// Full viewport extent along the primary axis; lines center on it.
    viewport_main: f32,
    /// Viewport extent minus the section's primary-axis insets.
    usable: f32,
    /// Space left on the open line.
    available: f32,
    /// Store index of the open line's first attribute.
    line_start: usize,
}

impl CenteringPass {
    pub fn new(axis: Axis, viewport_main: f32) -> Self {
        Self {
            axis,
            viewport_main,
            usable: viewport_main,
            available: viewport_main,
            line_start: 0,
        }
    }

    /// Reset the per-line budget for a new section.
    pub fn begin_section(&mut self, main_insets: f32) {
        self.usable = self.viewport_main - main_insets;
        self.available = self.usable;
    }

    /// Whether an item can join the open line without driving the budget
    /// negative.
    pub fn fits(&self, item_main: f32, spacing: f32) -> bool {
        self.available - item_main - spacing >= 0.0
    }

    /// Open a new line at `index` with a single centered item. Returns the
    /// item's primary-axis position.
    pub fn start_line(&mut self, index: usize, item_main: f32) -> f32 {
        self.line_start = index;
        self.available = self.usable - item_main;
        (self.viewport_main - item_main) / 2.0
    }

    /// Append an item to the open line, shifting its line-mates back by
    /// half of the space the item takes. Returns the item's primary-axis
    /// position, right after the last line-mate.
    pub fn join(&mut self, store: &mut AttributeStore, index: usize, item_main: f32, spacing: f32) -> f32 {
        let shift = (spacing + item_main) / 2.0;
        let axis = self.axis;
        for frame in store.frames_mut(self.line_start..index) {
            *axis.main_origin_mut(frame) -= shift;
        }
        self.available -= item_main + spacing;

        let previous_end = store
            .last()
            .map(|attribute| axis.main_end(&attribute.frame))
            .unwrap_or(self.viewport_main / 2.0);
        previous_end + spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::IndexPath;
    use crate::primitives::Rect;
    use crate::store::ItemAttribute;

    fn push(store: &mut AttributeStore, item: usize, x: f32, width: f32) -> usize {
        store.push(ItemAttribute::new(IndexPath::new(0, item), Rect::new(x, 0.0, width, 10.0)))
    }

    #[test]
    fn test_single_item_centered() {
        let mut pass = CenteringPass::new(Axis::X, 300.0);
        pass.begin_section(0.0);
        assert_eq!(pass.start_line(0, 100.0), 100.0);
        assert_eq!(pass.available, 200.0);
    }

    #[test]
    fn test_join_recenters_pair() {
        let mut store = AttributeStore::new();
        let mut pass = CenteringPass::new(Axis::X, 300.0);
        pass.begin_section(0.0);

        let x0 = pass.start_line(0, 100.0);
        push(&mut store, 0, x0, 100.0);

        assert!(pass.fits(100.0, 0.0));
        let x1 = pass.join(&mut store, 1, 100.0, 0.0);
        push(&mut store, 1, x1, 100.0);

        assert_eq!(store.attributes()[0].frame.x, 50.0);
        assert_eq!(store.attributes()[1].frame.x, 150.0);
    }

    #[test]
    fn test_join_with_spacing_keeps_margins_equal() {
        let mut store = AttributeStore::new();
        let mut pass = CenteringPass::new(Axis::X, 400.0);
        pass.begin_section(0.0);

        let x = pass.start_line(0, 60.0);
        push(&mut store, 0, x, 60.0);
        for item in 1..4 {
            assert!(pass.fits(60.0, 10.0));
            let x = pass.join(&mut store, item, 60.0, 10.0);
            push(&mut store, item, x, 60.0);
        }

        let first = store.attributes()[0].frame;
        let last = store.attributes()[3].frame;
        let leading = first.x;
        let trailing = 400.0 - last.right();
        assert!((leading - trailing).abs() < 1e-4, "{leading} vs {trailing}");
        assert_eq!(pass.available, 400.0 - 4.0 * 60.0 - 3.0 * 10.0);
    }

    #[test]
    fn test_join_leaves_previous_lines_alone() {
        let mut store = AttributeStore::new();
        let mut pass = CenteringPass::new(Axis::X, 200.0);
        pass.begin_section(0.0);

        let x = pass.start_line(0, 150.0);
        push(&mut store, 0, x, 150.0);
        assert!(!pass.fits(100.0, 0.0));

        let x = pass.start_line(1, 100.0);
        push(&mut store, 1, x, 100.0);
        let x = pass.join(&mut store, 2, 100.0, 0.0);
        push(&mut store, 2, x, 100.0);

        assert_eq!(store.attributes()[0].frame.x, 25.0);
        assert_eq!(store.attributes()[1].frame.x, 0.0);
        assert_eq!(store.attributes()[2].frame.x, 100.0);
        assert_eq!(pass.line_start, 1);
    }

    #[test]
    fn test_budget_excludes_insets() {
        let mut pass = CenteringPass::new(Axis::Y, 100.0);
        pass.begin_section(20.0);
        pass.start_line(0, 50.0);
        assert!(pass.fits(30.0, 0.0));
        assert!(!pass.fits(30.0, 1.0));
    }
}
