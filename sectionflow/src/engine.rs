//! The layout pass and the stateful engine hosts drive it through.
//!
//! # Algorithm
//!
//! For every section:
//! 1. Resolve its metrics (resolver override or engine default).
//! 2. Force a line break and step past the leading wrap-axis inset.
//! 3. For every item, resolve its size and either append it to the open
//!    line or close the line and start a new one. Directional modes test
//!    the cursor against the trailing inset; centered modes spend a
//!    per-line budget and re-center the line as items join.
//! 4. Add the trailing wrap-axis inset.
//!
//! The content extent grows along the wrap axis only; the other axis is
//! pinned to the viewport.

use crate::centering::CenteringPass;
use crate::config::FlowDefaults;
use crate::cursor::FlowCursor;
use crate::metrics::{IndexPath, MetricsResolver, SectionMetrics, SectionSource, resolve_item_size};
use crate::mode::{Axis, FitStrategy, LayoutMode};
use crate::primitives::{Rect, Size};
use crate::store::{AttributeStore, ItemAttribute};

/// The visible region the host scrolls content through.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub size: Size,
    /// Portion of the viewport's top edge covered by host chrome (bars,
    /// safe areas). Subtracted from the height the horizontal modes use.
    pub adjusted_inset_top: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            adjusted_inset_top: 0.0,
        }
    }

    pub fn with_adjusted_inset_top(mut self, inset: f32) -> Self {
        self.adjusted_inset_top = inset;
        self
    }

    /// Height left after the adjusted top inset.
    pub fn adjusted_height(&self) -> f32 {
        self.size.height - self.adjusted_inset_top
    }

    /// Extent available along `axis`.
    pub fn extent_along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.size.width,
            Axis::Y => self.adjusted_height(),
        }
    }
}

/// Run one complete layout pass.
///
/// Deterministic: the same inputs always produce the same store.
pub fn compute_layout<S, R>(
    defaults: &FlowDefaults,
    viewport: &Viewport,
    sections: &S,
    resolver: &R,
) -> AttributeStore
where
    S: SectionSource + ?Sized,
    R: MetricsResolver + ?Sized,
{
    let mut store = AttributeStore::new();
    layout_into(&mut store, defaults, viewport, sections, resolver);
    store
}

/// Fill `store` (assumed empty) with a fresh pass.
fn layout_into<S, R>(
    store: &mut AttributeStore,
    defaults: &FlowDefaults,
    viewport: &Viewport,
    sections: &S,
    resolver: &R,
) where
    S: SectionSource + ?Sized,
    R: MetricsResolver + ?Sized,
{
    let mode = defaults.mode;
    let axis = mode.primary_axis();
    let viewport_main = viewport.extent_along(axis);

    let mut cursor = FlowCursor::new(axis);
    let mut centering = match mode.fit_strategy() {
        FitStrategy::Centered => Some(CenteringPass::new(axis, viewport_main)),
        FitStrategy::Directional => None,
    };

    let section_count = sections.number_of_sections();
    for section in 0..section_count {
        let metrics = SectionMetrics::resolve(section, resolver, defaults);
        let insets = axis.insets(metrics.insets);
        let spacing = metrics.inter_item_spacing;

        store.begin_section();
        cursor.begin_section(&insets);
        if let Some(centering) = centering.as_mut() {
            centering.begin_section(insets.main_total());
        }

        for item in 0..sections.number_of_items(section) {
            let path = IndexPath::new(section, item);
            let size = resolve_item_size(resolver, path);
            let item_main = axis.main(size);
            let index = store.len();

            match centering.as_mut() {
                None => {
                    if cursor.fits(item_main, spacing, insets.main_trailing, viewport_main) {
                        cursor.advance_spacing(spacing);
                    } else {
                        cursor.break_line(insets.main_leading, metrics.line_spacing);
                    }
                }
                Some(centering) => {
                    let main = if cursor.line_len() == 0 {
                        centering.start_line(index, item_main)
                    } else if centering.fits(item_main, spacing) {
                        centering.join(store, index, item_main, spacing)
                    } else {
                        cursor.break_line(insets.main_leading, metrics.line_spacing);
                        centering.start_line(index, item_main)
                    };
                    cursor.set_main(main);
                }
            }

            let origin = cursor.place(size);
            store.push(ItemAttribute::new(path, Rect::from_origin_size(origin, size)));
        }

        cursor.end_section(&insets);
    }

    let extent = axis.size(viewport_main, cursor.wrap_extent());
    store.set_content_extent(extent);

    tracing::debug!(
        "layout pass: mode={} sections={} items={} extent={}x{}",
        mode,
        section_count,
        store.len(),
        extent.width,
        extent.height
    );
}

/// Stateful placement engine owned by a scrolling host.
///
/// The host attaches a viewport, picks a mode, calls [`recompute`] when its
/// data or geometry changes, then queries the stored attributes. Nothing
/// recomputes implicitly.
///
/// [`recompute`]: LayoutEngine::recompute
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    defaults: FlowDefaults,
    viewport: Option<Viewport>,
    store: AttributeStore,
}

impl LayoutEngine {
    /// Create an engine with the given defaults and no viewport.
    pub fn new(defaults: FlowDefaults) -> Self {
        Self {
            defaults,
            viewport: None,
            store: AttributeStore::new(),
        }
    }

    pub fn defaults(&self) -> &FlowDefaults {
        &self.defaults
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.defaults.mode
    }

    /// Select the flow strategy. Takes effect on the next recompute.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.defaults.mode = mode;
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Attach (or replace) the viewport. Does not recompute.
    pub fn attach_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    pub fn detach_viewport(&mut self) -> Option<Viewport> {
        self.viewport.take()
    }

    /// Discard the previous attributes and run a new pass.
    ///
    /// Without an attached viewport the attribute list is left empty and
    /// the previous content extent is kept.
    pub fn recompute<S, R>(&mut self, sections: &S, resolver: &R)
    where
        S: SectionSource + ?Sized,
        R: MetricsResolver + ?Sized,
    {
        self.store.clear();
        let Some(viewport) = self.viewport else {
            tracing::debug!("layout pass skipped: no viewport attached");
            return;
        };
        layout_into(&mut self.store, &self.defaults, &viewport, sections, resolver);
    }

    /// Scrollable content size from the last pass.
    pub fn content_extent(&self) -> Size {
        self.store.content_extent()
    }

    /// All attributes in (section, item) order.
    pub fn attributes(&self) -> &[ItemAttribute] {
        self.store.attributes()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The attribute computed for one item, if it exists.
    pub fn attribute_for(&self, path: IndexPath) -> Option<&ItemAttribute> {
        self.store.get(path)
    }

    /// Every attribute whose frame intersects `rect`, in no particular order.
    pub fn attributes_intersecting(&self, rect: Rect) -> Vec<ItemAttribute> {
        self.store.intersecting(rect).copied().collect()
    }

    /// Always `false`: bounds changes never trigger a recompute. The host
    /// decides when geometry is stale and calls [`recompute`] itself.
    ///
    /// [`recompute`]: LayoutEngine::recompute
    pub const fn should_invalidate(&self, _new_bounds: Rect) -> bool {
        false
    }
}

// =========================================================================
// Tests
// =========================================================================
