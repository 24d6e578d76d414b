//! Host-facing inputs: item counts and per-section metrics.
//!
//! The host owns the data. The engine only asks two questions of it: how
//! many items each section holds ([`SectionSource`]) and how big things are
//! ([`MetricsResolver`]). Every resolver method is optional; returning
//! `None` means "use the engine-wide default".

use serde::{Deserialize, Serialize};

use crate::config::FlowDefaults;
use crate::primitives::{EdgeInsets, Size};

/// Identity of one item: its section and its position within the section.
///
/// Ordering is (section, item), which is also the order attributes are
/// produced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    #[inline]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// Supplies the section and item counts for a layout pass.
pub trait SectionSource {
    fn number_of_sections(&self) -> usize;

    fn number_of_items(&self, section: usize) -> usize;
}

/// A slice of item counts, one entry per section.
impl SectionSource for [usize] {
    fn number_of_sections(&self) -> usize {
        self.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.get(section).copied().unwrap_or(0)
    }
}

impl<const N: usize> SectionSource for [usize; N] {
    fn number_of_sections(&self) -> usize {
        N
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.as_slice().number_of_items(section)
    }
}

impl SectionSource for Vec<usize> {
    fn number_of_sections(&self) -> usize {
        self.as_slice().number_of_sections()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.as_slice().number_of_items(section)
    }
}

/// Per-section and per-item sizing callbacks.
///
/// Called synchronously during a pass and never while the engine is being
/// queried. A panic raised here propagates out of the recompute call.
pub trait MetricsResolver {
    /// Insets for `section`. Default: [`FlowDefaults::section_inset`].
    fn insets(&self, _section: usize) -> Option<EdgeInsets> {
        None
    }

    /// Spacing between items on one line. Default:
    /// [`FlowDefaults::minimum_interitem_spacing`].
    fn inter_item_spacing(&self, _section: usize) -> Option<f32> {
        None
    }

    /// Spacing between lines. Default: [`FlowDefaults::minimum_line_spacing`].
    fn line_spacing(&self, _section: usize) -> Option<f32> {
        None
    }

    /// Intrinsic size of one item. Default: zero size.
    fn item_size(&self, _path: IndexPath) -> Option<Size> {
        None
    }
}

/// Resolver with nothing overridden.
impl MetricsResolver for () {}

/// Spacing and insets in effect for one section.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionMetrics {
    pub insets: EdgeInsets,
    pub inter_item_spacing: f32,
    pub line_spacing: f32,
}

impl SectionMetrics {
    /// Ask `resolver` for each value, falling back to `defaults`.
    pub fn resolve<R>(section: usize, resolver: &R, defaults: &FlowDefaults) -> Self
    where
        R: MetricsResolver + ?Sized,
    {
        Self {
            insets: resolver.insets(section).unwrap_or(defaults.section_inset),
            inter_item_spacing: resolver
                .inter_item_spacing(section)
                .unwrap_or(defaults.minimum_interitem_spacing),
            line_spacing: resolver
                .line_spacing(section)
                .unwrap_or(defaults.minimum_line_spacing),
        }
    }
}

/// Item size from `resolver`, zero when unset.
#[inline]
pub fn resolve_item_size<R>(resolver: &R, path: IndexPath) -> Size
where
    R: MetricsResolver + ?Sized,
{
    resolver.item_size(path).unwrap_or(Size::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OddSectionsOverride;

    impl MetricsResolver for OddSectionsOverride {
        fn insets(&self, section: usize) -> Option<EdgeInsets> {
            (section % 2 == 1).then(|| EdgeInsets::all(3.0))
        }

        fn line_spacing(&self, section: usize) -> Option<f32> {
            (section % 2 == 1).then_some(7.0)
        }

        fn item_size(&self, path: IndexPath) -> Option<Size> {
            (path.item == 0).then_some(Size::new(20.0, 10.0))
        }
    }

    #[test]
    fn test_unit_resolver_uses_defaults() {
        let defaults = FlowDefaults::default().with_section_inset(EdgeInsets::all(1.0));
        let metrics = SectionMetrics::resolve(0, &(), &defaults);

        assert_eq!(metrics.insets, EdgeInsets::all(1.0));
        assert_eq!(metrics.inter_item_spacing, 10.0);
        assert_eq!(metrics.line_spacing, 10.0);
        assert_eq!(resolve_item_size(&(), IndexPath::new(0, 0)), Size::ZERO);
    }

    #[test]
    fn test_partial_override() {
        let defaults = FlowDefaults::default();

        let even = SectionMetrics::resolve(0, &OddSectionsOverride, &defaults);
        assert_eq!(even.insets, EdgeInsets::ZERO);
        assert_eq!(even.line_spacing, 10.0);

        let odd = SectionMetrics::resolve(1, &OddSectionsOverride, &defaults);
        assert_eq!(odd.insets, EdgeInsets::all(3.0));
        assert_eq!(odd.inter_item_spacing, 10.0);
        assert_eq!(odd.line_spacing, 7.0);

        assert_eq!(
            resolve_item_size(&OddSectionsOverride, IndexPath::new(4, 0)),
            Size::new(20.0, 10.0)
        );
        assert_eq!(resolve_item_size(&OddSectionsOverride, IndexPath::new(4, 1)), Size::ZERO);
    }

    #[test]
    fn test_slice_source() {
        let counts: Vec<usize> = vec![3, 0, 5];
        assert_eq!(counts.number_of_sections(), 3);
        assert_eq!(counts.number_of_items(1), 0);
        assert_eq!(counts.number_of_items(2), 5);
        assert_eq!(counts.number_of_items(9), 0);

        let fixed = [2usize, 4];
        assert_eq!(fixed.number_of_sections(), 2);
        assert_eq!(fixed.number_of_items(1), 4);
    }

    #[test]
    fn test_index_path_order() {
        let mut paths = vec![IndexPath::new(1, 0), IndexPath::new(0, 2), IndexPath::new(0, 1)];
        paths.sort();
        assert_eq!(paths, vec![IndexPath::new(0, 1), IndexPath::new(0, 2), IndexPath::new(1, 0)]);
    }
}
