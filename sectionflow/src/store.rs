//! Attribute storage and rectangle queries.
//!
//! Attributes live in one flat vector in (section, item) order. During a
//! pass the vector doubles as the arena the centering pass rewrites by
//! index; once the pass finishes it is only read.

use serde::{Deserialize, Serialize};

use crate::metrics::IndexPath;
use crate::primitives::{Rect, Size};

/// Computed placement of one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemAttribute {
    pub path: IndexPath,
    pub frame: Rect,
}

impl ItemAttribute {
    #[inline]
    pub const fn new(path: IndexPath, frame: Rect) -> Self {
        Self { path, frame }
    }
}

/// Output of a layout pass: ordered attributes plus the scrollable extent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeStore {
    attributes: Vec<ItemAttribute>,
    /// Index of each section's first attribute.
    section_starts: Vec<usize>,
    content_extent: Size,
}

impl AttributeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every attribute. The content extent is left as it was.
    pub fn clear(&mut self) {
        self.attributes.clear();
        self.section_starts.clear();
    }

    /// Mark the start of the next section.
    pub(crate) fn begin_section(&mut self) {
        self.section_starts.push(self.attributes.len());
    }

    /// Append an attribute and return its index.
    pub(crate) fn push(&mut self, attribute: ItemAttribute) -> usize {
        self.attributes.push(attribute);
        self.attributes.len() - 1
    }

    /// Attributes in `range`, for rewriting while their line is still open.
    pub(crate) fn frames_mut(
        &mut self,
        range: std::ops::Range<usize>,
    ) -> impl Iterator<Item = &mut Rect> {
        self.attributes[range].iter_mut().map(|attribute| &mut attribute.frame)
    }

    pub(crate) fn set_content_extent(&mut self, extent: Size) {
        self.content_extent = extent;
    }

    /// Scrollable content size reported by the last pass.
    pub fn content_extent(&self) -> Size {
        self.content_extent
    }

    /// All attributes in (section, item) order.
    pub fn attributes(&self) -> &[ItemAttribute] {
        &self.attributes
    }

    pub fn last(&self) -> Option<&ItemAttribute> {
        self.attributes.last()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Look up the attribute for one item.
    pub fn get(&self, path: IndexPath) -> Option<&ItemAttribute> {
        let start = *self.section_starts.get(path.section)?;
        let end = self
            .section_starts
            .get(path.section + 1)
            .copied()
            .unwrap_or(self.attributes.len());
        let index = start.checked_add(path.item).filter(|&i| i < end)?;
        self.attributes.get(index)
    }

    /// Every attribute whose frame intersects `rect`.
    ///
    /// Linear scan; results keep storage order but callers must not rely on
    /// any ordering. Edge-touching frames are excluded (see
    /// [`Rect::intersects`]).
    pub fn intersecting(&self, rect: Rect) -> impl Iterator<Item = &ItemAttribute> + '_ {
        self.attributes
            .iter()
            .filter(move |attribute| attribute.frame.intersects(&rect))
    }
}

// =========================================================================
// Tests
// =========================================================================
