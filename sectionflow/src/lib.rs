//! sectionflow: placement engine for sectioned, scrollable flow layouts.
//!
//! Given a viewport, a list of sections with item counts, and a resolver
//! for per-item sizes and per-section spacing, the engine computes a frame
//! for every item plus the content extent the host has to scroll through.
//!
//! # Modes
//!
//! - `Vertical` / `Horizontal`: wrap rows (columns) at the viewport edge.
//! - `CenteredVertical` / `CenteredHorizontal`: same wrapping, with every
//!   row (column) kept centered as it fills.
//!
//! # Usage
//!
//! ```
//! use sectionflow::{FlowDefaults, IndexPath, LayoutEngine, LayoutMode, MetricsResolver, Size, Viewport};
//!
//! struct Tiles;
//!
//! impl MetricsResolver for Tiles {
//!     fn item_size(&self, _path: IndexPath) -> Option<Size> {
//!         Some(Size::new(100.0, 50.0))
//!     }
//! }
//!
//! let mut engine = LayoutEngine::new(FlowDefaults::default().with_mode(LayoutMode::CenteredVertical));
//! engine.attach_viewport(Viewport::new(320.0, 480.0));
//! engine.recompute(&[5usize, 3], &Tiles);
//!
//! assert_eq!(engine.len(), 8);
//! assert_eq!(engine.content_extent().width, 320.0);
//! ```
//!
//! The host decides when to recompute; [`LayoutEngine::should_invalidate`]
//! never asks for it.

// Geometry
pub mod primitives;

// Inputs
pub mod config;
pub mod metrics;
pub mod mode;

// Layout pass
pub mod centering;
pub mod cursor;
pub mod engine;
pub mod store;

mod error;

pub use centering::CenteringPass;
pub use config::FlowDefaults;
pub use cursor::FlowCursor;
pub use engine::{LayoutEngine, Viewport, compute_layout};
pub use error::LayoutError;
pub use metrics::{IndexPath, MetricsResolver, SectionMetrics, SectionSource};
pub use mode::{Axis, AxisInsets, FitStrategy, LayoutMode};
pub use primitives::{EdgeInsets, Point, Rect, Size};
pub use store::{AttributeStore, ItemAttribute};
