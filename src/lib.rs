//! Bounding-box layout for generated node graphs.
//!
//! Host nodes and groups of them share one geometric contract (top-left,
//! bottom-right, width, height, move). Groups cache their bounding box and
//! can be built as centre-aligned rows or right-aligned columns, wrapped in
//! labeled frames, and centred on the origin.
//!
//! ```
//! use block_layout::{Element, Point, Scene, center_at_origin, col_align_right, row_align_center};
//!
//! let mut scene = Scene::new();
//! let a = scene.add_leaf("a", Point::ORIGIN, 40.0, 20.0);
//! let b = scene.add_leaf("b", Point::ORIGIN, 60.0, 30.0);
//! let c = scene.add_leaf("c", Point::ORIGIN, 20.0, 50.0);
//!
//! let column = col_align_right(vec![Element::Leaf(a), Element::Leaf(b)], 10.0);
//! let mut root = Element::Group(row_align_center(
//!     vec![Element::from(column), Element::Leaf(c)],
//!     10.0,
//! ));
//! center_at_origin(&mut root);
//! assert_eq!(block_layout::width(&root), 90.0);
//! ```

pub mod arranger;
pub mod block;
pub mod error;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod metrics;
pub mod snapshot;

pub use arranger::{Arranger, LayoutConfig};
pub use block::{
    Element, FRAME_PADDING, Group, bottom_right, bounds, center_at_origin, col_align_right,
    framify, framify_with_padding, height, move_by, move_to, recompute_bounds, row_align_center,
    top_left, width,
};
pub use error::{LayoutError, Result};
pub use geometry::{Bounds, Point};
pub use host::{FrameSpec, Node, NodeId, NodeKind, NodeTree, Scene, SceneError, SceneNode};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use snapshot::{LayoutSnapshot, SnapshotKind, SnapshotNode};
