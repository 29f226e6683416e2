//! Block module orchestrator.
//!
//! A block is either a host node or a rectangular group of smaller blocks.
//! Groups can be lined up in rows and columns and wrapped in frames so a
//! generated node graph reads cleanly.

pub mod align;
mod core;
pub mod frame;

pub use align::{col_align_right, row_align_center};
pub use self::core::{
    Element, Group, bottom_right, bounds, center_at_origin, height, move_by, move_to,
    recompute_bounds, top_left, width,
};
pub use frame::{FRAME_PADDING, framify, framify_with_padding};
