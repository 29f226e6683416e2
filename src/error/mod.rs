//! Error module orchestrator.
//!
//! Geometry itself never fails; these cover configuration and snapshot output.

mod types;

pub use types::{LayoutError, Result};
