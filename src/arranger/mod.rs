//! Configured, observable front end over the block operations.
//!
//! The free functions in [`crate::block`] stay pure. `Arranger` applies the
//! configured gutters and padding, reports each step to the logger and keeps
//! counters when metrics are enabled.
//!
//! ```
//! use block_layout::logging::JsonLinesSink;
//! use block_layout::{Arranger, Element, LayoutConfig, Logger, Point, Scene};
//!
//! let logger = Logger::new(JsonLinesSink::new(std::io::stderr()));
//! let arranger = Arranger::new(LayoutConfig::default().with_logger(logger))?;
//! let mut scene = Scene::new();
//! let leaf = scene.add_leaf("uv", Point::ORIGIN, 140.0, 100.0);
//! let mut group = arranger.row(vec![Element::Leaf(leaf)]);
//! arranger.frame(&mut group, &mut scene, "Inputs").unwrap();
//! assert_eq!(group.width(), 200.0);
//! # Ok::<(), block_layout::LayoutError>(())
//! ```

use std::sync::{Arc, Mutex};

use crate::block::{
    self, Element, FRAME_PADDING, Group, center_at_origin, col_align_right, framify_with_padding,
    row_align_center,
};
use crate::error::{LayoutError, Result};
use crate::geometry::Bounds;
use crate::host::{Node, NodeTree};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::{LayoutMetrics, MetricSnapshot};

/// Tunables for an [`Arranger`].
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Horizontal space between neighbours in a row.
    pub row_gutter: f64,
    /// Vertical space between neighbours in a column.
    pub column_gutter: f64,
    /// Space between a frame's edge and its contents.
    pub frame_padding: f64,
    /// Optional structured logger.
    pub logger: Option<Logger>,
    /// Target field on emitted log events.
    pub log_target: String,
    /// Counters shared with whoever holds the handle.
    pub metrics: Option<Arc<Mutex<LayoutMetrics>>>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_gutter: 0.0,
            column_gutter: 0.0,
            frame_padding: FRAME_PADDING,
            logger: None,
            log_target: "block_layout::arranger".to_string(),
            metrics: None,
        }
    }
}

impl LayoutConfig {
    pub fn with_gutters(mut self, row: f64, column: f64) -> Self {
        self.row_gutter = row;
        self.column_gutter = column;
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(LayoutMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<LayoutMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }

    /// Reject spacing values the alignment math cannot use.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("row_gutter", self.row_gutter),
            ("column_gutter", self.column_gutter),
            ("frame_padding", self.frame_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Arranger {
    config: LayoutConfig,
}

impl Arranger {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Centre-aligned row using the configured row gutter.
    pub fn row<N: Node>(&self, elements: impl IntoIterator<Item = Element<N>>) -> Group<N> {
        let row = row_align_center(elements, self.config.row_gutter);
        self.with_metrics(LayoutMetrics::record_row);
        self.emit("row_aligned", row.len(), row.bounds(), None);
        row
    }

    /// Right-aligned column using the configured column gutter.
    pub fn column<N: Node>(&self, elements: impl IntoIterator<Item = Element<N>>) -> Group<N> {
        let column = col_align_right(elements, self.config.column_gutter);
        self.with_metrics(LayoutMetrics::record_column);
        self.emit("column_aligned", column.len(), column.bounds(), None);
        column
    }

    /// Wrap `group` in a labeled frame with the configured padding.
    pub fn frame<T: NodeTree>(
        &self,
        group: &mut Group<T::Node>,
        tree: &mut T,
        label: &str,
    ) -> std::result::Result<(), T::Error> {
        let leaves = group.leaves().len();
        framify_with_padding(group, tree, label, self.config.frame_padding)?;
        self.with_metrics(|metrics| metrics.record_frame(leaves));
        self.emit("framed", leaves, group.bounds(), Some(label));
        Ok(())
    }

    pub fn center<N: Node>(&self, element: &mut Element<N>) {
        center_at_origin(element);
        self.with_metrics(LayoutMetrics::record_centering);
        let count = element.leaves().len();
        self.emit("centered", count, block::bounds(element), None);
    }

    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        let metrics = self.config.metrics.as_ref()?;
        metrics.lock().ok().map(|guard| guard.snapshot())
    }

    /// Log the current counters, if both a logger and metrics are configured.
    pub fn emit_metrics(&self) {
        let Some(logger) = self.config.logger.as_ref() else {
            return;
        };
        if let Some(snapshot) = self.metrics_snapshot() {
            let _ = logger.log_event(snapshot.to_log_event(&self.config.log_target));
        }
    }

    fn with_metrics(&self, record: impl FnOnce(&mut LayoutMetrics)) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                record(&mut *guard);
            }
        }
    }

    fn emit(&self, message: &str, count: usize, bounds: Bounds, label: Option<&str>) {
        let Some(logger) = self.config.logger.as_ref() else {
            return;
        };
        let mut fields = vec![
            json_kv("elements", count),
            json_kv("width", bounds.width()),
            json_kv("height", bounds.height()),
            json_kv("left", bounds.top_left.x),
            json_kv("top", bounds.top_left.y),
        ];
        if let Some(label) = label {
            fields.push(json_kv("label", label));
        }
        let event = event_with_fields(LogLevel::Debug, &self.config.log_target, message, fields);
        let _ = logger.log_event(event);
    }
}
