use crate::logging::{LogEvent, LogFields, LogLevel};
use serde::Serialize;
use serde_json::json;

/// Counters accumulated by an [`Arranger`](crate::Arranger).
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    rows: u64,
    columns: u64,
    frames: u64,
    leaves_reparented: u64,
    centerings: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_row(&mut self) {
        self.rows = self.rows.saturating_add(1);
    }

    pub fn record_column(&mut self) {
        self.columns = self.columns.saturating_add(1);
    }

    pub fn record_frame(&mut self, leaves: usize) {
        self.frames = self.frames.saturating_add(1);
        self.leaves_reparented = self.leaves_reparented.saturating_add(leaves as u64);
    }

    pub fn record_centering(&mut self) {
        self.centerings = self.centerings.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            rows: self.rows,
            columns: self.columns,
            frames: self.frames,
            leaves_reparented: self.leaves_reparented,
            centerings: self.centerings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MetricSnapshot {
    pub rows: u64,
    pub columns: u64,
    pub frames: u64,
    pub leaves_reparented: u64,
    pub centerings: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("rows".to_string(), json!(self.rows));
        map.insert("columns".to_string(), json!(self.columns));
        map.insert("frames".to_string(), json!(self.frames));
        map.insert(
            "leaves_reparented".to_string(),
            json!(self.leaves_reparented),
        );
        map.insert("centerings".to_string(), json!(self.centerings));
        map
    }
}
