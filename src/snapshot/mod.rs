//! Serializable record of a laid-out element tree.
//!
//! Snapshots capture geometry only, so two runs over the same input can be
//! compared by fingerprint without holding on to host handles.

use blake3::Hash;
use serde::{Deserialize, Serialize};

use crate::block::{Element, bounds};
use crate::error::Result;
use crate::geometry::Bounds;
use crate::host::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotKind {
    Leaf,
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub kind: SnapshotKind,
    pub bounds: Bounds,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<SnapshotNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub root: SnapshotNode,
}

impl LayoutSnapshot {
    pub fn capture<N: Node>(element: &Element<N>) -> Self {
        Self {
            root: capture_node(element),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// blake3 digest of the compact JSON form.
    pub fn fingerprint(&self) -> Result<Hash> {
        let bytes = serde_json::to_vec(self)?;
        Ok(blake3::hash(&bytes))
    }

    /// Number of leaves recorded in the snapshot.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![&self.root];
        while let Some(node) = pending.pop() {
            match node.kind {
                SnapshotKind::Leaf => count += 1,
                SnapshotKind::Group => pending.extend(node.children.iter()),
            }
        }
        count
    }
}

fn capture_node<N: Node>(element: &Element<N>) -> SnapshotNode {
    match element {
        Element::Leaf(_) => SnapshotNode {
            kind: SnapshotKind::Leaf,
            bounds: bounds(element),
            children: Vec::new(),
        },
        Element::Group(group) => SnapshotNode {
            kind: SnapshotKind::Group,
            bounds: group.bounds(),
            children: group.children().iter().map(capture_node).collect(),
        },
    }
}
