use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;

use super::{FrameSpec, Node, NodeTree};
use crate::geometry::Point;

/// Stable identifier assigned by a [`Scene`] in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Leaf,
    Frame,
}

/// Host-side state of a scene element.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub kind: NodeKind,
    /// Leaf name, or the label for frames.
    pub name: String,
    /// Offset from the parent frame's location, or the absolute location
    /// when `parent` is `None`.
    pub location: Point,
    pub width: f64,
    pub height: f64,
    pub parent: Option<NodeId>,
    pub shrink: bool,
    /// Number of `set_location` calls seen since creation.
    pub location_writes: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("{0} does not belong to this scene")]
    UnknownNode(NodeId),
    #[error("{0} is not a frame")]
    NotAFrame(NodeId),
    #[error("{0} cannot be placed inside its own frame chain")]
    Cycle(NodeId),
}

#[derive(Debug)]
struct NodeState {
    data: NodeData,
    frame: Option<SceneNode>,
}

/// Shared handle to a scene element.
///
/// Cloning the handle does not copy the element; every clone observes the
/// same location and parent. Nodes inside a frame move with it.
#[derive(Debug, Clone)]
pub struct SceneNode {
    id: NodeId,
    state: Rc<RefCell<NodeState>>,
}

impl SceneNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.state.borrow().data.kind
    }

    pub fn name(&self) -> String {
        self.state.borrow().data.name.clone()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.state.borrow().data.parent
    }

    pub fn frame(&self) -> Option<SceneNode> {
        self.state.borrow().frame.clone()
    }

    pub fn shrink(&self) -> bool {
        self.state.borrow().data.shrink
    }

    pub fn location_writes(&self) -> usize {
        self.state.borrow().data.location_writes
    }

    /// Location relative to the parent frame; absolute for top-level nodes.
    pub fn local_location(&self) -> Point {
        self.state.borrow().data.location
    }

    /// Copy of the current host-side state.
    pub fn data(&self) -> NodeData {
        self.state.borrow().data.clone()
    }

    fn same_as(&self, other: &SceneNode) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    fn frame_origin(&self) -> Point {
        self.frame()
            .map(|frame| frame.location())
            .unwrap_or(Point::ORIGIN)
    }
}

impl Node for SceneNode {
    fn location(&self) -> Point {
        self.frame_origin() + self.local_location()
    }

    fn set_location(&mut self, location: Point) {
        let origin = self.frame_origin();
        let mut state = self.state.borrow_mut();
        state.data.location = location - origin;
        state.data.location_writes += 1;
    }

    fn width(&self) -> f64 {
        self.state.borrow().data.width
    }

    fn height(&self) -> f64 {
        self.state.borrow().data.height
    }
}

/// In-memory node tree for tests, benchmarks and headless layout runs.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_leaf(
        &mut self,
        name: impl Into<String>,
        location: Point,
        width: f64,
        height: f64,
    ) -> SceneNode {
        self.insert(NodeData {
            kind: NodeKind::Leaf,
            name: name.into(),
            location,
            width,
            height,
            parent: None,
            shrink: false,
            location_writes: 0,
        })
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Direct children of `parent`, in creation order.
    pub fn children_of(&self, parent: NodeId) -> Vec<SceneNode> {
        self.nodes
            .iter()
            .filter(|node| node.parent() == Some(parent))
            .cloned()
            .collect()
    }

    pub fn frames(&self) -> Vec<SceneNode> {
        self.nodes
            .iter()
            .filter(|node| node.kind() == NodeKind::Frame)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn insert(&mut self, data: NodeData) -> SceneNode {
        let node = SceneNode {
            id: NodeId(self.nodes.len()),
            state: Rc::new(RefCell::new(NodeState { data, frame: None })),
        };
        self.nodes.push(node.clone());
        node
    }

    fn owns(&self, node: &SceneNode) -> bool {
        self.node(node.id())
            .map(|known| known.same_as(node))
            .unwrap_or(false)
    }
}

impl NodeTree for Scene {
    type Node = SceneNode;
    type Error = SceneError;

    fn new_frame(&mut self, spec: &FrameSpec) -> Result<SceneNode, SceneError> {
        Ok(self.insert(NodeData {
            kind: NodeKind::Frame,
            name: spec.label.clone(),
            location: spec.location,
            width: spec.width,
            height: spec.height,
            parent: None,
            shrink: spec.shrink,
            location_writes: 0,
        }))
    }

    /// Keeps `node` where it is on screen; its stored location becomes an
    /// offset from `frame`.
    fn reparent(&mut self, node: &mut SceneNode, frame: &SceneNode) -> Result<(), SceneError> {
        if !self.owns(frame) {
            return Err(SceneError::UnknownNode(frame.id()));
        }
        if frame.kind() != NodeKind::Frame {
            return Err(SceneError::NotAFrame(frame.id()));
        }
        if !self.owns(node) {
            return Err(SceneError::UnknownNode(node.id()));
        }
        let mut ancestor = Some(frame.clone());
        while let Some(current) = ancestor {
            if current.same_as(node) {
                return Err(SceneError::Cycle(node.id()));
            }
            ancestor = current.frame();
        }

        let world = node.location();
        let offset = world - frame.location();
        let mut state = node.state.borrow_mut();
        state.data.location = offset;
        state.data.parent = Some(frame.id());
        state.frame = Some(frame.clone());
        Ok(())
    }
}
