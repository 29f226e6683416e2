//! Host capability surface.
//!
//! The layout core never creates leaves. It reads and writes their location
//! through [`Node`] and asks a [`NodeTree`] for frames when wrapping a group.
//! [`Scene`] is a bundled in-memory host.

mod scene;

pub use scene::{NodeData, NodeId, NodeKind, Scene, SceneError, SceneNode};

use crate::geometry::{Bounds, Point};

/// A host visual element with an intrinsic location and fixed size.
///
/// `location` is the element's top-left corner; the bottom-right corner is
/// `location + (width, -height)`.
pub trait Node {
    fn location(&self) -> Point;
    fn set_location(&mut self, location: Point);
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.location(), self.width(), self.height())
    }
}

/// Everything the host needs to build a frame element.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSpec {
    pub location: Point,
    pub label: String,
    pub width: f64,
    pub height: f64,
    /// Host auto-shrink-to-fit. Frames built by the layout core keep it off
    /// so the explicit size stays authoritative.
    pub shrink: bool,
}

impl FrameSpec {
    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.location, self.width, self.height)
    }
}

/// Container that owns host elements and can create frames around them.
pub trait NodeTree {
    type Node: Node;
    type Error: std::error::Error;

    /// Create a frame element inside this tree.
    fn new_frame(&mut self, spec: &FrameSpec) -> Result<Self::Node, Self::Error>;

    /// Make `frame` the parent of `node`.
    fn reparent(&mut self, node: &mut Self::Node, frame: &Self::Node) -> Result<(), Self::Error>;

    /// Notify the host that `node` changed parents.
    ///
    /// Hosts that resize frames on location writes get one by default: the
    /// node's current location is written back unchanged.
    fn refresh_location(&mut self, node: &mut Self::Node) -> Result<(), Self::Error> {
        let location = node.location();
        node.set_location(location);
        Ok(())
    }
}
