//! Wrapping a group in a labeled host frame.
//!
//! ```text
//!     .------Label------.
//!     | .--.  .-------. |
//!     | |A |  |   B   | |
//!     | '--'  '-------' |
//!     '-----------------'
//! ```

use super::core::{Element, Group};
use crate::geometry::Point;
use crate::host::{FrameSpec, NodeTree};

/// Space the host keeps between a frame's edge and its contents.
pub const FRAME_PADDING: f64 = 30.0;

/// Wrap `group` in a new frame labeled `label`, using [`FRAME_PADDING`].
pub fn framify<T: NodeTree>(
    group: &mut Group<T::Node>,
    tree: &mut T,
    label: &str,
) -> Result<(), T::Error> {
    framify_with_padding(group, tree, label, FRAME_PADDING)
}

/// Wrap `group` in a new frame, leaving the frame as its only child.
///
/// The contents are moved to `(padding, -padding)`, inset from a frame whose
/// top-left sits at the origin, and every leaf under `group` is reparented to
/// the frame. On return the group's box is the frame's box: `2 * padding`
/// larger than the group was in each dimension. Host errors abort the wrap
/// as-is; leaves reparented before the failure stay reparented.
pub fn framify_with_padding<T: NodeTree>(
    group: &mut Group<T::Node>,
    tree: &mut T,
    label: &str,
    padding: f64,
) -> Result<(), T::Error> {
    group.move_to(Point::new(padding, -padding));

    let spec = FrameSpec {
        location: Point::ORIGIN,
        label: label.to_string(),
        width: group.width() + 2.0 * padding,
        height: group.height() + 2.0 * padding,
        shrink: false,
    };
    let frame = tree.new_frame(&spec)?;

    let mut pending: Vec<&mut Element<T::Node>> = group.children.iter_mut().rev().collect();
    while let Some(element) = pending.pop() {
        match element {
            Element::Leaf(node) => {
                tree.reparent(node, &frame)?;
                tree.refresh_location(node)?;
            }
            Element::Group(inner) => pending.extend(inner.children.iter_mut().rev()),
        }
    }

    group.children = vec![Element::Leaf(frame)];
    group.bounds = spec.bounds();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::align::{col_align_right, row_align_center};
    use crate::block::core::{bounds, center_at_origin, move_by, recompute_bounds};
    use crate::geometry::Bounds;
    use crate::host::{Node, NodeKind, Scene, SceneError, SceneNode};

    fn leaf(scene: &mut Scene, name: &str, w: f64, h: f64) -> Element<SceneNode> {
        Element::Leaf(scene.add_leaf(name, Point::ORIGIN, w, h))
    }

    fn nested_group(scene: &mut Scene) -> Group<SceneNode> {
        let column = col_align_right(
            vec![leaf(scene, "b", 20.0, 10.0), leaf(scene, "c", 30.0, 15.0)],
            5.0,
        );
        row_align_center(vec![leaf(scene, "a", 40.0, 40.0), Element::from(column)], 10.0)
    }

    #[test]
    fn frame_becomes_sole_child() {
        let mut scene = Scene::new();
        let mut group = nested_group(&mut scene);

        framify(&mut group, &mut scene, "Material").unwrap();

        assert_eq!(group.len(), 1);
        let frame = group.children()[0].as_leaf().unwrap();
        assert_eq!(frame.kind(), NodeKind::Frame);
        assert_eq!(frame.name(), "Material");
        assert!(!frame.shrink());
        assert_eq!(frame.location(), Point::ORIGIN);
    }

    #[test]
    fn every_leaf_is_reparented() {
        let mut scene = Scene::new();
        let mut group = nested_group(&mut scene);
        let originals: Vec<SceneNode> = group.leaves().into_iter().cloned().collect();

        framify(&mut group, &mut scene, "Material").unwrap();

        let frame_id = group.children()[0].as_leaf().unwrap().id();
        assert_eq!(originals.len(), 3);
        for node in &originals {
            assert_eq!(node.parent(), Some(frame_id));
        }
        let adopted: Vec<String> = scene
            .children_of(frame_id)
            .iter()
            .map(|n| n.name())
            .collect();
        assert_eq!(adopted, vec!["b", "c", "a"]);
    }

    #[test]
    fn group_grows_by_padding_and_anchors_at_origin() {
        let mut scene = Scene::new();
        let mut group = nested_group(&mut scene);
        let (w, h) = (group.width(), group.height());

        framify(&mut group, &mut scene, "Material").unwrap();

        assert_eq!(group.width(), w + 2.0 * FRAME_PADDING);
        assert_eq!(group.height(), h + 2.0 * FRAME_PADDING);
        assert_eq!(group.top_left(), Point::ORIGIN);

        let element = Element::Group(group);
        assert_eq!(Some(bounds(&element)), recompute_bounds(&element));
    }

    #[test]
    fn leaves_are_shifted_to_padding_offset() {
        let mut scene = Scene::new();
        let mut group = row_align_center(vec![leaf(&mut scene, "a", 10.0, 10.0)], 0.0);
        let original = group.children()[0].as_leaf().unwrap().clone();

        framify_with_padding(&mut group, &mut scene, "Small", 12.0).unwrap();

        assert_eq!(original.location(), Point::new(12.0, -12.0));
        assert_eq!(original.local_location(), Point::new(12.0, -12.0));
        assert_eq!(
            group.bounds(),
            Bounds::new(Point::ORIGIN, Point::new(34.0, -34.0))
        );
    }

    #[test]
    fn framed_leaves_follow_the_frame() {
        let mut scene = Scene::new();
        let mut group = row_align_center(
            vec![leaf(&mut scene, "a", 40.0, 20.0), leaf(&mut scene, "b", 60.0, 30.0)],
            0.0,
        );
        let originals: Vec<SceneNode> = group.leaves().into_iter().cloned().collect();
        framify(&mut group, &mut scene, "Moving").unwrap();

        let mut element = Element::Group(group);
        move_by(&mut element, Point::new(500.0, -500.0));
        center_at_origin(&mut element);

        let frame_bounds = bounds(&element);
        assert_eq!(frame_bounds.center(), Point::ORIGIN);
        let content = originals
            .iter()
            .map(|node| node.bounds())
            .reduce(|acc, next| acc.union(&next))
            .unwrap();
        assert!(frame_bounds.contains(&content));
        assert_eq!(
            content.top_left,
            frame_bounds.top_left + Point::new(FRAME_PADDING, -FRAME_PADDING)
        );
        assert_eq!(content.width(), 100.0);
        assert_eq!(content.height(), 30.0);
    }

    #[test]
    fn wrapping_a_framed_group_nests_frames() {
        let mut scene = Scene::new();
        let mut inner = nested_group(&mut scene);
        let inner_leaves: Vec<SceneNode> = inner.leaves().into_iter().cloned().collect();
        framify(&mut inner, &mut scene, "Inner").unwrap();
        let inner_frame = inner.children()[0].as_leaf().unwrap().clone();
        let (w, h) = (inner.width(), inner.height());

        let mut outer = Group::with_children(vec![Element::from(inner)]);
        framify(&mut outer, &mut scene, "Outer").unwrap();
        let outer_frame = outer.children()[0].as_leaf().unwrap().clone();

        assert_eq!(inner_frame.parent(), Some(outer_frame.id()));
        for node in &inner_leaves {
            assert_eq!(node.parent(), Some(inner_frame.id()));
        }
        assert_eq!(outer.width(), w + 2.0 * FRAME_PADDING);
        assert_eq!(outer.height(), h + 2.0 * FRAME_PADDING);
        assert_eq!(scene.children_of(outer_frame.id()).len(), 1);

        let mut element = Element::Group(outer);
        center_at_origin(&mut element);

        let outer_bounds = outer_frame.bounds();
        let inner_bounds = inner_frame.bounds();
        assert_eq!(outer_bounds, bounds(&element));
        assert_eq!(
            inner_bounds.top_left,
            outer_bounds.top_left + Point::new(FRAME_PADDING, -FRAME_PADDING)
        );
        for node in &inner_leaves {
            assert!(inner_bounds.contains(&node.bounds()));
        }
    }

    #[test]
    fn framed_group_nests_inside_outer_layout() {
        let mut scene = Scene::new();
        let mut framed = nested_group(&mut scene);
        framify(&mut framed, &mut scene, "Inner").unwrap();
        let framed_width = framed.width();

        let row = row_align_center(
            vec![Element::from(framed), leaf(&mut scene, "d", 5.0, 5.0)],
            0.0,
        );

        assert_eq!(row.width(), framed_width + 5.0);
        let element = Element::Group(row);
        assert_eq!(Some(bounds(&element)), recompute_bounds(&element));
    }

    #[derive(Debug, Default)]
    struct RefusingTree {
        inner: Scene,
    }

    impl NodeTree for RefusingTree {
        type Node = SceneNode;
        type Error = SceneError;

        fn new_frame(&mut self, spec: &FrameSpec) -> Result<SceneNode, SceneError> {
            self.inner.new_frame(spec)
        }

        fn reparent(&mut self, node: &mut SceneNode, _frame: &SceneNode) -> Result<(), SceneError> {
            Err(SceneError::UnknownNode(node.id()))
        }
    }

    #[test]
    fn host_failure_propagates_unchanged() {
        let mut tree = RefusingTree::default();
        let first = tree.inner.add_leaf("a", Point::ORIGIN, 1.0, 1.0);
        let mut group = Group::with_children(vec![Element::Leaf(first.clone())]);

        let err = framify(&mut group, &mut tree, "Broken").unwrap_err();

        assert_eq!(err, SceneError::UnknownNode(first.id()));
        assert_eq!(first.parent(), None);
    }
}
