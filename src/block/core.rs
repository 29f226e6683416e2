use crate::geometry::{Bounds, Point};
use crate::host::Node;

/// Anything the layout core can position: a host node or a group of elements.
#[derive(Debug, Clone)]
pub enum Element<N> {
    Leaf(N),
    Group(Group<N>),
}

impl<N> Element<N> {
    pub fn as_leaf(&self) -> Option<&N> {
        match self {
            Element::Leaf(node) => Some(node),
            Element::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group<N>> {
        match self {
            Element::Leaf(_) => None,
            Element::Group(group) => Some(group),
        }
    }

    /// Every leaf under this element, depth-first in child order.
    pub fn leaves(&self) -> Vec<&N> {
        match self {
            Element::Leaf(node) => vec![node],
            Element::Group(group) => group.leaves(),
        }
    }
}

impl<N> From<Group<N>> for Element<N> {
    fn from(group: Group<N>) -> Self {
        Element::Group(group)
    }
}

/// Ordered, append-only collection of elements with a cached bounding box.
///
/// The cache is widened on every [`Group::add`] and translated on every
/// [`Group::move_by`]; it is never rebuilt from the children.
#[derive(Debug, Clone)]
pub struct Group<N> {
    pub(crate) children: Vec<Element<N>>,
    pub(crate) bounds: Bounds,
}

impl<N> Default for Group<N> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            bounds: Bounds::default(),
        }
    }
}

impl<N: Node> Group<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a group by adding each element in order.
    pub fn with_children(children: impl IntoIterator<Item = Element<N>>) -> Self {
        let mut group = Self::new();
        for child in children {
            group.add(child);
        }
        group
    }

    pub fn add(&mut self, child: Element<N>) {
        let child_bounds = bounds(&child);
        if self.children.is_empty() {
            self.bounds = child_bounds;
        } else {
            self.bounds = self.bounds.union(&child_bounds);
        }
        self.children.push(child);
    }

    pub fn move_by(&mut self, delta: Point) {
        for child in &mut self.children {
            move_by(child, delta);
        }
        self.bounds.translate(delta);
    }

    pub fn move_to(&mut self, target: Point) {
        let delta = target - self.bounds.top_left;
        self.move_by(delta);
    }
}

impl<N> Group<N> {
    /// Every leaf under this group, depth-first in child order.
    pub fn leaves(&self) -> Vec<&N> {
        let mut found = Vec::new();
        let mut pending: Vec<&Element<N>> = self.children.iter().rev().collect();
        while let Some(element) = pending.pop() {
            match element {
                Element::Leaf(node) => found.push(node),
                Element::Group(group) => pending.extend(group.children.iter().rev()),
            }
        }
        found
    }

    pub fn children(&self) -> &[Element<N>] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Element<N>> {
        self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn top_left(&self) -> Point {
        self.bounds.top_left
    }

    pub fn bottom_right(&self) -> Point {
        self.bounds.bottom_right
    }

    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    pub fn height(&self) -> f64 {
        self.bounds.height()
    }
}

impl<N: Node> FromIterator<Element<N>> for Group<N> {
    fn from_iter<I: IntoIterator<Item = Element<N>>>(iter: I) -> Self {
        Group::with_children(iter)
    }
}

pub fn bounds<N: Node>(element: &Element<N>) -> Bounds {
    match element {
        Element::Leaf(node) => node.bounds(),
        Element::Group(group) => group.bounds,
    }
}

pub fn top_left<N: Node>(element: &Element<N>) -> Point {
    match element {
        Element::Leaf(node) => node.location(),
        Element::Group(group) => group.bounds.top_left,
    }
}

pub fn bottom_right<N: Node>(element: &Element<N>) -> Point {
    match element {
        Element::Leaf(node) => node.location() + Point::new(node.width(), -node.height()),
        Element::Group(group) => group.bounds.bottom_right,
    }
}

pub fn width<N: Node>(element: &Element<N>) -> f64 {
    bottom_right(element).x - top_left(element).x
}

pub fn height<N: Node>(element: &Element<N>) -> f64 {
    top_left(element).y - bottom_right(element).y
}

pub fn move_by<N: Node>(element: &mut Element<N>, delta: Point) {
    match element {
        Element::Leaf(node) => {
            let location = node.location();
            node.set_location(location + delta);
        }
        Element::Group(group) => group.move_by(delta),
    }
}

pub fn move_to<N: Node>(element: &mut Element<N>, target: Point) {
    let delta = target - top_left(element);
    move_by(element, delta);
}

/// Move `element` so its box is symmetric about the origin.
pub fn center_at_origin<N: Node>(element: &mut Element<N>) {
    let (w, h) = (width(element), height(element));
    move_to(element, Point::new(-w / 2.0, h / 2.0));
}

/// Bounding box of every leaf under `element`, computed from scratch.
///
/// Returns `None` when there are no leaves. Empty groups contribute nothing
/// here, whereas [`Group::add`] widens the cache by their zero box.
pub fn recompute_bounds<N: Node>(element: &Element<N>) -> Option<Bounds> {
    element
        .leaves()
        .into_iter()
        .map(|node| node.bounds())
        .reduce(|acc, next| acc.union(&next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Scene, SceneNode};

    fn leaf(scene: &mut Scene, x: f64, y: f64, w: f64, h: f64) -> Element<SceneNode> {
        Element::Leaf(scene.add_leaf("leaf", Point::new(x, y), w, h))
    }

    #[test]
    fn leaf_primitives_follow_upward_y() {
        let mut scene = Scene::new();
        let element = leaf(&mut scene, 10.0, 20.0, 4.0, 6.0);
        assert_eq!(top_left(&element), Point::new(10.0, 20.0));
        assert_eq!(bottom_right(&element), Point::new(14.0, 14.0));
        assert_eq!(width(&element), 4.0);
        assert_eq!(height(&element), 6.0);
    }

    #[test]
    fn empty_group_is_zero_box_at_origin() {
        let group: Group<SceneNode> = Group::new();
        assert!(group.is_empty());
        assert_eq!(group.top_left(), Point::ORIGIN);
        assert_eq!(group.bottom_right(), Point::ORIGIN);
    }

    #[test]
    fn first_add_initialises_cache() {
        let mut scene = Scene::new();
        let mut group = Group::new();
        group.add(leaf(&mut scene, 50.0, 40.0, 10.0, 5.0));
        assert_eq!(group.top_left(), Point::new(50.0, 40.0));
        assert_eq!(group.bottom_right(), Point::new(60.0, 35.0));
    }

    #[test]
    fn cache_matches_recomputed_bounds_after_adds() {
        let mut scene = Scene::new();
        let inner = Group::with_children(vec![
            leaf(&mut scene, -5.0, 3.0, 2.0, 8.0),
            leaf(&mut scene, 7.0, 12.0, 1.0, 1.0),
        ]);
        let mut outer = Group::new();
        outer.add(leaf(&mut scene, 0.0, 0.0, 3.0, 3.0));
        outer.add(Element::from(inner));
        outer.add(leaf(&mut scene, 20.0, -30.0, 4.0, 2.0));

        let element = Element::Group(outer);
        assert_eq!(Some(bounds(&element)), recompute_bounds(&element));
        assert_eq!(top_left(&element), Point::new(-5.0, 12.0));
        assert_eq!(bottom_right(&element), Point::new(24.0, -32.0));
    }

    #[test]
    fn nested_move_keeps_cache_consistent() {
        let mut scene = Scene::new();
        let inner = Group::with_children(vec![
            leaf(&mut scene, 1.0, 1.0, 2.0, 2.0),
            leaf(&mut scene, 4.0, 0.0, 2.0, 5.0),
        ]);
        let mut element = Element::Group(Group::with_children(vec![
            Element::from(inner),
            leaf(&mut scene, -3.0, 9.0, 1.0, 1.0),
        ]));

        move_by(&mut element, Point::new(12.5, -7.0));
        assert_eq!(Some(bounds(&element)), recompute_bounds(&element));

        if let Element::Group(outer) = &element {
            let inner = outer.children()[0].as_group().unwrap();
            assert_eq!(Some(inner.bounds()), recompute_bounds(&outer.children()[0]));
        }
    }

    #[test]
    fn move_by_then_back_restores_corners() {
        let mut scene = Scene::new();
        let mut element = Element::Group(Group::with_children(vec![
            leaf(&mut scene, 0.0, 0.0, 3.0, 4.0),
            leaf(&mut scene, 8.0, 2.0, 1.0, 1.0),
        ]));
        let before = bounds(&element);
        let delta = Point::new(3.25, -11.5);

        move_by(&mut element, delta);
        move_by(&mut element, -delta);

        assert_eq!(bounds(&element), before);
    }

    #[test]
    fn move_to_lands_top_left_exactly() {
        let mut scene = Scene::new();
        let mut single = leaf(&mut scene, 3.0, 3.0, 1.0, 1.0);
        let mut group = Element::Group(Group::with_children(vec![
            leaf(&mut scene, 0.0, 5.0, 3.0, 4.0),
            leaf(&mut scene, 8.0, 2.0, 1.0, 1.0),
        ]));

        move_to(&mut single, Point::new(-4.0, 9.5));
        move_to(&mut group, Point::new(100.0, -20.0));

        assert_eq!(top_left(&single), Point::new(-4.0, 9.5));
        assert_eq!(top_left(&group), Point::new(100.0, -20.0));
        assert_eq!(Some(bounds(&group)), recompute_bounds(&group));
    }

    #[test]
    fn center_at_origin_is_idempotent() {
        let mut scene = Scene::new();
        let mut element = Element::Group(Group::with_children(vec![
            leaf(&mut scene, 10.0, 10.0, 6.0, 4.0),
            leaf(&mut scene, 20.0, 0.0, 4.0, 2.0),
        ]));
        let (w, h) = (width(&element), height(&element));

        center_at_origin(&mut element);
        let first = bounds(&element);
        assert_eq!(first.top_left, Point::new(-w / 2.0, h / 2.0));
        assert_eq!(first.center(), Point::ORIGIN);

        center_at_origin(&mut element);
        assert_eq!(bounds(&element), first);
    }

    #[test]
    fn leaves_walks_in_child_order() {
        let mut scene = Scene::new();
        let a = scene.add_leaf("a", Point::ORIGIN, 1.0, 1.0);
        let b = scene.add_leaf("b", Point::ORIGIN, 1.0, 1.0);
        let c = scene.add_leaf("c", Point::ORIGIN, 1.0, 1.0);
        let element = Element::Group(Group::with_children(vec![
            Element::Leaf(a),
            Element::from(Group::with_children(vec![Element::Leaf(b)])),
            Element::Leaf(c),
        ]));

        let names: Vec<String> = element.leaves().iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn recompute_bounds_of_empty_group_is_none() {
        let element: Element<SceneNode> = Element::Group(Group::new());
        assert_eq!(recompute_bounds(&element), None);
    }
}
