//! Coordinate primitives shared by leaves and groups.
//!
//! The plane uses y increasing upward, so a box's bottom edge has a smaller
//! y than its top edge and heights are measured as `top - bottom`.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Position or offset in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// Axis-aligned box described by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Bounds {
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Box anchored at `top_left` extending right by `width` and down by `height`.
    pub fn from_size(top_left: Point, width: f64, height: f64) -> Self {
        Self::new(top_left, top_left + Point::new(width, -height))
    }

    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.top_left.y - self.bottom_right.y
    }

    /// Smallest box enclosing both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            Point::new(
                self.top_left.x.min(other.top_left.x),
                self.top_left.y.max(other.top_left.y),
            ),
            Point::new(
                self.bottom_right.x.max(other.bottom_right.x),
                self.bottom_right.y.min(other.bottom_right.y),
            ),
        )
    }

    pub fn translate(&mut self, delta: Point) {
        self.top_left += delta;
        self.bottom_right += delta;
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.top_left.x + self.width() / 2.0,
            self.top_left.y - self.height() / 2.0,
        )
    }

    /// True when `other` lies entirely within `self`, edges included.
    pub fn contains(&self, other: &Bounds) -> bool {
        self.top_left.x <= other.top_left.x
            && self.top_left.y >= other.top_left.y
            && self.bottom_right.x >= other.bottom_right.x
            && self.bottom_right.y <= other.bottom_right.y
    }

    /// True when the two boxes share interior area. Touching edges do not count.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.top_left.x < other.bottom_right.x
            && other.top_left.x < self.bottom_right.x
            && self.bottom_right.y < other.top_left.y
            && other.bottom_right.y < self.top_left.y
    }
}
