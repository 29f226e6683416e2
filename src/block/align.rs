//! Row and column alignment.
//!
//! Both functions reposition their inputs starting from the origin and hand
//! them back wrapped in a new [`Group`]. Gutters go between neighbours only.

use super::core::{Element, Group, height, move_to, width};
use crate::geometry::Point;
use crate::host::Node;

/// Lay elements out left to right, centred on a shared horizontal axis.
///
/// ```text
///       .--.         .---.
///       |  | .-----. |   |
///     --|A |-|  B  |-| C |--
///       |  | '-----' |   |
///       '--'         '---'
/// ```
pub fn row_align_center<N: Node>(
    elements: impl IntoIterator<Item = Element<N>>,
    gutter: f64,
) -> Group<N> {
    let mut elements: Vec<Element<N>> = elements.into_iter().collect();
    let max_height = elements.iter().map(height).fold(0.0, f64::max);

    let mut x = 0.0;
    for element in &mut elements {
        let (w, h) = (width(element), height(element));
        let dh = (max_height - h) / 2.0;
        move_to(element, Point::new(x, -dh));
        x += w + gutter;
    }

    Group::with_children(elements)
}

/// Stack elements top to bottom with their right edges aligned.
///
/// ```text
///        .--.
///        | A|
///        '--'
///     .-----.
///     |  B  |
///     '-----'
///       .---.
///       | C |
///       '---'
/// ```
pub fn col_align_right<N: Node>(
    elements: impl IntoIterator<Item = Element<N>>,
    gutter: f64,
) -> Group<N> {
    let mut elements: Vec<Element<N>> = elements.into_iter().collect();
    let max_width = elements.iter().map(width).fold(0.0, f64::max);

    let mut y = 0.0;
    for element in &mut elements {
        let (w, h) = (width(element), height(element));
        let dw = max_width - w;
        move_to(element, Point::new(dw, y));
        y -= h + gutter;
    }

    Group::with_children(elements)
}
