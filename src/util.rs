use std::cmp::Ordering;

/// Which child of a `Node` a descent continues into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Values strictly less than the node's value.
    Left,
    /// Values greater than or equal to the node's value.
    Right,
}

impl Side {
    /// The side `item` belongs on relative to `value`. Ties go right.
    pub(crate) fn toward<T: Ord>(item: &T, value: &T) -> Self {
        match item.cmp(value) {
            Ordering::Less => Side::Left,
            Ordering::Equal | Ordering::Greater => Side::Right,
        }
    }
}
