/// Errors emitted by [`Tree`][crate::Tree] operations that cannot express
/// their failure as an absent value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The item to remove is not in the tree. The tree was left untouched.
    #[error("item not in tree")]
    NotFound,

    /// The operation has no meaningful result for a tree without nodes
    /// (e.g. the height of an empty tree).
    #[error("operation requires a non-empty tree")]
    Empty,
}
