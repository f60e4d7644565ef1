use webdom::Element;

use crate::node::TreeNode;

/// The tree that owns a node.
///
/// A node only borrows its owner while rendering children; it never keeps a
/// reference to it.
pub trait TreeOwner {
    /// Materialize one child of `parent` at `index`.
    fn render_tree_node(
        &self,
        child: &Element,
        index: usize,
        parent: &TreeNode,
        path: &str,
    ) -> Element;
}
