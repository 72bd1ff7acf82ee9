//! The capability contract a tree must satisfy to be rendered.

use std::borrow::Cow;

/// A handle to a node that can be drawn by the renderer.
///
/// Implementors are usually cheap handles: a reference into a stored tree,
/// a cursor into a linked structure, or a value computed on demand. Children
/// are yielded as handles of the same type, in display order, and read once
/// per node. The renderer never mutates, caches or keeps the tree beyond a
/// single call.
pub trait PrintableTreeNode: Sized {
    /// Child sequence; empty for a leaf.
    type Children: IntoIterator<Item = Self>;

    /// Display name for this node, emitted verbatim.
    fn name(&self) -> Cow<'_, str>;

    /// Children in display order.
    fn children(&self) -> Self::Children;
}

/// Minimal owned tree for callers without a tree type of their own.
///
/// `&Node` is the renderable handle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    pub name: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Total number of nodes in this subtree, root included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

impl<'a> PrintableTreeNode for &'a Node {
    type Children = std::slice::Iter<'a, Node>;

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn children(&self) -> Self::Children {
        let node: &'a Node = *self;
        node.children.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_names(node: &Node) -> Vec<String> {
        node.children().map(|c| c.name().into_owned()).collect()
    }

    #[test]
    fn leaf_has_no_children() {
        let node = Node::leaf("A");
        assert_eq!((&node).name(), "A");
        assert_eq!((&node).children().count(), 0);
        assert_eq!(node.count(), 1);
    }

    #[test]
    fn with_child_preserves_order() {
        let node = Node::leaf("A")
            .with_child(Node::leaf("B"))
            .with_child(Node::leaf("C"));

        assert_eq!(child_names(&node), vec!["B", "C"]);
    }

    #[test]
    fn count_includes_all_descendants() {
        let node = Node::new(
            "A",
            vec![Node::new("B", vec![Node::leaf("D")]), Node::leaf("C")],
        );
        assert_eq!(node.count(), 4);
    }
}
