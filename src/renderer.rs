//! Box-drawing layout of a tree.
//!
//! Every node is written on its own line as `prefix + connector + name`.
//! The prefix is inherited from the ancestors: a column holds `│   ` while the
//! ancestor at that depth still has siblings below it, and four spaces once
//! that branch is closed. The root counts as closed, so its children sit one
//! column in.

use std::fmt;

use crate::node::PrintableTreeNode;

/// Connector in front of the root's name.
pub const ROOT_CONNECTOR: &str = " ── ";
/// Connector for a node with further siblings below it.
pub const BRANCH_CONNECTOR: &str = "├── ";
/// Connector for the last node among its siblings.
pub const LAST_CONNECTOR: &str = "└── ";
/// Indentation under an ancestor whose branch is still open.
pub const OPEN_INDENT: &str = "│   ";
/// Indentation under an ancestor that was the last of its siblings.
pub const CLOSED_INDENT: &str = "    ";

/// Render the whole subtree rooted at `root`.
///
/// Every line, the last one included, ends with `\n`, so the output holds
/// exactly one line per node.
///
/// ```
/// use tree_printer::{render, Node};
///
/// let tree = Node::new("A", vec![Node::new("B", vec![Node::leaf("D")]), Node::leaf("C")]);
/// assert_eq!(render(&tree), " ── A\n    ├── B\n    │   └── D\n    └── C\n");
/// ```
pub fn render<T: PrintableTreeNode>(root: T) -> String {
    display(root).to_string()
}

/// Render `root` into an arbitrary sink.
///
/// Produces the same text as [`render`]; fails only if the sink does.
pub fn render_to<T, W>(root: T, output: &mut W) -> fmt::Result
where
    T: PrintableTreeNode,
    W: fmt::Write + ?Sized,
{
    render_recursive(&root, output, "", true, true)
}

fn render_recursive<T, W>(
    node: &T,
    output: &mut W,
    prefix: &str,
    is_root: bool,
    is_last: bool,
) -> fmt::Result
where
    T: PrintableTreeNode,
    W: fmt::Write + ?Sized,
{
    writeln!(output, "{}{}{}", prefix, connector(is_root, is_last), node.name())?;

    let mut children = node.children().into_iter().peekable();
    if children.peek().is_none() {
        return Ok(());
    }

    let child_prefix = format!("{}{}", prefix, continuation(is_last));
    while let Some(child) = children.next() {
        let child_is_last = children.peek().is_none();
        render_recursive(&child, output, &child_prefix, false, child_is_last)?;
    }

    Ok(())
}

/// Explicit-stack variant of [`render`] for trees deep enough to exhaust
/// the call stack. The output is byte-identical.
pub fn render_iterative<T: PrintableTreeNode>(root: T) -> String {
    let mut output = String::new();
    let mut stack = vec![Frame {
        node: root,
        prefix: String::new(),
        is_root: true,
        is_last: true,
    }];

    while let Some(frame) = stack.pop() {
        output.push_str(&frame.prefix);
        output.push_str(connector(frame.is_root, frame.is_last));
        output.push_str(&frame.node.name());
        output.push('\n');

        let children: Vec<T> = frame.node.children().into_iter().collect();
        if children.is_empty() {
            continue;
        }

        let child_prefix = frame.prefix + continuation(frame.is_last);
        let last = children.len() - 1;

        // Reversed so the first child is popped first.
        for (i, child) in children.into_iter().enumerate().rev() {
            stack.push(Frame {
                node: child,
                prefix: child_prefix.clone(),
                is_root: false,
                is_last: i == last,
            });
        }
    }

    output
}

/// A pending node of [`render_iterative`].
struct Frame<T> {
    node: T,
    prefix: String,
    is_root: bool,
    is_last: bool,
}

fn connector(is_root: bool, is_last: bool) -> &'static str {
    if is_root {
        ROOT_CONNECTOR
    } else if is_last {
        LAST_CONNECTOR
    } else {
        BRANCH_CONNECTOR
    }
}

// The root is rendered as a last sibling, so its children get a closed column.
fn continuation(is_last: bool) -> &'static str {
    if is_last {
        CLOSED_INDENT
    } else {
        OPEN_INDENT
    }
}

/// Wrap a tree so it can be used with `format!` and friends.
pub fn display<T: PrintableTreeNode>(root: T) -> TreeDisplay<T> {
    TreeDisplay { root }
}

/// [`fmt::Display`] adapter over a tree, see [`display`].
#[derive(Debug, Clone, Copy)]
pub struct TreeDisplay<T> {
    root: T,
}

impl<T: PrintableTreeNode> fmt::Display for TreeDisplay<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_recursive(&self.root, f, "", true, true)
    }
}
