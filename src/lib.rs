//! Tree Printer - render any tree as a box-drawing text diagram
//!
//! The core is [`render`]: given a root implementing [`PrintableTreeNode`],
//! it produces the familiar `tree` layout.
//!
//! ```
//! use tree_printer::{render, Node};
//!
//! let tree = Node::new("A", vec![Node::leaf("B"), Node::leaf("C")]);
//! assert_eq!(render(&tree), " ── A\n    ├── B\n    └── C\n");
//! ```
//!
//! The [`scanner`] module builds such a tree from a directory, which is what
//! the `tree-printer` binary renders.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod node;
pub mod renderer;
pub mod scanner;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreePrinterError};
pub use node::{Node, PrintableTreeNode};
pub use renderer::{display, render, render_iterative, render_to, TreeDisplay};
