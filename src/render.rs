//! Human-readable renderings of a subtree.

use std::fmt;
use std::path::PathBuf;

use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::simple_tree::SimpleTree;

const INDENT: &str = "    ";
const BRANCH: &str = "\\-";

/// Display label carried by a node payload in the bundled hosts.
///
/// Both methods default to `None`, in which case rendering falls back to the
/// node id.
pub trait NodeLabel {
    fn name(&self) -> Option<String> {
        None
    }

    fn identifier(&self) -> Option<String> {
        None
    }
}

impl NodeLabel for () {}

impl NodeLabel for String {
    fn name(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl NodeLabel for &str {
    fn name(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

impl NodeLabel for PathBuf {
    fn identifier(&self) -> Option<String> {
        Some(self.display().to_string())
    }
}

/// Resolves the display label of a node: a non-empty name, else the
/// identifier, else the node id.
pub fn node_label<N: SimpleTree>(node: &N) -> String {
    resolve_label(node.name(), node.identifier(), node.node_id())
}

pub(crate) fn resolve_label(
    name: Option<String>,
    identifier: Option<String>,
    id: impl fmt::Display,
) -> String {
    name.filter(|name| !name.is_empty())
        .or(identifier)
        .unwrap_or_else(|| id.to_string())
}

/// Renders `node` and its subtree, one line per node.
///
/// The node itself is drawn at `depth`; a depth of 0 prints the bare label,
/// deeper lines get `depth - 1` indent columns joined by `|` and a `\-`
/// branch marker:
///
/// ```text
/// A
///  \- B
///      \- D
///  \- C
/// ```
#[instrument(level = "trace", skip(node))]
pub fn tree_representation<N: SimpleTree>(node: &N, depth: usize) -> String {
    let mut rendered = render_line(&node_label(node), depth);
    for child in node.children() {
        rendered.push_str(&tree_representation(&child, depth + 1));
    }
    rendered
}

/// A single rendered line, including the trailing newline.
pub(crate) fn render_line(label: &str, depth: usize) -> String {
    if depth > 0 {
        format!(
            " {}{} {}\n",
            itertools::repeat_n(INDENT, depth - 1).join("|"),
            BRANCH,
            label
        )
    } else {
        format!("{}\n", label)
    }
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<N: SimpleTree> TreeNodeConvert for N {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        // Recursively construct the children
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|c| c.to_tree_string())
            .collect();

        Tree::new(node_label(self)).with_leaves(leaves)
    }
}
