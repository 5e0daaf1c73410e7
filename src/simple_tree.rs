//! The tree capability: two structural primitives and everything derived from them.
//!
//! A host type supplies `parent`, `children` and a node identity. All other
//! operations are default methods computed on demand from those primitives;
//! nothing is cached, so every call reflects the structure as it is now.
//!
//! The derived operations assume a finite, acyclic structure. A host that
//! hands out a cycle makes the recursive operations (`height`, `descendants`,
//! `leaves`, `family`, `tree_representation`) recurse without end. Use
//! [`crate::guard`] when the structure cannot be trusted.

use std::fmt;

use tracing::instrument;

use crate::render;
use crate::traverse::{LevelOrder, PostOrder, PreOrder};

pub trait SimpleTree: Clone + Sized {
    /// Identity of a node, independent of any value equality of the host type.
    ///
    /// The `Display` form doubles as the fallback label when rendering.
    type NodeId: PartialEq + fmt::Display;

    /// Parent of this node, `None` for a root.
    fn parent(&self) -> Option<Self>;

    /// Children of this node in traversal order, empty for a leaf.
    fn children(&self) -> Vec<Self>;

    fn node_id(&self) -> Self::NodeId;

    /// Preferred display label. Empty names are ignored.
    fn name(&self) -> Option<String> {
        None
    }

    /// Display label used when there is no name.
    fn identifier(&self) -> Option<String> {
        None
    }

    /// Identity comparison, used wherever a node has to exclude itself.
    fn same_node(&self, other: &Self) -> bool {
        self.node_id() == other.node_id()
    }

    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    fn has_parent(&self) -> bool {
        !self.is_root()
    }

    fn has_children(&self) -> bool {
        !self.is_leaf()
    }

    /// Height of the subtree rooted at this node. A single node has height 1.
    #[instrument(level = "trace", skip(self))]
    fn height(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| child.height())
            .max()
            .unwrap_or(0)
    }

    fn grandparent(&self) -> Option<Self> {
        self.parent()?.parent()
    }

    /// The parent's children without this node, in the parent's order.
    #[instrument(level = "trace", skip(self))]
    fn siblings(&self) -> Vec<Self> {
        match self.parent() {
            Some(parent) => parent
                .children()
                .into_iter()
                .filter(|child| !child.same_node(self))
                .collect(),
            None => Vec::new(),
        }
    }

    /// All strict descendants in pre-order: each child is followed by its
    /// whole subtree before the next sibling starts.
    #[instrument(level = "trace", skip(self))]
    fn descendants(&self) -> Vec<Self> {
        let mut descendants = Vec::new();
        for child in self.children() {
            let nested = child.descendants();
            descendants.push(child);
            descendants.extend(nested);
        }
        descendants
    }

    /// Leaf nodes below this node, left to right. The node itself is never
    /// part of the result, even when it is a leaf.
    #[instrument(level = "trace", skip(self))]
    fn leaves(&self) -> Vec<Self> {
        let mut leaves = Vec::new();
        for child in self.children() {
            if child.is_leaf() {
                leaves.push(child);
            } else {
                leaves.extend(child.leaves());
            }
        }
        leaves
    }

    /// The parent followed by all of the parent's descendants, or the node's
    /// own descendants for a root. This node is removed in both cases.
    #[instrument(level = "trace", skip(self))]
    fn family(&self) -> Vec<Self> {
        let mut family = match self.parent() {
            Some(parent) => {
                let descendants = parent.descendants();
                let mut family = Vec::with_capacity(descendants.len() + 1);
                family.push(parent);
                family.extend(descendants);
                family
            }
            None => self.descendants(),
        };
        family.retain(|node| !node.same_node(self));
        family
    }

    /// Ancestors from the parent up to the root.
    fn ancestors(&self) -> Vec<Self> {
        let mut ancestors = Vec::new();
        let mut current = self.parent();
        while let Some(node) = current {
            current = node.parent();
            ancestors.push(node);
        }
        ancestors
    }

    fn root(&self) -> Self {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Number of edges between this node and its root.
    fn level(&self) -> usize {
        self.ancestors().len()
    }

    /// Indented debug rendering of the subtree rooted at this node.
    fn tree_representation(&self, depth: usize) -> String {
        render::tree_representation(self, depth)
    }

    fn to_tree_representation(&self) -> String {
        self.tree_representation(0)
    }

    fn iter_preorder(&self) -> PreOrder<Self> {
        PreOrder::new(self.clone())
    }

    fn iter_postorder(&self) -> PostOrder<Self> {
        PostOrder::new(self.clone())
    }

    fn iter_level_order(&self) -> LevelOrder<Self> {
        LevelOrder::new(self.clone())
    }
}
