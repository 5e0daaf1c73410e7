use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::render::NodeLabel;
use crate::simple_tree::SimpleTree;

/// Stored node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode<T> {
    /// Payload of this node
    pub data: T,
    /// Index of parent node in the arena, None for root nodes
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in traversal order
    pub children: Vec<Index>,
}

/// Arena-based tree host.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Nodes are read through [`ArenaNode`] handles, which implement [`SimpleTree`].
#[derive(Debug)]
pub struct TreeArena<T> {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode<T>>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl<T> Default for TreeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeArena<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a node below `parent`, appending it to the parent's children.
    /// A node inserted without parent becomes the root.
    ///
    /// Fails if `parent` does not name a live node of this arena, or if a
    /// root is inserted while the arena already has one.
    #[instrument(level = "trace", skip(self, data))]
    pub fn insert_node(&mut self, data: T, parent: Option<Index>) -> TreeResult<Index> {
        match parent {
            Some(parent_idx) if !self.arena.contains(parent_idx) => {
                return Err(TreeError::InvalidParent(ArenaNodeId(parent_idx).to_string()));
            }
            None => {
                if let Some(root_idx) = self.root.filter(|&idx| self.arena.contains(idx)) {
                    return Err(TreeError::RootExists(ArenaNodeId(root_idx).to_string()));
                }
            }
            _ => {}
        }

        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        Ok(node_idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<T>> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode<T>> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Handle to the node at `idx`, None if the index is stale.
    pub fn node(&self, idx: Index) -> Option<ArenaNode<'_, T>> {
        self.arena.get(idx).map(|_| ArenaNode { arena: self, idx })
    }

    pub fn root_node(&self) -> Option<ArenaNode<'_, T>> {
        self.root.and_then(|idx| self.node(idx))
    }
}

/// Identity of an arena node: slot and generation of its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaNodeId(pub Index);

impl fmt::Display for ArenaNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "{}v{}", slot, generation)
    }
}

/// Borrowed handle to one node of a [`TreeArena`].
pub struct ArenaNode<'a, T> {
    arena: &'a TreeArena<T>,
    idx: Index,
}

impl<T> Clone for ArenaNode<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaNode<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for ArenaNode<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaNode")
            .field("idx", &self.idx)
            .field("data", &self.data())
            .finish()
    }
}

impl<'a, T> ArenaNode<'a, T> {
    pub fn index(&self) -> Index {
        self.idx
    }

    pub fn data(&self) -> Option<&'a T> {
        self.arena.get_node(self.idx).map(|node| &node.data)
    }

    fn handle(&self, idx: Index) -> Self {
        Self {
            arena: self.arena,
            idx,
        }
    }
}

impl<'a, T: NodeLabel> SimpleTree for ArenaNode<'a, T> {
    type NodeId = ArenaNodeId;

    fn parent(&self) -> Option<Self> {
        self.arena
            .get_node(self.idx)
            .and_then(|node| node.parent)
            .map(|idx| self.handle(idx))
    }

    fn children(&self) -> Vec<Self> {
        self.arena
            .get_node(self.idx)
            .map(|node| node.children.iter().map(|&idx| self.handle(idx)).collect())
            .unwrap_or_default()
    }

    fn node_id(&self) -> ArenaNodeId {
        ArenaNodeId(self.idx)
    }

    fn name(&self) -> Option<String> {
        self.data().and_then(|data| data.name())
    }

    fn identifier(&self) -> Option<String> {
        self.data().and_then(|data| data.identifier())
    }
}
