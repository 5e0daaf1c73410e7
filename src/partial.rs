//! Run-time checked form of the tree capability.
//!
//! [`PartialTree`] is for hosts that cannot promise both primitives at compile
//! time, for instance a handle whose link table is loaded lazily or only
//! exists for some node kinds. A primitive that is not supplied fails with
//! [`TreeError::Unimplemented`], and every derived operation propagates that
//! error unchanged.

use std::fmt;

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::render::{render_line, resolve_label};
use crate::simple_tree::SimpleTree;

pub trait PartialTree: Clone + Sized {
    type NodeId: PartialEq + fmt::Display;

    fn try_parent(&self) -> TreeResult<Option<Self>> {
        Err(TreeError::unimplemented::<Self>("parent"))
    }

    fn try_children(&self) -> TreeResult<Vec<Self>> {
        Err(TreeError::unimplemented::<Self>("children"))
    }

    fn node_id(&self) -> Self::NodeId;

    fn name(&self) -> Option<String> {
        None
    }

    fn identifier(&self) -> Option<String> {
        None
    }

    fn same_node(&self, other: &Self) -> bool {
        self.node_id() == other.node_id()
    }

    fn try_is_leaf(&self) -> TreeResult<bool> {
        Ok(self.try_children()?.is_empty())
    }

    fn try_is_root(&self) -> TreeResult<bool> {
        Ok(self.try_parent()?.is_none())
    }

    fn try_has_parent(&self) -> TreeResult<bool> {
        Ok(!self.try_is_root()?)
    }

    fn try_has_children(&self) -> TreeResult<bool> {
        Ok(!self.try_is_leaf()?)
    }

    #[instrument(level = "trace", skip(self))]
    fn try_height(&self) -> TreeResult<usize> {
        let mut max_child = 0;
        for child in self.try_children()? {
            max_child = max_child.max(child.try_height()?);
        }
        Ok(1 + max_child)
    }

    fn try_grandparent(&self) -> TreeResult<Option<Self>> {
        match self.try_parent()? {
            Some(parent) => parent.try_parent(),
            None => Ok(None),
        }
    }

    fn try_siblings(&self) -> TreeResult<Vec<Self>> {
        match self.try_parent()? {
            Some(parent) => Ok(parent
                .try_children()?
                .into_iter()
                .filter(|child| !child.same_node(self))
                .collect()),
            None => Ok(Vec::new()),
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn try_descendants(&self) -> TreeResult<Vec<Self>> {
        let mut descendants = Vec::new();
        for child in self.try_children()? {
            let nested = child.try_descendants()?;
            descendants.push(child);
            descendants.extend(nested);
        }
        Ok(descendants)
    }

    #[instrument(level = "trace", skip(self))]
    fn try_leaves(&self) -> TreeResult<Vec<Self>> {
        let mut leaves = Vec::new();
        for child in self.try_children()? {
            if child.try_is_leaf()? {
                leaves.push(child);
            } else {
                leaves.extend(child.try_leaves()?);
            }
        }
        Ok(leaves)
    }

    fn try_family(&self) -> TreeResult<Vec<Self>> {
        let mut family = match self.try_parent()? {
            Some(parent) => {
                let descendants = parent.try_descendants()?;
                std::iter::once(parent).chain(descendants).collect()
            }
            None => self.try_descendants()?,
        };
        family.retain(|node: &Self| !node.same_node(self));
        Ok(family)
    }

    #[instrument(level = "trace", skip(self))]
    fn try_tree_representation(&self, depth: usize) -> TreeResult<String> {
        let label = resolve_label(self.name(), self.identifier(), self.node_id());
        let mut rendered = render_line(&label, depth);
        for child in self.try_children()? {
            rendered.push_str(&child.try_tree_representation(depth + 1)?);
        }
        Ok(rendered)
    }
}

/// Adapter giving any [`SimpleTree`] the checked interface. Its primitives
/// never fail.
#[derive(Debug, Clone)]
pub struct Strict<N>(pub N);

impl<N: SimpleTree> PartialTree for Strict<N> {
    type NodeId = N::NodeId;

    fn try_parent(&self) -> TreeResult<Option<Self>> {
        Ok(self.0.parent().map(Strict))
    }

    fn try_children(&self) -> TreeResult<Vec<Self>> {
        Ok(self.0.children().into_iter().map(Strict).collect())
    }

    fn node_id(&self) -> Self::NodeId {
        self.0.node_id()
    }

    fn name(&self) -> Option<String> {
        self.0.name()
    }

    fn identifier(&self) -> Option<String> {
        self.0.identifier()
    }
}
