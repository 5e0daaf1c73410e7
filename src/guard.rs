//! Opt-in bounded traversals for structures that may violate the tree
//! invariant.
//!
//! The guarded variants follow the same order as their unguarded
//! counterparts. They keep the identities of the nodes on the current path
//! and stop with [`TreeError::CycleDetected`] when a node shows up below
//! itself, or with [`TreeError::DepthExceeded`] once the path grows past
//! [`TreeSettings::max_depth`].

use tracing::{debug, instrument};

use crate::config::TreeSettings;
use crate::errors::{TreeError, TreeResult};
use crate::simple_tree::SimpleTree;

struct PathGuard<N: SimpleTree> {
    limit: Option<usize>,
    path: Vec<N::NodeId>,
}

impl<N: SimpleTree> PathGuard<N> {
    fn new(settings: &TreeSettings, start: &N) -> Self {
        Self {
            limit: settings.max_depth,
            path: vec![start.node_id()],
        }
    }

    fn enter(&mut self, child: &N) -> TreeResult<()> {
        let id = child.node_id();
        if self.path.contains(&id) {
            debug!("Node {} is its own ancestor", id);
            return Err(TreeError::CycleDetected(id.to_string()));
        }
        // the child sits at depth path.len() below the start node
        if let Some(limit) = self.limit {
            if self.path.len() > limit {
                debug!("Node {} lies below depth limit {}", id, limit);
                return Err(TreeError::DepthExceeded { limit });
            }
        }
        self.path.push(id);
        Ok(())
    }

    fn leave(&mut self) {
        self.path.pop();
    }
}

fn height<N: SimpleTree>(node: &N, guard: &mut PathGuard<N>) -> TreeResult<usize> {
    let mut max_child = 0;
    for child in node.children() {
        guard.enter(&child)?;
        max_child = max_child.max(height(&child, guard)?);
        guard.leave();
    }
    Ok(1 + max_child)
}

fn descendants<N: SimpleTree>(
    node: &N,
    guard: &mut PathGuard<N>,
    out: &mut Vec<N>,
) -> TreeResult<()> {
    for child in node.children() {
        guard.enter(&child)?;
        out.push(child.clone());
        descendants(&child, guard, out)?;
        guard.leave();
    }
    Ok(())
}

fn leaves<N: SimpleTree>(node: &N, guard: &mut PathGuard<N>, out: &mut Vec<N>) -> TreeResult<()> {
    for child in node.children() {
        guard.enter(&child)?;
        if child.is_leaf() {
            out.push(child);
        } else {
            leaves(&child, guard, out)?;
        }
        guard.leave();
    }
    Ok(())
}

/// Guarded versions of the recursive [`SimpleTree`] operations, available on
/// every host.
pub trait GuardedTree: SimpleTree {
    #[instrument(level = "debug", skip(self))]
    fn checked_height(&self, settings: &TreeSettings) -> TreeResult<usize> {
        height(self, &mut PathGuard::new(settings, self))
    }

    #[instrument(level = "debug", skip(self))]
    fn checked_descendants(&self, settings: &TreeSettings) -> TreeResult<Vec<Self>> {
        let mut out = Vec::new();
        descendants(self, &mut PathGuard::new(settings, self), &mut out)?;
        Ok(out)
    }

    #[instrument(level = "debug", skip(self))]
    fn checked_leaves(&self, settings: &TreeSettings) -> TreeResult<Vec<Self>> {
        let mut out = Vec::new();
        leaves(self, &mut PathGuard::new(settings, self), &mut out)?;
        Ok(out)
    }
}

impl<N: SimpleTree> GuardedTree for N {}
