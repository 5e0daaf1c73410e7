//! Hierarchical navigation for any type that represents a node in a rooted
//! tree.
//!
//! Implement [`SimpleTree`] (parent, children, node identity) and every
//! derived operation comes for free: classification, height, siblings,
//! descendants, leaves, family and a text rendering of the subtree.
//!
//! ```
//! use simple_tree::{RcNode, SimpleTree};
//!
//! let a = RcNode::new("A".to_string());
//! let b = a.add_child("B".to_string());
//! let c = a.add_child("C".to_string());
//! let d = b.add_child("D".to_string());
//!
//! assert_eq!(a.height(), 3);
//! assert!(d.grandparent().unwrap().same_node(&a));
//! assert_eq!(b.siblings().len(), 1);
//! assert!(b.siblings()[0].same_node(&c));
//! assert_eq!(a.to_tree_representation(), "A\n \\- B\n     \\- D\n \\- C\n");
//! ```

pub mod arena;
pub mod config;
pub mod errors;
pub mod guard;
pub mod partial;
pub mod rc_node;
pub mod render;
pub mod simple_tree;
pub mod traverse;
pub mod util;

pub use arena::{ArenaNode, ArenaNodeId, TreeArena, TreeNode};
pub use config::TreeSettings;
pub use errors::{TreeError, TreeResult};
pub use guard::GuardedTree;
pub use partial::{PartialTree, Strict};
pub use rc_node::{RcNode, RcNodeId};
pub use render::{NodeLabel, TreeNodeConvert};
pub use simple_tree::SimpleTree;
