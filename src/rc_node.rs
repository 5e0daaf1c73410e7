//! Reference-counted tree host.
//!
//! Children are owned through `Rc`, parents are referenced through `Weak`, so
//! dropping the last handle to a root frees the whole tree. A node whose
//! parent has been dropped reports itself as a root.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::render::NodeLabel;
use crate::simple_tree::SimpleTree;

type NodeRef<T> = Rc<RefCell<Inner<T>>>;
type WeakNodeRef<T> = Weak<RefCell<Inner<T>>>;

#[derive(Debug)]
struct Inner<T> {
    data: T,
    parent: WeakNodeRef<T>,
    children: Vec<NodeRef<T>>,
}

/// Shared handle to a node. Cloning the handle does not clone the node.
pub struct RcNode<T>(NodeRef<T>);

impl<T> Clone for RcNode<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for RcNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("RcNode")
            .field("id", &self.id())
            .field("data", &inner.data)
            .field("children", &inner.children.len())
            .finish()
    }
}

impl<T> RcNode<T> {
    /// Creates a detached root node.
    pub fn new(data: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            data,
            parent: Weak::new(),
            children: Vec::new(),
        })))
    }

    /// Creates a node and appends it as the last child of `self`.
    pub fn add_child(&self, data: T) -> Self {
        let child = Self::new(data);
        self.link(&child);
        child
    }

    /// Appends `child` as the last child of `self`, detaching it from its
    /// previous parent first.
    ///
    /// Fails with [`TreeError::CycleDetected`] when `child` is `self` or one
    /// of its ancestors; the tree is left unchanged in that case.
    #[instrument(level = "trace", skip(self, child))]
    pub fn append(&self, child: &RcNode<T>) -> TreeResult<()> {
        if self.is_self_or_descendant_of(child) {
            debug!("Refusing to append {} below {}", child.id(), self.id());
            return Err(TreeError::CycleDetected(child.id().to_string()));
        }
        child.detach();
        self.link(child);
        Ok(())
    }

    fn link(&self, child: &RcNode<T>) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(Rc::clone(&child.0));
    }

    /// True if `other` is this node or lies on its path to the root.
    fn is_self_or_descendant_of(&self, other: &RcNode<T>) -> bool {
        let mut current = Some(Rc::clone(&self.0));
        while let Some(node) = current {
            if Rc::ptr_eq(&node, &other.0) {
                return true;
            }
            current = node.borrow().parent.upgrade();
        }
        false
    }

    /// Removes this node from its parent's children. The subtree below it
    /// stays intact.
    #[instrument(level = "trace", skip(self))]
    pub fn detach(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent
                .borrow_mut()
                .children
                .retain(|child| !Rc::ptr_eq(child, &self.0));
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    pub fn data(&self) -> Ref<'_, T> {
        Ref::map(self.0.borrow(), |inner| &inner.data)
    }

    pub fn data_mut(&self) -> RefMut<'_, T> {
        RefMut::map(self.0.borrow_mut(), |inner| &mut inner.data)
    }

    pub fn id(&self) -> RcNodeId {
        RcNodeId(Rc::as_ptr(&self.0) as *const () as usize)
    }
}

/// Identity of an [`RcNode`]: the address of its shared allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RcNodeId(usize);

impl fmt::Display for RcNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl<T: NodeLabel> SimpleTree for RcNode<T> {
    type NodeId = RcNodeId;

    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(RcNode)
    }

    fn children(&self) -> Vec<Self> {
        self.0
            .borrow()
            .children
            .iter()
            .map(|child| RcNode(Rc::clone(child)))
            .collect()
    }

    fn node_id(&self) -> RcNodeId {
        self.id()
    }

    fn name(&self) -> Option<String> {
        self.0.borrow().data.name()
    }

    fn identifier(&self) -> Option<String> {
        self.0.borrow().data.identifier()
    }
}
