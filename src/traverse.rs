//! Lazy, non-recursive traversals over any [`SimpleTree`].
//!
//! Each iterator starts at the node it was created from and yields that node
//! first (pre-order, level-order) or last (post-order). None of them detect
//! cycles.

use std::collections::VecDeque;

use tracing::instrument;

use crate::simple_tree::SimpleTree;

/// Depth-first, parents before children, children left to right.
pub struct PreOrder<N> {
    stack: Vec<N>,
}

impl<N: SimpleTree> PreOrder<N> {
    pub fn new(start: N) -> Self {
        Self { stack: vec![start] }
    }
}

impl<N: SimpleTree> Iterator for PreOrder<N> {
    type Item = N;

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(current.children().into_iter().rev());
        Some(current)
    }
}

/// Depth-first, children before parents.
pub struct PostOrder<N> {
    stack: Vec<(N, bool)>,
}

impl<N: SimpleTree> PostOrder<N> {
    pub fn new(start: N) -> Self {
        Self {
            stack: vec![(start, false)],
        }
    }
}

impl<N: SimpleTree> Iterator for PostOrder<N> {
    type Item = N;

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if visited {
                return Some(current);
            }
            let children = current.children();
            self.stack.push((current, true));
            for child in children.into_iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

/// Breadth-first: one generation at a time.
pub struct LevelOrder<N> {
    queue: VecDeque<N>,
}

impl<N: SimpleTree> LevelOrder<N> {
    pub fn new(start: N) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(start);
        Self { queue }
    }
}

impl<N: SimpleTree> Iterator for LevelOrder<N> {
    type Item = N;

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        self.queue.extend(current.children());
        Some(current)
    }
}
