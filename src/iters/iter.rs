use crate::nodes::Slot;
use std::iter::*;

#[inline]
pub(crate) const fn new_iter<'t, T: 't,>(nodes: &'t [Slot<T,>], ends: Option<(usize, usize,)>, len: usize,) -> Iter<'t, T,> {
    Iter { nodes, ends, len, }
}

/// An iterator over the values of a `VecList`.
pub struct Iter<'t, T: 't,> {
    /// The arena of the `VecList`.
    nodes: &'t [Slot<T,>],
    /// The ends still to be visited.
    ends: Option<(usize, usize,)>,
    /// The number of values still to be visited.
    len: usize,
}

impl<'t, T: 't,> Clone for Iter<'t, T,> {
    #[inline]
    fn clone(&self,) -> Self { Iter { ..*self } }
}

impl<'t, T: 't,> Iterator for Iter<'t, T,> {
    type Item = &'t T;

    fn next(&mut self) -> Option<Self::Item,> {
        let (node, tail,) = self.ends?;
        let nodes = self.nodes;
        let node_ref = nodes[node].node();

        self.ends = if node == tail { None }
            else { node_ref.next.map(|next| (next, tail,)) };
        self.len -= 1;

        Some(&node_ref.value)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) { (self.len, Some(self.len),) }
}

impl<'t, T: 't,> DoubleEndedIterator for Iter<'t, T,> {
    fn next_back(&mut self) -> Option<Self::Item,> {
        let (head, node,) = self.ends?;
        let nodes = self.nodes;
        let node_ref = nodes[node].node();

        self.ends = if node == head { None }
            else { node_ref.prev.map(|prev| (head, prev,)) };
        self.len -= 1;

        Some(&node_ref.value)
    }
}

impl<'t, T: 't,> ExactSizeIterator for Iter<'t, T,> {}

impl<'t, T: 't,> FusedIterator for Iter<'t, T,> {}
