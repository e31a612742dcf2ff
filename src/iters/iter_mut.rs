use crate::nodes::Slot;
use std::{iter::*, marker::PhantomData,};

/// Creates a new `IterMut` from parts.
///
/// # Params
///
/// nodes --- The arena of the `VecList` to iterate over.  
/// ends --- The ends of the `VecList` to iterate over.  
/// len --- The number of values between the ends.
#[inline]
pub(crate) fn new_iter_mut<'t, T: 't,>(nodes: &'t mut [Slot<T,>], ends: Option<(usize, usize,)>, len: usize,) -> IterMut<'t, T,> {
    IterMut { nodes: nodes.as_mut_ptr(), ends, len, marker: PhantomData, }
}

/// A mutable iterator over a `VecList`.
pub struct IterMut<'t, T: 't,> {
    /// The arena of the `VecList` to iterate over.
    nodes: *mut Slot<T,>,
    /// The ends to iterate over.
    ends: Option<(usize, usize,)>,
    /// The number of values still to be visited.
    len: usize,
    marker: PhantomData<&'t mut Slot<T,>>,
}

unsafe impl<'t, T: 't + Send,> Send for IterMut<'t, T,> {}

unsafe impl<'t, T: 't + Sync,> Sync for IterMut<'t, T,> {}

impl<'t, T: 't,> IterMut<'t, T,> {
    /// Borrows the `Slot` at `index` for the life of the iterator.
    ///
    /// # Safety
    ///
    /// Each index must be borrowed at most once, and must be in bounds.
    #[inline]
    unsafe fn slot(&mut self, index: usize,) -> &'t mut Slot<T,> { &mut *self.nodes.add(index,) }
}

impl<'t, T: 't,> Iterator for IterMut<'t, T,> {
    type Item = &'t mut T;

    fn next(&mut self) -> Option<Self::Item,> {
        let (node, tail,) = self.ends?;
        //SAFETY: the ends only ever shrink so `node` is never visited twice; `node` is
        //  linked so it is in bounds.
        let node_ref = unsafe { self.slot(node,) }.node_mut();

        //Advance the ends.
        //  If the `Node` is the tail pointer while iterating forward, this is the last value.
        self.ends = if node == tail { None }
            else { node_ref.next.map(|next| (next, tail,)) };
        self.len -= 1;

        Some(&mut node_ref.value)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) { (self.len, Some(self.len),) }
}

impl<'t, T: 't,> DoubleEndedIterator for IterMut<'t, T,> {
    fn next_back(&mut self) -> Option<Self::Item,> {
        let (head, node,) = self.ends?;
        //SAFETY: as in `next`.
        let node_ref = unsafe { self.slot(node,) }.node_mut();

        //Advance the ends.
        //  If the `Node` is the head pointer while iterating backward, this is the last value.
        self.ends = if node == head { None }
            else { node_ref.prev.map(|prev| (head, prev,)) };
        self.len -= 1;

        Some(&mut node_ref.value)
    }
}

impl<'t, T: 't,> ExactSizeIterator for IterMut<'t, T,> {}

impl<'t, T: 't,> FusedIterator for IterMut<'t, T,> {}
