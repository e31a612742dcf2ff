use crate::{VecList, NodeAlloc,};
use std::iter::*;

#[inline]
pub(crate) fn new_into_iter<T, A: NodeAlloc,>(list: VecList<T, A,>,) -> IntoIter<T, A,> {
    IntoIter { list, }
}

/// An owning iterator which pops the values of a `VecList` off its ends.
///
/// Values not iterated are released when the iterator is dropped.
pub struct IntoIter<T, A: NodeAlloc,> {
    list: VecList<T, A,>,
}

impl<T, A: NodeAlloc,> Iterator for IntoIter<T, A,> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item,> { self.list.pop_front() }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) { (self.list.len(), Some(self.list.len()),) }
}

impl<T, A: NodeAlloc,> DoubleEndedIterator for IntoIter<T, A,> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item,> { self.list.pop_back() }
}

impl<T, A: NodeAlloc,> ExactSizeIterator for IntoIter<T, A,> {}

impl<T, A: NodeAlloc,> FusedIterator for IntoIter<T, A,> {}
