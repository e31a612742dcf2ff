//! `vec-dlist` is an implementation of a Doubly-Linked-List using an underlying [`Vec`]
//! to store the nodes so as to avoid cache misses during access.
//!
//! `Node`s are linked by their index in the [`Vec`] rather than by pointer, and every
//! `Node` is granted by a [`NodeAlloc`] before the value inside it is constructed. If
//! constructing a value fails, the `Node` is handed back and every `Node` built so far
//! is released before the failure reaches the caller, so a list is never left half
//! built.
//!
//! Author --- daniel.bechaz@gmail.com

use std::{
    alloc::Layout,
    cmp::Ordering,
    fmt::{self, Debug,},
    hash::{Hash, Hasher,},
    mem,
};
use tracing::{debug, trace,};

/// Generates an error message for a refused node allocation.
macro_rules! alloc_err {
    ($fn:tt, $e:expr,) => {
        format!("{}: {}", concat!("`", $fn, "` error allocating node"), $e,)
    };
}

/// Unwraps a node allocation, panicking if the allocator refused it.
macro_rules! granted {
    ($fn:tt, $res:expr,) => {
        match $res {
            Ok(value) => value,
            Err(e) => panic!("{}", alloc_err!($fn, e,)),
        }
    };
}

/// Creates a [`VecList`] containing the arguments, in the same manner as `vec!`.
///
/// ```
/// use vec_dlist::vec_list;
///
/// let list = vec_list![1, 2, 3];
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
///
/// let list = vec_list![7; 3];
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [7, 7, 7]);
/// ```
#[macro_export]
macro_rules! vec_list {
    () => ($crate::VecList::<_>::new());
    ($elem:expr; $n:expr) => ($crate::VecList::<_>::from_elem($n, &$elem,));
    ($($x:expr),+ $(,)?) => ($crate::VecList::<_>::from([$($x),+]));
}

mod nodes;
mod iters;
mod cursors;
mod tests;
pub mod alloc;
pub mod err;

use self::nodes::*;
pub use self::alloc::{NodeAlloc, Global, Budget, Counting,};
pub use self::err::{AllocError, ListError,};
pub use self::nodes::NodeId;
pub use self::iters::{Iter, IterMut, IntoIter,};
pub use self::cursors::{Position, Step, Rev, Cursor, CursorMut,};

/// Hands a granted `Node` back to its allocator unless it is kept.
///
/// This covers the gap between a `Node` being granted and its value existing: if
/// constructing the value fails or panics the grant is returned.
struct Grant<'a, A: NodeAlloc,> {
    alloc: &'a mut A,
    layout: Layout,
}

impl<'a, A: NodeAlloc,> Grant<'a, A,> {
    /// Keep the granted `Node`.
    #[inline]
    fn keep(self,) { mem::forget(self,) }
}

impl<'a, A: NodeAlloc,> Drop for Grant<'a, A,> {
    #[inline]
    fn drop(&mut self,) { self.alloc.deallocate(self.layout,) }
}

/// An implementation of a doubly-linked-list backed by a `Vec` so that it will avoid
/// cache misses during access.
pub struct VecList<T, A: NodeAlloc = Global,> {
    /// The [`Slot`]s holding the [`Node`]s of the [`VecList`].
    nodes: Vec<Slot<T,>,>,
    /// The number of [`Node`]s in the [`VecList`].
    len: usize,
    /// The starting and ending indexes of the linked list in [`nodes`]
    ends: Option<(usize, usize,)>,
    /// A stack of vacant [`Slot`]s not used in the linked list.
    empty: Option<usize,>,
    /// The allocator granting the [`Node`]s.
    alloc: A,
}

impl<T, A: NodeAlloc,> VecList<T, A,> {
    /// The layout of a single [`Node`].
    const NODE: Layout = Layout::new::<Node<T,>>();

    /// Append the `to` to `from`.
    ///
    /// # Params
    ///
    /// from --- The index of the [`Node`](struct.Node.html) to append to.
    /// to --- The index of the [`Node`](struct.Node.html) to append.
    fn append(&mut self, from: usize, to: usize,) {
        debug_assert!(self.nodes[from].node().next.is_none(), "`from` has `next`: {:?}", from,);
        debug_assert!(self.nodes[to].node().prev.is_none(), "`to` has `prev`: {:?}", to,);

        //Append the Nodes.
        self.nodes[from].node_mut().next = Some(to);
        self.nodes[to].node_mut().prev = Some(from);
    }
    /// Allocates a [`Node`], then constructs its value, and returns its index.
    ///
    /// The new [`Node`] is not linked into the list. If the allocation is refused no
    /// value is constructed; if constructing the value fails the [`Node`] is returned to
    /// the allocator.
    ///
    /// # Params
    ///
    /// make --- Constructs the value to populate the [`Node`] with.
    fn new_node_with<E, F,>(&mut self, make: F,) -> Result<usize, E>
        where F: FnOnce() -> Result<T, E>, E: From<AllocError>, {
        //Claim the memory before the value exists.
        if let Err(e) = self.alloc.allocate(Self::NODE,) {
            trace!(len = self.len, error = %e, "node allocation refused",);
            return Err(e.into())
        }

        //Hand the memory back if the value can't be made.
        let grant = Grant { alloc: &mut self.alloc, layout: Self::NODE, };
        let value = make()?;
        grant.keep();

        Ok(self.store(value,))
    }
    /// Places `value` in a vacant [`Slot`] and returns its index.
    ///
    /// # Params
    ///
    /// value --- The value to populate the [`Node`] with.
    fn store(&mut self, value: T,) -> usize {
        //Increase the length.
        self.len += 1;

        match self.empty {
            //There is a vacant `Slot`.
            Some(new) => {
                //Pop the vacant `Slot`.
                self.empty = self.nodes[new].next_empty();
                //Populate the `Slot`.
                self.nodes[new] = Slot::Occupied(Node::new(value,),);

                new
            },
            //There is no vacant `Slot`.
            None => {
                //Get the index of the new `Node`.
                let new = self.nodes.len();

                //Push the new `Node`.
                self.nodes.push(Slot::Occupied(Node::new(value,),),);

                new
            },
        }
    }
    /// Links an unlinked [`Node`] in as the new tail.
    fn link_back(&mut self, new: usize,) {
        self.ends = match self.ends {
            None => Some((new, new,)),
            Some((head, tail,)) => {
                self.append(tail, new,);

                Some((head, new,))
            },
        };
    }
    /// Links an unlinked [`Node`] in as the new head.
    fn link_front(&mut self, new: usize,) {
        self.ends = match self.ends {
            None => Some((new, new,)),
            Some((head, tail,)) => {
                self.append(new, head,);

                Some((new, tail,))
            },
        };
    }
    /// Links an unlinked [`Node`] in directly before `at`.
    fn link_before(&mut self, at: usize, new: usize,) {
        match self.nodes[at].node_mut().prev.take() {
            //`at` is the head.
            None => self.link_front(new,),
            Some(prev) => {
                self.nodes[prev].node_mut().next = None;
                self.append(prev, new,);
                self.append(new, at,);
            },
        }
    }
    /// Links an unlinked [`Node`] in directly after `at`.
    fn link_after(&mut self, at: usize, new: usize,) {
        match self.nodes[at].node_mut().next.take() {
            //`at` is the tail.
            None => self.link_back(new,),
            Some(next) => {
                self.nodes[next].node_mut().prev = None;
                self.append(at, new,);
                self.append(new, next,);
            },
        }
    }
    /// Unlinks the passed [`Node`], releases it and returns its value.
    ///
    /// # Params
    ///
    /// node --- The index of the [`Node`] to remove.
    fn remove_node(&mut self, node: usize,) -> T {
        //Disconnect `node`.
        let (prev, next,) = {
            let node = self.nodes[node].node_mut();

            (node.prev.take(), node.next.take(),)
        };

        //Relink `node`s neighbours.
        if let Some(next) = next { self.nodes[next].node_mut().prev = prev }
        if let Some(prev) = prev { self.nodes[prev].node_mut().next = next }
        //Move the end pointers off of `node`.
        if let Some((head, tail,)) = self.ends {
            self.ends = match (node == head, node == tail,) {
                //`node` is the only `Node`.
                (true, true,) => None,
                (true, false,) => next.map(|next| (next, tail,)),
                (false, true,) => prev.map(|prev| (head, prev,)),
                (false, false,) => Some((head, tail,)),
            };
        }

        //Decrement the `Node` count.
        self.len -= 1;
        //Push the `Slot` onto the empty stack.
        let value = self.nodes[node].vacate(self.empty,);
        self.empty = Some(node);
        //The value has left the `Node` so its memory can be returned.
        self.alloc.deallocate(Self::NODE,);

        value
    }
    /// Builds a list from `items`, allocating each [`Node`] before `make` constructs its
    /// value.
    ///
    /// On failure every [`Node`] built so far is released before the error is returned.
    ///
    /// # Params
    ///
    /// alloc --- The allocator of the new list.
    /// count --- The expected number of items.
    /// items --- The items to construct values from.
    /// make --- Constructs a value from an item.
    fn build<I, E, F,>(alloc: A, count: usize, items: I, mut make: F,) -> Result<Self, E>
        where I: IntoIterator, F: FnMut(I::Item,) -> Result<T, E>, E: From<AllocError>, {
        let mut list = Self::with_capacity_in(count, alloc,);

        for item in items {
            match list.new_node_with(|| make(item),) {
                Ok(new) => list.link_back(new,),
                Err(e) => {
                    debug!(built = list.len, requested = count, "unwinding a partially built list",);
                    //Release everything built so far before reporting the failure.
                    list.clear();

                    return Err(e)
                },
            }
        }

        Ok(list)
    }
    /// Returns the [`NodeId`] of the [`Node`] at `index`.
    #[inline]
    pub(crate) fn id(&self, index: usize,) -> NodeId {
        NodeId::new(index, self.nodes[index].node().stamp,)
    }
    /// Returns a [`Position`] at the [`Node`] at `index`, or the end if `None`.
    #[inline]
    pub(crate) fn position(&self, index: Option<usize>,) -> Position {
        Position::new(
            index.map(|index| self.id(index,)),
            self.ends.map(|(_, tail,)| self.id(tail,)),
        )
    }
    /// Returns the [`Position`] after `at`; the end does not move.
    pub(crate) fn step_next(&self, at: Position,) -> Position {
        match at.node() {
            //Stepping past the end does nothing.
            None => at,
            Some(id) => Position::new(
                self.nodes[id.index()].node().next.map(|next| self.id(next,)),
                at.tail(),
            ),
        }
    }
    /// Returns the [`Position`] before `at`.
    ///
    /// The end steps back to the tail it was made with.
    pub(crate) fn step_prev(&self, at: Position,) -> Result<Position, ListError> {
        let prev = match at.node() {
            None => at.tail(),
            Some(id) => self.nodes[id.index()].node().prev.map(|prev| self.id(prev,)),
        };

        prev.map(|prev| Position::new(Some(prev), at.tail(),))
            .ok_or(ListError::OutOfRange,)
    }
    /// Returns the value at `at`, `None` at the end.
    #[inline]
    pub(crate) fn value(&self, at: Position,) -> Option<&T> {
        at.node().map(|id| &self.nodes[id.index()].node().value)
    }
    /// Returns the value at `at` mutably, `None` at the end.
    #[inline]
    pub(crate) fn value_mut(&mut self, at: Position,) -> Option<&mut T> {
        at.node().map(move |id| &mut self.nodes[id.index()].node_mut().value)
    }
    /// Checks that `at` still names a [`Node`] of this list.
    ///
    /// The returned [`Position`] carries the current tail.
    fn resolve(&self, at: Position,) -> Result<Position, ListError> {
        if let Some(id) = at.node() {
            let live = self.nodes.get(id.index(),)
                .and_then(Slot::get)
                .map_or(false, |node| node.stamp == id.stamp(),);

            if !live {
                debug!(index = id.index(), stamp = id.stamp(), "rejected a stale position",);
                return Err(ListError::StalePosition)
            }
        }

        Ok(self.position(at.node().map(NodeId::index,),))
    }
}

impl<T,> VecList<T,> {
    /// Returns a new empty [`VecList`].
    #[inline]
    pub fn new() -> Self { Self::new_in(Global,) }
    /// Returns a new empty [`VecList`] with room for `capacity` [`Node`](struct.Node.html)s.
    ///
    /// # Params
    ///
    /// capacity --- The number of spaces to allocate.
    #[inline]
    pub fn with_capacity(capacity: usize,) -> Self { Self::with_capacity_in(capacity, Global,) }
    /// Returns a [`VecList`] of `count` copies of `value`.
    ///
    /// # Params
    ///
    /// count --- The number of values.
    /// value --- The value to copy.
    pub fn from_elem(count: usize, value: &T,) -> Self
        where T: Clone, {
        granted!("VecList::from_elem", Self::try_from_elem_in(count, value, Global,),)
    }
    /// Returns a [`VecList`] of `count` default values.
    ///
    /// # Params
    ///
    /// count --- The number of values.
    pub fn with_len(count: usize,) -> Self
        where T: Default, {
        granted!("VecList::with_len", Self::try_with_len_in(count, Global,),)
    }
    /// Returns a [`VecList`] holding copies of the values in `values`, in order.
    ///
    /// # Params
    ///
    /// values --- The values to copy.
    pub fn from_slice(values: &[T],) -> Self
        where T: Clone, {
        granted!("VecList::from_slice", Self::try_from_slice_in(values, Global,),)
    }
}

impl<T, A: NodeAlloc,> VecList<T, A,> {
    /// Returns a new empty [`VecList`] using `alloc`.
    ///
    /// Nothing is allocated.
    #[inline]
    pub fn new_in(alloc: A,) -> Self {
        Self { nodes: Vec::new(), len: 0, ends: None, empty: None, alloc, }
    }
    /// Returns a new empty [`VecList`] using `alloc` with room for `capacity`
    /// [`Node`](struct.Node.html)s.
    ///
    /// # Params
    ///
    /// capacity --- The number of spaces to reserve in the arena.
    /// alloc --- The allocator to grant [`Node`]s.
    #[inline]
    pub fn with_capacity_in(capacity: usize, alloc: A,) -> Self {
        Self { nodes: Vec::with_capacity(capacity,), len: 0, ends: None, empty: None, alloc, }
    }
    /// Builds a [`VecList`] of `count` values, the `i`th value being made by `make(i)`.
    ///
    /// Each [`Node`] is allocated before its value is made. If an allocation is refused
    /// or `make` fails, every [`Node`] built so far is released and the error is
    /// returned; if `make` panics the same release happens while unwinding.
    ///
    /// # Params
    ///
    /// count --- The number of values.
    /// alloc --- The allocator to grant [`Node`]s.
    /// make --- Makes the value for an index.
    pub fn try_from_fn_in<E, F,>(count: usize, alloc: A, make: F,) -> Result<Self, E>
        where F: FnMut(usize,) -> Result<T, E>, E: From<AllocError>, {
        Self::build(alloc, count, 0..count, make,)
    }
    /// Builds a [`VecList`] of `count` copies of `value`.
    ///
    /// # Params
    ///
    /// count --- The number of values.
    /// value --- The value to copy.
    /// alloc --- The allocator to grant [`Node`]s.
    ///
    /// # Errors
    ///
    /// * If the allocator refuses a [`Node`]; every [`Node`] built so far is released.
    pub fn try_from_elem_in(count: usize, value: &T, alloc: A,) -> Result<Self, AllocError>
        where T: Clone, {
        Self::build(alloc, count, 0..count, |_| Ok(value.clone()),)
    }
    /// Builds a [`VecList`] of `count` default values.
    ///
    /// # Params
    ///
    /// count --- The number of values.
    /// alloc --- The allocator to grant [`Node`]s.
    ///
    /// # Errors
    ///
    /// * If the allocator refuses a [`Node`]; every [`Node`] built so far is released.
    pub fn try_with_len_in(count: usize, alloc: A,) -> Result<Self, AllocError>
        where T: Default, {
        Self::build(alloc, count, 0..count, |_| Ok(T::default()),)
    }
    /// Builds a [`VecList`] holding copies of the values in `values`, in order.
    ///
    /// ```
    /// use vec_dlist::{Counting, VecList};
    ///
    /// let alloc = Counting::refusing(3);
    ///
    /// assert!(VecList::try_from_slice_in(&[1, 2, 3, 4], alloc.clone()).is_err());
    /// assert!(alloc.is_balanced());
    /// ```
    ///
    /// # Params
    ///
    /// values --- The values to copy.
    /// alloc --- The allocator to grant [`Node`]s.
    ///
    /// # Errors
    ///
    /// * If the allocator refuses a [`Node`]; every [`Node`] built so far is released.
    pub fn try_from_slice_in(values: &[T], alloc: A,) -> Result<Self, AllocError>
        where T: Clone, {
        Self::build(alloc, values.len(), values, |value| Ok(value.clone()),)
    }
    /// Returns a deep copy of the [`VecList`].
    ///
    /// The copy uses the allocator chosen by [`NodeAlloc::select_on_copy`].
    ///
    /// # Errors
    ///
    /// * If the allocator refuses a [`Node`]; the partial copy is released and `self`
    ///   is untouched.
    pub fn try_clone(&self,) -> Result<Self, AllocError>
        where T: Clone, {
        Self::build(self.alloc.select_on_copy(), self.len, self.iter(), |value| Ok(value.clone()),)
    }
    /// Replaces the contents of the [`VecList`] with a deep copy of `source`.
    ///
    /// The copy is built completely before anything in `self` is released, so if it
    /// fails `self` is left unchanged. The copy uses the allocator of `self`, or that of
    /// `source` if [`NodeAlloc::PROPAGATE_ON_COPY_ASSIGN`] is set.
    ///
    /// # Params
    ///
    /// source --- The list to copy.
    pub fn try_assign_from(&mut self, source: &Self,) -> Result<(), AllocError>
        where T: Clone, {
        let alloc = if A::PROPAGATE_ON_COPY_ASSIGN { source.alloc.clone() }
            else { self.alloc.clone() };
        let mut copy = Self::build(alloc, source.len, source.iter(), |value| Ok(value.clone()),)?;

        //Only now that the copy exists may the old values be released.
        self.clear();
        //Take the copy; the emptied old state is dropped with `copy`.
        mem::swap(self, &mut copy,);

        Ok(())
    }
    /// Reserves space for at least `additional` number of [`Node`](struct.Node.html)s.
    ///
    /// # Params
    ///
    /// additional --- The number of additional spaces to allocate for.
    pub fn reserve(&mut self, mut additional: usize,) {
        //The stack of vacant `Slot`s.
        let mut empty = self.empty;

        //Vacant `Slot`s will be reused before the arena grows.
        while let Some(slot) = empty {
            if additional == 0 { return }

            additional -= 1;
            empty = self.nodes[slot].next_empty();
        }

        //Reserve the necessary spaces.
        self.nodes.reserve(additional,)
    }
    /// Releases every value, tail first, returning each [`Node`] to the allocator.
    pub fn clear(&mut self,) {
        //Release from the tail back to the head.
        while self.pop_back().is_some() {}

        //Every `Slot` is vacant now.
        self.nodes.clear();
        self.empty = None;
    }
    /// Returns the number of values in this [`VecList`].
    #[inline]
    pub const fn len(&self,) -> usize { self.len }
    /// `true` if this [`VecList`] is empty.
    #[inline]
    pub const fn is_empty(&self,) -> bool { self.len() == 0 }
    /// Returns the number of spaces in the arena of this [`VecList`].
    #[inline]
    pub fn capacity(&self,) -> usize { self.nodes.capacity() }
    /// Returns a reference to the allocator.
    #[inline]
    pub const fn allocator(&self,) -> &A { &self.alloc }
    /// Returns a copy of the allocator.
    #[inline]
    pub fn get_allocator(&self,) -> A { self.alloc.clone() }
    /// Returns the first value.
    #[inline]
    pub fn front(&self,) -> Option<&T,> {
        self.ends.map(|(head, _,)| &self.nodes[head].node().value)
    }
    /// Returns the first value.
    #[inline]
    pub fn front_mut(&mut self,) -> Option<&mut T,> {
        self.ends.map(move |(head, _,)| &mut self.nodes[head].node_mut().value)
    }
    /// Returns the last value.
    #[inline]
    pub fn back(&self,) -> Option<&T,> {
        self.ends.map(|(_, tail,)| &self.nodes[tail].node().value)
    }
    /// Returns the last value.
    #[inline]
    pub fn back_mut(&mut self,) -> Option<&mut T,> {
        self.ends.map(move |(_, tail,)| &mut self.nodes[tail].node_mut().value)
    }
    /// Returns the first value, or [`ListError::Empty`].
    #[inline]
    pub fn try_front(&self,) -> Result<&T, ListError> { self.front().ok_or(ListError::Empty,) }
    /// Returns the last value, or [`ListError::Empty`].
    #[inline]
    pub fn try_back(&self,) -> Result<&T, ListError> { self.back().ok_or(ListError::Empty,) }
    /// Pushes a value onto the front of the [`VecList`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    ///
    /// # Panics
    ///
    /// * If the allocator refuses the [`Node`].
    pub fn push_front(&mut self, value: T,) {
        granted!("VecList::push_front", self.try_push_front(value,),)
    }
    /// Pushes a value onto the front of the [`VecList`], or returns the refusal of the
    /// allocator.
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    pub fn try_push_front(&mut self, value: T,) -> Result<(), AllocError> {
        let new = self.new_node_with(move || Ok::<_, AllocError>(value),)?;

        self.link_front(new,);
        Ok(())
    }
    /// Pops the first value off the front of the [`VecList`].
    pub fn pop_front(&mut self,) -> Option<T,> {
        let (head, _,) = self.ends?;

        Some(self.remove_node(head,))
    }
    /// Pushes a value onto the back of the [`VecList`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    ///
    /// # Panics
    ///
    /// * If the allocator refuses the [`Node`].
    pub fn push_back(&mut self, value: T,) {
        granted!("VecList::push_back", self.try_push_back(value,),)
    }
    /// Pushes a value onto the back of the [`VecList`], or returns the refusal of the
    /// allocator.
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    pub fn try_push_back(&mut self, value: T,) -> Result<(), AllocError> {
        let new = self.new_node_with(move || Ok::<_, AllocError>(value),)?;

        self.link_back(new,);
        Ok(())
    }
    /// Pops the last value off the back of the [`VecList`].
    pub fn pop_back(&mut self,) -> Option<T,> {
        let (_, tail,) = self.ends?;

        Some(self.remove_node(tail,))
    }
    /// Removes all values that don't pass the `pred` filter.
    ///
    /// # Params
    ///
    /// pred --- The filter function values need to pass to be retained.
    pub fn retain(&mut self, mut pred: impl FnMut(&T) -> bool,) {
        let mut at = self.ends.map(|(head, _,)| head);

        while let Some(index) = at {
            let node = self.nodes[index].node();

            at = node.next;
            if !pred(&node.value) { self.remove_node(index,); }
        }
    }
    /// Returns `true` if the `x` is found in the [`VecList`].
    ///
    /// # Params
    ///
    /// x --- The value to search for.
    pub fn contains(&self, x: &T,) -> bool
        where T: PartialEq, {
        self.iter().any(|y| x == y)
    }
    /// Returns an iterator over all values in the [`VecList`].
    #[inline]
    pub fn iter(&self,) -> Iter<'_, T,> {
        iters::new_iter(&self.nodes, self.ends, self.len,)
    }
    /// Returns a mutable iterator over all values in the [`VecList`].
    #[inline]
    pub fn iter_mut(&mut self,) -> IterMut<'_, T,> {
        iters::new_iter_mut(&mut self.nodes, self.ends, self.len,)
    }
    /// Returns a [`Cursor`] at the first value.
    #[inline]
    pub fn begin(&self,) -> Cursor<'_, T, A,> {
        cursors::new_cursor(self, self.position(self.ends.map(|(head, _,)| head),),)
    }
    /// Returns a [`Cursor`] one past the last value.
    #[inline]
    pub fn end(&self,) -> Cursor<'_, T, A,> {
        cursors::new_cursor(self, self.position(None,),)
    }
    /// Returns a [`Cursor`] at the first value; the same as [`VecList::begin`].
    #[inline]
    pub fn cbegin(&self,) -> Cursor<'_, T, A,> { self.begin() }
    /// Returns a [`Cursor`] one past the last value; the same as [`VecList::end`].
    #[inline]
    pub fn cend(&self,) -> Cursor<'_, T, A,> { self.end() }
    /// Returns a reversed [`Cursor`] at the last value.
    #[inline]
    pub fn rbegin(&self,) -> Rev<Cursor<'_, T, A,>,> { Rev::new(self.end(),) }
    /// Returns a reversed [`Cursor`] one before the first value.
    #[inline]
    pub fn rend(&self,) -> Rev<Cursor<'_, T, A,>,> { Rev::new(self.begin(),) }
    /// Returns a [`CursorMut`] at the first value.
    #[inline]
    pub fn begin_mut(&mut self,) -> CursorMut<'_, T, A,> {
        let at = self.position(self.ends.map(|(head, _,)| head),);

        cursors::new_cursor_mut(self, at,)
    }
    /// Returns a [`CursorMut`] one past the last value.
    #[inline]
    pub fn end_mut(&mut self,) -> CursorMut<'_, T, A,> {
        let at = self.position(None,);

        cursors::new_cursor_mut(self, at,)
    }
    /// Returns a reversed [`CursorMut`] at the last value.
    #[inline]
    pub fn rbegin_mut(&mut self,) -> Rev<CursorMut<'_, T, A,>,> { Rev::new(self.end_mut(),) }
    /// Returns a reversed [`CursorMut`] one before the first value.
    #[inline]
    pub fn rend_mut(&mut self,) -> Rev<CursorMut<'_, T, A,>,> { Rev::new(self.begin_mut(),) }
    /// Returns a [`Cursor`] at a previously taken [`Position`].
    ///
    /// # Params
    ///
    /// at --- The position to return to.
    ///
    /// # Errors
    ///
    /// * [`ListError::StalePosition`] if the value at `at` has been removed.
    pub fn cursor_at(&self, at: Position,) -> Result<Cursor<'_, T, A,>, ListError> {
        let at = self.resolve(at,)?;

        Ok(cursors::new_cursor(self, at,))
    }
    /// Returns a [`CursorMut`] at a previously taken [`Position`].
    ///
    /// # Params
    ///
    /// at --- The position to return to.
    ///
    /// # Errors
    ///
    /// * [`ListError::StalePosition`] if the value at `at` has been removed.
    pub fn cursor_mut_at(&mut self, at: Position,) -> Result<CursorMut<'_, T, A,>, ListError> {
        let at = self.resolve(at,)?;

        Ok(cursors::new_cursor_mut(self, at,))
    }
    /// Returns the value at a previously taken [`Position`].
    ///
    /// # Errors
    ///
    /// * [`ListError::StalePosition`] if the value at `at` has been removed.
    /// * [`ListError::OutOfRange`] if `at` is the end.
    pub fn get_at(&self, at: Position,) -> Result<&T, ListError> {
        let at = self.resolve(at,)?;

        self.value(at,).ok_or(ListError::OutOfRange,)
    }
    /// Returns the value at a previously taken [`Position`] mutably.
    ///
    /// # Errors
    ///
    /// * [`ListError::StalePosition`] if the value at `at` has been removed.
    /// * [`ListError::OutOfRange`] if `at` is the end.
    pub fn get_mut_at(&mut self, at: Position,) -> Result<&mut T, ListError> {
        let at = self.resolve(at,)?;

        self.value_mut(at,).ok_or(ListError::OutOfRange,)
    }
}

impl<T: Clone, A: NodeAlloc,> Clone for VecList<T, A,> {
    /// # Panics
    ///
    /// * If the allocator refuses a [`Node`]; nothing is leaked.
    fn clone(&self,) -> Self { granted!("VecList::clone", self.try_clone(),) }
    /// # Panics
    ///
    /// * If the allocator refuses a [`Node`]; `self` is left unchanged.
    fn clone_from(&mut self, source: &Self,) {
        granted!("VecList::clone_from", self.try_assign_from(source,),)
    }
}

impl<T, A: NodeAlloc + Default,> Default for VecList<T, A,> {
    #[inline]
    fn default() -> Self { Self::new_in(A::default(),) }
}

impl<T, A: NodeAlloc,> Extend<T,> for VecList<T, A,> {
    fn extend<I,>(&mut self, iter: I,)
        where I: IntoIterator<Item = T>, {
        iter.into_iter().for_each(|item| self.push_back(item,))
    }
}

impl<'a, T: 'a + Copy, A: NodeAlloc,> Extend<&'a T,> for VecList<T, A,> {
    fn extend<I,>(&mut self, iter: I,)
        where I: IntoIterator<Item = &'a T>, {
        iter.into_iter().for_each(|&item| self.push_back(item,))
    }
}

impl<T,> FromIterator<T,> for VecList<T,> {
    fn from_iter<I,>(iter: I,) -> Self
        where I: IntoIterator<Item = T>, {
        let mut list = VecList::new();

        list.extend(iter,); list
    }
}

impl<T, const N: usize,> From<[T; N]> for VecList<T,> {
    fn from(values: [T; N],) -> Self {
        let mut list = VecList::with_capacity(N,);

        list.extend(values,); list
    }
}

impl<T: Clone,> From<&[T]> for VecList<T,> {
    #[inline]
    fn from(values: &[T],) -> Self { Self::from_slice(values,) }
}

impl<T, A: NodeAlloc,> IntoIterator for VecList<T, A,> {
    type Item = T;
    type IntoIter = IntoIter<T, A,>;

    #[inline]
    fn into_iter(self,) -> Self::IntoIter { iters::new_into_iter(self,) }
}

impl<'t, T, A: NodeAlloc,> IntoIterator for &'t VecList<T, A,> {
    type Item = &'t T;
    type IntoIter = Iter<'t, T,>;

    #[inline]
    fn into_iter(self,) -> Self::IntoIter { self.iter() }
}

impl<'t, T, A: NodeAlloc,> IntoIterator for &'t mut VecList<T, A,> {
    type Item = &'t mut T;
    type IntoIter = IterMut<'t, T,>;

    #[inline]
    fn into_iter(self,) -> Self::IntoIter { self.iter_mut() }
}

impl<T: PartialEq, A: NodeAlloc, B: NodeAlloc,> PartialEq<VecList<T, B,>> for VecList<T, A,> {
    fn eq(&self, rhs: &VecList<T, B,>,) -> bool {
        self.len() == rhs.len() && self.iter().eq(rhs.iter(),)
    }
}

impl<T: Eq, A: NodeAlloc,> Eq for VecList<T, A,> {}

impl<T: PartialOrd, A: NodeAlloc,> PartialOrd for VecList<T, A,> {
    fn partial_cmp(&self, rhs: &Self,) -> Option<Ordering,> {
        self.iter().partial_cmp(rhs.iter(),)
    }
}

impl<T: Ord, A: NodeAlloc,> Ord for VecList<T, A,> {
    fn cmp(&self, rhs: &Self,) -> Ordering {
        self.iter().cmp(rhs.iter(),)
    }
}

impl<T: Hash, A: NodeAlloc,> Hash for VecList<T, A,> {
    fn hash<H: Hasher,>(&self, state: &mut H,) {
        self.len().hash(state,);
        self.iter().for_each(|value| value.hash(state,))
    }
}

impl<T: Debug, A: NodeAlloc,> Debug for VecList<T, A,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_list().entries(self.iter(),).finish()
    }
}

impl<T, A: NodeAlloc,> Drop for VecList<T, A,> {
    #[inline]
    fn drop(&mut self,) { self.clear() }
}
