use std::{
    mem,
    sync::atomic::{AtomicU64, Ordering,},
};

/// The panic message for a broken link between `Node`s.
macro_rules! node_err {
    () => (format!("VecList nodes not maintained: at {} {}:{}", file!(), line!(), column!(),))
}

/// The source of every `Node`s stamp.
///
/// Stamps are never reused, so a [`NodeId`] can never name a `Node` other than the one
/// it was made from, even across lists.
static STAMPS: AtomicU64 = AtomicU64::new(0,);

#[inline]
fn next_stamp() -> u64 { STAMPS.fetch_add(1, Ordering::Relaxed,) }

/// A node in a doubly linked list.
pub(crate) struct Node<T,> {
    /// The value inside this [`Node`].
    pub value: T,
    /// The index of the previous [`Node`].
    pub prev: Option<usize>,
    /// The index of the next [`Node`].
    pub next: Option<usize>,
    /// The unique stamp given to this [`Node`] when it was created.
    pub stamp: u64,
}

impl<T,> Node<T,> {
    /// Create a new, unlinked [`Node`].
    ///
    /// # Params
    ///
    /// value --- The value to populate the [`Node`] with.
    #[inline]
    pub fn new(value: T,) -> Self {
        Self { value, prev: None, next: None, stamp: next_stamp(), }
    }
}

/// A space in the arena of a `VecList`.
pub(crate) enum Slot<T,> {
    /// A live [`Node`].
    Occupied(Node<T,>),
    /// An empty space, linked into the stack of empty spaces.
    Vacant(Option<usize>),
}

impl<T,> Slot<T,> {
    /// Get the [`Node`] in this [`Slot`], if any.
    #[inline]
    pub fn get(&self,) -> Option<&Node<T,>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant(_) => None,
        }
    }
    /// Get the [`Node`] in this [`Slot`].
    ///
    /// # Panics
    ///
    /// * If the [`Slot`] is vacant.
    #[inline]
    pub fn node(&self,) -> &Node<T,> {
        match self {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("{}", node_err!()),
        }
    }
    /// Get the [`Node`] in this [`Slot`] mutably.
    ///
    /// # Panics
    ///
    /// * If the [`Slot`] is vacant.
    #[inline]
    pub fn node_mut(&mut self,) -> &mut Node<T,> {
        match self {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("{}", node_err!()),
        }
    }
    /// Get the next empty [`Slot`] on the stack.
    ///
    /// # Panics
    ///
    /// * If the [`Slot`] is occupied.
    #[inline]
    pub fn next_empty(&self,) -> Option<usize> {
        match self {
            Slot::Vacant(next) => *next,
            Slot::Occupied(_) => panic!("{}", node_err!()),
        }
    }
    /// Empties this [`Slot`], pushing it onto the stack of empty spaces, and returns the
    /// value it held.
    ///
    /// # Params
    ///
    /// next --- The previous head of the stack of empty spaces.
    ///
    /// # Panics
    ///
    /// * If the [`Slot`] is already vacant.
    pub fn vacate(&mut self, next: Option<usize>,) -> T {
        match mem::replace(self, Slot::Vacant(next),) {
            Slot::Occupied(node) => node.value,
            Slot::Vacant(_) => panic!("{}", node_err!()),
        }
    }
}

/// A handle naming one `Node` of a `VecList`.
///
/// The handle stops resolving once the `Node` it names is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash,)]
pub struct NodeId {
    index: usize,
    stamp: u64,
}

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: usize, stamp: u64,) -> Self { Self { index, stamp, } }
    /// The position of the `Node` in the arena.
    #[inline]
    pub const fn index(self,) -> usize { self.index }
    /// The stamp the `Node` was created with.
    #[inline]
    pub const fn stamp(self,) -> u64 { self.stamp }
}
