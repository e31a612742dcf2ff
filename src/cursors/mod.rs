//! Positions in a `VecList` which step in both directions.
//!
//! A [`Position`] is the pair of the `Node` it points at (`None` for one past the tail)
//! and the tail it was taken with, so that the end can step back onto the last value.

mod cursor;
mod cursor_mut;

pub use self::{cursor::*, cursor_mut::*,};
pub(crate) use self::{cursor::new_cursor, cursor_mut::new_cursor_mut,};
use crate::{nodes::NodeId, ListError,};
use std::hash::{Hash, Hasher,};

/// A place in a `VecList`: a value, or one past the last value.
///
/// Two positions are equal if they point at the same `Node`; the tail they carry is not
/// compared.
#[derive(Clone, Copy, Debug, Eq,)]
pub struct Position {
    /// The `Node` pointed at, `None` at the end.
    node: Option<NodeId>,
    /// The tail when the position was taken.
    tail: Option<NodeId>,
}

impl Position {
    #[inline]
    pub(crate) const fn new(node: Option<NodeId>, tail: Option<NodeId>,) -> Self {
        Self { node, tail, }
    }
    /// The `Node` pointed at, `None` at the end.
    #[inline]
    pub const fn node(&self,) -> Option<NodeId> { self.node }
    /// The tail the position steps back onto from the end.
    #[inline]
    pub const fn tail(&self,) -> Option<NodeId> { self.tail }
    /// `true` if this is the position one past the last value.
    #[inline]
    pub const fn is_end(&self,) -> bool { self.node.is_none() }
}

impl PartialEq for Position {
    #[inline]
    fn eq(&self, rhs: &Self,) -> bool { self.node == rhs.node }
}

impl Hash for Position {
    #[inline]
    fn hash<H: Hasher,>(&self, state: &mut H,) { self.node.hash(state,) }
}

/// A cursor which can step in both directions.
pub trait Step {
    /// The current position.
    fn position(&self,) -> Position;
    /// Steps toward the back.
    fn step_next(&mut self,) -> Result<(), ListError>;
    /// Steps toward the front.
    fn step_prev(&mut self,) -> Result<(), ListError>;
}

/// Adapts a cursor to step in the opposite direction.
///
/// Like a standard reverse adapter, a [`Rev`] reads the value *before* its base, so the
/// reverse of the end is the last value and the reverse of the first value is the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq,)]
pub struct Rev<C,> {
    base: C,
}

impl<C: Step,> Rev<C,> {
    /// Wraps `base`.
    #[inline]
    pub const fn new(base: C,) -> Self { Self { base, } }
    /// The underlying cursor.
    #[inline]
    pub const fn base(&self,) -> &C { &self.base }
    #[inline]
    pub(crate) fn base_mut(&mut self,) -> &mut C { &mut self.base }
    /// Unwraps the underlying cursor.
    #[inline]
    pub fn into_base(self,) -> C { self.base }
    /// Steps toward the front of the list.
    #[inline]
    pub fn move_next(&mut self,) -> Result<(), ListError> { self.base.step_prev() }
    /// Steps toward the back of the list.
    #[inline]
    pub fn move_prev(&mut self,) -> Result<(), ListError> { self.base.step_next() }
}

impl<C: Step,> Step for Rev<C,> {
    #[inline]
    fn position(&self,) -> Position { self.base.position() }
    #[inline]
    fn step_next(&mut self,) -> Result<(), ListError> { self.base.step_prev() }
    #[inline]
    fn step_prev(&mut self,) -> Result<(), ListError> { self.base.step_next() }
}
