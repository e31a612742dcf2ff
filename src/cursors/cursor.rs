use crate::{VecList, NodeAlloc, Global, ListError,};
use super::{Position, Step,};
use std::fmt::{self, Debug,};

#[inline]
pub(crate) fn new_cursor<'t, T, A: NodeAlloc,>(list: &'t VecList<T, A,>, at: Position,) -> Cursor<'t, T, A,> {
    Cursor { list, at, }
}

/// A read-only cursor into a `VecList`.
///
/// Cursors compare equal when they point at the same value.
pub struct Cursor<'t, T, A: NodeAlloc = Global,> {
    list: &'t VecList<T, A,>,
    at: Position,
}

impl<'t, T, A: NodeAlloc,> Cursor<'t, T, A,> {
    /// The current position; it can outlive the cursor.
    #[inline]
    pub fn position(&self,) -> Position { self.at }
    /// `true` if the cursor is one past the last value.
    #[inline]
    pub fn is_end(&self,) -> bool { self.at.is_end() }
    /// The value under the cursor, `None` at the end.
    #[inline]
    pub fn get(&self,) -> Option<&'t T> { self.list.value(self.at,) }
    /// The value before the cursor, `None` if there isn't one.
    pub fn peek_prev(&self,) -> Option<&'t T> {
        self.list.step_prev(self.at,).ok()
            .and_then(|at| self.list.value(at,))
    }
    /// Steps toward the back; at the end this does nothing.
    #[inline]
    pub fn move_next(&mut self,) { self.at = self.list.step_next(self.at,) }
    /// Steps toward the front; the end steps back onto the last value.
    ///
    /// # Errors
    ///
    /// * [`ListError::OutOfRange`] at the first value, or at the end of an empty list.
    ///   The cursor does not move.
    pub fn move_prev(&mut self,) -> Result<(), ListError> {
        self.at = self.list.step_prev(self.at,)?;

        Ok(())
    }
    /// Steps toward the back and returns the cursor from before the step.
    pub fn post_next(&mut self,) -> Self {
        let old = *self;

        self.move_next(); old
    }
    /// Steps toward the front and returns the cursor from before the step.
    pub fn post_prev(&mut self,) -> Result<Self, ListError> {
        let old = *self;

        self.move_prev()?; Ok(old)
    }
}

impl<'t, T, A: NodeAlloc,> Step for Cursor<'t, T, A,> {
    #[inline]
    fn position(&self,) -> Position { self.at }
    #[inline]
    fn step_next(&mut self,) -> Result<(), ListError> { self.move_next(); Ok(()) }
    #[inline]
    fn step_prev(&mut self,) -> Result<(), ListError> { self.move_prev() }
}

impl<'t, T, A: NodeAlloc,> super::Rev<Cursor<'t, T, A,>,> {
    /// The value before the base cursor, `None` at the reversed end.
    #[inline]
    pub fn get(&self,) -> Option<&'t T> { self.base().peek_prev() }
}

impl<'t, T, A: NodeAlloc,> Clone for Cursor<'t, T, A,> {
    #[inline]
    fn clone(&self,) -> Self { *self }
}

impl<'t, T, A: NodeAlloc,> Copy for Cursor<'t, T, A,> {}

impl<'t, T, A: NodeAlloc,> PartialEq for Cursor<'t, T, A,> {
    #[inline]
    fn eq(&self, rhs: &Self,) -> bool { self.at == rhs.at }
}

impl<'t, T, A: NodeAlloc,> Eq for Cursor<'t, T, A,> {}

impl<'t, T, A: NodeAlloc,> Debug for Cursor<'t, T, A,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_struct("Cursor",).field("at", &self.at,).finish()
    }
}
