use crate::{VecList, NodeAlloc, Global, ListError, AllocError, NodeId,};
use super::{Position, Step, Rev, Cursor,};
use std::fmt::{self, Debug,};

#[inline]
pub(crate) fn new_cursor_mut<'t, T, A: NodeAlloc,>(list: &'t mut VecList<T, A,>, at: Position,) -> CursorMut<'t, T, A,> {
    CursorMut { list, at, }
}

/// A cursor into a `VecList` which can change the values under it and insert or remove
/// values around it.
pub struct CursorMut<'t, T, A: NodeAlloc = Global,> {
    list: &'t mut VecList<T, A,>,
    at: Position,
}

impl<'t, T, A: NodeAlloc,> CursorMut<'t, T, A,> {
    /// Retakes the position so that it carries the current tail.
    #[inline]
    fn refresh(&mut self,) {
        self.at = self.list.position(self.at.node().map(NodeId::index,),);
    }
    /// The current position; it can outlive the cursor.
    #[inline]
    pub fn position(&self,) -> Position { self.at }
    /// `true` if the cursor is one past the last value.
    #[inline]
    pub fn is_end(&self,) -> bool { self.at.is_end() }
    /// A read-only cursor at the same position.
    #[inline]
    pub fn as_cursor(&self,) -> Cursor<'_, T, A,> { super::new_cursor(&*self.list, self.at,) }
    /// The value under the cursor, `None` at the end.
    #[inline]
    pub fn get(&self,) -> Option<&T> { self.list.value(self.at,) }
    /// The value under the cursor, `None` at the end.
    #[inline]
    pub fn get_mut(&mut self,) -> Option<&mut T> { self.list.value_mut(self.at,) }
    /// Consumes the cursor, returning the value under it for the life of the borrow.
    #[inline]
    pub fn into_mut(self,) -> Option<&'t mut T> {
        let Self { list, at, } = self;

        list.value_mut(at,)
    }
    /// The value before the cursor, `None` if there isn't one.
    pub fn peek_prev(&self,) -> Option<&T> {
        self.list.step_prev(self.at,).ok()
            .and_then(|at| self.list.value(at,))
    }
    /// The value before the cursor, `None` if there isn't one.
    pub fn peek_prev_mut(&mut self,) -> Option<&mut T> {
        let at = self.list.step_prev(self.at,).ok()?;

        self.list.value_mut(at,)
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
    /// Steps toward the back and returns the position from before the step.
    ///
    /// The value under the cursor is not touched.
    pub fn post_next(&mut self,) -> Position {
        let old = self.at;

        self.move_next(); old
    }
    /// Steps toward the front and returns the position from before the step.
    ///
    /// The value under the cursor is not touched.
    pub fn post_prev(&mut self,) -> Result<Position, ListError> {
        let old = self.at;

        self.move_prev()?; Ok(old)
    }
    /// Inserts a value before the cursor; at the end the value becomes the new tail.
    ///
    /// The cursor stays where it is.
    ///
    /// # Params
    ///
    /// value --- The value to insert.
    pub fn insert_before(&mut self, value: T,) -> Result<(), AllocError> {
        let new = self.list.new_node_with(move || Ok::<_, AllocError>(value),)?;

        match self.at.node() {
            None => self.list.link_back(new,),
            Some(at) => self.list.link_before(at.index(), new,),
        }

        self.refresh(); Ok(())
    }
    /// Inserts a value after the cursor; at the end the value becomes the new head.
    ///
    /// The cursor stays where it is.
    ///
    /// # Params
    ///
    /// value --- The value to insert.
    pub fn insert_after(&mut self, value: T,) -> Result<(), AllocError> {
        let new = self.list.new_node_with(move || Ok::<_, AllocError>(value),)?;

        match self.at.node() {
            None => self.list.link_front(new,),
            Some(at) => self.list.link_after(at.index(), new,),
        }

        self.refresh(); Ok(())
    }
    /// Removes the value under the cursor and moves onto the value after it.
    ///
    /// Returns `None` at the end.
    pub fn remove_current(&mut self,) -> Option<T> {
        let at = self.at.node()?;
        let next = self.list.step_next(self.at,);
        let value = self.list.remove_node(at.index(),);

        self.at = next;
        self.refresh();

        Some(value)
    }
}

impl<'t, T, A: NodeAlloc,> Step for CursorMut<'t, T, A,> {
    #[inline]
    fn position(&self,) -> Position { self.at }
    #[inline]
    fn step_next(&mut self,) -> Result<(), ListError> { self.move_next(); Ok(()) }
    #[inline]
    fn step_prev(&mut self,) -> Result<(), ListError> { self.move_prev() }
}

impl<'t, T, A: NodeAlloc,> Rev<CursorMut<'t, T, A,>,> {
    /// The value before the base cursor, `None` at the reversed end.
    #[inline]
    pub fn get(&self,) -> Option<&T> { self.base().peek_prev() }
    /// The value before the base cursor, `None` at the reversed end.
    #[inline]
    pub fn get_mut(&mut self,) -> Option<&mut T> { self.base_mut().peek_prev_mut() }
}

impl<'t, T, A: NodeAlloc,> Debug for CursorMut<'t, T, A,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_struct("CursorMut",).field("at", &self.at,).finish()
    }
}
