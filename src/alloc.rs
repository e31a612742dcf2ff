//! The allocators which grant a [`VecList`](crate::VecList) its `Node`s.
//!
//! A [`VecList`](crate::VecList) asks its allocator for every `Node` before the value
//! inside it is constructed and returns the `Node` after the value is destroyed, so each
//! successful `allocate` is paired with exactly one `deallocate`.

use crate::err::AllocError;
use std::{alloc::Layout, cell::Cell, rc::Rc,};

/// Grants and reclaims the memory for the `Node`s of a [`VecList`](crate::VecList).
///
/// Stateful allocators are expected to be handles: clones of an allocator draw from
/// the same underlying resource.
pub trait NodeAlloc: Clone {
    /// If `true` a list being assigned over takes the allocator of the list it copies.
    const PROPAGATE_ON_COPY_ASSIGN: bool = false;

    /// Grants the memory for a single `Node`.
    ///
    /// # Params
    ///
    /// layout --- The layout of the `Node` being allocated.
    fn allocate(&mut self, layout: Layout,) -> Result<(), AllocError>;
    /// Reclaims the memory of a single `Node` previously granted by `allocate`.
    ///
    /// # Params
    ///
    /// layout --- The layout of the `Node` being released.
    fn deallocate(&mut self, layout: Layout,);
    /// Returns the allocator a copy of a list should use.
    #[inline]
    fn select_on_copy(&self,) -> Self { self.clone() }
}

/// The default allocator; it never refuses a `Node`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,)]
pub struct Global;

impl NodeAlloc for Global {
    #[inline]
    fn allocate(&mut self, _: Layout,) -> Result<(), AllocError> { Ok(()) }
    #[inline]
    fn deallocate(&mut self, _: Layout,) {}
}

/// A shared quota of live `Node`s.
///
/// Every clone of a [`Budget`] draws from the same quota. A list copied from a list
/// using a [`Budget`] receives a fresh quota with the same limit, and assigning over a
/// list never replaces its [`Budget`].
#[derive(Clone, Debug,)]
pub struct Budget {
    pool: Rc<Pool>,
}

#[derive(Debug,)]
struct Pool {
    limit: usize,
    live: Cell<usize>,
}

impl Budget {
    /// Returns a new [`Budget`] which grants at most `limit` live `Node`s.
    pub fn new(limit: usize,) -> Self {
        Self { pool: Rc::new(Pool { limit, live: Cell::new(0), }), }
    }
    /// The maximum number of live `Node`s.
    #[inline]
    pub fn limit(&self,) -> usize { self.pool.limit }
    /// The number of `Node`s currently granted.
    #[inline]
    pub fn live(&self,) -> usize { self.pool.live.get() }
    /// The number of `Node`s which can still be granted.
    #[inline]
    pub fn remaining(&self,) -> usize { self.limit() - self.live() }
    /// `true` if `self` and `other` draw from the same quota.
    #[inline]
    pub fn shares_pool(&self, other: &Self,) -> bool { Rc::ptr_eq(&self.pool, &other.pool,) }
}

impl NodeAlloc for Budget {
    fn allocate(&mut self, layout: Layout,) -> Result<(), AllocError> {
        let live = self.live();

        if live >= self.limit() {
            return Err(AllocError::Refused { size: layout.size(), live, })
        }

        self.pool.live.set(live + 1);
        Ok(())
    }
    fn deallocate(&mut self, _: Layout,) {
        let live = self.live();

        debug_assert!(live > 0, "`Budget::deallocate` called with no live nodes",);
        self.pool.live.set(live.saturating_sub(1));
    }
    #[inline]
    fn select_on_copy(&self,) -> Self { Budget::new(self.limit(),) }
}

/// An instrumented allocator which counts every call made to it.
///
/// Clones share their counters, and a list being assigned over adopts the [`Counting`]
/// of the list it copies. A refusal can be scheduled with [`Counting::refuse_in`] to
/// exercise failure paths.
#[derive(Clone, Debug, Default,)]
pub struct Counting {
    stats: Rc<Stats>,
}

#[derive(Debug, Default,)]
struct Stats {
    attempts: Cell<usize>,
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    refuse_at: Cell<Option<usize>>,
}

impl Counting {
    /// Returns a new [`Counting`] with zeroed counters.
    #[inline]
    pub fn new() -> Self { Self::default() }
    /// Returns a new [`Counting`] which will refuse its `nth` allocation attempt.
    ///
    /// # Params
    ///
    /// nth --- The attempt to refuse, counting from `1`.
    pub fn refusing(nth: usize,) -> Self {
        let alloc = Self::new();

        alloc.refuse_in(nth,); alloc
    }
    /// Schedules the `nth` allocation attempt from now to be refused.
    ///
    /// # Params
    ///
    /// nth --- The attempt to refuse, counting from `1`.
    pub fn refuse_in(&self, nth: usize,) {
        let stats = &self.stats;

        stats.refuse_at.set(Some(stats.attempts.get() + nth),);
    }
    /// Cancels any scheduled refusal.
    #[inline]
    pub fn disarm(&self,) { self.stats.refuse_at.set(None,) }
    /// The number of calls to `allocate`, including refused ones.
    #[inline]
    pub fn attempts(&self,) -> usize { self.stats.attempts.get() }
    /// The number of `Node`s granted.
    #[inline]
    pub fn allocations(&self,) -> usize { self.stats.allocations.get() }
    /// The number of `Node`s returned.
    #[inline]
    pub fn deallocations(&self,) -> usize { self.stats.deallocations.get() }
    /// The number of `Node`s granted and not yet returned.
    #[inline]
    pub fn live(&self,) -> usize { self.allocations() - self.deallocations() }
    /// `true` if every granted `Node` has been returned.
    #[inline]
    pub fn is_balanced(&self,) -> bool { self.live() == 0 }
}

impl NodeAlloc for Counting {
    const PROPAGATE_ON_COPY_ASSIGN: bool = true;

    fn allocate(&mut self, layout: Layout,) -> Result<(), AllocError> {
        let stats = &self.stats;
        let attempt = stats.attempts.get() + 1;

        stats.attempts.set(attempt,);
        if stats.refuse_at.get() == Some(attempt) {
            return Err(AllocError::Refused { size: layout.size(), live: self.live(), })
        }

        stats.allocations.set(stats.allocations.get() + 1,);
        Ok(())
    }
    fn deallocate(&mut self, _: Layout,) {
        debug_assert!(self.live() > 0, "`Counting::deallocate` called with no live nodes",);
        self.stats.deallocations.set(self.deallocations() + 1,);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: Layout = Layout::new::<[u64; 3]>();

    #[test]
    fn test_budget() {
        let mut budget = Budget::new(2,);
        let mut shared = budget.clone();

        assert!(budget.allocate(LAYOUT,).is_ok(), "`Budget::allocate` refused within its limit",);
        assert!(shared.allocate(LAYOUT,).is_ok(), "`Budget::allocate` refused within its limit",);
        assert_eq!(budget.allocate(LAYOUT,), Err(AllocError::Refused { size: LAYOUT.size(), live: 2, }),
            "`Budget::allocate` granted past its limit",
        );
        assert_eq!(shared.remaining(), 0, "`Budget` clones did not share a quota",);

        budget.deallocate(LAYOUT,);
        assert_eq!(shared.live(), 1, "`Budget::deallocate` did not return the node",);

        let copy = budget.select_on_copy();
        assert!(!copy.shares_pool(&budget,), "`Budget::select_on_copy` shared the quota",);
        assert_eq!((copy.limit(), copy.live(),), (2, 0,), "`Budget::select_on_copy` did not reset the quota",);
    }

    #[test]
    fn test_counting() {
        let mut alloc = Counting::refusing(3,);
        let observer = alloc.clone();

        assert!(alloc.allocate(LAYOUT,).is_ok());
        assert!(alloc.allocate(LAYOUT,).is_ok());
        assert!(alloc.allocate(LAYOUT,).is_err(), "`Counting::refusing` did not refuse the 3rd attempt",);
        assert!(alloc.allocate(LAYOUT,).is_ok(), "`Counting` refused more than once",);

        assert_eq!(observer.attempts(), 4, "`Counting::attempts` miscounted",);
        assert_eq!(observer.allocations(), 3, "`Counting::allocations` counted a refusal",);

        for _ in 0..3 { alloc.deallocate(LAYOUT,) }
        assert!(observer.is_balanced(), "`Counting` was not balanced after returning every node",);
        assert!(Counting::PROPAGATE_ON_COPY_ASSIGN, "`Counting` should propagate on copy assignment",);
        assert!(!Budget::PROPAGATE_ON_COPY_ASSIGN, "`Budget` should not propagate on copy assignment",);
    }
}
