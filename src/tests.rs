#![cfg(test)]

use super::*;
use std::{
    cell::Cell,
    collections::hash_map::DefaultHasher,
    panic::{self, AssertUnwindSafe,},
    rc::Rc,
};

/// Counts the live values made from it and panics when its fuse runs out.
#[derive(Clone, Default,)]
struct Tracker {
    live: Rc<Cell<usize>>,
    fuse: Rc<Cell<Option<usize>>>,
}

impl Tracker {
    /// A [`Tracker`] whose `nth` clone panics.
    fn fused(nth: usize,) -> Self {
        let tracker = Tracker::default();

        tracker.fuse.set(Some(nth),); tracker
    }
    fn make(&self, value: u32,) -> Fragile {
        self.live.set(self.live.get() + 1,);
        Fragile { value, tracker: self.clone(), }
    }
    fn live(&self,) -> usize { self.live.get() }
}

/// A value whose clone can panic.
struct Fragile {
    value: u32,
    tracker: Tracker,
}

impl Clone for Fragile {
    fn clone(&self,) -> Self {
        let fuse = &self.tracker.fuse;

        match fuse.get() {
            Some(1) => { fuse.set(None,); panic!("`Fragile::clone` fuse ran out") },
            Some(n) => fuse.set(Some(n - 1),),
            None => (),
        }

        self.tracker.make(self.value,)
    }
}

impl Drop for Fragile {
    fn drop(&mut self,) { self.tracker.live.set(self.tracker.live.get() - 1,) }
}

fn values<A: NodeAlloc,>(list: &VecList<i32, A,>,) -> Vec<i32> { list.iter().copied().collect() }

#[test]
fn test_vec_list() {
    let list = VecList::<u8>::new();
    assert_eq!(list.len(), 0, "`VecList::new` initialised non empty",);
    assert_eq!(list.capacity(), 0, "`VecList::new` allocated",);
    let capacity = 10;
    let mut list = VecList::with_capacity(capacity);

    assert!(list.capacity() >= capacity, "`VecList::with_capacity` initialised with too little capacity",);
    assert_eq!(list.front(), None, "`VecList::front` initialised with front value",);
    assert_eq!(list.back(), None, "`VecList::back` initialised with front value",);
    assert_eq!(list.try_front(), Err(ListError::Empty), "`VecList::try_front` did not report the empty list",);

    list.push_front(1);
    assert_eq!(list.front(), Some(&1), "`VecList::push_front` did not push value",);

    list.push_back(2);
    assert_eq!(list.back(), Some(&2), "`VecList::push_back` did not push value",);

    list.push_front(0);
    assert_eq!(list.front(), Some(&0), "`VecList::push_front` did not push value to correct end",);
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![&0, &1, &2,],
        "`VecList::iter` did not iterate correctly.",
    );
    assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![&2, &1, &0,],
        "`VecList::iter` did not iterate correctly.",
    );

    assert_eq!(list.len(), 3, "`VecList::len` length was not tracked across pushes properly",);

    assert_eq!(list.pop_front(), Some(0), "`VecList::pop_front` did not pop the correct value",);
    assert_eq!(list.pop_back(), Some(2), "`VecList::pop_back` did not pop the correct value",);
    assert_eq!(list.len(), 1, "`VecList::len` length was not tracked across pops properly",);
    assert_eq!(list.pop_back(), Some(1),);
    assert_eq!(list.pop_back(), None, "`VecList::pop_back` popped from an empty list",);
    assert_eq!(list.pop_front(), None, "`VecList::pop_front` popped from an empty list",);
    assert!(list.is_empty(), "`VecList::is_empty` was wrong after emptying",);

    let mut list2 = VecList::<i32>::from_iter(0..=3);

    list2.retain(|&i: &i32| i % 2 == 0);
    assert_eq!(values(&list2), vec![0, 2,], "`VecList::retain` did not retain proper values",);
    assert!(list2.contains(&2), "`VecList::contains` did not find a value",);
    assert!(!list2.contains(&1), "`VecList::contains` found a removed value",);

    list2.clear();
    assert!(list2.is_empty(), "`VecList::clear` did not clear all values");
    assert_eq!(list2.begin(), list2.end(), "a cleared list had distinct ends",);
}

#[test]
fn test_push_pop_scenario() {
    let mut list = VecList::new();

    list.push_back(1);
    list.push_back(2);
    list.push_back(3);
    assert_eq!((list.len(), list.front(), list.back(),), (3, Some(&1), Some(&3),));
    assert_eq!(values(&list), vec![1, 2, 3,],);

    list.pop_front();
    assert_eq!(values(&list), vec![2, 3,], "`VecList::pop_front` removed the wrong value",);
    assert_eq!(list.len(), 2,);

    list.push_front(0);
    assert_eq!(values(&list), vec![0, 2, 3,], "`VecList::push_front` did not reuse the list properly",);
}

#[test]
fn test_copy_isolation() {
    let original = VecList::from_elem(3, &7,);
    let mut copy = original.clone();

    *copy.front_mut().expect("the copy was empty") = 9;
    assert_eq!(values(&original), vec![7, 7, 7,], "changing the copy changed the original",);
    assert_eq!(values(&copy), vec![9, 7, 7,], "the copy was not changed",);

    let mut assigned = vec_list![1, 2,];
    assigned.clone_from(&original,);
    assert_eq!(assigned, original, "`VecList::clone_from` did not copy the values",);
    *assigned.back_mut().expect("the assigned list was empty") = 0;
    assert_eq!(values(&original), vec![7, 7, 7,], "changing the assigned list changed the original",);
}

#[test]
fn test_constructors() {
    assert_eq!(values(&VecList::with_len(3,)), vec![0, 0, 0,], "`VecList::with_len` did not use defaults",);
    assert_eq!(values(&VecList::from_slice(&[4, 5, 6,],)), vec![4, 5, 6,],);
    assert_eq!(values(&vec_list![1, 2, 3]), vec![1, 2, 3,],);
    assert_eq!(values(&vec_list![2; 2]), vec![2, 2,],);
    assert!(VecList::<i32>::from_elem(0, &1,).is_empty(), "`VecList::from_elem` with no values was not empty",);

    let list = VecList::<i32, Counting>::default();
    assert_eq!(list.allocator().attempts(), 0, "an empty list allocated",);
}

#[test]
fn test_vec_list_iter() {
    let list = VecList::<u8>::from_iter(0..=3);

    assert_eq!(list.iter().len(), 4, "`Iter::len` was wrong",);
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![&0, &1, &2, &3,],
        "`VecList::iter` did not iterate correctly.",
    );
    assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![&3, &2, &1, &0,],
        "`VecList::iter` did not iterate correctly.",
    );

    let mut iter = list.iter();
    assert_eq!((iter.next(), iter.next_back(),), (Some(&0), Some(&3),));
    assert_eq!(iter.clone().collect::<Vec<_>>(), vec![&1, &2,], "`Iter` did not meet in the middle",);
    assert_eq!((iter.next(), iter.next_back(), iter.next(),), (Some(&1), Some(&2), None,));
}

#[test]
fn test_vec_list_iter_mut() {
    let mut list = VecList::<u8>::from_iter(0..=3);

    for i in list.iter_mut() { *i += 1 }
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2, &3, &4,],
        "`VecList::iter_mut` did not iterate correctly.",
    );
    for i in list.iter_mut().rev().take(1) { *i = 0 }
    assert_eq!(list.back(), Some(&0), "`IterMut::next_back` did not start at the back",);
}

#[test]
fn test_vec_list_into_iter() {
    let alloc = Counting::new();
    let list = VecList::try_from_slice_in(&[1, 2, 3, 4,], alloc.clone(),).expect("allocation refused");
    let mut iter = list.into_iter();

    assert_eq!(iter.next(), Some(1),);
    assert_eq!(iter.next_back(), Some(4),);
    assert_eq!(iter.len(), 2, "`IntoIter::len` was wrong",);
    drop(iter);
    assert!(alloc.is_balanced(), "dropping `IntoIter` leaked nodes",);
}

#[test]
fn test_slot_reuse() {
    let mut list = VecList::with_capacity(4,);

    list.extend(0..4);
    let capacity = list.capacity();
    list.pop_front();
    list.pop_back();
    list.reserve(2,);
    list.push_back(10);
    list.push_front(11);
    assert_eq!(list.capacity(), capacity, "vacant slots were not reused",);
    assert_eq!(values(&list), vec![11, 1, 2, 10,],);
}

#[test]
fn test_ordering() {
    use std::hash::{Hash, Hasher,};

    let hash = |list: &VecList<i32,>| {
        let mut hasher = DefaultHasher::new();

        list.hash(&mut hasher,); hasher.finish()
    };
    let a = vec_list![1, 2, 3];
    let b = vec_list![1, 2, 4];
    let c = vec_list![1, 2];

    assert!(a < b, "`VecList::cmp` did not compare values",);
    assert!(c < a, "`VecList::cmp` did not compare lengths",);
    assert_ne!(a, c, "lists of different lengths were equal",);
    assert_eq!(hash(&a), hash(&a.clone()), "equal lists hashed differently",);
    assert_eq!(format!("{:?}", a), "[1, 2, 3]",);
}

#[test]
fn test_refused_build() {
    let alloc = Counting::refusing(3,);
    let err = VecList::try_from_elem_in(5, &7, alloc.clone(),).expect_err("the refusal was not reported");

    assert!(matches!(err, AllocError::Refused { live: 2, .. }), "wrong refusal: {:?}", err,);
    assert_eq!(alloc.allocations(), 2, "nodes were granted past the refusal",);
    assert!(alloc.is_balanced(), "a refused build leaked nodes",);

    let alloc = Counting::refusing(1,);
    assert!(VecList::<u8, _>::try_with_len_in(3, alloc.clone(),).is_err());
    assert!(alloc.is_balanced(),);

    let alloc = Counting::refusing(3,);
    assert!(VecList::try_from_slice_in(&[1, 2, 3, 4,], alloc.clone(),).is_err(),
        "`VecList::try_from_slice_in` did not report the refusal",
    );
    assert!(alloc.is_balanced(), "a refused slice build leaked nodes",);

    let alloc = Counting::new();
    let source = VecList::try_from_slice_in(&[1, 2, 3,], alloc.clone(),).expect("allocation refused");
    alloc.refuse_in(2,);
    assert!(source.try_clone().is_err(), "`VecList::try_clone` did not report the refusal",);
    assert_eq!(alloc.live(), source.len(), "a refused copy leaked nodes",);
    assert_eq!(values(&source), vec![1, 2, 3,], "a refused copy changed the source",);
}

#[test]
fn test_failed_element() {
    #[derive(Debug, PartialEq,)]
    enum BuildError {
        Alloc(AllocError),
        Bad(usize),
    }

    impl From<AllocError> for BuildError {
        fn from(e: AllocError,) -> Self { BuildError::Alloc(e,) }
    }

    let alloc = Counting::new();
    let built: Result<VecList<usize, _>, _> = VecList::try_from_fn_in(5, alloc.clone(),
        |i| if i == 3 { Err(BuildError::Bad(i,)) } else { Ok(i) },
    );

    assert_eq!(built.expect_err("the failure was swallowed"), BuildError::Bad(3,),);
    assert_eq!(alloc.allocations(), 4, "the failed value's node was not allocated first",);
    assert!(alloc.is_balanced(), "a failed build leaked nodes",);

    let alloc = Counting::refusing(2,);
    let built = VecList::<usize, _>::try_from_fn_in(5, alloc.clone(), |i| Ok::<_, BuildError>(i),);
    assert!(matches!(built, Err(BuildError::Alloc(_))), "the refusal did not convert",);
}

#[test]
fn test_panicking_build() {
    let alloc = Counting::new();
    let tracker = Tracker::fused(3,);
    let seed = tracker.make(1,);

    let built = panic::catch_unwind(AssertUnwindSafe(
        || VecList::try_from_elem_in(5, &seed, alloc.clone(),),
    ));
    assert!(built.is_err(), "the panic did not reach the caller",);
    assert_eq!(alloc.allocations(), 3, "the panicking value's node was not allocated first",);
    assert!(alloc.is_balanced(), "a panicking build leaked nodes",);
    assert_eq!(tracker.live(), 1, "a panicking build leaked values",);

    let tracker = Tracker::default();
    let source = VecList::try_from_fn_in(4, alloc.clone(), |i| Ok::<_, AllocError>(tracker.make(i as u32,)),)
        .expect("allocation refused");
    tracker.fuse.set(Some(2,),);

    let copy = panic::catch_unwind(AssertUnwindSafe(|| source.clone()),);
    assert!(copy.is_err(), "the panic did not reach the caller",);
    assert_eq!(alloc.live(), source.len(), "a panicking copy leaked nodes",);
    assert_eq!(tracker.live(), source.len(), "a panicking copy leaked values",);
}

#[test]
fn test_assign_strong_guarantee() {
    let alloc = Counting::new();
    let mut target = VecList::try_from_slice_in(&[1, 2,], alloc.clone(),).expect("allocation refused");
    let source = VecList::try_from_slice_in(&[7, 8, 9,], alloc.clone(),).expect("allocation refused");

    alloc.refuse_in(2,);
    assert!(target.try_assign_from(&source,).is_err(), "the refusal was not reported",);
    assert_eq!(values(&target), vec![1, 2,], "a failed assignment changed the target",);
    assert_eq!(alloc.live(), 5, "a failed assignment leaked nodes",);

    target.try_assign_from(&source,).expect("allocation refused");
    assert_eq!(target, source, "`VecList::try_assign_from` did not copy the values",);
    assert_eq!(alloc.live(), 6, "the old values were not released",);

    let tracker = Tracker::default();
    let source = VecList::from_iter((0..3).map(|i| tracker.make(i,)),);
    let mut target = VecList::from_iter((10..12).map(|i| tracker.make(i,)),);
    tracker.fuse.set(Some(3,),);

    let assigned = panic::catch_unwind(AssertUnwindSafe(|| target.clone_from(&source,)),);
    assert!(assigned.is_err(), "the panic did not reach the caller",);
    assert_eq!(target.iter().map(|f| f.value).collect::<Vec<_>>(), vec![10, 11,],
        "a panicking assignment changed the target",
    );
    assert_eq!(tracker.live(), 5, "a panicking assignment leaked values",);
}

#[test]
fn test_allocator_propagation() {
    let target_alloc = Counting::new();
    let source_alloc = Counting::new();
    let mut target = VecList::try_from_slice_in(&[1,], target_alloc.clone(),).expect("allocation refused");
    let source = VecList::try_from_slice_in(&[2, 3,], source_alloc.clone(),).expect("allocation refused");

    target.try_assign_from(&source,).expect("allocation refused");
    assert!(target_alloc.is_balanced(), "the old allocator was not handed its nodes back",);
    assert_eq!(source_alloc.live(), 4, "`Counting` did not propagate on assignment",);

    let mut target = VecList::try_from_slice_in(&[1, 2,], Budget::new(4,),).expect("allocation refused");
    let source = VecList::try_from_slice_in(&[7, 8, 9,], Budget::new(8,),).expect("allocation refused");

    //The copy must exist alongside the old values.
    assert!(target.try_assign_from(&source,).is_err(), "the quota was not respected",);
    assert_eq!(values(&target), vec![1, 2,],);
    assert_eq!(target.allocator().live(), 2, "a failed assignment leaked nodes",);

    target.pop_back();
    target.try_assign_from(&source,).expect("allocation refused");
    assert!(!target.allocator().shares_pool(source.allocator(),), "`Budget` propagated on assignment",);
    assert_eq!((target.allocator().live(), source.allocator().live(),), (3, 3,),);

    let copy = source.clone();
    assert!(!copy.allocator().shares_pool(source.allocator(),), "`Budget::select_on_copy` was not used",);
    assert_eq!(copy.get_allocator().live(), 3,);
}

#[test]
#[should_panic(expected = "error allocating node")]
fn test_push_refused() {
    let mut list = VecList::new_in(Budget::new(1,),);

    list.push_back(1);
    assert_eq!(list.try_push_front(2,), Err(AllocError::Refused { size: VecList::<i32, Budget>::NODE.size(), live: 1, }),
        "`VecList::try_push_front` did not report the refusal",
    );
    assert_eq!(list.len(), 1, "a refused push changed the list",);
    list.push_back(2);
}

#[test]
fn test_drop_releases() {
    let alloc = Counting::new();
    let tracker = Tracker::default();

    {
        let mut list = VecList::new_in(alloc.clone(),);

        for i in 0..5 { list.push_back(tracker.make(i,),) }
        list.pop_front();
        list.push_front(tracker.make(9,),);
        assert_eq!(alloc.live(), 5,);
    }

    assert!(alloc.is_balanced(), "dropping the list leaked nodes",);
    assert_eq!(alloc.allocations(), 6,);
    assert_eq!(tracker.live(), 0, "dropping the list leaked values",);
}
