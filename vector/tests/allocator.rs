//! Integration tests for allocator injection.
//!
//! Every buffer a `Vector` obtains must be released exactly once, with the
//! same layout, and a refused allocation must leave the container untouched.

use std::{
    alloc::Layout,
    cell::{Cell, RefCell},
    collections::HashMap,
    ptr::NonNull,
};

use allocator_api2::alloc::{AllocError, Allocator, Global};
use bumpalo::Bump;
use ft_vector::{Error, Vector};
use pretty_assertions::assert_eq;

fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}

/// Forwards to [`Global`] and remembers every live block.
#[derive(Default)]
struct CountingAllocator {
    live: RefCell<HashMap<usize, Layout>>,
    allocations: Cell<usize>,
}

impl CountingAllocator {
    fn live_blocks(&self) -> usize {
        self.live.borrow().len()
    }

    fn live_bytes(&self) -> usize {
        self.live.borrow().values().map(Layout::size).sum()
    }
}

unsafe impl Allocator for CountingAllocator {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let block = Global.allocate(layout)?;
        self.live.borrow_mut().insert(block.cast::<u8>().as_ptr() as usize, layout);
        self.allocations.set(self.allocations.get() + 1);
        Ok(block)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        let recorded = self.live.borrow_mut().remove(&(ptr.as_ptr() as usize));
        assert_eq!(recorded, Some(layout), "released with a different layout");
        // SAFETY: the block came from `Global` with this layout.
        unsafe { Global.deallocate(ptr, layout) }
    }
}

/// Grants a fixed number of allocations, then refuses every request.
struct FailingAllocator {
    budget: Cell<usize>,
}

impl FailingAllocator {
    fn new(budget: usize) -> Self {
        Self {
            budget: Cell::new(budget),
        }
    }
}

unsafe impl Allocator for FailingAllocator {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        match self.budget.get() {
            0 => Err(AllocError),
            left => {
                self.budget.set(left - 1);
                Global.allocate(layout)
            }
        }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: every granted block came from `Global`.
        unsafe { Global.deallocate(ptr, layout) }
    }
}

#[test]
fn test_every_buffer_is_released() {
    init_test_logging();
    let counter = CountingAllocator::default();

    {
        let mut vec = Vector::new_in(&counter);
        for i in 0..100u64 {
            vec.push_back(i).unwrap();
        }
        // 1, 2, 4, ..., 128
        assert_eq!(counter.allocations.get(), 8);
        assert_eq!(counter.live_blocks(), 1);
        assert_eq!(counter.live_bytes(), 128 * 8);

        vec.erase_range(vec.cbegin(), vec.cbegin() + 50).unwrap();
        vec.shrink_to_fit().unwrap();
        assert_eq!(counter.live_bytes(), 50 * 8);

        vec.insert_n(vec.cbegin() + 10, 5, 0).unwrap();
        vec.clear();
        vec.shrink_to_fit().unwrap();
        assert_eq!(counter.live_blocks(), 0);

        vec.assign_n(3, 9).unwrap();
        assert_eq!(vec, [9, 9, 9]);
    }

    assert_eq!(counter.live_blocks(), 0);
}

#[test]
fn test_clone_uses_a_fresh_buffer() {
    let counter = CountingAllocator::default();
    let original = Vector::from_elem_in(4, String::from("x"), &counter).unwrap();
    let copy = original.try_clone().unwrap();

    assert_eq!(counter.live_blocks(), 2);
    assert_eq!(copy, original);

    drop(original);
    assert_eq!(counter.live_blocks(), 1);
    drop(copy);
    assert_eq!(counter.live_blocks(), 0);
}

#[test]
fn test_into_iter_releases_buffer() {
    let counter = CountingAllocator::default();
    let vec = Vector::from_range_in((0..6).map(|i| i.to_string()), &counter).unwrap();

    let mut iter = vec.into_iter();
    assert_eq!(iter.next().as_deref(), Some("0"));
    assert_eq!(counter.live_blocks(), 1);
    drop(iter);
    assert_eq!(counter.live_blocks(), 0);
}

#[test]
fn test_failed_push_back_leaves_vector_unchanged() {
    init_test_logging();
    let failing = FailingAllocator::new(1);
    let mut vec = Vector::with_capacity_in(2, &failing).unwrap();
    vec.push_back(1u32).unwrap();
    vec.push_back(2).unwrap();
    let base = vec.as_ptr();

    let layout = Layout::array::<u32>(4).unwrap();
    assert_eq!(vec.push_back(3), Err(Error::Alloc { layout }));

    assert_eq!(vec, [1, 2]);
    assert_eq!(vec.capacity(), 2);
    assert_eq!(vec.as_ptr(), base);
}

#[test]
fn test_failed_reserve_leaves_vector_unchanged() {
    let failing = FailingAllocator::new(1);
    let mut vec = Vector::from_range_in(["a", "b", "c"].map(String::from), &failing).unwrap();

    assert!(matches!(vec.reserve(64), Err(Error::Alloc { .. })));
    assert_eq!(vec, ["a", "b", "c"]);
    assert_eq!(vec.capacity(), 3);
}

#[test]
fn test_failed_insert_leaves_vector_unchanged() {
    let failing = FailingAllocator::new(1);
    let mut vec = Vector::from_range_in([1, 2, 3], &failing).unwrap();

    assert!(matches!(
        vec.insert_range(vec.cbegin() + 1, [7, 8]),
        Err(Error::Alloc { .. })
    ));
    assert!(matches!(vec.insert(vec.cbegin(), 0), Err(Error::Alloc { .. })));
    assert_eq!(vec, [1, 2, 3]);

    // Inserting into spare capacity needs no allocation.
    vec.pop_back();
    vec.insert(vec.cbegin(), 0).unwrap();
    assert_eq!(vec, [0, 1, 2]);
}

#[test]
fn test_failed_construction() {
    let failing = FailingAllocator::new(0);

    assert!(matches!(
        Vector::<u8, _>::with_capacity_in(8, &failing),
        Err(Error::Alloc { .. })
    ));
    // Nothing to allocate, nothing to fail.
    let empty = Vector::<u8, _>::from_elem_in(0, 0, &failing).unwrap();
    assert!(empty.empty());
}

#[test]
fn test_bump_arena() {
    let arena = Bump::new();
    let mut words = Vector::new_in(&arena);
    for word in "the quick brown fox jumps over the lazy dog".split(' ') {
        words.push_back(word).unwrap();
    }
    words.erase(words.cbegin() + 1).unwrap();
    words.insert(words.cbegin() + 1, "slow").unwrap();

    let reversed: Vec<&str> = words.iter().rev().copied().collect();
    assert_eq!(
        reversed,
        ["dog", "lazy", "the", "over", "jumps", "fox", "brown", "slow", "the"]
    );
    assert!(arena.allocated_bytes() > 0);
}
