//! Tracking allocator implementation
//!
//! Wraps another allocator and counts block lifecycles. The interface is
//! size-based with no size passed to `free`, so tracking is per block, not
//! per byte.
//!
//! # Invariants
//!
//! - every non-null `allocate`/fresh `reallocate` result counts as one
//!   allocation
//! - every `free` of a non-null pointer, and every reallocate-to-zero that
//!   releases its block, counts as one free
//! - failed requests touch only the failure counter; the caller's block
//!   stays live

use core::sync::atomic::{AtomicUsize, Ordering};

use keel_core::{Byte, ByteSize};

use super::{RawAllocator, ThreadSafeRawAllocator};

/// A wrapper allocator that counts allocations and frees.
///
/// Thread-safe when the inner allocator is; the counters use atomics.
#[derive(Debug)]
pub struct TrackingAllocator<A> {
    inner: A,
    allocations: AtomicUsize,
    frees: AtomicUsize,
    failed: AtomicUsize,
}

impl<A> TrackingAllocator<A> {
    /// Creates a new `TrackingAllocator` wrapping the provided allocator
    pub const fn new(inner: A) -> Self {
        Self {
            inner,
            allocations: AtomicUsize::new(0),
            frees: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        }
    }

    /// Gets a reference to the underlying allocator
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Consumes the tracker and returns the underlying allocator
    pub fn into_inner(self) -> A {
        self.inner
    }

    /// Total number of blocks handed out
    pub fn allocation_count(&self) -> usize {
        self.allocations.load(Ordering::Relaxed)
    }

    /// Total number of blocks released
    pub fn free_count(&self) -> usize {
        self.frees.load(Ordering::Relaxed)
    }

    /// Number of requests the inner allocator failed
    pub fn failed_count(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }

    /// Blocks currently live (allocations minus frees)
    pub fn live_blocks(&self) -> usize {
        self.allocation_count()
            .saturating_sub(self.free_count())
    }

    /// True if more blocks were handed out than released
    pub fn has_leaks(&self) -> bool {
        self.live_blocks() > 0
    }

    /// Reset all counters
    pub fn reset_counts(&self) {
        self.allocations.store(0, Ordering::Relaxed);
        self.frees.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
    }
}

// SAFETY: every call forwards to the inner allocator with the same contract;
// counting is side-effect only.
unsafe impl<A: RawAllocator> RawAllocator for TrackingAllocator<A> {
    unsafe fn allocate(&self, size: ByteSize) -> *mut Byte {
        // SAFETY: same contract as A::allocate.
        let ptr = unsafe { self.inner.allocate(size) };
        if !ptr.is_null() {
            self.allocations.fetch_add(1, Ordering::Relaxed);
        } else if size > 0 {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn reallocate(
        &self,
        ptr: *mut Byte,
        old_size: ByteSize,
        new_size: ByteSize,
    ) -> *mut Byte {
        let had_block = !ptr.is_null();
        // SAFETY: same contract as A::reallocate.
        let new_ptr = unsafe { self.inner.reallocate(ptr, old_size, new_size) };

        if new_ptr.is_null() {
            if new_size > 0 {
                // failure: the original block is untouched
                self.failed.fetch_add(1, Ordering::Relaxed);
            } else if had_block {
                // reallocate-to-zero released the block
                self.frees.fetch_add(1, Ordering::Relaxed);
            }
        } else if !had_block {
            // fresh allocation; a moved block keeps its count
            self.allocations.fetch_add(1, Ordering::Relaxed);
        }
        new_ptr
    }

    unsafe fn free(&self, ptr: *mut Byte) {
        if !ptr.is_null() {
            self.frees.fetch_add(1, Ordering::Relaxed);
        }
        // SAFETY: same contract as A::free.
        unsafe { self.inner.free(ptr) };
    }
}

// SAFETY: counters are atomic; thread safety is inherited from the inner
// allocator.
unsafe impl<A: ThreadSafeRawAllocator> ThreadSafeRawAllocator for TrackingAllocator<A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::SystemAllocator;

    #[test]
    fn counts_allocate_and_free() {
        let tracker = TrackingAllocator::new(SystemAllocator::new());
        unsafe {
            let ptr = tracker.allocate(32);
            assert_eq!(tracker.allocation_count(), 1);
            assert_eq!(tracker.live_blocks(), 1);
            assert!(tracker.has_leaks());

            tracker.free(ptr);
        }
        assert_eq!(tracker.free_count(), 1);
        assert_eq!(tracker.live_blocks(), 0);
        assert!(!tracker.has_leaks());
    }

    #[test]
    fn free_of_null_is_not_counted() {
        let tracker = TrackingAllocator::new(SystemAllocator::new());
        unsafe { tracker.free(core::ptr::null_mut()) };
        assert_eq!(tracker.free_count(), 0);
    }

    #[test]
    fn reallocate_counts_fresh_and_release() {
        let tracker = TrackingAllocator::new(SystemAllocator::new());
        unsafe {
            // null -> block: one allocation
            let ptr = tracker.reallocate(core::ptr::null_mut(), 0, 8);
            assert!(!ptr.is_null());
            assert_eq!(tracker.allocation_count(), 1);

            // block -> block: counts unchanged
            let grown = tracker.reallocate(ptr, 8, 64);
            assert!(!grown.is_null());
            assert_eq!(tracker.allocation_count(), 1);
            assert_eq!(tracker.free_count(), 0);

            tracker.free(grown);
        }
        assert_eq!(tracker.live_blocks(), 0);
    }

    #[test]
    fn zero_size_allocate_counts_nothing() {
        let tracker = TrackingAllocator::new(SystemAllocator::new());
        unsafe {
            let ptr = tracker.allocate(0);
            assert!(ptr.is_null());
        }
        assert_eq!(tracker.allocation_count(), 0);
        assert_eq!(tracker.failed_count(), 0);
    }
}
