//! Owned contiguous byte buffer backed by the runtime allocator
//!
//! [`AllocRange`] layers exclusive ownership on top of
//! [`MemRange`](crate::range::MemRange): when the range is not uninit, its
//! begin pointer is a live block obtained from
//! [`runtime_allocator`](crate::allocator::runtime_allocator), owned by this
//! object alone.

use keel_core::{Byte, ByteSize};

use crate::allocator::{RawAllocator, runtime_allocator};
use crate::error::{AllocError, AllocResult};
use crate::range::MemRange;
use crate::terminate::runtime_terminate;

/// An owned contiguous byte buffer.
///
/// At most one `AllocRange` owns a given block at any time;
/// [`exchange`](AllocRange::exchange) is the only way to move a block
/// between two of them. Contents are uninitialized after
/// [`resize`](AllocRange::resize); only bytes the caller wrote through
/// [`as_mut_ptr`](AllocRange::as_mut_ptr) may be read back.
///
/// Dropping the range releases the block; an explicit
/// [`clear`](AllocRange::clear) does the same and is idempotent.
///
/// Not safe for concurrent use of a single object; distinct objects may be
/// used from distinct threads.
#[derive(Debug, Default)]
pub struct AllocRange {
    range: MemRange,
}

// SAFETY: the owned block is exclusively ours, and shared references only
// permit reads of the descriptor itself.
unsafe impl Send for AllocRange {}
unsafe impl Sync for AllocRange {}

impl AllocRange {
    /// Create an empty range owning no block
    #[inline]
    pub const fn new() -> Self {
        Self {
            range: MemRange::uninit(),
        }
    }

    /// Adopt a block of `size` bytes previously obtained from the runtime
    /// allocator.
    ///
    /// # Safety
    /// `ptr` must be null (with `size == 0`) or a live block of exactly
    /// `size` bytes allocated by [`runtime_allocator`], not owned by any
    /// other `AllocRange`.
    pub unsafe fn from_raw_parts(ptr: *mut Byte, size: ByteSize) -> Self {
        Self {
            range: MemRange::from_raw_parts(ptr, size),
        }
    }

    /// Release ownership of the block without freeing it.
    ///
    /// The caller becomes responsible for handing the pointer back to the
    /// runtime allocator.
    pub fn into_raw_parts(mut self) -> (*mut Byte, ByteSize) {
        let parts = (self.range.begin(), self.range.len());
        self.range.clear();
        parts
    }

    /// Size of the owned block in bytes; 0 when no block is owned
    #[inline]
    pub fn len(&self) -> ByteSize {
        self.range.len()
    }

    /// True iff no bytes are owned
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Pointer to the owned block; null when no block is owned
    #[inline]
    pub fn as_ptr(&self) -> *const Byte {
        self.range.begin()
    }

    /// Mutable pointer to the owned block; null when no block is owned
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut Byte {
        self.range.begin()
    }

    /// Release the owned block and return to the empty state.
    ///
    /// The allocator's `free` is invoked unconditionally; when no block is
    /// owned it receives null, which the allocator contract tolerates as a
    /// no-op. Idempotent.
    pub fn clear(&mut self) {
        #[cfg(feature = "logging")]
        tracing::debug!(len = self.len(), "releasing allocated range");

        // SAFETY: begin is null or our live block from the runtime
        // allocator.
        unsafe { runtime_allocator().free(self.range.begin()) };
        self.range.clear();
    }

    /// Destructively replace `self` with `other`.
    ///
    /// `self`'s prior block is released unconditionally; `other`'s block
    /// moves into `self` and `other` is left empty. Exclusive borrows rule
    /// out passing the same object on both sides.
    pub fn exchange(&mut self, other: &mut Self) {
        self.clear();
        self.range.swap(&mut other.range);
    }

    /// Resize the owned block to `new_size` bytes, allocating fresh storage
    /// when none is owned.
    ///
    /// The first `min(len, new_size)` bytes are preserved; the rest is
    /// uninitialized. On allocation failure the process ends through
    /// [`runtime_terminate`]; use [`try_resize`](AllocRange::try_resize) to
    /// observe the failure instead.
    ///
    /// `resize(0)` adopts whatever the allocator returns for a zero-size
    /// reallocation; it is not guaranteed to be equivalent to
    /// [`clear`](AllocRange::clear).
    pub fn resize(&mut self, new_size: ByteSize) {
        if let Err(_err) = self.try_resize(new_size) {
            #[cfg(feature = "logging")]
            tracing::error!(requested = new_size, "allocation failed: {_err}");

            runtime_terminate();
        }
    }

    /// Fallible [`resize`](AllocRange::resize).
    ///
    /// On `Err` the range is unchanged and still owns its previous block.
    pub fn try_resize(&mut self, new_size: ByteSize) -> AllocResult<()> {
        let old_size = self.len();

        // SAFETY: begin is null (fresh allocation) or our live block of
        // exactly old_size bytes.
        let new_ptr =
            unsafe { runtime_allocator().reallocate(self.range.begin(), old_size, new_size) };

        if new_ptr.is_null() && new_size > 0 {
            return Err(AllocError::out_of_memory(new_size));
        }

        // The old block has already been handled by the allocator; install
        // the new descriptor without freeing it again.
        self.range
            .reset_force(new_ptr, if new_ptr.is_null() { 0 } else { new_size });
        Ok(())
    }
}

impl Drop for AllocRange {
    fn drop(&mut self) {
        if !self.range.is_uninit() {
            self.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_range_is_empty() {
        let range = AllocRange::new();
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert!(range.as_ptr().is_null());
    }

    #[test]
    fn grow_from_empty_then_clear() {
        let mut range = AllocRange::new();
        range.resize(16);
        assert_eq!(range.len(), 16);
        assert!(!range.as_ptr().is_null());

        range.clear();
        assert_eq!(range.len(), 0);
        assert!(range.as_ptr().is_null());
    }

    #[test]
    fn shrink_preserves_prefix() {
        let mut range = AllocRange::new();
        range.resize(16);
        unsafe {
            for i in 0..16 {
                *range.as_mut_ptr().add(i) = i as u8;
            }
        }

        range.resize(4);
        assert_eq!(range.len(), 4);
        unsafe {
            for i in 0..4 {
                assert_eq!(*range.as_ptr().add(i), i as u8);
            }
        }
    }

    #[test]
    fn clear_is_idempotent() {
        let mut range = AllocRange::new();
        range.resize(8);
        range.clear();
        range.clear();
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn exchange_moves_ownership() {
        let mut r = AllocRange::new();
        let mut s = AllocRange::new();
        r.resize(8);
        s.resize(32);
        let s_ptr = s.as_ptr();

        r.exchange(&mut s);
        assert_eq!(r.len(), 32);
        assert_eq!(r.as_ptr(), s_ptr);
        assert!(s.is_empty());
        assert!(s.as_ptr().is_null());
    }

    #[test]
    fn exchange_with_empty_other_empties_self() {
        let mut r = AllocRange::new();
        let mut s = AllocRange::new();
        r.resize(10);

        r.exchange(&mut s);
        assert!(r.is_empty());
        assert!(s.is_empty());
    }

    #[test]
    fn raw_parts_round_trip() {
        let mut range = AllocRange::new();
        range.resize(24);
        let expected = range.as_ptr();

        let (ptr, size) = range.into_raw_parts();
        assert_eq!(ptr.cast_const(), expected);
        assert_eq!(size, 24);

        let mut adopted = unsafe { AllocRange::from_raw_parts(ptr, size) };
        assert_eq!(adopted.len(), 24);
        adopted.clear();
    }

    #[test]
    fn try_resize_reports_size() {
        let mut range = AllocRange::new();
        assert_eq!(range.try_resize(12), Ok(()));
        assert_eq!(range.len(), 12);
        range.clear();
    }

    #[test]
    fn send_sync_markers() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<AllocRange>();
        assert_sync::<AllocRange>();
    }
}
