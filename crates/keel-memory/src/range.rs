//! Non-owning memory range descriptor
//!
//! [`MemRange`] is plain data: a `(begin, end)` pair of byte pointers with a
//! distinguished uninit state (both null). It never allocates and never
//! frees; ownership semantics are layered on top by
//! [`AllocRange`](crate::alloc_range::AllocRange).

use core::ptr;

use keel_core::{Byte, ByteSize};

/// A contiguous byte span described by `(begin, end)` pointers.
///
/// # Invariants
///
/// Either both pointers are null (the *uninit* state) or `begin <= end` and
/// the pair describes `end - begin` bytes. The descriptor carries no
/// ownership; freeing whatever the pointers reference is the caller's
/// business.
#[derive(Debug)]
pub struct MemRange {
    begin: *mut Byte,
    end: *mut Byte,
}

impl MemRange {
    /// Create a range in the uninit state
    #[inline]
    pub const fn uninit() -> Self {
        Self {
            begin: ptr::null_mut(),
            end: ptr::null_mut(),
        }
    }

    /// Create a range describing `size` bytes starting at `ptr`.
    ///
    /// A null `ptr` yields the uninit state; `size` must be 0 in that case.
    #[inline]
    pub fn from_raw_parts(ptr: *mut Byte, size: ByteSize) -> Self {
        let mut range = Self::uninit();
        range.reset_force(ptr, size);
        range
    }

    /// True iff the range is in the uninit state
    #[inline]
    pub fn is_uninit(&self) -> bool {
        self.begin.is_null()
    }

    /// Number of bytes described, 0 when uninit
    #[inline]
    pub fn len(&self) -> ByteSize {
        self.end as ByteSize - self.begin as ByteSize
    }

    /// True iff the range describes no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Begin pointer; null when uninit
    #[inline]
    pub fn begin(&self) -> *mut Byte {
        self.begin
    }

    /// One-past-the-end pointer; null when uninit
    #[inline]
    pub fn end(&self) -> *mut Byte {
        self.end
    }

    /// Reset to the uninit state without freeing anything
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::uninit();
    }

    /// Exchange the underlying `(begin, end)` pairs of two ranges
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Unconditionally install `(ptr, ptr + size)`, without freeing the old
    /// pointer.
    ///
    /// A null `ptr` installs the uninit state; `size` must be 0 in that case.
    #[inline]
    pub fn reset_force(&mut self, ptr: *mut Byte, size: ByteSize) {
        debug_assert!(!ptr.is_null() || size == 0);
        if ptr.is_null() {
            self.clear();
        } else {
            self.begin = ptr;
            self.end = ptr.wrapping_add(size);
        }
    }
}

impl Default for MemRange {
    #[inline]
    fn default() -> Self {
        Self::uninit()
    }
}
