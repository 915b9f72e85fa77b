//! System allocator implementation
//!
//! Wraps the C heap (`malloc`/`realloc`/`free`). This is the allocator the
//! runtime accessor hands out unless another one has been installed.

use core::ffi::c_void;

use keel_core::{Byte, ByteSize};

use super::{RawAllocator, ThreadSafeRawAllocator};

/// The C heap.
///
/// Zero-cost to construct and copy; contains no state. `free(null)` is a
/// no-op by libc contract, so the uninit sentinel is always safe to release
/// through it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl SystemAllocator {
    /// Creates a new `SystemAllocator`
    #[inline]
    pub const fn new() -> Self {
        SystemAllocator
    }
}

// SAFETY: malloc/realloc/free satisfy the RawAllocator contract; libc
// guarantees free(NULL) is a no-op.
unsafe impl RawAllocator for SystemAllocator {
    #[inline]
    unsafe fn allocate(&self, size: ByteSize) -> *mut Byte {
        if size == 0 {
            // zero-size requests get the "no block" sentinel
            return core::ptr::null_mut();
        }
        // SAFETY: size is non-zero; malloc returns null on failure.
        unsafe { libc::malloc(size) }.cast::<Byte>()
    }

    unsafe fn reallocate(
        &self,
        ptr: *mut Byte,
        _old_size: ByteSize,
        new_size: ByteSize,
    ) -> *mut Byte {
        // realloc covers the whole contract: null ptr means fresh
        // allocation, zero size releases the block (the return value is then
        // implementation defined and may be null).
        // SAFETY: ptr is null or a live malloc block (caller contract).
        unsafe { libc::realloc(ptr.cast::<c_void>(), new_size) }.cast::<Byte>()
    }

    #[inline]
    unsafe fn free(&self, ptr: *mut Byte) {
        // SAFETY: ptr is null or a live malloc block (caller contract).
        unsafe { libc::free(ptr.cast::<c_void>()) };
    }
}

// SAFETY: the C heap is internally synchronized.
unsafe impl ThreadSafeRawAllocator for SystemAllocator {}
