//! Raw allocator interface and implementations
//!
//! The interface is malloc-style and size-based: byte buffers only, no
//! layout or alignment negotiation, null as the failure and "no block"
//! sentinel. Implementations:
//!
//! - [`SystemAllocator`]: the C heap, the process default
//! - [`TrackingAllocator`]: transparent wrapper counting blocks for leak
//!   checks and tests
//!
//! The process-wide default is reached through [`runtime_allocator`], which
//! is what [`AllocRange`](crate::alloc_range::AllocRange) uses.

mod runtime;
mod system;
mod tracked;

pub use runtime::{install_runtime_allocator, runtime_allocator};
pub use system::SystemAllocator;
pub use tracked::TrackingAllocator;

use core::ptr;

use keel_core::{Byte, ByteSize};

/// Malloc-style allocator over raw byte buffers.
///
/// # Safety
///
/// Implementors must ensure that:
/// - a non-null pointer returned by `allocate` or `reallocate` refers to at
///   least the requested number of bytes, exclusively owned by the caller
/// - `free` and `reallocate` accept exactly the pointers this allocator
///   handed out, plus null
/// - `free(null)` is a no-op
pub unsafe trait RawAllocator {
    /// Allocates `size` bytes.
    ///
    /// Returns null on failure. A zero-size request may return null (the
    /// "no block" sentinel) without that meaning failure.
    ///
    /// # Safety
    /// The returned block is uninitialized and must be released through
    /// `free` or `reallocate` on this same allocator.
    unsafe fn allocate(&self, size: ByteSize) -> *mut Byte;

    /// Resizes the block at `ptr` from `old_size` to `new_size` bytes,
    /// preserving the first `min(old_size, new_size)` bytes.
    ///
    /// A null `ptr` means fresh allocation. `new_size == 0` releases the
    /// block and may return null. A null return with `new_size > 0` means
    /// failure, in which case the original block is untouched.
    ///
    /// # Safety
    /// - `ptr` must be null or a live block of exactly `old_size` bytes
    ///   obtained from this allocator
    /// - on a non-null return, `ptr` is invalid and must not be used
    unsafe fn reallocate(
        &self,
        ptr: *mut Byte,
        old_size: ByteSize,
        new_size: ByteSize,
    ) -> *mut Byte {
        // Default: allocate + copy + free. Implementations with a native
        // realloc path should override this.
        let new_ptr = unsafe { self.allocate(new_size) };
        if new_ptr.is_null() && new_size > 0 {
            return ptr::null_mut();
        }
        let copied = old_size.min(new_size);
        if copied > 0 {
            // SAFETY: ptr is live for old_size bytes (caller contract) and
            // new_ptr for new_size bytes (just allocated); copied does not
            // exceed either, and the blocks are distinct.
            unsafe { ptr::copy_nonoverlapping(ptr, new_ptr, copied) };
        }
        // SAFETY: ptr was obtained from this allocator or is null.
        unsafe { self.free(ptr) };
        new_ptr
    }

    /// Releases the block at `ptr`. Null is tolerated as a no-op.
    ///
    /// # Safety
    /// `ptr` must be null or a live block obtained from this allocator;
    /// after the call it must not be used.
    unsafe fn free(&self, ptr: *mut Byte);
}

/// Marker for allocators that can be shared between threads.
///
/// # Safety
/// Implementors must ensure concurrent allocate/reallocate/free calls from
/// different threads are safe.
pub unsafe trait ThreadSafeRawAllocator: RawAllocator + Send + Sync {}

// SAFETY: forwards every call to the underlying allocator; the contracts are
// preserved through delegation.
unsafe impl<A: RawAllocator + ?Sized> RawAllocator for &A {
    #[inline]
    unsafe fn allocate(&self, size: ByteSize) -> *mut Byte {
        // SAFETY: same contract as A::allocate.
        unsafe { (**self).allocate(size) }
    }

    #[inline]
    unsafe fn reallocate(
        &self,
        ptr: *mut Byte,
        old_size: ByteSize,
        new_size: ByteSize,
    ) -> *mut Byte {
        // SAFETY: same contract as A::reallocate.
        unsafe { (**self).reallocate(ptr, old_size, new_size) }
    }

    #[inline]
    unsafe fn free(&self, ptr: *mut Byte) {
        // SAFETY: same contract as A::free.
        unsafe { (**self).free(ptr) }
    }
}
