//! Error types for memory operations
//!
//! Only the fallible convenience surface produces these; the core range
//! operations either succeed or end the process through the runtime
//! terminator.

use thiserror::Error;

/// Result type for memory operations
pub type AllocResult<T> = core::result::Result<T, AllocError>;

/// Memory operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The allocator could not satisfy the request
    #[error("out of memory: requested {requested} bytes")]
    OutOfMemory {
        /// Size of the failed request in bytes
        requested: usize,
    },

    /// The runtime allocator has already been installed (or observed)
    #[error("runtime allocator already installed")]
    AllocatorInstalled,
}

impl AllocError {
    /// Create an out-of-memory error
    pub const fn out_of_memory(requested: usize) -> Self {
        Self::OutOfMemory { requested }
    }

    /// Checks if this is an out-of-memory error
    pub const fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}
