//! # Keel Memory
//!
//! Byte-range and allocator primitives for the keel foundation libraries:
//!
//! - [`MemRange`]: a non-owning `(begin, end)` byte-pointer descriptor
//! - [`RawAllocator`]: the malloc-style allocator interface, with a
//!   [`SystemAllocator`] default and a [`TrackingAllocator`] wrapper
//! - [`runtime_allocator`]: the process-wide default allocator accessor
//! - [`AllocRange`]: an owned contiguous buffer backed by the runtime
//!   allocator
//! - [`runtime_terminate`]: the per-thread no-return escape hatch
//!
//! # Features
//!
//! - `abort-handler` (default): new threads start with an abort handler
//!   installed as their terminate hook
//! - `logging`: tracing instrumentation on the allocation and terminate paths
//!
//! # Example
//!
//! ```
//! use keel_memory::AllocRange;
//!
//! let mut buf = AllocRange::new();
//! buf.resize(16);
//! assert_eq!(buf.len(), 16);
//! buf.clear();
//! assert!(buf.is_empty());
//! ```

#![warn(missing_docs)]

pub mod alloc_range;
pub mod allocator;
pub mod error;
pub mod range;
pub mod terminate;

// Re-export common types for convenience
pub use alloc_range::AllocRange;
pub use allocator::{
    RawAllocator, SystemAllocator, ThreadSafeRawAllocator, TrackingAllocator,
    install_runtime_allocator, runtime_allocator,
};
pub use error::{AllocError, AllocResult};
pub use range::MemRange;
pub use terminate::{
    TerminateHandler, runtime_terminate, runtime_terminate_handler, runtime_terminate_set,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common prelude for keel crates
pub mod prelude {
    pub use super::{
        AllocError, AllocRange, AllocResult, MemRange, RawAllocator, SystemAllocator,
        runtime_allocator, runtime_terminate, runtime_terminate_set,
    };
}
