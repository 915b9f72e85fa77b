//! Process-wide default allocator accessor
//!
//! One slot per process, initialized lazily to [`SystemAllocator`]. A custom
//! default can be installed exactly once, before the slot is first observed;
//! [`AllocRange`](crate::alloc_range::AllocRange) routes every allocation
//! through this accessor.

use once_cell::sync::OnceCell;

use super::{SystemAllocator, ThreadSafeRawAllocator};
use crate::error::{AllocError, AllocResult};

static SYSTEM: SystemAllocator = SystemAllocator::new();
static RUNTIME_ALLOCATOR: OnceCell<&'static dyn ThreadSafeRawAllocator> = OnceCell::new();

/// Returns the installed process-wide default allocator.
///
/// Defaults to the [`SystemAllocator`] on first observation.
#[inline]
pub fn runtime_allocator() -> &'static dyn ThreadSafeRawAllocator {
    *RUNTIME_ALLOCATOR.get_or_init(|| &SYSTEM)
}

/// Installs `allocator` as the process-wide default.
///
/// Must happen before the default is first observed; at most one
/// installation can succeed. Blocks handed out by the previous observations
/// would otherwise be freed through the wrong allocator.
pub fn install_runtime_allocator(
    allocator: &'static dyn ThreadSafeRawAllocator,
) -> AllocResult<()> {
    RUNTIME_ALLOCATOR
        .set(allocator)
        .map_err(|_| AllocError::AllocatorInstalled)?;

    #[cfg(feature = "logging")]
    tracing::debug!("runtime allocator installed");

    Ok(())
}
