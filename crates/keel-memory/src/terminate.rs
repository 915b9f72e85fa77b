//! Per-thread process-termination hook
//!
//! The rest of the keel libraries call [`runtime_terminate`] when an
//! invariant is beyond repair. The hook is deliberately per-thread: one
//! thread installing a custom handler cannot silently change how another
//! thread dies.

use core::cell::Cell;

/// A termination handler: takes nothing, never returns.
pub type TerminateHandler = fn() -> !;

#[cfg(feature = "abort-handler")]
fn abort_handler() -> ! {
    std::process::abort()
}

#[cfg(feature = "abort-handler")]
const INITIAL_HANDLER: Option<TerminateHandler> = Some(abort_handler);
#[cfg(not(feature = "abort-handler"))]
const INITIAL_HANDLER: Option<TerminateHandler> = None;

thread_local! {
    static TERMINATE_HANDLER: Cell<Option<TerminateHandler>> =
        const { Cell::new(INITIAL_HANDLER) };
}

/// End execution through the current thread's termination handler.
///
/// An empty slot (possible only with the `abort-handler` feature disabled
/// and no handler ever installed) is a programming error; the process is
/// aborted deterministically rather than walking into undefined behavior.
pub fn runtime_terminate() -> ! {
    match TERMINATE_HANDLER.with(Cell::get) {
        Some(handler) => handler(),
        None => {
            #[cfg(feature = "logging")]
            tracing::error!("runtime_terminate called with no handler installed");

            std::process::abort()
        }
    }
}

/// Install `handler` as this thread's termination hook, returning the
/// previous one.
///
/// `None` uninstalls. Other threads' hooks are unaffected.
pub fn runtime_terminate_set(handler: Option<TerminateHandler>) -> Option<TerminateHandler> {
    #[cfg(feature = "logging")]
    tracing::debug!(installed = handler.is_some(), "terminate handler replaced");

    TERMINATE_HANDLER.with(|slot| slot.replace(handler))
}

/// The handler currently installed for this thread, if any.
pub fn runtime_terminate_handler() -> Option<TerminateHandler> {
    TERMINATE_HANDLER.with(Cell::get)
}
