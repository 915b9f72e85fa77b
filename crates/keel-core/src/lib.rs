//! # Keel Core
//!
//! Core types and constants for the keel foundation libraries.
//! This crate provides the header-level building blocks shared by the other
//! keel crates.
//!
//! ## Key Components
//!
//! - **Scalar aliases**: [`Byte`], [`ByteSize`]
//! - **Calendar types**: [`DayOfMonth`] and calendar constants
//! - **Intervals**: the [`Bounds`] pair and the [`IntervalKind`] flags
//!
//! No arithmetic is implemented on any of these; they are declarations only.
//! Date arithmetic, calendar conversion, and interval arithmetic live in the
//! higher-level keel crates.

#![warn(missing_docs)]

pub mod calendar;
pub mod interval;
pub mod types;

// Re-export main types for convenience
pub use calendar::*;
pub use interval::*;
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common prelude for keel crates
pub mod prelude {
    pub use super::{Bounds, Byte, ByteSize, DayOfMonth, IntervalKind};
}
