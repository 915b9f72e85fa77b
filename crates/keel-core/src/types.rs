//! Scalar aliases used throughout the keel crates
//!
//! These exist so that byte-level signatures name their intent instead of
//! spelling the primitive type everywhere.

/// A single unsigned byte.
pub type Byte = u8;

/// A size or count measured in bytes.
pub type ByteSize = usize;
