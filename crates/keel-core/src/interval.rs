//! Interval bounds and interval-kind flags
//!
//! [`Bounds`] is the generic pair the rest of the keel crates use to describe
//! an interval's endpoints; [`IntervalKind`] records which of those endpoints
//! are closed. Neither type implements interval arithmetic.

use serde::{Deserialize, Serialize};

/// A `{lower, upper}` endpoint pair for an interval over `T`.
///
/// The pair is plain data: it does not enforce `lower <= upper`, does not
/// know whether its endpoints are open or closed (see [`IntervalKind`]), and
/// performs no arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds<T> {
    /// Lower endpoint
    pub lower: T,
    /// Upper endpoint
    pub upper: T,
}

impl<T> Bounds<T> {
    /// Create a new bounds pair
    pub const fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Return the pair with the endpoints swapped
    pub fn swapped(self) -> Self {
        Self {
            lower: self.upper,
            upper: self.lower,
        }
    }

    /// Map both endpoints through `f`
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Bounds<U> {
        Bounds {
            lower: f(self.lower),
            upper: f(self.upper),
        }
    }
}

/// Which endpoints of an interval are closed (included).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalKind {
    /// Neither endpoint included: `(lower, upper)`
    Open,
    /// Lower endpoint included: `[lower, upper)`
    LowerClosed,
    /// Upper endpoint included: `(lower, upper]`
    UpperClosed,
    /// Both endpoints included: `[lower, upper]`
    #[default]
    Closed,
}

impl IntervalKind {
    /// Build a kind from per-endpoint closed flags
    pub const fn from_flags(lower_closed: bool, upper_closed: bool) -> Self {
        match (lower_closed, upper_closed) {
            (false, false) => Self::Open,
            (true, false) => Self::LowerClosed,
            (false, true) => Self::UpperClosed,
            (true, true) => Self::Closed,
        }
    }

    /// Whether the lower endpoint is included
    pub const fn lower_closed(self) -> bool {
        matches!(self, Self::LowerClosed | Self::Closed)
    }

    /// Whether the upper endpoint is included
    pub const fn upper_closed(self) -> bool {
        matches!(self, Self::UpperClosed | Self::Closed)
    }
}
