//! Types for use as [`crate::Read`] configuration.

use core::ops::{Bound, RangeBounds};

/// Bounds the allowable length of a decoded collection.
///
/// A length prefix in untrusted input could otherwise request an arbitrarily
/// large allocation before any element bytes are validated. Decodes of
/// collections with variable-size elements take a `RangeCfg` so the caller
/// states the lengths it is prepared to accept.
///
/// # Examples
///
/// ```
/// use freshet_codec::RangeCfg;
///
/// let cfg = RangeCfg::new(0..=1024);
/// assert!(cfg.contains(500));
/// assert!(!cfg.contains(2000));
///
/// // Any length is acceptable (trusted input).
/// let cfg: RangeCfg = (..).into();
/// assert!(cfg.contains(usize::MAX));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeCfg {
    start: Bound<usize>,
    end: Bound<usize>,
}

impl RangeCfg {
    /// Creates a `RangeCfg` from any range over `usize`.
    pub fn new(range: impl RangeBounds<usize>) -> Self {
        Self {
            start: range.start_bound().cloned(),
            end: range.end_bound().cloned(),
        }
    }

    /// Creates a `RangeCfg` that accepts exactly `len`.
    pub fn exact(len: usize) -> Self {
        Self {
            start: Bound::Included(len),
            end: Bound::Included(len),
        }
    }

    /// Returns true if `len` is within the configured bounds.
    pub fn contains(&self, len: usize) -> bool {
        match self.start {
            Bound::Included(start) if len < start => return false,
            Bound::Excluded(start) if len <= start => return false,
            _ => {}
        }
        match self.end {
            Bound::Included(end) if len > end => return false,
            Bound::Excluded(end) if len >= end => return false,
            _ => {}
        }
        true
    }
}

impl From<core::ops::Range<usize>> for RangeCfg {
    fn from(range: core::ops::Range<usize>) -> Self {
        Self::new(range)
    }
}

impl From<core::ops::RangeInclusive<usize>> for RangeCfg {
    fn from(range: core::ops::RangeInclusive<usize>) -> Self {
        Self::new(range)
    }
}

impl From<core::ops::RangeFrom<usize>> for RangeCfg {
    fn from(range: core::ops::RangeFrom<usize>) -> Self {
        Self::new(range)
    }
}

impl From<core::ops::RangeTo<usize>> for RangeCfg {
    fn from(range: core::ops::RangeTo<usize>) -> Self {
        Self::new(range)
    }
}

impl From<core::ops::RangeToInclusive<usize>> for RangeCfg {
    fn from(range: core::ops::RangeToInclusive<usize>) -> Self {
        Self::new(range)
    }
}

impl From<core::ops::RangeFull> for RangeCfg {
    fn from(_: core::ops::RangeFull) -> Self {
        Self::new(..)
    }
}
