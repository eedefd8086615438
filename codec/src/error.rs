//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum Error {
    /// Not enough bytes remain before the cursor's end bound to complete the
    /// requested read.
    ///
    /// This is the ordinary outcome when parsing a partially received record:
    /// buffer more input and retry the record from its original position.
    #[error("insufficient data in buffer")]
    InsufficientData,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid varint")]
    InvalidVarint,
    #[error("invalid bool word: {0}")]
    InvalidBool(u32),
    #[error("invalid char code unit: {0:#06x}")]
    InvalidChar(u16),
    #[error("invalid utf-16 code units")]
    InvalidUtf16,
    #[error("length out of range: {0}")]
    InvalidLength(usize),
}
