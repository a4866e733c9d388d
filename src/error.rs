use thiserror::Error;

/// Everything that can go wrong while converting in either direction. All of
/// these are terminal for the current conversion: the input is static, so
/// retrying without changing it cannot succeed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BmcError {
    #[error("input truncated at byte {offset}: needed {needed} more byte(s)")]
    TruncatedInput { offset: usize, needed: usize },

    #[error("unsupported layout at byte {offset}: {reason}")]
    UnsupportedLayout { offset: usize, reason: String },

    #[error("malformed color record: got {got} byte(s), expected {expected}")]
    MalformedRecord { got: usize, expected: usize },

    #[error("invalid hex color {value:?}: expected {expected} hex digits")]
    InvalidHexString { value: String, expected: usize },

    #[error("group size must be at least 1")]
    InvalidGroupSize,

    #[error("invalid JSON shape at {path}: {reason}")]
    InvalidJsonShape { path: String, reason: String },
}
