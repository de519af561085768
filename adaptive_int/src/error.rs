use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while building or operating on an integer.
///
/// Every failure is data-dependent; nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The backend rejected the raw value.
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// The value has a shape the backend cannot hold, e.g. a float on an
    /// integer-only backend.
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// No radix could be detected from the string.
    #[error("unsupported numeric format: {0:?}")]
    UnsupportedNumericFormat(String),

    /// Radix outside `[2, 62]`, or a value outside the requested native type.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// The requested backend is not compiled in.
    #[error("adapter unavailable: {0}")]
    AdapterUnavailable(String),

    /// A non-zero scale was requested from an integer backend.
    #[error("invalid precision: integer backends only support scale 0, got {0}")]
    InvalidPrecision(u32),

    #[error("division by zero")]
    DivisionByZero,
}
