use thiserror::Error;

/// Failure to build a [`Vector`](crate::math::Vector) from foreign data.
///
/// Arithmetic on vectors never fails; only conversions do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("expected exactly 2 components, got {len}")]
    InvalidLength { len: usize },
    #[error("malformed vector string {0:?}, expected \"x: <x>, y: <y>\"")]
    MalformedString(String),
    #[error("invalid number {value:?} for axis {axis}")]
    InvalidNumber { axis: char, value: String },
}
