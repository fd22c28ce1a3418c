#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown unit: {0:?}")]
    UnknownUnit(String),
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
    #[error("timestamp {0}ms is outside the supported range")]
    OutOfRange(i64),
    #[error("arithmetic left the supported instant range")]
    Overflow,
}
