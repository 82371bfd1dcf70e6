use crate::Cell;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A step result that does not fit the current live set. Always an
    /// engine bug; the step is abandoned.
    #[error("step result inconsistent with live set at {cell}: {reason}")]
    PreconditionViolation { cell: Cell, reason: &'static str },

    #[error("coordinate ({x}, {y}) is outside the grid")]
    InvalidCoordinate { x: i64, y: i64 },

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
