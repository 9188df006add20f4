//! Engine error types.

use derive_more::{Display, Error};

/// Error kind for engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Cell index outside 0-8.
    #[display("index {} is outside the board (0-8)", _0)]
    InvalidIndex(isize),

    /// Board with the wrong length or an unknown mark.
    #[display("invalid board: {}", _0)]
    InvalidBoard(String),

    /// Operation called on a board or with marks it does not accept.
    #[display("precondition violated: {}", _0)]
    PreconditionViolated(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What went wrong.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for [`EngineErrorKind::InvalidIndex`].
    #[track_caller]
    pub fn invalid_index(index: isize) -> Self {
        Self::new(EngineErrorKind::InvalidIndex(index))
    }

    /// Shorthand for [`EngineErrorKind::InvalidBoard`].
    #[track_caller]
    pub fn invalid_board(message: impl Into<String>) -> Self {
        Self::new(EngineErrorKind::InvalidBoard(message.into()))
    }

    /// Shorthand for [`EngineErrorKind::PreconditionViolated`].
    #[track_caller]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::new(EngineErrorKind::PreconditionViolated(message.into()))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }
}
