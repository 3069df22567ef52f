//! Error types.

/// Failure while building a tree from tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token: {}", _0)]
    UnexpectedToken(String),

    #[error("unexpected end of input")]
    UnexpectedEoi,

    #[error("unclosed parenthesis")]
    UnclosedParen,

    #[error("expected `)', found {}", _0)]
    ExpectedRParen(String),
}

/// Failure of a bounded saturation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaturationError {
    #[error("no fixpoint within {} passes", _0)]
    PassLimit(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("parse error: {}", _0)]
    Parse(#[from] ParseError),

    #[error("saturation error: {}", _0)]
    Saturation(#[from] SaturationError),
}
