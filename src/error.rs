//! Error taxonomy for the solver crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("symbol {symbol} out of range 1..={colors}")]
    SymbolOutOfRange { symbol: u8, colors: u8 },

    #[error("invalid symbol: {token:?}")]
    InvalidSymbol { token: String },

    #[error("code length mismatch: expected {expected} symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("no candidate codes remain consistent with the observed feedback")]
    NoCandidatesRemain,
}

pub type Result<T> = std::result::Result<T, SolverError>;
