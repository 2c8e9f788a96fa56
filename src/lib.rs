//! # Mastermind Bot
//!
//! A multithreaded Mastermind solver using Knuth's worst-case minimax strategy.
//!
//! The solver keeps the set of codes still consistent with every feedback
//! observed so far, and at each round picks the guess that minimizes the
//! size of the largest feedback-partition bucket over that set. Three
//! scoring rules are supported: classic exact/color pegs, Manhattan
//! distance, and Hamming distance.

pub mod code;
pub mod error;
pub mod feedback;
pub mod hull;
pub mod solver;

pub use code::Code;
pub use error::{Result, SolverError};
pub use feedback::{Feedback, Oracle, Rule};
pub use solver::{GuessAnalysis, Outcome, Round, Solver, Transcript};

/// Default alphabet size (colors 1 through 6).
pub const DEFAULT_COLORS: u8 = 6;

/// Default code length.
pub const DEFAULT_POSITIONS: usize = 4;
