//! Codes and the code universe.
//!
//! A code is an ordered sequence of symbols drawn from the alphabet
//! `1..=colors`. The universe is every such code of a given length, in
//! lexicographic order; a code's position in that enumeration doubles as
//! the deterministic tie-break key for the search engine.

use crate::error::{Result, SolverError};
use rand::Rng;
use std::fmt;

/// A fixed-length sequence of symbols from a bounded alphabet.
///
/// The derived `Ord` is lexicographic over the symbols, which matches the
/// enumeration order of [`Code::universe`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(Vec<u8>);

impl Code {
    /// Build a code, validating every symbol against the alphabet bound.
    pub fn new(symbols: Vec<u8>, colors: u8) -> Result<Self> {
        for &symbol in &symbols {
            if symbol < 1 || symbol > colors {
                return Err(SolverError::SymbolOutOfRange { symbol, colors });
            }
        }
        Ok(Self(symbols))
    }

    /// Parse a code from whitespace-separated symbols, e.g. `"1 1 2 2"`.
    pub fn parse(input: &str, colors: u8, positions: usize) -> Result<Self> {
        let symbols: Vec<u8> = input
            .split_whitespace()
            .map(|token| {
                token.parse::<u8>().map_err(|_| SolverError::InvalidSymbol {
                    token: token.to_string(),
                })
            })
            .collect::<Result<_>>()?;
        if symbols.len() != positions {
            return Err(SolverError::LengthMismatch {
                expected: positions,
                actual: symbols.len(),
            });
        }
        Self::new(symbols, colors)
    }

    pub fn symbols(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The code's value as a base-`colors` number with symbols shifted to
    /// start at 0. Equal to its index in [`Code::universe`].
    pub fn ordinal(&self, colors: u8) -> u64 {
        self.0
            .iter()
            .fold(0u64, |value, &symbol| {
                value * u64::from(colors) + u64::from(symbol - 1)
            })
    }

    /// Enumerate the full universe of `colors^positions` codes in
    /// lexicographic order.
    pub fn universe(colors: u8, positions: usize) -> Vec<Code> {
        assert!(colors >= 1, "alphabet must have at least one symbol");
        let mut codes = Vec::with_capacity((colors as usize).pow(positions as u32));
        let mut current = vec![1u8; positions];
        loop {
            codes.push(Code(current.clone()));
            // Odometer increment, most significant symbol first.
            let mut i = positions;
            loop {
                if i == 0 {
                    return codes;
                }
                i -= 1;
                if current[i] < colors {
                    current[i] += 1;
                    break;
                }
                current[i] = 1;
            }
        }
    }

    /// A uniformly random code, for secret generation.
    pub fn random<R: Rng + ?Sized>(colors: u8, positions: usize, rng: &mut R) -> Code {
        Code((0..positions).map(|_| rng.gen_range(1..=colors)).collect())
    }

    /// Knuth's opening for exact/color feedback, generalized: the first half
    /// of the positions hold symbol 1 and the rest symbol 2 (so `(1,1,2,2)`
    /// for four positions and at least two colors).
    pub fn paired_opening(colors: u8, positions: usize) -> Code {
        let second = if colors >= 2 { 2 } else { 1 };
        let half = positions / 2;
        let mut symbols = vec![1u8; positions - half];
        symbols.extend(std::iter::repeat(second).take(half));
        Code(symbols)
    }

    /// The mid-alphabet symbol repeated in every position, the opening used
    /// with distance feedback.
    pub fn central_opening(colors: u8, positions: usize) -> Code {
        Code(vec![colors / 2 + 1; positions])
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_is_lexicographic_and_complete() {
        let universe = Code::universe(3, 2);
        assert_eq!(universe.len(), 9);
        assert_eq!(universe[0].symbols(), &[1, 1]);
        assert_eq!(universe[8].symbols(), &[3, 3]);
        for window in universe.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn ordinal_matches_universe_index() {
        let universe = Code::universe(4, 3);
        for (index, code) in universe.iter().enumerate() {
            assert_eq!(code.ordinal(4), index as u64);
        }
    }

    #[test]
    fn new_rejects_out_of_range_symbols() {
        assert!(Code::new(vec![1, 7, 2], 6).is_err());
        assert!(Code::new(vec![1, 0, 2], 6).is_err());
        assert!(Code::new(vec![1, 6, 2], 6).is_ok());
    }

    #[test]
    fn parse_checks_length_and_range() {
        assert!(Code::parse("1 1 2 2", 6, 4).is_ok());
        assert!(matches!(
            Code::parse("1 1 2", 6, 4),
            Err(SolverError::LengthMismatch { expected: 4, actual: 3 })
        ));
        assert!(Code::parse("1 1 2 9", 6, 4).is_err());
        assert!(matches!(
            Code::parse("1 x 2 2", 6, 4),
            Err(SolverError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn openings() {
        assert_eq!(Code::paired_opening(6, 4).symbols(), &[1, 1, 2, 2]);
        assert_eq!(Code::paired_opening(6, 5).symbols(), &[1, 1, 1, 2, 2]);
        assert_eq!(Code::central_opening(6, 4).symbols(), &[4, 4, 4, 4]);
    }
}
