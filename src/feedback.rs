//! Feedback scoring for guesses.
//!
//! This module defines the feedback value produced by comparing a guess to
//! a target code, and the interchangeable scoring rules that produce it.
//! Every rule is a pure function of the two codes; the search engine only
//! depends on the [`Oracle`] capability, never on a concrete rule.

use crate::code::Code;
use std::fmt;
use std::str::FromStr;

/// The result of scoring a guess against a target.
///
/// `Pegs` is the classic two-number Mastermind feedback; `Distance` covers
/// the Manhattan and Hamming rules. Feedback values are the partition keys
/// of the minimax scan, so they are `Copy`, hashable and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    /// `hits` exact position matches and `near` right-symbol/wrong-position
    /// matches (no position counted twice).
    Pegs { hits: u8, near: u8 },
    /// A single non-negative distance.
    Distance(u32),
}

impl Feedback {
    /// Whether this feedback denotes a perfect match for codes of the given
    /// length.
    pub fn is_win(self, positions: usize) -> bool {
        match self {
            Feedback::Pegs { hits, .. } => usize::from(hits) == positions,
            Feedback::Distance(d) => d == 0,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Pegs { hits, near } => write!(f, "A={} B={}", hits, near),
            Feedback::Distance(d) => write!(f, "d={}", d),
        }
    }
}

/// A scoring rule: deterministic, pure, no state.
///
/// Both codes must have the same length; a mismatch is a programming error
/// and panics rather than being reported as a recoverable condition.
pub trait Oracle: Sync {
    fn score(&self, guess: &Code, target: &Code) -> Feedback;
}

/// The built-in scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `(A, B)`: exact matches, plus right-symbol/wrong-position matches
    /// counted over multisets so duplicates are never double counted.
    ExactColor,
    /// Sum of per-position absolute symbol differences.
    Manhattan,
    /// Count of mismatched positions.
    Hamming,
}

impl Rule {
    /// The conventional opening guess for this rule: the paired `(1,1,2,2)`
    /// pattern for peg feedback, the central code for distance feedback.
    /// The first round's worst case is identical for every guess, so the
    /// full scan would be wasted work.
    pub fn default_opening(self, colors: u8, positions: usize) -> Code {
        match self {
            Rule::ExactColor => Code::paired_opening(colors, positions),
            Rule::Manhattan | Rule::Hamming => Code::central_opening(colors, positions),
        }
    }

    /// Parse a feedback value as entered at the prompt: two numbers
    /// (`A B`) for exact/color feedback, one number for the distance rules.
    pub fn parse_feedback(self, input: &str) -> Option<Feedback> {
        let mut numbers = input.split_whitespace().map(str::parse::<u32>);
        match self {
            Rule::ExactColor => {
                let hits = numbers.next()?.ok()?;
                let near = numbers.next()?.ok()?;
                if numbers.next().is_some() || hits > 255 || near > 255 {
                    return None;
                }
                Some(Feedback::Pegs {
                    hits: hits as u8,
                    near: near as u8,
                })
            }
            Rule::Manhattan | Rule::Hamming => {
                let distance = numbers.next()?.ok()?;
                if numbers.next().is_some() {
                    return None;
                }
                Some(Feedback::Distance(distance))
            }
        }
    }
}

impl FromStr for Rule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" | "color" | "pegs" => Ok(Rule::ExactColor),
            "manhattan" | "taxicab" => Ok(Rule::Manhattan),
            "hamming" => Ok(Rule::Hamming),
            _ => Err(format!("unknown rule: {}", s)),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::ExactColor => "exact",
            Rule::Manhattan => "manhattan",
            Rule::Hamming => "hamming",
        };
        write!(f, "{}", name)
    }
}

impl Oracle for Rule {
    fn score(&self, guess: &Code, target: &Code) -> Feedback {
        let g = guess.symbols();
        let t = target.symbols();
        assert_eq!(g.len(), t.len(), "guess and target must have equal length");

        match self {
            Rule::ExactColor => {
                let mut hits: u16 = 0;
                let mut guess_counts = [0u16; 256];
                let mut target_counts = [0u16; 256];
                for (&gs, &ts) in g.iter().zip(t) {
                    if gs == ts {
                        hits += 1;
                    }
                    guess_counts[usize::from(gs)] += 1;
                    target_counts[usize::from(ts)] += 1;
                }
                let color_matches: u16 = (1..256)
                    .map(|s| guess_counts[s].min(target_counts[s]))
                    .sum();
                Feedback::Pegs {
                    hits: hits as u8,
                    near: (color_matches - hits) as u8,
                }
            }
            Rule::Manhattan => Feedback::Distance(
                g.iter()
                    .zip(t)
                    .map(|(&gs, &ts)| u32::from(gs.abs_diff(ts)))
                    .sum(),
            ),
            Rule::Hamming => {
                Feedback::Distance(g.iter().zip(t).filter(|(gs, ts)| gs != ts).count() as u32)
            }
        }
    }
}
