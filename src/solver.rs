//! Minimax search engine.
//!
//! Implements Knuth's worst-case strategy: for every guess in the full
//! universe, partition the remaining candidates by the feedback each would
//! produce, and pick the guess whose largest partition bucket is smallest.
//! Guessing outside the candidate set is legal and sometimes optimal, which
//! is why the scan always covers the whole universe.

use crate::code::Code;
use crate::error::{Result, SolverError};
use crate::feedback::{Feedback, Oracle};
use crate::hull;
use rayon::prelude::*;
use std::collections::HashMap;

/// Result of analyzing a potential guess.
#[derive(Debug, Clone)]
pub struct GuessAnalysis {
    pub code: Code,
    /// Size of the largest feedback-partition bucket this guess leaves.
    pub worst_case: usize,
    /// Whether the guess is still a possible secret.
    pub is_candidate: bool,
}

/// One round of a session: the guess made and the feedback observed.
#[derive(Debug, Clone)]
pub struct Round {
    pub number: usize,
    pub guess: Code,
    pub feedback: Feedback,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { rounds: usize },
    OutOfRounds { rounds: usize },
}

/// The full record of a driving-loop session.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub rounds: Vec<Round>,
    pub outcome: Outcome,
}

/// The minimax solver: the universe, the shrinking candidate set, and the
/// scoring rule. Each round replaces the candidate set with a filtered copy
/// rather than mutating it, preserving the universe's lexicographic order
/// throughout.
#[derive(Debug, Clone)]
pub struct Solver<O: Oracle> {
    universe: Vec<Code>,
    candidates: Vec<Code>,
    oracle: O,
    colors: u8,
    positions: usize,
    hull_pruning: bool,
}

impl<O: Oracle> Solver<O> {
    pub fn new(colors: u8, positions: usize, oracle: O) -> Self {
        let universe = Code::universe(colors, positions);
        Self {
            candidates: universe.clone(),
            universe,
            oracle,
            colors,
            positions,
            hull_pruning: false,
        }
    }

    /// Enable the redundant convex-hull pruning pass. Only has an effect on
    /// two-position codes; see [`crate::hull`].
    pub fn set_hull_pruning(&mut self, enabled: bool) {
        self.hull_pruning = enabled;
    }

    pub fn colors(&self) -> u8 {
        self.colors
    }

    pub fn positions(&self) -> usize {
        self.positions
    }

    pub fn universe(&self) -> &[Code] {
        &self.universe
    }

    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Restore the candidate set to the full universe.
    pub fn reset(&mut self) {
        self.candidates = self.universe.clone();
    }

    /// The largest feedback-partition bucket `guess` would leave among the
    /// current candidates.
    pub fn worst_case_for(&self, guess: &Code) -> usize {
        let mut partition: HashMap<Feedback, usize> = HashMap::new();
        for candidate in &self.candidates {
            *partition
                .entry(self.oracle.score(guess, candidate))
                .or_insert(0) += 1;
        }
        partition.values().copied().max().unwrap_or(0)
    }

    /// Pick the next guess by exhaustive worst-case analysis over the whole
    /// universe. Ties are broken by preferring a guess that is still a
    /// candidate, then by the smallest universe ordinal, so the choice is
    /// fully deterministic. Returns `None` when no candidates remain.
    pub fn select_guess(&self) -> Option<Code> {
        if self.candidates.is_empty() {
            return None;
        }
        // A lone candidate is itself the best guess; skip the scan.
        if self.candidates.len() == 1 {
            return Some(self.candidates[0].clone());
        }

        // The key orders by (worst case, outside-candidate-set, ordinal);
        // the ordinal is unique, so the parallel min is deterministic.
        let (_, _, ordinal) = self
            .universe
            .par_iter()
            .enumerate()
            .map(|(ordinal, guess)| {
                let worst_case = self.worst_case_for(guess);
                let outside = self.candidates.binary_search(guess).is_err();
                (worst_case, outside, ordinal)
            })
            .min()?;
        Some(self.universe[ordinal].clone())
    }

    /// All guesses ranked by the tie-break order, truncated to `n`. Used by
    /// the interactive assistant.
    pub fn best_guesses(&self, n: usize) -> Vec<GuessAnalysis> {
        if self.candidates.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<(usize, bool, usize)> = self
            .universe
            .par_iter()
            .enumerate()
            .map(|(ordinal, guess)| {
                let worst_case = self.worst_case_for(guess);
                let outside = self.candidates.binary_search(guess).is_err();
                (worst_case, outside, ordinal)
            })
            .collect();
        ranked.sort_unstable();
        ranked.truncate(n);

        ranked
            .into_iter()
            .map(|(worst_case, outside, ordinal)| GuessAnalysis {
                code: self.universe[ordinal].clone(),
                worst_case,
                is_candidate: !outside,
            })
            .collect()
    }

    /// Replace the candidate set with the codes consistent with the
    /// observed feedback, preserving their order. Returns the new count.
    pub fn apply_feedback(&mut self, guess: &Code, feedback: Feedback) -> usize {
        self.candidates = self
            .candidates
            .iter()
            .filter(|candidate| self.oracle.score(guess, candidate) == feedback)
            .cloned()
            .collect();
        if self.hull_pruning && self.positions == 2 {
            self.candidates = hull::retain_in_hull(std::mem::take(&mut self.candidates));
        }
        log::debug!(
            "filtered on {} {} -> {} candidates",
            guess,
            feedback,
            self.candidates.len()
        );
        self.candidates.len()
    }

    /// Drive a full session against an external feedback source.
    ///
    /// `opening` seeds the first guess without running the scan; when it is
    /// `None` the first guess is computed like any other. `max_rounds` is an
    /// external policy cap, reported distinctly from success and from
    /// inconsistency. An empty candidate set after filtering means the
    /// feedback sequence matched no code at all and is surfaced as
    /// [`SolverError::NoCandidatesRemain`].
    pub fn solve_with_feedback<F>(
        &mut self,
        opening: Option<Code>,
        max_rounds: Option<usize>,
        mut get_feedback: F,
    ) -> Result<Transcript>
    where
        F: FnMut(&Code) -> Feedback,
    {
        let mut rounds = Vec::new();
        let mut next = opening;

        loop {
            let number = rounds.len() + 1;
            if let Some(cap) = max_rounds {
                if number > cap {
                    return Ok(Transcript {
                        rounds,
                        outcome: Outcome::OutOfRounds { rounds: cap },
                    });
                }
            }

            let guess = match next.take() {
                Some(seeded) => seeded,
                None => self.select_guess().ok_or(SolverError::NoCandidatesRemain)?,
            };
            let feedback = get_feedback(&guess);
            log::debug!("round {}: guess {} => {}", number, guess, feedback);
            rounds.push(Round {
                number,
                guess: guess.clone(),
                feedback,
            });

            if feedback.is_win(self.positions) {
                return Ok(Transcript {
                    rounds,
                    outcome: Outcome::Solved { rounds: number },
                });
            }

            if self.apply_feedback(&guess, feedback) == 0 {
                return Err(SolverError::NoCandidatesRemain);
            }
        }
    }

    /// Solve with an honest oracle for a known secret.
    pub fn solve_for_target(
        &mut self,
        secret: &Code,
        opening: Option<Code>,
        max_rounds: Option<usize>,
    ) -> Result<Transcript>
    where
        O: Clone,
    {
        let oracle = self.oracle.clone();
        let secret = secret.clone();
        self.solve_with_feedback(opening, max_rounds, move |guess| {
            oracle.score(guess, &secret)
        })
    }

    /// Average rounds to solve every code in the universe as the secret.
    pub fn benchmark_average_rounds(&self, opening: Option<&Code>) -> Result<f64>
    where
        O: Clone + Send,
    {
        let counts = self.benchmark_counts(opening)?;
        let total: usize = counts.iter().sum();
        Ok(total as f64 / counts.len() as f64)
    }

    /// Distribution of round counts across every possible secret, as
    /// `(rounds, secrets)` pairs.
    pub fn benchmark_round_distribution(
        &self,
        opening: Option<&Code>,
    ) -> Result<Vec<(usize, usize)>>
    where
        O: Clone + Send,
    {
        let counts = self.benchmark_counts(opening)?;
        let max_rounds = counts.iter().copied().max().unwrap_or(0);
        let mut distribution = vec![0usize; max_rounds + 1];
        for count in counts {
            distribution[count] += 1;
        }

        Ok(distribution
            .into_iter()
            .enumerate()
            .filter(|(_, secrets)| *secrets > 0)
            .collect())
    }

    fn benchmark_counts(&self, opening: Option<&Code>) -> Result<Vec<usize>>
    where
        O: Clone + Send,
    {
        self.universe
            .par_iter()
            .map(|secret| {
                let mut solver = self.clone();
                solver.reset();
                solver
                    .solve_for_target(secret, opening.cloned(), None)
                    .map(|transcript| transcript.rounds.len())
            })
            .collect()
    }
}
