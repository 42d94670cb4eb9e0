//! Bounded ranked list of candidate moves
//!
//! Holds at most `breadth` entries ordered best-first for one side. A new
//! entry goes in front of the first entry it strictly beats and the last
//! entry falls off. Equal values never displace an existing entry, so among
//! equally scored moves the earliest offered one ranks highest.

use crate::board::{Color, Move};

/// A move paired with its score from White's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatedMove {
    pub mv: Move,
    pub value: i32,
}

impl EvaluatedMove {
    #[inline]
    pub fn new(mv: Move, value: i32) -> Self {
        Self { mv, value }
    }
}

/// Top-`breadth` candidates for `mover`
#[derive(Debug, Clone)]
pub struct Shortlist {
    mover: Color,
    breadth: usize,
    slots: Vec<EvaluatedMove>,
}

impl Shortlist {
    pub fn new(breadth: usize, mover: Color) -> Self {
        Self {
            mover,
            breadth,
            slots: Vec::with_capacity(breadth),
        }
    }

    /// Insert `candidate` at the first slot it strictly beats.
    ///
    /// Unfilled slots hold the mover's worst score, so they are beaten by any
    /// real value. Returns whether the candidate was kept.
    pub fn offer(&mut self, candidate: EvaluatedMove) -> bool {
        let worst = self.mover.worst_score();
        let slot = (0..self.breadth).find(|&i| {
            let current = self.slots.get(i).map_or(worst, |e| e.value);
            self.mover.prefers(candidate.value, current)
        });

        match slot {
            Some(i) => {
                self.slots.insert(i, candidate);
                self.slots.truncate(self.breadth);
                true
            }
            None => false,
        }
    }

    /// Highest ranked entry
    #[inline]
    pub fn best(&self) -> Option<EvaluatedMove> {
        self.slots.first().copied()
    }

    /// Filled slots, best first
    pub fn iter(&self) -> impl Iterator<Item = &EvaluatedMove> {
        self.slots.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
