use crate::Trit;
use serde::{Deserialize, Serialize};

/// Counts of each ballot kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub positive: usize,
    pub negative: usize,
    pub abstain: usize,
}

impl VoteTally {
    pub fn from_trits(votes: &[Trit]) -> Self {
        let mut tally = Self::default();
        for &vote in votes {
            tally.record(vote);
        }
        tally
    }

    /// Raw ballots: anything other than `1` or `-1` counts as an abstention
    pub fn from_raw(votes: &[i8]) -> Self {
        let mut tally = Self::default();
        for &vote in votes {
            tally.record(Trit::from_i8_lossy(vote));
        }
        tally
    }

    pub fn record(&mut self, vote: Trit) {
        match vote {
            Trit::Positive => self.positive += 1,
            Trit::Negative => self.negative += 1,
            Trit::Zero => self.abstain += 1,
        }
    }

    /// Simple majority of positive over negative; a tie is `Zero`.
    /// Abstentions never change the outcome.
    pub fn outcome(&self) -> Trit {
        match self.positive.cmp(&self.negative) {
            std::cmp::Ordering::Greater => Trit::Positive,
            std::cmp::Ordering::Less => Trit::Negative,
            std::cmp::Ordering::Equal => Trit::Zero,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.abstain
    }
}

pub fn ternary_vote(votes: &[Trit]) -> Trit {
    VoteTally::from_trits(votes).outcome()
}
