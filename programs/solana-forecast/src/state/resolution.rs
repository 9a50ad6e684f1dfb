use anchor_lang::prelude::*;

use crate::state::market::Outcome;
use crate::state::proposal::VoteChoice;

/// Post-market voting state. Phases, in order:
/// voting (until `voting_ends_at`) → aggregated + dispute window
/// (until `dispute_ends_at`) → finalized.
#[account]
pub struct ResolutionState {
    pub market_id: u64,
    pub yes_weight: u64,
    pub no_weight: u64,
    pub total_voters: u32,
    pub voting_ends_at: i64,
    pub aggregated: bool,
    pub tentative_outcome: Option<Outcome>,
    pub overridden: bool,
    pub dispute_ends_at: i64, // 0 until aggregation opens the window
    pub finalized: bool,
    pub finalized_at: Option<i64>,
    pub opened_at: i64,
    pub bump: u8,
}

impl ResolutionState {
    // 8 (discriminator) + 8 (market_id) + 8 * 2 (weights) + 4 (voters)
    // 8 (voting_ends_at) + 1 (aggregated) + 2 (tentative option)
    // 1 (overridden) + 8 (dispute_ends_at) + 1 (finalized)
    // 9 (finalized_at option) + 8 (opened_at) + 1 (bump)
    pub const LEN: usize = 8 + 8 + 8 * 2 + 4 + 8 + 1 + 2 + 1 + 8 + 1 + 9 + 8 + 1;

    pub fn voting_open(&self, now: i64) -> bool {
        !self.aggregated && now < self.voting_ends_at
    }

    pub fn in_dispute_window(&self, now: i64) -> bool {
        self.aggregated && !self.finalized && now < self.dispute_ends_at
    }
}

/// One record per (market, voter); PDA seeds enforce one resolution vote
/// per wallet per market.
#[account]
pub struct ResolutionVoteRecord {
    pub market_id: u64,
    pub voter: Pubkey,
    pub choice: VoteChoice,
    pub weight: u64,
    pub timestamp: i64,
    pub bump: u8,
}

impl ResolutionVoteRecord {
    pub const LEN: usize = 8 + 8 + 32 + 1 + 8 + 8 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ResolutionState {
        ResolutionState {
            market_id: 1,
            yes_weight: 0,
            no_weight: 0,
            total_voters: 0,
            voting_ends_at: 1_000,
            aggregated: false,
            tentative_outcome: None,
            overridden: false,
            dispute_ends_at: 0,
            finalized: false,
            finalized_at: None,
            opened_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn voting_closes_at_the_deadline() {
        let s = state();
        assert!(s.voting_open(999));
        assert!(!s.voting_open(1_000));
    }

    #[test]
    fn aggregation_closes_voting_early() {
        let mut s = state();
        s.aggregated = true;
        assert!(!s.voting_open(0));
    }

    #[test]
    fn dispute_window_requires_aggregation() {
        let mut s = state();
        assert!(!s.in_dispute_window(1_500));

        s.aggregated = true;
        s.dispute_ends_at = 2_000;
        assert!(s.in_dispute_window(1_999));
        assert!(!s.in_dispute_window(2_000));

        s.finalized = true;
        assert!(!s.in_dispute_window(1_999));
    }
}
