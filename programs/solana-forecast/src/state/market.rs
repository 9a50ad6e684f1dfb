use anchor_lang::prelude::*;

pub const MAX_TITLE_LEN: usize = 128;
pub const MAX_DESCRIPTION_LEN: usize = 512;

#[account]
pub struct Market {
    pub market_id: u64,
    pub creator: Pubkey,
    pub title: String,       // max 128 chars
    pub description: String, // max 512 chars
    pub end_date: i64,       // betting closes, resolution voting opens
    pub status: MarketStatus,

    // Pools hold net stakes (gross minus fees). Invariant:
    // total_pool() == yes_pool + no_pool at every observed state.
    pub yes_pool: u64,
    pub no_pool: u64,
    pub total_volume: u64, // gross, for stats

    // Fee lamports accrued per destination. They stay in the market PDA
    // until finalization so a cancelled market can return full stakes.
    pub accrued_platform_fees: u64,
    pub accrued_team_fees: u64,
    pub accrued_burn_fees: u64,
    pub accrued_creator_fees: u64,

    // Creator fee rate snapshotted at creation (bond-tier dependent,
    // zero for markets created without a proposal bond).
    pub creator_fee_bps: u16,

    // Payout bookkeeping (prevents over-claiming)
    pub total_claimed: u64,

    pub resolved_outcome: Option<Outcome>,
    pub proposal_id: Option<u64>, // set when created from an approved proposal
    pub created_at: i64,
    pub total_bets: u64,
    pub bump: u8,
}

impl Market {
    // 8 (discriminator) + 8 (market_id) + 32 (creator)
    // 4 + 128 (title) + 4 + 512 (description) + 8 (end_date) + 1 (status)
    // 8 * 3 (pools + volume) + 8 * 4 (accrued fees) + 2 (creator_fee_bps)
    // 8 (total_claimed) + 2 (resolved_outcome option) + 9 (proposal_id option)
    // 8 (created_at) + 8 (total_bets) + 1 (bump)
    pub const LEN: usize = 8 + 8 + 32 + (4 + 128) + (4 + 512) + 8 + 1
        + 8 * 3 + 8 * 4 + 2 + 8 + 2 + 9 + 8 + 8 + 1;

    pub fn total_pool(&self) -> u64 {
        self.yes_pool + self.no_pool
    }

    pub fn pool_for(&self, side: BetSide) -> u64 {
        match side {
            BetSide::Yes => self.yes_pool,
            BetSide::No => self.no_pool,
        }
    }

    pub fn accepts_bets(&self, now: i64) -> bool {
        self.status == MarketStatus::Active && now < self.end_date
    }

    /// Aggregation only advances a market that entered resolution voting.
    /// A cancelled market never re-enters the pipeline.
    pub fn awaiting_aggregation(&self) -> bool {
        self.status == MarketStatus::Ended
    }

    /// Finalization only closes a market sitting in its dispute window.
    pub fn in_dispute(&self) -> bool {
        self.status == MarketStatus::DisputeWindow
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Debug, InitSpace)]
pub enum MarketStatus {
    Active,
    Ended,         // past end_date, resolution voting underway
    DisputeWindow, // tentative outcome posted, admin may override
    Resolved,
    Cancelled,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Debug, InitSpace)]
pub enum BetSide {
    Yes,
    No,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Debug, InitSpace)]
pub enum Outcome {
    Yes,
    No,
    Cancelled,
}

impl BetSide {
    pub fn wins(&self, outcome: Outcome) -> bool {
        matches!(
            (self, outcome),
            (BetSide::Yes, Outcome::Yes) | (BetSide::No, Outcome::No)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(status: MarketStatus) -> Market {
        Market {
            market_id: 1,
            creator: Pubkey::new_unique(),
            title: "test".into(),
            description: String::new(),
            end_date: 1_000,
            status,
            yes_pool: 0,
            no_pool: 0,
            total_volume: 0,
            accrued_platform_fees: 0,
            accrued_team_fees: 0,
            accrued_burn_fees: 0,
            accrued_creator_fees: 0,
            creator_fee_bps: 0,
            total_claimed: 0,
            resolved_outcome: None,
            proposal_id: None,
            created_at: 0,
            total_bets: 0,
            bump: 255,
        }
    }

    #[test]
    fn resolution_gates_follow_the_status_order() {
        assert!(market(MarketStatus::Ended).awaiting_aggregation());
        assert!(!market(MarketStatus::Ended).in_dispute());

        assert!(market(MarketStatus::DisputeWindow).in_dispute());
        assert!(!market(MarketStatus::DisputeWindow).awaiting_aggregation());
    }

    #[test]
    fn cancelled_market_exits_the_pipeline() {
        // Cancellation is terminal: no more bets, no aggregation, no
        // finalization on top of a vault already paying gross refunds.
        let m = market(MarketStatus::Cancelled);
        assert!(!m.accepts_bets(0));
        assert!(!m.awaiting_aggregation());
        assert!(!m.in_dispute());
    }

    #[test]
    fn resolved_market_is_terminal_too() {
        let m = market(MarketStatus::Resolved);
        assert!(!m.accepts_bets(0));
        assert!(!m.awaiting_aggregation());
        assert!(!m.in_dispute());
    }
}
