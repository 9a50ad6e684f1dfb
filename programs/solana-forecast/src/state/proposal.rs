use anchor_lang::prelude::*;

#[account]
pub struct Proposal {
    pub proposal_id: u64,
    pub creator: Pubkey,
    pub title: String,       // max 128 chars
    pub description: String, // max 512 chars
    pub bond_amount: u64,
    pub status: ProposalStatus,
    pub yes_votes: u32,
    pub no_votes: u32,
    pub total_voters: u32,
    pub created_at: i64,
    pub voting_ends_at: i64,
    pub market_end_date: i64, // resolution time for the market, if approved
    pub processed_at: Option<i64>,
    pub market_id: Option<u64>, // set once consumed by market creation
    pub bump: u8,
}

impl Proposal {
    // 8 (discriminator) + 8 (proposal_id) + 32 (creator)
    // 4 + 128 (title) + 4 + 512 (description) + 8 (bond_amount) + 1 (status)
    // 4 * 3 (vote tallies) + 8 * 3 (timestamps) + 9 (processed_at option)
    // 9 (market_id option) + 1 (bump)
    pub const LEN: usize =
        8 + 8 + 32 + (4 + 128) + (4 + 512) + 8 + 1 + 4 * 3 + 8 * 3 + 9 + 9 + 1;

    /// An approved proposal is only consumable while the market it would
    /// create still resolves in the future.
    pub fn market_schedulable(&self, now: i64) -> bool {
        self.market_end_date > now
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Debug, InitSpace)]
pub enum ProposalStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Debug, InitSpace)]
pub enum VoteChoice {
    Yes,
    No,
}

/// One record per (proposal, voter); the PDA seeds make a second vote from
/// the same wallet fail at account creation.
#[account]
pub struct ProposalVoteRecord {
    pub proposal_id: u64,
    pub voter: Pubkey,
    pub choice: VoteChoice,
    pub timestamp: i64,
    pub bump: u8,
}

impl ProposalVoteRecord {
    pub const LEN: usize = 8 + 8 + 32 + 1 + 8 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_approved_proposal_cannot_schedule_a_market() {
        let proposal = Proposal {
            proposal_id: 1,
            creator: Pubkey::new_unique(),
            title: "test".into(),
            description: String::new(),
            bond_amount: 100_000_000,
            status: ProposalStatus::Approved,
            yes_votes: 3,
            no_votes: 2,
            total_voters: 5,
            created_at: 0,
            voting_ends_at: 500,
            market_end_date: 1_000,
            processed_at: Some(500),
            market_id: None,
            bump: 255,
        };

        assert!(proposal.market_schedulable(999));
        // An end date at or before now would create a market born ended.
        assert!(!proposal.market_schedulable(1_000));
        assert!(!proposal.market_schedulable(2_000));
    }
}
