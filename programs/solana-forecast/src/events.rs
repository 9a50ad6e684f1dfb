use anchor_lang::prelude::*;

use crate::state::market::{BetSide, Outcome};
use crate::state::platform::ParameterType;
use crate::state::proposal::VoteChoice;

// Every state transition emits exactly one event; the off-chain read
// replica is rebuilt from this stream and is never read by the program.

#[event]
pub struct PlatformInitialized {
    pub authority: Pubkey,
    pub treasury: Pubkey,
    pub platform_fee_bps: u16,
}

#[event]
pub struct ParameterUpdated {
    pub authority: Pubkey,
    pub param: ParameterType,
    pub old_value: u64,
    pub new_value: u64,
    pub timestamp: i64,
}

#[event]
pub struct ComponentRegistered {
    pub name: String,
    pub address: Pubkey,
    pub version: String,
}

#[event]
pub struct ProposalCreated {
    pub proposal_id: u64,
    pub creator: Pubkey,
    pub title: String,
    pub bond_amount: u64,
    pub voting_ends_at: i64,
    pub timestamp: i64,
}

#[event]
pub struct ProposalVoteCast {
    pub proposal_id: u64,
    pub voter: Pubkey,
    pub choice: VoteChoice,
    pub timestamp: i64,
}

#[event]
pub struct ProposalFinalized {
    pub proposal_id: u64,
    pub approved: bool,
    pub yes_votes: u32,
    pub no_votes: u32,
    pub timestamp: i64,
}

#[event]
pub struct BondRefunded {
    pub proposal_id: u64,
    pub creator: Pubkey,
    pub refund_amount: u64,
    pub slash_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct CreatorFeesClaimed {
    pub proposal_id: u64,
    pub creator: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct MarketCreated {
    pub market_id: u64,
    pub creator: Pubkey,
    pub title: String,
    pub end_date: i64,
    pub proposal_id: Option<u64>,
    pub timestamp: i64,
}

#[event]
pub struct BetPlaced {
    pub market_id: u64,
    pub bettor: Pubkey,
    pub side: BetSide,
    pub amount: u64,
    pub amount_to_pool: u64,
    pub yes_pool: u64,
    pub no_pool: u64,
    pub yes_probability_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct MarketCancelled {
    pub market_id: u64,
    pub yes_pool: u64,
    pub no_pool: u64,
    pub timestamp: i64,
}

#[event]
pub struct ResolutionOpened {
    pub market_id: u64,
    pub voting_ends_at: i64,
    pub timestamp: i64,
}

#[event]
pub struct ResolutionVoteCast {
    pub market_id: u64,
    pub voter: Pubkey,
    pub choice: VoteChoice,
    pub weight: u64,
    pub timestamp: i64,
}

#[event]
pub struct VotesAggregated {
    pub market_id: u64,
    pub yes_weight: u64,
    pub no_weight: u64,
    pub tentative_outcome: Outcome,
    pub dispute_ends_at: i64,
    pub timestamp: i64,
}

#[event]
pub struct ResolutionOverridden {
    pub market_id: u64,
    pub admin: Pubkey,
    pub new_outcome: Outcome,
    pub timestamp: i64,
}

#[event]
pub struct ResolutionFinalized {
    pub market_id: u64,
    pub outcome: Outcome,
    pub overridden: bool,
    pub yes_weight: u64,
    pub no_weight: u64,
    pub timestamp: i64,
}

#[event]
pub struct PayoutClaimed {
    pub market_id: u64,
    pub bettor: Pubkey,
    pub amount: u64,
    pub won: bool,
    pub timestamp: i64,
}
