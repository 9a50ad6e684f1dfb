use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;
use state::bond::BondTier;
use state::market::{BetSide, Outcome};
use state::platform::ParameterType;
use state::proposal::VoteChoice;

declare_id!("6BBZWsJZq23k2NX3YnENgXTEPhbVEHXYmPxmamN83eEV");

#[program]
pub mod solana_forecast {
    use super::*;

    // ---- platform administration ----

    pub fn init_platform(ctx: Context<InitPlatform>) -> Result<()> {
        instructions::admin::init_platform::process_init_platform(ctx)
    }

    pub fn update_parameter(
        ctx: Context<UpdateParameter>,
        param: ParameterType,
        new_value: u64,
    ) -> Result<()> {
        instructions::admin::update_parameter::process_update_parameter(ctx, param, new_value)
    }

    pub fn cancel_market(ctx: Context<CancelMarket>) -> Result<()> {
        instructions::admin::cancel_market::process_cancel_market(ctx)
    }

    // ---- component registry ----

    pub fn init_registry(ctx: Context<InitRegistry>) -> Result<()> {
        instructions::registry::init_registry::process_init_registry(ctx)
    }

    pub fn register_component(
        ctx: Context<RegisterComponent>,
        name: String,
        address: Pubkey,
        version: String,
    ) -> Result<()> {
        instructions::registry::register_component::process_register_component(
            ctx, name, address, version,
        )
    }

    // ---- proposal governance ----

    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        proposal_id: u64,
        title: String,
        description: String,
        voting_ends_at: i64,
        market_end_date: i64,
        tier: BondTier,
    ) -> Result<()> {
        instructions::proposal::create_proposal::process_create_proposal(
            ctx,
            proposal_id,
            title,
            description,
            voting_ends_at,
            market_end_date,
            tier,
        )
    }

    pub fn vote_on_proposal(ctx: Context<VoteOnProposal>, choice: VoteChoice) -> Result<()> {
        instructions::proposal::vote_on_proposal::process_vote_on_proposal(ctx, choice)
    }

    pub fn finalize_proposal(ctx: Context<FinalizeProposal>) -> Result<()> {
        instructions::proposal::finalize_proposal::process_finalize_proposal(ctx)
    }

    pub fn create_market_from_proposal(
        ctx: Context<CreateMarketFromProposal>,
        market_id: u64,
    ) -> Result<()> {
        instructions::proposal::create_market_from_proposal::process_create_market_from_proposal(
            ctx, market_id,
        )
    }

    // ---- markets and betting ----

    pub fn create_market(
        ctx: Context<CreateMarket>,
        market_id: u64,
        title: String,
        description: String,
        end_date: i64,
    ) -> Result<()> {
        instructions::market::create_market::process_create_market(
            ctx,
            market_id,
            title,
            description,
            end_date,
        )
    }

    pub fn place_bet(ctx: Context<PlaceBet>, side: BetSide, amount: u64) -> Result<()> {
        instructions::market::place_bet::process_place_bet(ctx, side, amount)
    }

    pub fn claim_payout(ctx: Context<ClaimPayout>) -> Result<()> {
        instructions::market::claim_payout::process_claim_payout(ctx)
    }

    // ---- resolution ----

    pub fn open_resolution(ctx: Context<OpenResolution>) -> Result<()> {
        instructions::resolution::open_resolution::process_open_resolution(ctx)
    }

    pub fn submit_resolution_vote(
        ctx: Context<SubmitResolutionVote>,
        choice: VoteChoice,
    ) -> Result<()> {
        instructions::resolution::submit_vote::process_submit_resolution_vote(ctx, choice)
    }

    pub fn aggregate_votes(ctx: Context<AggregateVotes>) -> Result<()> {
        instructions::resolution::aggregate_votes::process_aggregate_votes(ctx)
    }

    pub fn admin_override_resolution(
        ctx: Context<AdminOverrideResolution>,
        new_outcome: Outcome,
    ) -> Result<()> {
        instructions::resolution::admin_override::process_admin_override_resolution(
            ctx,
            new_outcome,
        )
    }

    pub fn finalize_resolution(ctx: Context<FinalizeResolution>) -> Result<()> {
        instructions::resolution::finalize_resolution::process_finalize_resolution(ctx)
    }

    // ---- creator fees ----

    pub fn claim_creator_fees(ctx: Context<ClaimCreatorFees>) -> Result<()> {
        instructions::bond::claim_creator_fees::process_claim_creator_fees(ctx)
    }
}
