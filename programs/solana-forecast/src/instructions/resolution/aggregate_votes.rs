use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::VotesAggregated;
use crate::state::market::{Market, MarketStatus};
use crate::state::platform::GlobalParameters;
use crate::state::resolution::ResolutionState;
use crate::utils::math::determine_outcome;

#[derive(Accounts)]
pub struct AggregateVotes<'info> {
    #[account(
        mut,
        seeds = [b"market", market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
        constraint = market.market_id == resolution.market_id @ ForecastError::ResolutionMarketMismatch
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [b"resolution", resolution.market_id.to_le_bytes().as_ref()],
        bump = resolution.bump
    )]
    pub resolution: Account<'info, ResolutionState>,

    #[account(
        seeds = [b"global-parameters"],
        bump = parameters.bump
    )]
    pub parameters: Account<'info, GlobalParameters>,

    pub cranker: Signer<'info>,
}

/// Tally the weighted votes once the voting period closes, post the
/// tentative outcome and open the dispute window. A tie (including zero
/// votes) tentatively cancels the market.
pub fn process_aggregate_votes(ctx: Context<AggregateVotes>) -> Result<()> {
    let resolution = &mut ctx.accounts.resolution;
    let market = &mut ctx.accounts.market;
    let params = &ctx.accounts.parameters;
    let clock = Clock::get()?;

    // The market must still be on the resolution path; a cancel during
    // voting is terminal and must not be overwritten here.
    require!(
        market.awaiting_aggregation(),
        ForecastError::InvalidMarketStatus
    );
    require!(!resolution.aggregated, ForecastError::AlreadyAggregated);
    require!(
        clock.unix_timestamp >= resolution.voting_ends_at,
        ForecastError::VotingNotEnded
    );

    let tentative = determine_outcome(resolution.yes_weight, resolution.no_weight);

    resolution.aggregated = true;
    resolution.tentative_outcome = Some(tentative);
    resolution.dispute_ends_at = clock
        .unix_timestamp
        .checked_add(params.dispute_window_seconds)
        .ok_or(ForecastError::MathOverflow)?;
    market.status = MarketStatus::DisputeWindow;

    emit!(VotesAggregated {
        market_id: resolution.market_id,
        yes_weight: resolution.yes_weight,
        no_weight: resolution.no_weight,
        tentative_outcome: tentative,
        dispute_ends_at: resolution.dispute_ends_at,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Market {} tentative outcome {:?} (Y:{} N:{}), dispute window until {}",
        resolution.market_id,
        tentative,
        resolution.yes_weight,
        resolution.no_weight,
        resolution.dispute_ends_at
    );
    Ok(())
}
