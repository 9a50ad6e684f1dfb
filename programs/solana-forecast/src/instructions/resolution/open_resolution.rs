use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::ResolutionOpened;
use crate::state::market::{Market, MarketStatus};
use crate::state::platform::GlobalParameters;
use crate::state::resolution::ResolutionState;

#[derive(Accounts)]
pub struct OpenResolution<'info> {
    #[account(
        mut,
        seeds = [b"market", market.market_id.to_le_bytes().as_ref()],
        bump = market.bump
    )]
    pub market: Account<'info, Market>,

    #[account(
        init,
        payer = cranker,
        space = ResolutionState::LEN,
        seeds = [b"resolution", market.market_id.to_le_bytes().as_ref()],
        bump
    )]
    pub resolution: Account<'info, ResolutionState>,

    #[account(
        seeds = [b"global-parameters"],
        bump = parameters.bump
    )]
    pub parameters: Account<'info, GlobalParameters>,

    #[account(mut)]
    pub cranker: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Open outcome voting once the market passes its end date. Anyone may
/// crank this; the PDA init makes it once-per-market.
pub fn process_open_resolution(ctx: Context<OpenResolution>) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let params = &ctx.accounts.parameters;
    let clock = Clock::get()?;

    require!(
        market.status == MarketStatus::Active,
        ForecastError::MarketNotActive
    );
    require!(
        clock.unix_timestamp >= market.end_date,
        ForecastError::VotingNotEnded
    );

    market.status = MarketStatus::Ended;

    let resolution = &mut ctx.accounts.resolution;
    resolution.market_id = market.market_id;
    resolution.yes_weight = 0;
    resolution.no_weight = 0;
    resolution.total_voters = 0;
    resolution.voting_ends_at = clock
        .unix_timestamp
        .checked_add(params.voting_period_seconds)
        .ok_or(ForecastError::MathOverflow)?;
    resolution.aggregated = false;
    resolution.tentative_outcome = None;
    resolution.overridden = false;
    resolution.dispute_ends_at = 0;
    resolution.finalized = false;
    resolution.finalized_at = None;
    resolution.opened_at = clock.unix_timestamp;
    resolution.bump = ctx.bumps.resolution;

    emit!(ResolutionOpened {
        market_id: market.market_id,
        voting_ends_at: resolution.voting_ends_at,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Resolution voting open on market {} until {}",
        market.market_id,
        resolution.voting_ends_at
    );
    Ok(())
}
