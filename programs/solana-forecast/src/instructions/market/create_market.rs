use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::MarketCreated;
use crate::state::market::{Market, MarketStatus, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::state::platform::GlobalParameters;

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct CreateMarket<'info> {
    #[account(
        init,
        payer = creator,
        space = Market::LEN,
        seeds = [b"market", market_id.to_le_bytes().as_ref()],
        bump
    )]
    pub market: Account<'info, Market>,

    #[account(
        seeds = [b"global-parameters"],
        bump = parameters.bump
    )]
    pub parameters: Account<'info, GlobalParameters>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Direct market creation, bypassing governance. No bond backs the market,
/// so the creator fee tier is zero.
pub fn process_create_market(
    ctx: Context<CreateMarket>,
    market_id: u64,
    title: String,
    description: String,
    end_date: i64,
) -> Result<()> {
    let params = &ctx.accounts.parameters;
    let clock = Clock::get()?;

    require!(!title.is_empty(), ForecastError::EmptyTitle);
    require!(title.len() <= MAX_TITLE_LEN, ForecastError::TitleTooLong);
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        ForecastError::DescriptionTooLong
    );
    require!(
        end_date > clock.unix_timestamp,
        ForecastError::PastResolutionTime
    );
    let duration = end_date - clock.unix_timestamp;
    require!(
        duration >= params.min_duration_seconds && duration <= params.max_duration_seconds,
        ForecastError::DurationOutOfRange
    );

    let market = &mut ctx.accounts.market;
    market.market_id = market_id;
    market.creator = ctx.accounts.creator.key();
    market.title = title.clone();
    market.description = description;
    market.end_date = end_date;
    market.status = MarketStatus::Active;
    market.yes_pool = 0;
    market.no_pool = 0;
    market.total_volume = 0;
    market.accrued_platform_fees = 0;
    market.accrued_team_fees = 0;
    market.accrued_burn_fees = 0;
    market.accrued_creator_fees = 0;
    market.creator_fee_bps = 0;
    market.total_claimed = 0;
    market.resolved_outcome = None;
    market.proposal_id = None;
    market.created_at = clock.unix_timestamp;
    market.total_bets = 0;
    market.bump = ctx.bumps.market;

    emit!(MarketCreated {
        market_id,
        creator: market.creator,
        title,
        end_date,
        proposal_id: None,
        timestamp: clock.unix_timestamp,
    });

    msg!("Market {} created, resolves at {}", market_id, end_date);
    Ok(())
}
