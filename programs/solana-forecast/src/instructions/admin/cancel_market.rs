use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::MarketCancelled;
use crate::state::market::{Market, MarketStatus};
use crate::state::platform::GlobalParameters;

/// Authority-only cancellation for markets stuck past their end date
/// without a finalized resolution. Bettors then reclaim full stakes
/// through the cancelled claim path.
#[derive(Accounts)]
pub struct CancelMarket<'info> {
    #[account(
        mut,
        seeds = [b"market", market.market_id.to_le_bytes().as_ref()],
        bump = market.bump
    )]
    pub market: Account<'info, Market>,

    #[account(
        seeds = [b"global-parameters"],
        bump = parameters.bump,
        has_one = authority @ ForecastError::Unauthorized
    )]
    pub parameters: Account<'info, GlobalParameters>,

    pub authority: Signer<'info>,
}

pub fn process_cancel_market(ctx: Context<CancelMarket>) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let clock = Clock::get()?;

    require!(
        matches!(market.status, MarketStatus::Active | MarketStatus::Ended),
        ForecastError::MarketResolved
    );
    require!(
        clock.unix_timestamp >= market.end_date,
        ForecastError::MarketNotActive
    );

    market.status = MarketStatus::Cancelled;
    market.resolved_outcome = Some(crate::state::market::Outcome::Cancelled);

    emit!(MarketCancelled {
        market_id: market.market_id,
        yes_pool: market.yes_pool,
        no_pool: market.no_pool,
        timestamp: clock.unix_timestamp,
    });

    msg!("Market {} cancelled by authority", market.market_id);
    Ok(())
}
