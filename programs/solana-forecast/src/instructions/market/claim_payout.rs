use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::PayoutClaimed;
use crate::state::market::{Market, MarketStatus};
use crate::state::position::UserBet;
use crate::utils::math::{capped_payout, winner_payout};

#[derive(Accounts)]
pub struct ClaimPayout<'info> {
    #[account(
        mut,
        seeds = [b"market", market.market_id.to_le_bytes().as_ref()],
        bump = market.bump
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [b"bet", market.key().as_ref(), bettor.key().as_ref()],
        bump = user_bet.bump,
        constraint = user_bet.bettor == bettor.key() @ ForecastError::Unauthorized
    )]
    pub user_bet: Account<'info, UserBet>,

    #[account(mut)]
    pub bettor: Signer<'info>,
}

/// Settle one bettor's position on a finalized market.
///
/// Resolved: winners take `net_stake / winning_pool` of the total pool,
/// capped by what remains unclaimed; losers are marked claimed with a zero
/// payout so repeat claims are rejected rather than re-evaluated.
/// Cancelled: everyone takes back their original gross stake.
pub fn process_claim_payout(ctx: Context<ClaimPayout>) -> Result<()> {
    let clock = Clock::get()?;

    let (payout, won) = {
        let market = &ctx.accounts.market;
        let user_bet = &ctx.accounts.user_bet;

        require!(!user_bet.claimed, ForecastError::AlreadyClaimed);

        match market.status {
            MarketStatus::Resolved => {
                let outcome = market
                    .resolved_outcome
                    .ok_or(ForecastError::MarketNotFinalized)?;
                if user_bet.side.wins(outcome) {
                    let winning_pool = market.pool_for(user_bet.side);
                    let total_pool = market.total_pool();
                    let computed =
                        winner_payout(user_bet.amount_to_pool, winning_pool, total_pool)
                            .ok_or(ForecastError::MathOverflow)?;
                    // Rounding dust accumulates in favor of late claimers;
                    // the cap keeps the sum of payouts inside the pool.
                    let paid = capped_payout(computed, total_pool, market.total_claimed)
                        .ok_or(ForecastError::MathOverflow)?;
                    (paid, true)
                } else {
                    (0u64, false)
                }
            }
            // Stake return: fees were never distributed on this path, so the
            // vault still holds every bettor's full gross amount.
            MarketStatus::Cancelled => (user_bet.amount, false),
            _ => return Err(ForecastError::MarketNotFinalized.into()),
        }
    };

    // Mark claimed before moving lamports.
    let user_bet = &mut ctx.accounts.user_bet;
    user_bet.claimed = true;
    user_bet.payout = payout;

    let market = &mut ctx.accounts.market;
    market.total_claimed = market
        .total_claimed
        .checked_add(payout)
        .ok_or(ForecastError::MathOverflow)?;
    let market_id = market.market_id;

    if payout > 0 {
        let market_info = ctx.accounts.market.to_account_info();
        **market_info.try_borrow_mut_lamports()? -= payout;
        **ctx.accounts.bettor.to_account_info().try_borrow_mut_lamports()? += payout;
    }

    emit!(PayoutClaimed {
        market_id,
        bettor: ctx.accounts.bettor.key(),
        amount: payout,
        won,
        timestamp: clock.unix_timestamp,
    });

    msg!("Payout claimed on market {}: {} lamports", market_id, payout);
    Ok(())
}
