use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::BetPlaced;
use crate::state::bond::BondEscrow;
use crate::state::market::{BetSide, Market, MarketStatus};
use crate::state::platform::GlobalParameters;
use crate::state::position::UserBet;
use crate::utils::math::{fee_breakdown, yes_probability_bps};

#[derive(Accounts)]
pub struct PlaceBet<'info> {
    #[account(
        mut,
        seeds = [b"market", market.market_id.to_le_bytes().as_ref()],
        bump = market.bump
    )]
    pub market: Account<'info, Market>,

    // One growing position per (market, bettor); re-bets land on the same
    // account.
    #[account(
        init_if_needed,
        payer = bettor,
        space = UserBet::LEN,
        seeds = [b"bet", market.key().as_ref(), bettor.key().as_ref()],
        bump
    )]
    pub user_bet: Account<'info, UserBet>,

    #[account(
        seeds = [b"global-parameters"],
        bump = parameters.bump
    )]
    pub parameters: Account<'info, GlobalParameters>,

    /// Required for bonded (proposal-born) markets so the creator fee
    /// counter accrues per bet; absent for direct markets.
    #[account(mut)]
    pub bond_escrow: Option<Account<'info, BondEscrow>>,

    #[account(mut)]
    pub bettor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_place_bet(ctx: Context<PlaceBet>, side: BetSide, amount: u64) -> Result<()> {
    let params = &ctx.accounts.parameters;
    let clock = Clock::get()?;

    // All preconditions fail before any lamport or counter moves.
    {
        let market = &ctx.accounts.market;
        require!(
            market.status != MarketStatus::Resolved,
            ForecastError::MarketResolved
        );
        require!(
            market.status == MarketStatus::Active,
            ForecastError::MarketNotActive
        );
        require!(
            clock.unix_timestamp < market.end_date,
            ForecastError::MarketEnded
        );
    }
    require!(amount > 0, ForecastError::ZeroAmount);
    require!(
        amount >= params.min_bet_lamports,
        ForecastError::BelowMinimum
    );
    require!(
        amount <= params.max_bet_lamports,
        ForecastError::AboveMaximum
    );
    require!(
        ctx.accounts.user_bet.is_fresh() || ctx.accounts.user_bet.side == side,
        ForecastError::PositionSideMismatch
    );

    let creator_fee_bps = ctx.accounts.market.creator_fee_bps;
    if ctx.accounts.market.proposal_id.is_some() {
        let escrow = ctx
            .accounts
            .bond_escrow
            .as_ref()
            .ok_or(ForecastError::InsufficientEscrow)?;
        require!(
            Some(escrow.proposal_id) == ctx.accounts.market.proposal_id,
            ForecastError::InsufficientEscrow
        );
    }

    let fees = fee_breakdown(
        amount,
        params.platform_fee_bps,
        params.team_fee_bps,
        params.burn_fee_bps,
        creator_fee_bps,
    )
    .ok_or(ForecastError::MathOverflow)?;

    // The gross stake moves into the market vault; fee lamports stay there
    // until finalization so a cancelled market can return full stakes.
    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.bettor.to_account_info(),
                to: ctx.accounts.market.to_account_info(),
            },
        ),
        amount,
    )?;

    let market = &mut ctx.accounts.market;
    match side {
        BetSide::Yes => {
            market.yes_pool = market
                .yes_pool
                .checked_add(fees.net)
                .ok_or(ForecastError::MathOverflow)?;
        }
        BetSide::No => {
            market.no_pool = market
                .no_pool
                .checked_add(fees.net)
                .ok_or(ForecastError::MathOverflow)?;
        }
    }
    market.total_volume = market
        .total_volume
        .checked_add(amount)
        .ok_or(ForecastError::MathOverflow)?;
    market.total_bets = market
        .total_bets
        .checked_add(1)
        .ok_or(ForecastError::MathOverflow)?;

    market.accrued_platform_fees = market
        .accrued_platform_fees
        .checked_add(fees.platform)
        .ok_or(ForecastError::MathOverflow)?;
    market.accrued_team_fees = market
        .accrued_team_fees
        .checked_add(fees.team)
        .ok_or(ForecastError::MathOverflow)?;
    market.accrued_burn_fees = market
        .accrued_burn_fees
        .checked_add(fees.burn)
        .ok_or(ForecastError::MathOverflow)?;
    market.accrued_creator_fees = market
        .accrued_creator_fees
        .checked_add(fees.creator)
        .ok_or(ForecastError::MathOverflow)?;

    if let Some(escrow) = ctx.accounts.bond_escrow.as_mut() {
        escrow.accumulated_fees = escrow
            .accumulated_fees
            .checked_add(fees.creator)
            .ok_or(ForecastError::MathOverflow)?;
    }

    let user_bet = &mut ctx.accounts.user_bet;
    user_bet.market = market.key();
    user_bet.bettor = ctx.accounts.bettor.key();
    user_bet.side = side;
    user_bet.amount = user_bet
        .amount
        .checked_add(amount)
        .ok_or(ForecastError::MathOverflow)?;
    user_bet.amount_to_pool = user_bet
        .amount_to_pool
        .checked_add(fees.net)
        .ok_or(ForecastError::MathOverflow)?;
    user_bet.last_bet_at = clock.unix_timestamp;
    user_bet.bump = ctx.bumps.user_bet;

    let yes_probability = yes_probability_bps(market.yes_pool, market.no_pool);

    emit!(BetPlaced {
        market_id: market.market_id,
        bettor: user_bet.bettor,
        side,
        amount,
        amount_to_pool: fees.net,
        yes_pool: market.yes_pool,
        no_pool: market.no_pool,
        yes_probability_bps: yes_probability,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Bet on market {}: {} lamports {:?}, YES at {} bps",
        market.market_id,
        amount,
        side,
        yes_probability
    );
    Ok(())
}
