use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::ResolutionFinalized;
use crate::state::bond::BondEscrow;
use crate::state::market::{Market, MarketStatus, Outcome};
use crate::state::platform::GlobalParameters;
use crate::state::resolution::ResolutionState;

#[derive(Accounts)]
pub struct FinalizeResolution<'info> {
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

    /// CHECK: fee destination, must match the configured treasury
    #[account(mut, address = parameters.treasury @ ForecastError::Unauthorized)]
    pub treasury: AccountInfo<'info>,

    /// CHECK: fee destination, must match the configured team wallet
    #[account(mut, address = parameters.team_wallet @ ForecastError::Unauthorized)]
    pub team_wallet: AccountInfo<'info>,

    /// CHECK: fee destination, must match the configured burn wallet
    #[account(mut, address = parameters.burn_wallet @ ForecastError::Unauthorized)]
    pub burn_wallet: AccountInfo<'info>,

    /// Present only for proposal-backed markets; receives the creator's
    /// fee share.
    #[account(
        mut,
        seeds = [b"bond-escrow", market.proposal_id.unwrap_or_default().to_le_bytes().as_ref()],
        bump = bond_escrow.bump
    )]
    pub bond_escrow: Option<Account<'info, BondEscrow>>,

    pub cranker: Signer<'info>,
}

/// Close the dispute window and make the tentative outcome permanent.
///
/// YES/NO: the market becomes Resolved and the accrued fee lamports leave
/// the vault (platform to treasury, team and burn to their wallets, creator
/// share to the bond escrow as claimable balance). What remains in the
/// vault is exactly the combined pools, owed to winners.
///
/// Cancelled: no fees move; the vault keeps every gross stake for refunds.
pub fn process_finalize_resolution(ctx: Context<FinalizeResolution>) -> Result<()> {
    let clock = Clock::get()?;

    // Only a market parked in its dispute window can finalize; a cancel
    // that raced ahead already settled the vault with gross refunds.
    require!(
        ctx.accounts.market.in_dispute(),
        ForecastError::InvalidMarketStatus
    );

    let outcome = {
        let resolution = &ctx.accounts.resolution;
        require!(resolution.aggregated, ForecastError::NotAggregated);
        require!(!resolution.finalized, ForecastError::AlreadyFinalized);
        require!(
            clock.unix_timestamp >= resolution.dispute_ends_at,
            ForecastError::DisputeWindowActive
        );
        resolution
            .tentative_outcome
            .ok_or(ForecastError::NotAggregated)?
    };

    let market = &mut ctx.accounts.market;
    market.resolved_outcome = Some(outcome);

    let (platform_fees, team_fees, burn_fees, creator_fees) = match outcome {
        Outcome::Cancelled => {
            market.status = MarketStatus::Cancelled;
            (0, 0, 0, 0)
        }
        Outcome::Yes | Outcome::No => {
            market.status = MarketStatus::Resolved;
            (
                market.accrued_platform_fees,
                market.accrued_team_fees,
                market.accrued_burn_fees,
                market.accrued_creator_fees,
            )
        }
    };

    if creator_fees > 0 {
        let escrow = ctx
            .accounts
            .bond_escrow
            .as_mut()
            .ok_or(ForecastError::InsufficientEscrow)?;
        require!(
            market.proposal_id == Some(escrow.proposal_id),
            ForecastError::Unauthorized
        );
        escrow.fee_balance = escrow
            .fee_balance
            .checked_add(creator_fees)
            .ok_or(ForecastError::MathOverflow)?;
    }

    let swept = platform_fees
        .checked_add(team_fees)
        .and_then(|s| s.checked_add(burn_fees))
        .and_then(|s| s.checked_add(creator_fees))
        .ok_or(ForecastError::MathOverflow)?;
    if swept > 0 {
        let market_info = ctx.accounts.market.to_account_info();
        **market_info.try_borrow_mut_lamports()? -= swept;
        **ctx.accounts.treasury.try_borrow_mut_lamports()? += platform_fees;
        **ctx.accounts.team_wallet.try_borrow_mut_lamports()? += team_fees;
        **ctx.accounts.burn_wallet.try_borrow_mut_lamports()? += burn_fees;
        if creator_fees > 0 {
            let escrow_info = ctx
                .accounts
                .bond_escrow
                .as_ref()
                .ok_or(ForecastError::InsufficientEscrow)?
                .to_account_info();
            **escrow_info.try_borrow_mut_lamports()? += creator_fees;
        }
    }

    let resolution = &mut ctx.accounts.resolution;
    resolution.finalized = true;
    resolution.finalized_at = Some(clock.unix_timestamp);

    emit!(ResolutionFinalized {
        market_id: resolution.market_id,
        outcome,
        overridden: resolution.overridden,
        yes_weight: resolution.yes_weight,
        no_weight: resolution.no_weight,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Market {} finalized as {:?}, {} fee lamports distributed",
        resolution.market_id,
        outcome,
        swept
    );
    Ok(())
}
