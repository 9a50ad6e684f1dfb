use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::CreatorFeesClaimed;
use crate::state::bond::BondEscrow;

#[derive(Accounts)]
pub struct ClaimCreatorFees<'info> {
    #[account(
        mut,
        seeds = [b"bond-escrow", bond_escrow.proposal_id.to_le_bytes().as_ref()],
        bump = bond_escrow.bump,
        has_one = creator @ ForecastError::Unauthorized
    )]
    pub bond_escrow: Account<'info, BondEscrow>,

    #[account(mut)]
    pub creator: Signer<'info>,
}

/// Withdraw the creator's accrued fee share. Only lamports already swept
/// into the escrow at finalization are claimable; the lifetime counter is
/// untouched so the running total stays queryable. A zero balance claims
/// nothing and succeeds, so the call is idempotent.
pub fn process_claim_creator_fees(ctx: Context<ClaimCreatorFees>) -> Result<()> {
    let clock = Clock::get()?;

    let escrow = &mut ctx.accounts.bond_escrow;
    let amount = escrow.fee_balance;
    escrow.fee_balance = 0;
    let proposal_id = escrow.proposal_id;

    if amount > 0 {
        let escrow_info = ctx.accounts.bond_escrow.to_account_info();
        **escrow_info.try_borrow_mut_lamports()? -= amount;
        **ctx.accounts.creator.to_account_info().try_borrow_mut_lamports()? += amount;
    }

    emit!(CreatorFeesClaimed {
        proposal_id,
        creator: ctx.accounts.creator.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Creator fees claimed for proposal {}: {} lamports",
        proposal_id,
        amount
    );
    Ok(())
}
