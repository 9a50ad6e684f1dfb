use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::{BondRefunded, ProposalFinalized};
use crate::state::bond::{BondEscrow, BondStatus};
use crate::state::platform::GlobalParameters;
use crate::state::proposal::{Proposal, ProposalStatus};
use crate::utils::math::approval_passes;

#[derive(Accounts)]
pub struct FinalizeProposal<'info> {
    #[account(
        mut,
        seeds = [b"proposal", proposal.proposal_id.to_le_bytes().as_ref()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        mut,
        seeds = [b"bond-escrow", proposal.proposal_id.to_le_bytes().as_ref()],
        bump = bond_escrow.bump
    )]
    pub bond_escrow: Account<'info, BondEscrow>,

    #[account(
        seeds = [b"global-parameters"],
        bump = parameters.bump
    )]
    pub parameters: Account<'info, GlobalParameters>,

    /// CHECK: slash destination, validated against the parameter store
    #[account(
        mut,
        constraint = treasury.key() == parameters.treasury @ ForecastError::Unauthorized
    )]
    pub treasury: AccountInfo<'info>,

    /// CHECK: the proposal creator's wallet, validated against the proposal
    #[account(
        mut,
        constraint = creator_wallet.key() == proposal.creator @ ForecastError::Unauthorized
    )]
    pub creator_wallet: AccountInfo<'info>,

    pub cranker: Signer<'info>,
}

/// Tally the approval vote once the period closes. Approval just flips the
/// status (the bond refund waits for market creation); rejection slashes the
/// bond 50% back to the creator, 50% to the treasury, in the same
/// transaction.
pub fn process_finalize_proposal(ctx: Context<FinalizeProposal>) -> Result<()> {
    let clock = Clock::get()?;

    let (approved, refund_amount, slash_amount) = {
        let proposal = &ctx.accounts.proposal;
        let escrow = &ctx.accounts.bond_escrow;

        require!(
            proposal.status == ProposalStatus::Pending,
            ForecastError::InvalidProposalState
        );
        require!(
            clock.unix_timestamp >= proposal.voting_ends_at,
            ForecastError::VotingNotEnded
        );
        require!(
            escrow.status == BondStatus::Active,
            ForecastError::AlreadyRefunded
        );

        if approval_passes(proposal.yes_votes, proposal.no_votes) {
            (true, 0u64, 0u64)
        } else {
            let refund = escrow.amount / 2;
            (false, refund, escrow.amount - refund)
        }
    };

    if !approved {
        // Slash: half back to the creator, half to the treasury.
        {
            let escrow_info = ctx.accounts.bond_escrow.to_account_info();
            **escrow_info.try_borrow_mut_lamports()? -= refund_amount + slash_amount;
            **ctx.accounts.creator_wallet.try_borrow_mut_lamports()? += refund_amount;
            **ctx.accounts.treasury.try_borrow_mut_lamports()? += slash_amount;
        }
        let escrow = &mut ctx.accounts.bond_escrow;
        escrow.status = BondStatus::Slashed;
        escrow.refunded_at = Some(clock.unix_timestamp);

        emit!(BondRefunded {
            proposal_id: ctx.accounts.proposal.proposal_id,
            creator: ctx.accounts.proposal.creator,
            refund_amount,
            slash_amount,
            timestamp: clock.unix_timestamp,
        });
    }

    let proposal = &mut ctx.accounts.proposal;
    proposal.status = if approved {
        ProposalStatus::Approved
    } else {
        ProposalStatus::Rejected
    };
    proposal.processed_at = Some(clock.unix_timestamp);

    emit!(ProposalFinalized {
        proposal_id: proposal.proposal_id,
        approved,
        yes_votes: proposal.yes_votes,
        no_votes: proposal.no_votes,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Proposal {} {} (Y:{} N:{})",
        proposal.proposal_id,
        if approved { "approved" } else { "rejected" },
        proposal.yes_votes,
        proposal.no_votes
    );
    Ok(())
}
