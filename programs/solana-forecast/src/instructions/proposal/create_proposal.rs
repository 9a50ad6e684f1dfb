use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::ProposalCreated;
use crate::state::bond::{BondEscrow, BondStatus, BondTier};
use crate::state::market::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::state::platform::GlobalParameters;
use crate::state::proposal::{Proposal, ProposalStatus};

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct CreateProposal<'info> {
    #[account(
        init,
        payer = creator,
        space = Proposal::LEN,
        seeds = [b"proposal", proposal_id.to_le_bytes().as_ref()],
        bump
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        init,
        payer = creator,
        space = BondEscrow::LEN,
        seeds = [b"bond-escrow", proposal_id.to_le_bytes().as_ref()],
        bump
    )]
    pub bond_escrow: Account<'info, BondEscrow>,

    #[account(
        seeds = [b"global-parameters"],
        bump = parameters.bump
    )]
    pub parameters: Account<'info, GlobalParameters>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_create_proposal(
    ctx: Context<CreateProposal>,
    proposal_id: u64,
    title: String,
    description: String,
    voting_ends_at: i64,
    market_end_date: i64,
    tier: BondTier,
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
        voting_ends_at > clock.unix_timestamp,
        ForecastError::PastResolutionTime
    );
    // The eventual market must resolve after its approval vote concludes.
    require!(
        market_end_date > voting_ends_at,
        ForecastError::PastResolutionTime
    );

    let bond_amount = tier.bond_lamports(params);
    require!(bond_amount > 0, ForecastError::ZeroAmount);

    // Escrow the bond before any bookkeeping; a failed transfer aborts the
    // whole instruction and neither account persists.
    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.creator.to_account_info(),
                to: ctx.accounts.bond_escrow.to_account_info(),
            },
        ),
        bond_amount,
    )?;

    let escrow = &mut ctx.accounts.bond_escrow;
    escrow.creator = ctx.accounts.creator.key();
    escrow.proposal_id = proposal_id;
    escrow.amount = bond_amount;
    escrow.tier = tier;
    escrow.status = BondStatus::Active;
    escrow.accumulated_fees = 0;
    escrow.fee_balance = 0;
    escrow.deposited_at = clock.unix_timestamp;
    escrow.refunded_at = None;
    escrow.bump = ctx.bumps.bond_escrow;

    let proposal = &mut ctx.accounts.proposal;
    proposal.proposal_id = proposal_id;
    proposal.creator = ctx.accounts.creator.key();
    proposal.title = title.clone();
    proposal.description = description;
    proposal.bond_amount = bond_amount;
    proposal.status = ProposalStatus::Pending;
    proposal.yes_votes = 0;
    proposal.no_votes = 0;
    proposal.total_voters = 0;
    proposal.created_at = clock.unix_timestamp;
    proposal.voting_ends_at = voting_ends_at;
    proposal.market_end_date = market_end_date;
    proposal.processed_at = None;
    proposal.market_id = None;
    proposal.bump = ctx.bumps.proposal;

    emit!(ProposalCreated {
        proposal_id,
        creator: proposal.creator,
        title,
        bond_amount,
        voting_ends_at,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Proposal {} created with {} lamport bond",
        proposal_id,
        bond_amount
    );
    Ok(())
}
