use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::{BondRefunded, MarketCreated};
use crate::state::bond::{BondEscrow, BondStatus};
use crate::state::market::{Market, MarketStatus};
use crate::state::proposal::{Proposal, ProposalStatus};

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct CreateMarketFromProposal<'info> {
    #[account(
        mut,
        seeds = [b"proposal", proposal.proposal_id.to_le_bytes().as_ref()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        init,
        payer = payer,
        space = Market::LEN,
        seeds = [b"market", market_id.to_le_bytes().as_ref()],
        bump
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [b"bond-escrow", proposal.proposal_id.to_le_bytes().as_ref()],
        bump = bond_escrow.bump
    )]
    pub bond_escrow: Account<'info, BondEscrow>,

    /// CHECK: the proposal creator's wallet, receives the full bond refund
    #[account(
        mut,
        constraint = creator_wallet.key() == proposal.creator @ ForecastError::Unauthorized
    )]
    pub creator_wallet: AccountInfo<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Consume an approved proposal: instantiate its market and refund the
/// creator's bond in full. The recorded `market_id` makes the proposal
/// single-use.
pub fn process_create_market_from_proposal(
    ctx: Context<CreateMarketFromProposal>,
    market_id: u64,
) -> Result<()> {
    let clock = Clock::get()?;

    let refund_amount = {
        let proposal = &ctx.accounts.proposal;
        let escrow = &ctx.accounts.bond_escrow;

        require!(
            proposal.status == ProposalStatus::Approved,
            ForecastError::InvalidProposalState
        );
        require!(
            proposal.market_id.is_none(),
            ForecastError::InvalidProposalState
        );
        require!(
            escrow.status == BondStatus::Active,
            ForecastError::AlreadyRefunded
        );
        // An approval that sat unconsumed past its own market end date
        // would create a market born ended.
        require!(
            proposal.market_schedulable(clock.unix_timestamp),
            ForecastError::PastResolutionTime
        );

        escrow.amount
    };

    // Full refund on approval.
    {
        let escrow_info = ctx.accounts.bond_escrow.to_account_info();
        **escrow_info.try_borrow_mut_lamports()? -= refund_amount;
        **ctx.accounts.creator_wallet.try_borrow_mut_lamports()? += refund_amount;
    }

    let escrow = &mut ctx.accounts.bond_escrow;
    escrow.status = BondStatus::Refunded;
    escrow.refunded_at = Some(clock.unix_timestamp);
    let creator_fee_bps = escrow.tier.creator_fee_bps();

    let proposal = &mut ctx.accounts.proposal;
    proposal.market_id = Some(market_id);

    let market = &mut ctx.accounts.market;
    market.market_id = market_id;
    market.creator = proposal.creator;
    market.title = proposal.title.clone();
    market.description = proposal.description.clone();
    market.end_date = proposal.market_end_date;
    market.status = MarketStatus::Active;
    market.yes_pool = 0;
    market.no_pool = 0;
    market.total_volume = 0;
    market.accrued_platform_fees = 0;
    market.accrued_team_fees = 0;
    market.accrued_burn_fees = 0;
    market.accrued_creator_fees = 0;
    market.creator_fee_bps = creator_fee_bps;
    market.total_claimed = 0;
    market.resolved_outcome = None;
    market.proposal_id = Some(proposal.proposal_id);
    market.created_at = clock.unix_timestamp;
    market.total_bets = 0;
    market.bump = ctx.bumps.market;

    emit!(BondRefunded {
        proposal_id: proposal.proposal_id,
        creator: proposal.creator,
        refund_amount,
        slash_amount: 0,
        timestamp: clock.unix_timestamp,
    });

    emit!(MarketCreated {
        market_id,
        creator: market.creator,
        title: market.title.clone(),
        end_date: market.end_date,
        proposal_id: Some(proposal.proposal_id),
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Market {} created from proposal {}, bond refunded in full",
        market_id,
        proposal.proposal_id
    );
    Ok(())
}
