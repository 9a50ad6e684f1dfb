use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::ProposalVoteCast;
use crate::state::proposal::{Proposal, ProposalStatus, ProposalVoteRecord, VoteChoice};

#[derive(Accounts)]
pub struct VoteOnProposal<'info> {
    #[account(
        mut,
        seeds = [b"proposal", proposal.proposal_id.to_le_bytes().as_ref()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, Proposal>,

    // `init` on the (proposal, voter) seeds is the double-vote guard: a
    // second vote from the same wallet fails at account creation.
    #[account(
        init,
        payer = voter,
        space = ProposalVoteRecord::LEN,
        seeds = [
            b"proposal-vote",
            proposal.proposal_id.to_le_bytes().as_ref(),
            voter.key().as_ref()
        ],
        bump
    )]
    pub vote_record: Account<'info, ProposalVoteRecord>,

    #[account(mut)]
    pub voter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_vote_on_proposal(ctx: Context<VoteOnProposal>, choice: VoteChoice) -> Result<()> {
    let proposal = &mut ctx.accounts.proposal;
    let clock = Clock::get()?;

    require!(
        proposal.status == ProposalStatus::Pending,
        ForecastError::InvalidProposalState
    );
    require!(
        clock.unix_timestamp < proposal.voting_ends_at,
        ForecastError::VotingEnded
    );

    let record = &mut ctx.accounts.vote_record;
    record.proposal_id = proposal.proposal_id;
    record.voter = ctx.accounts.voter.key();
    record.choice = choice;
    record.timestamp = clock.unix_timestamp;
    record.bump = ctx.bumps.vote_record;

    match choice {
        VoteChoice::Yes => {
            proposal.yes_votes = proposal
                .yes_votes
                .checked_add(1)
                .ok_or(ForecastError::MathOverflow)?;
        }
        VoteChoice::No => {
            proposal.no_votes = proposal
                .no_votes
                .checked_add(1)
                .ok_or(ForecastError::MathOverflow)?;
        }
    }
    proposal.total_voters = proposal
        .total_voters
        .checked_add(1)
        .ok_or(ForecastError::MathOverflow)?;

    emit!(ProposalVoteCast {
        proposal_id: proposal.proposal_id,
        voter: record.voter,
        choice,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Proposal {} vote: {:?} (Y:{} N:{})",
        proposal.proposal_id,
        choice,
        proposal.yes_votes,
        proposal.no_votes
    );
    Ok(())
}
