use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::ResolutionVoteCast;
use crate::state::platform::{GlobalParameters, VOTING_MODE_WEIGHTED};
use crate::state::position::UserBet;
use crate::state::proposal::VoteChoice;
use crate::state::resolution::{ResolutionState, ResolutionVoteRecord};

#[derive(Accounts)]
pub struct SubmitResolutionVote<'info> {
    #[account(
        mut,
        seeds = [b"resolution", resolution.market_id.to_le_bytes().as_ref()],
        bump = resolution.bump
    )]
    pub resolution: Account<'info, ResolutionState>,

    // `init` on the (market, voter) seeds is the double-vote guard.
    #[account(
        init,
        payer = voter,
        space = ResolutionVoteRecord::LEN,
        seeds = [
            b"resolution-vote",
            resolution.market_id.to_le_bytes().as_ref(),
            voter.key().as_ref()
        ],
        bump
    )]
    pub vote_record: Account<'info, ResolutionVoteRecord>,

    #[account(
        seeds = [b"global-parameters"],
        bump = parameters.bump
    )]
    pub parameters: Account<'info, GlobalParameters>,

    /// The voter's own position on this market. Consulted only in
    /// stake-weighted mode; democratic votes count as weight 1.
    pub position: Option<Account<'info, UserBet>>,

    #[account(mut)]
    pub voter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_submit_resolution_vote(
    ctx: Context<SubmitResolutionVote>,
    choice: VoteChoice,
) -> Result<()> {
    let resolution = &mut ctx.accounts.resolution;
    let params = &ctx.accounts.parameters;
    let clock = Clock::get()?;

    require!(
        resolution.voting_open(clock.unix_timestamp),
        ForecastError::VotingEnded
    );

    let weight = if params.voting_weight_mode == VOTING_MODE_WEIGHTED {
        match ctx.accounts.position.as_ref() {
            Some(position) => {
                require!(
                    position.bettor == ctx.accounts.voter.key(),
                    ForecastError::Unauthorized
                );
                let (market_key, _) = Pubkey::find_program_address(
                    &[b"market".as_ref(), &resolution.market_id.to_le_bytes()],
                    ctx.program_id,
                );
                require!(position.market == market_key, ForecastError::Unauthorized);
                position.amount_to_pool.max(1)
            }
            None => 1,
        }
    } else {
        1
    };

    let record = &mut ctx.accounts.vote_record;
    record.market_id = resolution.market_id;
    record.voter = ctx.accounts.voter.key();
    record.choice = choice;
    record.weight = weight;
    record.timestamp = clock.unix_timestamp;
    record.bump = ctx.bumps.vote_record;

    match choice {
        VoteChoice::Yes => {
            resolution.yes_weight = resolution
                .yes_weight
                .checked_add(weight)
                .ok_or(ForecastError::MathOverflow)?;
        }
        VoteChoice::No => {
            resolution.no_weight = resolution
                .no_weight
                .checked_add(weight)
                .ok_or(ForecastError::MathOverflow)?;
        }
    }
    resolution.total_voters = resolution
        .total_voters
        .checked_add(1)
        .ok_or(ForecastError::MathOverflow)?;

    emit!(ResolutionVoteCast {
        market_id: resolution.market_id,
        voter: record.voter,
        choice,
        weight,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Resolution vote on market {}: {:?} weight {}",
        resolution.market_id,
        choice,
        weight
    );
    Ok(())
}
