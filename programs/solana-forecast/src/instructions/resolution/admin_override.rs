use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::ResolutionOverridden;
use crate::state::market::Outcome;
use crate::state::platform::GlobalParameters;
use crate::state::resolution::ResolutionState;

#[derive(Accounts)]
pub struct AdminOverrideResolution<'info> {
    #[account(
        mut,
        seeds = [b"resolution", resolution.market_id.to_le_bytes().as_ref()],
        bump = resolution.bump
    )]
    pub resolution: Account<'info, ResolutionState>,

    #[account(
        seeds = [b"global-parameters"],
        bump = parameters.bump,
        has_one = authority @ ForecastError::Unauthorized
    )]
    pub parameters: Account<'info, GlobalParameters>,

    pub authority: Signer<'info>,
}

/// Replace the tentative outcome while the dispute window is open. The
/// authority may override more than once; only the last value standing at
/// finalization counts.
pub fn process_admin_override_resolution(
    ctx: Context<AdminOverrideResolution>,
    new_outcome: Outcome,
) -> Result<()> {
    let resolution = &mut ctx.accounts.resolution;
    let clock = Clock::get()?;

    require!(resolution.aggregated, ForecastError::NotAggregated);
    require!(!resolution.finalized, ForecastError::AlreadyFinalized);
    require!(
        clock.unix_timestamp < resolution.dispute_ends_at,
        ForecastError::DisputeWindowExpired
    );

    resolution.tentative_outcome = Some(new_outcome);
    resolution.overridden = true;

    emit!(ResolutionOverridden {
        market_id: resolution.market_id,
        admin: ctx.accounts.authority.key(),
        new_outcome,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Admin override on market {}: outcome set to {:?}",
        resolution.market_id,
        new_outcome
    );
    Ok(())
}
