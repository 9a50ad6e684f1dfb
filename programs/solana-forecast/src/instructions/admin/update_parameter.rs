use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::ParameterUpdated;
use crate::state::platform::{GlobalParameters, ParameterType};
use crate::utils::math::change_within_bounds;

#[derive(Accounts)]
pub struct UpdateParameter<'info> {
    #[account(
        mut,
        seeds = [b"global-parameters"],
        bump = parameters.bump,
        has_one = authority @ ForecastError::Unauthorized
    )]
    pub parameters: Account<'info, GlobalParameters>,

    pub authority: Signer<'info>,
}

pub fn process_update_parameter(
    ctx: Context<UpdateParameter>,
    param: ParameterType,
    new_value: u64,
) -> Result<()> {
    let params = &mut ctx.accounts.parameters;
    let clock = Clock::get()?;

    require!(
        clock.unix_timestamp >= params.cooldown_until,
        ForecastError::CooldownActive
    );

    let old_value = params.get(&param);
    require!(
        change_within_bounds(old_value, new_value, params.max_change_bps),
        ForecastError::OutOfBounds
    );

    params.set(&param, new_value)?;
    params.last_updated = clock.unix_timestamp;
    params.cooldown_until = clock
        .unix_timestamp
        .checked_add(params.update_cooldown_seconds)
        .ok_or(ForecastError::MathOverflow)?;
    params.version = params
        .version
        .checked_add(1)
        .ok_or(ForecastError::MathOverflow)?;

    emit!(ParameterUpdated {
        authority: ctx.accounts.authority.key(),
        param: param.clone(),
        old_value,
        new_value,
        timestamp: clock.unix_timestamp,
    });

    msg!("Parameter {:?} updated {} -> {}", param, old_value, new_value);
    Ok(())
}
