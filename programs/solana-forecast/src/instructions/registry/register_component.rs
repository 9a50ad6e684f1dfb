use anchor_lang::prelude::*;

use crate::errors::ForecastError;
use crate::events::ComponentRegistered;
use crate::state::registry::{
    ComponentRegistry, MAX_COMPONENT_NAME_LEN, MAX_COMPONENT_VERSION_LEN,
};

#[derive(Accounts)]
pub struct RegisterComponent<'info> {
    #[account(
        mut,
        seeds = [b"component-registry"],
        bump = registry.bump,
        has_one = authority @ ForecastError::Unauthorized
    )]
    pub registry: Account<'info, ComponentRegistry>,

    pub authority: Signer<'info>,
}

pub fn process_register_component(
    ctx: Context<RegisterComponent>,
    name: String,
    address: Pubkey,
    version: String,
) -> Result<()> {
    require!(
        !name.is_empty() && name.len() <= MAX_COMPONENT_NAME_LEN,
        ForecastError::NameTooLong
    );
    require!(
        !version.is_empty() && version.len() <= MAX_COMPONENT_VERSION_LEN,
        ForecastError::VersionTooLong
    );

    let registry = &mut ctx.accounts.registry;
    registry.upsert(name.clone(), address, version.clone())?;

    emit!(ComponentRegistered {
        name: name.clone(),
        address,
        version,
    });

    msg!("Component '{}' registered at {}", name, address);
    Ok(())
}
