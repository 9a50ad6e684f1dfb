use anchor_lang::prelude::*;

use crate::state::registry::ComponentRegistry;

#[derive(Accounts)]
pub struct InitRegistry<'info> {
    #[account(
        init,
        seeds = [b"component-registry"],
        bump,
        payer = authority,
        space = ComponentRegistry::LEN
    )]
    pub registry: Account<'info, ComponentRegistry>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_init_registry(ctx: Context<InitRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.authority = ctx.accounts.authority.key();
    registry.components = Vec::new();
    registry.bump = ctx.bumps.registry;

    msg!("Component registry initialized");
    Ok(())
}
