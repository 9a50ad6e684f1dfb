use anchor_lang::prelude::*;

use crate::events::PlatformInitialized;
use crate::state::platform::{GlobalParameters, VOTING_MODE_DEMOCRATIC};

#[derive(Accounts)]
pub struct InitPlatform<'info> {
    #[account(
        init,
        seeds = [b"global-parameters"],
        bump,
        payer = authority,
        space = GlobalParameters::LEN
    )]
    pub parameters: Account<'info, GlobalParameters>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: destination wallet for platform fees, chosen by the deployer
    pub treasury: AccountInfo<'info>,
    /// CHECK: destination wallet for team fees
    pub team_wallet: AccountInfo<'info>,
    /// CHECK: burn destination (typically the incinerator address)
    pub burn_wallet: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_init_platform(ctx: Context<InitPlatform>) -> Result<()> {
    let params = &mut ctx.accounts.parameters;
    let clock = Clock::get()?;

    params.authority = ctx.accounts.authority.key();
    params.treasury = ctx.accounts.treasury.key();
    params.team_wallet = ctx.accounts.team_wallet.key();
    params.burn_wallet = ctx.accounts.burn_wallet.key();

    // Fee split (basis points of each bet)
    params.platform_fee_bps = 200; // 2%
    params.team_fee_bps = 100; // 1%
    params.burn_fee_bps = 50; // 0.5%

    // Betting limits
    params.min_bet_lamports = 10_000_000; // 0.01 SOL
    params.max_bet_lamports = 100_000_000_000; // 100 SOL

    // Creator bond tiers
    params.bond_tier_1_lamports = 100_000_000; // 0.1 SOL
    params.bond_tier_2_lamports = 500_000_000; // 0.5 SOL
    params.bond_tier_3_lamports = 1_000_000_000; // 1 SOL

    // Market duration limits
    params.min_duration_seconds = 3_600; // 1 hour
    params.max_duration_seconds = 31_536_000; // 1 year

    // Resolution timing
    params.voting_period_seconds = 86_400; // 24 hours
    params.dispute_window_seconds = 172_800; // 48 hours

    params.voting_weight_mode = VOTING_MODE_DEMOCRATIC;

    // Update throttling
    params.update_cooldown_seconds = 86_400; // 24 hours
    params.max_change_bps = 2_000; // 20% per update

    params.last_updated = clock.unix_timestamp;
    params.cooldown_until = 0;
    params.version = 1;
    params.bump = ctx.bumps.parameters;

    emit!(PlatformInitialized {
        authority: params.authority,
        treasury: params.treasury,
        platform_fee_bps: params.platform_fee_bps,
    });

    msg!("Platform initialized with authority {}", params.authority);
    Ok(())
}
