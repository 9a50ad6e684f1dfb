use anchor_lang::prelude::*;

use crate::errors::ForecastError;

/// Global economic configuration. Singleton PDA, admin-mutated under a
/// cooldown + bounded-change regime so no single update can swing the
/// platform economics by more than `max_change_bps`.
#[account]
pub struct GlobalParameters {
    pub authority: Pubkey,
    pub treasury: Pubkey,
    pub team_wallet: Pubkey,
    pub burn_wallet: Pubkey,

    // Fee split, basis points of each bet
    pub platform_fee_bps: u16,
    pub team_fee_bps: u16,
    pub burn_fee_bps: u16,

    // Betting limits (lamports)
    pub min_bet_lamports: u64,
    pub max_bet_lamports: u64,

    // Creator bond tiers (lamports)
    pub bond_tier_1_lamports: u64,
    pub bond_tier_2_lamports: u64,
    pub bond_tier_3_lamports: u64,

    // Market duration limits (seconds)
    pub min_duration_seconds: i64,
    pub max_duration_seconds: i64,

    // Resolution timing (seconds)
    pub voting_period_seconds: i64,
    pub dispute_window_seconds: i64,

    // 0 = democratic (one wallet, one vote), 1 = stake-weighted
    pub voting_weight_mode: u8,

    // Update throttling
    pub update_cooldown_seconds: i64,
    pub max_change_bps: u16,
    pub last_updated: i64,
    pub cooldown_until: i64,
    pub version: u32,
    pub bump: u8,
}

impl GlobalParameters {
    // 8 (discriminator) + 32 * 4 (authority, treasury, team, burn)
    // 2 * 3 (fee bps) + 8 * 2 (bet limits) + 8 * 3 (bond tiers)
    // 8 * 2 (duration limits) + 8 * 2 (voting + dispute) + 1 (weight mode)
    // 8 + 2 (cooldown config) + 8 + 8 (last_updated, cooldown_until)
    // 4 (version) + 1 (bump)
    pub const LEN: usize =
        8 + 32 * 4 + 2 * 3 + 8 * 2 + 8 * 3 + 8 * 2 + 8 * 2 + 1 + 8 + 2 + 8 + 8 + 4 + 1;

    pub fn get(&self, param: &ParameterType) -> u64 {
        match param {
            ParameterType::PlatformFee => self.platform_fee_bps as u64,
            ParameterType::TeamFee => self.team_fee_bps as u64,
            ParameterType::BurnFee => self.burn_fee_bps as u64,
            ParameterType::MinBet => self.min_bet_lamports,
            ParameterType::MaxBet => self.max_bet_lamports,
            ParameterType::BondTier1 => self.bond_tier_1_lamports,
            ParameterType::BondTier2 => self.bond_tier_2_lamports,
            ParameterType::BondTier3 => self.bond_tier_3_lamports,
            ParameterType::MinDuration => self.min_duration_seconds as u64,
            ParameterType::MaxDuration => self.max_duration_seconds as u64,
            ParameterType::VotingPeriod => self.voting_period_seconds as u64,
            ParameterType::DisputeWindow => self.dispute_window_seconds as u64,
            ParameterType::VotingWeightMode => self.voting_weight_mode as u64,
            ParameterType::UpdateCooldown => self.update_cooldown_seconds as u64,
            ParameterType::MaxChange => self.max_change_bps as u64,
        }
    }

    pub fn set(&mut self, param: &ParameterType, value: u64) -> Result<()> {
        match param {
            ParameterType::PlatformFee => {
                require!(value <= 10_000, ForecastError::InvalidValue);
                self.platform_fee_bps = value as u16;
            }
            ParameterType::TeamFee => {
                require!(value <= 10_000, ForecastError::InvalidValue);
                self.team_fee_bps = value as u16;
            }
            ParameterType::BurnFee => {
                require!(value <= 10_000, ForecastError::InvalidValue);
                self.burn_fee_bps = value as u16;
            }
            ParameterType::MinBet => self.min_bet_lamports = value,
            ParameterType::MaxBet => self.max_bet_lamports = value,
            ParameterType::BondTier1 => self.bond_tier_1_lamports = value,
            ParameterType::BondTier2 => self.bond_tier_2_lamports = value,
            ParameterType::BondTier3 => self.bond_tier_3_lamports = value,
            ParameterType::MinDuration => self.min_duration_seconds = value as i64,
            ParameterType::MaxDuration => self.max_duration_seconds = value as i64,
            ParameterType::VotingPeriod => self.voting_period_seconds = value as i64,
            ParameterType::DisputeWindow => self.dispute_window_seconds = value as i64,
            ParameterType::VotingWeightMode => {
                require!(value <= 1, ForecastError::InvalidValue);
                self.voting_weight_mode = value as u8;
            }
            ParameterType::UpdateCooldown => self.update_cooldown_seconds = value as i64,
            ParameterType::MaxChange => {
                require!(value <= 10_000, ForecastError::InvalidValue);
                self.max_change_bps = value as u16;
            }
        }
        Ok(())
    }
}

pub const VOTING_MODE_DEMOCRATIC: u8 = 0;
pub const VOTING_MODE_WEIGHTED: u8 = 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub enum ParameterType {
    PlatformFee,
    TeamFee,
    BurnFee,
    MinBet,
    MaxBet,
    BondTier1,
    BondTier2,
    BondTier3,
    MinDuration,
    MaxDuration,
    VotingPeriod,
    DisputeWindow,
    VotingWeightMode,
    UpdateCooldown,
    MaxChange,
}
