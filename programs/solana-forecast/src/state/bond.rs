use anchor_lang::prelude::*;

use crate::state::platform::GlobalParameters;

/// Escrow holding a proposal creator's bond plus their accrued trading fees.
///
/// `accumulated_fees` is the lifetime accounting counter, bumped by every bet
/// on the resulting market. The matching lamports sit in the market vault
/// until that market finalizes YES/NO, at which point they move here and
/// become `fee_balance` (the claimable portion).
#[account]
pub struct BondEscrow {
    pub creator: Pubkey,
    pub proposal_id: u64,
    pub amount: u64,
    pub tier: BondTier,
    pub status: BondStatus,
    pub accumulated_fees: u64,
    pub fee_balance: u64,
    pub deposited_at: i64,
    pub refunded_at: Option<i64>,
    pub bump: u8,
}

impl BondEscrow {
    // 8 (discriminator) + 32 (creator) + 8 (proposal_id) + 8 (amount)
    // 1 (tier) + 1 (status) + 8 + 8 (fee counters) + 8 (deposited_at)
    // 9 (refunded_at option) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1 + 1 + 8 + 8 + 8 + 9 + 1;

    pub fn is_settled(&self) -> bool {
        self.status != BondStatus::Active
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Debug, InitSpace)]
pub enum BondStatus {
    Active,   // deposited, proposal pending or market live
    Refunded, // 100% returned on approval
    Slashed,  // 50% returned, 50% to treasury on rejection
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Debug, InitSpace)]
pub enum BondTier {
    Tier1,
    Tier2,
    Tier3,
}

impl BondTier {
    /// Larger bonds earn the creator a larger cut of every bet.
    pub fn creator_fee_bps(&self) -> u16 {
        match self {
            BondTier::Tier1 => 50,  // 0.5%
            BondTier::Tier2 => 100, // 1.0%
            BondTier::Tier3 => 200, // 2.0%
        }
    }

    pub fn bond_lamports(&self, params: &GlobalParameters) -> u64 {
        match self {
            BondTier::Tier1 => params.bond_tier_1_lamports,
            BondTier::Tier2 => params.bond_tier_2_lamports,
            BondTier::Tier3 => params.bond_tier_3_lamports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_tiers_earn_higher_fee_cuts() {
        assert_eq!(BondTier::Tier1.creator_fee_bps(), 50);
        assert_eq!(BondTier::Tier2.creator_fee_bps(), 100);
        assert_eq!(BondTier::Tier3.creator_fee_bps(), 200);
        assert!(BondTier::Tier1.creator_fee_bps() < BondTier::Tier3.creator_fee_bps());
    }
}
