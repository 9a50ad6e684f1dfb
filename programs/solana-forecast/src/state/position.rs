use anchor_lang::prelude::*;

use crate::state::market::BetSide;

/// One position per (market, bettor). Re-betting on the same market grows
/// this record rather than creating a new one; the PDA seeds enforce the
/// unique key.
#[account]
pub struct UserBet {
    pub market: Pubkey,
    pub bettor: Pubkey,
    pub side: BetSide,
    pub amount: u64,         // gross stake before fees
    pub amount_to_pool: u64, // net stake credited to the side pool
    pub claimed: bool,
    pub payout: u64, // recorded at claim time, 0 for losing bets
    pub last_bet_at: i64,
    pub bump: u8,
}

impl UserBet {
    // 8 (discriminator) + 32 (market) + 32 (bettor) + 1 (side)
    // 8 + 8 (amounts) + 1 (claimed) + 8 (payout) + 8 (last_bet_at) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 32 + 1 + 8 + 8 + 1 + 8 + 8 + 1;

    /// `init_if_needed` zeroes a fresh account; an untouched position has
    /// never held a stake.
    pub fn is_fresh(&self) -> bool {
        self.amount == 0
    }
}
