//! Pure pool, fee and vote arithmetic. Everything here is deterministic
//! integer math so the settlement invariants can be unit tested without a
//! ledger.

use crate::state::market::Outcome;

pub const BPS_DENOMINATOR: u64 = 10_000;

/// Fee components of a single bet, each in lamports.
#[derive(Debug, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub platform: u64,
    pub team: u64,
    pub burn: u64,
    pub creator: u64,
    pub net: u64,
}

impl FeeBreakdown {
    pub fn total_fees(&self) -> u64 {
        self.platform + self.team + self.burn + self.creator
    }
}

/// Split a gross stake into fee components and the net amount that enters
/// the pool. Each component rounds down, so the net absorbs the dust.
pub fn fee_breakdown(
    amount: u64,
    platform_bps: u16,
    team_bps: u16,
    burn_bps: u16,
    creator_bps: u16,
) -> Option<FeeBreakdown> {
    let component = |bps: u16| -> u64 {
        ((amount as u128 * bps as u128) / BPS_DENOMINATOR as u128) as u64
    };
    let platform = component(platform_bps);
    let team = component(team_bps);
    let burn = component(burn_bps);
    let creator = component(creator_bps);
    let total = platform
        .checked_add(team)?
        .checked_add(burn)?
        .checked_add(creator)?;
    let net = amount.checked_sub(total)?;
    Some(FeeBreakdown {
        platform,
        team,
        burn,
        creator,
        net,
    })
}

/// YES probability in basis points. An empty market reads 50/50; the NO side
/// is always `10_000 - yes`, never rounded independently.
pub fn yes_probability_bps(yes_pool: u64, no_pool: u64) -> u16 {
    let total = yes_pool as u128 + no_pool as u128;
    if total == 0 {
        return 5_000;
    }
    ((yes_pool as u128 * BPS_DENOMINATOR as u128) / total) as u16
}

/// Proportional share of the total pool for a winning net stake.
pub fn winner_payout(net_stake: u64, winning_pool: u64, total_pool: u64) -> Option<u64> {
    if winning_pool == 0 {
        return None;
    }
    let payout = (net_stake as u128)
        .checked_mul(total_pool as u128)?
        .checked_div(winning_pool as u128)?;
    u64::try_from(payout).ok()
}

/// Cap a computed payout at what the pool has left after earlier claims.
/// Rounding dust accrues to later claimers; the sum of payouts can never
/// pass the pool total. `None` means the claim bookkeeping itself is
/// inconsistent (claimed more than the pool ever held).
pub fn capped_payout(computed: u64, total_pool: u64, total_claimed: u64) -> Option<u64> {
    let remaining = total_pool.checked_sub(total_claimed)?;
    Some(computed.min(remaining))
}

/// Bounded parameter drift: a new value may deviate from the old by at most
/// `max_change_bps`. Changes from zero are unrestricted.
pub fn change_within_bounds(old_value: u64, new_value: u64, max_change_bps: u16) -> bool {
    if old_value == 0 {
        return true;
    }
    let diff = old_value.abs_diff(new_value);
    let max_allowed = (old_value as u128 * max_change_bps as u128) / BPS_DENOMINATOR as u128;
    diff as u128 <= max_allowed
}

/// Majority of weighted resolution votes; an exact tie (including no votes
/// at all) cancels the market.
pub fn determine_outcome(yes_weight: u64, no_weight: u64) -> Outcome {
    if yes_weight > no_weight {
        Outcome::Yes
    } else if no_weight > yes_weight {
        Outcome::No
    } else {
        Outcome::Cancelled
    }
}

/// Proposal approval rule: at least one voter and >= 60% YES. The threshold
/// is inclusive, so exactly 3 of 5 passes.
pub fn approval_passes(yes_votes: u32, no_votes: u32) -> bool {
    let total = yes_votes as u64 + no_votes as u64;
    if total == 0 {
        return false;
    }
    (yes_votes as u64 * 100) / total >= 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_split_nets_into_pool() {
        // 600/400 pools, 10-unit YES bet at 4% total fees nets 9.6.
        // Scaled by 10 to stay in integers: 6000/4000, bet 100, net 96.
        let fees = fee_breakdown(100, 200, 100, 50, 50).unwrap();
        assert_eq!(fees.total_fees(), 4);
        assert_eq!(fees.net, 96);

        let yes_pool = 6_000 + fees.net;
        assert_eq!(yes_pool, 6_096);
        let prob = yes_probability_bps(yes_pool, 4_000);
        assert_eq!(prob, 6_038); // ~60.38%
    }

    #[test]
    fn probabilities_sum_to_one() {
        for (yes, no) in [(0, 0), (1, 0), (0, 1), (6_096, 4_000), (7, 13)] {
            let yes_bps = yes_probability_bps(yes, no);
            let no_bps = BPS_DENOMINATOR as u16 - yes_bps;
            assert_eq!(yes_bps as u32 + no_bps as u32, BPS_DENOMINATOR as u32);
        }
    }

    #[test]
    fn empty_market_reads_fifty_fifty() {
        assert_eq!(yes_probability_bps(0, 0), 5_000);
    }

    #[test]
    fn zero_fee_bet_is_whole() {
        let fees = fee_breakdown(1_000, 0, 0, 0, 0).unwrap();
        assert_eq!(fees.total_fees(), 0);
        assert_eq!(fees.net, 1_000);
    }

    #[test]
    fn fee_components_round_down_individually() {
        // 33 lamports at 1% each: every component floors to 0.
        let fees = fee_breakdown(33, 100, 100, 100, 100).unwrap();
        assert_eq!(fees.total_fees(), 0);
        assert_eq!(fees.net, 33);
    }

    #[test]
    fn winner_payouts_never_exceed_total_pool() {
        // Two YES winners with net stakes 400 and 200 against a 400 NO pool.
        let total = 1_000u64;
        let winning = 600u64;
        let a = winner_payout(400, winning, total).unwrap();
        let b = winner_payout(200, winning, total).unwrap();
        assert_eq!(a, 666);
        assert_eq!(b, 333);
        assert!(a + b <= total);
    }

    #[test]
    fn winner_payout_rejects_empty_pool() {
        assert_eq!(winner_payout(100, 0, 1_000), None);
    }

    #[test]
    fn payout_cap_bounds_each_claim_by_the_remainder() {
        // The formula's result passes through while the pool covers it.
        assert_eq!(capped_payout(200, 1_000, 700), Some(200));
        // A claim past the remainder clamps to exactly what is left.
        assert_eq!(capped_payout(400, 1_000, 700), Some(300));
        // A drained pool pays zero; over-claimed bookkeeping is an error.
        assert_eq!(capped_payout(5, 1_000, 1_000), Some(0));
        assert_eq!(capped_payout(5, 1_000, 1_001), None);
    }

    #[test]
    fn sequential_capped_claims_stay_inside_the_pool() {
        // Three equal winners of a 1000 pool each floor to 333; the final
        // lamport of dust stays in the vault rather than over-paying.
        let total = 1_000u64;
        let winning = 3u64;
        let mut claimed = 0u64;
        for stake in [1u64, 1, 1] {
            let computed = winner_payout(stake, winning, total).unwrap();
            let paid = capped_payout(computed, total, claimed).unwrap();
            claimed += paid;
        }
        assert_eq!(claimed, 999);
        assert!(claimed <= total);
    }

    #[test]
    fn sole_winner_takes_whole_pool() {
        assert_eq!(winner_payout(600, 600, 1_000), Some(1_000));
    }

    #[test]
    fn bounded_change_allows_twenty_percent() {
        assert!(change_within_bounds(1_000, 1_200, 2_000));
        assert!(change_within_bounds(1_000, 800, 2_000));
        assert!(!change_within_bounds(1_000, 1_201, 2_000));
        assert!(!change_within_bounds(1_000, 799, 2_000));
    }

    #[test]
    fn bounded_change_from_zero_is_free() {
        assert!(change_within_bounds(0, 1_000_000, 1));
    }

    #[test]
    fn tie_cancels_market() {
        assert_eq!(determine_outcome(2, 2), Outcome::Cancelled);
        assert_eq!(determine_outcome(0, 0), Outcome::Cancelled);
        assert_eq!(determine_outcome(3, 2), Outcome::Yes);
        assert_eq!(determine_outcome(2, 3), Outcome::No);
    }

    #[test]
    fn approval_threshold_is_inclusive() {
        assert!(approval_passes(3, 2)); // exactly 60%
        assert!(!approval_passes(2, 3)); // 40%
        assert!(!approval_passes(0, 0)); // nobody voted
        assert!(approval_passes(59, 1)); // well above
        assert!(!approval_passes(59, 41)); // 59%
    }
}
