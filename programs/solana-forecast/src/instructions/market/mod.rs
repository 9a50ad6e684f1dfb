pub mod claim_payout;
pub mod create_market;
pub mod place_bet;

pub use claim_payout::*;
pub use create_market::*;
pub use place_bet::*;
