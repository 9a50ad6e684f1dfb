pub mod claim_creator_fees;

pub use claim_creator_fees::*;
