pub mod create_market_from_proposal;
pub mod create_proposal;
pub mod finalize_proposal;
pub mod vote_on_proposal;

pub use create_market_from_proposal::*;
pub use create_proposal::*;
pub use finalize_proposal::*;
pub use vote_on_proposal::*;
