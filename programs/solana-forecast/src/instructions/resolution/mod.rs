pub mod admin_override;
pub mod aggregate_votes;
pub mod finalize_resolution;
pub mod open_resolution;
pub mod submit_vote;

pub use admin_override::*;
pub use aggregate_votes::*;
pub use finalize_resolution::*;
pub use open_resolution::*;
pub use submit_vote::*;
