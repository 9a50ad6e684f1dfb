pub mod admin;
pub mod bond;
pub mod market;
pub mod proposal;
pub mod registry;
pub mod resolution;

pub use admin::*;
pub use bond::*;
pub use market::*;
pub use proposal::*;
pub use registry::*;
pub use resolution::*;
