pub mod bond;
pub mod market;
pub mod platform;
pub mod position;
pub mod proposal;
pub mod registry;
pub mod resolution;

pub use bond::*;
pub use market::*;
pub use platform::*;
pub use position::*;
pub use proposal::*;
pub use registry::*;
pub use resolution::*;
