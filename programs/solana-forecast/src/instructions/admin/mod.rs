pub mod cancel_market;
pub mod init_platform;
pub mod update_parameter;

pub use cancel_market::*;
pub use init_platform::*;
pub use update_parameter::*;
