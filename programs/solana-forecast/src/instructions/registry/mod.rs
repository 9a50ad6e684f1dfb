pub mod init_registry;
pub mod register_component;

pub use init_registry::*;
pub use register_component::*;
