pub mod identifier;
pub mod loader;
pub mod registry;
