pub mod registry;
pub mod store;
