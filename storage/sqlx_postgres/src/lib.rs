pub mod configuration;
mod locations;
pub mod migrations;
pub mod pool_manager;
pub mod repository;
