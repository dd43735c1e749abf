pub mod config;
pub mod error;
pub mod global;
pub mod sources;
pub mod types;
