pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod query;
pub mod types;
