// Public modules for integration tests and library usage
pub mod client;
pub mod config;
pub mod fixture;
pub mod runner;
pub mod types;

// Re-export commonly used types for convenience
pub use client::{ApiResponse, UserApiClient};
pub use config::Config;
pub use runner::{CaseReport, ContractRunner, RunReport, assert_outcome};
pub use types::{ContractError, ExpectedOutcome, TestCase, UserRecord};
