//! Removes leftover documentation and helper scripts from the
//! Offensive Security Escape Room project checkout.

pub mod config;
pub mod error;
pub mod executor;
pub mod fs;
pub mod logger;

pub use config::CleanupPlan;
pub use error::CleanupError;
pub use executor::{execute, RunReport};
