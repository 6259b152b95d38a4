// Customer Bank - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod error;
pub mod config;
pub mod entities;
pub mod seed;
pub mod store;
pub mod bank;
pub mod operations;     // deposit / withdraw / transfer
pub mod sync;           // customer ↔ account list bookkeeping
pub mod views;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use error::{BankError, Result};
pub use config::{Config, ConfigError};
pub use entities::{
    Account, AccountId, Currency,
    Customer, CustomerId, CustomerPatch,
};
pub use store::{AccountStore, CustomerStore, Store};
pub use bank::Bank;
pub use sync::SyncPolicy;
pub use views::{AccountSummary, AccountView, CustomerSummary, CustomerView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info,customer_bank=debug";
