// Banking - Core Library
// In-memory Bank → Customer → Account model, used by the CLI and tests

pub mod config;
pub mod entities;
pub mod error;
pub mod events;
pub mod loader;
pub mod logger;
pub mod report;

// Re-export commonly used types
pub use config::BankConfig;
pub use entities::{Account, AccountKind, Bank, Customer};
pub use error::{BankingError, Result};
pub use events::{Event, EventLog};
pub use loader::{load_bank, load_bank_from_reader};
pub use report::{customer_report, snapshot, snapshot_json};
