use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankingError {
    #[error("{entity} capacity of {capacity} reached")]
    CapacityExceeded { entity: &'static str, capacity: usize },

    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("Customer not found at index {0}")]
    CustomerNotFound(usize),

    #[error("Account {account} not found for customer {customer}")]
    AccountNotFound { customer: usize, account: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Data error on line {line}: {message}")]
    Data { line: u64, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BankingError>;
