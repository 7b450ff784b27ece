// ⚙️ Bank Configuration - TOML file with defaults for every key
//
// [bank]   name, currency
// [limits] max_customers, max_accounts_per_customer

use crate::error::{BankingError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_CUSTOMERS: usize = 10;
pub const DEFAULT_MAX_ACCOUNTS_PER_CUSTOMER: usize = 10;
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_BANK_NAME: &str = "First Bank";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    pub bank: BankSection,
    pub limits: LimitsSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankSection {
    pub name: String,
    pub currency: String,
}

impl Default for BankSection {
    fn default() -> Self {
        BankSection {
            name: DEFAULT_BANK_NAME.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsSection {
    pub max_customers: usize,
    pub max_accounts_per_customer: usize,
}

impl Default for LimitsSection {
    fn default() -> Self {
        LimitsSection {
            max_customers: DEFAULT_MAX_CUSTOMERS,
            max_accounts_per_customer: DEFAULT_MAX_ACCOUNTS_PER_CUSTOMER,
        }
    }
}

impl BankConfig {
    /// Read and validate a TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BankingError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BankConfig = toml::from_str(content).map_err(|e| BankingError::Config {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.limits.max_customers == 0 {
            return Err(BankingError::Config {
                message: "limits.max_customers must be at least 1".to_string(),
            });
        }
        if self.limits.max_accounts_per_customer == 0 {
            return Err(BankingError::Config {
                message: "limits.max_accounts_per_customer must be at least 1".to_string(),
            });
        }

        let currency = &self.bank.currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(BankingError::Config {
                message: format!("bank.currency must be an ISO 4217 code, got '{}'", currency),
            });
        }

        Ok(())
    }
}
