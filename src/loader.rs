// 📂 Data Loader - CSV data file → Bank
//
// Format (header required):
//   first_name,last_name,account_type,balance,rate
//   Jane,Simms,savings,500.00,0.03
//   Jane,Simms,checking,200.00,400.00
//   Owen,Bryant,,,
//
// - account_type: savings | checking | empty (customer without an account)
// - rate: interest rate for savings, overdraft protection for checking
// - consecutive rows with the same name belong to one customer

use crate::config::BankConfig;
use crate::entities::{AccountKind, Bank};
use crate::error::{BankingError, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct CustomerRow {
    first_name: String,
    last_name: String,
    #[serde(default)]
    account_type: String,
    #[serde(default)]
    balance: Option<f64>,
    #[serde(default)]
    rate: Option<f64>,
}

impl CustomerRow {
    fn account_kind(&self, line: u64) -> Result<Option<AccountKind>> {
        let rate = self.rate.unwrap_or(0.0);
        if !rate.is_finite() || rate < 0.0 {
            return Err(BankingError::Data {
                line,
                message: format!("rate must be a non-negative number, got {}", rate),
            });
        }

        match self.account_type.to_lowercase().as_str() {
            "" if self.balance.is_some() || self.rate.is_some() => Err(BankingError::Data {
                line,
                message: "balance or rate given without an account_type".to_string(),
            }),
            "" => Ok(None),
            "savings" => Ok(Some(AccountKind::Savings { interest_rate: rate })),
            "checking" => Ok(Some(AccountKind::Checking { overdraft_protection: rate })),
            other => Err(BankingError::Data {
                line,
                message: format!("unknown account type '{}'", other),
            }),
        }
    }

    fn balance(&self, line: u64) -> Result<f64> {
        let balance = self.balance.unwrap_or(0.0);
        if !balance.is_finite() || balance < 0.0 {
            return Err(BankingError::Data {
                line,
                message: format!("balance must be a non-negative number, got {}", balance),
            });
        }
        Ok(balance)
    }
}

/// Load a bank from a CSV data file
pub fn load_bank(path: &Path, config: &BankConfig) -> Result<Bank> {
    let file = std::fs::File::open(path)?;
    let bank = load_bank_from_reader(file, config)?;
    info!(
        path = %path.display(),
        customers = bank.num_of_customers(),
        "bank loaded"
    );
    Ok(bank)
}

pub fn load_bank_from_reader<R: Read>(reader: R, config: &BankConfig) -> Result<Bank> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut bank = Bank::from_config(config)?;
    let mut current: Option<usize> = None;

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let row: CustomerRow = record
            .deserialize(Some(&headers))
            .map_err(|e| BankingError::Data {
                line,
                message: e.to_string(),
            })?;

        if row.first_name.is_empty() || row.last_name.is_empty() {
            return Err(BankingError::Data {
                line,
                message: "first_name and last_name are required".to_string(),
            });
        }

        let same_customer = current
            .and_then(|index| bank.customer(index))
            .map(|c| c.matches(&row.first_name, &row.last_name))
            .unwrap_or(false);

        let customer_index = match current {
            Some(index) if same_customer => index,
            _ => bank.add_customer(&row.first_name, &row.last_name)?,
        };
        current = Some(customer_index);

        if let Some(kind) = row.account_kind(line)? {
            let balance = row.balance(line)?;
            bank.open_account(customer_index, kind, balance)?;
        }

        debug!(line, customer = customer_index, "row loaded");
    }

    Ok(bank)
}
