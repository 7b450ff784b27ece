// 👤 Customer Entity - named holder of a bounded list of accounts
//
// Accounts are kept in insertion order; index 0 is the primary account.
// The list never grows past `account_capacity`.

use crate::config::DEFAULT_MAX_ACCOUNTS_PER_CUSTOMER;
use crate::entities::account::Account;
use crate::error::{BankingError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Stable identity (UUID)
    id: String,
    first_name: String,
    last_name: String,
    accounts: Vec<Account>,
    account_capacity: usize,
    created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self::with_capacity(first_name, last_name, DEFAULT_MAX_ACCOUNTS_PER_CUSTOMER)
    }

    pub fn with_capacity(first_name: &str, last_name: &str, account_capacity: usize) -> Self {
        Customer {
            id: uuid::Uuid::new_v4().to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            accounts: Vec::with_capacity(account_capacity),
            account_capacity,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "Last, First"
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn account_capacity(&self) -> usize {
        self.account_capacity
    }

    /// Append an account and return its index.
    ///
    /// At capacity nothing is stored and `CapacityExceeded` is returned.
    pub fn add_account(&mut self, account: Account) -> Result<usize> {
        if self.accounts.len() >= self.account_capacity {
            warn!(
                customer = %self.id,
                capacity = self.account_capacity,
                "account rejected, customer full"
            );
            return Err(BankingError::CapacityExceeded {
                entity: "account",
                capacity: self.account_capacity,
            });
        }

        debug!(customer = %self.id, account = %account.id(), "account added");
        self.accounts.push(account);
        Ok(self.accounts.len() - 1)
    }

    pub fn account(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    pub fn account_mut(&mut self, index: usize) -> Option<&mut Account> {
        self.accounts.get_mut(index)
    }

    pub fn num_of_accounts(&self) -> usize {
        self.accounts.len()
    }

    /// Adds the account if the customer has none, otherwise replaces the primary one
    pub fn set_account(&mut self, account: Account) -> Result<()> {
        match self.accounts.first_mut() {
            Some(primary) => *primary = account,
            None => {
                self.add_account(account)?;
            }
        }
        Ok(())
    }

    pub fn primary_account(&self) -> Option<&Account> {
        self.accounts.first()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().fold(0.0, |acc, a| acc + a.balance())
    }

    /// Case-insensitive match on both names
    pub fn matches(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name.to_lowercase() == first_name.to_lowercase()
            && self.last_name.to_lowercase() == last_name.to_lowercase()
    }
}
