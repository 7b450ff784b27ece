// 🏦 Bank Entity - bounded list of customers plus an audit trail
//
// There is no global bank: callers create one and pass it around.
// All mutations that go through the Bank are recorded in its EventLog.

use crate::config::{
    BankConfig, DEFAULT_BANK_NAME, DEFAULT_CURRENCY, DEFAULT_MAX_ACCOUNTS_PER_CUSTOMER,
    DEFAULT_MAX_CUSTOMERS,
};
use crate::entities::account::{Account, AccountKind};
use crate::entities::customer::Customer;
use crate::error::{BankingError, Result};
use crate::events::{self, Event, EventLog};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize)]
pub struct Bank {
    name: String,
    currency: String,
    customers: Vec<Customer>,
    customer_capacity: usize,
    account_capacity: usize,
    #[serde(skip)]
    events: EventLog,
}

impl Bank {
    /// Bank with default name, currency and capacities (10 customers, 10 accounts each)
    pub fn new() -> Self {
        Bank {
            name: DEFAULT_BANK_NAME.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            customers: Vec::with_capacity(DEFAULT_MAX_CUSTOMERS),
            customer_capacity: DEFAULT_MAX_CUSTOMERS,
            account_capacity: DEFAULT_MAX_ACCOUNTS_PER_CUSTOMER,
            events: EventLog::new(),
        }
    }

    /// Bank built from a config, which is validated first
    pub fn from_config(config: &BankConfig) -> Result<Self> {
        config.validate()?;

        Ok(Bank {
            name: config.bank.name.clone(),
            currency: config.bank.currency.clone(),
            customers: Vec::with_capacity(config.limits.max_customers),
            customer_capacity: config.limits.max_customers,
            account_capacity: config.limits.max_accounts_per_customer,
            events: EventLog::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn customer_capacity(&self) -> usize {
        self.customer_capacity
    }

    // ========================================================================
    // CUSTOMERS
    // ========================================================================

    /// Create a customer and return its index
    pub fn add_customer(&mut self, first_name: &str, last_name: &str) -> Result<usize> {
        if self.customers.len() >= self.customer_capacity {
            warn!(capacity = self.customer_capacity, "customer rejected, bank full");
            return Err(BankingError::CapacityExceeded {
                entity: "customer",
                capacity: self.customer_capacity,
            });
        }

        let customer = Customer::with_capacity(first_name, last_name, self.account_capacity);
        self.events.record(Event::new(
            events::CUSTOMER_ADDED,
            "customer",
            customer.id(),
            json!({ "first_name": first_name, "last_name": last_name }),
        ));
        debug!(customer = %customer.id(), name = %customer.full_name(), "customer added");

        self.customers.push(customer);
        Ok(self.customers.len() - 1)
    }

    pub fn num_of_customers(&self) -> usize {
        self.customers.len()
    }

    pub fn customer(&self, index: usize) -> Option<&Customer> {
        self.customers.get(index)
    }

    pub fn customer_mut(&mut self, index: usize) -> Option<&mut Customer> {
        self.customers.get_mut(index)
    }

    /// Index of the first customer with this name (case-insensitive)
    pub fn find_customer(&self, first_name: &str, last_name: &str) -> Option<usize> {
        self.customers.iter().position(|c| c.matches(first_name, last_name))
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    // ========================================================================
    // ACCOUNTS
    // ========================================================================

    /// Open an account in the bank's currency and return its index on the customer.
    ///
    /// The initial balance and the kind's rate must be finite and not negative.
    pub fn open_account(
        &mut self,
        customer_index: usize,
        kind: AccountKind,
        initial_balance: f64,
    ) -> Result<usize> {
        let account = Account::new(kind, initial_balance, &self.currency)?;
        let account_id = account.id().to_string();
        let kind_name = account.kind().as_str();

        let customer = self
            .customers
            .get_mut(customer_index)
            .ok_or(BankingError::CustomerNotFound(customer_index))?;
        let index = customer.add_account(account)?;

        self.events.record(Event::new(
            events::ACCOUNT_OPENED,
            "account",
            &account_id,
            json!({
                "customer_index": customer_index,
                "kind": kind_name,
                "initial_balance": initial_balance,
            }),
        ));
        Ok(index)
    }

    pub fn deposit(
        &mut self,
        customer_index: usize,
        account_index: usize,
        amount: f64,
    ) -> Result<f64> {
        let account = self.account_mut(customer_index, account_index)?;
        let balance = account.deposit(amount)?;
        let account_id = account.id().to_string();

        self.events.record(Event::new(
            events::DEPOSIT,
            "account",
            &account_id,
            json!({ "amount": amount, "balance": balance }),
        ));
        Ok(balance)
    }

    /// Rejected withdrawals are recorded too, then the error is returned
    pub fn withdraw(
        &mut self,
        customer_index: usize,
        account_index: usize,
        amount: f64,
    ) -> Result<f64> {
        let account = self.account_mut(customer_index, account_index)?;
        let account_id = account.id().to_string();

        match account.withdraw(amount) {
            Ok(balance) => {
                self.events.record(Event::new(
                    events::WITHDRAWAL,
                    "account",
                    &account_id,
                    json!({ "amount": amount, "balance": balance }),
                ));
                Ok(balance)
            }
            Err(err) => {
                warn!(account = %account_id, amount, error = %err, "withdrawal rejected");
                self.events.record(Event::new(
                    events::WITHDRAWAL_REJECTED,
                    "account",
                    &account_id,
                    json!({ "amount": amount, "reason": err.to_string() }),
                ));
                Err(err)
            }
        }
    }

    /// Apply one period of interest to every savings account, returning the total paid
    pub fn accrue_interest(&mut self) -> f64 {
        let mut total = 0.0;
        let mut accrued = Vec::new();

        for customer in &mut self.customers {
            for index in 0..customer.num_of_accounts() {
                if let Some(account) = customer.account_mut(index) {
                    if !account.kind().is_savings() {
                        continue;
                    }
                    let interest = account.accrue_interest();
                    total += interest;
                    accrued.push((account.id().to_string(), interest, account.balance()));
                }
            }
        }

        for (account_id, interest, balance) in accrued {
            self.events.record(Event::new(
                events::INTEREST_ACCRUED,
                "account",
                &account_id,
                json!({ "interest": interest, "balance": balance }),
            ));
        }

        info!(total, "interest accrued");
        total
    }

    /// Sum of every account balance in the bank
    pub fn total_deposits(&self) -> f64 {
        self.customers.iter().fold(0.0, |acc, c| acc + c.total_balance())
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    fn account_mut(
        &mut self,
        customer_index: usize,
        account_index: usize,
    ) -> Result<&mut Account> {
        self.customers
            .get_mut(customer_index)
            .ok_or(BankingError::CustomerNotFound(customer_index))?
            .account_mut(account_index)
            .ok_or(BankingError::AccountNotFound {
                customer: customer_index,
                account: account_index,
            })
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
