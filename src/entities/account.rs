// 💳 Account Entity - balance holder with savings/checking rules
//
// "Account UUID is IDENTITY (never changes), balance is a VALUE"
//
// Rules:
// - Deposits and withdrawals must be finite, positive amounts
// - Savings accounts never go below zero
// - Checking accounts may draw on overdraft protection, which is consumed
// - A rejected withdrawal leaves the account untouched

use crate::config::DEFAULT_CURRENCY;
use crate::error::{BankingError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// ACCOUNT KIND
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountKind {
    /// Interest-bearing account, rate applied by `accrue_interest`
    Savings { interest_rate: f64 },

    /// Daily account with optional overdraft protection
    Checking { overdraft_protection: f64 },
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "Savings",
            AccountKind::Checking { .. } => "Checking",
        }
    }

    pub fn is_savings(&self) -> bool {
        matches!(self, AccountKind::Savings { .. })
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Stable identity (UUID)
    id: String,

    kind: AccountKind,

    balance: f64,

    /// ISO 4217 code (USD, EUR, MXN, ...)
    currency: String,

    opened_at: DateTime<Utc>,
}

impl Account {
    /// Open an account. The initial balance, interest rate and overdraft
    /// protection must each be finite and not negative.
    pub fn new(kind: AccountKind, initial_balance: f64, currency: &str) -> Result<Self> {
        validate_non_negative(initial_balance)?;
        match kind {
            AccountKind::Savings { interest_rate } => validate_non_negative(interest_rate)?,
            AccountKind::Checking { overdraft_protection } => {
                validate_non_negative(overdraft_protection)?
            }
        }

        Ok(Account {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            balance: initial_balance,
            currency: currency.to_string(),
            opened_at: Utc::now(),
        })
    }

    pub fn savings(initial_balance: f64, interest_rate: f64) -> Result<Self> {
        Self::new(AccountKind::Savings { interest_rate }, initial_balance, DEFAULT_CURRENCY)
    }

    pub fn checking(initial_balance: f64, overdraft_protection: f64) -> Result<Self> {
        Self::new(
            AccountKind::Checking { overdraft_protection },
            initial_balance,
            DEFAULT_CURRENCY,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Balance plus whatever overdraft protection is left
    pub fn available_funds(&self) -> f64 {
        match self.kind {
            AccountKind::Savings { .. } => self.balance,
            AccountKind::Checking { overdraft_protection } => self.balance + overdraft_protection,
        }
    }

    /// Credit the account, returning the new balance
    pub fn deposit(&mut self, amount: f64) -> Result<f64> {
        validate_amount(amount)?;
        self.balance += amount;
        debug!(account = %self.id, amount, balance = self.balance, "deposit");
        Ok(self.balance)
    }

    /// Debit the account, returning the new balance
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        validate_amount(amount)?;

        match &mut self.kind {
            AccountKind::Savings { .. } => {
                if amount > self.balance {
                    return Err(BankingError::InsufficientFunds {
                        requested: amount,
                        available: self.balance,
                    });
                }
                self.balance -= amount;
            }
            AccountKind::Checking { overdraft_protection } => {
                if amount <= self.balance {
                    self.balance -= amount;
                } else {
                    let shortfall = amount - self.balance;
                    if shortfall > *overdraft_protection {
                        return Err(BankingError::InsufficientFunds {
                            requested: amount,
                            available: self.balance + *overdraft_protection,
                        });
                    }
                    *overdraft_protection -= shortfall;
                    self.balance = 0.0;
                }
            }
        }

        debug!(account = %self.id, amount, balance = self.balance, "withdrawal");
        Ok(self.balance)
    }

    /// Apply one period of interest to a savings account, returning the interest added.
    /// Checking accounts earn nothing.
    pub fn accrue_interest(&mut self) -> f64 {
        match self.kind {
            AccountKind::Savings { interest_rate } => {
                let interest = self.balance * interest_rate;
                self.balance += interest;
                interest
            }
            AccountKind::Checking { .. } => 0.0,
        }
    }
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(BankingError::InvalidAmount(amount));
    }
    Ok(())
}

fn validate_non_negative(value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(BankingError::InvalidAmount(value));
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let account = Account::savings(500.0, 0.03).unwrap();

        assert!(!account.id().is_empty());
        assert_eq!(account.balance(), 500.0);
        assert_eq!(account.currency(), "USD");
        assert_eq!(account.kind().as_str(), "Savings");
        assert!(account.kind().is_savings());

        let checking = Account::new(
            AccountKind::Checking { overdraft_protection: 0.0 },
            10.0,
            "MXN",
        )
        .unwrap();
        assert_eq!(checking.currency(), "MXN");
        assert_eq!(checking.kind().as_str(), "Checking");
        assert_ne!(account.id(), checking.id());
    }

    #[test]
    fn test_open_with_zero_balance() {
        let account = Account::checking(0.0, 0.0).unwrap();
        assert_eq!(account.balance(), 0.0);
        assert_eq!(account.available_funds(), 0.0);
    }

    #[test]
    fn test_open_rejects_bad_initial_balance() {
        for balance in [-50.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Account::savings(balance, 0.0),
                Err(BankingError::InvalidAmount(_))
            ));
            assert!(matches!(
                Account::checking(balance, 0.0),
                Err(BankingError::InvalidAmount(_))
            ));
        }
    }

    #[test]
    fn test_open_rejects_bad_rates() {
        for rate in [-3.0, f64::NAN, f64::NEG_INFINITY] {
            assert!(matches!(
                Account::savings(100.0, rate),
                Err(BankingError::InvalidAmount(_))
            ));
            assert!(matches!(
                Account::checking(100.0, rate),
                Err(BankingError::InvalidAmount(_))
            ));
        }
    }

    #[test]
    fn test_deposit() {
        let mut account = Account::savings(100.0, 0.0).unwrap();
        assert_eq!(account.deposit(50.0).unwrap(), 150.0);
        assert_eq!(account.balance(), 150.0);
    }

    #[test]
    fn test_invalid_amounts_rejected() {
        let mut account = Account::checking(100.0, 50.0).unwrap();

        for amount in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(account.deposit(amount), Err(BankingError::InvalidAmount(_))));
            assert!(matches!(account.withdraw(amount), Err(BankingError::InvalidAmount(_))));
        }
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.available_funds(), 150.0);
    }

    #[test]
    fn test_savings_withdraw() {
        let mut account = Account::savings(100.0, 0.0).unwrap();

        assert_eq!(account.withdraw(40.0).unwrap(), 60.0);
        assert_eq!(account.withdraw(60.0).unwrap(), 0.0);
    }

    #[test]
    fn test_savings_overdraw_rejected() {
        let mut account = Account::savings(100.0, 0.0).unwrap();
        let before = account.clone();

        match account.withdraw(100.5) {
            Err(BankingError::InsufficientFunds { requested, available }) => {
                assert_eq!(requested, 100.5);
                assert_eq!(available, 100.0);
            }
            other => panic!("expected insufficient funds, got {:?}", other),
        }
        assert_eq!(account, before);
    }

    #[test]
    fn test_checking_within_balance() {
        let mut account = Account::checking(200.0, 100.0).unwrap();

        assert_eq!(account.withdraw(150.0).unwrap(), 50.0);
        assert_eq!(account.available_funds(), 150.0);
    }

    #[test]
    fn test_checking_uses_overdraft_protection() {
        let mut account = Account::checking(200.0, 100.0).unwrap();

        // 60 of the 260 comes out of overdraft protection
        assert_eq!(account.withdraw(260.0).unwrap(), 0.0);
        assert_eq!(account.kind(), &AccountKind::Checking { overdraft_protection: 40.0 });

        // Protection keeps shrinking until it is gone
        assert_eq!(account.withdraw(40.0).unwrap(), 0.0);
        assert_eq!(account.available_funds(), 0.0);
        assert!(account.withdraw(1.0).is_err());
    }

    #[test]
    fn test_checking_overdraft_exceeded_rejected() {
        let mut account = Account::checking(200.0, 100.0).unwrap();
        let before = account.clone();

        match account.withdraw(350.0) {
            Err(BankingError::InsufficientFunds { requested, available }) => {
                assert_eq!(requested, 350.0);
                assert_eq!(available, 300.0);
            }
            other => panic!("expected insufficient funds, got {:?}", other),
        }
        assert_eq!(account, before);
    }

    #[test]
    fn test_checking_without_protection() {
        let mut account = Account::checking(50.0, 0.0).unwrap();
        assert!(account.withdraw(50.5).is_err());
        assert_eq!(account.withdraw(50.0).unwrap(), 0.0);
    }

    #[test]
    fn test_accrue_interest() {
        let mut savings = Account::savings(400.0, 0.25).unwrap();
        assert_eq!(savings.accrue_interest(), 100.0);
        assert_eq!(savings.balance(), 500.0);

        let mut checking = Account::checking(400.0, 0.0).unwrap();
        assert_eq!(checking.accrue_interest(), 0.0);
        assert_eq!(checking.balance(), 400.0);
    }

    #[test]
    fn test_account_serialization() {
        let account = Account::checking(25.0, 10.0).unwrap();
        let value = serde_json::to_value(&account).unwrap();

        assert_eq!(value["kind"]["type"], "checking");
        assert_eq!(value["kind"]["overdraft_protection"], 10.0);
        assert_eq!(value["balance"], 25.0);

        let back: Account = serde_json::from_value(value).unwrap();
        assert_eq!(back, account);
    }
}
