// 📊 Customer Report - text listing and JSON snapshot of a Bank

use crate::entities::{AccountKind, Bank};
use crate::error::Result;
use serde_json::{json, Value};

/// Plain-text report: every customer followed by each of their accounts.
///
/// ```text
/// CUSTOMERS REPORT
/// ================
///
/// Customer: Simms, Jane
///     Savings Account: current balance is 500.00 USD
/// ```
pub fn customer_report(bank: &Bank) -> String {
    let mut out = String::from("CUSTOMERS REPORT\n================\n");

    for customer in bank.customers() {
        out.push_str(&format!("\nCustomer: {}\n", customer.full_name()));

        if customer.num_of_accounts() == 0 {
            out.push_str("    No accounts\n");
        }

        for account in customer.accounts() {
            out.push_str(&format!(
                "    {} Account: current balance is {:.2} {}\n",
                account.kind().as_str(),
                account.balance(),
                account.currency()
            ));
        }
    }

    out.push_str(&format!(
        "\nTotal deposits: {:.2} {}\n",
        bank.total_deposits(),
        bank.currency()
    ));

    out
}

/// Machine-readable view of the bank
pub fn snapshot(bank: &Bank) -> Value {
    let customers: Vec<Value> = bank
        .customers()
        .iter()
        .map(|customer| {
            let accounts: Vec<Value> = customer
                .accounts()
                .iter()
                .map(|account| {
                    let mut value = json!({
                        "id": account.id(),
                        "type": account.kind().as_str(),
                        "balance": account.balance(),
                        "currency": account.currency(),
                        "opened_at": account.opened_at().to_rfc3339(),
                    });
                    match account.kind() {
                        AccountKind::Savings { interest_rate } => {
                            value["interest_rate"] = json!(interest_rate);
                        }
                        AccountKind::Checking { overdraft_protection } => {
                            value["overdraft_protection"] = json!(overdraft_protection);
                        }
                    }
                    value
                })
                .collect();

            json!({
                "id": customer.id(),
                "first_name": customer.first_name(),
                "last_name": customer.last_name(),
                "accounts": accounts,
            })
        })
        .collect();

    json!({
        "bank": bank.name(),
        "currency": bank.currency(),
        "total_deposits": bank.total_deposits(),
        "customers": customers,
    })
}

pub fn snapshot_json(bank: &Bank) -> Result<String> {
    Ok(serde_json::to_string_pretty(&snapshot(bank))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bank() -> Bank {
        let mut bank = Bank::new();
        let jane = bank.add_customer("Jane", "Simms").unwrap();
        bank.open_account(jane, AccountKind::Savings { interest_rate: 0.03 }, 500.0)
            .unwrap();
        bank.open_account(jane, AccountKind::Checking { overdraft_protection: 0.0 }, 200.0)
            .unwrap();
        bank.add_customer("Tim", "Soley").unwrap();
        bank
    }

    #[test]
    fn test_customer_report_format() {
        let report = customer_report(&sample_bank());

        let expected = "\
CUSTOMERS REPORT
================

Customer: Simms, Jane
    Savings Account: current balance is 500.00 USD
    Checking Account: current balance is 200.00 USD

Customer: Soley, Tim
    No accounts

Total deposits: 700.00 USD
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_empty_bank_report() {
        let report = customer_report(&Bank::new());
        assert!(report.starts_with("CUSTOMERS REPORT\n"));
        assert!(report.ends_with("Total deposits: 0.00 USD\n"));
        assert!(!report.contains("Customer:"));
        assert!(!report.contains("-0.00"));
    }

    #[test]
    fn test_customers_without_accounts_total_zero() {
        let mut bank = Bank::new();
        bank.add_customer("Tim", "Soley").unwrap();

        let report = customer_report(&bank);
        assert!(report.ends_with("Total deposits: 0.00 USD\n"));

        let value = snapshot(&bank);
        assert!(value["total_deposits"].as_f64().unwrap().is_sign_positive());
    }

    #[test]
    fn test_snapshot() {
        let value = snapshot(&sample_bank());

        assert_eq!(value["bank"], "First Bank");
        assert_eq!(value["total_deposits"], 700.0);
        assert_eq!(value["customers"].as_array().unwrap().len(), 2);

        let accounts = &value["customers"][0]["accounts"];
        assert_eq!(accounts[0]["type"], "Savings");
        assert_eq!(accounts[0]["interest_rate"], 0.03);
        assert_eq!(accounts[1]["type"], "Checking");
        assert_eq!(accounts[1]["overdraft_protection"], 0.0);
        assert!(value["customers"][1]["accounts"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_json_parses_back() {
        let text = snapshot_json(&sample_bank()).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["customers"][0]["last_name"], "Simms");
    }
}
