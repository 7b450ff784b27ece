// Entity Models - Bank → Customer → Account
//
// Each entity has:
// - Stable identity (UUID) that never changes
// - Bounded, index-addressed children (customers in a bank, accounts in a customer)

pub mod account;
pub mod bank;
pub mod customer;

pub use account::{Account, AccountKind};
pub use bank::Bank;
pub use customer::Customer;
