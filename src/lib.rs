//! An in-memory bank account with an email identifier and an exact decimal balance.
//!
//! The [`bank`] module contains the domain logic: the [`BankAccount`] type, its error kinds, and the
//! validators for emails and monetary amounts. The [`io`] module contains the serializable representation
//! of an account, kept apart from the domain type so both can evolve independently.
//!
//! ```
//! use bank_account::{BankAccount, BankAccountError};
//! use rust_decimal::Decimal;
//!
//! let mut account = BankAccount::new("a@b.com", 200).unwrap();
//! account.withdraw(50.55).unwrap();
//! assert_eq!(account.balance(), Decimal::new(14945, 2));
//!
//! assert!(matches!(
//!   account.withdraw(1000),
//!   Err(BankAccountError::InsufficientFunds { .. })
//! ));
//! ```

pub mod bank;
pub mod io;

pub use bank::{is_amount_valid, is_email_valid, BankAccount, BankAccountError, Monetary, Result};
pub use io::AccountRecord;
