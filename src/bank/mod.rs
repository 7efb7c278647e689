//! This module contains the domain logic of a bank account
//!
//! A [`BankAccount`] validates every input before mutating its balance, so a failed operation never leaves
//! a partial change behind. The validators are exposed on their own as [`is_email_valid`] and [`is_amount_valid`].
//

mod account;
mod error;
mod validation;

pub use account::BankAccount;
pub use error::{BankAccountError, Result};
pub use validation::{is_amount_valid, is_email_valid, Monetary};
