use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, BankAccountError>;

/// Possible errors returned by the operations of a [`BankAccount`](super::BankAccount).
/// They are always detected before any balance is modified.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BankAccountError {
  #[error("Invalid argument: {0}")]
  InvalidArgument(&'static str),

  #[error("Insufficient funds: requested {requested} but the balance is {balance}")]
  InsufficientFunds { balance: Decimal, requested: Decimal },
}

impl BankAccountError {
  pub fn is_invalid_argument(&self) -> bool {
    matches!(self, Self::InvalidArgument(_))
  }

  pub fn is_insufficient_funds(&self) -> bool {
    matches!(self, Self::InsufficientFunds { .. })
  }
}
