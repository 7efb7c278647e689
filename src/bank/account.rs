use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
  error::{BankAccountError, Result},
  validation::{is_email_valid, valid_amount, Monetary},
};
use crate::io::AccountRecord;

/// A bank account identified by an email and holding an exact decimal balance.
///
/// The balance is never negative, and it only changes through [`deposit`](Self::deposit),
/// [`withdraw`](Self::withdraw) and [`transfer`](Self::transfer). All of them validate their inputs
/// before touching any balance, so an error always leaves the accounts as they were.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "AccountRecord", try_from = "AccountRecord")]
pub struct BankAccount {
  email: String,
  balance: Decimal,
}

impl BankAccount {
  /// Creates an account with the email and starting balance.
  ///
  /// A starting balance of zero is always accepted, any other value must be a valid amount.
  pub fn new(email: impl Into<String>, starting_balance: impl Monetary) -> Result<Self> {
    let email = email.into();
    if !is_email_valid(&email) {
      return Err(BankAccountError::InvalidArgument("Invalid email address"));
    }

    let balance = match starting_balance.to_decimal() {
      Some(value) if value.is_zero() => Decimal::ZERO,
      _ => valid_amount(starting_balance)
        .ok_or(BankAccountError::InvalidArgument("Invalid starting balance"))?,
    };

    debug!(email = %email, balance = %balance, "account created");

    Ok(Self { email, balance })
  }

  pub fn email(&self) -> &str {
    &self.email
  }

  pub fn balance(&self) -> Decimal {
    self.balance
  }

  pub fn deposit(&mut self, amount: impl Monetary) -> Result<()> {
    let amount =
      valid_amount(amount).ok_or(BankAccountError::InvalidArgument("Invalid deposit amount"))?;

    self.balance = self.balance_after_deposit(amount)?;

    debug!(email = %self.email, amount = %amount, balance = %self.balance, "deposit");
    Ok(())
  }

  /// Withdraws the amount, failing with [`BankAccountError::InsufficientFunds`] when the balance is lower.
  pub fn withdraw(&mut self, amount: impl Monetary) -> Result<()> {
    let amount =
      valid_amount(amount).ok_or(BankAccountError::InvalidArgument("Invalid withdrawal amount"))?;

    self.balance = self.balance_after_withdrawal(amount)?;

    debug!(email = %self.email, amount = %amount, balance = %self.balance, "withdrawal");
    Ok(())
  }

  /// Moves the amount from this account into the destination one.
  ///
  /// The destination can be given as `&mut BankAccount` or as an `Option`, where `None` is rejected
  /// with [`BankAccountError::InvalidArgument`]. Both new balances are computed before any of them is
  /// updated, so either both accounts change or none does.
  pub fn transfer<'a>(
    &mut self,
    amount: impl Monetary,
    destination: impl Into<Option<&'a mut BankAccount>>,
  ) -> Result<()> {
    let amount =
      valid_amount(amount).ok_or(BankAccountError::InvalidArgument("Invalid transfer amount"))?;
    let destination = destination
      .into()
      .ok_or(BankAccountError::InvalidArgument("Destination account cannot be absent"))?;

    let source_balance = self.balance_after_withdrawal(amount)?;
    let destination_balance = destination.balance_after_deposit(amount)?;

    self.balance = source_balance;
    destination.balance = destination_balance;

    debug!(
      email = %self.email,
      destination = %destination.email,
      amount = %amount,
      balance = %self.balance,
      "transfer"
    );
    Ok(())
  }

  fn balance_after_deposit(&self, amount: Decimal) -> Result<Decimal> {
    self
      .balance
      .checked_add(amount)
      .ok_or(BankAccountError::InvalidArgument("Deposit would overflow the balance"))
  }

  fn balance_after_withdrawal(&self, amount: Decimal) -> Result<Decimal> {
    if self.balance < amount {
      Err(BankAccountError::InsufficientFunds {
        balance: self.balance,
        requested: amount,
      })
    } else {
      Ok(self.balance - amount)
    }
  }
}
