use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bank::{BankAccount, BankAccountError};

/// A snapshot of an account state used to serialize and deserialize it.
/// The balance is written as a decimal string to keep it exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
  pub email: String,
  pub balance: Decimal,
}

impl From<&BankAccount> for AccountRecord {
  fn from(account: &BankAccount) -> Self {
    AccountRecord {
      email: account.email().to_string(),
      balance: account.balance(),
    }
  }
}

impl From<BankAccount> for AccountRecord {
  fn from(account: BankAccount) -> Self {
    AccountRecord::from(&account)
  }
}

impl TryFrom<AccountRecord> for BankAccount {
  type Error = BankAccountError;

  /// Conversion from a record into a domain account, validating both the email and the balance.
  fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
    BankAccount::new(record.email, record.balance)
  }
}
