//! This module contains the serializable representation of a bank account
//!
//! The [`AccountRecord`] is intentionally duplicated from the domain model to decouple the serialization details
//! from the domain logic. Converting a record back into a [`BankAccount`](crate::BankAccount) runs the same validation
//! as creating a new account, so no record can produce an account that breaks its invariants.
//!

mod account;

pub use account::AccountRecord;
