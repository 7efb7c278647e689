use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

/// Maximum number of decimals after the point accepted for an amount
const MAX_AMOUNT_SCALE: u32 = 2;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_EMAIL_LOCAL_PART_LENGTH: usize = 64;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(concat!(
    r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
    r"@",
    r"(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
  ))
  .expect("Invalid email regex pattern")
});

/// A value that can be used as a monetary magnitude.
///
/// Every input goes through an exact [`Decimal`] before being validated or added to a balance.
/// Floats are converted from their shortest decimal text, so `50.55_f64` becomes exactly `50.55`
/// instead of the nearest binary approximation.
pub trait Monetary: Copy {
  /// Returns the exact decimal value, or `None` when there is none (not finite, or out of the range of [`Decimal`]).
  fn to_decimal(self) -> Option<Decimal>;
}

impl Monetary for Decimal {
  fn to_decimal(self) -> Option<Decimal> {
    Some(self)
  }
}

impl Monetary for f64 {
  fn to_decimal(self) -> Option<Decimal> {
    if self.is_finite() {
      Decimal::from_str_exact(&self.to_string()).ok()
    } else {
      None
    }
  }
}

impl Monetary for f32 {
  fn to_decimal(self) -> Option<Decimal> {
    if self.is_finite() {
      Decimal::from_str_exact(&self.to_string()).ok()
    } else {
      None
    }
  }
}

macro_rules! impl_monetary_for_integer {
  ($($ty:ty),*) => {
    $(
      impl Monetary for $ty {
        fn to_decimal(self) -> Option<Decimal> {
          Some(Decimal::from(self))
        }
      }
    )*
  };
}

impl_monetary_for_integer!(i32, i64, u32, u64);

impl Monetary for &str {
  fn to_decimal(self) -> Option<Decimal> {
    Decimal::from_str_exact(self.trim()).ok()
  }
}

/// Returns whether the email address is syntactically valid.
///
/// No network or DNS lookup is involved: the local part is made of dot separated atoms, followed by a single `@`
/// and a domain with at least one dot and a top level label of two or more letters.
pub fn is_email_valid(email: &str) -> bool {
  if email.trim().is_empty() || email.len() > MAX_EMAIL_LENGTH {
    return false;
  }

  match email.split_once('@') {
    Some((local_part, _)) if local_part.len() <= MAX_EMAIL_LOCAL_PART_LENGTH => {
      EMAIL_PATTERN.is_match(email)
    }
    _ => false,
  }
}

/// Returns whether the amount is positive, finite, and has at most 2 decimals once trailing zeros are removed.
pub fn is_amount_valid(amount: impl Monetary) -> bool {
  valid_amount(amount).is_some()
}

/// Converts the amount into a [`Decimal`] only when it is a valid amount.
pub(super) fn valid_amount(amount: impl Monetary) -> Option<Decimal> {
  amount
    .to_decimal()
    .filter(|value| *value > Decimal::ZERO && value.normalize().scale() <= MAX_AMOUNT_SCALE)
}

#[cfg(test)]
mod tests {

  use proptest::prelude::*;
  use rust_decimal_macros::dec;

  use super::*;

  #[test]
  fn email_valid_cases() {
    let cases = vec![
      "a@b.com",
      "abc-efg@mail.com",
      "abc.def@mail-archive.com",
      "a.b.c@sub.domain.org",
      "o'brien+tag@example.co",
      "x@a1.b2.io",
    ];

    for email in cases {
      assert!(is_email_valid(email), "{} should be valid", email);
    }
  }

  #[test]
  fn email_invalid_cases() {
    let cases = vec![
      "",
      "   ",
      "test@em@ail.com",
      "test.email@com",
      ".abc@mail.com",
      "abc.@mail.com",
      "abc..def@mail.com",
      "abc@-mail.com",
      "abc@mail-.com",
      "abc.def@mail.c",
      "abc@mail.c0m",
      "abc@mail..com",
      "@mail.com",
      "abc@",
      "abc mail@mail.com",
      "abc@mail.com ",
      "abc@mail.com\n",
    ];

    for email in cases {
      assert!(!is_email_valid(email), "{:?} should be invalid", email);
    }
  }

  #[test]
  fn email_length_limits() {
    let local_part = "a".repeat(64);
    assert!(is_email_valid(&format!("{}@mail.com", local_part)));

    let local_part = "a".repeat(65);
    assert!(!is_email_valid(&format!("{}@mail.com", local_part)));

    let label = "b".repeat(63);
    let domain = format!("{0}.{0}.{0}.com", label);
    let email = format!("a@{}", domain);
    assert_eq!(email.len(), 197);
    assert!(is_email_valid(&email));

    let email = format!("a@{0}.{0}.{0}.{1}.com", label, "c".repeat(56));
    assert_eq!(email.len(), 254);
    assert!(is_email_valid(&email));

    let email = format!("a@{0}.{0}.{0}.{1}.com", label, "c".repeat(57));
    assert_eq!(email.len(), 255);
    assert!(!is_email_valid(&email));

    let label = "b".repeat(64);
    assert!(!is_email_valid(&format!("a@{}.com", label)));
  }

  #[test]
  fn amount_valid_cases() {
    assert!(is_amount_valid(100));
    assert!(is_amount_valid(50.55));
    assert!(is_amount_valid(0.01));
    assert!(is_amount_valid(0.1_f32));
    assert!(is_amount_valid(50.50));
    assert!(is_amount_valid(1e20));
    assert!(is_amount_valid(dec!(50.550000)));
    assert!(is_amount_valid(u64::MAX));
    assert!(is_amount_valid("12.30"));
  }

  #[test]
  fn amount_invalid_cases() {
    assert!(!is_amount_valid(50.505));
    assert!(!is_amount_valid(-10.11));
    assert!(!is_amount_valid(0));
    assert!(!is_amount_valid(0.0));
    assert!(!is_amount_valid(-0.0));
    assert!(!is_amount_valid(-5_i64));
    assert!(!is_amount_valid(f64::from_bits(1)));
    assert!(!is_amount_valid(f64::INFINITY));
    assert!(!is_amount_valid(f64::NEG_INFINITY));
    assert!(!is_amount_valid(f64::NAN));
    assert!(!is_amount_valid(f32::NAN));
    assert!(!is_amount_valid(dec!(0.001)));
    assert!(!is_amount_valid("abc"));
  }

  #[test]
  fn amount_out_of_decimal_range() {
    assert!(!is_amount_valid(f64::MAX));
    assert!(!is_amount_valid(1e30));
  }

  #[test]
  fn float_to_decimal_is_exact() {
    assert_eq!(50.55_f64.to_decimal(), Some(dec!(50.55)));
    assert_eq!(0.1_f64.to_decimal(), Some(dec!(0.1)));
    assert_eq!(200.111_f64.to_decimal(), Some(dec!(200.111)));
    assert_eq!(f64::NAN.to_decimal(), None);
  }

  proptest! {
    #[test]
    fn amount_valid_iff_two_decimals(mantissa in -1_000_000_000i64..1_000_000_000i64, scale in 0u32..8) {
      let amount = Decimal::new(mantissa, scale);
      let expected = amount > Decimal::ZERO && amount.round_dp(2) == amount;
      prop_assert_eq!(is_amount_valid(amount), expected);
    }

    #[test]
    fn cents_as_float_are_valid(cents in 1i64..10_000_000_000i64) {
      let amount = cents as f64 / 100.0;
      prop_assert!(is_amount_valid(amount));
    }
  }
}
