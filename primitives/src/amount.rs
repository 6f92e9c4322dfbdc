use {
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Debug, Display},
    str::FromStr,
  },
  thiserror::Error,
};

/// Number of fractional digits of the display unit (ETH).
pub const DECIMALS: usize = 18;

/// Number of smallest units (wei) in one display unit.
pub const UNIT: u128 = 1_000_000_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Invalid amount: {0:?}")]
  InvalidAmount(String),
}

/// A currency value as an integer count of the smallest
/// indivisible unit (wei).
///
/// Amounts are never stored or computed in floating point. The
/// only place they leave the integer domain is the funding
/// progress ratio, which is a display value.
///
/// On the wire amounts are encoded as decimal integer strings,
/// so they survive formats without native 128-bit integers.
#[derive(
  Copy,
  Clone,
  Default,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct Amount(u128);

impl Amount {
  pub const ZERO: Amount = Amount(0);

  pub const fn from_wei(wei: u128) -> Self {
    Self(wei)
  }

  pub const fn wei(&self) -> u128 {
    self.0
  }

  pub const fn is_zero(&self) -> bool {
    self.0 == 0
  }

  pub fn checked_add(self, other: Amount) -> Option<Amount> {
    self.0.checked_add(other.0).map(Amount)
  }
}

/// Formats a fixed-point amount in the display unit without losing
/// precision. The fractional part keeps at least one digit, so whole
/// values render as `1.0` and zero renders as `0.0`.
pub fn to_display_amount(raw: Amount) -> String {
  let whole = raw.0 / UNIT;
  let fraction = raw.0 % UNIT;
  let fraction = format!("{fraction:0>width$}", width = DECIMALS);
  let fraction = fraction.trim_end_matches('0');
  match fraction.is_empty() {
    true => format!("{whole}.0"),
    false => format!("{whole}.{fraction}"),
  }
}

/// Parses a user-entered decimal amount in the display unit into its
/// fixed-point form.
///
/// Accepts `1`, `1.`, `.5` and `1.5` shapes. Signs, exponents,
/// whitespace, more than 18 fractional digits or values that do
/// not fit in 128 bits are rejected.
pub fn to_raw_amount(text: &str) -> Result<Amount, Error> {
  let invalid = || Error::InvalidAmount(text.to_owned());

  let (whole, fraction) = match text.split_once('.') {
    Some((whole, fraction)) => (whole, fraction),
    None => (text, ""),
  };

  let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
  if whole.is_empty() && fraction.is_empty() {
    return Err(invalid());
  }
  if !all_digits(whole) || !all_digits(fraction) || fraction.len() > DECIMALS {
    return Err(invalid());
  }

  let whole: u128 = match whole.is_empty() {
    true => 0,
    false => whole.parse().map_err(|_| invalid())?,
  };
  let fraction: u128 = match fraction.is_empty() {
    true => 0,
    false => format!("{fraction:0<width$}", width = DECIMALS)
      .parse()
      .map_err(|_| invalid())?,
  };

  whole
    .checked_mul(UNIT)
    .and_then(|w| w.checked_add(fraction))
    .map(Amount)
    .ok_or_else(invalid)
}

impl Display for Amount {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", to_display_amount(*self))
  }
}

impl Debug for Amount {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "amount({} wei)", self.0)
  }
}

impl FromStr for Amount {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    to_raw_amount(s)
  }
}

impl From<u128> for Amount {
  fn from(wei: u128) -> Self {
    Self(wei)
  }
}

impl From<Amount> for String {
  fn from(amount: Amount) -> Self {
    amount.0.to_string()
  }
}

impl TryFrom<String> for Amount {
  type Error = Error;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value
      .parse::<u128>()
      .map(Amount)
      .map_err(|_| Error::InvalidAmount(value))
  }
}

#[cfg(test)]
mod tests {
  use super::{to_display_amount, to_raw_amount, Amount, Error, UNIT};

  #[test]
  fn display_keeps_full_precision() {
    assert_eq!(to_display_amount(Amount::ZERO), "0.0");
    assert_eq!(to_display_amount(Amount::from_wei(UNIT)), "1.0");
    assert_eq!(to_display_amount(Amount::from_wei(UNIT * 3 / 2)), "1.5");
    assert_eq!(
      to_display_amount(Amount::from_wei(1)),
      "0.000000000000000001"
    );
    assert_eq!(
      to_display_amount(Amount::from_wei(12 * UNIT + 340_000_000_000_000_001)),
      "12.340000000000000001"
    );
  }

  #[test]
  fn parse_accepted_shapes() -> anyhow::Result<()> {
    assert_eq!(to_raw_amount("1")?, Amount::from_wei(UNIT));
    assert_eq!(to_raw_amount("1.")?, Amount::from_wei(UNIT));
    assert_eq!(to_raw_amount(".5")?, Amount::from_wei(UNIT / 2));
    assert_eq!(to_raw_amount("0.0")?, Amount::ZERO);
    assert_eq!(
      to_raw_amount("0.000000000000000001")?,
      Amount::from_wei(1)
    );
    assert_eq!(to_raw_amount("007.25")?, Amount::from_wei(UNIT * 29 / 4));
    Ok(())
  }

  #[test]
  fn parse_rejects_invalid_input() {
    for text in [
      "-1",
      "abc",
      "",
      ".",
      "+1",
      "1.2.3",
      " 1",
      "1e18",
      "1,5",
      "0.0000000000000000001",
      "340282366920938463464", // overflows u128 once scaled
    ] {
      assert_eq!(
        to_raw_amount(text),
        Err(Error::InvalidAmount(text.to_owned())),
        "{text:?} should be rejected"
      );
    }
  }

  #[test]
  fn display_then_parse_is_identity() -> anyhow::Result<()> {
    for wei in [
      0,
      1,
      999,
      UNIT - 1,
      UNIT,
      UNIT + 1,
      2 * UNIT,
      123_456_789_012_345_678_901_234,
      u128::MAX,
    ] {
      let amount = Amount::from_wei(wei);
      assert_eq!(to_raw_amount(&to_display_amount(amount))?, amount);
    }
    Ok(())
  }

  #[test]
  fn serializes_as_decimal_string() -> anyhow::Result<()> {
    let amount = Amount::from_wei(u128::MAX);
    let bytes = rmp_serde::to_vec(&amount)?;
    let decoded: Amount = rmp_serde::from_slice(&bytes)?;
    assert_eq!(decoded, amount);
    assert_eq!(String::from(amount), u128::MAX.to_string());
    Ok(())
  }
}
