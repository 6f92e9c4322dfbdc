use {
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Debug, Display},
    ops::Deref,
    str::FromStr,
  },
  thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error("Account address must start with 0x")]
  MissingPrefix,

  #[error("Account address must be 20 bytes long, got {0} hex characters")]
  InvalidLength(usize),

  #[error("Account address is not valid hex: {0}")]
  InvalidHex(#[from] hex::FromHexError),
}

/// Represents an account identifier on the chain hosting the
/// crowdfunding contract.
///
/// The same type identifies campaign owners, donors and the
/// connected wallet. Addresses are parsed case-insensitively
/// from their `0x`-prefixed hex form and always displayed in
/// lowercase, so two addresses compare equal regardless of the
/// checksum casing they were entered with.
#[derive(
  Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Address([u8; 20]);

impl Address {
  pub const fn new(bytes: [u8; 20]) -> Self {
    Self(bytes)
  }

  /// Abbreviated form used in listings, e.g. `0x2fe7...0ebe`.
  pub fn short(&self) -> String {
    let full = self.to_string();
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
  }
}

impl AsRef<[u8]> for Address {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Deref for Address {
  type Target = [u8];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "0x{}", hex::encode(self.0))
  }
}

impl Debug for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "address(0x{})", hex::encode(self.0))
  }
}

impl From<Address> for String {
  fn from(addr: Address) -> Self {
    addr.to_string()
  }
}

impl From<[u8; 20]> for Address {
  fn from(bytes: [u8; 20]) -> Self {
    Self(bytes)
  }
}

impl FromStr for Address {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let digits = s
      .strip_prefix("0x")
      .or_else(|| s.strip_prefix("0X"))
      .ok_or(Error::MissingPrefix)?;

    if digits.len() != 40 {
      return Err(Error::InvalidLength(digits.len()));
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes)?;
    Ok(Self(bytes))
  }
}

impl TryFrom<&str> for Address {
  type Error = Error;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    FromStr::from_str(value)
  }
}
