use {crowdfund_primitives::Address, std::fmt::Display};

/// Network the crowdfunding contract is deployed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
  pub id: u64,
  pub name: String,
}

impl Chain {
  pub fn sepolia() -> Self {
    Self {
      id: 11_155_111,
      name: "sepolia".into(),
    }
  }

  pub fn from_id(id: u64) -> Self {
    match id {
      1 => Self {
        id,
        name: "mainnet".into(),
      },
      11_155_111 => Self::sepolia(),
      id => Self {
        id,
        name: format!("chain-{id}"),
      },
    }
  }
}

impl Display for Chain {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} ({})", self.name, self.id)
  }
}

/// Client wide configuration.
///
/// This is the only place that knows which contract and network the
/// client talks to. It is built once at startup and handed to the
/// contract boundary, nothing reads it from global state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Address of the deployed crowdfunding contract.
  pub contract_address: Address,

  /// Identifier of this application with the wallet provider.
  pub client_id: Option<String>,

  /// Network hosting the contract.
  pub chain: Chain,
}

impl ClientConfig {
  pub fn new(contract_address: Address, chain: Chain) -> Self {
    Self {
      contract_address,
      client_id: None,
      chain,
    }
  }

  pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
    self.client_id = Some(client_id.into());
    self
  }
}
