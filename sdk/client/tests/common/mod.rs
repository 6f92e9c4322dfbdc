use {
  crowdfund_client_sdk::{
    CampaignClient,
    Chain,
    ClientConfig,
    CreateCampaignForm,
    InMemoryContract,
  },
  crowdfund_primitives::{Address, Amount, CampaignRecord, UNIT},
  time::{Duration, OffsetDateTime},
};

pub const CONTRACT: &str = "0x2fe7cE39fb54297D8C485651e74174EFaFAA0ebE";

pub fn alice() -> Address {
  "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA".parse().unwrap()
}

pub fn bob() -> Address {
  "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb".parse().unwrap()
}

pub fn eth(units: u128) -> Amount {
  Amount::from_wei(units * UNIT)
}

pub fn config() -> ClientConfig {
  ClientConfig::new(CONTRACT.parse().unwrap(), Chain::sepolia())
    .with_client_id("test-client")
}

/// A client over an empty in-memory contract with no wallet connected.
pub fn client() -> CampaignClient<InMemoryContract> {
  CampaignClient::new(InMemoryContract::default(), config())
}

/// A client over a contract preloaded with `records`.
pub fn client_with(
  records: impl IntoIterator<Item = CampaignRecord>,
) -> CampaignClient<InMemoryContract> {
  CampaignClient::new(InMemoryContract::with_campaigns(records), config())
}

pub fn record(
  owner: Address,
  target: Amount,
  collected: Amount,
  deadline: u64,
) -> CampaignRecord {
  CampaignRecord {
    owner,
    title: "Campaign".into(),
    description: "A campaign".into(),
    target,
    deadline,
    amount_collected: collected,
    image: String::new(),
    donators: vec![],
    donations: vec![],
  }
}

/// A create form with a deadline `days` after today.
pub fn form(title: &str, target: &str, days: i64) -> CreateCampaignForm {
  let deadline = (OffsetDateTime::now_utc() + Duration::days(days)).date();
  CreateCampaignForm {
    title: title.into(),
    description: format!("{title} description"),
    target: target.into(),
    deadline: deadline.to_string(),
    image: String::new(),
  }
}
