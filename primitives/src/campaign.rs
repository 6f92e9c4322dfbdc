use {
  crate::{Address, Amount},
  serde::{Deserialize, Serialize},
};

/// A campaign as stored by the crowdfunding contract.
///
/// Records are owned and mutated exclusively by the contract. Clients
/// re-read the full record on every page load and never cache it.
///
/// `donators` and `donations` are parallel sequences with one entry
/// per donation event, in the order the contract recorded them. The
/// same donor may appear many times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRecord {
  pub owner: Address,
  pub title: String,
  pub description: String,
  pub target: Amount,
  pub deadline: u64,
  pub amount_collected: Amount,
  pub image: String,
  pub donators: Vec<Address>,
  pub donations: Vec<Amount>,
}

impl CampaignRecord {
  /// Builds the record a contract appends in response to a create
  /// call: nothing collected and no donations yet.
  pub fn new(campaign: NewCampaign) -> Self {
    Self {
      owner: campaign.owner,
      title: campaign.title,
      description: campaign.description,
      target: campaign.target,
      deadline: campaign.deadline,
      amount_collected: Amount::ZERO,
      image: campaign.image,
      donators: vec![],
      donations: vec![],
    }
  }
}

/// Arguments of the contract's create-campaign call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCampaign {
  pub owner: Address,
  pub title: String,
  pub description: String,
  pub target: Amount,
  pub deadline: u64,
  pub image: String,
}

/// One donation event of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationEntry {
  pub donator: Address,
  pub amount: Amount,
}
