use {
  crowdfund_primitives::{Address, Amount, CampaignRecord, NewCampaign},
  std::future::Future,
  thiserror::Error,
};

/// Failures reported by the contract boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Campaign {0} does not exist")]
  UnknownCampaign(u64),

  #[error("Transaction reverted: {0}")]
  Reverted(String),

  #[error("Transaction rejected by signer")]
  Rejected,

  #[error("Contract storage error: {0}")]
  Storage(String),

  #[error("Malformed contract data: {0}")]
  Malformed(String),
}

/// The read and write interface of the crowdfunding contract.
///
/// Implementations own all durable campaign state and enforce the
/// contract's business rules. Callers treat them as the only source
/// of truth and never cache what they return.
///
/// Writes are attributed to an account: the owner of a new campaign
/// is part of its arguments, a donation names the donor explicitly.
/// Signing is the implementation's concern.
pub trait CampaignContract {
  /// Returns every campaign in the order the contract stores them.
  /// The position of a record is its campaign id.
  fn campaigns(
    &self,
  ) -> impl Future<Output = Result<Vec<CampaignRecord>, Error>> + Send;

  /// Returns the parallel donor and donation sequences of one campaign.
  fn donators(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<(Vec<Address>, Vec<Amount>), Error>> + Send;

  /// Appends a new campaign and returns its id.
  fn create_campaign(
    &self,
    campaign: NewCampaign,
  ) -> impl Future<Output = Result<u64, Error>> + Send;

  /// Attaches `value` to campaign `id` on behalf of `from`.
  fn donate(
    &self,
    id: u64,
    from: Address,
    value: Amount,
  ) -> impl Future<Output = Result<(), Error>> + Send;
}

/// Contract rule shared by every implementation: a campaign must end
/// in the future relative to the block it is created in.
pub fn check_deadline(deadline: u64, now: u64) -> Result<(), Error> {
  match deadline > now {
    true => Ok(()),
    false => Err(Error::Reverted(
      "The deadline should be a date in the future.".into(),
    )),
  }
}

/// Applies a donation to a stored record, the way the contract does.
pub fn apply_donation(
  record: &mut CampaignRecord,
  from: Address,
  value: Amount,
) -> Result<(), Error> {
  let collected = record
    .amount_collected
    .checked_add(value)
    .ok_or_else(|| Error::Reverted("amount collected overflow".into()))?;

  record.donators.push(from);
  record.donations.push(value);
  record.amount_collected = collected;
  Ok(())
}
