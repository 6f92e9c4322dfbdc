//! Display-ready values derived from raw campaign records.
//!
//! Every page that shows a campaign goes through [`CampaignView::derive`],
//! so the list, detail and "my campaigns" pages can never disagree on
//! how a deadline or a progress bar is computed.

use {
  crate::{Address, Amount, CampaignRecord, DonationEntry},
  serde::{Deserialize, Serialize},
  std::fmt::Display,
  thiserror::Error,
  time::OffsetDateTime,
};

const MILLIS_PER_DAY: i128 = 86_400_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error(
    "Malformed upstream data: {donators} donators but {donations} donations"
  )]
  MalformedUpstreamData { donators: usize, donations: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeadlineStatus {
  Active { days_remaining: u64 },
  Expired,
}

impl DeadlineStatus {
  pub fn is_expired(&self) -> bool {
    matches!(self, DeadlineStatus::Expired)
  }
}

impl Display for DeadlineStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DeadlineStatus::Active { days_remaining } => {
        write!(f, "{days_remaining} days left")
      }
      DeadlineStatus::Expired => write!(f, "Expired"),
    }
  }
}

/// Classifies a campaign deadline (Unix seconds) relative to `now`.
///
/// The remaining time is rounded up to whole days, so a deadline
/// one millisecond ahead is still one day left. A deadline that
/// rounds to zero days or less is expired.
pub fn deadline_status(deadline: u64, now: OffsetDateTime) -> DeadlineStatus {
  let now_ms = now.unix_timestamp_nanos() / 1_000_000;
  let diff = i128::from(deadline) * 1000 - now_ms;

  // ceiling division that stays exact for negative differences
  let days = diff.div_euclid(MILLIS_PER_DAY)
    + i128::from(diff.rem_euclid(MILLIS_PER_DAY) > 0);

  match days > 0 {
    true => DeadlineStatus::Active {
      days_remaining: u64::try_from(days).unwrap_or(u64::MAX),
    },
    false => DeadlineStatus::Expired,
  }
}

/// Percentage of the target collected so far, clamped to `[0, 100]`.
///
/// A zero target yields 0 and over-funded campaigns report 100.
pub fn funding_progress(amount_collected: Amount, target: Amount) -> f64 {
  if target.is_zero() {
    return 0.0;
  }
  let ratio = amount_collected.wei() as f64 / target.wei() as f64;
  (ratio * 100.0).min(100.0)
}

/// Pairs each donor with the amount of the corresponding donation,
/// preserving the order in which the contract emitted them.
pub fn zip_donations(
  donators: &[Address],
  donations: &[Amount],
) -> Result<Vec<DonationEntry>, Error> {
  if donators.len() != donations.len() {
    return Err(Error::MalformedUpstreamData {
      donators: donators.len(),
      donations: donations.len(),
    });
  }

  Ok(
    donators
      .iter()
      .zip(donations.iter())
      .map(|(donator, amount)| DonationEntry {
        donator: *donator,
        amount: *amount,
      })
      .collect(),
  )
}

/// A campaign as shown on list pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignView {
  /// Index of the campaign in the contract's campaign sequence.
  pub id: u64,
  pub owner: Address,
  pub title: String,
  pub description: String,
  pub image: String,
  pub target: Amount,
  pub amount_collected: Amount,
  pub deadline: DeadlineStatus,
  pub progress: f64,
}

impl CampaignView {
  pub fn derive(id: u64, record: &CampaignRecord, now: OffsetDateTime) -> Self {
    Self {
      id,
      owner: record.owner,
      title: record.title.clone(),
      description: record.description.clone(),
      image: record.image.clone(),
      target: record.target,
      amount_collected: record.amount_collected,
      deadline: deadline_status(record.deadline, now),
      progress: funding_progress(record.amount_collected, record.target),
    }
  }

  pub fn is_owned_by(&self, account: &Address) -> bool {
    self.owner == *account
  }
}

/// A single campaign with its full donation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDetails {
  pub campaign: CampaignView,
  pub donations: Vec<DonationEntry>,
}

impl CampaignDetails {
  pub fn derive(
    id: u64,
    record: &CampaignRecord,
    donators: &[Address],
    donations: &[Amount],
    now: OffsetDateTime,
  ) -> Result<Self, Error> {
    Ok(Self {
      campaign: CampaignView::derive(id, record, now),
      donations: zip_donations(donators, donations)?,
    })
  }
}
