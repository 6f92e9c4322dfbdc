use {
  crate::{
    config::ClientConfig,
    contract::{self, CampaignContract},
    form::{self, parse_donation, CreateCampaignForm},
    notify::Notification,
  },
  crowdfund_primitives::{
    Address,
    deadline_status,
    Amount,
    CampaignDetails,
    CampaignView,
    MalformedUpstreamData,
  },
  thiserror::Error,
  time::OffsetDateTime,
  tracing::{debug, error, info},
};

/// Reasons a page could not load its data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
  #[error("Contract read failed: {0}")]
  Contract(#[from] contract::Error),

  #[error(transparent)]
  Malformed(#[from] MalformedUpstreamData),

  #[error("Campaign {0} not found")]
  NotFound(u64),

  #[error("Wallet not connected")]
  WalletNotConnected,
}

/// Reasons a write was not carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
  #[error("Wallet not connected")]
  WalletNotConnected,

  #[error(transparent)]
  InvalidForm(#[from] form::Error),

  #[error("Campaign {0} has ended and no longer accepts donations")]
  CampaignExpired(u64),

  #[error(transparent)]
  Contract(#[from] contract::Error),
}

/// The two failure kinds visible to pages.
///
/// Neither is retried. A read failure leaves the page empty or
/// annotated with the error, a transaction failure is reported to
/// the user while the form input stays as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Upstream read failure: {0}")]
  UpstreamReadFailure(#[from] ReadError),

  #[error("Transaction failure: {0}")]
  TransactionFailure(#[from] TransactionError),
}

/// The page action a notification reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  List,
  Details,
  Create,
  Donate,
}

impl Error {
  /// User-facing message for this failure in the context of `action`.
  pub fn notification(&self, action: Action) -> Notification {
    match self {
      Error::UpstreamReadFailure(ReadError::WalletNotConnected)
      | Error::TransactionFailure(TransactionError::WalletNotConnected) => {
        Notification::destructive("Wallet not connected", match action {
          Action::List | Action::Details => {
            "Please connect your wallet to view and manage your campaigns."
          }
          Action::Create => "Please connect your wallet to create a campaign.",
          Action::Donate => "Please connect your wallet to donate.",
        })
      }
      Error::UpstreamReadFailure(ReadError::NotFound(_)) => {
        Notification::destructive(
          "Campaign not found",
          "The campaign you're looking for doesn't exist.",
        )
      }
      Error::UpstreamReadFailure(_) => Notification::destructive(
        "Error",
        match action {
          Action::List => "Failed to load campaigns.",
          _ => "Failed to load campaign details.",
        },
      ),
      Error::TransactionFailure(TransactionError::InvalidForm(
        form::Error::MissingFields,
      )) => Notification::destructive(
        "Missing fields",
        "Please fill in all required fields.",
      ),
      Error::TransactionFailure(TransactionError::InvalidForm(
        form::Error::InvalidAmount(_) | form::Error::NonPositiveAmount,
      )) => Notification::destructive("Invalid amount", match action {
        Action::Donate => "Please enter a valid donation amount.",
        _ => "Please enter a valid target amount.",
      }),
      Error::TransactionFailure(TransactionError::InvalidForm(e)) => {
        Notification::destructive("Invalid deadline", e.to_string())
      }
      Error::TransactionFailure(TransactionError::CampaignExpired(_)) => {
        Notification::destructive(
          "Campaign ended",
          "This campaign has ended and no longer accepts donations.",
        )
      }
      Error::TransactionFailure(TransactionError::Contract(_)) => {
        match action {
          Action::Donate => Notification::destructive(
            "Donation failed",
            "Failed to process your donation. Please try again.",
          ),
          _ => Notification::destructive(
            "Transaction failed",
            "Failed to create campaign. Please try again.",
          ),
        }
      }
    }
  }
}

/// Page-level operations of the crowdfunding front end.
///
/// Every page reads the full current contract state and derives its
/// display values through [`CampaignView::derive`]. Writes go through
/// the contract on behalf of the connected account, if any.
pub struct CampaignClient<C: CampaignContract> {
  contract: C,
  config: ClientConfig,
  account: Option<Address>,
}

impl<C: CampaignContract> CampaignClient<C> {
  pub fn new(contract: C, config: ClientConfig) -> Self {
    info!(
      "crowdfund client for contract {} on {}",
      config.contract_address, config.chain
    );
    Self {
      contract,
      config,
      account: None,
    }
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  pub fn contract(&self) -> &C {
    &self.contract
  }

  /// The wallet account writes are attributed to.
  pub fn account(&self) -> Option<&Address> {
    self.account.as_ref()
  }

  pub fn connect(&mut self, account: Address) {
    info!("wallet connected: {account}");
    self.account = Some(account);
  }

  pub fn disconnect(&mut self) {
    if let Some(account) = self.account.take() {
      info!("wallet disconnected: {account}");
    }
  }

  /// All campaigns, in contract order.
  pub async fn list_campaigns(
    &self,
    now: OffsetDateTime,
  ) -> Result<Vec<CampaignView>, Error> {
    let campaigns = self.contract.campaigns().await.map_err(|e| {
      error!("Error fetching campaigns: {e}");
      ReadError::from(e)
    })?;

    debug!("fetched {} campaigns", campaigns.len());
    Ok(
      campaigns
        .iter()
        .enumerate()
        .map(|(id, record)| CampaignView::derive(id as u64, record, now))
        .collect(),
    )
  }

  /// One campaign with all of its donations.
  pub async fn campaign_details(
    &self,
    id: u64,
    now: OffsetDateTime,
  ) -> Result<CampaignDetails, Error> {
    let campaigns = self.contract.campaigns().await.map_err(|e| {
      error!("Error fetching campaign: {e}");
      ReadError::from(e)
    })?;

    let record = usize::try_from(id)
      .ok()
      .and_then(|index| campaigns.get(index))
      .ok_or(ReadError::NotFound(id))?;

    let (donators, donations) =
      self.contract.donators(id).await.map_err(|e| {
        error!("Error fetching donators: {e}");
        ReadError::from(e)
      })?;

    CampaignDetails::derive(id, record, &donators, &donations, now).map_err(
      |e| {
        error!("Error fetching donators: {e}");
        ReadError::from(e).into()
      },
    )
  }

  /// Campaigns owned by the connected account.
  pub async fn my_campaigns(
    &self,
    now: OffsetDateTime,
  ) -> Result<Vec<CampaignView>, Error> {
    let account = self.account.ok_or(ReadError::WalletNotConnected)?;
    Ok(
      self
        .list_campaigns(now)
        .await?
        .into_iter()
        .filter(|campaign| campaign.is_owned_by(&account))
        .collect(),
    )
  }

  /// Validates the form and submits a create-campaign transaction
  /// owned by the connected account. Returns the new campaign id.
  pub async fn create_campaign(
    &self,
    form: &CreateCampaignForm,
    now: OffsetDateTime,
  ) -> Result<u64, Error> {
    let owner = self.account.ok_or(TransactionError::WalletNotConnected)?;
    let campaign = form
      .validate(owner, now)
      .map_err(TransactionError::from)?;

    info!("creating campaign {:?} owned by {owner}", campaign.title);
    let id = self
      .contract
      .create_campaign(campaign)
      .await
      .map_err(|e| {
        error!("Transaction failed: {e}");
        TransactionError::from(e)
      })?;

    info!("campaign {id} created");
    Ok(id)
  }

  /// Validates the typed amount and donates it to campaign `id` from
  /// the connected account. Campaigns past their deadline take no
  /// more donations.
  pub async fn donate(
    &self,
    id: u64,
    amount: &str,
    now: OffsetDateTime,
  ) -> Result<Amount, Error> {
    let from = self.account.ok_or(TransactionError::WalletNotConnected)?;
    let value = parse_donation(amount).map_err(TransactionError::from)?;

    let campaigns = self.contract.campaigns().await.map_err(|e| {
      error!("Error fetching campaign: {e}");
      TransactionError::from(e)
    })?;

    let record = usize::try_from(id)
      .ok()
      .and_then(|index| campaigns.get(index))
      .ok_or(TransactionError::from(contract::Error::UnknownCampaign(id)))?;

    if deadline_status(record.deadline, now).is_expired() {
      error!("campaign {id} has ended, donation refused");
      return Err(TransactionError::CampaignExpired(id).into());
    }

    info!("donating {value} ETH to campaign {id} from {from}");
    self
      .contract
      .donate(id, from, value)
      .await
      .map_err(|e| {
        error!("Transaction failed: {e}");
        TransactionError::from(e)
      })?;

    info!("donation of {value} ETH to campaign {id} confirmed");
    Ok(value)
  }
}

/// Notification shown after a campaign was created.
pub fn campaign_created() -> Notification {
  Notification::success(
    "Campaign created!",
    "Your campaign has been successfully created on the blockchain.",
  )
}

/// Notification shown after a donation went through.
pub fn donation_succeeded(value: Amount) -> Notification {
  Notification::success(
    "Donation successful!",
    format!("Thank you for donating {value} ETH to this campaign."),
  )
}
