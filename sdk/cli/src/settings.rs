use {
  crate::storage::OnDiskContract,
  clap::{Parser, Subcommand},
  crowdfund_client_sdk::{Chain, ClientConfig, CreateCampaignForm},
  crowdfund_primitives::Address,
  std::path::PathBuf,
  time::OffsetDateTime,
};

/// Crowdfund Client
///
/// Browse campaigns, create new ones and donate to them. Campaign
/// state lives in a local development contract stored under the
/// data directory.
#[derive(Debug, Parser)]
pub struct SystemSettings {
  /// Directory of the local contract database
  #[clap(long, short,
    default_value = ".crowdfund",
    value_name = "PATH")]
  data_dir: PathBuf,

  /// Address of the crowdfunding contract
  #[clap(long, short,
    default_value = "0x2fe7cE39fb54297D8C485651e74174EFaFAA0ebE",
    value_name = "ADDRESS")]
  contract: Address,

  /// Identifier of this application with the wallet provider
  #[clap(long, value_name = "ID")]
  client_id: Option<String>,

  /// Chain id of the network hosting the contract
  #[clap(long,
    default_value = "11155111",
    value_name = "ID")]
  chain_id: u64,

  /// Connected wallet account, required by create, donate and mine
  #[clap(long, short, value_name = "ADDRESS")]
  account: Option<Address>,

  #[clap(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// List all campaigns
  List,

  /// Show one campaign and its supporters
  Show {
    /// Campaign id
    id: u64,
  },

  /// List campaigns owned by the connected account
  Mine,

  /// Create a new campaign owned by the connected account
  Create {
    /// Campaign title
    #[clap(long, default_value = "")]
    title: String,

    /// What the funds will be used for
    #[clap(long, default_value = "")]
    description: String,

    /// Funding goal in ETH
    #[clap(long, default_value = "", value_name = "ETH")]
    target: String,

    /// Last day of the campaign
    #[clap(long, value_name = "YYYY-MM-DD", conflicts_with = "duration")]
    deadline: Option<String>,

    /// Campaign length counted from now, e.g. "30days"
    #[clap(long, value_name = "DURATION")]
    duration: Option<humantime::Duration>,

    /// Image URL
    #[clap(long, default_value = "", value_name = "URL")]
    image: String,
  },

  /// Donate to a campaign from the connected account
  Donate {
    /// Campaign id
    id: u64,

    /// Amount in ETH
    amount: String,
  },
}

impl SystemSettings {
  pub fn command(&self) -> &Command {
    &self.command
  }

  pub fn account(&self) -> Option<Address> {
    self.account
  }

  /// The one place the contract address, client id and chain of this
  /// process are decided.
  pub fn client_config(&self) -> ClientConfig {
    let config =
      ClientConfig::new(self.contract, Chain::from_id(self.chain_id));
    match &self.client_id {
      Some(id) => config.with_client_id(id.clone()),
      None => config,
    }
  }

  pub fn contract(&self) -> Result<OnDiskContract, sled::Error> {
    OnDiskContract::open(&self.data_dir, &self.contract)
  }
}

impl Command {
  /// Builds the creation form from the command arguments. A duration
  /// is turned into the calendar date it ends on.
  pub fn create_form(&self, now: OffsetDateTime) -> Option<CreateCampaignForm> {
    match self {
      Command::Create {
        title,
        description,
        target,
        deadline,
        duration,
        image,
      } => Some(CreateCampaignForm {
        title: title.clone(),
        description: description.clone(),
        target: target.clone(),
        deadline: match (deadline, duration) {
          (Some(date), _) => date.clone(),
          (None, Some(duration)) => {
            let length: std::time::Duration = (*duration).into();
            (now + length).date().to_string()
          }
          (None, None) => String::new(),
        },
        image: image.clone(),
      }),
      _ => None,
    }
  }
}
