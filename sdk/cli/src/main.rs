use {
  crate::{
    settings::{Command, SystemSettings},
    storage::OnDiskContract,
  },
  clap::Parser,
  crowdfund_client_sdk::{
    campaign_created,
    donation_succeeded,
    Action,
    CampaignClient,
    Error,
  },
  time::OffsetDateTime,
  tracing::{debug, subscriber::set_global_default},
  tracing_subscriber::{EnvFilter, FmtSubscriber},
};

mod render;
mod settings;
mod storage;

/// Runs one page of the front end and returns what it printed, or the
/// failure together with the action it interrupted.
async fn run(
  client: &CampaignClient<OnDiskContract>,
  command: &Command,
  now: OffsetDateTime,
) -> Result<String, (Error, Action)> {
  match command {
    Command::List => client
      .list_campaigns(now)
      .await
      .map(|campaigns| render::campaign_list(&campaigns, &render::HOME_EMPTY))
      .map_err(|e| (e, Action::List)),

    Command::Show { id } => client
      .campaign_details(*id, now)
      .await
      .map(|details| render::campaign_details(&details))
      .map_err(|e| (e, Action::Details)),

    Command::Mine => client
      .my_campaigns(now)
      .await
      .map(|campaigns| render::campaign_list(&campaigns, &render::MINE_EMPTY))
      .map_err(|e| (e, Action::List)),

    Command::Create { .. } => {
      let form = command.create_form(now).unwrap_or_default();
      let id = client
        .create_campaign(&form, now)
        .await
        .map_err(|e| (e, Action::Create))?;
      Ok(format!(
        "{}campaign id: {id}\n",
        render::notification(&campaign_created())
      ))
    }

    Command::Donate { id, amount } => client
      .donate(*id, amount, now)
      .await
      .map(|value| render::notification(&donation_succeeded(value)))
      .map_err(|e| (e, Action::Donate)),
  }
}

/// The error `main` exits with, carrying the notification the page
/// would have shown.
fn failure(error: &Error, action: Action) -> anyhow::Error {
  let notification = render::notification(&error.notification(action));
  anyhow::anyhow!("{}", notification.trim_end())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // configure logging, page output goes to stdout
  // and diagnostics to stderr.
  set_global_default(
    FmtSubscriber::builder()
      .with_env_filter(
        EnvFilter::try_from_default_env()
          .unwrap_or_else(|_| EnvFilter::new("warn")),
      )
      .with_writer(std::io::stderr)
      .finish(),
  )?;

  // gather CLI parameters
  let settings = SystemSettings::parse();
  debug!("startup settings: {settings:#?}");

  let mut client =
    CampaignClient::new(settings.contract()?, settings.client_config());
  if let Some(account) = settings.account() {
    client.connect(account);
  }

  match run(&client, settings.command(), OffsetDateTime::now_utc()).await {
    Ok(output) => {
      print!("{output}");
      Ok(())
    }
    Err((error, action)) => Err(failure(&error, action)),
  }
}
