use {
  crate::contract::{apply_donation, check_deadline, CampaignContract, Error},
  crowdfund_primitives::{Address, Amount, CampaignRecord, NewCampaign},
  std::sync::atomic::{AtomicBool, Ordering},
  time::OffsetDateTime,
  tokio::sync::RwLock,
};

/// Ephemeral contract that keeps all campaigns in memory.
///
/// Useful for tests and for embedding the client in environments with
/// no chain access. It enforces the same rules as a deployed contract.
#[derive(Debug, Default)]
pub struct InMemoryContract {
  campaigns: RwLock<Vec<CampaignRecord>>,
  declines: AtomicBool,
}

impl InMemoryContract {
  pub fn with_campaigns(
    campaigns: impl IntoIterator<Item = CampaignRecord>,
  ) -> Self {
    Self {
      campaigns: RwLock::new(campaigns.into_iter().collect()),
      declines: AtomicBool::new(false),
    }
  }

  /// While set, every write is declined as if the user dismissed
  /// the signing prompt of their wallet.
  pub fn set_signer_declines(&self, declines: bool) {
    self.declines.store(declines, Ordering::SeqCst);
  }

  fn signer_check(&self) -> Result<(), Error> {
    match self.declines.load(Ordering::SeqCst) {
      true => Err(Error::Rejected),
      false => Ok(()),
    }
  }
}

impl CampaignContract for InMemoryContract {
  async fn campaigns(&self) -> Result<Vec<CampaignRecord>, Error> {
    Ok(self.campaigns.read().await.clone())
  }

  async fn donators(
    &self,
    id: u64,
  ) -> Result<(Vec<Address>, Vec<Amount>), Error> {
    let campaigns = self.campaigns.read().await;
    let record = usize::try_from(id)
      .ok()
      .and_then(|index| campaigns.get(index))
      .ok_or(Error::UnknownCampaign(id))?;
    Ok((record.donators.clone(), record.donations.clone()))
  }

  async fn create_campaign(&self, campaign: NewCampaign) -> Result<u64, Error> {
    self.signer_check()?;
    check_deadline(
      campaign.deadline,
      OffsetDateTime::now_utc().unix_timestamp() as u64,
    )?;

    let mut campaigns = self.campaigns.write().await;
    campaigns.push(CampaignRecord::new(campaign));
    Ok(campaigns.len() as u64 - 1)
  }

  async fn donate(
    &self,
    id: u64,
    from: Address,
    value: Amount,
  ) -> Result<(), Error> {
    self.signer_check()?;
    let mut campaigns = self.campaigns.write().await;
    let record = usize::try_from(id)
      .ok()
      .and_then(|index| campaigns.get_mut(index))
      .ok_or(Error::UnknownCampaign(id))?;
    apply_donation(record, from, value)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::InMemoryContract,
    crate::contract::{CampaignContract, Error},
    crowdfund_primitives::{Address, Amount, NewCampaign},
    time::OffsetDateTime,
  };

  fn campaign(deadline: u64) -> NewCampaign {
    NewCampaign {
      owner: Address::new([1; 20]),
      title: "title".into(),
      description: "description".into(),
      target: Amount::from_wei(100),
      deadline,
      image: String::new(),
    }
  }

  fn tomorrow() -> u64 {
    OffsetDateTime::now_utc().unix_timestamp() as u64 + 86_400
  }

  #[tokio::test]
  async fn create_and_donate() -> anyhow::Result<()> {
    let contract = InMemoryContract::default();
    assert_eq!(contract.create_campaign(campaign(tomorrow())).await?, 0);
    assert_eq!(contract.create_campaign(campaign(tomorrow())).await?, 1);

    let donor = Address::new([9; 20]);
    contract.donate(1, donor, Amount::from_wei(40)).await?;
    contract.donate(1, donor, Amount::from_wei(2)).await?;

    let campaigns = contract.campaigns().await?;
    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[0].amount_collected, Amount::ZERO);
    assert_eq!(campaigns[1].amount_collected, Amount::from_wei(42));

    let (donators, donations) = contract.donators(1).await?;
    assert_eq!(donators, vec![donor, donor]);
    assert_eq!(donations, vec![Amount::from_wei(40), Amount::from_wei(2)]);
    Ok(())
  }

  #[tokio::test]
  async fn past_deadline_reverts() {
    let contract = InMemoryContract::default();
    let result = contract.create_campaign(campaign(1)).await;
    assert!(matches!(result, Err(Error::Reverted(_))));
    assert!(contract.campaigns().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn unknown_campaign() {
    let contract = InMemoryContract::default();
    assert_eq!(
      contract.donate(3, Address::new([0; 20]), Amount::from_wei(1)).await,
      Err(Error::UnknownCampaign(3))
    );
    assert_eq!(contract.donators(3).await, Err(Error::UnknownCampaign(3)));
  }

  #[tokio::test]
  async fn declined_signature() -> anyhow::Result<()> {
    let contract = InMemoryContract::default();
    contract.set_signer_declines(true);
    assert_eq!(
      contract.create_campaign(campaign(tomorrow())).await,
      Err(Error::Rejected)
    );

    contract.set_signer_declines(false);
    assert_eq!(contract.create_campaign(campaign(tomorrow())).await?, 0);
    Ok(())
  }
}
