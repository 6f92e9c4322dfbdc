use {
  crowdfund_client_sdk::{
    apply_donation,
    check_deadline,
    CampaignContract,
    ContractError,
  },
  crowdfund_primitives::{Address, Amount, CampaignRecord, NewCampaign},
  rmp_serde::{from_slice, to_vec},
  std::path::Path,
  time::OffsetDateTime,
};

/// Local development contract persisted in a sled database.
///
/// Each contract address gets its own tree, keyed by the big-endian
/// campaign id so that iteration order is campaign order. It applies
/// the same rules as a deployed crowdfunding contract and lets the
/// CLI be used with no chain access.
pub struct OnDiskContract {
  tree: sled::Tree,
}

impl OnDiskContract {
  pub fn open(path: &Path, contract: &Address) -> Result<Self, sled::Error> {
    Self::from_db(&sled::open(path)?, contract)
  }

  /// A contract in a throwaway database that is removed on drop.
  #[cfg(test)]
  pub fn temporary(contract: &Address) -> Result<Self, sled::Error> {
    Self::from_db(&sled::Config::new().temporary(true).open()?, contract)
  }

  pub fn from_db(
    db: &sled::Db,
    contract: &Address,
  ) -> Result<Self, sled::Error> {
    Ok(Self {
      tree: db.open_tree(format!("campaigns/{contract}"))?,
    })
  }

  fn read(&self, id: u64) -> Result<CampaignRecord, ContractError> {
    match self.tree.get(id.to_be_bytes()).map_err(storage)? {
      Some(bytes) => from_slice(&bytes).map_err(malformed),
      None => Err(ContractError::UnknownCampaign(id)),
    }
  }

  fn write(
    &self,
    id: u64,
    record: &CampaignRecord,
  ) -> Result<(), ContractError> {
    let bytes = to_vec(record).map_err(malformed)?;
    self.tree.insert(id.to_be_bytes(), bytes).map_err(storage)?;
    self.tree.flush().map_err(storage)?;
    Ok(())
  }

  fn next_id(&self) -> Result<u64, ContractError> {
    match self.tree.last().map_err(storage)? {
      Some((key, _)) => {
        let key: [u8; 8] = key
          .as_ref()
          .try_into()
          .map_err(|_| ContractError::Malformed("campaign key".into()))?;
        Ok(u64::from_be_bytes(key) + 1)
      }
      None => Ok(0),
    }
  }
}

fn storage(e: sled::Error) -> ContractError {
  ContractError::Storage(e.to_string())
}

fn malformed(e: impl std::fmt::Display) -> ContractError {
  ContractError::Malformed(e.to_string())
}

impl CampaignContract for OnDiskContract {
  async fn campaigns(&self) -> Result<Vec<CampaignRecord>, ContractError> {
    self
      .tree
      .iter()
      .values()
      .map(|bytes| from_slice(&bytes.map_err(storage)?).map_err(malformed))
      .collect()
  }

  async fn donators(
    &self,
    id: u64,
  ) -> Result<(Vec<Address>, Vec<Amount>), ContractError> {
    let record = self.read(id)?;
    Ok((record.donators, record.donations))
  }

  async fn create_campaign(
    &self,
    campaign: NewCampaign,
  ) -> Result<u64, ContractError> {
    check_deadline(
      campaign.deadline,
      OffsetDateTime::now_utc().unix_timestamp() as u64,
    )?;

    let id = self.next_id()?;
    self.write(id, &CampaignRecord::new(campaign))?;
    Ok(id)
  }

  async fn donate(
    &self,
    id: u64,
    from: Address,
    value: Amount,
  ) -> Result<(), ContractError> {
    let mut record = self.read(id)?;
    apply_donation(&mut record, from, value)?;
    self.write(id, &record)
  }
}
