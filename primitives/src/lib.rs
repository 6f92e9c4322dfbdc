mod address;
mod amount;
mod campaign;
mod view;

pub use {
  address::{Address, Error as AddressError},
  amount::{
    to_display_amount,
    to_raw_amount,
    Amount,
    Error as AmountError,
    DECIMALS,
    UNIT,
  },
  campaign::{CampaignRecord, DonationEntry, NewCampaign},
  view::{
    deadline_status,
    funding_progress,
    zip_donations,
    CampaignDetails,
    CampaignView,
    DeadlineStatus,
    Error as MalformedUpstreamData,
  },
};
