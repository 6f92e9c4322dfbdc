mod client;
mod config;
mod contract;
mod form;
mod memory;
mod notify;

pub use {
  client::{
    campaign_created,
    donation_succeeded,
    Action,
    CampaignClient,
    Error,
    ReadError,
    TransactionError,
  },
  config::{Chain, ClientConfig},
  contract::{
    apply_donation,
    check_deadline,
    CampaignContract,
    Error as ContractError,
  },
  form::{
    parse_deadline,
    parse_donation,
    CreateCampaignForm,
    Error as FormError,
    PLACEHOLDER_IMAGE,
  },
  memory::InMemoryContract,
  notify::{Notification, Variant},
};
