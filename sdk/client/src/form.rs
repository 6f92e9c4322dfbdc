use {
  crowdfund_primitives::{
    to_raw_amount,
    Address,
    Amount,
    AmountError,
    NewCampaign,
  },
  thiserror::Error,
  time::{macros::format_description, Date, OffsetDateTime},
};

/// Used when a campaign is created without an image.
pub const PLACEHOLDER_IMAGE: &str =
  "https://via.placeholder.com/400x300?text=Campaign";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Please fill in all required fields.")]
  MissingFields,

  #[error("{0}")]
  InvalidAmount(#[from] AmountError),

  #[error("Donation amount must be greater than zero")]
  NonPositiveAmount,

  #[error("Deadline {0:?} is not a YYYY-MM-DD date")]
  InvalidDeadline(String),

  #[error("Deadline must be {earliest} or later")]
  DeadlineTooSoon { earliest: Date },
}

/// User input of the campaign creation form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCampaignForm {
  pub title: String,
  pub description: String,
  /// Funding goal in ETH, e.g. `2.5`.
  pub target: String,
  /// Last day of the campaign as `YYYY-MM-DD`.
  pub deadline: String,
  /// Optional image URL.
  pub image: String,
}

impl CreateCampaignForm {
  /// Turns the form into create-call arguments for `owner`.
  ///
  /// All fields but the image are required. The deadline date is
  /// interpreted as midnight UTC and must not be earlier than the
  /// day after `now`.
  pub fn validate(
    &self,
    owner: Address,
    now: OffsetDateTime,
  ) -> Result<NewCampaign, Error> {
    if [&self.title, &self.description, &self.target, &self.deadline]
      .iter()
      .any(|field| field.is_empty())
    {
      return Err(Error::MissingFields);
    }

    Ok(NewCampaign {
      owner,
      title: self.title.clone(),
      description: self.description.clone(),
      target: to_raw_amount(&self.target)?,
      deadline: parse_deadline(&self.deadline, now)?,
      image: match self.image.is_empty() {
        true => PLACEHOLDER_IMAGE.to_owned(),
        false => self.image.clone(),
      },
    })
  }
}

/// Converts a `YYYY-MM-DD` deadline into Unix seconds at midnight UTC.
pub fn parse_deadline(text: &str, now: OffsetDateTime) -> Result<u64, Error> {
  let date = Date::parse(text, format_description!("[year]-[month]-[day]"))
    .map_err(|_| Error::InvalidDeadline(text.to_owned()))?;

  let earliest = now
    .date()
    .next_day()
    .ok_or_else(|| Error::InvalidDeadline(text.to_owned()))?;
  if date < earliest {
    return Err(Error::DeadlineTooSoon { earliest });
  }

  u64::try_from(date.midnight().assume_utc().unix_timestamp())
    .map_err(|_| Error::InvalidDeadline(text.to_owned()))
}

/// Parses the amount typed into the donation form. Zero is rejected.
pub fn parse_donation(text: &str) -> Result<Amount, Error> {
  let amount = to_raw_amount(text)?;
  match amount.is_zero() {
    true => Err(Error::NonPositiveAmount),
    false => Ok(amount),
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crowdfund_primitives::UNIT,
    time::macros::{date, datetime},
  };

  fn form() -> CreateCampaignForm {
    CreateCampaignForm {
      title: "Community garden".into(),
      description: "Seeds and tools".into(),
      target: "2.5".into(),
      deadline: "2024-03-01".into(),
      image: String::new(),
    }
  }

  #[test]
  fn valid_form() -> anyhow::Result<()> {
    let owner = Address::new([3; 20]);
    let now = datetime!(2024-02-10 15:30 UTC);
    let campaign = form().validate(owner, now)?;

    assert_eq!(campaign.owner, owner);
    assert_eq!(campaign.target, Amount::from_wei(UNIT * 5 / 2));
    assert_eq!(
      campaign.deadline,
      datetime!(2024-03-01 0:00 UTC).unix_timestamp() as u64
    );
    assert_eq!(campaign.image, PLACEHOLDER_IMAGE);
    Ok(())
  }

  #[test]
  fn image_is_kept_when_given() -> anyhow::Result<()> {
    let mut form = form();
    form.image = "https://example.org/garden.png".into();
    let campaign =
      form.validate(Address::new([3; 20]), datetime!(2024-02-10 0:00 UTC))?;
    assert_eq!(campaign.image, "https://example.org/garden.png");
    Ok(())
  }

  #[test]
  fn missing_fields() {
    let now = datetime!(2024-02-10 0:00 UTC);
    let clears: [fn(&mut CreateCampaignForm); 4] = [
      |f| f.title.clear(),
      |f| f.description.clear(),
      |f| f.target.clear(),
      |f| f.deadline.clear(),
    ];
    for clear in clears {
      let mut form = form();
      clear(&mut form);
      assert_eq!(
        form.validate(Address::new([3; 20]), now),
        Err(Error::MissingFields)
      );
    }
  }

  #[test]
  fn invalid_target() {
    let mut form = form();
    form.target = "lots".into();
    assert!(matches!(
      form.validate(Address::new([3; 20]), datetime!(2024-02-10 0:00 UTC)),
      Err(Error::InvalidAmount(_))
    ));
  }

  #[test]
  fn deadline_must_be_tomorrow_or_later() -> anyhow::Result<()> {
    let now = datetime!(2024-02-10 23:59 UTC);
    assert_eq!(parse_deadline("2024-02-10", now), Err(Error::DeadlineTooSoon {
      earliest: date!(2024-02-11)
    }));
    assert_eq!(
      parse_deadline("2024-02-11", now)?,
      datetime!(2024-02-11 0:00 UTC).unix_timestamp() as u64
    );
    Ok(())
  }

  #[test]
  fn deadline_format() {
    let now = datetime!(2024-02-10 0:00 UTC);
    for text in ["tomorrow", "2024/03/01", "01-03-2024", "2024-13-01"] {
      assert_eq!(
        parse_deadline(text, now),
        Err(Error::InvalidDeadline(text.into()))
      );
    }
  }

  #[test]
  fn donation_amounts() -> anyhow::Result<()> {
    assert_eq!(parse_donation("0.1")?, Amount::from_wei(UNIT / 10));
    assert_eq!(parse_donation("0"), Err(Error::NonPositiveAmount));
    assert_eq!(parse_donation("0.000"), Err(Error::NonPositiveAmount));
    assert!(matches!(parse_donation("-1"), Err(Error::InvalidAmount(_))));
    assert!(matches!(parse_donation(""), Err(Error::InvalidAmount(_))));
    Ok(())
  }
}
