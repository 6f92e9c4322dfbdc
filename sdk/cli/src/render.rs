use {
  crowdfund_client_sdk::{Notification, Variant},
  crowdfund_primitives::{CampaignDetails, CampaignView},
};

/// Text shown for a list page with no campaigns.
pub struct EmptyList<'a> {
  pub title: &'a str,
  pub hint: &'a str,
}

pub const HOME_EMPTY: EmptyList = EmptyList {
  title: "No campaigns yet",
  hint: "Be the first to create a campaign and help others in need.",
};

pub const MINE_EMPTY: EmptyList = EmptyList {
  title: "No campaigns yet",
  hint: "Start your journey by creating your first campaign to help make a \
         difference in the world.",
};

fn card(out: &mut String, campaign: &CampaignView) {
  let badge = match campaign.deadline.is_expired() {
    true => "  [Expired]",
    false => "",
  };
  out.push_str(&format!("#{}  {}{badge}\n", campaign.id, campaign.title));
  out.push_str(&format!("    {}\n", campaign.description));
  out.push_str(&format!(
    "    {} ETH raised of {} ETH goal ({:.1}%)\n",
    campaign.amount_collected, campaign.target, campaign.progress
  ));
  out.push_str(&format!(
    "    {} | by {}\n",
    campaign.deadline,
    campaign.owner.short()
  ));
}

pub fn campaign_list(campaigns: &[CampaignView], empty: &EmptyList) -> String {
  if campaigns.is_empty() {
    return format!("{}\n{}\n", empty.title, empty.hint);
  }

  let mut out = String::new();
  for (i, campaign) in campaigns.iter().enumerate() {
    if i > 0 {
      out.push('\n');
    }
    card(&mut out, campaign);
  }
  out
}

pub fn campaign_details(details: &CampaignDetails) -> String {
  let mut out = String::new();
  card(&mut out, &details.campaign);
  if !details.campaign.image.is_empty() {
    out.push_str(&format!("    {}\n", details.campaign.image));
  }

  out.push_str(&format!("\nSupporters ({})\n", details.donations.len()));
  if details.donations.is_empty() {
    out.push_str("  No donations yet. Be the first to support this cause!\n");
  }
  for donation in &details.donations {
    out.push_str(&format!(
      "  {}  {} ETH\n",
      donation.donator.short(),
      donation.amount
    ));
  }
  out
}

pub fn notification(notification: &Notification) -> String {
  let marker = match notification.variant {
    Variant::Success => "ok",
    Variant::Destructive => "error",
  };
  format!(
    "[{marker}] {}\n{}\n",
    notification.title, notification.description
  )
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crowdfund_primitives::{
      Address,
      Amount,
      DeadlineStatus,
      DonationEntry,
      UNIT,
    },
  };

  fn view(id: u64, deadline: DeadlineStatus) -> CampaignView {
    CampaignView {
      id,
      owner: "0x2fe7cE39fb54297D8C485651e74174EFaFAA0ebE".parse().unwrap(),
      title: "Clean water".into(),
      description: "Wells for the village".into(),
      image: String::new(),
      target: Amount::from_wei(2 * UNIT),
      amount_collected: Amount::from_wei(UNIT / 3),
      deadline,
      progress: 100.0 / 6.0,
    }
  }

  #[test]
  fn list_cards() {
    let text = campaign_list(
      &[
        view(0, DeadlineStatus::Active { days_remaining: 4 }),
        view(1, DeadlineStatus::Expired),
      ],
      &HOME_EMPTY,
    );

    assert_eq!(
      text,
      "#0  Clean water\n    Wells for the village\n    0.333333333333333333 \
       ETH raised of 2.0 ETH goal (16.7%)\n    4 days left | by \
       0x2fe7...0ebe\n\n#1  Clean water  [Expired]\n    Wells for the \
       village\n    0.333333333333333333 ETH raised of 2.0 ETH goal \
       (16.7%)\n    Expired | by 0x2fe7...0ebe\n"
    );
  }

  #[test]
  fn empty_list() {
    assert_eq!(
      campaign_list(&[], &HOME_EMPTY),
      "No campaigns yet\nBe the first to create a campaign and help others \
       in need.\n"
    );
  }

  #[test]
  fn details_with_supporters() {
    let details = CampaignDetails {
      campaign: view(2, DeadlineStatus::Active { days_remaining: 1 }),
      donations: vec![DonationEntry {
        donator: Address::new([0xab; 20]),
        amount: Amount::from_wei(UNIT / 3),
      }],
    };

    let text = campaign_details(&details);
    assert!(text.contains("Supporters (1)\n"));
    assert!(text.contains("  0xabab...abab  0.333333333333333333 ETH\n"));

    let empty = CampaignDetails {
      donations: vec![],
      ..details
    };
    assert!(
      campaign_details(&empty).contains("Supporters (0)\n  No donations")
    );
  }

  #[test]
  fn notification_markers() {
    assert_eq!(
      notification(&Notification::destructive("Invalid amount", "bad")),
      "[error] Invalid amount\nbad\n"
    );
    assert_eq!(
      notification(&Notification::success("Campaign created!", "done")),
      "[ok] Campaign created!\ndone\n"
    );
  }
}
