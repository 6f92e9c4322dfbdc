use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
  Success,
  Destructive,
}

/// A short user-facing message reporting the outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
  pub title: String,
  pub description: String,
  pub variant: Variant,
}

impl Notification {
  pub fn success(
    title: impl Into<String>,
    description: impl Into<String>,
  ) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      variant: Variant::Success,
    }
  }

  pub fn destructive(
    title: impl Into<String>,
    description: impl Into<String>,
  ) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      variant: Variant::Destructive,
    }
  }

  pub fn is_destructive(&self) -> bool {
    self.variant == Variant::Destructive
  }
}

impl Display for Notification {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {}", self.title, self.description)
  }
}
