use super::*;

const DISCUSSION_URL: &str = "https://news.ycombinator.com/item?id=";

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Story {
  pub(crate) by: Option<String>,
  pub(crate) id: u64,
  pub(crate) score: Option<u64>,
  #[serde(default)]
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl Story {
  pub(crate) fn detail(&self) -> Option<String> {
    match (self.score, self.by.as_deref()) {
      (Some(score), Some(by)) => {
        Some(format!("{} by {}", format_points(score), by))
      }
      (Some(score), None) => Some(format_points(score)),
      (None, Some(by)) => Some(format!("by {by}")),
      _ => None,
    }
  }

  /// Text posts carry no external link, so they open their discussion page.
  pub(crate) fn link(&self) -> String {
    self
      .url
      .clone()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| format!("{DISCUSSION_URL}{}", self.id))
  }
}
