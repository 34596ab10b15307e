use super::*;

/// Loads the collection and renders the stories matching `query`.
async fn listing(client: &Client, query: &str) -> Result<String> {
  let batch = client.load_top_stories().await?;

  for failed in &batch.failed {
    warn!(id = failed.id, "story left out: {:#}", failed.error);
  }

  Ok(render(&filter(&batch.stories, query)))
}

pub(crate) async fn print(client: &Client, query: &str) -> Result {
  let listing = listing(client, query).await?;

  let mut stdout = io::stdout().lock();

  stdout.write_all(listing.as_bytes())?;

  stdout.flush()?;

  Ok(())
}

pub(crate) fn render(stories: &[Story]) -> String {
  let width = stories.len().to_string().len();

  stories
    .iter()
    .enumerate()
    .map(|(index, story)| {
      let mut entry = format!("{:>width$}. {}\n", index + 1, story.title);

      let indent = " ".repeat(width + 2);

      if let Some(detail) = story.detail() {
        entry.push_str(&format!("{indent}{detail}\n"));
      }

      entry.push_str(&format!("{indent}{}\n", story.link()));

      entry
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use {super::*, anyhow::anyhow, std::collections::HashMap};

  const BASE: &str = "https://hacker-news.firebaseio.com/v0";

  struct StaticFetch(HashMap<String, &'static str>);

  #[async_trait]
  impl Fetch for StaticFetch {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
      self
        .0
        .get(url)
        .map(|body| body.as_bytes().to_vec())
        .ok_or_else(|| anyhow!("HTTP status client error (404 Not Found)"))
    }
  }

  fn client(responses: &[(&str, &'static str)]) -> Client {
    let responses = responses
      .iter()
      .map(|(path, body)| (format!("{BASE}/{path}"), *body))
      .collect();

    Client::with_fetch(Arc::new(StaticFetch(responses)), &Config::default())
  }

  #[test]
  fn renders_numbered_listing() {
    let stories = vec![
      Story {
        by: Some("steveklabnik".into()),
        id: 1,
        score: Some(120),
        title: "Rust in prod".into(),
        url: Some("https://example.com/rust".into()),
      },
      Story {
        by: None,
        id: 2,
        score: None,
        title: "Ask HN: Zig?".into(),
        url: None,
      },
    ];

    assert_eq!(
      render(&stories),
      "\
1. Rust in prod
   120 points by steveklabnik
   https://example.com/rust
2. Ask HN: Zig?
   https://news.ycombinator.com/item?id=2
"
    );
  }

  #[test]
  fn pads_numbers_to_widest_index() {
    let stories = (1..=10)
      .map(|id| Story {
        by: None,
        id,
        score: None,
        title: format!("Story {id}"),
        url: Some(format!("https://example.com/{id}")),
      })
      .collect::<Vec<_>>();

    let rendered = render(&stories);

    assert!(rendered.starts_with(" 1. Story 1\n    https://example.com/1\n"));
    assert!(rendered.contains("\n10. Story 10\n    https://example.com/10\n"));
  }

  #[tokio::test]
  async fn listing_applies_query() {
    let client = client(&[
      ("topstories.json", "[1,2,3]"),
      ("item/1.json", r#"{"id":1,"title":"Go 2 draft"}"#),
      ("item/2.json", r#"{"id":2,"title":"Rust in prod"}"#),
      ("item/3.json", r#"{"id":3,"title":"Why GOTO returned"}"#),
    ]);

    assert_eq!(
      listing(&client, "go").await.unwrap(),
      "\
1. Go 2 draft
   https://news.ycombinator.com/item?id=1
2. Why GOTO returned
   https://news.ycombinator.com/item?id=3
"
    );
  }

  #[tokio::test]
  async fn listing_propagates_load_failure() {
    let error = listing(&client(&[]), "").await.unwrap_err();

    assert_eq!(error.to_string(), "failed to fetch story ranking");
  }

  #[tokio::test]
  async fn listing_propagates_story_failure() {
    let client = client(&[
      ("topstories.json", "[1,2]"),
      ("item/1.json", r#"{"id":1,"title":"Go 2 draft"}"#),
    ]);

    let error = listing(&client, "").await.unwrap_err();

    assert_eq!(error.to_string(), "failed to fetch story 2");
  }

  #[test]
  fn empty_listing_renders_nothing() {
    assert_eq!(render(&[]), "");
  }
}
