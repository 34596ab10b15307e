use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  api_base_url: String,
  concurrency: usize,
  fetch: Arc<dyn Fetch>,
  limit: usize,
  partial_results: bool,
}

impl Client {
  async fn fetch_json<T>(&self, url: &str) -> Result<T>
  where
    T: for<'de> Deserialize<'de>,
  {
    let body = self
      .fetch
      .get(url)
      .await
      .with_context(|| format!("request to {url} failed"))?;

    serde_json::from_slice(&body)
      .with_context(|| format!("malformed response from {url}"))
  }

  async fn fetch_story(&self, id: u64) -> Result<Story> {
    self
      .fetch_json(&self.item_url(id))
      .await
      .with_context(|| format!("failed to fetch story {id}"))
  }

  fn item_url(&self, id: u64) -> String {
    format!("{}/item/{id}.json", self.api_base_url)
  }

  /// Loads the first `limit` ranked stories, ordered by rank regardless of
  /// which detail request completes first.
  pub(crate) async fn load_top_stories(&self) -> Result<StoryBatch> {
    let ids = self
      .fetch_json::<Vec<u64>>(&self.ranking_url())
      .await
      .context("failed to fetch story ranking")?;

    let ids = ids.into_iter().take(self.limit).collect::<Vec<_>>();

    debug!(count = ids.len(), "fetched story ranking");

    let requests = stream::iter(ids.into_iter().map(|id| async move {
      self
        .fetch_story(id)
        .await
        .map_err(|error| FailedFetch { error, id })
    }))
    .buffered(self.concurrency);

    if !self.partial_results {
      let stories = requests
        .map_err(|failed| failed.error)
        .try_collect::<Vec<_>>()
        .await?;

      info!(count = stories.len(), "loaded top stories");

      return Ok(StoryBatch {
        failed: Vec::new(),
        stories,
      });
    }

    let mut batch = StoryBatch::default();

    for result in requests.collect::<Vec<_>>().await {
      match result {
        Ok(story) => batch.stories.push(story),
        Err(failed) => {
          warn!(id = failed.id, error = %failed.error, "skipping story");
          batch.failed.push(failed);
        }
      }
    }

    info!(
      count = batch.stories.len(),
      failed = batch.failed.len(),
      "loaded top stories"
    );

    Ok(batch)
  }

  pub(crate) fn new(config: &Config) -> Result<Self> {
    Ok(Self::with_fetch(
      Arc::new(HttpFetch::new(config.timeout())?),
      config,
    ))
  }

  fn ranking_url(&self) -> String {
    format!("{}/topstories.json", self.api_base_url)
  }

  pub(crate) fn with_fetch(fetch: Arc<dyn Fetch>, config: &Config) -> Self {
    Self {
      api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
      concurrency: config.concurrency().max(1),
      fetch,
      limit: config.limit,
      partial_results: config.partial_results,
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, anyhow::anyhow, std::collections::HashMap};

  const BASE: &str = "http://hn.test/v0";

  /// In-memory transport keyed by URL. Unknown URLs fail like a 404.
  #[derive(Default)]
  struct MockFetch {
    completed: Mutex<Vec<String>>,
    delays: HashMap<String, Duration>,
    responses: HashMap<String, String>,
  }

  impl MockFetch {
    fn completed(&self) -> Vec<String> {
      self.completed.lock().unwrap().clone()
    }

    fn delay(mut self, id: u64, millis: u64) -> Self {
      self
        .delays
        .insert(format!("{BASE}/item/{id}.json"), Duration::from_millis(millis));
      self
    }

    fn ranking(mut self, ids: &[u64]) -> Self {
      self.responses.insert(
        format!("{BASE}/topstories.json"),
        serde_json::to_string(ids).unwrap(),
      );
      self
    }

    fn raw(mut self, id: u64, body: &str) -> Self {
      self
        .responses
        .insert(format!("{BASE}/item/{id}.json"), body.to_string());
      self
    }

    fn story(self, id: u64, title: &str) -> Self {
      let body = serde_json::json!({
        "by": "author",
        "id": id,
        "score": id % 500,
        "title": title,
        "type": "story",
        "url": format!("https://example.com/{id}"),
      });

      self.raw(id, &body.to_string())
    }
  }

  #[async_trait]
  impl Fetch for MockFetch {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
      if let Some(delay) = self.delays.get(url) {
        tokio::time::sleep(*delay).await;
      }

      self.completed.lock().unwrap().push(url.to_string());

      self
        .responses
        .get(url)
        .map(|body| body.clone().into_bytes())
        .ok_or_else(|| anyhow!("HTTP status client error (404 Not Found)"))
    }
  }

  fn client(fetch: MockFetch, config: Config) -> (Client, Arc<MockFetch>) {
    let fetch = Arc::new(fetch);

    let config = Config {
      api_base_url: format!("{BASE}/"),
      ..config
    };

    (Client::with_fetch(fetch.clone(), &config), fetch)
  }

  fn partial() -> Config {
    Config {
      partial_results: true,
      ..Config::default()
    }
  }

  fn stories(ids: &[u64]) -> MockFetch {
    ids.iter().fold(MockFetch::default().ranking(ids), |fetch, id| {
      fetch.story(*id, &format!("Story {id}"))
    })
  }

  #[tokio::test]
  async fn returns_first_hundred_in_ranking_order() {
    let ranking = (0..120u64).map(|i| (i * 37) % 120 + 1000).collect::<Vec<_>>();

    let fetch = ranking
      .iter()
      .enumerate()
      .fold(stories(&ranking), |fetch, (position, id)| {
        fetch.delay(*id, 120 - position as u64)
      });

    let (client, fetch) = client(fetch, Config::default());

    let batch = client.load_top_stories().await.unwrap();

    let loaded = batch.stories.iter().map(|story| story.id).collect::<Vec<_>>();

    assert_eq!(loaded, ranking[..100]);
    assert!(batch.failed.is_empty());

    let completed = fetch.completed();

    assert_eq!(completed.len(), 101, "ranking plus one request per story");
    assert_ne!(
      completed[1],
      format!("{BASE}/item/{}.json", ranking[0]),
      "detail requests should finish out of ranking order"
    );
  }

  #[tokio::test]
  async fn tolerates_short_ranking() {
    let (client, _) = client(stories(&[3, 1, 2]), Config::default());

    let batch = client.load_top_stories().await.unwrap();

    assert_eq!(
      batch.stories.iter().map(|story| story.id).collect::<Vec<_>>(),
      vec![3, 1, 2]
    );
  }

  #[tokio::test]
  async fn empty_ranking_yields_empty_batch() {
    let (client, _) = client(stories(&[]), Config::default());

    let batch = client.load_top_stories().await.unwrap();

    assert!(batch.stories.is_empty());
    assert!(batch.failed.is_empty());
  }

  #[tokio::test]
  async fn respects_configured_limit() {
    let (client, fetch) = client(
      stories(&[5, 4, 3, 2, 1]),
      Config {
        limit: 2,
        ..Config::default()
      },
    );

    let batch = client.load_top_stories().await.unwrap();

    assert_eq!(batch.stories.len(), 2);
    assert_eq!(fetch.completed().len(), 3);
  }

  #[tokio::test]
  async fn ranking_failure_fails_the_load() {
    let (client, _) = client(MockFetch::default().story(1, "x"), partial());

    let error = client.load_top_stories().await.unwrap_err();

    assert_eq!(error.to_string(), "failed to fetch story ranking");
  }

  #[tokio::test]
  async fn malformed_ranking_fails_the_load() {
    let mut fetch = MockFetch::default();

    fetch
      .responses
      .insert(format!("{BASE}/topstories.json"), "{\"ids\":[]}".into());

    let (client, _) = client(fetch, Config::default());

    let error = client.load_top_stories().await.unwrap_err();

    assert!(
      error
        .chain()
        .any(|cause| cause.to_string().starts_with("malformed response"))
    );
  }

  #[tokio::test]
  async fn single_detail_failure_fails_everything() {
    let ranking = (1..=100).collect::<Vec<u64>>();

    let mut fetch = stories(&ranking);
    fetch.responses.remove(&format!("{BASE}/item/57.json"));

    let (client, _) = client(fetch, Config::default());

    let error = client.load_top_stories().await.unwrap_err();

    assert_eq!(error.to_string(), "failed to fetch story 57");
  }

  #[tokio::test]
  async fn malformed_detail_fails_everything() {
    let (client, _) = client(
      MockFetch::default()
        .ranking(&[1, 2])
        .story(1, "fine")
        .raw(2, "null"),
      Config::default(),
    );

    assert!(client.load_top_stories().await.is_err());
  }

  #[tokio::test]
  async fn partial_mode_reports_failures_and_keeps_order() {
    let (client, _) = client(
      MockFetch::default()
        .ranking(&[9, 8, 7, 6])
        .story(9, "nine")
        .story(7, "seven")
        .raw(6, "not json")
        .delay(9, 20),
      partial(),
    );

    let batch = client.load_top_stories().await.unwrap();

    assert_eq!(
      batch.stories.iter().map(|story| story.id).collect::<Vec<_>>(),
      vec![9, 7]
    );

    assert_eq!(
      batch.failed.iter().map(|failed| failed.id).collect::<Vec<_>>(),
      vec![8, 6]
    );

    assert_eq!(batch.failed[0].error.to_string(), "failed to fetch story 8");
  }

  #[test]
  fn urls_ignore_trailing_slash() {
    let (client, _) = client(MockFetch::default(), Config::default());

    assert_eq!(client.ranking_url(), "http://hn.test/v0/topstories.json");
    assert_eq!(client.item_url(42), "http://hn.test/v0/item/42.json");
  }
}
