use super::*;

/// Transport used by the loader to retrieve raw response bodies.
#[async_trait]
pub(crate) trait Fetch: Send + Sync {
  async fn get(&self, url: &str) -> Result<Vec<u8>>;
}
