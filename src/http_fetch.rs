use super::*;

pub(crate) struct HttpFetch {
  client: reqwest::Client,
}

impl HttpFetch {
  const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

  pub(crate) fn new(timeout: Option<Duration>) -> Result<Self> {
    let mut builder = reqwest::Client::builder().user_agent(Self::USER_AGENT);

    if let Some(timeout) = timeout {
      builder = builder.timeout(timeout);
    }

    Ok(Self {
      client: builder.build().context("could not build http client")?,
    })
  }
}

#[async_trait]
impl Fetch for HttpFetch {
  async fn get(&self, url: &str) -> Result<Vec<u8>> {
    let response = self.client.get(url).send().await?.error_for_status()?;

    Ok(response.bytes().await?.to_vec())
  }
}
