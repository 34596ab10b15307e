#[derive(Debug)]
pub(crate) struct FailedFetch {
  pub(crate) error: anyhow::Error,
  pub(crate) id: u64,
}
