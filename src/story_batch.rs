use super::*;

#[derive(Debug, Default)]
pub(crate) struct StoryBatch {
  pub(crate) failed: Vec<FailedFetch>,
  pub(crate) stories: Vec<Story>,
}
