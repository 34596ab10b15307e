use super::*;

pub(crate) enum Event {
  Stories(Result<StoryBatch>),
}
