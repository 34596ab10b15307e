use super::*;

/// Stories whose title contains `query`, ignoring case, in their original
/// order. An empty query keeps every story.
pub(crate) fn filter(stories: &[Story], query: &str) -> Vec<Story> {
  if query.is_empty() {
    return stories.to_vec();
  }

  let needle = query.to_lowercase();

  stories
    .iter()
    .filter(|story| story.title.to_lowercase().contains(&needle))
    .cloned()
    .collect()
}
