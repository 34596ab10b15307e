pub(crate) struct SearchInput {
  pub(crate) buffer: String,
  pub(crate) message_backup: String,
  pub(crate) previous_query: String,
}

impl SearchInput {
  pub(crate) fn new(query: &str, message_backup: String) -> Self {
    Self {
      buffer: query.to_string(),
      message_backup,
      previous_query: query.to_string(),
    }
  }

  pub(crate) fn prompt(&self) -> String {
    format!("Filter: {}", self.buffer)
  }
}
