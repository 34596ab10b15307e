use super::*;

#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Arguments {
  /// Maximum number of detail requests in flight at once
  #[arg(long, value_name = "N")]
  pub(crate) concurrency: Option<usize>,
  /// Read configuration from PATH instead of the default location
  #[arg(long, value_name = "PATH")]
  pub(crate) config: Option<PathBuf>,
  /// Number of top stories to load
  #[arg(long, value_name = "N")]
  pub(crate) limit: Option<usize>,
  /// Append logs to PATH
  #[arg(long, value_name = "PATH")]
  pub(crate) log_file: Option<PathBuf>,
  /// Keep the stories that loaded when some detail requests fail
  #[arg(long)]
  pub(crate) partial: bool,
  /// Print the stories to stdout instead of starting the interactive view
  #[arg(long)]
  pub(crate) plain: bool,
  /// Only show stories whose title contains QUERY
  #[arg(long, short)]
  pub(crate) query: Option<String>,
  /// Per-request timeout
  #[arg(long, value_name = "SECONDS")]
  pub(crate) timeout: Option<u64>,
}
