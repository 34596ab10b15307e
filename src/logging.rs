use super::*;

const LOG_ENV: &str = "HNTOP_LOG";

/// `$XDG_STATE_HOME/hntop/hntop.log`, falling back to
/// `$HOME/.local/state/hntop/hntop.log`.
fn default_path<F>(lookup: F) -> Option<PathBuf>
where
  F: Fn(&str) -> Option<String>,
{
  let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

  let base_dir = var("XDG_STATE_HOME").map(PathBuf::from).or_else(|| {
    var("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
  })?;

  Some(base_dir.join("hntop").join("hntop.log"))
}

/// Installs the tracing subscriber. The interactive view owns the terminal,
/// so it logs to a file: `--log-file` when given, the default state file
/// otherwise. Plain mode logs to stderr unless `--log-file` is given.
pub(crate) fn initialize(arguments: &Arguments) -> Result {
  let filter = EnvFilter::try_from_env(LOG_ENV)
    .unwrap_or_else(|_| EnvFilter::new("info"));

  let file = match &arguments.log_file {
    Some(path) => open(path)?,
    None if arguments.plain => {
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

      return Ok(());
    }
    None => {
      let Some(Ok(file)) =
        default_path(|name| env::var(name).ok()).map(|path| open(&path))
      else {
        return Ok(());
      };

      file
    }
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .init();

  Ok(())
}

fn open(path: &Path) -> Result<fs::File> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)
      .with_context(|| format!("could not create {}", parent.display()))?;
  }

  fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file {}", path.display()))
}
