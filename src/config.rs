use super::*;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
  pub(crate) api_base_url: String,
  pub(crate) concurrency: Option<usize>,
  pub(crate) limit: usize,
  pub(crate) partial_results: bool,
  pub(crate) timeout_secs: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api_base_url: Self::API_BASE_URL.into(),
      concurrency: None,
      limit: Self::DEFAULT_LIMIT,
      partial_results: false,
      timeout_secs: None,
    }
  }
}

impl Config {
  const API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

  const CONFIG_ENV: &str = "HNTOP_CONFIG";

  const DEFAULT_LIMIT: usize = 100;

  /// Detail requests allowed in flight at once. Unset means every ranked
  /// story is requested at once.
  pub(crate) fn concurrency(&self) -> usize {
    self.concurrency.unwrap_or(self.limit)
  }

  fn default_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(Self::CONFIG_ENV) {
      return Ok(PathBuf::from(path));
    }

    let base_dir = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(base_dir.join("hntop").join("config.toml"))
  }

  /// Reads the configuration file. An explicitly requested file must exist,
  /// while a missing file at the default location yields the defaults.
  pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
    if let Some(path) = path {
      return Self::read(path);
    }

    let path = Self::default_path()?;

    if path.exists() {
      Self::read(&path)
    } else {
      debug!(path = %path.display(), "no configuration file, using defaults");
      Ok(Self::default())
    }
  }

  fn read(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("could not read {}", path.display()))?;

    toml::from_str(&content)
      .with_context(|| format!("could not parse {}", path.display()))
  }

  pub(crate) fn timeout(&self) -> Option<Duration> {
    self.timeout_secs.map(Duration::from_secs)
  }

  pub(crate) fn with_overrides(mut self, arguments: &Arguments) -> Result<Self> {
    if let Some(limit) = arguments.limit {
      self.limit = limit;
    }

    if let Some(concurrency) = arguments.concurrency {
      self.concurrency = Some(concurrency);
    }

    if arguments.partial {
      self.partial_results = true;
    }

    if let Some(timeout) = arguments.timeout {
      self.timeout_secs = Some(timeout);
    }

    anyhow::ensure!(self.limit > 0, "limit must be at least 1");

    anyhow::ensure!(
      self.concurrency != Some(0),
      "concurrency must be at least 1"
    );

    Ok(self)
  }
}
