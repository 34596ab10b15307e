use {
  action::Action,
  anyhow::Context,
  app::App,
  arguments::Arguments,
  async_trait::async_trait,
  clap::Parser,
  client::Client,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  dispatch::Dispatch,
  effect::Effect,
  event::Event,
  failed_fetch::FailedFetch,
  fetch::Fetch,
  filter::filter,
  futures::stream::{self, StreamExt, TryStreamExt},
  help_view::HelpView,
  http_fetch::HttpFetch,
  list_view::ListView,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
  },
  search_input::SearchInput,
  serde::Deserialize,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env, fs,
    io::{self, IsTerminal, Stdout, Write},
    path::{Path, PathBuf},
    process,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
  },
  story::Story,
  story_batch::StoryBatch,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, error, info, warn},
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  utils::{format_points, truncate},
};

mod action;
mod app;
mod arguments;
mod client;
mod config;
mod dispatch;
mod effect;
mod event;
mod failed_fetch;
mod fetch;
mod filter;
mod help_view;
mod http_fetch;
mod list_view;
mod logging;
mod plain;
mod search_input;
mod state;
mod story;
mod story_batch;
mod transient_message;
mod utils;

const BASE_INDENT: &str = " ";

const HELP_STATUS: &str = "Press ? or esc to close help";

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first story
  end     jump to last story

Actions:
  o       open the selected story in your browser
  enter   open the selected story in your browser
  /       filter stories by title (updates as you type)
  esc     clear the filter, or quit when none is active
  q       quit hntop
  ?       toggle this help

Filter input:
  enter   keep the filter
  esc     restore the previous filter
";

const HELP_TITLE: &str = "Help";

const LIST_STATUS: &str =
  "↑/k up • ↓/j down • o open link • / filter • q quit • ? help";

const LOADING_STATUS: &str = "Loading top stories...";

const SKELETON_ROWS: usize = 10;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  logging::initialize(&arguments)?;

  let config = Config::load(arguments.config.as_deref())
    .context("could not load configuration")?
    .with_overrides(&arguments)?;

  debug!(?config, "resolved configuration");

  let client = Client::new(&config)?;

  let query = arguments.query.clone().unwrap_or_default();

  if arguments.plain {
    return plain::print(&client, &query).await;
  }

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, config.limit, query);

  app.start_loading();

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
