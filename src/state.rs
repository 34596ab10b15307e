use super::*;

pub(crate) struct State {
  help: HelpView,
  list_height: usize,
  loading: bool,
  message: String,
  pending_effects: Vec<Effect>,
  query: String,
  search_input: Option<SearchInput>,
  stories: Vec<Story>,
  transient_message: Option<TransientMessage>,
  view: ListView<Story>,
}

impl State {
  const ROWS_PER_STORY: usize = 3;

  fn apply_query(&mut self, query: String) {
    self.query = query;
    self.refilter();
  }

  fn cancel_search(&mut self) {
    if let Some(input) = self.search_input.take() {
      self.apply_query(input.previous_query);
      self.message = input.message_backup;
    }
  }

  fn clear_query_or_quit(&mut self) -> bool {
    if self.query.is_empty() {
      return true;
    }

    self.apply_query(String::new());

    false
  }

  pub(crate) fn dispatch(&mut self, action: Action) -> Dispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match action {
      Action::CancelSearch => self.cancel_search(),
      Action::ClearQueryOrQuit => should_exit = self.clear_query_or_quit(),
      Action::HideHelp => self.help.hide(&mut self.message),
      Action::None => {}
      Action::OpenCurrentInBrowser => self.open_current_in_browser(),
      Action::PageDown => {
        let jump = self.page_jump();
        self.view.move_by(jump);
      }
      Action::PageUp => {
        let jump = self.page_jump();
        self.view.move_by(-jump);
      }
      Action::Quit => should_exit = true,
      Action::SelectFirst => self.view.set_selected(0),
      Action::SelectLast => self.view.select_last(),
      Action::SelectNext => self.view.move_by(1),
      Action::SelectPrevious => self.view.move_by(-1),
      Action::ShowHelp => self.help.show(&mut self.message),
      Action::StartSearch => self.start_search(),
      Action::SubmitSearch => self.submit_search(),
    }

    Dispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  fn edit_search<F>(&mut self, edit: F)
  where
    F: FnOnce(&mut String),
  {
    let Some(input) = self.search_input.as_mut() else {
      return;
    };

    edit(&mut input.buffer);

    let (query, prompt) = (input.buffer.clone(), input.prompt());

    self.apply_query(query);

    self.message = truncate(&prompt, 80);
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Stories(result) => {
        self.loading = false;

        if self.message == LOADING_STATUS {
          self.message = LIST_STATUS.into();
        }

        match result {
          Ok(batch) => {
            self.stories = batch.stories;
            self.refilter();

            if !batch.failed.is_empty() && !self.help.is_visible() {
              self.set_transient_message(format!(
                "Loaded {} stories ({} failed)",
                self.stories.len(),
                batch.failed.len()
              ));
            }
          }
          Err(error) => {
            error!("could not load top stories: {error:#}");

            if !self.help.is_visible() {
              self.set_transient_message(format!(
                "Could not load stories: {}",
                truncate(&error.to_string(), 60)
              ));
            }
          }
        }
      }
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) -> Action {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Esc => Action::CancelSearch,
      KeyCode::Enter => Action::SubmitSearch,
      KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
        Action::Quit
      }
      KeyCode::Backspace => {
        self.edit_search(|buffer| {
          buffer.pop();
        });

        Action::None
      }
      KeyCode::Char(ch) => {
        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Action::None;
        }

        self.edit_search(|buffer| buffer.push(ch));

        Action::None
      }
      _ => Action::None,
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.loading
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(query: String) -> Self {
    Self {
      help: HelpView::new(),
      list_height: 0,
      loading: true,
      message: LOADING_STATUS.into(),
      pending_effects: Vec::new(),
      query,
      search_input: None,
      stories: Vec::new(),
      transient_message: None,
      view: ListView::default(),
    }
  }

  fn open_current_in_browser(&mut self) {
    if let Some(story) = self.view.selected_item() {
      self.pending_effects.push(Effect::OpenUrl { url: story.link() });
    }
  }

  fn page_jump(&self) -> isize {
    let rows = (self.list_height / Self::ROWS_PER_STORY).saturating_sub(1);

    isize::try_from(rows.max(1)).unwrap_or(isize::MAX)
  }

  pub(crate) fn query(&self) -> &str {
    &self.query
  }

  fn refilter(&mut self) {
    let selected = self.view.selected_item().map(|story| story.id);

    self.view.replace(filter(&self.stories, &self.query), |story| {
      Some(story.id) == selected
    });
  }

  pub(crate) fn search_input_action(&mut self, key: KeyEvent) -> Option<Action> {
    if self.search_input.is_some() {
      Some(self.handle_search_key(key))
    } else {
      None
    }
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let restore = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.restore().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), restore));

    self.message = message;
  }

  fn start_search(&mut self) {
    if self.search_input.is_some() {
      return;
    }

    let input = SearchInput::new(&self.query, self.message.clone());

    self.message = truncate(&input.prompt(), 80);

    self.search_input = Some(input);
  }

  pub(crate) fn stories(&self) -> &[Story] {
    &self.stories
  }

  fn submit_search(&mut self) {
    if let Some(input) = self.search_input.take() {
      self.apply_query(input.buffer.trim().to_string());
      self.message = LIST_STATUS.into();
    }
  }

  pub(crate) fn update_message(&mut self) {
    if self.message == LOADING_STATUS && !self.loading {
      self.message = LIST_STATUS.into();
    }

    let Some(transient) = self.transient_message.as_ref() else {
      return;
    };

    if self.message != transient.text() {
      self.transient_message = None;
    } else if transient.expired_at(Instant::now()) {
      self.message = transient.restore().to_string();
      self.transient_message = None;
    }
  }

  pub(crate) fn view(&self) -> &ListView<Story> {
    &self.view
  }

  pub(crate) fn view_mut(&mut self) -> &mut ListView<Story> {
    &mut self.view
  }
}
