use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  limit: usize,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(usize::from(layout[1].height));

    frame.render_widget(Paragraph::new(self.header()), layout[0]);

    let items = if self.state.is_loading() {
      Self::skeleton_items(layout[1].width)
    } else if self.state.view().is_empty() {
      let text = if self.state.query().is_empty() {
        "Nothing to show.".to_string()
      } else {
        format!("No stories match \"{}\".", truncate(self.state.query(), 40))
      };

      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(text),
      ]))]
    } else {
      self
        .state
        .view()
        .items()
        .iter()
        .map(Self::story_item)
        .collect()
    };

    let view = self.state.view();

    let mut list_state = ListState::default()
      .with_selected(if self.state.is_loading() {
        None
      } else {
        view.selected_index()
      })
      .with_offset(view.offset());

    let list = List::new(items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    self.state.view_mut().set_offset(list_state.offset());

    frame.render_widget(
      Paragraph::new(self.state.message().to_string())
        .style(Style::default().fg(Color::DarkGray)),
      layout[2],
    );

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          info!(%url, "opened story");

          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!(%url, %error, "could not open story");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  fn header(&self) -> Vec<Line<'static>> {
    let title = Line::from(Span::styled(
      format!("{BASE_INDENT}{}", Self::title(&self.state, self.limit)),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ));

    let summary = if self.state.is_loading() {
      String::new()
    } else {
      let (shown, total) =
        (self.state.view().len(), self.state.stories().len());

      if self.state.query().is_empty() {
        format!("{BASE_INDENT}{total} stories")
      } else {
        format!(
          "{BASE_INDENT}{shown} of {total} stories matching \"{}\"",
          truncate(self.state.query(), 40)
        )
      }
    };

    vec![
      title,
      Line::from(Span::styled(summary, Style::default().fg(Color::DarkGray))),
    ]
  }

  pub(crate) fn new(client: Client, limit: usize, query: String) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      limit,
      state: State::new(query),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let action = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(action) = self.state.search_input_action(key) {
        action
      } else {
        Action::from_key(key)
      };

      let dispatch = self.state.dispatch(action);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }

  fn skeleton_items(width: u16) -> Vec<ListItem<'static>> {
    let width = usize::from(width).saturating_sub(BASE_INDENT.len() * 2);

    (0..SKELETON_ROWS)
      .map(|row| {
        let title = "░".repeat(width * (6 + row % 4) / 10);
        let detail = "░".repeat(width / 4);

        let style = Style::default().fg(Color::DarkGray);

        ListItem::new(vec![
          Line::from(vec![Span::raw(BASE_INDENT), Span::styled(title, style)]),
          Line::from(vec![Span::raw(BASE_INDENT), Span::styled(detail, style)]),
          Line::from(Span::raw(BASE_INDENT)),
        ])
      })
      .collect()
  }

  /// Launches the one-shot load. Its result arrives as an `Event`.
  pub(crate) fn start_loading(&self) {
    let (client, sender) = (self.client.clone(), self.event_tx.clone());

    self.handle.spawn(async move {
      let _ = sender.send(Event::Stories(client.load_top_stories().await));
    });
  }

  fn story_item(story: &Story) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(story.title.clone(), Style::default().fg(Color::White)),
    ])];

    if let Some(detail) = story.detail() {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
      ]));
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }

  /// Names the requested count while loading and the loaded count after.
  fn title(state: &State, limit: usize) -> String {
    let count = if state.is_loading() {
      limit
    } else {
      state.stories().len()
    };

    format!("Top {count} Hacker News Stories")
  }
}
