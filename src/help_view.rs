use super::*;

pub(crate) struct HelpView {
  message_backup: Option<String>,
  visible: bool,
}

impl HelpView {
  /// Centers a box sized to the help text, shrinking it to fit `area`.
  fn area(area: Rect) -> Rect {
    let lines = HELP_TEXT.lines();

    let height = lines.clone().count().saturating_add(2);

    let width = lines
      .map(|line| line.chars().count())
      .max()
      .unwrap_or(0)
      .saturating_add(2);

    let width = u16::try_from(width)
      .unwrap_or(u16::MAX)
      .min(area.width.saturating_sub(2))
      .max(1)
      .min(area.width);

    let height = u16::try_from(height)
      .unwrap_or(u16::MAX)
      .min(area.height.saturating_sub(2))
      .max(1)
      .min(area.height);

    Rect::new(
      area.x + (area.width - width) / 2,
      area.y + (area.height - height) / 2,
      width,
      height,
    )
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let area = Self::area(frame.area());

    frame.render_widget(Clear, area);

    frame.render_widget(
      Paragraph::new(HELP_TEXT)
        .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
        .wrap(Wrap { trim: false }),
      area,
    );
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Action {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Action::HideHelp,
      KeyCode::Char('q' | 'Q') => Action::Quit,
      _ => Action::None,
    }
  }

  pub(crate) fn hide(&mut self, message: &mut String) {
    if !self.visible {
      return;
    }

    *message = self
      .message_backup
      .take()
      .unwrap_or_else(|| LIST_STATUS.into());

    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self {
      message_backup: None,
      visible: false,
    }
  }

  pub(crate) fn show(&mut self, message: &mut String) {
    if self.visible {
      return;
    }

    self.message_backup = Some(std::mem::replace(message, HELP_STATUS.into()));

    self.visible = true;
  }
}
