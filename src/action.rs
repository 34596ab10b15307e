use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
  CancelSearch,
  ClearQueryOrQuit,
  HideHelp,
  None,
  OpenCurrentInBrowser,
  PageDown,
  PageUp,
  Quit,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartSearch,
  SubmitSearch,
}

impl Action {
  pub(crate) fn from_key(key: KeyEvent) -> Self {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') => Action::Quit,
      KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
        Action::Quit
      }
      KeyCode::Esc => Action::ClearQueryOrQuit,
      KeyCode::Char('?') => Action::ShowHelp,
      KeyCode::Char('/') => Action::StartSearch,
      KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
      KeyCode::PageDown => Action::PageDown,
      KeyCode::PageUp => Action::PageUp,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Action::PageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Action::PageUp
      }
      KeyCode::Home | KeyCode::Char('g') => Action::SelectFirst,
      KeyCode::End | KeyCode::Char('G') => Action::SelectLast,
      KeyCode::Enter | KeyCode::Char('o' | 'O') => Action::OpenCurrentInBrowser,
      _ => Action::None,
    }
  }
}
