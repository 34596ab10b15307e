/// Items plus the selection and scroll offset of the list showing them.
pub(crate) struct ListView<T> {
  items: Vec<T>,
  offset: usize,
  selected: usize,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}

impl<T> ListView<T> {
  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[T] {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  /// Moves the selection by `delta` rows, stopping at either end.
  pub(crate) fn move_by(&mut self, delta: isize) {
    let current = self.selected_index().unwrap_or(0);

    self.set_selected(current.saturating_add_signed(delta));
  }

  pub(crate) fn new(items: Vec<T>) -> Self {
    Self {
      items,
      offset: 0,
      selected: 0,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    self.offset.min(self.selected_index().unwrap_or(0))
  }

  /// Replaces the items, keeping the selection on the first item matching
  /// `keep` or falling back to the top of the list.
  pub(crate) fn replace<F>(&mut self, items: Vec<T>, keep: F)
  where
    F: Fn(&T) -> bool,
  {
    let selected = items.iter().position(keep).unwrap_or(0);

    *self = Self::new(items);

    self.set_selected(selected);
  }

  pub(crate) fn select_last(&mut self) {
    self.set_selected(self.items.len().saturating_sub(1));
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.items.is_empty() {
      None
    } else {
      Some(self.selected.min(self.items.len() - 1))
    }
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self
      .selected_index()
      .and_then(|index| self.items.get(index))
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    self.offset = offset.min(self.items.len().saturating_sub(1));
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    self.selected = index.min(self.items.len().saturating_sub(1));
  }
}
