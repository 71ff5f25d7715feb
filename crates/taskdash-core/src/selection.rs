//! Single-selection cursor over a list whose length changes on every reload.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    /// Moves down one item, stopping at the last.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    /// Moves up one item, stopping at the first.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1).min(len - 1),
            None => 0,
        });
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    /// Keeps the selection inside `0..len` after the list was reloaded.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            Some(idx) if idx >= len => Some(len - 1),
            None => Some(0),
            other => other,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_end() {
        let mut selection = SelectionState::new();
        selection.next(2);
        assert_eq!(selection.get(), Some(0));
        selection.next(2);
        selection.next(2);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn test_prev_stops_at_start() {
        let mut selection = SelectionState::new();
        selection.set(Some(1));
        selection.prev(3);
        selection.prev(3);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        let mut selection = SelectionState::new();
        selection.next(0);
        selection.prev(0);
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_clamp_after_reload() {
        let mut selection = SelectionState::new();
        selection.set(Some(7));
        selection.clamp(3);
        assert_eq!(selection.get(), Some(2));

        selection.clamp(0);
        assert!(selection.get().is_none());

        selection.clamp(4);
        assert_eq!(selection.get(), Some(0));
        assert!(selection.is_selected(0));
    }
}
