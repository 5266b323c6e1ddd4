use ratatui::widgets::ListState;

/// Outcome of the link picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Index into the picker lines.
    Chosen(usize),
    Cancelled,
}

/// State of the single-select list.
pub struct PickerApp {
    pub label: String,
    pub header: String,
    pub lines: Vec<String>,
    pub index: usize,
    pub page_size: usize,
    pub list_state: ListState,
    pub outcome: Option<Selection>,
}

impl PickerApp {
    pub fn new(label: String, header: String, lines: Vec<String>, page_size: usize) -> Self {
        let mut list_state = ListState::default();
        if !lines.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            label,
            header,
            lines,
            index: 0,
            page_size: page_size.max(1),
            list_state,
            outcome: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn move_up(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.list_state.select(Some(self.index));
        }
    }

    pub fn move_down(&mut self) {
        if !self.lines.is_empty() && self.index < self.lines.len() - 1 {
            self.index += 1;
            self.list_state.select(Some(self.index));
        }
    }

    pub fn next_page(&mut self) {
        let max_index = self.lines.len().saturating_sub(1);
        let new_index = (self.index + self.page_size).min(max_index);
        if new_index != self.index {
            self.index = new_index;
            self.list_state.select(Some(self.index));
        }
    }

    pub fn prev_page(&mut self) {
        let new_index = self.index.saturating_sub(self.page_size);
        if new_index != self.index {
            self.index = new_index;
            self.list_state.select(Some(self.index));
        }
    }

    /// Choosing from an empty list does nothing.
    pub fn choose(&mut self) {
        if self.index < self.lines.len() {
            self.outcome = Some(Selection::Chosen(self.index));
        }
    }

    pub fn cancel(&mut self) {
        self.outcome = Some(Selection::Cancelled);
    }
}
