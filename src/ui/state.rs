use crate::error::ActionError;
use crate::models::summary::Summary;
use crate::operations::add::TransactionForm;
use crate::operations::{dispatch, Command, Outcome};
use crate::store::TransactionStore;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::ListState;
use std::cmp::max;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Type,
    Category,
    Amount,
    Date,
    AddButton,
    List,
    DeleteButton,
    SummaryButton,
}

impl Focus {
    const ORDER: [Focus; 8] = [
        Focus::Type,
        Focus::Category,
        Focus::Amount,
        Focus::Date,
        Focus::AddButton,
        Focus::List,
        Focus::DeleteButton,
        Focus::SummaryButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn is_field(self) -> bool {
        matches!(self, Focus::Type | Focus::Category | Focus::Amount | Focus::Date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Error(ActionError),
    Summary(Summary),
}

pub struct AppState {
    pub store: TransactionStore,
    pub form: TransactionForm,
    pub focus: Focus,
    pub list_state: ListState,
    pub dialog: Option<Dialog>,

    // Cached per-draw
    pub last_page_size: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: TransactionStore::new(),
            form: TransactionForm::default(),
            focus: Focus::Type,
            list_state: ListState::default(),
            dialog: None,
            last_page_size: 10,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state
            .selected()
            .filter(|&index| index < self.store.len())
    }

    pub fn field(&self, focus: Focus) -> Option<&str> {
        match focus {
            Focus::Type => Some(&self.form.kind),
            Focus::Category => Some(&self.form.category),
            Focus::Amount => Some(&self.form.amount),
            Focus::Date => Some(&self.form.date),
            _ => None,
        }
    }

    fn field_mut(&mut self, focus: Focus) -> Option<&mut String> {
        match focus {
            Focus::Type => Some(&mut self.form.kind),
            Focus::Category => Some(&mut self.form.category),
            Focus::Amount => Some(&mut self.form.amount),
            Focus::Date => Some(&mut self.form.date),
            _ => None,
        }
    }

    pub fn add_transaction(&mut self) {
        self.run(Command::Add(self.form.clone()));
    }

    pub fn delete_transaction(&mut self) {
        self.run(Command::Delete(self.selected_index()));
    }

    pub fn show_summary(&mut self) {
        self.run(Command::ViewSummary);
    }

    fn run(&mut self, command: Command) {
        match dispatch(&mut self.store, command) {
            Outcome::Added(_) => self.form = TransactionForm::default(),
            Outcome::Deleted(_) => self.list_state.select(None),
            Outcome::Summary(summary) => self.dialog = Some(Dialog::Summary(summary)),
            Outcome::Rejected(err) => self.dialog = Some(Dialog::Error(err)),
        }
    }

    fn move_selection(&mut self, delta: i32) {
        if self.store.is_empty() {
            self.list_state.select(None);
            return;
        }

        let max_index = self.store.len().saturating_sub(1) as i32;
        let next = match self.selected_index() {
            Some(current) => (current as i32 + delta).clamp(0, max_index),
            None if delta < 0 => max_index,
            None => 0,
        };
        self.list_state.select(Some(next as usize));
    }

    /// Returns `true` when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Many terminals emit both a Press and a Release event. Only act on Press/Repeat.
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Dialogs are modal: only dismissal is accepted while one is open.
        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dialog = None;
            }
            return false;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => return true,
                KeyCode::Char('d') => self.delete_transaction(),
                KeyCode::Char('s') => self.show_summary(),
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return false;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return false;
            }
            _ => {}
        }

        match self.focus {
            Focus::Type | Focus::Category | Focus::Amount | Focus::Date => match key.code {
                KeyCode::Enter => self.add_transaction(),
                KeyCode::Up => self.focus = self.focus.prev(),
                KeyCode::Down => self.focus = self.focus.next(),
                KeyCode::Backspace => {
                    if let Some(field) = self.field_mut(self.focus) {
                        field.pop();
                    }
                }
                KeyCode::Char(ch) => {
                    if let Some(field) = self.field_mut(self.focus) {
                        field.push(ch);
                    }
                }
                _ => {}
            },
            Focus::AddButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.add_transaction();
                }
            }
            Focus::List => {
                let page = max(1, self.last_page_size) as i32;
                match key.code {
                    KeyCode::Up => self.move_selection(-1),
                    KeyCode::Down => self.move_selection(1),
                    KeyCode::PageUp => self.move_selection(-page),
                    KeyCode::PageDown => self.move_selection(page),
                    KeyCode::Home => {
                        if !self.store.is_empty() {
                            self.list_state.select(Some(0));
                        }
                    }
                    KeyCode::End => {
                        if !self.store.is_empty() {
                            self.list_state.select(Some(self.store.len() - 1));
                        }
                    }
                    KeyCode::Delete => self.delete_transaction(),
                    KeyCode::Char(' ') => self.list_state.select(None),
                    _ => {}
                }
            }
            Focus::DeleteButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.delete_transaction();
                }
            }
            Focus::SummaryButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.show_summary();
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn press(state: &mut AppState, code: KeyCode) -> bool {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(state: &mut AppState, ch: char) -> bool {
        state.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(state, KeyCode::Char(ch));
        }
    }

    fn fill_form(state: &mut AppState, kind: &str, category: &str, amount: &str, date: &str) {
        state.focus = Focus::Type;
        type_text(state, kind);
        press(state, KeyCode::Tab);
        type_text(state, category);
        press(state, KeyCode::Tab);
        type_text(state, amount);
        press(state, KeyCode::Tab);
        type_text(state, date);
    }

    fn add(state: &mut AppState, kind: &str, category: &str, amount: &str, date: &str) {
        fill_form(state, kind, category, amount, date);
        press(state, KeyCode::Enter);
    }

    #[test]
    fn test_focus_ring_wraps() {
        assert_eq!(Focus::SummaryButton.next(), Focus::Type);
        assert_eq!(Focus::Type.prev(), Focus::SummaryButton);
        assert_eq!(Focus::Date.next(), Focus::AddButton);
        assert!(Focus::Amount.is_field());
        assert!(!Focus::List.is_field());
    }

    #[test]
    fn test_add_via_keyboard_clears_form() {
        let mut state = AppState::new();
        add(&mut state, "income", "Salary", "5000.0", "01-04-2024");

        assert_eq!(state.store.len(), 1);
        assert_eq!(
            state.store.lines(),
            vec!["income - Salary - ₹5000.0 on 01-04-2024".to_string()]
        );
        assert_eq!(state.form, TransactionForm::default());
        assert_eq!(state.dialog, None);
    }

    #[test]
    fn test_invalid_amount_keeps_form_and_opens_dialog() {
        let mut state = AppState::new();
        add(&mut state, "income", "Salary", "lots", "01-04-2024");

        assert!(state.store.is_empty());
        assert_eq!(state.form.amount, "lots");
        assert_eq!(state.form.category, "Salary");
        assert_eq!(state.dialog, Some(Dialog::Error(ActionError::InvalidAmount)));
    }

    #[test]
    fn test_invalid_date_keeps_form_and_opens_dialog() {
        let mut state = AppState::new();
        add(&mut state, "expense", "Food", "12", "2024-04-01");

        assert!(state.store.is_empty());
        assert_eq!(state.form.date, "2024-04-01");
        assert_eq!(state.dialog, Some(Dialog::Error(ActionError::InvalidDate)));
    }

    #[test]
    fn test_dialog_is_modal_until_dismissed() {
        let mut state = AppState::new();
        add(&mut state, "income", "Salary", "x", "01-04-2024");
        let form_before = state.form.clone();

        type_text(&mut state, "zz");
        assert!(!press(&mut state, KeyCode::Tab));
        assert!(!ctrl(&mut state, 'q'));
        assert_eq!(state.form, form_before);
        assert!(state.dialog.is_some());

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.dialog, None);
        assert_eq!(state.store.len(), 0);
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut state = AppState::new();
        state.focus = Focus::Amount;
        type_text(&mut state, "123");
        press(&mut state, KeyCode::Backspace);

        assert_eq!(state.form.amount, "12");
        assert_eq!(state.field(Focus::Amount), Some("12"));
        assert_eq!(state.field(Focus::List), None);
    }

    #[test]
    fn test_delete_without_selection_shows_error() {
        let mut state = AppState::new();
        add(&mut state, "income", "Salary", "10", "01-04-2024");

        ctrl(&mut state, 'd');
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.dialog, Some(Dialog::Error(ActionError::NothingSelected)));
    }

    #[test]
    fn test_delete_selected_row_from_list() {
        let mut state = AppState::new();
        add(&mut state, "income", "A", "1", "01-01-2024");
        add(&mut state, "income", "B", "2", "02-01-2024");
        add(&mut state, "income", "C", "3", "03-01-2024");

        state.focus = Focus::List;
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.selected_index(), Some(1));

        press(&mut state, KeyCode::Delete);
        assert_eq!(state.store.len(), 2);
        assert_eq!(state.store.get(0).unwrap().category(), "A");
        assert_eq!(state.store.get(1).unwrap().category(), "C");
        assert_eq!(state.selected_index(), None);
        assert_eq!(state.dialog, None);
    }

    #[test]
    fn test_delete_button_uses_list_selection() {
        let mut state = AppState::new();
        add(&mut state, "income", "A", "1", "01-01-2024");
        add(&mut state, "income", "B", "2", "02-01-2024");

        state.focus = Focus::List;
        press(&mut state, KeyCode::End);
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, Focus::DeleteButton);
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.store.lines().len(), 1);
        assert_eq!(state.store.get(0).unwrap().category(), "A");
    }

    #[test]
    fn test_home_and_end_select_absolute_rows() {
        let mut state = AppState::new();
        state.focus = Focus::List;
        press(&mut state, KeyCode::End);
        assert_eq!(state.selected_index(), None);

        add(&mut state, "income", "A", "1", "01-01-2024");
        add(&mut state, "income", "B", "2", "02-01-2024");
        add(&mut state, "income", "C", "3", "03-01-2024");
        state.focus = Focus::List;

        press(&mut state, KeyCode::End);
        assert_eq!(state.selected_index(), Some(2));
        press(&mut state, KeyCode::Home);
        assert_eq!(state.selected_index(), Some(0));

        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Home);
        assert_eq!(state.selected_index(), Some(0));

        press(&mut state, KeyCode::End);
        press(&mut state, KeyCode::Delete);
        assert_eq!(state.store.lines().len(), 2);
        assert_eq!(state.store.get(1).unwrap().category(), "B");
    }

    #[test]
    fn test_list_selection_clamps_and_clears() {
        let mut state = AppState::new();
        state.focus = Focus::List;
        press(&mut state, KeyCode::Down);
        assert_eq!(state.selected_index(), None);

        add(&mut state, "income", "A", "1", "01-01-2024");
        add(&mut state, "income", "B", "2", "02-01-2024");
        state.focus = Focus::List;

        press(&mut state, KeyCode::Up);
        assert_eq!(state.selected_index(), Some(1));
        press(&mut state, KeyCode::PageDown);
        assert_eq!(state.selected_index(), Some(1));
        press(&mut state, KeyCode::Home);
        assert_eq!(state.selected_index(), Some(0));
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn test_summary_dialog_scenario() {
        let mut state = AppState::new();
        add(&mut state, "income", "Job", "1000", "01-01-2024");
        add(&mut state, "expense", "Rent", "400", "02-01-2024");
        add(&mut state, "expense", "Food", "100", "03-01-2024");

        state.focus = Focus::SummaryButton;
        press(&mut state, KeyCode::Enter);

        assert_eq!(
            state.dialog,
            Some(Dialog::Summary(Summary::new(
                Decimal::new(1000, 0),
                Decimal::new(500, 0)
            )))
        );
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.dialog, None);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::new();
        assert!(press(&mut state, KeyCode::Esc));
        assert!(ctrl(&mut state, 'q'));
        assert!(ctrl(&mut state, 'c'));
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert_eq!(state.form.kind, "q");
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = AppState::new();
        let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        assert!(!state.handle_key(release));
        assert_eq!(state.form.kind, "");
    }
}
