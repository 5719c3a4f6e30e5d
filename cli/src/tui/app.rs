use chrono::{Datelike, Duration, NaiveDate};
use ratatui::widgets::ListState;
use tracing::{error, warn};
use unicode_width::UnicodeWidthStr;
use worktrack_core::{
    normalize_requirement, validate_hours, CalendarMonth, Config, DateKey, Error, FileStore,
    Tracker,
};

pub enum InputMode {
    Normal,
    EditingEntry,
    Requirements,
    AddingRequirement,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Hours,
    Description,
}

/// Single-line text field with a char-indexed cursor.
#[derive(Default)]
pub struct TextInput {
    pub value: String,
    cursor: usize,
}

impl TextInput {
    pub fn set(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.value.chars().take(chars).map(|c| c.len_utf8()).sum()
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.byte_index(self.cursor);
        self.value.insert(byte_index, c);
        self.cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            let byte_index = self.byte_index(self.cursor - 1);
            self.value.remove(byte_index);
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Terminal columns between the start of the field and the cursor.
    pub fn cursor_column(&self) -> u16 {
        let width = self.value[..self.byte_index(self.cursor)].width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }
}

pub struct App {
    pub tracker: Tracker<FileStore>,
    pub today: NaiveDate,
    pub cursor_day: u32,
    pub input_mode: InputMode,
    pub focused_field: FormField,
    pub hours_input: TextInput,
    pub description_input: TextInput,
    pub requirement_input: TextInput,
    pub requirement_state: ListState,
    pub status_message: Option<String>,
    default_hours: Option<String>,
}

impl App {
    pub fn new(store: FileStore, config: Config, today: NaiveDate) -> Result<App, Error> {
        let tracker = Tracker::open(store, today)?;
        let mut requirement_state = ListState::default();
        if !tracker.requirements().is_empty() {
            requirement_state.select(Some(0));
        }
        Ok(App {
            tracker,
            today,
            cursor_day: today.day(),
            input_mode: InputMode::Normal,
            focused_field: FormField::Hours,
            hours_input: TextInput::default(),
            description_input: TextInput::default(),
            requirement_input: TextInput::default(),
            requirement_state,
            status_message: None,
            default_hours: config.default_hours,
        })
    }

    pub fn cursor_date(&self) -> Option<DateKey> {
        self.tracker.current_month().date_key(self.cursor_day)
    }

    // --- calendar navigation ---

    /// Moves the day cursor, following it into neighbouring months.
    pub fn move_days(&mut self, delta: i64) {
        let Some(current) = self.cursor_date() else { return };
        let Some(target) = current.date().checked_add_signed(Duration::days(delta)) else {
            return;
        };
        if !self.tracker.current_month().contains(&DateKey::new(target)) {
            self.tracker.set_month(CalendarMonth::new(target));
        }
        self.cursor_day = target.day();
    }

    pub fn change_month(&mut self, delta: i32) {
        self.tracker.change_month(delta);
        self.cursor_day = self.cursor_day.min(self.tracker.current_month().days_in_month());
    }

    pub fn jump_to_today(&mut self) {
        self.tracker.set_month(CalendarMonth::new(self.today));
        self.cursor_day = self.today.day();
    }

    // --- entry form ---

    pub fn open_form(&mut self) {
        let Some(date) = self.cursor_date() else { return };
        self.tracker.select_date(date);
        match self.tracker.form_defaults() {
            Some(entry) => {
                let (hours, description) = (entry.hours.clone(), entry.extra_work.clone());
                self.hours_input.set(&hours);
                self.description_input.set(&description);
            }
            None => {
                let hours = self.default_hours.clone().unwrap_or_default();
                self.hours_input.set(&hours);
                self.description_input.clear();
            }
        }
        self.focused_field = FormField::Hours;
        self.status_message = None;
        self.input_mode = InputMode::EditingEntry;
    }

    pub fn toggle_field(&mut self) {
        self.focused_field = match self.focused_field {
            FormField::Hours => FormField::Description,
            FormField::Description => FormField::Hours,
        };
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.input_mode {
            InputMode::AddingRequirement => &mut self.requirement_input,
            _ => match self.focused_field {
                FormField::Hours => &mut self.hours_input,
                FormField::Description => &mut self.description_input,
            },
        }
    }

    pub fn cancel_form(&mut self) {
        self.tracker.cancel();
        self.input_mode = InputMode::Normal;
    }

    pub fn submit_form(&mut self) {
        let hours = match validate_hours(&self.hours_input.value) {
            Ok(hours) => hours,
            Err(e) => {
                self.focused_field = FormField::Hours;
                self.status_message = Some(e.to_string());
                return;
            }
        };
        match self
            .tracker
            .submit_entry(&hours, &self.description_input.value)
        {
            Ok(date) => {
                self.status_message = Some(format!("Saved {} hrs for {}", hours, date));
            }
            Err(e) => {
                error!(error = %e, "failed to save entry");
                self.status_message = Some(format!("Could not save: {}", e));
            }
        }
        self.input_mode = InputMode::Normal;
    }

    // --- requirements ---

    pub fn focus_requirements(&mut self) {
        self.input_mode = InputMode::Requirements;
        if self.requirement_state.selected().is_none() && !self.tracker.requirements().is_empty() {
            self.requirement_state.select(Some(0));
        }
    }

    pub fn next_requirement(&mut self) {
        let len = self.tracker.requirements().len();
        if len == 0 {
            return;
        }
        let i = match self.requirement_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.requirement_state.select(Some(i));
    }

    pub fn previous_requirement(&mut self) {
        let len = self.tracker.requirements().len();
        if len == 0 {
            return;
        }
        let i = match self.requirement_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.requirement_state.select(Some(i));
    }

    pub fn remove_requirement(&mut self) {
        let Some(i) = self.requirement_state.selected() else { return };
        match self.tracker.remove_requirement(i) {
            Ok(removed) => self.status_message = Some(format!("Removed requirement: {}", removed)),
            Err(e) => {
                warn!(error = %e, "failed to remove requirement");
                self.status_message = Some(e.to_string());
            }
        }
        let len = self.tracker.requirements().len();
        if len == 0 {
            self.requirement_state.select(None);
        } else if i >= len {
            self.requirement_state.select(Some(len - 1));
        }
    }

    pub fn start_adding_requirement(&mut self) {
        self.requirement_input.clear();
        self.input_mode = InputMode::AddingRequirement;
    }

    pub fn submit_requirement(&mut self) {
        let result = normalize_requirement(&self.requirement_input.value)
            .and_then(|text| self.tracker.add_requirement(&text).map(|()| text));
        match result {
            Ok(text) => {
                self.status_message = Some(format!("Added requirement: {}", text));
                let last = self.tracker.requirements().len() - 1;
                self.requirement_state.select(Some(last));
            }
            // Blank input is simply dropped, like an empty form submit.
            Err(Error::EmptyRequirement) => {}
            Err(e) => {
                error!(error = %e, "failed to add requirement");
                self.status_message = Some(format!("Could not save: {}", e));
            }
        }
        self.requirement_input.clear();
        self.input_mode = InputMode::Requirements;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
