//! Create/edit form for a study log.
//!
//! Validation is a pure function over the raw field text and runs after every
//! edit. The form keeps the values it was last reset to so it can tell whether
//! the user changed anything.

use regex::Regex;
use std::sync::LazyLock;

use super::state::{FormField, TextInput};
use crate::types::{StudyLogEntry, StudyLogInput};

pub const MIN_HOURS: f64 = 1.0;
pub const MAX_HOURS: f64 = 99.0;
pub const DEFAULT_HOURS: i32 = 1;

static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("title pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    TitleRequired,
    TitleLettersOnly,
    HoursRequired,
    HoursOutOfRange,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::TitleRequired => "title is required",
            FieldError::TitleLettersOnly => "Please enter letters only.",
            FieldError::HoursRequired => "hours is required",
            FieldError::HoursOutOfRange => "Hours must be between 1 and 99.",
        }
    }
}

/// Raw form values, exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    pub title: String,
    pub hours: String,
}

impl FormFields {
    pub fn new(title: impl Into<String>, hours: impl ToString) -> Self {
        Self {
            title: title.into(),
            hours: hours.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validation {
    pub title: Option<FieldError>,
    pub hours: Option<FieldError>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.title.is_none() && self.hours.is_none()
    }

    pub fn error(&self, field: FormField) -> Option<FieldError> {
        match field {
            FormField::Title => self.title,
            FormField::Hours => self.hours,
        }
    }
}

pub fn validate(fields: &FormFields) -> Validation {
    Validation {
        title: validate_title(&fields.title),
        hours: validate_hours(&fields.hours),
    }
}

fn validate_title(title: &str) -> Option<FieldError> {
    if title.is_empty() {
        Some(FieldError::TitleRequired)
    } else if !TITLE_PATTERN.is_match(title) {
        Some(FieldError::TitleLettersOnly)
    } else {
        None
    }
}

fn validate_hours(raw: &str) -> Option<FieldError> {
    match parse_hours(raw) {
        None => Some(FieldError::HoursRequired),
        // Stored as an integer column, so fractions count as out of range.
        Some(hours) if !(MIN_HOURS..=MAX_HOURS).contains(&hours) || hours.fract() != 0.0 => {
            Some(FieldError::HoursOutOfRange)
        }
        Some(_) => None,
    }
}

/// Numeric coercion of the hours field. Blank or non-numeric text is `None`.
pub fn parse_hours(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|h| h.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update { id: i64 },
}

/// What a successful submit asks the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum FormSubmission {
    Create(StudyLogInput),
    Update { id: i64, input: StudyLogInput },
}

#[derive(Debug, Clone)]
pub struct EntryForm {
    mode: FormMode,
    pub title: TextInput,
    pub hours: TextInput,
    focused: FormField,
    baseline: FormFields,
    title_touched: bool,
    hours_touched: bool,
    validation: Validation,
}

impl EntryForm {
    /// Blank form for a new entry.
    pub fn open_create() -> Self {
        Self::with_baseline(FormMode::Create, FormFields::new("", DEFAULT_HOURS))
    }

    /// Form prefilled with the selected entry.
    pub fn open_update(entry: &StudyLogEntry) -> Self {
        Self::with_baseline(
            FormMode::Update { id: entry.id },
            FormFields::new(entry.title.clone(), entry.hours),
        )
    }

    fn with_baseline(mode: FormMode, baseline: FormFields) -> Self {
        let mut form = Self {
            mode,
            title: TextInput::default(),
            hours: TextInput::default(),
            focused: FormField::Title,
            baseline: baseline.clone(),
            title_touched: false,
            hours_touched: false,
            validation: Validation::default(),
        };
        form.reset(baseline);
        form
    }

    /// Replace the values and make them the new clean baseline.
    pub fn reset(&mut self, fields: FormFields) {
        self.title = TextInput::from_str(&fields.title);
        self.hours = TextInput::from_str(&fields.hours);
        self.baseline = fields;
        self.title_touched = false;
        self.hours_touched = false;
        self.focused = FormField::Title;
        self.revalidate();
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add study log",
            FormMode::Update { .. } => "Edit study log",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create",
            FormMode::Update { .. } => "Update",
        }
    }

    pub fn fields(&self) -> FormFields {
        FormFields {
            title: self.title.value.clone(),
            hours: self.hours.value.clone(),
        }
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    pub fn is_dirty(&self) -> bool {
        self.title.value != self.baseline.title
            || parse_hours(&self.hours.value) != parse_hours(&self.baseline.hours)
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        match self.mode {
            FormMode::Create => self.is_valid(),
            FormMode::Update { .. } => self.is_valid() && self.is_dirty(),
        }
    }

    /// Error to show under a field. Untouched fields stay quiet even if invalid.
    pub fn visible_error(&self, field: FormField) -> Option<FieldError> {
        let touched = match field {
            FormField::Title => self.title_touched,
            FormField::Hours => self.hours_touched,
        };
        if touched {
            self.validation.error(field)
        } else {
            None
        }
    }

    /// Returns the request to send, or `None` while the gate is closed.
    pub fn submit(&self) -> Option<FormSubmission> {
        if !self.can_submit() {
            return None;
        }
        let hours = parse_hours(&self.hours.value)? as i32;
        let input = StudyLogInput::new(self.title.value.clone(), hours);
        Some(match self.mode {
            FormMode::Create => FormSubmission::Create(input),
            FormMode::Update { id } => FormSubmission::Update { id, input },
        })
    }

    pub fn focused_field(&self) -> FormField {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn input_char(&mut self, c: char) {
        self.edit_focused(|input| input.insert(c));
    }

    pub fn backspace(&mut self) {
        self.edit_focused(TextInput::backspace);
    }

    pub fn clear_focused(&mut self) {
        self.edit_focused(TextInput::clear);
    }

    pub fn move_left(&mut self) {
        self.focused_input().move_left();
    }

    pub fn move_right(&mut self) {
        self.focused_input().move_right();
    }

    pub fn home(&mut self) {
        self.focused_input().home();
    }

    pub fn end(&mut self) {
        self.focused_input().end();
    }

    /// Overwrite one field, as if the user cleared it and typed `value`.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        self.focused = field;
        self.edit_focused(|input| *input = TextInput::from_str(value));
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focused {
            FormField::Title => &mut self.title,
            FormField::Hours => &mut self.hours,
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let before = self.focused_input().value.clone();
        edit(self.focused_input());
        if self.focused_input().value != before {
            match self.focused {
                FormField::Title => self.title_touched = true,
                FormField::Hours => self.hours_touched = true,
            }
        }
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.validation = validate(&self.fields());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn entry() -> StudyLogEntry {
        StudyLogEntry {
            id: 1,
            title: "Test Test".to_string(),
            hours: 4,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn type_into(form: &mut EntryForm, field: FormField, text: &str) {
        if form.focused_field() != field {
            form.focus_next();
        }
        for c in text.chars() {
            form.input_char(c);
        }
    }

    #[test]
    fn valid_pairs_pass() {
        for (title, hours) in [("Math", "1"), ("Test Test", "3"), ("a", "99"), ("ABC def", "50")] {
            let result = validate(&FormFields::new(title, hours));
            assert!(result.is_valid(), "{title:?}/{hours:?} should be valid");
        }
    }

    #[test]
    fn title_errors() {
        assert_eq!(
            validate(&FormFields::new("", "1")).title,
            Some(FieldError::TitleRequired)
        );
        for title in [
            "111",
            "Math1",
            "C++",
            "naïve",
            "tab\tbed",
            "\u{017F}",
            "\u{212A}elvin",
        ] {
            assert_eq!(
                validate(&FormFields::new(title, "1")).title,
                Some(FieldError::TitleLettersOnly),
                "{title:?}"
            );
        }
    }

    #[test]
    fn hours_errors() {
        for raw in ["0", "100", "-3", "2.5"] {
            assert_eq!(
                validate(&FormFields::new("Math", raw)).hours,
                Some(FieldError::HoursOutOfRange),
                "{raw:?}"
            );
        }
        for raw in ["", "aaa", "  "] {
            assert_eq!(
                validate(&FormFields::new("Math", raw)).hours,
                Some(FieldError::HoursRequired),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(
            FieldError::TitleLettersOnly.message(),
            "Please enter letters only."
        );
        assert_eq!(
            FieldError::HoursOutOfRange.message(),
            "Hours must be between 1 and 99."
        );
        assert_eq!(FieldError::HoursRequired.message(), "hours is required");
        assert_eq!(FieldError::TitleRequired.message(), "title is required");
    }

    #[test]
    fn create_starts_blank_and_closed() {
        let form = EntryForm::open_create();
        assert_eq!(form.fields(), FormFields::new("", "1"));
        assert_eq!(form.heading(), "Add study log");
        assert!(!form.can_submit());
        assert_eq!(form.visible_error(FormField::Title), None);
        assert!(form.submit().is_none());
    }

    #[test]
    fn create_submits_typed_values() {
        let mut form = EntryForm::open_create();
        type_into(&mut form, FormField::Title, "Test Test");
        form.set_field(FormField::Hours, "3");

        assert!(form.can_submit());
        assert_eq!(
            form.submit(),
            Some(FormSubmission::Create(StudyLogInput::new("Test Test", 3)))
        );
    }

    #[test]
    fn digits_in_title_keep_submit_disabled() {
        let mut form = EntryForm::open_create();
        type_into(&mut form, FormField::Title, "111");
        form.set_field(FormField::Hours, "5");

        assert_eq!(
            form.visible_error(FormField::Title).map(FieldError::message),
            Some("Please enter letters only.")
        );
        assert_eq!(form.validation().hours, None);
        assert!(!form.can_submit());
    }

    #[test]
    fn hours_error_shows_after_edit() {
        let mut form = EntryForm::open_create();
        form.set_field(FormField::Hours, "100");
        assert_eq!(
            form.visible_error(FormField::Hours),
            Some(FieldError::HoursOutOfRange)
        );

        form.set_field(FormField::Hours, "aaa");
        assert_eq!(
            form.visible_error(FormField::Hours),
            Some(FieldError::HoursRequired)
        );
    }

    #[test]
    fn update_prefills_and_is_idempotent() {
        let first = EntryForm::open_update(&entry());
        let second = EntryForm::open_update(&entry());

        assert_eq!(first.fields(), FormFields::new("Test Test", "4"));
        assert_eq!(first.fields(), second.fields());
        assert_eq!(first.mode(), FormMode::Update { id: 1 });
        assert_eq!(first.submit_label(), "Update");
    }

    #[test]
    fn update_without_changes_does_not_submit() {
        let form = EntryForm::open_update(&entry());
        assert!(form.is_valid());
        assert!(!form.is_dirty());
        assert!(!form.can_submit());
        assert!(form.submit().is_none());
    }

    #[test]
    fn retyping_the_same_values_is_not_dirty() {
        let mut form = EntryForm::open_update(&entry());
        form.set_field(FormField::Title, "Test Test");
        form.set_field(FormField::Hours, "04");
        assert!(!form.is_dirty());
        assert!(form.submit().is_none());
    }

    #[test]
    fn update_submits_changed_values() {
        let mut form = EntryForm::open_update(&entry());
        form.set_field(FormField::Title, "Edited title");
        form.set_field(FormField::Hours, "4");

        assert_eq!(
            form.submit(),
            Some(FormSubmission::Update {
                id: 1,
                input: StudyLogInput::new("Edited title", 4),
            })
        );
    }

    #[test]
    fn reset_clears_dirty_and_touched() {
        let mut form = EntryForm::open_create();
        form.set_field(FormField::Title, "111");
        form.reset(FormFields::new("", 1));

        assert!(!form.is_dirty());
        assert_eq!(form.visible_error(FormField::Title), None);
        assert_eq!(form.focused_field(), FormField::Title);
    }

    #[test]
    fn backspace_to_empty_requires_title() {
        let mut form = EntryForm::open_update(&entry());
        for _ in 0.."Test Test".len() {
            form.backspace();
        }
        assert_eq!(
            form.visible_error(FormField::Title),
            Some(FieldError::TitleRequired)
        );
        assert!(!form.can_submit());
    }
}
