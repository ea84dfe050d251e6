use crate::api::StudyLogGateway;
use crate::config::StudyLogConfig;
use crate::notify::ToastQueue;
use crate::store::StudyLogStore;
use crate::types::StudyLogEntry;

mod form;
mod state;
pub use form::{EntryForm, FormSubmission};
pub use state::{FormField, TextInput, View};

pub type Store = StudyLogStore<Box<dyn StudyLogGateway>>;

pub struct App {
    pub running: bool,
    pub current_view: View,

    // Remote snapshot and the in-flight flag
    pub store: Store,

    // Table selection
    pub selected_index: usize,

    // Create/edit modal, `Some` while open
    pub modal: Option<EntryForm>,

    pub toasts: ToastQueue,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
    pub goal_hours: i64,
}

impl App {
    pub fn new(gateway: Box<dyn StudyLogGateway>, cfg: &StudyLogConfig) -> Self {
        Self {
            running: true,
            current_view: View::Table,
            store: StudyLogStore::new(gateway),
            selected_index: 0,
            modal: None,
            toasts: ToastQueue::default(),
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            goal_hours: cfg.goal_hours,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn entries(&self) -> &[StudyLogEntry] {
        self.store.entries()
    }

    pub fn selected_entry(&self) -> Option<&StudyLogEntry> {
        self.entries().get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.entries().len() {
            self.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Keep the selection on a row after the snapshot shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.entries().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Open the modal in create mode with blank values.
    pub fn open_create_modal(&mut self) {
        self.modal = Some(EntryForm::open_create());
        self.current_view = View::Modal;
    }

    /// Open the modal in update mode for the selected row. No-op without one.
    pub fn open_update_modal(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        self.modal = Some(EntryForm::open_update(entry));
        self.current_view = View::Modal;
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.current_view = View::Table;
    }
}

#[cfg(test)]
pub(crate) mod test_app {
    use super::*;
    use crate::store::test_support::{two_row_seed, RecordingGateway};

    /// App over the two-row seed, already loaded.
    pub async fn loaded_app() -> (App, RecordingGateway) {
        let gateway = RecordingGateway::seeded(two_row_seed());
        let mut app = App::new(Box::new(gateway.clone()), &StudyLogConfig::default());
        app.store.activate().await.unwrap();
        (app, gateway)
    }
}

#[cfg(test)]
mod tests {
    use super::test_app::loaded_app;
    use super::form::FormMode;
    use super::*;

    #[tokio::test]
    async fn update_modal_prefills_selected_row() {
        let (mut app, _gateway) = loaded_app().await;
        app.select_next();
        app.open_update_modal();

        let form = app.modal.as_ref().unwrap();
        assert_eq!(app.current_view, View::Modal);
        assert_eq!(form.mode(), FormMode::Update { id: 2 });
        assert_eq!(form.title.value, "title2");
        assert_eq!(form.hours.value, "2");
    }

    #[tokio::test]
    async fn reopening_update_modal_gives_same_values() {
        let (mut app, _gateway) = loaded_app().await;
        app.open_update_modal();
        let first = app.modal.as_ref().unwrap().fields();
        app.close_modal();
        app.open_update_modal();
        let second = app.modal.as_ref().unwrap().fields();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn reopening_create_modal_resets_fields() {
        let (mut app, _gateway) = loaded_app().await;
        app.open_create_modal();
        app.modal
            .as_mut()
            .unwrap()
            .set_field(FormField::Title, "Draft");
        app.close_modal();
        app.open_create_modal();

        assert_eq!(app.modal.as_ref().unwrap().title.value, "");
    }

    #[tokio::test]
    async fn selection_stays_in_bounds() {
        let (mut app, _gateway) = loaded_app().await;
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_index, 1);

        app.store.remove(2).await.unwrap();
        app.clamp_selection();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn update_modal_needs_a_selection() {
        let gateway = crate::api::DevBackend::with_entries(vec![]);
        let mut app = App::new(Box::new(gateway), &StudyLogConfig::default());
        app.open_update_modal();
        assert!(app.modal.is_none());
        assert_eq!(app.current_view, View::Table);
    }
}
