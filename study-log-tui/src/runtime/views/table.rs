use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_table_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_create_modal(),
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => app.open_update_modal(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            if let Some(entry) = app.selected_entry() {
                enqueue_action(action_tx, Action::Delete(entry.id));
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => enqueue_action(action_tx, Action::Refresh),
        KeyCode::Char('x') | KeyCode::Char('X') => app.toasts.dismiss_latest(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app::loaded_app;
    use crate::app::View;
    use crossterm::event::KeyModifiers;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn delete_queues_selected_id() {
        let (mut app, _gateway) = loaded_app().await;
        let (tx, mut rx) = channel();

        handle_table_key(key(KeyCode::Char('d')), &mut app, &tx);

        assert_eq!(rx.try_recv().ok(), Some(Action::Delete(1)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn enter_opens_edit_modal() {
        let (mut app, _gateway) = loaded_app().await;
        let (tx, _rx) = channel();

        handle_table_key(key(KeyCode::Down), &mut app, &tx);
        handle_table_key(key(KeyCode::Enter), &mut app, &tx);

        assert_eq!(app.current_view, View::Modal);
        assert_eq!(app.modal.as_ref().unwrap().title.value, "title2");
    }

    #[tokio::test]
    async fn q_quits() {
        let (mut app, _gateway) = loaded_app().await;
        let (tx, _rx) = channel();

        handle_table_key(key(KeyCode::Char('q')), &mut app, &tx);

        assert!(!app.running);
    }
}
