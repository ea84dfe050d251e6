use crate::app::{App, FormSubmission};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_modal_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(form) = app.modal.as_mut() else {
        app.close_modal();
        return;
    };

    match key.code {
        KeyCode::Esc => app.close_modal(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => form.focus_next(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.clear_focused();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.input_char(c);
        }
        KeyCode::Backspace => form.backspace(),
        KeyCode::Left => form.move_left(),
        KeyCode::Right => form.move_right(),
        KeyCode::Home => form.home(),
        KeyCode::End => form.end(),
        KeyCode::Enter => {
            // Closed gate (invalid, or an unchanged update) means nothing to send.
            let Some(submission) = form.submit() else {
                return;
            };
            app.close_modal();
            let action = match submission {
                FormSubmission::Create(input) => Action::Create(input),
                FormSubmission::Update { id, input } => Action::Update { id, input },
            };
            enqueue_action(action_tx, action);
        }
        _ => {}
    }
}
