use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};

use super::action_queue::{channel, Action, ActionRx};
use super::actions::run_action;
use super::views::handle_view_key;

const TICK: Duration = Duration::from_millis(100);

pub async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let (action_tx, mut action_rx) = channel();
    let _ = action_tx.send(Action::Activate);
    // The table is never drawn before the initial load has finished.
    drain_actions(terminal, app, &mut action_rx).await?;

    loop {
        app.toasts.expire(Instant::now());
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        drain_actions(terminal, app, &mut action_rx).await?;

        if !app.running {
            break;
        }
    }

    Ok(())
}

async fn drain_actions<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    action_rx: &mut ActionRx,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    while let Ok(action) = action_rx.try_recv() {
        run_with_throbber(terminal, app, action).await?;
        app.clamp_selection();
    }
    Ok(())
}

/// Drive one action to completion, redrawing the loading screen meanwhile.
async fn run_with_throbber<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    action: Action,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let App {
        store,
        toasts,
        throbber_state,
        ..
    } = app;
    let loading = store.loading_flag();

    let work = run_action(action, store, toasts);
    tokio::pin!(work);
    let mut ticker = tokio::time::interval(TICK);

    loop {
        tokio::select! {
            () = &mut work => return Ok(()),
            _ = ticker.tick() => {
                if loading.get() {
                    throbber_state.calc_next();
                    terminal.draw(|f| ui::render_loading(f, throbber_state))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app::loaded_app;
    use crate::config::StudyLogConfig;
    use crate::store::test_support::{two_row_seed, Call, RecordingGateway};
    use ratatui::backend::TestBackend;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn queued_actions_run_in_order_and_clamp_selection() {
        let (mut app, gateway) = loaded_app().await;
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        app.select_next();
        let (tx, mut rx) = channel();
        tx.send(Action::Delete(2)).unwrap();
        tx.send(Action::Refresh).unwrap();

        drain_actions(&mut terminal, &mut app, &mut rx).await.unwrap();

        assert!(rx.try_recv().is_err());
        assert_eq!(gateway.count(|c| *c == Call::Delete(2)), 1);
        assert_eq!(app.entries().len(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[tokio::test]
    async fn first_table_frame_shows_loaded_rows() {
        let gateway = RecordingGateway::seeded(two_row_seed());
        let mut app = App::new(Box::new(gateway.clone()), &StudyLogConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let (tx, mut rx) = channel();
        tx.send(Action::Activate).unwrap();

        drain_actions(&mut terminal, &mut app, &mut rx).await.unwrap();
        terminal.draw(|f| ui::render(f, &mut app)).unwrap();

        let screen = screen(&terminal);
        assert_eq!(gateway.calls(), vec![Call::ListAll]);
        assert!(screen.contains("title1"), "{screen}");
        assert!(!screen.contains("No study logs yet"));
    }
}
