use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

mod entry_modal;
mod table_view;
mod toasts;
pub(super) mod utils;

const HEADING: &str = " ✰ Study Log ✍ ";

pub fn render(frame: &mut Frame, app: &mut App) {
    if app.store.is_loading() {
        render_loading(frame, &mut app.throbber_state);
        return;
    }

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(toasts::height(&app.toasts)),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, app, root[0]);
    table_view::render_table_view(frame, app, root[1]);
    toasts::render_toasts(frame, &app.toasts, root[2]);
    render_controls(frame, app.current_view, root[3]);

    if app.current_view == View::Modal {
        if let Some(form) = &app.modal {
            entry_modal::render_entry_modal(frame, form);
        }
    }
}

/// Full-screen busy indicator shown while the store talks to the backend.
pub fn render_loading(frame: &mut Frame, throbber_state: &mut throbber_widgets_tui::ThrobberState) {
    let area = utils::centered_rect(20, 3, frame.area());
    frame.render_widget(Clear, area);

    let throbber = throbber_widgets_tui::Throbber::default()
        .label("Loading...")
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(throbber_widgets_tui::WhichUse::Spin);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_stateful_widget(throbber, inner, throbber_state);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let total = Line::from(vec![
        Span::styled("Total: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} / {} (H)", app.store.total_hours(), app.goal_hours),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let header = Paragraph::new(total).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Blue))
            .title(Span::styled(
                HEADING,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(header, area);
}

fn render_controls(frame: &mut Frame, view: View, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let controls_text = match view {
        View::Table => vec![
            key("↑↓"),
            Span::raw(": Navigate  "),
            key("A"),
            Span::raw(": Add study log  "),
            key("E/Enter"),
            Span::raw(": Edit  "),
            key("D"),
            Span::raw(": Delete  "),
            key("R"),
            Span::raw(": Refresh  "),
            key("Q"),
            Span::raw(": Quit"),
        ],
        View::Modal => vec![
            key("Tab"),
            Span::raw(": Next field  "),
            key("Ctrl+U"),
            Span::raw(": Clear field  "),
            key("Enter"),
            Span::raw(": Submit  "),
            key("Esc"),
            Span::raw(": Close"),
        ],
    };

    let controls = Paragraph::new(Line::from(controls_text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(controls, area);
}
