use super::*;
use ratatui::widgets::{Cell, Row, Table, TableState};

pub fn render_table_view(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));

    if app.entries().is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No study logs yet. Press A to add one.",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![Cell::from("Title"), Cell::from("Hours")]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.entries().iter().map(|entry| {
        Row::new(vec![
            Cell::from(entry.title.as_str()),
            Cell::from(entry.hours.to_string()),
        ])
        .style(Style::default().fg(Color::White))
    });

    let table = Table::new(rows, [Constraint::Min(10), Constraint::Length(6)])
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}
