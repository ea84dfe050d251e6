use super::utils::centered_rect;
use super::*;
use crate::app::{EntryForm, FormField, TextInput};

pub fn render_entry_modal(frame: &mut Frame, form: &EntryForm) {
    let area = centered_rect(56, 13, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for field in [FormField::Title, FormField::Hours] {
        let input = match field {
            FormField::Title => &form.title,
            FormField::Hours => &form.hours,
        };
        lines.push(field_line(field, input, form.focused_field() == field));
        lines.push(match form.visible_error(field) {
            Some(err) => Line::from(Span::styled(
                format!("  {}", err.message()),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(""),
        });
    }

    let button_style = if form.can_submit() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(format!(" {} ", form.submit_label()), button_style))
            .alignment(Alignment::Center),
    );

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(Span::styled(
                format!(" {} ", form.heading()),
                Style::default().fg(Color::Blue),
            ))
            .padding(Padding::horizontal(2)),
    );

    frame.render_widget(paragraph, area);
}

fn field_line(field: FormField, input: &TextInput, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = Style::default().fg(Color::White);

    let mut spans = vec![Span::styled(format!("{:<7}", field.label()), label_style)];
    if focused {
        let (before, after) = input.split_at_cursor();
        spans.push(Span::styled(before.to_string(), value_style));
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(after.to_string(), value_style));
    } else {
        spans.push(Span::styled(input.value.clone(), value_style));
    }
    Line::from(spans)
}
