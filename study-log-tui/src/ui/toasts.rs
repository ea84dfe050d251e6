use super::*;
use crate::notify::{NotificationKind, ToastQueue};

pub fn height(toasts: &ToastQueue) -> u16 {
    if toasts.is_empty() {
        0
    } else {
        toasts.len() as u16 + 2
    }
}

pub fn render_toasts(frame: &mut Frame, toasts: &ToastQueue, area: Rect) {
    if toasts.is_empty() {
        return;
    }

    let lines: Vec<Line> = toasts
        .visible()
        .map(|toast| {
            let n = &toast.notification;
            let (symbol, color) = match n.kind {
                NotificationKind::Success => ("✔", Color::Green),
                NotificationKind::Error => ("✖", Color::Red),
                NotificationKind::Warning => ("!", Color::Yellow),
                NotificationKind::Info => ("i", Color::Cyan),
            };
            let mut spans = vec![
                Span::styled(format!("{symbol} "), Style::default().fg(color)),
                Span::styled(n.description.clone(), Style::default().fg(Color::White)),
            ];
            if n.closable {
                spans.push(Span::styled("  [x]", Style::default().fg(Color::DarkGray)));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}
