use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A `width` x `height` rectangle centered in `r`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}
