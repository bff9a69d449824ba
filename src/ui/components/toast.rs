//! Status banner overlay.
//!
//! Drawn in the bottom-right corner on top of the table while a
//! notification is visible. Success messages (prefixed `[+]`) render green.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::SUCCESS_COLOR;

const MIN_TOAST_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;
/// Gap kept between the banner and the right/bottom edges.
const TOAST_MARGIN: u16 = 2;
/// Borders plus one column of padding on each side.
const TOAST_WIDTH_PADDING: u16 = 4;

/// Render `message` as a banner in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);
    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(message_color(message)))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(
            Style::default()
                .fg(message_color(message))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(text, toast_area);
}

fn toast_area(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let height = TOAST_HEIGHT.min(area.height);

    let x = area.x + area.width.saturating_sub(width + TOAST_MARGIN);
    let y = area.y + area.height.saturating_sub(height + TOAST_MARGIN);

    Rect::new(x, y, width, height)
}

fn message_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else {
        Color::White
    }
}
