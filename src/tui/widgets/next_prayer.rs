use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Language;
use crate::prayer_times::ResolvedNextPrayer;
use crate::tui::theme;
use crate::utils::format::describe_next;

pub fn render(frame: &mut Frame, area: Rect, next: Option<&ResolvedNextPrayer>, lang: Language) {
    let labels = lang.labels();
    let block = Block::default()
        .title(Span::styled(format!(" ⏰ {} ", labels.next_prayer), theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let (name, remaining) = describe_next(next, lang);
    let remaining = if remaining.is_empty() {
        labels.placeholder.to_string()
    } else {
        remaining
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            name,
            theme::gold().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(labels.remaining, theme::dim())),
        Line::from(Span::styled(
            remaining,
            theme::amber().add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
