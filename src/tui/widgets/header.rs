use chrono::NaiveDateTime;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Language;
use crate::tui::theme;
use crate::utils::format::format_month_day;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    lang: Language,
    now: NaiveDateTime,
    today_key: &str,
    hijri_str: Option<&str>,
) {
    let labels = lang.labels();
    let gregorian_str = now.format("%A, %b %d, %Y").to_string();

    let title_line = Line::from(vec![
        Span::styled("🕌  ", theme::gold()),
        Span::styled(labels.title, theme::gold().add_modifier(Modifier::BOLD)),
    ]);

    let mut date_spans = vec![
        Span::styled(
            format!("📅 {} - {}", labels.today, format_month_day(today_key, lang)),
            theme::amber(),
        ),
        Span::styled("  ·  ", theme::dim()),
    ];
    if let Some(hijri) = hijri_str {
        date_spans.push(Span::styled(hijri.to_string(), theme::amber()));
        date_spans.push(Span::styled("  ·  ", theme::dim()));
    }
    date_spans.push(Span::styled(gregorian_str, theme::dim()));

    let text = vec![title_line, Line::from(""), Line::from(date_spans)];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
