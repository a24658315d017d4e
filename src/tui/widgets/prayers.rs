use chrono::NaiveDateTime;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{DailySchedule, HourCycle, Language};
use crate::prayer_times::{ResolvedNextPrayer, TargetDay};
use crate::tui::theme;
use crate::utils::format::{format_clock_time, pad_display};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    today: Option<&DailySchedule>,
    next: Option<&ResolvedNextPrayer>,
    now: NaiveDateTime,
    lang: Language,
    cycle: HourCycle,
) {
    let labels = lang.labels();
    let block = Block::default()
        .title(Span::styled(format!(" {} ", labels.today), theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let Some(today) = today else {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {}", labels.no_today), theme::dim())),
        ])
        .block(block)
        .alignment(theme::text_alignment(lang));
        frame.render_widget(empty, area);
        return;
    };

    let upcoming = next
        .filter(|n| n.day == TargetDay::Today)
        .map(|n| n.slot);

    let mut lines = vec![Line::from("")];
    for (slot, time) in today.slots() {
        let is_next = upcoming == Some(slot);
        let passed = now.date().and_time(time) <= now;

        let (marker, name_style, time_style) = if is_next {
            ("▶", theme::gold().add_modifier(Modifier::BOLD), theme::amber().add_modifier(Modifier::BOLD))
        } else if passed {
            (" ", theme::dim(), theme::dim())
        } else {
            (" ", theme::bold(), theme::bold())
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), theme::gold()),
            Span::raw(format!("{}  ", slot.icon())),
            Span::styled(pad_display(slot.display_name(lang), 12), name_style),
            Span::styled(format_clock_time(time, lang, cycle), time_style),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(theme::text_alignment(lang));
    frame.render_widget(paragraph, area);
}
