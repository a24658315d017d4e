use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
    Frame,
};

use crate::models::{DailySchedule, HourCycle, Language, Slot};
use crate::tui::theme;
use crate::utils::format::{format_month_day, format_slot_time};

/// Rows that fit in `area` once borders and the header are drawn.
pub fn visible_rows(area: Rect) -> usize {
    area.height.saturating_sub(3) as usize
}

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    days: &[&DailySchedule],
    today_key: &str,
    scroll: usize,
    lang: Language,
    cycle: HourCycle,
) {
    let labels = lang.labels();

    let mut header_cells = vec![Cell::from(labels.date)];
    header_cells.extend(Slot::ALL.iter().map(|s| Cell::from(s.display_name(lang))));
    let header = Row::new(header_cells).style(theme::gold());

    let rows: Vec<Row> = days
        .iter()
        .skip(scroll)
        .take(visible_rows(area))
        .map(|day| {
            let mut cells = vec![Cell::from(format_month_day(&day.date, lang))];
            cells.extend(
                Slot::ALL
                    .iter()
                    .map(|s| Cell::from(format_slot_time(day.time(*s), lang, cycle))),
            );
            let row = Row::new(cells);
            if day.date == today_key {
                row.style(theme::today_row())
            } else {
                row.style(theme::bold())
            }
        })
        .collect();

    let widths = [Constraint::Length(8)]
        .into_iter()
        .chain(std::iter::repeat(Constraint::Min(10)).take(Slot::ALL.len()));

    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
