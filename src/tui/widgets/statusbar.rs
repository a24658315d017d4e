use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{Language, ViewMode};
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, lang: Language, view: ViewMode) {
    let labels = lang.labels();
    let all_label = if view == ViewMode::All {
        labels.show_today
    } else {
        labels.see_all
    };

    let mut hints = vec![
        ("[l]", format!(" {}  ", labels.switch_to)),
        ("[t]", format!(" {}  ", labels.today)),
        ("[a]", format!(" {}  ", all_label)),
        ("[m]", format!(" {}  ", labels.month)),
        ("[r]", format!(" {}  ", labels.ramadan)),
    ];
    if view == ViewMode::Month {
        hints.push(("[← →]", " ±1  ".to_string()));
    }
    if view != ViewMode::Today {
        hints.push(("[↑ ↓]", " scroll  ".to_string()));
    }
    hints.push(("[q]", " quit".to_string()));

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(key, theme::gold()));
        spans.push(Span::styled(label, theme::dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
