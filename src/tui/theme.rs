use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};

use crate::models::Language;

pub const BG: Color = Color::Rgb(14, 18, 32);
pub const SURFACE: Color = Color::Rgb(22, 28, 48);
pub const BORDER: Color = Color::Rgb(48, 58, 92);
pub const TEXT: Color = Color::Rgb(226, 230, 240);
pub const TEXT_DIM: Color = Color::Rgb(118, 126, 150);
pub const GOLD: Color = Color::Rgb(212, 175, 55);
pub const AMBER: Color = Color::Rgb(230, 150, 70);
pub const TODAY_ROW: Color = Color::Rgb(40, 52, 88);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn today_row() -> Style {
    Style::default().fg(GOLD).bg(TODAY_ROW).add_modifier(Modifier::BOLD)
}

/// Kurdish reads right to left.
pub fn text_alignment(lang: Language) -> Alignment {
    if lang.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}
