use anyhow::Result;
use chrono::{Datelike, Local, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    DefaultTerminal, Frame,
};
use std::time::Duration;

use crate::config::AppConfig;
use crate::models::{DailySchedule, Language, ViewMode, month_day_key};
use crate::prayer_times::{ResolvedNextPrayer, month_key, resolve_for_now, select_days};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{header, next_prayer, prayers, statusbar, table};
use crate::utils::format::format_month_day;
use crate::utils::hijri::hijri_string;

pub struct App {
    pub view: ViewMode,
    pub lang: Language,
    pub config: AppConfig,
    pub should_quit: bool,
    pub days: Vec<DailySchedule>,

    // Derived from the clock; refreshed on every tick
    pub now: NaiveDateTime,
    pub today_key: String,
    pub ramadan: Option<(String, String)>,
    pub next_prayer: Option<ResolvedNextPrayer>,

    pub month: u32,
    pub scroll: usize,
}

impl App {
    pub fn new(config: AppConfig, days: Vec<DailySchedule>, now: NaiveDateTime) -> Self {
        let lang = config.display.language;
        let mut app = App {
            view: ViewMode::Today,
            lang,
            config,
            should_quit: false,
            days,
            now,
            today_key: String::new(),
            ramadan: None,
            next_prayer: None,
            month: now.month(),
            scroll: 0,
        };
        app.refresh(now);
        app
    }

    /// Re-derive everything that depends on the clock.
    pub fn refresh(&mut self, now: NaiveDateTime) {
        let key = month_day_key(now.date());
        if key != self.today_key {
            log::debug!("Day changed to {}", key);
            self.today_key = key;
            self.ramadan = self.config.ramadan_range(now.date());
        }
        self.now = now;
        self.next_prayer = resolve_for_now(&self.days, now);
    }

    pub fn tick(&mut self) {
        self.refresh(Local::now().naive_local());
    }

    /// Header Hijri date in the current display language.
    pub fn hijri_label(&self) -> Option<String> {
        hijri_string(self.now.date(), self.config.display.hijri_offset, self.lang)
    }

    pub fn today(&self) -> Option<&DailySchedule> {
        self.days.iter().find(|d| d.date == self.today_key)
    }

    pub fn visible_days(&self) -> Vec<&DailySchedule> {
        select_days(
            &self.days,
            self.view,
            &self.today_key,
            self.month,
            self.ramadan.as_ref().map(|(s, e)| (s.as_str(), e.as_str())),
        )
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('l') => {
                self.lang = self.lang.toggled();
            }
            KeyCode::Char('t') => self.set_view(ViewMode::Today),
            KeyCode::Char('a') => {
                // Same button flips between all days and today
                if self.view == ViewMode::All {
                    self.set_view(ViewMode::Today);
                } else {
                    self.set_view(ViewMode::All);
                }
            }
            KeyCode::Char('m') => self.set_view(ViewMode::Month),
            KeyCode::Char('r') => self.set_view(ViewMode::Ramadan),
            KeyCode::Left if self.view == ViewMode::Month => {
                self.month = if self.month == 1 { 12 } else { self.month - 1 };
                self.scroll = 0;
            }
            KeyCode::Right if self.view == ViewMode::Month => {
                self.month = self.month % 12 + 1;
                self.scroll = 0;
            }
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let max = self.visible_days().len().saturating_sub(1);
                if self.scroll < max {
                    self.scroll += 1;
                }
            }
            _ => {}
        }
    }

    fn set_view(&mut self, view: ViewMode) {
        if view != self.view {
            self.view = view;
            self.scroll = self.initial_scroll();
        }
    }

    /// Start table views scrolled so today's row is visible when present.
    fn initial_scroll(&self) -> usize {
        self.visible_days()
            .iter()
            .position(|d| d.date == self.today_key)
            .map(|i| i.saturating_sub(2))
            .unwrap_or(0)
    }

    fn table_title(&self) -> String {
        let labels = self.lang.labels();
        match self.view {
            ViewMode::Today | ViewMode::All => labels.see_all.to_string(),
            ViewMode::Month => format!(
                "{} {}",
                labels.month,
                format_month_day(&month_key(self.month), self.lang)
            ),
            ViewMode::Ramadan => match &self.ramadan {
                Some((start, end)) => format!(
                    "{} {} → {}",
                    labels.ramadan,
                    format_month_day(start, self.lang),
                    format_month_day(end, self.lang)
                ),
                None => labels.ramadan.to_string(),
            },
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            self.lang,
            self.now,
            &self.today_key,
            self.hijri_label().as_deref(),
        );
        statusbar::render(frame, outer_chunks[2], self.lang, self.view);

        let body = outer_chunks[1];
        match self.view {
            ViewMode::Today => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(body);

                let [card] = Layout::vertical([Constraint::Length(9)]).areas(columns[1]);

                prayers::render(
                    frame,
                    columns[0],
                    self.today(),
                    self.next_prayer.as_ref(),
                    self.now,
                    self.lang,
                    self.config.display.hour_cycle,
                );
                next_prayer::render(frame, card, self.next_prayer.as_ref(), self.lang);
            }
            ViewMode::All | ViewMode::Month | ViewMode::Ramadan => {
                let days = self.visible_days();
                table::render(
                    frame,
                    body,
                    &self.table_title(),
                    &days,
                    &self.today_key,
                    self.scroll,
                    self.lang,
                    self.config.display.hour_cycle,
                );
            }
        }
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig, days: Vec<DailySchedule>) -> Result<()> {
    let tick = Duration::from_millis(config.display.tick_ms);
    let mut app = App::new(config, days, Local::now().naive_local());

    let mut terminal = ratatui::init();
    let events = EventHandler::new(tick);

    // Restore the terminal even when drawing fails
    let result = event_loop(&mut terminal, &mut app, &events);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    return Ok(());
                }
            }
            Event::Resize => {}
            Event::Tick => app.tick(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;

    fn day(date: &str) -> DailySchedule {
        DailySchedule::from_raw(
            date,
            [Some("04:10"), Some("05:40"), Some("12:45"), Some("16:30"), Some("19:50"), Some("21:40")],
        )
        .unwrap()
    }

    fn app_at(h: u32) -> App {
        let days = vec![day("02-28"), day("03-01"), day("03-02"), day("04-01")];
        let now = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap();
        let mut config = AppConfig::default();
        config.ramadan = Some(crate::config::RamadanConfig {
            start: "02-28".to_string(),
            end: "03-01".to_string(),
        });
        App::new(config, days, now)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn starts_on_today_with_next_prayer() {
        let app = app_at(13);
        assert_eq!(app.view, ViewMode::Today);
        assert_eq!(app.today_key, "03-01");
        assert_eq!(app.today().unwrap().date, "03-01");
        assert_eq!(
            app.next_prayer.as_ref().unwrap().slot,
            crate::models::Slot::Asr
        );
    }

    #[test]
    fn refresh_rolls_over_midnight() {
        let mut app = app_at(23);
        assert_eq!(app.next_prayer.as_ref().unwrap().target.date().day(), 2);
        let next_morning = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(0, 30, 0)
            .unwrap();
        app.refresh(next_morning);
        assert_eq!(app.today_key, "03-02");
        assert_eq!(app.visible_days().len(), 1);
    }

    #[test]
    fn view_keys_switch_rows() {
        let mut app = app_at(9);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.view, ViewMode::All);
        assert_eq!(app.visible_days().len(), 4);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.view, ViewMode::Today);

        press(&mut app, KeyCode::Char('m'));
        let dates: Vec<&str> = app.visible_days().iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, ["03-01", "03-02"]);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.month, 2);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.month, 4);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.visible_days().len(), 2);
    }

    #[test]
    fn month_navigation_wraps() {
        let mut app = app_at(9);
        app.month = 12;
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.month, 1);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.month, 12);
    }

    #[test]
    fn language_toggle_and_quit() {
        let mut app = app_at(9);
        assert_eq!(app.lang, Language::Kurdish);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.lang, Language::English);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn hijri_header_follows_language_toggle() {
        let mut app = app_at(9);
        let ku = app.hijri_label().unwrap();
        assert!(!ku.chars().any(|c| c.is_ascii_digit()), "{}", ku);
        press(&mut app, KeyCode::Char('l'));
        let en = app.hijri_label().unwrap();
        assert!(en.chars().any(|c| c.is_ascii_digit()), "{}", en);
    }

    #[test]
    fn month_title_is_zero_padded() {
        let mut app = app_at(9);
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('m'));
        assert!(app.table_title().ends_with(" 03"), "{}", app.table_title());
        press(&mut app, KeyCode::Char('l'));
        assert!(app.table_title().ends_with(" ٠٣"), "{}", app.table_title());
    }

    #[test]
    fn today_view_draws_prayer_cards_and_countdown() {
        let app = app_at(13);
        let mut terminal =
            ratatui::Terminal::new(ratatui::backend::TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains('⏰'));
    }

    #[test]
    fn scrolling_is_bounded() {
        let mut app = app_at(9);
        press(&mut app, KeyCode::Char('a'));
        app.scroll = 0;
        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.scroll, 3);
    }
}
