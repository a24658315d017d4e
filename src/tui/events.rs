use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CEvent, KeyEvent, KeyEventKind};

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    /// Countdown refresh, one per tick interval.
    Tick,
}

pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Spawn the input thread. It exits once the receiver is dropped.
    pub fn new(tick: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut next_tick = Instant::now() + tick;
            loop {
                let timeout = next_tick.saturating_duration_since(Instant::now());

                let polled = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(e) => {
                        log::warn!("Terminal poll failed: {}", e);
                        break;
                    }
                };
                if polled {
                    let forwarded = match event::read() {
                        Ok(CEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(Event::Key(key))
                        }
                        Ok(CEvent::Resize(..)) => Some(Event::Resize),
                        Ok(_) => None,
                        Err(_) => break,
                    };
                    if let Some(ev) = forwarded {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                }

                if Instant::now() >= next_tick {
                    if tx.send(Event::Tick).is_err() {
                        break;
                    }
                    // Stay aligned to the tick grid so the countdown does not drift
                    next_tick += tick;
                    if next_tick < Instant::now() {
                        next_tick = Instant::now() + tick;
                    }
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
