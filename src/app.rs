use crate::command::Command;
use crate::config::Theme;
use crate::consts;
use crate::engine::{Board, Engine, Phase};
use crate::render::Screen;
use crossterm::event::{poll, read, Event};
use log::{debug, info};
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::Instant;

/// The shell around the engine: draws it, feeds it keypresses, and ticks it
/// on a timer while a round is in play
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    engine: Engine<R>,
    theme: Theme,
    /// When the next tick is due.  Only ever `Some` while playing, and at
    /// most one tick is pending at a time.
    next_tick: Option<Instant>,
    quitting: bool,
}

impl App<rand::rngs::ThreadRng> {
    pub(crate) fn new(theme: Theme) -> Self {
        App::new_with_rng(theme, rand::rng())
    }
}

impl<R: Rng> App<R> {
    pub(crate) fn new_with_rng(theme: Theme, rng: R) -> App<R> {
        App {
            engine: Engine::new_with_rng(Board::DEFAULT, rng),
            theme,
            next_tick: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        info!("Starting up");
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        info!("Quitting");
        Ok(())
    }

    /// Wait for either the next input event or, if playing, the next tick,
    /// whichever comes first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        if self.engine.phase() == Phase::Playing {
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + consts::TICK_PERIOD);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.on_tick();
            } else {
                self.handle_event(read()?);
            }
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn on_tick(&mut self) {
        self.next_tick = None;
        if self.engine.tick() != Phase::Playing {
            debug!("Round over; no further ticks scheduled");
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Resize(width, height) = event {
            debug!("Terminal resized to {width}x{height}; resetting round");
            self.engine.setup();
        } else if let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        {
            match cmd.to_input() {
                Some(input) => self.engine.handle_input(input),
                None => self.quitting = true,
            }
        }
        if self.engine.phase() != Phase::Playing {
            self.next_tick = None;
        }
    }
}

impl<R> App<R> {
    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| self.draw_frame(frame))?;
        Ok(())
    }

    fn draw_frame(&self, frame: &mut Frame<'_>) {
        frame.render_widget(
            Screen::new(self.engine.render_state(), &self.theme),
            frame.area(),
        );
    }
}
