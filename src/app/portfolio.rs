//! The portfolio page hosting the terminal overlay
//!
//! Owns the section router and, while the overlay is open, one
//! `TerminalSimulator`. Commands the terminal forwards arrive over a
//! channel and are routed after each input event or tick, so the
//! simulator never borrows the host.

use crate::app::section_router::{RouteOutcome, SectionRouter};
use crate::app::terminal::TerminalSimulator;
use crate::config::Config;
use crate::input::key_translator::{translate_key, translate_paste};
use crate::model::section::Section;
use crate::services::time_source::SharedTimeSource;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

pub struct Portfolio {
    config: Config,
    clock: SharedTimeSource,
    router: SectionRouter,
    terminal: Option<TerminalSimulator>,
    nav_tx: Sender<String>,
    nav_rx: Receiver<String>,
    auto_open_at: Option<Instant>,
    last_route: Option<RouteOutcome>,
    should_quit: bool,
}

impl Portfolio {
    pub fn new(config: Config, clock: SharedTimeSource) -> Self {
        let (nav_tx, nav_rx) = mpsc::channel();
        let auto_open_at = config
            .portfolio
            .auto_open_terminal_ms
            .map(|ms| clock.now() + Duration::from_millis(ms));
        let router = SectionRouter::new(config.portfolio.start_section());
        Self {
            config,
            clock,
            router,
            terminal: None,
            nav_tx,
            nav_rx,
            auto_open_at,
            last_route: None,
            should_quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn active_section(&self) -> Section {
        self.router.active()
    }

    pub fn terminal(&self) -> Option<&TerminalSimulator> {
        self.terminal.as_ref()
    }

    pub fn is_terminal_open(&self) -> bool {
        self.terminal.is_some()
    }

    /// Outcome of the most recent forwarded command.
    pub fn last_route(&self) -> Option<&RouteOutcome> {
        self.last_route.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Open the overlay with a fresh simulator. No-op when already open.
    pub fn open_terminal(&mut self) {
        self.auto_open_at = None;
        if self.terminal.is_some() {
            return;
        }
        let tx = self.nav_tx.clone();
        let navigator = move |command: &str| {
            if tx.send(command.to_string()).is_err() {
                tracing::warn!(command, "Navigation request dropped");
            }
        };
        let mut terminal =
            TerminalSimulator::new(&self.config, Box::new(navigator), self.clock.clone());
        terminal.start();
        self.terminal = Some(terminal);
        tracing::info!("Terminal opened");
    }

    /// Close the overlay, tearing down its simulator.
    pub fn close_terminal(&mut self) {
        self.auto_open_at = None;
        if let Some(mut terminal) = self.terminal.take() {
            terminal.teardown();
            tracing::info!("Terminal closed");
        }
    }

    pub fn toggle_terminal(&mut self) {
        if self.terminal.is_some() {
            self.close_terminal();
        } else {
            self.open_terminal();
        }
    }

    /// Run due timers: the auto-open delay and the simulator's own.
    /// Returns true if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        if let Some(at) = self.auto_open_at {
            if self.clock.now() >= at {
                self.open_terminal();
                changed = true;
            }
        }
        if let Some(terminal) = self.terminal.as_mut() {
            changed |= terminal.tick();
        }
        changed |= self.route_pending();
        changed
    }

    /// Earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let terminal = self.terminal.as_ref().and_then(|t| t.next_deadline());
        match (self.auto_open_at, terminal) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Handle one terminal event. Returns true if a redraw is needed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let changed = match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => self.handle_paste(text),
            Event::Resize(..) => true,
            _ => false,
        };
        self.route_pending() || changed
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return true;
            }
            (KeyCode::F(2), _) | (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
                self.toggle_terminal();
                return true;
            }
            _ => {}
        }

        if self.terminal.is_some() && key.code == KeyCode::Esc {
            self.close_terminal();
            return true;
        }

        if let Some(terminal) = self.terminal.as_mut() {
            return match translate_key(key, terminal.input()) {
                Some(input) => {
                    terminal.handle_input(input);
                    true
                }
                None => false,
            };
        }

        self.handle_page_key(key)
    }

    fn handle_page_key(&mut self, key: &KeyEvent) -> bool {
        let active = self.router.active();
        let target = match key.code {
            KeyCode::Right | KeyCode::Tab => active.next(),
            KeyCode::Left | KeyCode::BackTab => active.prev(),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                Section::ALL[index]
            }
            KeyCode::Char('t') | KeyCode::Enter => {
                self.open_terminal();
                return true;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                return true;
            }
            _ => return false,
        };
        self.router.select(target);
        true
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        let Some(terminal) = self.terminal.as_mut() else {
            return false;
        };
        match translate_paste(text, terminal.input()) {
            Some(input) => {
                terminal.handle_input(input);
                true
            }
            None => false,
        }
    }

    /// Apply navigation requests forwarded by the terminal.
    fn route_pending(&mut self) -> bool {
        let mut changed = false;
        while let Ok(command) = self.nav_rx.try_recv() {
            let outcome = self.router.handle_command(&command);
            match outcome {
                RouteOutcome::Navigated(_) => changed = true,
                RouteOutcome::CloseTerminal => {
                    self.close_terminal();
                    changed = true;
                }
                RouteOutcome::InvalidSection(_) | RouteOutcome::Ignored => {}
            }
            self.last_route = Some(outcome);
        }
        changed
    }
}
