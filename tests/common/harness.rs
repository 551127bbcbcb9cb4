//! A terminal simulator driven by a test clock, with navigation recorded

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use termfolio::app::terminal::TerminalSimulator;
use termfolio::config::{BootConfig, BootMessage, Config};
use termfolio::model::history::{EntryKind, HistoryEntry};
use termfolio::services::time_source::TestTimeSource;

pub struct TerminalHarness {
    pub clock: Arc<TestTimeSource>,
    pub terminal: TerminalSimulator,
    pub navigated: Rc<RefCell<Vec<String>>>,
}

impl TerminalHarness {
    pub fn with_config(config: &Config) -> Self {
        super::tracing::init_tracing_from_env();
        let clock = TestTimeSource::shared();
        let navigated = Rc::new(RefCell::new(Vec::new()));
        let sink = navigated.clone();
        let navigator = move |command: &str| sink.borrow_mut().push(command.to_string());
        let terminal = TerminalSimulator::new(config, Box::new(navigator), clock.clone());
        Self {
            clock,
            terminal,
            navigated,
        }
    }

    /// Default configuration without initial transcript lines.
    pub fn new() -> Self {
        let mut config = Config::default();
        config.terminal.initial_transcript.clear();
        Self::with_config(&config)
    }

    /// Total boot time of `config`, lead-in included.
    pub fn boot_duration(config: &BootConfig) -> Duration {
        let steps: u64 = config
            .messages
            .iter()
            .chain(&config.welcome)
            .map(|m| m.delay_ms)
            .sum();
        Duration::from_millis(config.lead_in_ms + steps)
    }

    pub fn advance(&mut self, duration: Duration) {
        self.clock.advance(duration);
        self.terminal.tick();
    }

    /// Start and run the boot sequence to completion.
    pub fn boot(&mut self) {
        self.terminal.start();
        let total = Self::boot_duration(&Config::default().boot);
        self.advance(total.max(Duration::from_secs(10)));
    }

    /// Type `text` and submit it.
    pub fn run(&mut self, text: &str) {
        self.terminal.on_keystroke(text);
        self.terminal.on_submit();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        self.terminal.transcript().entries()
    }

    pub fn kinds(&self) -> Vec<EntryKind> {
        self.entries().iter().map(|e| e.kind()).collect()
    }

    pub fn navigated(&self) -> Vec<String> {
        self.navigated.borrow().clone()
    }
}

pub fn quick_boot(system: usize) -> BootConfig {
    BootConfig {
        lead_in_ms: 10,
        messages: (0..system)
            .map(|i| BootMessage::new(format!("system {i}"), 10))
            .collect(),
        welcome: vec![
            BootMessage::new("welcome", 10),
            BootMessage::new("hint", 10),
            BootMessage::new("", 10),
        ],
    }
}
