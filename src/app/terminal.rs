//! The terminal simulator
//!
//! Owns one `SessionState` and drives it from two sources: timers (boot
//! steps and the cursor blink) and prompt input. Everything runs on the
//! caller's thread; the host calls `tick()` whenever `next_deadline()` has
//! passed and forwards input events in between.
//!
//! Lifecycle: `new` → `start` (boot begins) → ready → `teardown`. After
//! teardown every handler is a no-op and no timer fires again.

use crate::app::boot::BootSequencer;
use crate::app::commands::{dispatch, Command, Navigator};
use crate::app::scheduler::TimerQueue;
use crate::config::{BootConfig, Config, TerminalConfig};
use crate::input::command_log::CommandLog;
use crate::input::controller;
use crate::input::key_translator::PromptInput;
use crate::model::history::Transcript;
use crate::model::session::{BootPhase, SessionState};
use crate::services::time_source::SharedTimeSource;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    BootStep,
    CursorBlink,
}

/// Construction parameters that are not part of the boot script.
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    pub title: String,
    pub show_header: bool,
    pub prompt: String,
    pub initial_transcript: Vec<String>,
    pub history_limit: usize,
    pub cursor_blink: Duration,
}

impl From<&TerminalConfig> for TerminalOptions {
    fn from(config: &TerminalConfig) -> Self {
        Self {
            title: config.title.clone(),
            show_header: config.show_header,
            prompt: config.prompt.clone(),
            initial_transcript: config.initial_transcript.clone(),
            history_limit: config.history_limit,
            cursor_blink: Duration::from_millis(config.cursor_blink_ms),
        }
    }
}

pub struct TerminalSimulator {
    options: TerminalOptions,
    session: SessionState,
    boot: BootSequencer,
    timers: TimerQueue<TimerEvent>,
    cursor_visible: bool,
    navigator: Box<dyn Navigator>,
    clock: SharedTimeSource,
    torn_down: bool,
}

impl TerminalSimulator {
    pub fn new(config: &Config, navigator: Box<dyn Navigator>, clock: SharedTimeSource) -> Self {
        Self::with_options(
            TerminalOptions::from(&config.terminal),
            &config.boot,
            navigator,
            clock,
        )
    }

    pub fn with_options(
        options: TerminalOptions,
        boot: &BootConfig,
        navigator: Box<dyn Navigator>,
        clock: SharedTimeSource,
    ) -> Self {
        let session = SessionState::new(&options.initial_transcript, options.history_limit);
        Self {
            options,
            session,
            boot: BootSequencer::new(boot),
            timers: TimerQueue::new(),
            cursor_visible: true,
            navigator,
            clock,
            torn_down: false,
        }
    }

    /// Begin the boot sequence. Only the first call has an effect.
    pub fn start(&mut self) {
        if self.torn_down || self.session.boot_phase != BootPhase::NotStarted {
            return;
        }
        self.session.boot_phase = BootPhase::Booting;
        let now = self.clock.now();
        tracing::info!(steps = self.boot.steps().len(), "Terminal boot started");
        self.schedule_boot_step(now);
    }

    /// Fire every timer that is due. Returns true if anything changed.
    pub fn tick(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        let now = self.clock.now();
        let mut changed = false;
        while let Some((deadline, event)) = self.timers.pop_due(now) {
            changed = true;
            match event {
                TimerEvent::BootStep => self.emit_boot_step(deadline),
                TimerEvent::CursorBlink => {
                    self.cursor_visible = !self.cursor_visible;
                    let mut next = deadline + self.options.cursor_blink;
                    if next <= now {
                        next = now + self.options.cursor_blink;
                    }
                    self.timers.schedule_at(next, TimerEvent::CursorBlink);
                }
            }
        }
        changed
    }

    /// When `tick` next has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Cancel all pending timers and stop accepting input.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        let cancelled = self.timers.cancel_all();
        self.boot.cancel();
        self.torn_down = true;
        tracing::info!(cancelled, "Terminal torn down");
    }

    fn schedule_boot_step(&mut self, from: Instant) {
        match self.boot.next_delay() {
            Some(delay) => {
                self.timers.schedule_at(from + delay, TimerEvent::BootStep);
            }
            None => self.finish_boot(),
        }
    }

    fn emit_boot_step(&mut self, at: Instant) {
        if let Some(step) = self.boot.advance() {
            self.session
                .transcript
                .push(step.kind, step.content.as_str(), step.highlighted);
            tracing::debug!(content = %step.content, "Boot step");
        }
        // Measured from this step's deadline so late ticks never drift.
        self.schedule_boot_step(at);
    }

    fn finish_boot(&mut self) {
        self.session.boot_phase = BootPhase::Ready;
        self.cursor_visible = true;
        let first_blink = self.clock.now() + self.options.cursor_blink;
        self.timers.schedule_at(first_blink, TimerEvent::CursorBlink);
        tracing::info!("Terminal ready");
    }

    /// Replace the input line. Ignored until ready.
    pub fn on_keystroke(&mut self, text: &str) -> bool {
        !self.torn_down && controller::on_keystroke(&mut self.session, text)
    }

    /// Submit the input line and dispatch it. Returns the dispatched command.
    pub fn on_submit(&mut self) -> Option<Command> {
        if self.torn_down {
            return None;
        }
        let line = controller::on_submit(&mut self.session, &self.options.prompt)?;
        let command = Command::parse(&line);
        dispatch(
            &command,
            &mut self.session,
            self.navigator.as_mut(),
            self.clock.as_ref(),
        );
        Some(command)
    }

    pub fn on_recall_previous(&mut self) -> bool {
        !self.torn_down && controller::on_recall_previous(&mut self.session)
    }

    pub fn on_recall_next(&mut self) -> bool {
        !self.torn_down && controller::on_recall_next(&mut self.session)
    }

    /// Route a translated key to the matching handler.
    pub fn handle_input(&mut self, input: PromptInput) {
        match input {
            PromptInput::Keystroke(text) => {
                if self.on_keystroke(&text) {
                    // Typing keeps the cursor solid.
                    self.cursor_visible = true;
                }
            }
            PromptInput::Submit => {
                self.on_submit();
            }
            PromptInput::RecallPrevious => {
                self.on_recall_previous();
            }
            PromptInput::RecallNext => {
                self.on_recall_next();
            }
        }
    }

    pub fn options(&self) -> &TerminalOptions {
        &self.options
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.session.transcript
    }

    pub fn command_log(&self) -> &CommandLog {
        &self.session.command_log
    }

    pub fn input(&self) -> &str {
        &self.session.input
    }

    pub fn boot_phase(&self) -> BootPhase {
        self.session.boot_phase
    }

    pub fn boot_progress(&self) -> f64 {
        self.boot.progress()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

impl Drop for TerminalSimulator {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for TerminalSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSimulator")
            .field("boot_phase", &self.session.boot_phase)
            .field("entries", &self.session.transcript.len())
            .field("pending_timers", &self.timers.len())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}
