// End-to-end behaviour of one terminal session: boot, input, commands

mod common;

use chrono::Timelike;
use common::harness::{quick_boot, TerminalHarness};
use std::time::Duration;
use termfolio::config::Config;
use termfolio::model::history::EntryKind;
use termfolio::model::session::BootPhase;
use termfolio::services::time_source::TimeSource;

#[test]
fn test_boot_appends_system_then_welcome_entries() {
    for system in [0, 1, 4, 6] {
        let mut config = Config::default();
        config.terminal.initial_transcript.clear();
        config.boot = quick_boot(system);
        let mut h = TerminalHarness::with_config(&config);
        h.boot();

        assert_eq!(h.terminal.boot_phase(), BootPhase::Ready);
        assert_eq!(h.entries().len(), system + 3);

        let highlighted: Vec<usize> = h
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.highlighted())
            .map(|(i, _)| i)
            .collect();
        let mut expected = Vec::new();
        if system > 0 {
            expected.push(system - 1);
        }
        expected.push(system);
        assert_eq!(highlighted, expected, "system = {system}");

        let kinds = h.kinds();
        assert!(kinds[..system].iter().all(|k| *k == EntryKind::System));
        assert!(kinds[system..].iter().all(|k| *k == EntryKind::Welcome));
    }
}

#[test]
fn test_default_boot_keeps_initial_transcript_first() {
    let config = Config::default();
    let mut h = TerminalHarness::with_config(&config);
    h.boot();

    let initial = config.terminal.initial_transcript.len();
    let expected = initial + config.boot.messages.len() + config.boot.welcome.len();
    assert_eq!(h.entries().len(), expected);
    for (entry, line) in h.entries().iter().zip(&config.terminal.initial_transcript) {
        assert_eq!(entry.content(), line);
        assert_eq!(entry.kind(), EntryKind::System);
        assert!(!entry.highlighted());
    }
}

#[test]
fn test_boot_timing_follows_script_delays() {
    let mut h = TerminalHarness::new();
    h.terminal.start();

    // lead-in 300 + first message 600
    h.advance(Duration::from_millis(899));
    assert!(h.entries().is_empty());
    h.advance(Duration::from_millis(1));
    assert_eq!(h.entries().len(), 1);

    h.advance(Duration::from_millis(799));
    assert_eq!(h.entries().len(), 1);
    h.advance(Duration::from_millis(1));
    assert_eq!(h.entries().len(), 2);
}

#[test]
fn test_input_is_ignored_during_boot() {
    let mut h = TerminalHarness::new();
    h.terminal.start();
    h.advance(Duration::from_millis(1000));
    let before = h.entries().len();

    assert!(!h.terminal.on_keystroke("help"));
    assert_eq!(h.terminal.input(), "");
    assert!(h.terminal.on_submit().is_none());
    assert!(!h.terminal.on_recall_previous());
    assert_eq!(h.entries().len(), before);
    assert!(h.terminal.command_log().is_empty());
}

#[test]
fn test_input_before_start_is_ignored() {
    let mut h = TerminalHarness::new();
    assert_eq!(h.terminal.boot_phase(), BootPhase::NotStarted);
    assert!(!h.terminal.on_keystroke("help"));
    assert!(h.terminal.on_submit().is_none());
}

#[test]
fn test_recall_keeps_fifty_most_recent() {
    let mut h = TerminalHarness::new();
    h.boot();

    for i in 0..60 {
        h.run(&format!("cmd{i}"));
    }

    let log = h.terminal.command_log();
    assert_eq!(log.len(), 50);
    assert_eq!(log.commands()[0], "cmd59");
    assert_eq!(log.commands()[49], "cmd10");

    for _ in 0..60 {
        h.terminal.on_recall_previous();
        assert!(h.terminal.command_log().cursor_index() <= 49);
    }
    assert_eq!(h.terminal.command_log().cursor_index(), 49);
    assert_eq!(h.terminal.input(), "cmd10");

    h.terminal.on_recall_next();
    assert_eq!(h.terminal.input(), "cmd11");
}

#[test]
fn test_recall_next_past_newest_clears_input() {
    let mut h = TerminalHarness::new();
    h.boot();
    h.run("version");
    h.run("whoami");

    h.terminal.on_recall_previous();
    h.terminal.on_recall_previous();
    assert_eq!(h.terminal.input(), "version");
    h.terminal.on_recall_next();
    assert_eq!(h.terminal.input(), "whoami");
    h.terminal.on_recall_next();
    assert_eq!(h.terminal.input(), "");
    assert_eq!(h.terminal.command_log().cursor_index(), -1);
}

#[test]
fn test_clear_keeps_ids_increasing() {
    let mut h = TerminalHarness::new();
    h.boot();
    h.run("help");
    let max_before = h.entries().iter().map(|e| e.id()).max().unwrap();

    h.run("clear");
    assert!(h.entries().is_empty());

    h.run("version");
    let first_after = h.entries()[0].id();
    assert!(first_after > max_before);
}

#[test]
fn test_unrecognized_command_appends_one_error() {
    let mut h = TerminalHarness::new();
    h.boot();
    let before = h.entries().len();

    h.run("foobar");

    let added = &h.entries()[before..];
    assert_eq!(added.len(), 2);
    assert_eq!(added[0].kind(), EntryKind::Input);
    assert_eq!(added[1].kind(), EntryKind::Error);
    assert!(added[1].content().contains("foobar"));
    assert_eq!(
        h.kinds().iter().filter(|k| **k == EntryKind::Error).count(),
        1
    );
}

#[test]
fn test_goto_is_forwarded_once_and_only_echoed() {
    let mut h = TerminalHarness::new();
    h.boot();
    let before = h.entries().len();

    h.run("goto projects");

    assert_eq!(h.navigated(), vec!["goto projects".to_string()]);
    let added = &h.entries()[before..];
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].kind(), EntryKind::Input);
    assert_eq!(added[0].content(), "$ goto projects");
}

#[test]
fn test_input_echo_keeps_raw_text() {
    let mut h = TerminalHarness::new();
    h.boot();
    h.run("  HeLp  ");

    let echo = h
        .entries()
        .iter()
        .rev()
        .find(|e| e.kind() == EntryKind::Input)
        .unwrap();
    assert_eq!(echo.content(), "$   HeLp  ");
    assert_eq!(h.terminal.command_log().commands()[0], "HeLp");
    assert_eq!(h.terminal.transcript().last().unwrap().kind(), EntryKind::Output);
}

#[test]
fn test_blank_submission_is_ignored() {
    let mut h = TerminalHarness::new();
    h.boot();
    let before = h.entries().len();
    h.run("   ");
    assert_eq!(h.entries().len(), before);
    assert!(h.terminal.command_log().is_empty());
}

#[test]
fn test_whoami_reflects_invocation_time() {
    let mut h = TerminalHarness::new();
    h.boot();
    // Stop one second short of a minute boundary so the second call crosses it.
    let second = u64::from(h.clock.local_now().second());
    h.advance(Duration::from_secs(59 - second));

    h.run("whoami");
    let first = h.entries().last().unwrap().content().to_string();
    h.advance(Duration::from_secs(1));
    h.run("whoami");
    let second = h.entries().last().unwrap().content().to_string();

    let strip = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|l| !l.contains("Started:"))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(strip(&first), strip(&second));
    assert_ne!(first, second);
}

#[test]
fn test_help_lists_commands() {
    let mut h = TerminalHarness::new();
    h.boot();
    let before = h.entries().len();
    h.run("help");

    let added = &h.entries()[before..];
    assert_eq!(added.len(), 2);
    let help = &added[1];
    assert_eq!(help.kind(), EntryKind::Output);
    assert!(help.highlighted());
    for name in ["help", "clear", "exit", "goto", "version", "whoami"] {
        assert!(help.content().contains(name), "missing {name}");
    }
}

#[test]
fn test_version_appends_one_highlighted_output() {
    let mut h = TerminalHarness::new();
    h.boot();
    let before = h.entries().len();
    h.run("version");

    let added: Vec<_> = h.entries()[before..]
        .iter()
        .map(|e| (e.kind(), e.highlighted()))
        .collect();
    assert_eq!(
        added,
        vec![(EntryKind::Input, false), (EntryKind::Output, true)]
    );
    assert!(h.entries().last().unwrap().content().contains("v2.0.25"));
    assert!(h.navigated().is_empty());
}

#[test]
fn test_whoami_appends_one_highlighted_output() {
    let mut h = TerminalHarness::new();
    h.boot();
    let before = h.entries().len();
    h.run("WhoAmI");

    let added: Vec<_> = h.entries()[before..]
        .iter()
        .map(|e| (e.kind(), e.highlighted()))
        .collect();
    assert_eq!(
        added,
        vec![(EntryKind::Input, false), (EntryKind::Output, true)]
    );
    assert!(h.entries().last().unwrap().content().contains("Started:"));
    assert!(h.navigated().is_empty());
}

#[test]
fn test_exit_is_forwarded_once_and_only_echoed() {
    let mut h = TerminalHarness::new();
    h.boot();
    let before = h.entries().len();

    h.run("exit");

    assert_eq!(h.navigated(), vec!["exit".to_string()]);
    let added = &h.entries()[before..];
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].kind(), EntryKind::Input);
    assert_eq!(added[0].content(), "$ exit");
}

#[test]
fn test_teardown_during_boot_stops_everything() {
    let mut h = TerminalHarness::new();
    h.terminal.start();
    h.advance(Duration::from_millis(1000));
    let before = h.entries().len();
    assert_eq!(before, 1);

    h.terminal.teardown();
    h.advance(Duration::from_secs(30));

    assert_eq!(h.entries().len(), before);
    assert_eq!(h.terminal.next_deadline(), None);
    assert!(h.terminal.is_torn_down());
    assert!(!h.terminal.on_keystroke("help"));
}

#[test]
fn test_teardown_when_ready_stops_blink() {
    let mut h = TerminalHarness::new();
    h.boot();
    assert!(h.terminal.next_deadline().is_some());

    h.terminal.teardown();
    let visible = h.terminal.cursor_visible();
    h.advance(Duration::from_secs(5));
    assert_eq!(h.terminal.cursor_visible(), visible);
    assert_eq!(h.terminal.pending_timers(), 0);
}
