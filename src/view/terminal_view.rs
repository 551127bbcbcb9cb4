//! Terminal overlay rendering

use crate::app::terminal::TerminalSimulator;
use crate::model::history::Transcript;
use crate::model::session::BootPhase;
use crate::view::theme::Theme;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};
use ratatui::Frame;

pub const VERSION_BADGE: &str = "v2.0.25";

const HIGHLIGHT_MARKER: &str = "▌ ";
const PLAIN_MARKER: &str = "  ";
const CURSOR: &str = "█";

/// Flatten the transcript into display lines, oldest first.
pub fn transcript_lines<'a>(transcript: &'a Transcript, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(transcript.line_count());
    for entry in transcript.entries() {
        let style = theme.entry_style(entry.kind(), entry.highlighted());
        for text in entry.lines() {
            let marker = if entry.highlighted() {
                Span::styled(
                    HIGHLIGHT_MARKER,
                    Style::default().fg(theme.highlight_marker_fg),
                )
            } else {
                Span::raw(PLAIN_MARKER)
            };
            lines.push(Line::from(vec![marker, Span::styled(text, style)]));
        }
    }
    lines
}

/// Rows to skip so the last `height` lines stay visible.
pub fn scroll_offset(total_lines: usize, height: u16) -> u16 {
    let skip = total_lines.saturating_sub(height as usize);
    u16::try_from(skip).unwrap_or(u16::MAX)
}

fn header_line<'a>(terminal: &'a TerminalSimulator, theme: &Theme) -> Line<'a> {
    let (status, status_fg) = match terminal.boot_phase() {
        BootPhase::Ready => ("● online", theme.status_online_fg),
        BootPhase::NotStarted | BootPhase::Booting => ("● booting...", theme.status_booting_fg),
    };
    Line::from(vec![
        Span::styled(
            terminal.options().title.as_str(),
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(status, Style::default().fg(status_fg)),
        Span::raw("  "),
        Span::styled(
            format!("[{VERSION_BADGE}]"),
            Style::default().fg(theme.badge_fg),
        ),
    ])
}

fn prompt_line<'a>(terminal: &'a TerminalSimulator, theme: &Theme) -> Line<'a> {
    if !terminal.session().is_ready() {
        return Line::from(Span::styled(
            "  waiting for system...",
            Style::default().fg(theme.muted_fg),
        ));
    }
    let mut spans = vec![
        Span::styled(
            format!("{} ", terminal.options().prompt),
            Style::default().fg(theme.prompt_fg),
        ),
        Span::styled(terminal.input(), Style::default().fg(theme.input_fg)),
    ];
    if terminal.cursor_visible() {
        spans.push(Span::styled(CURSOR, Style::default().fg(theme.cursor_fg)));
    }
    Line::from(spans)
}

/// Draw the overlay into `area`, clearing whatever the page drew there.
pub fn render_terminal(frame: &mut Frame, area: Rect, terminal: &TerminalSimulator, theme: &Theme) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.terminal_border))
        .style(Style::default().bg(theme.terminal_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let show_header = terminal.options().show_header;
    let booting = terminal.boot_phase() != BootPhase::Ready;
    let rows = Layout::vertical([
        Constraint::Length(u16::from(show_header)),
        Constraint::Length(u16::from(booting)),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    if show_header {
        frame.render_widget(Paragraph::new(header_line(terminal, theme)), rows[0]);
    }

    if booting {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme.progress_fg))
            .ratio(terminal.boot_progress().clamp(0.0, 1.0))
            .label("");
        frame.render_widget(gauge, rows[1]);
    }

    let lines = transcript_lines(terminal.transcript(), theme);
    let offset = scroll_offset(lines.len(), rows[2].height);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), rows[2]);

    frame.render_widget(Paragraph::new(prompt_line(terminal, theme)), rows[3]);

    let hints = Line::from(Span::styled(
        "enter run  ↑/↓ history  esc close  ctrl+c quit",
        Style::default().fg(theme.muted_fg),
    ));
    frame.render_widget(Paragraph::new(hints), rows[4]);
}
