use crate::model::history::EntryKind;
use ratatui::style::{Color, Modifier, Style};

/// Colors used by the page and the terminal overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Page colors
    pub page_bg: Color,
    pub page_fg: Color,
    pub muted_fg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_fg: Color,
    pub title_fg: Color,

    // Terminal colors
    pub terminal_bg: Color,
    pub terminal_border: Color,
    pub header_fg: Color,
    pub status_booting_fg: Color,
    pub status_online_fg: Color,
    pub badge_fg: Color,
    pub progress_fg: Color,
    pub prompt_fg: Color,
    pub cursor_fg: Color,

    // Transcript colors
    pub input_fg: Color,
    pub output_fg: Color,
    pub error_fg: Color,
    pub system_fg: Color,
    pub welcome_fg: Color,
    pub highlight_marker_fg: Color,
}

const TEXT: Color = Color::Rgb(0xE6, 0xEE, 0xF5);
const PRIMARY: Color = Color::Rgb(0x00, 0xE5, 0xFF);
const SECONDARY: Color = Color::Rgb(0x0C, 0xFF, 0x70);
const ACCENT: Color = Color::Rgb(0xBD, 0x00, 0xFF);
const ERROR: Color = Color::Rgb(0xFF, 0x52, 0x52);
const WARNING: Color = Color::Rgb(0xFF, 0xCD, 0x00);
const MUTED: Color = Color::Rgb(0x7A, 0x88, 0x99);
const BACKGROUND: Color = Color::Rgb(0x0A, 0x0E, 0x14);
const SURFACE: Color = Color::Rgb(0x11, 0x17, 0x20);

impl Theme {
    /// The dark neon palette of the portfolio
    pub fn neon() -> Self {
        Self {
            page_bg: BACKGROUND,
            page_fg: TEXT,
            muted_fg: MUTED,
            tab_active_fg: PRIMARY,
            tab_inactive_fg: MUTED,
            title_fg: PRIMARY,
            terminal_bg: SURFACE,
            terminal_border: PRIMARY,
            header_fg: TEXT,
            status_booting_fg: WARNING,
            status_online_fg: SECONDARY,
            badge_fg: ACCENT,
            progress_fg: PRIMARY,
            prompt_fg: SECONDARY,
            cursor_fg: PRIMARY,
            input_fg: TEXT,
            output_fg: PRIMARY,
            error_fg: ERROR,
            system_fg: MUTED,
            welcome_fg: SECONDARY,
            highlight_marker_fg: ACCENT,
        }
    }

    pub fn entry_color(&self, kind: EntryKind) -> Color {
        match kind {
            EntryKind::Input => self.input_fg,
            EntryKind::Output => self.output_fg,
            EntryKind::Error => self.error_fg,
            EntryKind::System => self.system_fg,
            EntryKind::Welcome => self.welcome_fg,
        }
    }

    /// Style for a transcript entry; highlighted entries are bold.
    pub fn entry_style(&self, kind: EntryKind, highlighted: bool) -> Style {
        let style = Style::default().fg(self.entry_color(kind));
        if highlighted {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}
