//! Portfolio page rendering: navbar, active section and the terminal overlay

use crate::app::portfolio::Portfolio;
use crate::model::section::Section;
use crate::view::terminal_view::render_terminal;
use crate::view::theme::Theme;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

/// Share of the screen the overlay covers, in percent
const OVERLAY_WIDTH_PERCENT: u16 = 80;
const OVERLAY_HEIGHT_PERCENT: u16 = 75;

/// Center a `percent_x` by `percent_y` rectangle inside `area`.
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

fn navbar<'a>(owner: &'a str, active: Section, theme: &Theme) -> (Line<'a>, Tabs<'a>) {
    let brand = Line::from(Span::styled(
        owner,
        Style::default()
            .fg(theme.title_fg)
            .add_modifier(Modifier::BOLD),
    ));
    let tabs = Tabs::new(
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{} {}", i + 1, s.title())),
    )
    .select(active.index())
    .style(Style::default().fg(theme.tab_inactive_fg))
    .highlight_style(
        Style::default()
            .fg(theme.tab_active_fg)
            .add_modifier(Modifier::BOLD),
    )
    .divider("│");
    (brand, tabs)
}

fn section_body(section: Section, theme: &Theme) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            section.title(),
            Style::default()
                .fg(theme.title_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(
        section
            .blurb()
            .iter()
            .map(|text| Line::from(Span::styled(*text, Style::default().fg(theme.page_fg)))),
    );
    Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.muted_fg)),
        )
}

fn footer(terminal_open: bool, theme: &Theme) -> Paragraph<'static> {
    let hint = if terminal_open {
        "f2 / ctrl+t close terminal  ctrl+c quit"
    } else {
        "←/→ or 1-6 sections  t open terminal  q quit"
    };
    Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(theme.muted_fg),
    )))
}

/// Draw the whole page, with the terminal on top when it is open.
pub fn render_portfolio(frame: &mut Frame, portfolio: &Portfolio, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.page_bg)), area);

    let [nav_row, body, foot] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let owner = portfolio.config().portfolio.owner.as_str();
    let (brand, tabs) = navbar(owner, portfolio.active_section(), theme);
    let brand_width = u16::try_from(brand.width() + 2).unwrap_or(u16::MAX);
    let [brand_area, tabs_area] =
        Layout::horizontal([Constraint::Length(brand_width), Constraint::Min(1)]).areas(nav_row);
    frame.render_widget(Paragraph::new(brand), brand_area);
    frame.render_widget(tabs, tabs_area);

    frame.render_widget(section_body(portfolio.active_section(), theme), body);
    frame.render_widget(footer(portfolio.is_terminal_open(), theme), foot);

    if let Some(terminal) = portfolio.terminal() {
        let overlay = centered_rect(area, OVERLAY_WIDTH_PERCENT, OVERLAY_HEIGHT_PERCENT);
        render_terminal(frame, overlay, terminal, theme);
    }
}
