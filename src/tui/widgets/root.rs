//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, Focus, ToastKind};
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{assistant, bars, help, library};

/// Main layout structure:
/// ┌────────────────────────────────────────────────────┐
/// │ Spectrum                       5 colors  ? for help │
/// ├──────────────────────────────────┬─────────────────┤
/// │                                  │   Assistant     │
/// │          Palette bars            │                 │
/// │                                  ├─────────────────┤
/// │                                  │   Saved         │
/// ├──────────────────────────────────┴─────────────────┤
/// │ status / toast                                     │
/// └────────────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(8),    // Bars + side panel
            Constraint::Length(1), // Status
        ])
        .split(root);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(42)])
        .split(rows[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(body[1]);

    render_header(frame, state, rows[0]);
    bars::render(frame, state, body[0]);
    assistant::render(frame, state, side[0]);
    library::render(frame, state, side[1]);
    render_status(frame, state, rows[2]);

    if state.show_help {
        help::render(frame, root);
    }
}

fn render_header(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let count = state.palette.len();
    let locked = state.palette.swatches().iter().filter(|s| s.locked).count();
    let lock_icon = icons.locked;
    let mode = match state.focus {
        Focus::Palette => "PALETTE",
        Focus::Prompt => "PROMPT",
        Focus::Library => "SAVED",
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} Spectrum ", icons.palette),
            Style::default()
                .fg(theme.colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {mode} "),
            Style::default()
                .fg(theme.colors.bg_primary)
                .bg(theme.colors.accent_alt),
        ),
        Span::styled(
            format!("  {count} colors  {lock_icon} {locked} locked  ? for help"),
            Style::default().fg(theme.colors.fg_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let (add, save, export) = (icons.add, icons.save, icons.download);

    let line = match &state.toast {
        Some(toast) => {
            let (icon, color) = match toast.kind {
                ToastKind::Success => (icons.success, theme.colors.success),
                ToastKind::Error => (icons.error, theme.colors.error),
            };
            Line::from(Span::styled(
                format!(" {icon} {}", toast.message),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => Line::from(vec![
            Span::styled(
                format!(" {}", state.status),
                Style::default().fg(theme.colors.fg_primary),
            ),
            Span::styled(
                format!("   space generate  a {add} add  s {save} save  e {export} export"),
                Style::default().fg(theme.colors.fg_secondary),
            ),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
