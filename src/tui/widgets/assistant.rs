//! AI assistant panel: chat log over a prompt box.

use crate::app::state::{AppState, ChatMessage, Focus, Role};
use crate::tui::theme::{LoadingSpinner, Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    render_chat(frame, &theme, state, rows[0]);
    render_prompt(frame, &theme, state, rows[1]);
}

fn render_chat(frame: &mut Frame, theme: &Theme, state: &AppState, area: Rect) {
    let icons = &theme.icons;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.colors.border))
        .title(format!(" {} Assistant ", icons.assistant))
        .title_style(Style::default().fg(theme.colors.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for msg in &state.chat {
        lines.push(header(theme, msg));
        lines.push(Line::from(Span::styled(
            msg.content.clone(),
            Style::default().fg(theme.colors.fg_primary),
        )));
        lines.push(Line::default());
    }
    if state.generating {
        lines.push(Line::from(Span::styled(
            format!("{} Generating...", LoadingSpinner::frame(state.tick)),
            Style::default().fg(theme.colors.fg_secondary),
        )));
    }

    // Keep the newest message in view.
    let height = wrapped_height(&state.chat, inner.width) + u16::from(state.generating);
    let scroll = height.saturating_sub(inner.height);

    let chat = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(chat, inner);
}

fn header(theme: &Theme, msg: &ChatMessage) -> Line<'static> {
    let (icon, who) = match msg.role {
        Role::User => (theme.icons.user, "You"),
        Role::Assistant => (theme.icons.assistant, "Spectrum"),
    };
    Line::from(Span::styled(
        format!("{icon} {who}"),
        Style::default()
            .fg(theme.colors.accent_alt)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Rows the chat log occupies at `width` columns once wrapped.
fn wrapped_height(chat: &[ChatMessage], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = chat
        .iter()
        .map(|m| 2 + m.content.chars().count().max(1).div_ceil(width))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn render_prompt(frame: &mut Frame, theme: &Theme, state: &AppState, area: Rect) {
    let focused = state.focus == Focus::Prompt;
    let border = if focused {
        theme.colors.accent
    } else {
        theme.colors.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border))
        .title(" Describe a palette ")
        .title_style(Style::default().fg(theme.colors.fg_secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if state.prompt.is_empty() && !focused {
        Line::from(Span::styled(
            "press / to type",
            Style::default().fg(theme.colors.fg_secondary),
        ))
    } else {
        let mut spans = vec![Span::styled(
            state.prompt.clone(),
            Style::default().fg(theme.colors.fg_primary),
        )];
        if focused {
            spans.push(Span::styled(theme.icons.cursor, Style::default().fg(theme.colors.accent)));
        }
        Line::from(spans)
    };

    // Show the tail of long input.
    let len = u16::try_from(state.prompt.chars().count()).unwrap_or(u16::MAX);
    let offset = (len + 1).saturating_sub(inner.width);
    frame.render_widget(Paragraph::new(line).scroll((0, offset)), inner);
}
