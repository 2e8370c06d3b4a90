//! Keybinding overlay

use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let popup = centered(area, 76, 22);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.colors.border))
        .style(Style::default().bg(theme.colors.bg_primary))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.colors.accent));

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Palette", &theme),
        keybind("Space", "Generate new palette", &theme),
        keybind("h / Left", "Previous color", &theme),
        keybind("l / Right", "Next color", &theme),
        keybind("Enter", "Lock / unlock color", &theme),
        keybind("a", "Add color after cursor", &theme),
        keybind("x / Del", "Remove color", &theme),
        keybind("+ / =", "Grow palette", &theme),
        keybind("- / _", "Shrink palette", &theme),
        keybind("c", "Copy hex", &theme),
        keybind("s", "Save palette", &theme),
        keybind("e", "Export to file", &theme),
    ];

    let left_para = Paragraph::new(left_content).wrap(Wrap { trim: false });
    frame.render_widget(left_para, cols[0]);

    let right_content = vec![
        section_header("Assistant", &theme),
        keybind("/ or i", "Focus prompt", &theme),
        keybind("Enter", "Generate from prompt", &theme),
        keybind("Ctrl+u", "Clear input", &theme),
        keybind("Esc", "Back to palette", &theme),
        Line::default(),
        section_header("Saved", &theme),
        keybind("b", "Focus saved palettes", &theme),
        keybind("j / k", "Move selection", &theme),
        keybind("Enter", "Apply palette", &theme),
        keybind("d", "Delete palette", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("?", "Toggle this help", &theme),
        keybind("q / Esc", "Quit", &theme),
    ];

    let right_para = Paragraph::new(right_content).wrap(Wrap { trim: false });
    frame.render_widget(right_para, cols[1]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.colors.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.colors.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            desc.to_string(),
            Style::default().fg(theme.colors.fg_primary),
        ),
    ])
}
