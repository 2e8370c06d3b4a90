//! Saved palettes, newest first.

use crate::app::state::{AppState, Focus};
use crate::storage::SavedPalette;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let focused = state.focus == Focus::Library;

    let border = if focused {
        theme.colors.accent
    } else {
        theme.colors.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border))
        .title(format!(" {} Saved ({}) ", icons.library, state.saved.len()))
        .title_style(Style::default().fg(theme.colors.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.saved.is_empty() {
        let empty = Paragraph::new(Line::from(format!("{} press s to save", icons.save)))
            .style(Style::default().fg(theme.colors.fg_secondary));
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = state
        .saved
        .iter()
        .map(|saved| {
            let mut spans: Vec<Span> = saved
                .colors
                .iter()
                .map(|hex| Span::styled(icons.swatch, Style::default().fg(Color::from(*hex))))
                .collect();
            spans.push(Span::styled(
                format!(" {}", short_date(saved)),
                Style::default().fg(theme.colors.fg_secondary),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.library_selected));
    }

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(theme.colors.bg_highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("\u{f054} ");

    frame.render_stateful_widget(list, inner, &mut list_state);
}

/// `YYYY-MM-DD HH:MM` from the stored timestamp.
fn short_date(saved: &SavedPalette) -> String {
    let stamp: String = saved.timestamp.chars().take(16).collect();
    stamp.replace('T', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hex;

    #[test]
    fn short_date_trims_seconds() {
        let saved = SavedPalette {
            id: 1,
            colors: vec![Hex::new(0, 0, 0)],
            timestamp: "2024-03-05T14:22:09.123Z".into(),
        };
        assert_eq!(short_date(&saved), "2024-03-05 14:22");
    }
}
