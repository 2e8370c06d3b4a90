//! The palette itself: one full-height bar per swatch.

use crate::app::state::{AppState, Focus};
use crate::color::Hex;
use crate::swatches::Swatch;
use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    if state.palette.is_empty() {
        return;
    }
    let swatches = state.palette.swatches();

    let constraints: Vec<Constraint> = swatches
        .iter()
        .map(|_| Constraint::Ratio(1, swatches.len() as u32))
        .collect();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, (swatch, col)) in swatches.iter().zip(cols.iter()).enumerate() {
        let selected = i == state.cursor && state.focus == Focus::Palette;
        let copied = state.copied == Some(swatch.hex);
        render_bar(frame, &theme, swatch, selected, copied, *col);
    }
}

/// Readable text color on top of `hex`.
pub fn text_color(hex: Hex) -> Color {
    if hex.is_dark() {
        Color::Rgb(255, 255, 255)
    } else {
        Color::Rgb(0, 0, 0)
    }
}

/// Label lines shown at the foot of a bar.
pub fn label(swatch: &Swatch, theme: &Theme, copied: bool) -> Vec<String> {
    let icons = &theme.icons;
    let code = if copied {
        format!("{} {}", swatch.hex.code(), icons.copy)
    } else {
        swatch.hex.code()
    };
    let lock = if swatch.locked {
        icons.locked
    } else {
        icons.unlocked
    };
    vec![
        code,
        swatch.hex.name().unwrap_or("Custom").to_string(),
        lock.to_string(),
    ]
}

fn render_bar(
    frame: &mut Frame,
    theme: &Theme,
    swatch: &Swatch,
    selected: bool,
    copied: bool,
    area: Rect,
) {
    let bg = Color::from(swatch.hex);
    let fg = text_color(swatch.hex);

    let mut block = Block::default().style(Style::default().bg(bg));
    if selected {
        block = block
            .borders(Borders::ALL)
            .border_set(theme.border_set())
            .border_style(Style::default().fg(fg).bg(bg));
    } else {
        block = block
            .borders(Borders::ALL)
            .border_style(Style::default().fg(bg).bg(bg));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = label(swatch, theme, copied);
    let height = lines.len() as u16 + 1;
    let foot = Rect {
        y: inner.y + inner.height.saturating_sub(height),
        height: height.min(inner.height),
        ..inner
    };

    let text_style = Style::default().fg(fg).bg(bg);
    let mut rendered: Vec<Line> = Vec::with_capacity(lines.len());
    for (i, text) in lines.into_iter().enumerate() {
        let style = if i == 0 {
            text_style.add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        rendered.push(Line::from(Span::styled(text, style)));
    }
    frame.render_widget(Paragraph::new(rendered).alignment(Alignment::Center), foot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swatches::Palette;

    #[test]
    fn text_flips_on_dark_swatches() {
        assert_eq!(text_color(Hex::new(0, 0, 0)), Color::Rgb(255, 255, 255));
        assert_eq!(text_color(Hex::new(255, 255, 255)), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn label_drops_hash_and_names_colors() {
        let theme = get_theme();
        let hexes = [Hex::new(255, 0, 0), Hex::new(0x12, 0x34, 0x56)];
        let palette = Palette::from_hexes(&hexes).unwrap();
        let red = label(&palette.swatches()[0], &theme, false);
        assert_eq!(red[0], "FF0000");
        assert_eq!(red[1], "red");
        assert_eq!(red[2], theme.icons.unlocked);
        let custom = label(&palette.swatches()[1], &theme, false);
        assert_eq!(custom[1], "Custom");
    }
}
