//! Theme configuration

pub mod borders;
pub mod colors;
pub mod icons;

pub use borders::BorderStyle;
pub use colors::UiColors;
pub use icons::{Icons, LoadingSpinner};

#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: UiColors,
    pub icons: Icons,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            colors: UiColors::MONO,
            icons: Icons::nerd(),
        }
    }

    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        BorderStyle::to_border_set()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_theme() -> Theme {
    Theme::new()
}
