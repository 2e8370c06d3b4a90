use crate::color::Hex;
use crate::storage::SavedPalette;
use crate::swatches::{Palette, Swatch};

pub const GREETING: &str = "Hello! I'm your AI color assistant. Describe a mood, a brand, \
    or an image, and I'll generate a palette for you.";

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Palette,
    Prompt,
    Library,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    pub focus: Focus,
    pub show_help: bool,

    // Board
    pub palette: Palette,
    pub cursor: usize,
    pub copied: Option<Hex>,

    // Assistant
    pub chat: Vec<ChatMessage>,
    pub prompt: String,
    pub generating: bool,

    // Library
    pub saved: Vec<SavedPalette>,
    pub library_selected: usize,

    pub toast: Option<Toast>,
    pub status: String,
}

impl AppState {
    pub fn new(palette: Palette) -> Self {
        Self {
            should_quit: false,
            tick: 0,
            focus: Focus::default(),
            show_help: false,
            palette,
            cursor: 0,
            copied: None,
            chat: vec![ChatMessage::assistant(GREETING)],
            prompt: String::new(),
            generating: false,
            saved: Vec::new(),
            library_selected: 0,
            toast: None,
            status: String::new(),
        }
    }

    pub fn selected_swatch(&self) -> Option<&Swatch> {
        self.palette.get(self.cursor)
    }

    pub fn selected_saved(&self) -> Option<&SavedPalette> {
        self.saved.get(self.library_selected)
    }

    /// Keep both cursors inside their lists after a length change.
    pub fn clamp_cursors(&mut self) {
        let last_swatch = self.palette.len().saturating_sub(1);
        let last_saved = self.saved.len().saturating_sub(1);
        self.cursor = self.cursor.min(last_swatch);
        self.library_selected = self.library_selected.min(last_saved);
    }

    /// Drop an expired toast along with the copy marker it announced.
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
            self.copied = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::{Duration, Instant};

    fn state() -> AppState {
        AppState::new(Palette::random(3, &mut StdRng::seed_from_u64(2)))
    }

    #[test]
    fn copy_marker_clears_with_its_toast() {
        let mut s = state();
        let hex = s.palette.hexes()[0];
        s.copied = Some(hex);
        s.toast = Some(Toast::success(format!("Copied {hex}")));

        s.expire_toast();
        assert_eq!(s.copied, Some(hex));

        if let Some(toast) = s.toast.as_mut() {
            toast.created_at = Instant::now().checked_sub(Duration::from_secs(4)).unwrap();
        }
        s.expire_toast();
        assert!(s.toast.is_none());
        assert_eq!(s.copied, None);
    }
}
