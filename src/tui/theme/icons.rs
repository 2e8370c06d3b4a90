//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)
//! Glyphs are Font Awesome codepoints from the nerd-fonts `nf-fa-*` set.

#[derive(Debug, Clone)]
pub struct Icons {
    // Swatches
    pub locked: &'static str,
    pub unlocked: &'static str,
    pub copy: &'static str,
    pub palette: &'static str,
    pub add: &'static str,

    // Panels
    pub assistant: &'static str,
    pub user: &'static str,
    pub library: &'static str,
    pub help: &'static str,

    // Actions
    pub save: &'static str,
    pub download: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,

    pub swatch: &'static str,
    pub cursor: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            locked: "\u{f023}",
            unlocked: "\u{f09c}",
            copy: "\u{f0c5}",
            palette: "\u{e22b}",
            add: "\u{f067}",

            assistant: "\u{f0eb}",
            user: "\u{f007}",
            library: "\u{f02d}",
            help: "\u{f059}",

            save: "\u{f0c7}",
            download: "\u{f019}",

            success: "\u{f00c}",
            error: "\u{f00d}",

            swatch: "██",
            cursor: "▏",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    /// The run loop ticks every 120ms while generating.
    pub fn frame(tick: u64) -> &'static str {
        Self::BRAILLE[tick as usize % Self::BRAILLE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_cycles() {
        assert_eq!(LoadingSpinner::frame(0), LoadingSpinner::frame(8));
        assert_ne!(LoadingSpinner::frame(0), LoadingSpinner::frame(1));
    }
}
