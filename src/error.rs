//! Error kinds surfaced by the palette core and the AI client.
//!
//! Bounds violations on slot mutations are not errors: those operations
//! return `false` and leave the palette untouched.

use thiserror::Error;

const REPHRASE: &str = "I'm sorry, I couldn't generate a palette for that. \
    Could you try a different description?";

/// A hex string that could not be read as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color {input:?}: expected 6 hex digits, got {len}")]
    Length { input: String, len: usize },

    #[error("invalid color {input:?}: not a hex number")]
    Digits { input: String },
}

/// Failure of an AI palette request.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("missing API key: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("AI endpoint returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not parse AI response: {0}")]
    Malformed(String),

    #[error("AI response has no usable colors: {0}")]
    Unusable(String),
}

impl GenerationError {
    /// The assistant line shown in the chat log for this failure.
    pub fn assistant_reply(&self) -> &'static str {
        match self {
            GenerationError::Malformed(_) | GenerationError::Unusable(_) => REPHRASE,
            _ => "Something went wrong. Please check your API key.",
        }
    }
}
