//! Terminal styling helpers

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Style, Styled};

/// Check mark used in success lines
pub const CHECK: &str = "✓";

/// Semantic styles for console output
pub trait Stylize: std::fmt::Display + Sized {
    /// Bold text for headings
    fn emphasis(&self) -> Styled<&Self> {
        self.style(Style::new().bold())
    }

    /// Dimmed text for secondary information
    fn muted(&self) -> Styled<&Self> {
        self.style(Style::new().dimmed())
    }

    /// Cyan text for names and counts
    fn accent(&self) -> Styled<&Self> {
        self.style(Style::new().cyan())
    }

    /// Green text for completed work
    fn success(&self) -> Styled<&Self> {
        self.style(Style::new().green())
    }

    /// Yellow text for report lines
    fn highlight(&self) -> Styled<&Self> {
        self.style(Style::new().yellow())
    }
}

impl<T: std::fmt::Display> Stylize for T {}

/// Spinner shown while waiting on the network
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
