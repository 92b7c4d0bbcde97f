//! Input options for a snapshot run.
//!
//! This module contains the configuration types that control which files a
//! run accepts and how they are rendered.

use console::Style;
use std::str::FromStr;

use crate::filter::FilterConfig;

/// Which renderer a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print each file's path followed by its content
    #[default]
    Dump,
    /// Print paths only, with word counts
    Listing,
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" | "ndjson" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Options for a snapshot run.
#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    /// File filter configuration
    pub filter: FilterConfig,
    /// Renderer selection
    pub mode: Mode,
    /// Output encoding
    pub format: OutputFormat,
    /// Whether listing mode counts words
    pub count_words: bool,
    /// Style for dump headers and the listing total
    pub style: Style,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            mode: Mode::default(),
            format: OutputFormat::default(),
            count_words: true,
            style: Style::new(),
        }
    }
}

impl SnapshotOptions {
    /// Create new default options (dump every file as text).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for listing mode.
    pub fn listing(self) -> Self {
        self.mode(Mode::Listing)
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable word counting in listing mode.
    pub fn count_words(mut self, enabled: bool) -> Self {
        self.count_words = enabled;
        self
    }

    /// Style headers and totals (e.g. bold when writing to a terminal).
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}
