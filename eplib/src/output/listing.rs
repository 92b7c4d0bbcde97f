//! Listing mode: paths with word counts.

use std::io::Write;

use console::Style;
use serde::Serialize;
use tracing::{debug, warn};

use super::{is_json, write_error, write_record, FileRecord, RenderSummary, Renderer};
use crate::counter::count_file_words;
use crate::options::OutputFormat;
use crate::pipeline::Accepted;
use crate::Result;

/// Final NDJSON line in listing mode.
#[derive(Debug, Serialize)]
struct ListingTotal {
    files: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_words: Option<u64>,
}

/// Prints `path (N words)` per file and a `Total:` line at the end.
pub struct ListingRenderer<W: Write> {
    out: W,
    format: OutputFormat,
    count_words: bool,
    total_style: Style,
    summary: RenderSummary,
}

impl<W: Write> ListingRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            format: OutputFormat::Text,
            count_words: true,
            total_style: Style::new(),
            summary: RenderSummary::default(),
        }
    }

    /// Builder: print bare paths without reading files.
    pub fn count_words(mut self, enabled: bool) -> Self {
        self.count_words = enabled;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder: style applied to the `Total:` line.
    pub fn total_style(mut self, style: Style) -> Self {
        self.total_style = style;
        self
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_bare(&mut self, entry: &Accepted) -> Result<()> {
        self.summary.files += 1;
        if is_json(self.format) {
            write_record(&mut self.out, &FileRecord::path(&entry.path))
        } else {
            writeln!(self.out, "{}", entry.path).map_err(write_error)
        }
    }
}

impl<W: Write> Renderer for ListingRenderer<W> {
    fn render(&mut self, entry: &Accepted) -> Result<()> {
        if !self.count_words {
            return self.render_bare(entry);
        }

        if entry.full_path.is_dir() {
            debug!("skipping directory {}", entry.path);
            return Ok(());
        }

        let json = is_json(self.format);
        match count_file_words(&entry.full_path) {
            Ok(words) => {
                self.summary.files += 1;
                self.summary.total_words += words as u64;
                if json {
                    let record = FileRecord {
                        words: Some(words),
                        ..FileRecord::path(&entry.path)
                    };
                    write_record(&mut self.out, &record)
                } else {
                    writeln!(self.out, "{} ({} words)", entry.path, words).map_err(write_error)
                }
            }
            Err(e) if e.is_not_found() => {
                debug!("skipping vanished file {}", entry.path);
                Ok(())
            }
            Err(e) => {
                warn!("error counting words in {}: {}", entry.path, e);
                self.summary.errors += 1;
                if json {
                    let record = FileRecord {
                        error: Some(e.to_string()),
                        ..FileRecord::path(&entry.path)
                    };
                    write_record(&mut self.out, &record)
                } else {
                    writeln!(self.out, "{} (word count error)", entry.path).map_err(write_error)
                }
            }
        }
    }

    fn finish(&mut self) -> Result<RenderSummary> {
        if is_json(self.format) {
            let total = ListingTotal {
                files: self.summary.files,
                total_words: self.count_words.then_some(self.summary.total_words),
            };
            write_record(&mut self.out, &total)?;
        } else if self.count_words && self.summary.total_words > 0 {
            let line = format!("Total: {} words", self.summary.total_words);
            write!(self.out, "\n{}\n", self.total_style.apply_to(line)).map_err(write_error)?;
        }
        self.out.flush().map_err(write_error)?;
        Ok(self.summary)
    }
}
