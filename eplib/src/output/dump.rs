//! Dump mode: a header per file followed by its content.

use std::fs;
use std::io::{self, Write};

use console::Style;
use tracing::{debug, warn};

use super::{is_json, write_error, write_record, FileRecord, RenderSummary, Renderer};
use crate::error::EpError;
use crate::options::OutputFormat;
use crate::pipeline::Accepted;
use crate::Result;

/// Prints each file as:
///
/// ```text
///
/// === path/to/file ===
///
/// <content>
/// ```
pub struct DumpRenderer<W: Write> {
    out: W,
    format: OutputFormat,
    header_style: Style,
    summary: RenderSummary,
}

impl<W: Write> DumpRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            format: OutputFormat::Text,
            header_style: Style::new(),
            summary: RenderSummary::default(),
        }
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder: style applied to the `=== path ===` line.
    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for DumpRenderer<W> {
    fn render(&mut self, entry: &Accepted) -> Result<()> {
        match fs::metadata(&entry.full_path) {
            Ok(m) if m.is_dir() => {
                debug!("skipping directory {}", entry.path);
                return Ok(());
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("skipping vanished file {}", entry.path);
                return Ok(());
            }
            Err(e) => {
                warn!("error accessing file {}: {}", entry.full_path.display(), e);
                self.summary.errors += 1;
                return Ok(());
            }
        }

        let json = is_json(self.format);
        if !json {
            let header = format!("=== {} ===", entry.path);
            write!(self.out, "\n{}\n\n", self.header_style.apply_to(header)).map_err(write_error)?;
        }

        let content = match fs::read(&entry.full_path) {
            Ok(content) => content,
            Err(source) => {
                let err = EpError::FileRead {
                    path: entry.full_path.clone(),
                    source,
                };
                warn!("{}", err);
                self.summary.errors += 1;
                if json {
                    let record = FileRecord {
                        error: Some(err.to_string()),
                        ..FileRecord::path(&entry.path)
                    };
                    write_record(&mut self.out, &record)?;
                }
                return Ok(());
            }
        };

        self.summary.files += 1;
        if json {
            let record = FileRecord {
                content: Some(String::from_utf8_lossy(&content).into_owned()),
                ..FileRecord::path(&entry.path)
            };
            write_record(&mut self.out, &record)
        } else {
            self.out.write_all(&content).map_err(write_error)?;
            self.out.write_all(b"\n").map_err(write_error)
        }
    }

    fn finish(&mut self) -> Result<RenderSummary> {
        self.out.flush().map_err(write_error)?;
        Ok(self.summary)
    }
}
