//! Output rendering: present accepted files.
//!
//! This module handles the final stage of the pipeline. Two strategies
//! implement [`Renderer`]:
//!
//! - **ListingRenderer**: one line per file with its word count, then a total
//! - **DumpRenderer**: a header per file followed by its raw content
//!
//! Both write as they go; nothing is buffered beyond the writer itself.
//! Per-file read failures are logged and the run continues. Only failures
//! to write the output are returned as errors.
//!
//! In [`OutputFormat::Json`] each file becomes one JSON object per line.

pub mod dump;
pub mod listing;

use std::io::{self, Write};

use serde::Serialize;

use crate::error::EpError;
use crate::options::OutputFormat;
use crate::pipeline::Accepted;
use crate::Result;

pub use dump::DumpRenderer;
pub use listing::ListingRenderer;

/// Totals reported once rendering is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Files rendered successfully
    pub files: u64,
    /// Files that failed to read
    pub errors: u64,
    /// Sum of word counts (listing mode with counting enabled)
    pub total_words: u64,
}

/// An output strategy consuming accepted files one at a time.
pub trait Renderer {
    /// Render a single accepted file.
    fn render(&mut self, entry: &Accepted) -> Result<()>;

    /// Write any trailer, flush, and report totals.
    fn finish(&mut self) -> Result<RenderSummary>;
}

/// One NDJSON line describing a file.
#[derive(Debug, Serialize)]
struct FileRecord<'a> {
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> FileRecord<'a> {
    fn path(path: &'a str) -> Self {
        Self {
            path,
            words: None,
            content: None,
            error: None,
        }
    }
}

fn write_record<W: Write, T: Serialize>(out: &mut W, record: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n").map_err(write_error)
}

fn write_error(e: io::Error) -> EpError {
    EpError::Output(e)
}

pub(crate) fn is_json(format: OutputFormat) -> bool {
    format == OutputFormat::Json
}
