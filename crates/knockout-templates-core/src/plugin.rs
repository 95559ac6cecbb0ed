//! Build-pipeline entry point.
//!
//! A host pipeline hands the plugin [`SourceFile`] records. Buffered records are
//! transformed by [`inline`](crate::inliner::inline), empty records pass
//! through, and streamed records are rejected before any work is done.

use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use crate::config::{InlineSettings, ResolvedSettings};
use crate::error::{KnockoutError, Result};
use crate::inliner;
use crate::observer::{InlineObserver, TracingObserver};

/// How a record exposes its contents.
pub enum Contents {
    /// No contents, e.g. a directory entry.
    Null,
    /// Fully materialized bytes.
    Buffered(Vec<u8>),
    /// Incremental reader. Not supported by the plugin.
    Streamed(Box<dyn Read>),
}

impl Contents {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_buffer(&self) -> bool {
        matches!(self, Self::Buffered(_))
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Streamed(_))
    }
}

impl fmt::Debug for Contents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Buffered(bytes) => write!(f, "Buffered({} bytes)", bytes.len()),
            Self::Streamed(_) => f.write_str("Streamed(..)"),
        }
    }
}

/// A file travelling through the build pipeline.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: Contents,
}

impl SourceFile {
    pub fn buffered(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: Contents::Buffered(contents.into()),
        }
    }

    pub fn streamed(path: impl Into<PathBuf>, reader: impl Read + 'static) -> Self {
        Self {
            path: path.into(),
            contents: Contents::Streamed(Box::new(reader)),
        }
    }

    pub fn null(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: Contents::Null,
        }
    }

    /// Buffered contents, if any.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.contents {
            Contents::Buffered(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// Result of pushing a batch of records through the plugin.
#[derive(Debug, Default)]
pub struct PipelineOutput {
    /// Records emitted downstream, in input order.
    pub emitted: Vec<SourceFile>,
    /// Errors reported on the host error channel, with the offending record's path.
    pub errors: Vec<(PathBuf, KnockoutError)>,
}

/// Inlines templates into every buffered record it receives.
#[derive(Debug)]
pub struct TemplatePlugin<O = TracingObserver> {
    settings: ResolvedSettings,
    observer: O,
}

impl TemplatePlugin<TracingObserver> {
    /// Create a plugin that logs through `tracing`. `None` applies all defaults.
    pub fn new(settings: Option<&InlineSettings>) -> Self {
        Self::with_observer(InlineSettings::resolve(settings), TracingObserver)
    }
}

impl<O: InlineObserver> TemplatePlugin<O> {
    pub fn with_observer(settings: ResolvedSettings, observer: O) -> Self {
        Self { settings, observer }
    }

    pub fn settings(&self) -> &ResolvedSettings {
        &self.settings
    }

    /// Transform one record.
    ///
    /// Streamed records fail with [`KnockoutError::StreamsNotSupported`] and are
    /// not emitted.
    pub fn transform(&self, mut file: SourceFile) -> Result<SourceFile> {
        let bytes = match file.contents {
            Contents::Streamed(_) => return Err(KnockoutError::streams_not_supported()),
            Contents::Null => return Ok(file),
            Contents::Buffered(bytes) => bytes,
        };

        let buffer = String::from_utf8_lossy(&bytes);
        let output = inliner::inline(&buffer, &self.settings, &self.observer)?;
        file.contents = Contents::Buffered(output.into_bytes());
        Ok(file)
    }

    /// Transform a batch. A failing record is reported and the rest continue.
    pub fn run(&self, files: impl IntoIterator<Item = SourceFile>) -> PipelineOutput {
        let mut output = PipelineOutput::default();
        for file in files {
            let path = file.path.clone();
            match self.transform(file) {
                Ok(file) => output.emitted.push(file),
                Err(e) => {
                    tracing::error!("{}: {e}", path.display());
                    output.errors.push((path, e));
                }
            }
        }
        output
    }
}
