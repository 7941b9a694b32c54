/// The harvest output resource: a CSV writer plus the rows already present.
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use csv::{Writer, WriterBuilder};
use tracing::debug;

use crate::cli::OutputTarget;
use crate::session::PeasantError;

use super::RecordSet;

/// Writable CSV handle and the prior results read from the same path.
///
/// For a file target the existing rows are loaded before the file is reopened
/// for appending, so nothing already written is lost. The handle is closed
/// when the sink is dropped.
///
/// The writer is the record stream only. With a standard output target the
/// invocation summary goes to stderr so the two never interleave.
pub struct OutputSink {
    target: OutputTarget,
    writer: Writer<Box<dyn Write>>,
    prior: RecordSet,
}

impl OutputSink {
    /// Open the output target, pre-loading any existing file.
    ///
    /// # Errors
    ///
    /// Returns `PeasantError::Csv` if an existing file is not valid CSV and
    /// `PeasantError::Io` if it cannot be read or opened for writing.
    pub fn open(target: &OutputTarget) -> Result<Self, PeasantError> {
        let (sink, prior): (Box<dyn Write>, RecordSet) = match target {
            OutputTarget::Stdout => (Box::new(io::stdout()), RecordSet::default()),
            OutputTarget::File(path) => {
                let prior = if path.exists() {
                    RecordSet::load(path)?
                } else {
                    RecordSet::default()
                };
                let io_err = |source: io::Error| PeasantError::Io {
                    path: path.clone(),
                    source,
                };
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(io_err)?;
                // A last row without a line terminator would swallow the first appended row.
                if !ends_with_newline(path).map_err(io_err)? {
                    file.write_all(b"\n").map_err(io_err)?;
                }
                debug!(path = %path.display(), prior = prior.len(), "opened output file");
                (Box::new(file), prior)
            }
        };

        Ok(Self {
            target: target.clone(),
            writer: WriterBuilder::new().flexible(true).from_writer(sink),
            prior,
        })
    }

    #[must_use]
    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Rows present in the output file before this run.
    #[must_use]
    pub fn prior(&self) -> &RecordSet {
        &self.prior
    }

    /// Whether the header row still has to be written.
    #[must_use]
    pub fn needs_header(&self) -> bool {
        self.prior.headers().is_empty()
    }

    /// CSV writer positioned after any prior content.
    pub fn writer(&mut self) -> &mut Writer<Box<dyn Write>> {
        &mut self.writer
    }

    /// Flush buffered rows and release the handle.
    ///
    /// # Errors
    ///
    /// Returns `PeasantError::Io` if the flush fails.
    pub fn finish(mut self) -> Result<(), PeasantError> {
        self.writer.flush().map_err(|source| PeasantError::Io {
            path: match &self.target {
                OutputTarget::Stdout => "-".into(),
                OutputTarget::File(path) => path.clone(),
            },
            source,
        })
    }
}

/// Whether the file is empty or its last byte is `\n`.
fn ends_with_newline(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
