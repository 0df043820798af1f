//! Machine script reader with iterator interface
//!
//! Provides a streaming iterator over machine commands from a CSV script.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `open()`
//! - Individual row errors are yielded as Err variants in the iterator, with
//!   the line number of the offending row
//!
//! ```no_run
//! use vending_machine::io::script_reader::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::open(Path::new("script.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Replaying: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_script_record, ScriptRecord};
use crate::types::{MachineCommand, VendingError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Streaming CSV script reader
#[derive(Debug)]
pub struct ScriptReader<R> {
    reader: csv::Reader<R>,
}

impl ScriptReader<File> {
    /// Open a script file
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the path does not exist and `IoError` for
    /// any other failure to open it.
    pub fn open(path: &Path) -> Result<Self, VendingError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => VendingError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => VendingError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ScriptReader<R> {
    /// Read a script from any byte source
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (unused trailing columns may be left out)
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self { reader }
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<MachineCommand, VendingError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => return Some(Err(e.into())),
        }

        // Line tracked by the csv reader, so multi-line fields and skipped lines count
        let line = record.position().map(|pos| pos.line());

        let headers = match self.reader.headers() {
            Ok(headers) => headers,
            Err(e) => return Some(Err(e.into())),
        };

        match record.deserialize::<ScriptRecord>(Some(headers)) {
            Ok(parsed) => Some(
                convert_script_record(parsed)
                    .map_err(|message| VendingError::invalid_command(line, message)),
            ),
            Err(e) => Some(Err(VendingError::ParseError {
                line,
                message: e.to_string(),
            })),
        }
    }
}
