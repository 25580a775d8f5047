//! Streaming CSV reader with iterator interface
//!
//! Provides a streaming iterator over operation records from a CSV script.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `open()`
//! - Individual record errors are yielded as `Err` items carrying the line number
//!
//! ```no_run
//! use bank_account::io::OperationReader;
//! use std::path::Path;
//!
//! let reader = OperationReader::open(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{AccountError, OperationRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Streaming operation reader
///
/// Reads one record at a time; memory use does not grow with the script size.
#[derive(Debug)]
pub struct OperationReader<R = File> {
    reader: csv::Reader<R>,
    line_num: u64,
}

impl OperationReader<File> {
    /// Open a script file
    ///
    /// # Errors
    ///
    /// `FileNotFound` if the path does not exist, `IoError` for any other
    /// failure to open it.
    pub fn open(path: &Path) -> Result<Self, AccountError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AccountError::file_not_found(path.display().to_string()),
            _ => AccountError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> OperationReader<R> {
    /// Read a script from any byte source
    ///
    /// Whitespace around fields is trimmed and rows may omit trailing fields.
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            reader,
            line_num: 1,
        }
    }
}

impl<R: Read> Iterator for OperationReader<R> {
    type Item = Result<OperationRecord, AccountError>;

    /// Get the next operation record
    ///
    /// Line numbers count the header as line 1.
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let next = deserializer.next()?;
        self.line_num += 1;
        let line = self.line_num;

        Some(match next {
            Ok(csv_record) => convert_csv_record(csv_record).map_err(|e| match e {
                AccountError::ParseError { message, .. } => {
                    AccountError::parse_error(Some(line), message)
                }
                other => other,
            }),
            Err(e) => Err(AccountError::parse_error(Some(line), e.to_string())),
        })
    }
}
