pub mod config;
pub mod error;
pub mod number;
pub mod report;
pub mod transaction;

use crate::config::ParserConfig;
use crate::error::ReportError;
use crate::transaction::Transaction;

use csv::{ByteRecordsIntoIter, ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Opens the export at `path` and lazily yields its valid transactions.
///
/// A missing file, or a path that is not a regular file, is reported before
/// any line is read. The file is closed when the returned stream is dropped.
pub fn stream_transactions(
    path: impl AsRef<Path>,
    config: &ParserConfig,
) -> Result<TransactionStream<File>, ReportError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ReportError::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::FileNotFound(path.to_path_buf()),
        _ => ReportError::Io(e),
    })?;

    Ok(TransactionStream::from_reader(file, config))
}

/// Iterator over the transactions of a headerless, delimited export.
/// Lines that do not parse are skipped and counted.
///
/// Every physical line is one record: quotes are kept as literal text and
/// fields that are not valid UTF-8 are decoded lossily.
pub struct TransactionStream<R> {
    records: ByteRecordsIntoIter<R>,
    config: ParserConfig,
    skipped: usize,
    finished: bool,
}

impl<R: Read> TransactionStream<R> {
    pub fn from_reader(reader: R, config: &ParserConfig) -> Self {
        let records = ReaderBuilder::new()
            .delimiter(config.delimiter)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader)
            .into_byte_records();

        Self {
            records,
            config: config.clone(),
            skipped: 0,
            finished: false,
        }
    }

    /// Number of lines rejected so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: Read> Iterator for TransactionStream<R> {
    type Item = Transaction;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for result in self.records.by_ref() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    log::error!("Stopped reading transactions: {}", e);
                    self.finished = true;
                    return None;
                }
            };

            let line = record.position().map(|p| p.line());
            let fields: StringRecord = record.iter().map(String::from_utf8_lossy).collect();

            match Transaction::from_record(&fields, &self.config) {
                Ok(tx) => return Some(tx),
                Err(e) => {
                    self.skipped += 1;
                    match line {
                        Some(line) => log::debug!("Skipping line {}: {}", line, e),
                        None => log::debug!("Skipping line: {}", e),
                    }
                }
            }
        }

        self.finished = true;
        None
    }
}
