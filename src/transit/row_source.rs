use std::collections::VecDeque;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::Result;

/// A pull-based source of rows, each an ordered list of string fields
pub trait RowSource {
    /// Returns the next row, or `None` once the source is exhausted
    fn read_row(&mut self) -> Result<Option<Vec<String>>>;
}

/// Configuration for a [`DsvReader`]
#[derive(Debug, Clone)]
pub struct DsvReaderBuilder {
    delimiter: u8,
    quote: u8,
    has_headers: bool,
}

impl Default for DsvReaderBuilder {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_headers: false,
        }
    }
}

impl DsvReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field separator, `,` by default
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Skip the first row instead of returning it. Off by default, so a header
    /// row reaches the loader and is rejected there like any other bad row.
    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> DsvReader<R> {
        let inner = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .quote(self.quote)
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(reader);

        DsvReader {
            inner,
            record: csv::ByteRecord::new(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<DsvReader<File>> {
        let file = File::open(path.as_ref()).map_err(csv::Error::from)?;
        Ok(self.from_reader(file))
    }
}

/// Delimiter-separated row reader. Rows may have differing field counts.
///
/// Fields that are not valid UTF-8 come back with replacement characters.
#[derive(Debug)]
pub struct DsvReader<R> {
    inner: csv::Reader<R>,
    record: csv::ByteRecord,
}

impl<R: Read> DsvReader<R> {
    /// Reader over `reader` with the given delimiter and no header row
    pub fn new(reader: R, delimiter: u8) -> Self {
        DsvReaderBuilder::new().delimiter(delimiter).from_reader(reader)
    }
}

impl<R: Read> RowSource for DsvReader<R> {
    fn read_row(&mut self) -> Result<Option<Vec<String>>> {
        // Invalid UTF-8 is decoded lossily so the loader rejects the row, not the source
        if self.inner.read_byte_record(&mut self.record)? {
            Ok(Some(
                self.record
                    .iter()
                    .map(|field| String::from_utf8_lossy(field).into_owned())
                    .collect(),
            ))
        } else {
            Ok(None)
        }
    }
}

/// In-memory row source
#[derive(Debug, Clone, Default)]
pub struct VecRowSource {
    rows: VecDeque<Vec<String>>,
}

impl VecRowSource {
    pub fn new<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        VecRowSource {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Rows not yet read
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl RowSource for VecRowSource {
    fn read_row(&mut self) -> Result<Option<Vec<String>>> {
        Ok(self.rows.pop_front())
    }
}
