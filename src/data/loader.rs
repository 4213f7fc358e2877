// src/data/loader.rs
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::DataError;
use crate::models::{order::Order, order_line::OrderLine, product::Product};

/// A row type that can be decoded from one CSV record and checked against its invariants.
pub trait Record: DeserializeOwned {
    /// `headers` is the source file's header, for checks that depend on which columns exist.
    fn validate(&self, headers: &[String]) -> Result<(), String>;
}

/// Rows of one source file, in file order, together with the file's header.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet<T> {
    headers: Vec<String>,
    rows: Vec<T>,
}

impl<T> RowSet<T> {
    pub fn new<H: Into<String>>(headers: impl IntoIterator<Item = H>, rows: Vec<T>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Opens `path` and decodes every record into `T`.
pub fn load<T: Record>(path: &Path) -> Result<RowSet<T>, DataError> {
    let file = File::open(path).map_err(|e| DataError::open(path, e))?;
    let set = read(file, path)?;
    if set.is_empty() {
        warn!(path = %path.display(), "Data file has no rows");
    }
    debug!(path = %path.display(), rows = set.len(), "Loaded data file");
    Ok(set)
}

/// Decodes CSV from any reader; `path` is only used to label errors.
pub fn read<T: Record, R: Read>(mut reader: R, path: &Path) -> Result<RowSet<T>, DataError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input).map_err(|e| DataError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_slice());

    let header_record = csv_reader
        .headers()
        .map_err(|e| DataError::parse(path, error_line(&input, &e, 1), e))?
        .clone();
    let headers: Vec<String> = header_record.iter().map(str::to_owned).collect();

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    let mut line = 1;
    loop {
        match csv_reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(DataError::parse(path, error_line(&input, &e, line + 1), e)),
        }
        line = record
            .position()
            .map(|p| line_at(&input, p.byte()))
            .unwrap_or(line + 1);

        let row: T = record
            .deserialize(Some(&header_record))
            .map_err(|e| DataError::parse(path, line, e))?;
        row.validate(&headers).map_err(|reason| DataError::InvalidRow {
            path: path.to_path_buf(),
            line,
            reason,
        })?;
        rows.push(row);
    }

    Ok(RowSet::new(headers, rows))
}

/// Line on which the record starting at `byte` begins. The csv reader places a
/// record's position before any blank lines it skips, so those are stepped over.
fn line_at(input: &[u8], byte: u64) -> u64 {
    let start = usize::try_from(byte).map_or(input.len(), |b| b.min(input.len()));
    let blank = input[start..]
        .iter()
        .take_while(|&&b| b == b'\n' || b == b'\r')
        .count();
    let newlines = input[..start + blank].iter().filter(|&&b| b == b'\n').count();
    newlines as u64 + 1
}

fn error_line(input: &[u8], err: &csv::Error, fallback: u64) -> u64 {
    err.position()
        .map(|p| line_at(input, p.byte()))
        .unwrap_or(fallback)
}

pub fn load_products(path: &Path) -> Result<RowSet<Product>, DataError> {
    load(path)
}

/// Loads orders. A header that declares a total column makes that column mandatory on every row.
pub fn load_orders(path: &Path) -> Result<RowSet<Order>, DataError> {
    load(path)
}

pub fn load_order_lines(path: &Path) -> Result<RowSet<OrderLine>, DataError> {
    load(path)
}
