//! CSV ingestion of film records.
//!
//! The header names the columns; `title`, `rating`, `year`, `votes` and
//! `genre` are required in any order and anything else is ignored. Fields
//! may be double-quoted, with `""` for a literal quote. A quoted field may
//! span several lines.
//!
//! Cleaning:
//! - `votes` has thousands separators removed before parsing
//! - `year` is the first run of four digits in the field (`"(2019)"` → 2019)
//! - rows whose rating, votes or year do not parse, or whose title or genre
//!   is blank, are dropped and counted in [`LoadReport::dropped`]

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;
use std::path::Path;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{Record, RecordSet};

const REQUIRED: [&str; 5] = ["title", "rating", "year", "votes", "genre"];

/// Records that survived cleaning plus the number of rows dropped
#[derive(Clone, Debug, PartialEq)]
pub struct LoadReport {
    pub records: RecordSet,
    pub dropped: usize,
}

/// Column index of each required field
struct Columns {
    title: usize,
    rating: usize,
    year: usize,
    votes: usize,
    genre: usize,
}

impl Columns {
    fn from_header(fields: &[String]) -> Result<Self> {
        let find = |name: &str| {
            fields
                .iter()
                .position(|f| f.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| Error::Parse {
                    line: 1,
                    message: format!(
                        "missing required column '{}' (need {})",
                        name,
                        REQUIRED.join(", ")
                    ),
                })
        };
        Ok(Self {
            title: find("title")?,
            rating: find("rating")?,
            year: find("year")?,
            votes: find("votes")?,
            genre: find("genre")?,
        })
    }

    fn width(&self) -> usize {
        [self.title, self.rating, self.year, self.votes, self.genre]
            .into_iter()
            .max()
            .map_or(0, |m| m + 1)
    }
}

/// Splits physical lines into records, carrying quoted fields across lines.
#[derive(Default)]
struct FieldSplitter {
    fields: Vec<String>,
    field: String,
    in_quotes: bool,
    /// A quoted field just closed; only a separator may follow
    closed: bool,
}

impl FieldSplitter {
    /// Feed one line. Returns the record's fields once it is complete.
    fn feed(&mut self, line: &str) -> std::result::Result<Option<Vec<String>>, String> {
        if self.in_quotes {
            self.field.push('\n');
        }

        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' if self.in_quotes => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        self.field.push('"');
                    } else {
                        self.in_quotes = false;
                        self.closed = true;
                    }
                }
                _ if self.in_quotes => self.field.push(c),
                ',' => {
                    self.fields.push(mem::take(&mut self.field));
                    self.closed = false;
                }
                _ if self.closed && c.is_whitespace() => {}
                _ if self.closed => {
                    return Err(format!("unexpected '{}' after a closing quote", c));
                }
                '"' if self.field.trim().is_empty() => {
                    self.field.clear();
                    self.in_quotes = true;
                }
                _ => self.field.push(c),
            }
        }

        if self.in_quotes {
            return Ok(None);
        }
        self.fields.push(mem::take(&mut self.field));
        self.closed = false;
        Ok(Some(mem::take(&mut self.fields)))
    }

    fn is_open(&self) -> bool {
        self.in_quotes
    }
}

/// Load and clean a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<LoadReport> {
    let path = path.as_ref();
    let report = parse_csv(BufReader::new(File::open(path)?))?;
    info!(
        path = %path.display(),
        records = report.records.len(),
        dropped = report.dropped,
        "loaded records"
    );
    Ok(report)
}

/// Parse and clean CSV text from any buffered reader.
pub fn parse_csv<R: BufRead>(reader: R) -> Result<LoadReport> {
    let year_pattern = Regex::new(r"[0-9]{4}")?;
    let mut lines = reader.lines();
    let mut splitter = FieldSplitter::default();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(Error::EmptyInput("CSV input has no header".into())),
    };
    let header_fields = match splitter.feed(header.trim_start_matches('\u{feff}')) {
        Ok(Some(fields)) => fields,
        Ok(None) => return Err(parse_error(1, "unterminated quoted field")),
        Err(message) => return Err(parse_error(1, message)),
    };
    let columns = Columns::from_header(&header_fields)?;

    let mut records = RecordSet::new();
    let mut dropped = 0;
    let mut record_start = 2;

    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        let line = line?;
        if !splitter.is_open() {
            if line.trim().is_empty() {
                continue;
            }
            record_start = line_no;
        }

        let fields = match splitter.feed(&line) {
            Ok(Some(fields)) => fields,
            Ok(None) => continue,
            Err(message) => return Err(parse_error(line_no, message)),
        };
        match clean_row(&fields, &columns, &year_pattern) {
            Some(record) => records.push(record),
            None => {
                debug!(line = record_start, "dropped row");
                dropped += 1;
            }
        }
    }

    if splitter.is_open() {
        return Err(parse_error(record_start, "unterminated quoted field"));
    }
    if records.is_empty() {
        return Err(Error::EmptyInput(format!(
            "no valid records ({} rows dropped)",
            dropped
        )));
    }
    Ok(LoadReport { records, dropped })
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

fn clean_row(fields: &[String], columns: &Columns, year_pattern: &Regex) -> Option<Record> {
    if fields.len() < columns.width() {
        return None;
    }

    let title = fields[columns.title].trim();
    let genre = fields[columns.genre].trim();
    if title.is_empty() || genre.is_empty() {
        return None;
    }

    let rating = parse_number(&fields[columns.rating])?;
    let votes = parse_number(&fields[columns.votes].replace(',', ""))?;
    let year = year_pattern
        .find(&fields[columns.year])
        .and_then(|m| m.as_str().parse::<f64>().ok())?;

    Some(Record::new(title, rating, Some(year), votes, genre))
}

fn parse_number(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
