use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::errors::VocabError;
use crate::transcription::Transcriber;

// @module: Vocabulary CSV parsing and enrichment

// @struct: Single vocabulary record (one CSV row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabRecord {
    // @field: Cell values, aligned with the collection headers
    pub fields: Vec<String>,
}

impl VocabRecord {
    /// Creates a new record from its cell values
    pub fn new(fields: Vec<String>) -> Self {
        VocabRecord { fields }
    }

    /// Cell value at a column index; empty for out-of-range indices
    pub fn get(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }

    /// Set the cell at a column index, padding the record if needed
    pub fn set(&mut self, index: usize, value: String) {
        if index >= self.fields.len() {
            self.fields.resize(index + 1, String::new());
        }
        self.fields[index] = value;
    }
}

/// Counts of records touched and left alone by an enrichment pass
#[derive(Debug, Clone, Copy, Default)]
pub struct EnrichmentOutcome {
    /// Records whose pronunciation cell was written
    pub enriched: usize,
    /// Records skipped because the cell was already filled
    pub skipped: usize,
}

// @struct: One vocabulary CSV file held in memory
#[derive(Debug, Clone)]
pub struct VocabCollection {
    // @field: File the collection was loaded from
    pub source_file: PathBuf,

    // @field: Header row, in file order
    pub headers: Vec<String>,

    // @field: Data rows, in file order
    pub records: Vec<VocabRecord>,
}

impl VocabCollection {
    /// Load a vocabulary collection from a CSV file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read CSV file: {:?}", path))?;
        let (headers, records) = Self::parse_csv_string(&content)
            .with_context(|| format!("Failed to parse CSV file: {:?}", path))?;

        Ok(VocabCollection {
            source_file: path.to_path_buf(),
            headers,
            records,
        })
    }

    /// Parse CSV text into a header row and data records.
    ///
    /// Quoted fields may contain commas, doubled-quote escapes and embedded
    /// newlines; `\r\n` line endings are accepted. Blank lines are skipped.
    /// Records shorter than the header are padded with empty cells; records
    /// longer than the header are an error.
    pub fn parse_csv_string(content: &str) -> Result<(Vec<String>, Vec<VocabRecord>)> {
        let mut rows = parse_rows(content)?;
        if rows.is_empty() {
            return Err(VocabError::MissingHeader.into());
        }

        let (_, headers) = rows.remove(0);
        let width = headers.len();
        let mut records = Vec::with_capacity(rows.len());

        for (line, mut fields) in rows {
            if fields.len() > width {
                return Err(VocabError::RaggedRecord {
                    line,
                    expected: width,
                    found: fields.len(),
                }
                .into());
            }
            if fields.len() < width {
                debug!(
                    "Padding short record on line {} ({} of {} fields)",
                    line,
                    fields.len(),
                    width
                );
                fields.resize(width, String::new());
            }
            records.push(VocabRecord::new(fields));
        }

        Ok((headers, records))
    }

    /// Index of a column by header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Index of a column, appending it (with empty cells) when missing
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.headers.push(name.to_string());
        let width = self.headers.len();
        for record in &mut self.records {
            record.fields.resize(width, String::new());
        }
        width - 1
    }

    /// Fill the pronunciation column by transcribing the term column.
    ///
    /// Records whose pronunciation cell is already non-empty are skipped
    /// unless `overwrite` is set. The pronunciation column is created when
    /// missing; a missing term column is an error.
    pub fn enrich(
        &mut self,
        transcriber: &Transcriber,
        term_column: &str,
        pronunciation_column: &str,
        overwrite: bool,
    ) -> Result<EnrichmentOutcome> {
        let term_index = self
            .column_index(term_column)
            .ok_or_else(|| VocabError::ColumnNotFound(term_column.to_string()))?;
        let pronunciation_index = self.ensure_column(pronunciation_column);

        let mut outcome = EnrichmentOutcome::default();
        for record in &mut self.records {
            if !overwrite && !record.get(pronunciation_index).is_empty() {
                outcome.skipped += 1;
                continue;
            }
            let term = record.get(term_index).to_string();
            record.set(pronunciation_index, transcriber.transcribe(&term));
            outcome.enriched += 1;
        }

        Ok(outcome)
    }

    /// Render the collection back to CSV text
    pub fn to_csv_string(&self) -> String {
        let mut out = String::new();
        write_row(&mut out, &self.headers);
        for record in &self.records {
            write_row(&mut out, &record.fields);
        }
        out
    }

    /// Write the collection back to the file it was loaded from
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.source_file)
    }

    /// Write the collection to an arbitrary path
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_csv_string())
            .with_context(|| format!("Failed to write CSV file: {:?}", path))
    }

    // @returns: Number of data records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // @checks: Collection has no data records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Split CSV text into rows of fields, tracking the 1-based start line of
/// each row for error reporting.
fn parse_rows(content: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut rows: Vec<(usize, Vec<String>)> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_quoted = false;
    let mut line = 1usize;
    let mut record_line = 1usize;

    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        field.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    field.push(ch);
                    line += 1;
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() => {
                in_quotes = true;
                field_quoted = true;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                field_quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {
                // consumed together with the following \n
            }
            '\n' => {
                line += 1;
                if !record.is_empty() || !field.is_empty() || field_quoted {
                    record.push(std::mem::take(&mut field));
                    rows.push((record_line, std::mem::take(&mut record)));
                }
                field_quoted = false;
                record_line = line;
            }
            '\r' => {
                // lone carriage return, ignored
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(VocabError::UnterminatedQuote { line: record_line }.into());
    }
    if !record.is_empty() || !field.is_empty() || field_quoted {
        record.push(field);
        rows.push((record_line, record));
    }

    Ok(rows)
}

/// Append one CSV row, quoting only fields that need it
fn write_row(out: &mut String, fields: &[String]) {
    for (idx, cell) in fields.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}
