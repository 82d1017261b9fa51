// src/csv.rs
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Split one spreadsheet line into trimmed fields.
///
/// Quote handling is a plain toggle: every `"` flips the in-quotes state and
/// is dropped; `sep` only splits outside quotes. There is no `""` escape, so
/// a doubled quote inside a quoted field simply vanishes.
pub fn split_line(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == sep && !in_quotes => {
                fields.push(take(&mut field).trim().to_string());
            }
            _ => field.push(ch),
        }
    }
    fields.push(field.trim().to_string());

    fields
}

/// A parsed source table: the header line plus the raw data lines.
/// Data lines keep their position so row ids can be derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<'a> {
    pub headers: Vec<String>,
    pub lines: Vec<&'a str>,
}

impl<'a> Table<'a> {
    /// The whole text is trimmed, then split on `\n`. The first line is the
    /// header; every later line is a data row, blank ones included.
    ///
    /// Header cells are split on every `sep`, quotes or not, so a quoted
    /// comma in a header raises the field count data rows must reach.
    pub fn parse(text: &'a str, sep: char) -> Self {
        let mut lines = text.trim().split('\n');
        let headers = lines
            .next()
            .map(|h| h.split(sep).map(|c| c.trim().to_string()).collect())
            .unwrap_or_default();
        Self { headers, lines: lines.collect() }
    }

    pub fn header_count(&self) -> usize { self.headers.len() }

    /// `(row_index, fields)` with `row_index` 1-based over data lines.
    pub fn rows(&self, sep: char) -> impl Iterator<Item = (usize, Vec<String>)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(move |(i, line)| (i + 1, split_line(line, sep)))
    }
}
