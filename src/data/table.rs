use crate::error::{ExplorerError, ExplorerResult};

/// One data record with the 1-based source line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub line: usize,
    pub cells: Vec<String>,
}

impl RawRecord {
    /// Cell at `index`, empty when the record is shorter than the header.
    #[must_use]
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", String::as_str)
    }
}

/// Header row plus untyped records, before any column coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl RawTable {
    /// Position of the first header named exactly `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// Parses comma-separated text with double-quoted cells.
///
/// Quoted cells may contain commas, line breaks and `""` escapes. Blank lines
/// are skipped. Header cells are trimmed; record cells are kept verbatim. Records longer than the header are rejected unless the extra
/// cells are blank.
pub fn parse_table(text: &str) -> ExplorerResult<RawTable> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records = split_records(text)?.into_iter();

    let Some(header) = records.next() else {
        return Err(ExplorerError::MalformedSource {
            line: 1,
            reason: "missing header row".to_owned(),
        });
    };
    let headers: Vec<String> = header
        .cells
        .into_iter()
        .map(|cell| cell.trim().to_owned())
        .collect();

    let mut out = Vec::new();
    for record in records {
        if record.cells.len() > headers.len()
            && record.cells[headers.len()..]
                .iter()
                .any(|cell| !cell.trim().is_empty())
        {
            return Err(ExplorerError::MalformedSource {
                line: record.line,
                reason: format!(
                    "expected {} cells, found {}",
                    headers.len(),
                    record.cells.len()
                ),
            });
        }
        out.push(record);
    }

    Ok(RawTable {
        headers,
        records: out,
    })
}

fn split_records(text: &str) -> ExplorerResult<Vec<RawRecord>> {
    let mut records = Vec::new();
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut record_line = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    cell.push(c);
                }
                _ => cell.push(c),
            }
            continue;
        }

        match c {
            '"' if cell.trim().is_empty() => {
                cell.clear();
                in_quotes = true;
            }
            ',' => cells.push(std::mem::take(&mut cell)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => {
                cells.push(std::mem::take(&mut cell));
                push_record(&mut records, std::mem::take(&mut cells), record_line);
                line += 1;
                record_line = line;
            }
            _ => cell.push(c),
        }
    }

    if in_quotes {
        return Err(ExplorerError::MalformedSource {
            line: record_line,
            reason: "unterminated quoted cell".to_owned(),
        });
    }
    if !cells.is_empty() || !cell.is_empty() {
        cells.push(cell);
        push_record(&mut records, cells, record_line);
    }

    Ok(records)
}

fn push_record(records: &mut Vec<RawRecord>, cells: Vec<String>, line: usize) {
    let blank = cells.len() == 1 && cells[0].trim().is_empty();
    if !blank {
        records.push(RawRecord { line, cells });
    }
}
