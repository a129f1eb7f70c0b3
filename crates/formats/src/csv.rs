//! Minimal RFC4180-style CSV tokenizer.
//!
//! Comma-separated cells, optional double-quoting with doubled-quote
//! escaping, CRLF or LF row endings. Blank lines are skipped.

#[derive(Debug)]
pub enum CsvError {
    UnclosedQuote { line: usize },
    QuoteInUnquotedCell { line: usize },
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvError::UnclosedQuote { line } => {
                write!(f, "unclosed quote starting on line {line}")
            }
            CsvError::QuoteInUnquotedCell { line } => {
                write!(f, "stray quote inside unquoted cell on line {line}")
            }
        }
    }
}

impl std::error::Error for CsvError {}

pub fn parse_csv(text: &str) -> Result<Vec<Vec<String>>, CsvError> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut quote_open_line = 1;
    let mut line = 1;
    let mut cell_started = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        cell.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    cell.push(c);
                }
                _ => cell.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                if cell_started && !cell.is_empty() {
                    return Err(CsvError::QuoteInUnquotedCell { line });
                }
                in_quotes = true;
                quote_open_line = line;
                cell_started = true;
            }
            ',' => {
                row.push(std::mem::take(&mut cell));
                cell_started = false;
            }
            '\r' => {
                // Consumed as part of CRLF; a bare CR is ignored.
            }
            '\n' => {
                line += 1;
                if cell_started || !cell.is_empty() || !row.is_empty() {
                    row.push(std::mem::take(&mut cell));
                    rows.push(std::mem::take(&mut row));
                }
                cell_started = false;
            }
            _ => {
                cell.push(c);
                cell_started = true;
            }
        }
    }

    if in_quotes {
        return Err(CsvError::UnclosedQuote {
            line: quote_open_line,
        });
    }
    if cell_started || !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    Ok(rows)
}
