// ============================================================================
// Quote-Aware Record Splitting
// ============================================================================

/// One delimited record as read from the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line on which the record starts
    pub line: usize,
    pub fields: Vec<String>,
    /// input ended inside a quoted field
    pub unterminated: bool,
}

impl RawRecord {
    /// A line with nothing but whitespace and no quotes
    pub fn is_blank(&self) -> bool {
        self.fields.len() == 1 && self.fields[0].trim().is_empty()
    }
}

/// Split text into records, respecting quoted fields.
///
/// `"` opens and closes a quoted field, `""` inside quotes is a literal quote,
/// and delimiters or line breaks inside quotes belong to the field.
/// `\r\n` and `\n` both end a record.
pub fn split_records(text: &str, delimiter: char) -> Vec<RawRecord> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut record_started = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        record_started = true;
        match ch {
            '"' => {
                if in_quotes {
                    // Check for escaped quote ("")
                    if chars.peek() == Some(&'"') {
                        current.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
                records.push(RawRecord {
                    line: record_line,
                    fields: std::mem::take(&mut fields),
                    unterminated: false,
                });
                line += 1;
                record_line = line;
                record_started = false;
            }
            '\n' => {
                current.push(ch);
                line += 1;
            }
            c if c == delimiter && !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if record_started {
        fields.push(current);
        records.push(RawRecord {
            line: record_line,
            fields,
            unterminated: in_quotes,
        });
    }
    records
}
