//! Minimal Excel-dialect CSV record splitting.
//!
//! The signal tables this crate consumes are plain comma-separated rows,
//! occasionally with double-quoted fields (spreadsheet exports). Records
//! never span lines in these tables, so the splitter works on one line at a
//! time and a record boundary is always a line boundary.

/// Splits one CSV record into its fields.
///
/// Commas separate fields. A field starting with a double quote is quoted:
/// commas inside it are literal and `""` encodes a single quote character.
/// A quote anywhere else is an ordinary character. An empty line yields one
/// empty field, matching the spreadsheet dialect.
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if quoted {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    let _ = chars.next();
                    field.push('"');
                } else {
                    quoted = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                ',' => fields.push(std::mem::take(&mut field)),
                '"' if field.is_empty() => quoted = true,
                _ => field.push(c),
            }
        }
    }
    fields.push(field);
    fields
}
