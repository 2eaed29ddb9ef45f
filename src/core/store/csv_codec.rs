//! CSV encoding for grade records
//!
//! The file has a header row and one row per record, no index column:
//!
//! ```text
//! Course_Code,Units,Score,Grade,GP,WP
//! CVE311,3,75,A,5,15
//! ```
//!
//! Fields containing a comma, quote or line break are wrapped in double quotes
//! with inner quotes doubled.

use crate::core::models::{Grade, GradeRecord};

/// Column names, in file order
pub const COLUMNS: [&str; 6] = ["Course_Code", "Units", "Score", "Grade", "GP", "WP"];

/// Render the header and all records as CSV text
#[must_use]
pub fn encode_records(records: &[GradeRecord]) -> String {
    let mut output = COLUMNS.join(",");
    output.push('\n');
    for record in records {
        output.push_str(&encode_record(record));
        output.push('\n');
    }
    output
}

/// Render a single record as a CSV row (without line terminator)
#[must_use]
pub fn encode_record(record: &GradeRecord) -> String {
    [
        escape_field(record.course_code()),
        record.units().to_string(),
        record.score().to_string(),
        record.grade().to_string(),
        record.grade_point().to_string(),
        record.weighted_points().to_string(),
    ]
    .join(",")
}

/// A decoding failure tied to a 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// Line the problem was found on
    pub line: usize,
    /// Description of the problem
    pub reason: String,
}

impl DecodeError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Parse CSV text produced by [`encode_records`]
///
/// Blank lines are ignored. The derived columns must agree with the score and
/// units on the same row.
///
/// # Errors
/// Returns the first problem found: missing or unexpected header, wrong field
/// count, unparseable value, out-of-range value or inconsistent derived column.
pub fn decode_records(content: &str) -> Result<Vec<GradeRecord>, DecodeError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rows = split_rows(content)?;

    let mut rows = rows.into_iter().filter(|(_, fields)| !is_blank(fields));
    let (header_line, header) = rows
        .next()
        .ok_or_else(|| DecodeError::new(1, "missing header row"))?;
    let header_matches = header.len() == COLUMNS.len()
        && header
            .iter()
            .zip(COLUMNS)
            .all(|(found, expected)| found.trim() == expected);
    if !header_matches {
        return Err(DecodeError::new(
            header_line,
            format!(
                "expected header '{}', found '{}'",
                COLUMNS.join(","),
                header.join(",")
            ),
        ));
    }

    rows.map(|(line, fields)| decode_row(line, &fields))
        .collect()
}

fn is_blank(fields: &[String]) -> bool {
    fields.len() == 1 && fields[0].trim().is_empty()
}

fn decode_row(line: usize, fields: &[String]) -> Result<GradeRecord, DecodeError> {
    if fields.len() != COLUMNS.len() {
        return Err(DecodeError::new(
            line,
            format!(
                "expected {} fields, found {}",
                COLUMNS.len(),
                fields.len()
            ),
        ));
    }

    let units = parse_field::<i64>(line, "Units", &fields[1])?;
    let score = parse_field::<f64>(line, "Score", &fields[2])?;
    let grade = fields[3]
        .parse::<Grade>()
        .map_err(|e| DecodeError::new(line, e))?;
    let grade_point = parse_field::<u32>(line, "GP", &fields[4])?;
    let weighted_points = parse_field::<u32>(line, "WP", &fields[5])?;

    let record =
        GradeRecord::new(&fields[0], units, score).map_err(|e| DecodeError::new(line, e.to_string()))?;

    if record.grade() != grade
        || record.grade_point() != grade_point
        || record.weighted_points() != weighted_points
    {
        return Err(DecodeError::new(
            line,
            format!(
                "stored grade {grade}/{grade_point}/{weighted_points} does not match score {score} and units {units} ({}/{}/{})",
                record.grade(),
                record.grade_point(),
                record.weighted_points()
            ),
        ));
    }

    Ok(record)
}

fn parse_field<T: std::str::FromStr>(
    line: usize,
    column: &str,
    raw: &str,
) -> Result<T, DecodeError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| DecodeError::new(line, format!("invalid {column} value '{raw}'")))
}

/// Quote a field when it contains a delimiter, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split CSV text into rows of fields, tracking the line each row starts on
///
/// Quoted fields may span lines. `\r\n` line endings are accepted.
fn split_rows(content: &str) -> Result<Vec<(usize, Vec<String>)>, DecodeError> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                rows.push((row_start, std::mem::take(&mut fields)));
                line += 1;
                row_start = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(DecodeError::new(row_start, "unterminated quoted field"));
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        rows.push((row_start, fields));
    }

    Ok(rows)
}
