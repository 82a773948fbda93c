//! Student marks file parser.
//!
//! The file is plain text: a first line holding a declared record count
//! (always discarded), then one `code,name,m1,m2,m3,exam` row per line.
//! Malformed rows are skipped with a warning; nothing here aborts a load.

use std::fmt;
use std::path::Path;

use crate::error::LoadError;
use crate::model::{checked_aggregate, Student};

/// Minimum number of comma-separated fields in a data row.
pub const REQUIRED_FIELDS: usize = 6;

/// Why a line (or the whole source) was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The row has fewer than [`REQUIRED_FIELDS`] fields.
    InsufficientFields,
    /// The code or one of the marks is not an integer.
    InvalidInteger,
    /// The marks are integers but their total does not fit in an `i64`.
    OutOfRange,
    /// The source could not be read at all.
    Unreadable,
}

/// A non-fatal diagnostic from parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number in the source, if the warning is about a line.
    pub line: Option<usize>,
    pub kind: WarningKind,
    /// Human-readable message, including the offending text.
    pub message: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Records plus the warnings produced while reading them.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub students: Vec<Student>,
    pub warnings: Vec<ParseWarning>,
}

/// Parse the full text of a marks file.
pub fn parse(raw: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    // Line 1 is the declared count and is never checked against the data.
    for (idx, line) in raw.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(student) => outcome.students.push(student),
            Err((kind, message)) => {
                tracing::warn!("skipping line {}: {}", idx + 1, message);
                outcome.warnings.push(ParseWarning {
                    line: Some(idx + 1),
                    kind,
                    message,
                });
            }
        }
    }

    tracing::debug!(
        "parsed {} student record(s), {} warning(s)",
        outcome.students.len(),
        outcome.warnings.len()
    );
    outcome
}

/// Read and parse a marks file.
///
/// An unreadable file yields no records and a single [`WarningKind::Unreadable`]
/// warning instead of an error.
pub fn load_file(path: &Path) -> ParseOutcome {
    match read_source(path) {
        Ok(content) => parse(&content),
        Err(e) => {
            tracing::warn!("{e}");
            ParseOutcome {
                students: Vec::new(),
                warnings: vec![ParseWarning {
                    line: None,
                    kind: WarningKind::Unreadable,
                    message: e.to_string(),
                }],
            }
        }
    }
}

fn read_source(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate one non-blank data row.
fn parse_line(line: &str) -> Result<Student, (WarningKind, String)> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    if fields.len() < REQUIRED_FIELDS {
        return Err((
            WarningKind::InsufficientFields,
            format!("insufficient data ({} of {REQUIRED_FIELDS} fields): {line}", fields.len()),
        ));
    }

    let invalid = |field: &str| -> (WarningKind, String) {
        (
            WarningKind::InvalidInteger,
            format!("data format error, `{field}` is not an integer: {line}"),
        )
    };

    let code = try_parse_int(fields[0]).ok_or_else(|| invalid(fields[0]))?;
    let name = fields[1];

    // Every field after the name is a mark, including any beyond the sixth.
    let marks = fields[2..]
        .iter()
        .map(|f| try_parse_int(f).ok_or_else(|| invalid(*f)))
        .collect::<Result<Vec<_>, _>>()?;

    if checked_aggregate([marks[0], marks[1], marks[2]], marks[3]).is_none() {
        return Err((
            WarningKind::OutOfRange,
            format!("marks total is out of range: {line}"),
        ));
    }

    Ok(Student::new(code, name, marks[0], marks[1], marks[2], marks[3]))
}

/// Integer coercion shared by the parser and the query engine.
pub fn try_parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

/// Serialize records back into the marks file format, count line included.
pub fn to_file_format(students: &[Student]) -> String {
    let mut out = format!("{}\n", students.len());
    for s in students {
        let [m1, m2, m3] = s.component_marks();
        out.push_str(&format!(
            "{},{},{m1},{m2},{m3},{}\n",
            s.code(),
            s.name(),
            s.exam_mark()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
3
1001, Ada Lovelace, 15, 18, 12, 80
1002, Alan Turing, 20, 20, 20, 95
1003, Grace Hopper, 10, 9, 11, 40
";

    #[test]
    fn parse_well_formed_file() {
        let outcome = parse(SAMPLE);
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.students.len(), 3);
        assert_eq!(outcome.students[0].code(), 1001);
        assert_eq!(outcome.students[0].name(), "Ada Lovelace");
        assert_eq!(outcome.students[2].aggregate_score(), 70);
    }

    #[test]
    fn first_line_discarded_even_if_it_is_a_record() {
        let outcome = parse("1, Not A Count, 1, 1, 1, 1\n2, Real, 2, 2, 2, 2\n");
        assert_eq!(outcome.students.len(), 1);
        assert_eq!(outcome.students[0].code(), 2);
    }

    #[test]
    fn declared_count_is_not_checked() {
        let outcome = parse("99\n1, A, 1, 2, 3, 4\n");
        assert_eq!(outcome.students.len(), 1);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn insufficient_fields_skipped_and_processing_continues() {
        let raw = "2\n7, Bob, 10, 12\n8, Carol, 10, 12, 14, 60\n";
        let outcome = parse(raw);
        assert_eq!(outcome.students.len(), 1);
        assert_eq!(outcome.students[0].name(), "Carol");
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].kind, WarningKind::InsufficientFields);
        assert_eq!(outcome.warnings[0].line, Some(2));
    }

    #[test]
    fn bad_integer_skipped() {
        let raw = "3\nx9, Dan, 1, 2, 3, 4\n10, Eve, 1, two, 3, 4\n11, Fay, 1, 2, 3, 4\n";
        let outcome = parse(raw);
        assert_eq!(outcome.students.len(), 1);
        assert_eq!(outcome.students[0].code(), 11);
        assert_eq!(outcome.warnings.len(), 2);
        assert!(outcome
            .warnings
            .iter()
            .all(|w| w.kind == WarningKind::InvalidInteger));
        assert!(outcome.warnings[1].message.contains("two"));
    }

    #[test]
    fn trailing_fields_must_be_integers() {
        let outcome = parse("2\n1, A, 1, 2, 3, 4, 5\n2, B, 1, 2, 3, 4, note\n");
        assert_eq!(outcome.students.len(), 1);
        assert_eq!(outcome.students[0].exam_mark(), 4);
        assert_eq!(outcome.warnings[0].line, Some(3));
    }

    #[test]
    fn overflowing_marks_skipped_and_processing_continues() {
        let outcome = parse("2\n1, Big, 9223372036854775807, 1, 0, 0\n2, Ok, 1, 1, 1, 1\n");
        assert_eq!(outcome.students.len(), 1);
        assert_eq!(outcome.students[0].code(), 2);
        assert_eq!(outcome.students[0].aggregate_score(), 4);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].kind, WarningKind::OutOfRange);
        assert_eq!(outcome.warnings[0].line, Some(2));
    }

    #[test]
    fn blank_lines_ignored() {
        let outcome = parse("2\n\n   \n1, A, 1, 2, 3, 4\n\n");
        assert_eq!(outcome.students.len(), 1);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn whitespace_around_fields_tolerated() {
        let outcome = parse("1\n   42 ,  Zed Zee ,3,  4 ,5 ,   6   \n");
        let s = &outcome.students[0];
        assert_eq!(s.code(), 42);
        assert_eq!(s.name(), "Zed Zee");
        assert_eq!(s.aggregate_score(), 18);
    }

    #[test]
    fn empty_input() {
        let outcome = parse("");
        assert!(outcome.students.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn load_missing_file_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = load_file(&dir.path().join("studentMarks.txt"));
        assert!(outcome.students.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].kind, WarningKind::Unreadable);
        assert_eq!(outcome.warnings[0].line, None);
    }

    #[test]
    fn load_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marks.txt");
        std::fs::write(&path, SAMPLE).unwrap();
        let outcome = load_file(&path);
        assert_eq!(outcome.students.len(), 3);
    }

    #[test]
    fn try_parse_int_accepts_signs_and_padding() {
        assert_eq!(try_parse_int(" 12 "), Some(12));
        assert_eq!(try_parse_int("-4"), Some(-4));
        assert_eq!(try_parse_int("+4"), Some(4));
        assert_eq!(try_parse_int("4.0"), None);
        assert_eq!(try_parse_int(""), None);
    }

    #[test]
    fn warning_display_includes_line() {
        let outcome = parse("1\n7, Bob\n");
        assert!(outcome.warnings[0].to_string().starts_with("line 2: "));
    }
}
