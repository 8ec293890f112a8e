//! CSV input stage: parses the student roster into typed records.

use csv::{ReaderBuilder, Trim};
use std::fs::File;
use thiserror::Error;
use tracing::{error, warn};

use crate::records::{SUBJECT_COUNT, StudentRecord};

/// Fields per data row: student name plus one score per subject.
const MIN_FIELDS: usize = SUBJECT_COUNT + 1;

/// Fatal reader errors. Each aborts the whole run with no partial output.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("input file not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid score on line {line}: {value:?} is not an integer")]
    InvalidScore { line: u64, value: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Reads student records from a CSV file, in input order.
///
/// The header row is read and discarded. Rows with fewer than six fields
/// are skipped with a warning; extra trailing fields are ignored. A score
/// field that does not parse as an integer aborts the run with
/// [`ReadError::InvalidScore`] — no further rows are read.
pub fn read_students(path: &str) -> Result<Vec<StudentRecord>, ReadError> {
    let file = File::open(path).map_err(|source| {
        error!(path, "Input file could not be opened");
        ReadError::FileNotFound {
            path: path.to_string(),
            source,
        }
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut students = Vec::new();

    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, |p| p.line());

        if row.len() < MIN_FIELDS {
            warn!(line, row = ?row, "Row has missing fields, skipping");
            continue;
        }

        let mut scores = [0i64; SUBJECT_COUNT];
        for (slot, field) in scores.iter_mut().zip(row.iter().skip(1)) {
            *slot = field.parse().map_err(|_| {
                error!(line, value = field, "Score is not an integer, aborting");
                ReadError::InvalidScore {
                    line,
                    value: field.to_string(),
                }
            })?;
        }

        let [
            cyber_security,
            data_science,
            computing_foundation,
            digital_literacy,
            software_foundation,
        ] = scores;

        students.push(StudentRecord {
            name: row[0].to_string(),
            cyber_security,
            data_science,
            computing_foundation,
            digital_literacy,
            software_foundation,
        });
    }

    Ok(students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    const HEADER: &str =
        "name,cyber_security,data_science,computing_foundation,digital_literacy,software_foundation";

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn write_input(name: &str, contents: &str) -> String {
        let path = temp_path(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_valid_rows_in_order() {
        let path = write_input(
            "student_grader_test_valid.csv",
            &format!("{HEADER}\nAlice,90,85,70,95,100\nBob, 30,40,35,20,25\n"),
        );

        let students = read_students(&path).unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "Alice");
        assert_eq!(students[0].scores(), [90, 85, 70, 95, 100]);
        assert_eq!(students[1].name, "Bob");
        assert_eq!(students[1].scores(), [30, 40, 35, 20, 25]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_short_row_is_skipped() {
        let path = write_input(
            "student_grader_test_short.csv",
            &format!("{HEADER}\nAlice,90,85,70,95,100\nBob,30,40,35\nCarla,60,60,60,60,60\n"),
        );

        let students = read_students(&path).unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "Alice");
        assert_eq!(students[1].name, "Carla");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_score_aborts() {
        let path = write_input(
            "student_grader_test_invalid.csv",
            &format!("{HEADER}\nAlice,90,85,70,95,100\nCarl,abc,50,60,70,80\n"),
        );

        let err = read_students(&path).unwrap_err();

        match err {
            ReadError::InvalidScore { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidScore, got {other:?}"),
        }

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = read_students(&temp_path("student_grader_test_missing.csv")).unwrap_err();
        assert!(matches!(err, ReadError::FileNotFound { .. }));
    }

    #[test]
    fn test_header_only_returns_empty() {
        let path = write_input("student_grader_test_header_only.csv", &format!("{HEADER}\n"));

        let students = read_students(&path).unwrap();
        assert!(students.is_empty());

        fs::remove_file(&path).unwrap();
    }
}
