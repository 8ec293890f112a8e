use serde::Serialize;

use crate::evaluator::grade::Grade;

/// Number of graded subjects per student.
pub const SUBJECT_COUNT: usize = 5;

/// Minimum average required to pass.
pub const PASS_MARK: f64 = 40.0;

/// A single student row parsed from the input CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub name: String,
    pub cyber_security: i64,
    pub data_science: i64,
    pub computing_foundation: i64,
    pub digital_literacy: i64,
    pub software_foundation: i64,
}

impl StudentRecord {
    /// Subject scores in input column order.
    pub fn scores(&self) -> [i64; SUBJECT_COUNT] {
        [
            self.cyber_security,
            self.data_science,
            self.computing_foundation,
            self.digital_literacy,
            self.software_foundation,
        ]
    }
}

/// Evaluated summary for one student.
///
/// Field declaration order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentResult {
    pub name: String,
    pub cyber_security: i64,
    pub data_science: i64,
    pub computing_foundation: i64,
    pub digital_literacy: i64,
    pub software_foundation: i64,
    pub average: f64,
    pub grade: Grade,
    pub min_score: i64,
    pub max_score: i64,
    pub score_range: i64,
    pub pass_fail: PassFail,
}

/// Pass indicator written to the `pass_fail` output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PassFail {
    Passed,
    Failed,
}

impl PassFail {
    /// `Passed` when the average meets [`PASS_MARK`], else `Failed`.
    pub fn from_average(average: f64) -> Self {
        if average >= PASS_MARK {
            PassFail::Passed
        } else {
            PassFail::Failed
        }
    }
}
