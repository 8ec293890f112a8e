use crate::evaluator::grade::Grade;
use crate::evaluator::utility::{mean, min_max, round2};
use crate::records::{PassFail, StudentRecord, StudentResult};

/// Derives the full summary for one student record.
///
/// The five subject scores are carried over unchanged. The average is the
/// mean of the subject scores rounded to two decimal places; the divisor is
/// the number of subject-score fields, so it tracks the record schema.
pub fn evaluate_record(record: &StudentRecord) -> StudentResult {
    let scores = record.scores();
    let average = round2(mean(&scores));
    let (min_score, max_score) = min_max(&scores);

    StudentResult {
        name: record.name.clone(),
        cyber_security: record.cyber_security,
        data_science: record.data_science,
        computing_foundation: record.computing_foundation,
        digital_literacy: record.digital_literacy,
        software_foundation: record.software_foundation,
        average,
        grade: Grade::from_average(average),
        min_score,
        max_score,
        score_range: max_score - min_score,
        pass_fail: PassFail::from_average(average),
    }
}

/// Evaluates every record, preserving input order in the output.
pub fn evaluate_all(records: &[StudentRecord]) -> Vec<StudentResult> {
    records.iter().map(evaluate_record).collect()
}
