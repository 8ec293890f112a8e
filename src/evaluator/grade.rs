use serde::Serialize;

/// Letter grade assigned from a student's average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    /// Converts an average score (0–100 scale) into a letter grade.
    ///
    /// | Range       | Grade |
    /// |-------------|-------|
    /// | >= 80       | A     |
    /// | >= 70       | B     |
    /// | >= 60       | C     |
    /// | >= 50       | D     |
    /// | >= 40       | E     |
    /// | < 40        | F     |
    pub fn from_average(average: f64) -> Self {
        match average {
            a if a >= 80.0 => Grade::A,
            a if a >= 70.0 => Grade::B,
            a if a >= 60.0 => Grade::C,
            a if a >= 50.0 => Grade::D,
            a if a >= 40.0 => Grade::E,
            _ => Grade::F,
        }
    }
}
