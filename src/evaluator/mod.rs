//! Per-student evaluation and aggregation.
//!
//! This module derives each student's summary metrics (average, letter
//! grade, score spread, pass/fail) and applies the evaluation across the
//! whole roster in input order.

pub mod evaluate;
pub mod grade;
pub mod utility;
