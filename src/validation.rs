//! Caller-facing argument validation.
//!
//! Runs before any network call. Each failure is an
//! [`InvalidArgument`](SearchConsoleError::InvalidArgument) whose message
//! names the valid set.

use crate::config::{MAX_ROW_LIMIT, MIN_ROW_LIMIT};
use crate::error::{Result, SearchConsoleError};
use crate::models::{Dimension, Interval, Metric, SearchType};

/// Parse dimension names, rejecting the first unknown one.
pub fn dimensions<S: AsRef<str>>(names: &[S]) -> Result<Vec<Dimension>> {
    names.iter().map(|n| n.as_ref().parse()).collect()
}

/// Check a row limit against `[1, 25000]`.
pub fn row_limit(limit: i64) -> Result<u32> {
    if limit < i64::from(MIN_ROW_LIMIT) || limit > i64::from(MAX_ROW_LIMIT) {
        return Err(SearchConsoleError::InvalidArgument(format!(
            "row_limit must be between {} and {}",
            MIN_ROW_LIMIT, MAX_ROW_LIMIT
        )));
    }
    Ok(limit as u32)
}

pub fn search_type(name: &str) -> Result<SearchType> {
    name.parse()
}

pub fn metric(name: &str) -> Result<Metric> {
    name.parse()
}

pub fn interval(name: &str) -> Result<Interval> {
    name.parse()
}
