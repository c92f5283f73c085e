use serde::{Deserialize, Serialize};

/// Result of a report that may legitimately have nothing to show.
///
/// `NoData` is informational, never an error. Failures travel separately as
/// `Err(SearchConsoleError)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome<T> {
    Data(T),
    NoData,
}

impl<T> Outcome<T> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Outcome::NoData)
    }

    pub fn data(self) -> Option<T> {
        match self {
            Outcome::Data(value) => Some(value),
            Outcome::NoData => None,
        }
    }
}
