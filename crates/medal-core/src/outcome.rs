use serde::Serialize;

/// Result of an aggregation whose filter may legitimately match nothing.
///
/// `Empty` is a normal outcome, not a failure: callers render a "no data"
/// state instead of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Outcome<T> {
    Empty,
    Data(T),
}

impl<T> Outcome<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Empty => None,
            Outcome::Data(data) => Some(data),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Empty => None,
            Outcome::Data(data) => Some(data),
        }
    }
}
