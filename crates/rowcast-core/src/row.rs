mod from_value;
pub use from_value::FromValue;

mod kind;
pub use kind::ScalarKind;

mod row_stream;
pub use row_stream::RowStream;

mod value;
pub use value::Value;

mod value_chrono;
mod value_decimal;

/// One result row: an ordered sequence of `(column name, value)` pairs.
///
/// Column order is the binding order. A row is produced once per result row
/// and consumed once by the materializer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        Self {
            columns: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((name.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates the columns in binding order.
    pub fn columns(&self) -> impl Iterator<Item = &(String, Value)> {
        self.columns.iter()
    }

    pub fn into_columns(self) -> std::vec::IntoIter<(String, Value)> {
        self.columns.into_iter()
    }

    /// Consumes the row, yielding values in binding order.
    pub fn into_values(self) -> impl Iterator<Item = Value> {
        self.columns.into_iter().map(|(_, value)| value)
    }

    pub fn value(&self, index: usize) -> Option<&Value> {
        self.columns.get(index).map(|(_, value)| value)
    }

    /// Splits the row in two, keeping columns `..at` and returning the tail.
    ///
    /// `at` is clamped to the row length, so splitting past the end yields an
    /// empty tail rather than panicking.
    pub fn split_off(&mut self, at: usize) -> Row {
        let at = at.min(self.columns.len());
        Row {
            columns: self.columns.split_off(at),
        }
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Row {
            columns: iter.into_iter().collect(),
        }
    }
}
