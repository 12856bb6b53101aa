/// Builds a [`Row`](crate::row::Row) from `name => value` pairs.
///
/// Values are converted through `Into<Value>`, so scalars, strings, chrono
/// types, `Option`s and `Value` itself are all accepted:
///
/// ```
/// use rowcast_core::{row, row::Value};
///
/// let row = row!["id" => 1_i64, "name" => "foo", "bar" => Value::Null];
/// assert_eq!(row.len(), 3);
/// ```
#[macro_export]
macro_rules! row {
    ($($name:expr => $value:expr),* $(,)?) => {
        $crate::row::Row::from_pairs([
            $(($name, $crate::row::Value::from($value))),*
        ])
    };
}
