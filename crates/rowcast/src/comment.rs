use std::fmt::Write;

use chrono::{SecondsFormat, Utc};

use rowcast_core::row::Value;

/// Prepends diagnostic SQL comment lines to a command text.
///
/// Each enabled element becomes one `-- ` line ahead of the statement, so
/// the annotation survives into server-side query logs without changing the
/// statement itself.
///
/// ```
/// use rowcast::CommentHeader;
///
/// let header = CommentHeader::new().comment("user lookup");
/// let sql = header.apply("select * from users", &[]);
/// assert_eq!(sql, "-- user lookup\nselect * from users");
/// ```
#[derive(Debug, Default, Clone)]
pub struct CommentHeader {
    comment: Option<String>,
    include_caller: bool,
    include_timestamp: bool,
    include_parameters: bool,
}

impl CommentHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a free-text comment line.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Adds an `-- at file:line` line naming the call site of `apply`.
    pub fn include_caller(mut self) -> Self {
        self.include_caller = true;
        self
    }

    /// Adds a `-- Timestamp:` line with the wall-clock time of `apply`.
    pub fn include_timestamp(mut self) -> Self {
        self.include_timestamp = true;
        self
    }

    /// Adds one `-- @name kind = value` line per parameter.
    pub fn include_parameters(mut self) -> Self {
        self.include_parameters = true;
        self
    }

    /// Renders the header ahead of `sql`.
    ///
    /// With nothing enabled this returns `sql` unchanged.
    #[track_caller]
    pub fn apply(&self, sql: &str, parameters: &[(&str, Value)]) -> String {
        let caller = std::panic::Location::caller();
        let mut out = String::new();

        if let Some(comment) = &self.comment {
            for line in comment.lines() {
                let _ = writeln!(out, "-- {line}");
            }
        }
        if self.include_caller {
            let _ = writeln!(out, "-- at {}:{}", caller.file(), caller.line());
        }
        if self.include_timestamp {
            let _ = writeln!(
                out,
                "-- Timestamp: {}",
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
            );
        }
        if self.include_parameters {
            for (name, value) in parameters {
                let _ = writeln!(
                    out,
                    "-- @{name} {kind} = {value}",
                    kind = kind_label(value),
                    value = format_value(value),
                );
            }
        }

        out.push_str(sql);
        out
    }
}

fn kind_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::List(_) => "array",
        other => other.kind().map(|kind| kind.name()).unwrap_or("unknown"),
    }
}

// Text-like and temporal values render quoted so the log line reads like a
// literal; numerics and booleans render bare.
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(v) => v.to_string(),
        Value::I8(v) => v.to_string(),
        Value::I16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U8(v) => v.to_string(),
        Value::U16(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::F32(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::Decimal(v) => v.to_string(),
        Value::Char(v) => format!("\"{v}\""),
        Value::String(v) => format!("\"{v}\""),
        Value::Date(v) => format!("\"{v}\""),
        Value::Time(v) => format!("\"{v}\""),
        Value::DateTime(v) => format!("\"{v}\""),
        Value::Timestamp(v) => format!("\"{}\"", v.to_rfc3339_opts(SecondsFormat::Millis, true)),
        Value::List(items) => {
            let rendered: Vec<_> = items.iter().map(format_value).collect();
            format!("{{{}}}", rendered.join(", "))
        }
    }
}
