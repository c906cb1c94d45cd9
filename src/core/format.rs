//! Message formatting for variadic log arguments
//!
//! A log call carries a message plus any number of [`LogArg`]s. Textual
//! arguments are written as-is; structured arguments are rendered as compact
//! JSON. Rendering never fails: a value that cannot be serialized degrades to
//! its `Debug` form.

use serde::Serialize;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;

/// One argument of a log call
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    /// Already textual, written verbatim
    Text(String),
    /// Structured value, written as compact JSON
    Value(serde_json::Value),
}

impl LogArg {
    /// Capture any serializable value.
    ///
    /// Falls back to the value's `Debug` text if serialization fails.
    pub fn structured<T>(value: &T) -> Self
    where
        T: Serialize + fmt::Debug + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(serde_json::Value::String(s)) => LogArg::Text(s),
            Ok(v) => LogArg::Value(v),
            Err(_) => LogArg::Text(format!("{:?}", value)),
        }
    }

    pub fn render(&self) -> String {
        match self {
            LogArg::Text(s) => s.clone(),
            // Value's Display is compact JSON and cannot fail
            LogArg::Value(v) => v.to_string(),
        }
    }
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Text(s) => f.write_str(s),
            LogArg::Value(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for LogArg {
    fn from(s: String) -> Self {
        LogArg::Text(s)
    }
}

impl From<&str> for LogArg {
    fn from(s: &str) -> Self {
        LogArg::Text(s.to_string())
    }
}

impl From<&String> for LogArg {
    fn from(s: &String) -> Self {
        LogArg::Text(s.clone())
    }
}

impl From<serde_json::Value> for LogArg {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::String(s) => LogArg::Text(s),
            other => LogArg::Value(other),
        }
    }
}

macro_rules! impl_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LogArg {
                fn from(v: $t) -> Self {
                    LogArg::Text(v.to_string())
                }
            }
        )*
    };
}

impl_from_display!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Join a message and its arguments with single spaces
pub fn format_message(message: &str, args: &[LogArg]) -> String {
    if args.is_empty() {
        return message.to_string();
    }

    let mut out = String::with_capacity(message.len() + args.len() * 8);
    out.push_str(message);
    for arg in args {
        out.push(' ');
        match arg {
            LogArg::Text(s) => out.push_str(s),
            LogArg::Value(v) => out.push_str(&v.to_string()),
        }
    }
    out
}

/// Render an error with its full `source()` chain.
///
/// Used in place of the message when a logger is handed an error object, so
/// the sink receives every cause instead of only the outermost message.
pub fn format_error(error: &(dyn StdError + 'static)) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str("\n    caused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Full report for an error handed to a logger: the cause chain, the call's
/// arguments, then `backtrace` if one was actually captured.
pub fn format_error_report(
    error: &(dyn StdError + 'static),
    args: &[LogArg],
    backtrace: &Backtrace,
) -> String {
    let mut out = format_message(&format_error(error), args);
    if backtrace.status() == BacktraceStatus::Captured {
        out.push_str("\n    backtrace:\n");
        out.push_str(&backtrace.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "failed to load settings")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_message_only() {
        assert_eq!(format_message("hello", &[]), "hello");
    }

    #[test]
    fn test_mixed_arguments() {
        let args = vec![
            LogArg::from("user"),
            LogArg::from(42),
            LogArg::from(json!({"id": 7, "ok": true})),
        ];
        assert_eq!(
            format_message("login", &args),
            r#"login user 42 {"id":7,"ok":true}"#
        );
    }

    #[test]
    fn test_structured_string_is_text() {
        assert_eq!(LogArg::structured("plain"), LogArg::Text("plain".into()));
        assert_eq!(LogArg::structured(&vec![1, 2]).render(), "[1,2]");
    }

    #[test]
    fn test_unserializable_falls_back_to_debug() {
        let mut map = HashMap::new();
        map.insert((1, 2), "pair");
        let arg = LogArg::structured(&map);
        assert_eq!(arg, LogArg::Text(format!("{:?}", map)));
    }

    #[test]
    fn test_error_chain() {
        let err = Outer(std::io::Error::new(std::io::ErrorKind::NotFound, "settings.json missing"));
        let rendered = format_error(&err);
        assert!(rendered.starts_with("failed to load settings"));
        assert!(rendered.contains("caused by: settings.json missing"));
    }

    #[test]
    fn test_error_report_appends_captured_backtrace() {
        let err = Outer(std::io::Error::new(std::io::ErrorKind::NotFound, "settings.json missing"));
        let args = [LogArg::from("attempt=2")];

        let plain = format_error_report(&err, &args, &Backtrace::disabled());
        assert_eq!(
            plain,
            "failed to load settings\n    caused by: settings.json missing attempt=2"
        );

        let traced = format_error_report(&err, &args, &Backtrace::force_capture());
        assert!(traced.starts_with(&plain));
        assert!(traced.contains("\n    backtrace:\n"));
        assert!(traced.len() > plain.len() + "\n    backtrace:\n".len());
    }
}
