//! Message and parameter values
//!
//! Everything a caller hands to the pipeline is converted into a [`LogValue`]
//! up front. Rendering to text goes through [`LogValue::to_message`], a single
//! match over the variants.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    /// Plain text, rendered unchanged
    Text(String),
    /// Error-like value: display text plus the messages of its `source()` chain
    Error { message: String, causes: Vec<String> },
    /// Any serializable value, rendered as compact JSON
    Data(serde_json::Value),
    /// A value whose serialization failed, kept as its `Debug` form
    Fallback(String),
}

impl LogValue {
    pub fn text(text: impl Into<String>) -> Self {
        LogValue::Text(text.into())
    }

    /// Capture an error and its source chain
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        LogValue::Error {
            message: err.to_string(),
            causes,
        }
    }

    /// Convert a serializable value, degrading to its `Debug` form when
    /// serialization fails
    pub fn serialize<T>(value: &T) -> Self
    where
        T: Serialize + fmt::Debug + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(json) => LogValue::from(json),
            Err(_) => LogValue::Fallback(format!("{:?}", value)),
        }
    }

    /// String form used for rendering: text passes through, errors yield their
    /// message, data becomes compact JSON.
    pub fn to_message(&self) -> String {
        match self {
            LogValue::Text(text) => text.clone(),
            LogValue::Error { message, .. } => message.clone(),
            LogValue::Data(json) => {
                serde_json::to_string(json).unwrap_or_else(|_| json.to_string())
            }
            LogValue::Fallback(text) => text.clone(),
        }
    }

    /// Like [`to_message`](Self::to_message), but error values also list
    /// their causes, one per line. Used for traces.
    pub fn to_detailed_message(&self) -> String {
        match self {
            LogValue::Error { message, causes } if !causes.is_empty() => {
                let mut out = message.clone();
                for cause in causes {
                    out.push_str("\n  caused by: ");
                    out.push_str(cause);
                }
                out
            }
            other => other.to_message(),
        }
    }

    /// JSON representation for machine-readable output
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            LogValue::Text(text) | LogValue::Fallback(text) => {
                serde_json::Value::String(text.clone())
            }
            LogValue::Error { message, causes } => serde_json::json!({
                "message": message,
                "causes": causes,
            }),
            LogValue::Data(json) => json.clone(),
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_message())
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Text(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Text(s)
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::Text(s.clone())
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::String(s) => LogValue::Text(s),
            other => LogValue::Data(other),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LogValue {
                fn from(v: $t) -> Self {
                    LogValue::Data(serde_json::json!(v))
                }
            }
        )*
    };
}

impl_from_scalar!(i32, i64, u32, u64, usize, f64, bool);
