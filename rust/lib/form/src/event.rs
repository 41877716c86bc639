//! `onChange` payload normalization.
//!
//! Native inputs report a DOM-like event (`{"target": {"value": ...}}`);
//! custom controls report the value itself. Both reach the consumer as the
//! bare value.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    /// A DOM change event; carries `target.value`.
    Dom { value: Value },
    /// A value emitted directly by a custom control.
    Value(Value),
}

impl ChangeEvent {
    pub fn dom(value: impl Into<Value>) -> Self {
        ChangeEvent::Dom { value: value.into() }
    }

    pub fn value(value: impl Into<Value>) -> Self {
        ChangeEvent::Value(value.into())
    }

    /// The value forwarded to the consumer callback.
    pub fn into_value(self) -> Value {
        match self {
            ChangeEvent::Dom { value } => value,
            ChangeEvent::Value(value) => value,
        }
    }
}

impl From<Value> for ChangeEvent {
    /// Objects carrying a `target` key are treated as DOM events (a missing
    /// `target.value` reads as null); everything else passes through.
    fn from(v: Value) -> Self {
        match v {
            Value::Object(mut map) if map.contains_key("target") => {
                let value = map
                    .remove("target")
                    .and_then(|mut t| t.get_mut("value").map(Value::take))
                    .unwrap_or(Value::Null);
                ChangeEvent::Dom { value }
            }
            other => ChangeEvent::Value(other),
        }
    }
}

impl From<&str> for ChangeEvent {
    fn from(s: &str) -> Self {
        ChangeEvent::Value(Value::String(s.to_string()))
    }
}

impl From<String> for ChangeEvent {
    fn from(s: String) -> Self {
        ChangeEvent::Value(Value::String(s))
    }
}

impl From<bool> for ChangeEvent {
    fn from(b: bool) -> Self {
        ChangeEvent::Value(Value::Bool(b))
    }
}
