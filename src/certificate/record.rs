use serde::Deserialize;
use serde_json::Value;

/// A certificate as returned by the API. The service emits several layouts for the same logical
/// certificate, so the raw JSON is kept and fields are derived by the resolver.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Certificate(Value);

impl Certificate {
    #[cfg(test)]
    pub fn new(value: Value) -> Self {
        Certificate(value)
    }

    /// Looks up a value by path, treating `null` as missing.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.0, |value, key| value.get(key))
            .filter(|value| !value.is_null())
    }

    /// Like [`Certificate::lookup`], but only yields scalars, rendered as text.
    pub fn text(&self, path: &[&str]) -> Option<String> {
        self.lookup(path).and_then(scalar_text)
    }

    /// An empty object, `null` or an empty string body is treated as no certificate at all.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Empty strings, zero, `false` and `null` are falsy, every object and array is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
