use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct DriveHealthRequest<'a> {
    pub drive_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DriveHealth {
    pub health_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub health_class: Option<String>,
    #[serde(default = "not_available", deserialize_with = "lenient_string_or_not_available")]
    pub prediction: String,
    #[serde(default = "no_message")]
    pub message: String,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default = "unknown")]
    pub smart_status: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

fn not_available() -> String {
    "N/A".to_string()
}

fn no_message() -> String {
    "No message".to_string()
}

fn unknown() -> String {
    "Unknown".to_string()
}

/// The health service reports classes and predictions either as labels or as numbers.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) => Err(Error::invalid_type(Unexpected::Seq, &"a string or a number")),
        Value::Object(_) => Err(Error::invalid_type(Unexpected::Map, &"a string or a number")),
    }
}

fn lenient_string_or_not_available<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(|value| value.unwrap_or_else(not_available))
}
