use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WipeRequest {
    pub device: WipeDevice,
    pub dev_path: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WipeDevice {
    pub id: String,
    pub model: String,
    pub firmware: String,
    pub capacity_gb: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WipeResponse {
    pub status: Option<String>,
    pub certificate_json: Option<Value>,
    pub error: Option<String>,
}
