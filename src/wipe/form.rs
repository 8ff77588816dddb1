use crate::api::{WipeDevice, WipeRequest};
use crate::wipe::method::WipeMethod;
use thiserror::Error;

/// The drive details entered for a wipe. Every field is required.
#[derive(Debug, Clone, Default)]
pub struct WipeForm {
    pub drive_id: String,
    pub model: String,
    pub firmware: String,
    pub capacity_gb: String,
    pub dev_path: String,
    pub method: Option<WipeMethod>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WipeFormError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl WipeForm {
    pub fn to_request(&self) -> Result<WipeRequest, WipeFormError> {
        let drive_id = required("Drive ID", &self.drive_id)?;
        let model = required("Drive model", &self.model)?;
        let firmware = required("Firmware version", &self.firmware)?;
        let capacity = required("Capacity", &self.capacity_gb)?;
        let dev_path = required("Device path", &self.dev_path)?;
        let method = self.method.ok_or(WipeFormError::MissingField("Wipe method"))?;

        Ok(WipeRequest {
            device: WipeDevice {
                id: drive_id,
                model,
                firmware,
                capacity_gb: leading_integer(&capacity),
            },
            dev_path,
            method: method.as_str().to_string(),
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, WipeFormError> {
    match value.trim() {
        "" => Err(WipeFormError::MissingField(field)),
        value => Ok(value.to_string()),
    }
}

/// Reads the digits at the start of `value`, `"500GB"` gives 500. No digits gives `None`.
fn leading_integer(value: &str) -> Option<u64> {
    let digits = value.trim_start().chars().take_while(char::is_ascii_digit).collect::<String>();
    digits.parse().ok()
}
