use crate::http::errors::ApiError;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct GeocodeRequest {
    pub location: Option<Value>,
}

impl GeocodeRequest {
    /// Text for the upstream `q` parameter. Missing, `null`, `false`, `0`, `""`, `[]` and `{}`
    /// all count as no location.
    pub fn query(&self) -> Result<String, ApiError> {
        match &self.location {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                Err(ApiError::NoLocationProvided)
            }
            Some(Value::Number(number)) if number.as_f64() == Some(0.0) => {
                Err(ApiError::NoLocationProvided)
            }
            Some(Value::String(text)) if text.is_empty() => Err(ApiError::NoLocationProvided),
            Some(Value::Array(items)) if items.is_empty() => Err(ApiError::NoLocationProvided),
            Some(Value::Object(fields)) if fields.is_empty() => Err(ApiError::NoLocationProvided),
            Some(Value::String(text)) => Ok(text.clone()),
            Some(Value::Number(number)) => Ok(number.to_string()),
            Some(other) => Err(ApiError::Internal(format!(
                "`location` must be a string, got {other}"
            ))),
        }
    }
}
