//! Shared helpers for API operations
//!
//! Status-tagged response envelopes plus serialization helpers for the
//! native (JSON text) and WASM (JsValue) entry points.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Response Envelope
// ============================================================================

/// `{"status": "success", ...payload}` or `{"status": "error", "error_message": ...}`
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    Success(T),
    Error { error_message: String },
}

impl<T> Envelope<T> {
    /// Wrap a result, logging the error side
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>, context: &str) -> Self {
        match result {
            Ok(value) => Envelope::Success(value),
            Err(e) => error_envelope(context, e),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }
}

/// Build an error envelope and log it
pub fn error_envelope<T>(context: &str, err: impl std::fmt::Display) -> Envelope<T> {
    log::error!("{}: {}", context, err);
    Envelope::Error {
        error_message: err.to_string(),
    }
}

// ============================================================================
// JSON Text Helpers
// ============================================================================

/// Decode JSON text into a request type
pub fn from_json_text<T: DeserializeOwned>(json: &str) -> crate::errors::Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a response as JSON text; serialization failures become an error envelope
pub fn to_json_text<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("Serialization error: {}", e);
        serde_json::json!({ "status": "error", "error_message": e.to_string() }).to_string()
    })
}

// ============================================================================
// JsValue Helpers
// ============================================================================

/// Deserialize a value from JavaScript
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, String> {
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("{}: {}", error_context, e))
}

/// Serialize a value to plain JavaScript objects (no `Map`s)
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        answer: u32,
    }

    #[test]
    fn test_success_envelope_flattens_payload() {
        let envelope = Envelope::Success(Payload { answer: 42 });
        let value: serde_json::Value = serde_json::from_str(&to_json_text(&envelope)).unwrap();
        assert_eq!(value, json!({"status": "success", "answer": 42}));
    }

    #[test]
    fn test_error_envelope() {
        let envelope: Envelope<Payload> = error_envelope("test", "went wrong");
        assert!(!envelope.is_success());
        let value: serde_json::Value = serde_json::from_str(&to_json_text(&envelope)).unwrap();
        assert_eq!(value, json!({"status": "error", "error_message": "went wrong"}));
    }
}
