use serde_json::Value;

use crate::domain::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a response body verbatim. A blank body decodes to `null`.
pub fn decode_json_response(body: &str) -> Result<ApiResponse, TransportError> {
    if body.trim().is_empty() {
        return Ok(ApiResponse::new(Value::Null));
    }
    let value: Value = serde_json::from_str(body)?;
    Ok(ApiResponse::new(value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_passes_body_through() {
        let json = r#"
        {
          "code": "ok",
          "message": "Sender Id requested. You will be contacted by your account manager."
        }
        "#;
        let parsed = decode_json_response(json).unwrap();
        assert_eq!(
            parsed,
            json!({
                "code": "ok",
                "message": "Sender Id requested. You will be contacted by your account manager."
            })
        );
    }

    #[test]
    fn decode_keeps_key_order() {
        let parsed = decode_json_response(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = parsed
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn decode_blank_body_is_null() {
        assert_eq!(decode_json_response("  ").unwrap(), Value::Null);
    }

    #[test]
    fn decode_rejects_invalid_json() {
        assert!(matches!(
            decode_json_response("{ not json }"),
            Err(TransportError::Json(_))
        ));
    }
}
