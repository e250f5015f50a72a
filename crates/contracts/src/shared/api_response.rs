use serde::{Deserialize, Serialize};

/// Envelope every backend endpoint answers with.
///
/// Success: `{ success, message, data }`. Failure: `{ success: false, message, error }`.
/// The login endpoint omits `success`, hence the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Human readable failure reason, preferring the detailed `error` field
    pub fn failure_reason(&self) -> Option<String> {
        self.error
            .as_deref()
            .filter(|e| !e.is_empty())
            .or_else(|| Some(self.message.as_str()).filter(|m| !m.is_empty()))
            .map(str::to_string)
    }

    pub fn into_data(self) -> Result<T, String> {
        let reason = self.failure_reason();
        self.data
            .ok_or_else(|| reason.unwrap_or_else(|| "Response contains no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body() {
        let json = r#"{"success": false, "message": "Not Found", "error": "transaction not found"}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.failure_reason().as_deref(),
            Some("transaction not found")
        );
        assert_eq!(response.into_data().unwrap_err(), "transaction not found");
    }

    #[test]
    fn test_login_style_error_body() {
        let json = r#"{"error": "invalid credentials"}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.failure_reason().as_deref(),
            Some("invalid credentials")
        );
    }

    #[test]
    fn test_data_body() {
        let json = r#"{"success": true, "message": "ok", "data": {"total": 3}}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_data().unwrap()["total"], 3);
    }
}
