use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result envelope for mutating operations: `{ success, error? }`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_the_error_field() {
        let json = serde_json::to_value(ActionResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[test]
    fn failure_carries_the_message() {
        let json = serde_json::to_value(ActionResponse::err("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "nope");
    }
}
