//! Response envelope shared by every user endpoint outcome.
//!
//! ```text
//! {"success": true, "message": "user created successfully", "data": {...}}
//! {"success": false, "message": "all fields are mandatory"}
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;

/// `{success, message, data?}` body returned for success and failure alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<User>,
}

impl ApiResponse {
    /// Successful outcome carrying the affected user.
    pub fn success(message: impl Into<String>, data: User) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failed outcome; `data` is omitted from the JSON body.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_omits_data() {
        let value = serde_json::to_value(ApiResponse::failure("nope")).expect("serialise");
        assert_eq!(value, json!({ "success": false, "message": "nope" }));
    }
}
