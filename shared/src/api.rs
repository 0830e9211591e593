//! Request and response bodies of the HBnB REST API, plus the endpoint paths
//! relative to the `/api/v1` base.

use serde::{Deserialize, Serialize};

pub const LOGIN: &str = "/auth/login";
pub const PLACES: &str = "/places/";
pub const REVIEWS: &str = "/reviews/";

/// Path of a single place. The id must already be URI-component encoded.
pub fn place(encoded_id: &str) -> String {
    format!("/places/{}", encoded_id)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub place_id: String,
    pub text: String,
    pub rating: u8,
}

/// Body of a non-2xx answer. The backend is not consistent about the key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self, fallback: &str) -> String {
        self.error
            .or(self.message)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> ErrorBody {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn error_key_wins_over_message() {
        let b = body(r#"{"error": "Invalid credentials", "message": "ignored"}"#);
        assert_eq!(b.into_message("Login failed."), "Invalid credentials");
    }

    #[test]
    fn message_key_is_used_when_error_is_absent() {
        let b = body(r#"{"message": "Token has expired"}"#);
        assert_eq!(b.into_message("Login failed."), "Token has expired");
    }

    #[test]
    fn fallback_when_body_says_nothing() {
        assert_eq!(body("{}").into_message("Login failed."), "Login failed.");
        assert_eq!(
            body(r#"{"error": ""}"#).into_message("Failed to submit review."),
            "Failed to submit review."
        );
    }

    #[test]
    fn login_response_ignores_extra_fields() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"access_token": "abc", "refresh_token": "def", "x": 1}"#)
                .unwrap();
        assert_eq!(resp.access_token, "abc");
        assert_eq!(resp.refresh_token.as_deref(), Some("def"));
    }

    #[test]
    fn review_request_wire_shape() {
        let req = ReviewRequest {
            place_id: "p1".to_string(),
            text: "Nice".to_string(),
            rating: 4,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"place_id": "p1", "text": "Nice", "rating": 4})
        );
    }
}
