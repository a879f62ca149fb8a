//! Wire types shared by the engine and the HTTP layer.

use serde::{Deserialize, Serialize};

use crate::error::{RouteError, RouteResult};

/// Incoming `POST /message/route` body.
///
/// Both fields are optional on the wire so that a missing field is reported
/// as a specific validation error rather than a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub recipients: Option<Vec<String>>,
}

impl MessageRequest {
    /// Decode a raw request body.
    pub fn from_slice(body: &[u8]) -> RouteResult<Self> {
        serde_json::from_slice(body)
            .map_err(|_| RouteError::MalformedInput("Malformed request".to_string()))
    }

    /// Apply the shape checks and hand back the message and recipients.
    pub fn into_parts(self) -> RouteResult<(String, Vec<String>)> {
        let message = match self.message {
            Some(m) if !m.is_empty() => m,
            _ => {
                return Err(RouteError::MalformedInput(
                    "Message cannot be empty".to_string(),
                ));
            }
        };
        let Some(recipients) = self.recipients else {
            return Err(RouteError::MalformedInput(
                "Recipients list cannot be empty".to_string(),
            ));
        };
        Ok((message, recipients))
    }
}

/// One batch: a synthetic destination and its slice of recipients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub ip: String,
    pub recipients: Vec<String>,
}

/// Successful routing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub message: String,
    pub routes: Vec<Route>,
}

impl RouteResponse {
    /// Total recipients across all routes.
    pub fn recipient_count(&self) -> usize {
        self.routes.iter().map(|r| r.recipients.len()).sum()
    }
}

/// Error body returned for any non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_error(body: &str) -> String {
        let err = MessageRequest::from_slice(body.as_bytes())
            .and_then(MessageRequest::into_parts)
            .unwrap_err();
        assert!(err.is_client_error());
        err.to_string()
    }

    #[test]
    fn decodes_valid_body() {
        let req = MessageRequest::from_slice(br#"{"message":"hi","recipients":["1231231234"]}"#)
            .unwrap();
        let (message, recipients) = req.into_parts().unwrap();
        assert_eq!(message, "hi");
        assert_eq!(recipients, vec!["1231231234".to_string()]);
    }

    #[test]
    fn recipients_as_string_is_malformed() {
        assert_eq!(
            shape_error(r#"{"message":"test","recipients":"ldkj"}"#),
            "Malformed request"
        );
    }

    #[test]
    fn non_json_is_malformed() {
        assert_eq!(shape_error("not json"), "Malformed request");
    }

    #[test]
    fn empty_message_rejected() {
        assert_eq!(
            shape_error(r#"{"message":"","recipient":"1231231234"}"#),
            "Message cannot be empty"
        );
    }

    #[test]
    fn missing_message_rejected() {
        assert_eq!(
            shape_error(r#"{"recipients":["1231231234"]}"#),
            "Message cannot be empty"
        );
    }

    #[test]
    fn missing_recipients_rejected() {
        assert_eq!(
            shape_error(r#"{"message":"rest","recipient":"[]"}"#),
            "Recipients list cannot be empty"
        );
        assert_eq!(
            shape_error(r#"{"message":"rest","recipients":null}"#),
            "Recipients list cannot be empty"
        );
    }

    #[test]
    fn empty_recipient_list_passes_shape_check() {
        let req = MessageRequest::from_slice(br#"{"message":"hi","recipients":[]}"#).unwrap();
        let (_, recipients) = req.into_parts().unwrap();
        assert!(recipients.is_empty());
    }

    #[test]
    fn response_serializes_wire_shape() {
        let resp = RouteResponse {
            message: "hi".to_string(),
            routes: vec![Route {
                ip: "10.0.1.1".to_string(),
                recipients: vec!["1231231234".to_string()],
            }],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "hi",
                "routes": [{"ip": "10.0.1.1", "recipients": ["1231231234"]}]
            })
        );
        assert_eq!(resp.recipient_count(), 1);
    }
}
