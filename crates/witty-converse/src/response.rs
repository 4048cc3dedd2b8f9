//! Tagged converse responses.
//!
//! Every response carries exactly one `type` tag; the payload fields that
//! matter depend on it. The tag is decoded once into [`ResponseTag`] and the
//! full body is kept so actions can read whatever else the service sent.

use std::fmt;

use serde_json::{json, Value};

/// Response body could not be interpreted as a tagged response.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct DecodeError(String);

impl DecodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// What the service wants the client to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseTag {
    /// Merge extracted entities into the context.
    Merge,
    /// Say something to the user.
    Message,
    /// Run a named application action.
    Action,
    /// Done for this turn; wait for user input.
    Stop,
    /// A tag outside the known vocabulary, kept verbatim.
    Unrecognized(String),
}

impl ResponseTag {
    /// Case-insensitive; the service spells the message tag `msg`.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "merge" => ResponseTag::Merge,
            "msg" | "message" => ResponseTag::Message,
            "action" => ResponseTag::Action,
            "stop" => ResponseTag::Stop,
            _ => ResponseTag::Unrecognized(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResponseTag::Merge => "merge",
            ResponseTag::Message => "msg",
            ResponseTag::Action => "action",
            ResponseTag::Stop => "stop",
            ResponseTag::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for ResponseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded converse response.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedResponse {
    tag: ResponseTag,
    body: Value,
}

impl TaggedResponse {
    /// Decode a JSON body. Fails when there is no string `type` field.
    pub fn from_value(body: Value) -> Result<Self, DecodeError> {
        let tag = body
            .get("type")
            .and_then(Value::as_str)
            .map(ResponseTag::parse)
            .ok_or_else(|| DecodeError::new("response has no string `type` field"))?;
        Ok(Self { tag, body })
    }

    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        let body: Value = serde_json::from_str(text)
            .map_err(|e| DecodeError::new(format!("invalid JSON: {e}")))?;
        Self::from_value(body)
    }

    pub fn merge(entities: Value) -> Self {
        Self {
            tag: ResponseTag::Merge,
            body: json!({ "type": "merge", "entities": entities }),
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self {
            tag: ResponseTag::Message,
            body: json!({ "type": "msg", "msg": text.into() }),
        }
    }

    pub fn action(name: impl Into<String>) -> Self {
        Self {
            tag: ResponseTag::Action,
            body: json!({ "type": "action", "action": name.into() }),
        }
    }

    pub fn stop() -> Self {
        Self {
            tag: ResponseTag::Stop,
            body: json!({ "type": "stop" }),
        }
    }

    pub fn tag(&self) -> &ResponseTag {
        &self.tag
    }

    /// The raw JSON body as received.
    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn entities(&self) -> Option<&Value> {
        self.body.get("entities").filter(|v| !v.is_null())
    }

    pub fn msg(&self) -> Option<&str> {
        self.body.get("msg").and_then(Value::as_str)
    }

    pub fn action_name(&self) -> Option<&str> {
        self.body.get("action").and_then(Value::as_str)
    }

    pub fn confidence(&self) -> Option<f64> {
        self.body.get("confidence").and_then(Value::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_case_insensitively() {
        assert_eq!(ResponseTag::parse("MERGE"), ResponseTag::Merge);
        assert_eq!(ResponseTag::parse("Msg"), ResponseTag::Message);
        assert_eq!(ResponseTag::parse("message"), ResponseTag::Message);
        assert_eq!(ResponseTag::parse("action"), ResponseTag::Action);
        assert_eq!(ResponseTag::parse("Stop"), ResponseTag::Stop);
    }

    #[test]
    fn unknown_tag_is_kept_verbatim() {
        let tag = ResponseTag::parse("Error");
        assert_eq!(tag, ResponseTag::Unrecognized("Error".into()));
        assert_eq!(tag.to_string(), "Error");
    }

    #[test]
    fn decodes_service_message() {
        let response = TaggedResponse::from_json(
            r#"{"type": "msg", "msg": "It is sunny in Seattle", "confidence": 0.87}"#,
        )
        .unwrap();
        assert_eq!(response.tag(), &ResponseTag::Message);
        assert_eq!(response.msg(), Some("It is sunny in Seattle"));
        assert_eq!(response.confidence(), Some(0.87));
        assert_eq!(response.action_name(), None);
    }

    #[test]
    fn decodes_action_name() {
        let response =
            TaggedResponse::from_value(json!({"type": "action", "action": "fetchForecast"}))
                .unwrap();
        assert_eq!(response.tag(), &ResponseTag::Action);
        assert_eq!(response.action_name(), Some("fetchForecast"));
    }

    #[test]
    fn missing_type_is_decode_error() {
        let err = TaggedResponse::from_value(json!({"msg": "hello"})).unwrap_err();
        assert!(err.to_string().contains("`type`"));

        let err = TaggedResponse::from_value(json!({"type": 3})).unwrap_err();
        assert!(err.to_string().contains("`type`"));

        assert!(TaggedResponse::from_value(json!(["stop"])).is_err());
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let err = TaggedResponse::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON"));
    }

    #[test]
    fn null_entities_read_as_absent() {
        let response =
            TaggedResponse::from_value(json!({"type": "merge", "entities": null})).unwrap();
        assert!(response.entities().is_none());
    }

    #[test]
    fn constructors_match_decoded_form() {
        let built = TaggedResponse::message("hi");
        let decoded = TaggedResponse::from_value(json!({"type": "msg", "msg": "hi"})).unwrap();
        assert_eq!(built, decoded);
        assert_eq!(TaggedResponse::stop().tag(), &ResponseTag::Stop);
    }
}
