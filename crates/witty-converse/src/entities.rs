//! Entity extraction for `merge` responses.
//!
//! The service delivers each entity as an array of candidate values. Only the
//! first candidate is used. A candidate whose `value` is itself an object
//! (a resolved entity such as `{"value": "Seattle", "type": "resolved"}`)
//! contributes its inner `value`.

use serde_json::{Map, Value};

use crate::response::TaggedResponse;
use crate::ConverseError;

/// Build the flat context patch for a merge response.
///
/// Extraction is all-or-nothing: the first malformed entity fails the whole
/// patch, so callers never merge a partial result.
pub fn extract_patch(response: &TaggedResponse) -> Result<Map<String, Value>, ConverseError> {
    let entities = response
        .entities()
        .ok_or_else(|| ConverseError::InvalidEntityPayload("response has no `entities`".into()))?
        .as_object()
        .ok_or_else(|| {
            ConverseError::InvalidEntityPayload("`entities` is not an object".into())
        })?;

    entities
        .iter()
        .map(|(name, candidates)| Ok((name.clone(), first_entity_value(name, candidates)?)))
        .collect()
}

/// Value of the first candidate of one entity.
pub fn first_entity_value(name: &str, candidates: &Value) -> Result<Value, ConverseError> {
    let first = candidates
        .as_array()
        .and_then(|values| values.first())
        .filter(|first| !first.is_null())
        .ok_or_else(|| {
            ConverseError::InvalidEntityPayload(format!("entity `{name}` has no candidate values"))
        })?;

    let value = first.get("value").ok_or_else(|| {
        ConverseError::InvalidEntityPayload(format!("entity `{name}` candidate has no `value`"))
    })?;

    match value {
        Value::Object(resolved) => resolved.get("value").cloned().ok_or_else(|| {
            ConverseError::InvalidEntityPayload(format!(
                "entity `{name}` resolved value has no nested `value`"
            ))
        }),
        plain => Ok(plain.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patch_for(entities: Value) -> Result<Map<String, Value>, ConverseError> {
        extract_patch(&TaggedResponse::merge(entities))
    }

    #[test]
    fn plain_value_is_taken_directly() {
        let patch = patch_for(json!({"temperature": [{"value": 72}]})).unwrap();
        assert_eq!(Value::Object(patch), json!({"temperature": 72}));
    }

    #[test]
    fn nested_value_takes_precedence() {
        let patch =
            patch_for(json!({"city": [{"value": {"value": "Seattle", "type": "resolved"}}]}))
                .unwrap();
        assert_eq!(Value::Object(patch), json!({"city": "Seattle"}));
    }

    #[test]
    fn only_first_candidate_is_used() {
        let patch = patch_for(json!({
            "location": [
                {"value": "Paris", "confidence": 0.9},
                {"value": "Texas", "confidence": 0.2}
            ],
            "intent": [{"value": "weather"}]
        }))
        .unwrap();
        assert_eq!(
            Value::Object(patch),
            json!({"location": "Paris", "intent": "weather"})
        );
    }

    #[test]
    fn empty_entities_object_gives_empty_patch() {
        let patch = patch_for(json!({})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn empty_candidate_array_fails() {
        let err = patch_for(json!({"temperature": []})).unwrap_err();
        assert!(matches!(err, ConverseError::InvalidEntityPayload(ref m) if m.contains("temperature")));
    }

    #[test]
    fn null_first_candidate_fails() {
        let err = patch_for(json!({"temperature": [null]})).unwrap_err();
        assert!(matches!(err, ConverseError::InvalidEntityPayload(_)));
    }

    #[test]
    fn non_array_candidates_fail() {
        let err = patch_for(json!({"temperature": {"value": 72}})).unwrap_err();
        assert!(matches!(err, ConverseError::InvalidEntityPayload(_)));
    }

    #[test]
    fn missing_value_field_fails() {
        let err = patch_for(json!({"temperature": [{"confidence": 1.0}]})).unwrap_err();
        assert!(matches!(err, ConverseError::InvalidEntityPayload(ref m) if m.contains("no `value`")));
    }

    #[test]
    fn one_bad_entity_fails_the_whole_patch() {
        let err = patch_for(json!({
            "city": [{"value": "Seattle"}],
            "temperature": []
        }))
        .unwrap_err();
        assert!(matches!(err, ConverseError::InvalidEntityPayload(_)));
    }

    #[test]
    fn missing_entities_fails() {
        let response = TaggedResponse::from_value(json!({"type": "merge"})).unwrap();
        let err = extract_patch(&response).unwrap_err();
        assert!(matches!(err, ConverseError::InvalidEntityPayload(ref m) if m.contains("no `entities`")));
    }
}
