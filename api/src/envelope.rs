/// Raw wire shape of every tournament endpoint response.
use serde::Deserialize;
use serde_json::Value;

/// `{ "data": ..., "message": "..." }`, both optional.
///
/// A `null` `data` deserializes to `None` and counts as absent.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ApiEnvelope {
    /// The `message` field as text, if it carries anything worth showing.
    pub fn message(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// A response body that parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// A JSON object, read as an envelope.
    Envelope(ApiEnvelope),
    /// A bare JSON string.
    Text(String),
    /// Anything else: array, number, bool, null.
    Other(Value),
}

impl Decoded {
    pub fn into_envelope(self) -> Option<ApiEnvelope> {
        match self {
            Decoded::Envelope(envelope) => Some(envelope),
            _ => None,
        }
    }
}

pub fn decode(body: &str) -> Result<Decoded, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    Ok(match value {
        Value::Object(_) => Decoded::Envelope(serde_json::from_value(value)?),
        Value::String(s) => Decoded::Text(s),
        other => Decoded::Other(other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_envelope_with_data() {
        let decoded = decode(r#"{"data":{"name":"Spring Open"}}"#).unwrap();
        let envelope = decoded.into_envelope().unwrap();
        assert_eq!(envelope.data, Some(json!({"name": "Spring Open"})));
        assert_eq!(envelope.message(), None);
    }

    #[test]
    fn test_null_data_counts_as_absent() {
        let envelope = decode(r#"{"data":null,"message":"not started"}"#)
            .unwrap()
            .into_envelope()
            .unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message().as_deref(), Some("not started"));
    }

    #[test]
    fn test_empty_message_is_ignored() {
        let envelope = decode(r#"{"message":""}"#).unwrap().into_envelope().unwrap();
        assert_eq!(envelope.message(), None);
    }

    #[test]
    fn test_decode_non_object_bodies() {
        assert_eq!(
            decode(r#""internal error""#).unwrap(),
            Decoded::Text("internal error".into())
        );
        assert_eq!(decode("[1,2]").unwrap(), Decoded::Other(json!([1, 2])));
        assert!(decode("internal error").is_err());
    }
}
