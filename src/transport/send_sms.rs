use serde::Deserialize;

use crate::domain::{SendSmsResponse, SmsMessage, SmsResult, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    #[serde(rename = "message-count")]
    message_count: u32,
    #[serde(default)]
    messages: Vec<SmsJsonResult>,
}

#[derive(Debug, Clone, Deserialize)]
struct SmsJsonResult {
    status: i32,
    #[serde(rename = "message-id", default)]
    message_id: Option<String>,
    #[serde(rename = "client-ref", default)]
    client_ref: Option<String>,
    #[serde(rename = "remaining-balance", default)]
    remaining_balance: Option<TransportMoney>,
    #[serde(rename = "message-price", default)]
    message_price: Option<TransportMoney>,
    #[serde(rename = "error-text", default)]
    error_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportMoney {
    String(String),
    Number(serde_json::Number),
}

impl TransportMoney {
    fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

/// Message fields as form parameters, in wire order (`from`, `to`, `text`).
///
/// The caller prepends the credential parameters; together they form the exact
/// five-field body Nexmo expects.
pub fn encode_send_sms_form(message: &SmsMessage) -> Vec<(String, String)> {
    vec![
        ("from".to_owned(), message.from.clone()),
        ("to".to_owned(), message.to.clone()),
        ("text".to_owned(), message.text.clone()),
    ]
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;

    let messages = parsed
        .messages
        .into_iter()
        .map(|value| SmsResult {
            status: StatusCode::new(value.status),
            message_id: value.message_id,
            client_ref: value.client_ref,
            remaining_balance: value.remaining_balance.map(TransportMoney::into_string),
            message_price: value.message_price.map(TransportMoney::into_string),
            error_text: value.error_text,
        })
        .collect();

    Ok(SendSmsResponse {
        message_count: parsed.message_count,
        messages,
    })
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[test]
    fn encode_message_form_params_in_wire_order() {
        let message = SmsMessage::new("Acme", "447700900000", "hello there");
        let params = encode_send_sms_form(&message);

        assert_eq!(
            params,
            vec![
                ("from".to_owned(), "Acme".to_owned()),
                ("to".to_owned(), "447700900000".to_owned()),
                ("text".to_owned(), "hello there".to_owned()),
            ]
        );
    }

    #[test]
    fn form_encoding_of_reserved_characters_round_trips() {
        // The provider decodes with standard form semantics, so serializing
        // and parsing the same pairs must be lossless.
        let message = SmsMessage::new("A&B=C", "+44 770%0900000", "100% groß & klein = done");
        let params = encode_send_sms_form(&message);

        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        assert!(!encoded.contains(' '));
        assert!(encoded.contains("text=100%25+gro%C3%9F+%26+klein+%3D+done"));

        let decoded: Vec<(Cow<'_, str>, Cow<'_, str>)> =
            url::form_urlencoded::parse(encoded.as_bytes()).collect();
        let decoded: Vec<(String, String)> = decoded
            .into_iter()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(decoded, params);
    }

    #[test]
    fn decode_json_response_maps_all_documented_fields() {
        let json = r#"
        {
          "message-count": 2,
          "messages": [
            {
              "status": 0,
              "message-id": "0A0000000123ABCD1",
              "client-ref": "my-ref",
              "remaining-balance": "3.14",
              "message-price": "0.03",
              "error-text": null
            },
            {
              "status": 1,
              "error-text": "Throttled"
            }
          ]
        }
        "#;

        let response = decode_send_sms_json_response(json).unwrap();
        assert_eq!(response.message_count, 2);
        assert_eq!(response.messages.len(), 2);
        assert!(!response.success());

        let first = &response.messages[0];
        assert_eq!(first.status, StatusCode::new(0));
        assert_eq!(first.message_id.as_deref(), Some("0A0000000123ABCD1"));
        assert_eq!(first.client_ref.as_deref(), Some("my-ref"));
        assert_eq!(first.remaining_balance.as_deref(), Some("3.14"));
        assert_eq!(first.message_price.as_deref(), Some("0.03"));
        assert_eq!(first.error_text, None);

        let second = &response.messages[1];
        assert_eq!(second.status, StatusCode::new(1));
        assert_eq!(second.error_text.as_deref(), Some("Throttled"));
        assert_eq!(second.message_id, None);
    }

    #[test]
    fn decode_accepts_numeric_balance_and_price() {
        let json = r#"
        {
          "message-count": 1,
          "messages": [
            { "status": 0, "remaining-balance": 3.5, "message-price": 0.05 }
          ]
        }
        "#;

        let response = decode_send_sms_json_response(json).unwrap();
        let first = &response.messages[0];
        assert_eq!(first.remaining_balance.as_deref(), Some("3.5"));
        assert_eq!(first.message_price.as_deref(), Some("0.05"));
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let json = r#"
        {
          "message-count": 1,
          "future-field": { "nested": true },
          "messages": [
            { "status": 0, "message-id": "abc", "network": "23430" }
          ]
        }
        "#;

        let response = decode_send_sms_json_response(json).unwrap();
        assert!(response.success());
        assert_eq!(response.messages[0].message_id.as_deref(), Some("abc"));
    }

    #[test]
    fn decode_preserves_out_of_table_status_codes() {
        let json = r#"
        {
          "message-count": 1,
          "messages": [ { "status": 42 } ]
        }
        "#;

        let response = decode_send_sms_json_response(json).unwrap();
        let status = response.messages[0].status;
        assert_eq!(status.as_i32(), 42);
        assert!(status.known().is_none());
        assert!(!response.success());
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode_send_sms_json_response("{ not json }").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn decode_tolerates_missing_messages_array() {
        let response = decode_send_sms_json_response(r#"{ "message-count": 0 }"#).unwrap();
        assert_eq!(response.message_count, 0);
        assert!(response.messages.is_empty());
        assert!(!response.success());
    }
}
