//! Tests for `BodyEncoder` and `JsonBody`.

use serde::{Deserialize, Serialize};

use super::{BodyEncoder, JsonBody, JsonDecoder, ResponseDecoder};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Payload {
    first: String,
    second: String,
}

fn payload() -> Payload {
    Payload {
        first: "one".to_owned(),
        second: "two".to_owned(),
    }
}

#[test]
fn json_body_declares_json_content_type() {
    let body = JsonBody::new(payload());
    assert_eq!(body.content_type(), "application/json");
}

#[test]
fn json_body_encodes_serializable_payload() {
    let bytes = JsonBody::new(payload()).encode().unwrap();

    let decoded: Payload = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(decoded, payload());
}

#[test]
fn encode_then_decode_round_trips() {
    let bytes = JsonBody::new(payload()).encode().unwrap();

    let decoder = JsonDecoder::<Payload>::new();
    let decoded = decoder.decode(&bytes).unwrap();

    assert_eq!(decoded, payload());
}

#[test]
fn json_body_encodes_fresh_bytes_each_call() {
    let body = JsonBody::new(payload());

    let first = body.encode().unwrap();
    let second = body.encode().unwrap();

    assert_eq!(first, second);
}
