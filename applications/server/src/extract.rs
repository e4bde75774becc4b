/// Request body extraction
use crate::error::ServerError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form,
};
use bytes::Bytes;
use serde_json::{Map, Value};
use std::collections::HashMap;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Loosely-typed request body handed to the validators
///
/// URL-encoded forms become an object of strings and JSON bodies
/// (`application/json` or `application/*+json`) are parsed. Bodies of any
/// other content type, and empty bodies, are an empty object.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(pub Value);

#[async_trait]
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Form => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;

                let object: Map<String, Value> = fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect();
                Ok(Payload(Value::Object(object)))
            }
            BodyKind::Json => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;

                parse_json(&body).map(Payload)
            }
            BodyKind::Other => Ok(Payload(Value::Object(Map::new()))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Form,
    Json,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(content_type) = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return BodyKind::Other;
    };

    // Compare the media type only, without parameters such as charset
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence == FORM_CONTENT_TYPE {
        BodyKind::Form
    } else if essence == JSON_CONTENT_TYPE
        || (essence.starts_with("application/") && essence.ends_with("+json"))
    {
        BodyKind::Json
    } else {
        BodyKind::Other
    }
}

fn parse_json(body: &[u8]) -> Result<Value, ServerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        ServerError::BadRequest("Malformed request body".to_string())
    })
}

fn rejected(status: StatusCode, detail: String) -> ServerError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge("Request body too large".to_string())
    } else {
        tracing::debug!("Rejected request body: {}", detail);
        ServerError::BadRequest("Malformed request body".to_string())
    }
}
