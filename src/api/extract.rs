//! Request body extraction accepting JSON or form-encoded fields

use std::collections::HashMap;

use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::response::ApiError;

/// Loosely typed request fields.
///
/// A body that is neither a JSON object nor a valid form yields no fields,
/// so handlers report missing values instead of rejecting the request.
/// Only a body over the size limit is rejected.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequestPayload(pub Map<String, Value>);

impl RequestPayload {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field as text; absent and `null` become empty, other JSON values
    /// their JSON rendering.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

impl<S> FromRequest<S> for RequestPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let fields = match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(fields)) => fields,
                Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                    warn!(%rejection, "rejecting oversized form body");
                    return Err(ApiError::payload_too_large());
                }
                Err(rejection) => {
                    debug!(%rejection, "ignoring unreadable form body");
                    HashMap::new()
                }
            };
            return Ok(Self(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect(),
            ));
        }

        let body = match Bytes::from_request(req, state).await {
            Ok(body) => body,
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                warn!(%rejection, "rejecting oversized request body");
                return Err(ApiError::payload_too_large());
            }
            Err(rejection) => {
                debug!(%rejection, "ignoring unreadable request body");
                Bytes::new()
            }
        };

        let fields = match serde_json::from_slice::<Value>(&body) {
            Ok(Value::Object(fields)) => fields,
            Ok(_) | Err(_) => Map::new(),
        };
        Ok(Self(fields))
    }
}
