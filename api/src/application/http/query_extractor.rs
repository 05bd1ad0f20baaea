use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use std::collections::HashMap;

use wayfarer_core::domain::query::value_objects::RawQuery;

/// Extracts the whole query string as the translator's raw parameter
/// map. Repeated keys collapse to the last occurrence and a malformed
/// query string degrades to an empty map rather than a rejection.
#[derive(Debug, Clone)]
pub struct RawQueryExtractor(pub RawQuery);

impl<S> FromRequestParts<S> for RawQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(RawQueryExtractor(query_map.into_iter().collect()))
    }
}
