/*
 * Responsibility
 * - Read-only view of the request parts the extractor looks at
 *   (query parameters, lower-cased headers, the raw cookie header)
 * - Conversion from `http` request parts so any http-based framework can use it
 */
use std::collections::HashMap;

use axum::http::{HeaderMap, Request, header, request::Parts};
use url::form_urlencoded;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestView {
    pub query: Option<HashMap<String, String>>,
    pub headers: Option<HashMap<String, String>>,
}

impl RequestView {
    /// An empty view: no query, no headers.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(parts: &Parts) -> Self {
        Self {
            query: Some(parse_query(parts.uri.query())),
            headers: Some(collect_headers(&parts.headers)),
        }
    }

    pub fn from_request<B>(req: &Request<B>) -> Self {
        Self {
            query: Some(parse_query(req.uri().query())),
            headers: Some(collect_headers(req.headers())),
        }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.as_ref()?.get(name).map(String::as_str)
    }

    /// Header lookup by exact name. Stored names are lower-case, so `name` should be too.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref()?.get(name).map(String::as_str)
    }

    pub fn cookie_header(&self) -> Option<&str> {
        self.headers
            .as_ref()?
            .get(header::COOKIE.as_str())
            .map(String::as_str)
    }
}

// Repeated names: the first occurrence wins.
fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    let mut params = HashMap::new();
    if let Some(query) = query {
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            params
                .entry(name.into_owned())
                .or_insert_with(|| value.into_owned());
        }
    }
    params
}

// HeaderName is already lower-case. Repeated `cookie` headers (HTTP/2 splits them)
// are joined with "; ", anything else with ", ".
fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::new();

    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };

        let separator = if *name == header::COOKIE { "; " } else { ", " };
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(separator);
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    collected
}
