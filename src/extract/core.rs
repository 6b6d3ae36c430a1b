/*
 * Responsibility
 * - Token extraction: query → header → cookie, first source that applies wins
 * - Normalization of the selected value (drop every "Bearer" label and every space)
 *
 * Notes
 * - Pure and synchronous. `TokenExtractor` is built once at startup and shared via Arc.
 * - Absence of a token is `None`, never an error.
 */
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use thiserror::Error;

use super::cookie::parse_cookies;
use super::options::ExtractOptions;
use super::request::RequestView;

static BEARER_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)bearer").expect("literal pattern is valid"));

/// Which part of the request the token was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenSource {
    Query,
    Header,
    Cookie,
}

impl TokenSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Header => "header",
            Self::Cookie => "cookie",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid token type {token_type:?}: {source}")]
    InvalidTokenType {
        token_type: String,
        #[source]
        source: regex::Error,
    },
}

/// Extraction options compiled for repeated use.
#[derive(Debug, Clone)]
pub struct TokenExtractor {
    url_key: Option<String>,
    header_key: Option<String>,
    cookie_key: Option<String>,
    // `<token type>\s+([^$]+)`, case-insensitive; the token type is a regex fragment
    token_pattern: Option<Regex>,
}

impl TokenExtractor {
    pub fn new(options: &ExtractOptions) -> Result<Self, ExtractError> {
        let token_pattern = options
            .token_type
            .as_deref()
            .map(compile_token_pattern)
            .transpose()?;

        Ok(Self {
            url_key: enabled_key(options.url_key()),
            header_key: enabled_key(options.header_key()),
            cookie_key: enabled_key(options.cookie_key()),
            token_pattern,
        })
    }

    pub fn extract(&self, req: &RequestView) -> Option<String> {
        self.extract_with_source(req).map(|(_, token)| token)
    }

    /// Like [`extract`](Self::extract), also reporting the source the token came from.
    pub fn extract_with_source(&self, req: &RequestView) -> Option<(TokenSource, String)> {
        let (source, candidate) = self.candidate(req)?;
        normalize(&candidate).map(|token| (source, token))
    }

    // Gating per source: key enabled and a non-empty value present. Once a source is
    // selected the later ones are not consulted, even if the selected one yields nothing.
    fn candidate(&self, req: &RequestView) -> Option<(TokenSource, String)> {
        if let Some(value) = self
            .url_key
            .as_deref()
            .and_then(|key| req.query_param(key))
            .filter(|v| !v.is_empty())
        {
            return Some((TokenSource::Query, value.to_string()));
        }

        if let Some(value) = self
            .header_key
            .as_deref()
            .and_then(|key| req.header(key))
            .filter(|v| !v.is_empty())
        {
            let token = match &self.token_pattern {
                Some(pattern) => pattern.captures(value)?.get(1)?.as_str(),
                None => value,
            };
            return Some((TokenSource::Header, token.to_string()));
        }

        let key = self.cookie_key.as_deref()?;
        let header = req.cookie_header().filter(|v| !v.is_empty())?;
        parse_cookies(header)
            .remove(key)
            .map(|value| (TokenSource::Cookie, value))
    }
}

/// One-shot extraction; compiles `options` for this call only.
///
/// ```
/// use token_extract::extract::{ExtractOptions, RequestView, extract_token};
///
/// let req = RequestView::new().with_header("authorization", "Bearer abc123");
/// let options = ExtractOptions::new().with_token_type("Bearer");
/// assert_eq!(extract_token(&req, &options).as_deref(), Some("abc123"));
/// ```
pub fn extract_token(req: &RequestView, options: &ExtractOptions) -> Option<String> {
    match TokenExtractor::new(options) {
        Ok(extractor) => extractor.extract(req),
        Err(err) => {
            tracing::warn!(error = %err, "token extractor could not be built");
            None
        }
    }
}

// An empty key name never matches anything; treat it like a disabled source.
fn enabled_key(key: Option<&str>) -> Option<String> {
    key.filter(|k| !k.is_empty()).map(str::to_string)
}

// `token_type` is spliced in unescaped, so `Bearer|JWT` accepts either scheme.
fn compile_token_pattern(token_type: &str) -> Result<Regex, ExtractError> {
    RegexBuilder::new(&format!(r"{}\s+([^$]+)", token_type))
        .case_insensitive(true)
        .build()
        .map_err(|source| ExtractError::InvalidTokenType {
            token_type: token_type.to_string(),
            source,
        })
}

fn normalize(candidate: &str) -> Option<String> {
    if candidate.is_empty() {
        return None;
    }
    Some(BEARER_LABEL.replace_all(candidate, "").replace(' ', ""))
}
