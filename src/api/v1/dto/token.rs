/*
 * Responsibility
 * - /token 系 response DTO
 * - トークンの値そのものは返さない (出所と長さのみ)
 */
use serde::Serialize;

use crate::api::v1::extractors::ExtractedToken;
use crate::extract::TokenSource;

#[derive(Debug, Serialize)]
pub struct TokenInfoResponse {
    pub source: TokenSource,
    pub length: usize,
}

impl From<&ExtractedToken> for TokenInfoResponse {
    fn from(token: &ExtractedToken) -> Self {
        Self {
            source: token.source,
            length: token.value.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenStatusResponse {
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<TokenSource>,
}
