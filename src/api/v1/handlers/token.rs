/*
 * Responsibility
 * - GET /token: 抽出できたトークンの出所と長さ (なければ 401)
 * - GET /token/status: トークン有無の確認 (拒否しない)
 */
use axum::Json;

use crate::api::v1::{
    dto::token::{TokenInfoResponse, TokenStatusResponse},
    extractors::AuthToken,
};

pub async fn inspect_token(AuthToken(token): AuthToken) -> Json<TokenInfoResponse> {
    Json(TokenInfoResponse::from(&token))
}

pub async fn token_status(token: Option<AuthToken>) -> Json<TokenStatusResponse> {
    let source = token.map(|AuthToken(token)| token.source);
    Json(TokenStatusResponse {
        present: source.is_some(),
        source,
    })
}
