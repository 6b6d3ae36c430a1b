/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - token middleware を掛ける範囲 (/token 系) と掛けない範囲 (/health) をここで決める
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{
    health::health,
    token::{inspect_token, token_status},
};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/token", get(inspect_token))
        .route("/token/status", get(token_status));
    let protected = middleware::token::apply(protected, state);

    Router::new().route("/health", get(health)).merge(protected)
}
