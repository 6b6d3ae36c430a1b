/*!
 * Extracted token extractor
 *
 * Responsibility:
 * - token middleware が extensions に入れた ExtractedToken を handler に渡す
 * - HTTP / axum 依存は core に、型定義は types に分離する
 *
 * Public API:
 * - ExtractedToken
 * - AuthToken (required: 401 if missing / Option<AuthToken>: never rejects)
 */

mod core;
mod types;

pub use self::core::AuthToken;
pub use types::ExtractedToken;
