/*
 * Responsibility
 * - handler 向け extractor の公開口
 */
mod auth_token;

pub use auth_token::{AuthToken, ExtractedToken};
