/*
 * Responsibility
 * - middleware の公開インターフェース
 * - token (抽出 → extensions), http (request-id / limit / timeout / trace), security_headers
 */
pub mod http;
pub mod security_headers;
pub mod token;
