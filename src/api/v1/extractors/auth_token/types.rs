/*
 * Responsibility
 * - middleware が request extensions に格納する「抽出済みトークン」の型
 *
 * Notes
 * - 署名検証はしていない。値はまだ信頼できない文字列として扱うこと
 */
use std::fmt;

use crate::extract::TokenSource;

#[derive(Clone, PartialEq, Eq)]
pub struct ExtractedToken {
    pub value: String,
    pub source: TokenSource,
}

impl ExtractedToken {
    pub fn new(value: String, source: TokenSource) -> Self {
        Self { value, source }
    }
}

// The token is a credential; keep it out of logs.
impl fmt::Debug for ExtractedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractedToken")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}
