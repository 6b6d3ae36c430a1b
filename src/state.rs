/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc で cheap)
 */
use std::sync::Arc;

use crate::config::Config;
use crate::extract::{ExtractError, TokenExtractor};
use crate::middleware::token::TokenPolicy;

#[derive(Clone, Debug)]
pub struct AppState {
    pub extractor: Arc<TokenExtractor>,
    pub token_policy: TokenPolicy,
}

impl AppState {
    pub fn new(extractor: TokenExtractor, token_policy: TokenPolicy) -> Self {
        Self {
            extractor: Arc::new(extractor),
            token_policy,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ExtractError> {
        let extractor = TokenExtractor::new(&config.extract_options)?;
        let token_policy = TokenPolicy {
            required: config.token_required,
        };
        Ok(Self::new(extractor, token_policy))
    }
}
