//! Token extraction middleware: runs the extractor → stores `ExtractedToken` in extensions.
//!
//! The token is only located here, never verified. A verification layer placed after
//! this one (or a handler) reads it back through the `AuthToken` extractor.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ExtractedToken;
use crate::error::AppError;
use crate::extract::RequestView;
use crate::state::AppState;

/// What to do with requests that carry no token.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenPolicy {
    // If true, requests without a token are rejected with 401 before reaching handlers.
    pub required: bool,
}

/// Apply token extraction to every route of `router`.
///
/// ```ignore
/// let protected = Router::new().route("/token", get(inspect_token));
/// let protected = middleware::token::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, token_middleware))
}

async fn token_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let view = RequestView::from_request(&req);

    match state.extractor.extract_with_source(&view) {
        Some((source, value)) => {
            // Never log the token itself.
            tracing::debug!(source = source.as_str(), "token extracted");
            req.extensions_mut().insert(ExtractedToken::new(value, source));
        }
        None if state.token_policy.required => {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                "request without token rejected"
            );
            return Err(AppError::Unauthorized);
        }
        None => {
            tracing::debug!("no token in request");
        }
    }

    Ok(next.run(req).await)
}
