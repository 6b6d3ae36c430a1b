use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

use crate::error::AppError;

use super::ExtractedToken;

/// Handler で ExtractedToken を受け取るための extractor
/// token middleware が request.extensions() に insert 済みである前提
/// 見つからない場合は 401 (トークンなし・ミドルウェア未設定)
#[derive(Debug, Clone)]
pub struct AuthToken(pub ExtractedToken);

impl<S> FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ExtractedToken>()
            .cloned()
            .map(AuthToken)
            .ok_or(AppError::Unauthorized)
    }
}

impl<S> OptionalFromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<ExtractedToken>().cloned().map(AuthToken))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;

    use super::*;
    use crate::extract::TokenSource;

    fn parts_with(token: Option<ExtractedToken>) -> Parts {
        let (mut parts, _) = Request::builder().uri("/").body(()).unwrap().into_parts();
        if let Some(token) = token {
            parts.extensions.insert(token);
        }
        parts
    }

    #[tokio::test]
    async fn reads_token_from_extensions() {
        let token = ExtractedToken::new("abc".to_string(), TokenSource::Query);
        let mut parts = parts_with(Some(token.clone()));

        let AuthToken(found) =
            <AuthToken as FromRequestParts<()>>::from_request_parts(&mut parts, &())
                .await
                .unwrap();
        assert_eq!(found, token);
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let mut parts = parts_with(None);

        let rejection = <AuthToken as FromRequestParts<()>>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(rejection.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn optional_never_rejects() {
        let mut parts = parts_with(None);

        let found = <AuthToken as OptionalFromRequestParts<()>>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
