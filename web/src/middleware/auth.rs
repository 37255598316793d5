use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE: &str = "admin_session";
pub const LOGIN_PATH: &str = "/adminlogin";
pub const SESSION_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signing keys for the admin session token, shared through application
/// state the same way the database handle is.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Mints a signed session token for a logged-in admin, valid for
    /// 24 hours.
    pub fn issue(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_lifetime(email, Duration::hours(SESSION_HOURS))
    }

    fn issue_with_lifetime(
        &self,
        email: &str,
        lifetime: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Checks signature and expiry; returns the claims when the token is
    /// still valid.
    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        decode::<SessionClaims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .ok()
    }
}

/// Session gate for the admin surface. Anything behind this layer needs a
/// valid session cookie; everyone else is sent back to the login page.
pub async fn require_admin(
    State(keys): State<SessionKeys>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let session = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| keys.verify(cookie.value()));

    match session {
        Some(_) => next.run(request).await,
        None => Redirect::temporary(LOGIN_PATH).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        middleware,
        routing::get,
    };
    use rstest::rstest;
    use tower::ServiceExt;

    fn keys() -> SessionKeys {
        SessionKeys::from_secret("test-secret")
    }

    fn gated_router(keys: SessionKeys) -> Router {
        Router::new()
            .route("/admin/ping", get(|| async { "pong" }))
            .route_layer(middleware::from_fn_with_state(keys, require_admin))
    }

    #[test]
    fn issued_tokens_verify() {
        let keys = keys();
        let token = keys.issue("admin@example.com").unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "admin@example.com");
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let keys = keys();
        let token = keys
            .issue_with_lifetime("admin@example.com", Duration::hours(-2))
            .unwrap();
        assert!(keys.verify(&token).is_none());
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let token = SessionKeys::from_secret("other-secret")
            .issue("admin@example.com")
            .unwrap();
        assert!(keys().verify(&token).is_none());
    }

    #[rstest]
    #[case(None)]
    #[case(Some("not-a-token"))]
    #[case(Some(""))]
    #[tokio::test]
    async fn requests_without_a_valid_session_redirect_to_login(#[case] cookie: Option<&str>) {
        let mut request = Request::builder().uri("/admin/ping");
        if let Some(value) = cookie {
            request = request.header(header::COOKIE, format!("{SESSION_COOKIE}={value}"));
        }

        let response = gated_router(keys())
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], LOGIN_PATH);
    }

    #[tokio::test]
    async fn valid_cookie_passes_the_gate() {
        let keys = keys();
        let token = keys.issue("admin@example.com").unwrap();

        let response = gated_router(keys)
            .oneshot(
                Request::builder()
                    .uri("/admin/ping")
                    .header(header::COOKIE, format!("{SESSION_COOKIE}={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
