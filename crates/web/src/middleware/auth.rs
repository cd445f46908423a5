use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::WebError;

const ISSUER: &str = "competition-registry";

/// Verified token claims, inserted into request extensions by
/// [`require_auth`] so handlers get the caller identity as explicit
/// request-scoped context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    pub fn issue(&self, subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_lifetime(subject, Duration::hours(12))
    }

    pub fn issue_with_lifetime(
        &self,
        subject: &str,
        lifetime: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + lifetime).timestamp(),
            iat: now.timestamp(),
            iss: ISSUER.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(data.claims)
    }
}

/// Route-layer guard for the protected endpoints. Expects
/// `Authorization: Bearer <jwt>`.
pub async fn require_auth(
    State(keys): State<JwtKeys>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let Some(token) = token else {
        return WebError::Unauthorized.into_response();
    };

    match keys.verify(token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => {
            tracing::warn!("Rejected bearer token: {}", err);
            WebError::Unauthorized.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::get};
    use tower::ServiceExt;

    fn keys() -> JwtKeys {
        JwtKeys::new("test-secret-with-enough-entropy")
    }

    fn protected_app(keys: JwtKeys) -> Router {
        Router::new()
            .route("/guarded", get(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(keys, require_auth))
    }

    fn request(auth: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri("/guarded");
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn token_round_trips() {
        let keys = keys();
        let token = keys.issue("admin").unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.iss, ISSUER);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_fails_verification() {
        let keys = keys();
        let token = keys
            .issue_with_lifetime("admin", Duration::hours(-2))
            .unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let token = keys().issue("admin").unwrap();
        let other = JwtKeys::new("a-different-secret-entirely");
        assert!(other.verify(&token).is_err());
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let response = protected_app(keys())
            .oneshot(request(None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        let response = protected_app(keys())
            .oneshot(request(Some("Bearer not-a-jwt")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_token_passes() {
        let keys = keys();
        let token = keys.issue("admin").unwrap();
        let response = protected_app(keys)
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
