//! JWT issuing and cookie-based verification.
//!
//! `/jwt` signs whatever claims object the client posts; the verifier reads
//! the token back from the `token` cookie and gates owner-scoped routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{json, Map, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the cookie carrying the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Token lifetime: 3 hours.
const TOKEN_TTL_SECS: i64 = 3 * 60 * 60;

/// Issues and verifies HS256 bearer tokens.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    /// Create an issuer signing with `secret`.
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    /// Create an issuer from `ACCESS_TOKEN_SECRET`.
    pub fn from_env() -> Result<Self, ApiError> {
        let secret = std::env::var("ACCESS_TOKEN_SECRET")
            .map_err(|_| ApiError::internal("ACCESS_TOKEN_SECRET is not set"))?;
        Ok(Self::new(secret.as_bytes(), TOKEN_TTL_SECS))
    }

    /// Sign an arbitrary claims object, stamping `iat` and `exp`.
    ///
    /// No claim shape is required; the caller-supplied fields ride along
    /// untouched.
    pub fn issue(&self, claims: Map<String, Value>) -> Result<String, ApiError> {
        let mut claims = claims;
        let now = Utc::now().timestamp();
        claims.insert("iat".to_string(), json!(now));
        claims.insert("exp".to_string(), json!(now + self.ttl_secs));

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| ApiError::internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify signature and expiry, returning the decoded claims.
    pub fn verify(&self, token: &str) -> Result<Value, ApiError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Value>(token, &self.decoding, &validation)
            .map_err(|_| ApiError::unauthorized("unauthorized access"))?;
        Ok(data.claims)
    }

    /// Authenticate a request from its cookie jar.
    pub fn authenticate(&self, jar: &CookieJar) -> Result<AuthUser, ApiError> {
        let token = jar
            .get(TOKEN_COOKIE)
            .ok_or_else(|| ApiError::unauthorized("unauthorized access"))?;
        let claims = self.verify(token.value())?;
        Ok(AuthUser::from_claims(claims))
    }
}

/// Authenticated caller extracted from the request cookie.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: Option<String>,
    pub role: Option<String>,
    pub claims: Value,
}

impl AuthUser {
    fn from_claims(claims: Value) -> Self {
        let email = claims
            .get("email")
            .and_then(Value::as_str)
            .map(str::to_string);
        let role = claims
            .get("role")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self {
            email,
            role,
            claims,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }

    /// The caller's email claim, required on owner-scoped routes.
    pub fn require_email(&self) -> Result<&str, ApiError> {
        self.email
            .as_deref()
            .ok_or_else(|| ApiError::forbidden("Token carries no email claim"))
    }

    /// Reject unless the caller owns `email` or is an admin.
    pub fn authorize_owner(&self, email: &str) -> Result<(), ApiError> {
        if self.is_admin() || self.email.as_deref() == Some(email) {
            Ok(())
        } else {
            Err(ApiError::forbidden("Caller does not own this resource"))
        }
    }

    /// Reject unless the caller is an admin.
    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ApiError::forbidden("Admin role required"))
        }
    }
}

/// Axum extractor for the authenticated caller.
#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        state.issuer.authenticate(&jar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Cookie;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(b"test-secret", TOKEN_TTL_SECS)
    }

    fn claims(email: &str, role: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("email".to_string(), json!(email));
        map.insert("role".to_string(), json!(role));
        map
    }

    #[test]
    fn issue_then_verify_round_trips_claims() {
        let issuer = issuer();
        let token = issuer.issue(claims("a@x.com", "worker")).unwrap();

        let decoded = issuer.verify(&token).unwrap();
        assert_eq!(decoded["email"], json!("a@x.com"));
        assert_eq!(decoded["role"], json!("worker"));

        let iat = decoded["iat"].as_i64().unwrap();
        let exp = decoded["exp"].as_i64().unwrap();
        assert_eq!(exp - iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn verify_rejects_expired_token() {
        // Issue a token that expired two hours ago, well past any leeway
        let expired = TokenIssuer::new(b"test-secret", -2 * 60 * 60);
        let token = expired.issue(claims("a@x.com", "worker")).unwrap();

        let result = issuer().verify(&token);
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let other = TokenIssuer::new(b"other-secret", TOKEN_TTL_SECS);
        let token = other.issue(claims("a@x.com", "worker")).unwrap();

        assert!(issuer().verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_tampered_signature() {
        let issuer = issuer();
        let mut token = issuer.issue(claims("a@x.com", "worker")).unwrap();
        token.truncate(token.len() - 2);

        assert!(issuer.verify(&token).is_err());
    }

    #[test]
    fn authenticate_rejects_missing_cookie() {
        let result = issuer().authenticate(&CookieJar::new());
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn authenticate_reads_token_cookie() {
        let issuer = issuer();
        let token = issuer.issue(claims("a@x.com", "admin")).unwrap();
        let jar = CookieJar::new().add(Cookie::new(TOKEN_COOKIE, token));

        let user = issuer.authenticate(&jar).unwrap();
        assert_eq!(user.email.as_deref(), Some("a@x.com"));
        assert!(user.is_admin());
    }

    #[test]
    fn owner_guard_matches_email_or_admin() {
        let issuer = issuer();

        let token = issuer.issue(claims("a@x.com", "worker")).unwrap();
        let jar = CookieJar::new().add(Cookie::new(TOKEN_COOKIE, token));
        let worker = issuer.authenticate(&jar).unwrap();
        assert!(worker.authorize_owner("a@x.com").is_ok());
        assert!(worker.authorize_owner("b@x.com").is_err());
        assert!(worker.require_admin().is_err());

        let token = issuer.issue(claims("root@x.com", "admin")).unwrap();
        let jar = CookieJar::new().add(Cookie::new(TOKEN_COOKIE, token));
        let admin = issuer.authenticate(&jar).unwrap();
        assert!(admin.authorize_owner("b@x.com").is_ok());
        assert!(admin.require_admin().is_ok());
    }
}
