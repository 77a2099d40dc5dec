//! JWT token service implementation.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use actify_core::ports::{AuthError, TokenClaims, TokenService};

/// Fixed session lifetime.
pub const TOKEN_TTL_HOURS: i64 = 1;

const DEV_SECRET: &str = "change-me-in-production";

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEV_SECRET.to_string(),
            expiration_hours: TOKEN_TTL_HOURS,
        }
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Empty when the login payload carried no usable email.
    #[serde(default)]
    email: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
    iat: i64, // issued at
    exp: i64, // expiration timestamp
}

/// JWT-based token service.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // Expiry is checked against the caller's clock in `verify`.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        // Login extras may carry `aud`/`iss`/`sub`; only signature and `exp` matter.
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key,
            decoding_key,
            validation,
            config,
        }
    }

    /// Build the service from `JWT_SECRET` (or `ACCESS_TOKEN_SECRET`).
    ///
    /// A missing secret is fatal in production; elsewhere a development
    /// secret is used.
    pub fn from_env(is_production: bool) -> Result<Self, AuthError> {
        let secret = std::env::var("JWT_SECRET")
            .or_else(|_| std::env::var("ACCESS_TOKEN_SECRET"))
            .ok();

        Self::from_secret(secret, is_production)
    }

    /// Build the service from an optional configured secret.
    pub fn from_secret(secret: Option<String>, is_production: bool) -> Result<Self, AuthError> {
        let secret = match secret.filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if is_production => {
                tracing::error!(
                    "SECURITY: No JWT secret in production! Set JWT_SECRET environment variable."
                );
                return Err(AuthError::MissingSecret);
            }
            None => {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
                DEV_SECRET.to_string()
            }
        };

        Ok(Self::new(JwtConfig {
            secret,
            expiration_hours: TOKEN_TTL_HOURS,
        }))
    }
}

impl TokenService for JwtTokenService {
    fn issue(
        &self,
        email: &str,
        mut extra: Map<String, Value>,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let exp = now + TimeDelta::hours(self.config.expiration_hours);

        // Reserved names would collide with the typed fields.
        for reserved in ["email", "iat", "exp"] {
            extra.remove(reserved);
        }

        let claims = Claims {
            email: email.to_string(),
            extra,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let claims = token_data.claims;
        if now.timestamp() >= claims.exp {
            return Err(AuthError::TokenExpired);
        }

        Ok(TokenClaims {
            email: claims.email,
            extra: claims.extra,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }

    fn ttl_seconds(&self) -> i64 {
        self.config.expiration_hours * 3600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret: "test-secret-key".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_verify_within_lifetime() {
        let service = test_service();
        let issued = Utc::now();

        let token = service.issue("a@x.com", Map::new(), issued).unwrap();
        let claims = service
            .verify(&token, issued + TimeDelta::minutes(59))
            .unwrap();

        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.issued_at, issued.timestamp());
        assert_eq!(claims.expires_at, issued.timestamp() + 3600);
    }

    #[test]
    fn test_expires_after_one_hour() {
        let service = test_service();
        let issued = Utc::now();
        let token = service.issue("a@x.com", Map::new(), issued).unwrap();

        let at_expiry = service.verify(&token, issued + TimeDelta::hours(1));
        let later = service.verify(&token, issued + TimeDelta::hours(3));

        assert!(matches!(at_expiry, Err(AuthError::TokenExpired)));
        assert!(matches!(later, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_rejects_garbage() {
        let result = test_service().verify("invalid-token", Utc::now());
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_rejects_other_secret() {
        let other = JwtTokenService::new(JwtConfig {
            secret: "someone-else".to_string(),
            ..Default::default()
        });
        let token = other.issue("a@x.com", Map::new(), Utc::now()).unwrap();

        let result = test_service().verify(&token, Utc::now());
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_extra_claims_round_trip_without_overriding_email() {
        let service = test_service();
        let mut extra = Map::new();
        extra.insert("name".to_string(), Value::from("Ada"));
        extra.insert("email".to_string(), Value::from("spoof@x.com"));

        let now = Utc::now();
        let token = service.issue("a@x.com", extra, now).unwrap();
        let claims = service.verify(&token, now).unwrap();

        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.extra.get("name"), Some(&Value::from("Ada")));
        assert!(!claims.extra.contains_key("email"));
    }

    #[test]
    fn test_registered_claim_extras_still_verify() {
        let service = test_service();
        let mut extra = Map::new();
        extra.insert("aud".to_string(), Value::from("web"));
        extra.insert("iss".to_string(), Value::from("front-end"));
        extra.insert("sub".to_string(), Value::from("42"));

        let now = Utc::now();
        let token = service.issue("a@x.com", extra, now).unwrap();
        let claims = service.verify(&token, now).unwrap();

        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.extra.get("aud"), Some(&Value::from("web")));
        assert_eq!(claims.extra.get("iss"), Some(&Value::from("front-end")));
    }

    #[test]
    fn test_token_without_email_verifies() {
        let service = test_service();
        let now = Utc::now();

        let token = service.issue("", Map::new(), now).unwrap();
        let claims = service.verify(&token, now).unwrap();

        assert_eq!(claims.email, "");
    }

    #[test]
    fn test_missing_secret_is_fatal_in_production() {
        let err = JwtTokenService::from_secret(None, true).err().unwrap();
        assert!(matches!(err, AuthError::MissingSecret));

        let err = JwtTokenService::from_secret(Some(String::new()), true).err().unwrap();
        assert!(matches!(err, AuthError::MissingSecret));
    }

    #[test]
    fn test_missing_secret_falls_back_in_development() {
        let service = JwtTokenService::from_secret(None, false).unwrap();
        let token = service.issue("a@x.com", Map::new(), Utc::now()).unwrap();

        assert!(service.verify(&token, Utc::now()).is_ok());
    }

    #[test]
    fn test_ttl_is_one_hour() {
        assert_eq!(test_service().ttl_seconds(), 3600);
    }
}
