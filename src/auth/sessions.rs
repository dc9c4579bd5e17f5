/**
 * Session Tokens
 *
 * This module implements the bearer token service: stateless, signed JWT
 * tokens carrying the user's email as the subject claim plus an expiry.
 * Tokens are minted at signup/login and expire on their own; there is no
 * revocation.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure
///
/// Timestamps are UTC unix seconds, so expiry comparison never mixes
/// timezone-aware and naive representations.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject - the user's email
    pub sub: String,
    /// Expiration time (unix timestamp, seconds)
    pub exp: i64,
    /// Issued at time (unix timestamp, seconds)
    pub iat: i64,
}

/// Token verification failure
///
/// `Expired` and `Invalid` are distinct so callers can log the reason, but
/// both map to the same unauthorized outcome at the HTTP boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature did not verify or the token structure could not be decoded
    #[error("token is invalid")]
    Invalid,
    /// Token is structurally valid but past its expiry
    #[error("token has expired")]
    Expired,
}

/// Issues and validates signed bearer tokens
///
/// Holds the HS256 signing secret and the default time-to-live. Stateless:
/// issuing has no side effect and verification needs no storage.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    default_ttl: Duration,
}

impl TokenService {
    /// Create a token service from a signing secret and a default TTL
    pub fn new(secret: &str, default_ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
            default_ttl,
        }
    }

    /// Issue a token for a subject using the default TTL
    ///
    /// # Arguments
    ///
    /// * `subject` - The identity to encode (the user's email)
    ///
    /// # Returns
    ///
    /// The encoded JWT string
    pub fn issue(&self, subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_ttl(subject, self.default_ttl)
    }

    /// Issue a token for a subject with an explicit TTL
    ///
    /// A non-positive TTL produces an already-expired token; useful for
    /// exercising expiry handling.
    pub fn issue_with_ttl(
        &self,
        subject: &str,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            exp: now + ttl.num_seconds(),
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a token
    ///
    /// # Errors
    ///
    /// * `TokenError::Expired` - the signature is good but `exp` is in the past
    /// * `TokenError::Invalid` - bad signature, malformed structure, or a
    ///   missing subject claim
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        // No clock leeway: a token expired by one second is expired.
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => {
                    tracing::debug!("token rejected: {:?}", err.kind());
                    Err(TokenError::Invalid)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::minutes(30))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let tokens = service();
        let token = tokens.issue("user@example.com").unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, "user@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = service();
        let token = tokens
            .issue_with_ttl("user@example.com", Duration::seconds(-1))
            .unwrap();

        assert_eq!(tokens.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_garbage_token_invalid() {
        let tokens = service();
        assert_eq!(tokens.verify("not.a.token"), Err(TokenError::Invalid));
    }

    #[test]
    fn test_wrong_secret_invalid() {
        let tokens = service();
        let other = TokenService::new("different-secret", Duration::minutes(30));
        let token = other.issue("user@example.com").unwrap();

        assert_eq!(tokens.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_missing_subject_invalid() {
        // A token signed with the right secret but without a sub claim
        // must fail structural decoding.
        #[derive(Serialize)]
        struct NoSubject {
            exp: i64,
            iat: i64,
        }

        let now = Utc::now().timestamp();
        let claims = NoSubject {
            exp: now + 60,
            iat: now,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_ref()),
        )
        .unwrap();

        assert_eq!(service().verify(&token), Err(TokenError::Invalid));
    }
}
