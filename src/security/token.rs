/// Session tokens: signed, expiring proof of identity.
///
/// Tokens are HS256 JWTs carrying the user id as the `sub` claim with a fixed
/// seven-day expiry. Verification failures of any kind (bad signature,
/// malformed token, expired) collapse into one generic authentication error
/// so callers cannot distinguish which check failed.
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};

const TOKEN_EXPIRY_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Holds the signing and verification keys derived from the configured
/// secret. Built once at startup; the secret itself is never stored.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for the given user id.
    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        self.issue_with_lifetime(user_id, Duration::days(TOKEN_EXPIRY_DAYS))
    }

    fn issue_with_lifetime(&self, user_id: Uuid, lifetime: Duration) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify a token and return the user id it was issued for.
    pub fn verify(&self, token: &str) -> Result<Uuid> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| AppError::Authentication("Invalid or expired token".to_string()))?;

        Uuid::parse_str(&data.claims.sub)
            .map_err(|_| AppError::Authentication("Invalid or expired token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new("test-secret-not-for-production")
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let signer = signer();
        let user_id = Uuid::new_v4();

        let token = signer.issue(user_id).expect("should issue token");
        assert_eq!(token.matches('.').count(), 2); // JWT has 3 parts

        let verified = signer.verify(&token).expect("should verify token");
        assert_eq!(verified, user_id);
    }

    #[test]
    fn test_verify_rejects_malformed_token() {
        let signer = signer();
        assert!(signer.verify("not.a.token").is_err());
        assert!(signer.verify("").is_err());
    }

    #[test]
    fn test_verify_rejects_tampered_signature() {
        let signer = signer();
        let token = signer.issue(Uuid::new_v4()).expect("should issue token");

        let mut parts: Vec<&str> = token.split('.').collect();
        let flipped = if parts[2].starts_with('A') { "B" } else { "A" };
        let tampered_sig = format!("{}{}", flipped, &parts[2][1..]);
        parts[2] = &tampered_sig;
        let tampered = parts.join(".");

        assert!(signer.verify(&tampered).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = signer().issue(Uuid::new_v4()).expect("should issue token");
        let other = TokenSigner::new("a-completely-different-secret");
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let signer = signer();
        let token = signer
            .issue_with_lifetime(Uuid::new_v4(), Duration::days(-1))
            .expect("should sign token");
        assert!(signer.verify(&token).is_err());
    }
}
