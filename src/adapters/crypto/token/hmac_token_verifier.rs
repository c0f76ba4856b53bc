//! HS256 bearer-token verification.
//!
//! Verifies the signature and standard claims (issuer, audience,
//! expiration, not-before) of a token and projects it into the core's
//! transport-agnostic `TokenClaims`. Grid never signs tokens itself —
//! this adapter only ever decodes.

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::adapters::crypto::token::HmacKey;
use crate::core::error::TokenError;
use crate::core::token::TokenClaims;
use crate::core::usecases::ports::TokenVerifier;

/// Claim names a client-credentials grant is expected to carry instead of
/// a human subject — the authenticator's cue to provision a service
/// account rather than a user.
const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";

#[derive(Debug, Deserialize)]
struct RawClaims {
    sub: String,
    jti: String,
    iss: String,
    aud: String,
    iat: i64,
    exp: i64,
    nbf: Option<i64>,
    #[serde(default)]
    groups: Vec<String>,
    #[serde(default)]
    grant_type: Option<String>,
}

/// `TokenVerifier` implementation over HS256, for tokens signed with a
/// pre-shared secret (the grid's own identity provider, or an external
/// one configured to sign with the same key).
pub struct HmacTokenVerifier {
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
}

impl HmacTokenVerifier {
    pub fn new(key: &HmacKey, issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            decoding_key: key.decoding_key().clone(),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.clone()]);
        validation.set_audience(&[self.audience.clone()]);
        validation.validate_nbf = true;
        validation
    }

    fn to_rfc3339(seconds: i64) -> String {
        chrono::DateTime::from_timestamp(seconds, 0)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default()
    }
}

impl TokenVerifier for HmacTokenVerifier {
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let data = decode::<RawClaims>(token, &self.decoding_key, &self.validation()).map_err(|err| {
            match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::expired(""),
                ErrorKind::ImmatureSignature => TokenError::not_yet_valid(""),
                ErrorKind::InvalidSignature => TokenError::signature_invalid(err.to_string()),
                ErrorKind::InvalidIssuer => TokenError::issuer_mismatch(self.issuer.clone(), ""),
                ErrorKind::InvalidAudience => TokenError::audience_mismatch(self.audience.clone(), ""),
                _ => TokenError::malformed(err.to_string()),
            }
        })?;
        let claims = data.claims;

        let mut token_claims = TokenClaims::new(
            claims.sub,
            claims.jti,
            claims.iss,
            claims.aud,
            Self::to_rfc3339(claims.iat),
            Self::to_rfc3339(claims.exp),
        )
        .with_groups(claims.groups)
        .as_service_account(claims.grant_type.as_deref() == Some(CLIENT_CREDENTIALS_GRANT));

        if let Some(nbf) = claims.nbf {
            token_claims = token_claims.with_not_before(Self::to_rfc3339(nbf));
        }

        Ok(token_claims)
    }
}
