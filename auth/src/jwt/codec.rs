use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Signs and verifies [`Claims`] with a shared secret.
///
/// Uses HS256 (HMAC with SHA-256). Verification checks the signature, the
/// expiry (no leeway) and that issuer and audience match the ones this codec
/// was built with.
pub struct ClaimsCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
}

impl ClaimsCodec {
    /// Create a new codec.
    ///
    /// # Arguments
    /// * `secret` - Signing secret (at least 32 bytes recommended for HS256)
    /// * `issuer` - Expected `iss` claim
    /// * `audience` - Expected `aud` claim
    pub fn new(secret: &[u8], issuer: &str, audience: &str) -> Self {
        let algorithm = Algorithm::HS256;

        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "iat", "sub", "iss", "aud"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            validation,
        }
    }

    /// Sign claims into a compact three-part token.
    ///
    /// # Errors
    /// * `SigningFailed` - Claims could not be serialized or signed
    pub fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `SignatureInvalid` - Tampered token or signed with another secret
    /// * `TokenExpired` - Current time is past `exp`
    /// * `MalformedToken` - Token structure cannot be parsed
    /// * `ClaimRejected` - Wrong issuer/audience or a required claim is missing
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::SignatureInvalid,
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidIssuer
                | ErrorKind::InvalidAudience
                | ErrorKind::InvalidSubject
                | ErrorKind::ImmatureSignature
                | ErrorKind::MissingRequiredClaim(_) => JwtError::ClaimRejected(e.to_string()),
                _ => JwtError::MalformedToken(e.to_string()),
            })
    }
}
