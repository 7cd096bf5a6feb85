//! Verification of Discord's detached ed25519 request signatures.
//!
//! Discord signs every interaction webhook with the application's key. The
//! signed message is the `X-Signature-Timestamp` header value followed by the
//! raw request body, and the hex-encoded signature is sent in
//! `X-Signature-Ed25519`.

use axum::http::HeaderMap;
use ed25519_dalek::{Signature, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

use crate::server::error::config::ConfigError;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

#[derive(Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    pub fn new(key: VerifyingKey) -> Self {
        Self { key }
    }

    /// Parses the application's hex-encoded public key.
    ///
    /// # Returns
    /// - `Ok(SignatureVerifier)` - Key decoded and valid
    /// - `Err(ConfigError::InvalidValue)` - Not 32 bytes of hex or not a valid curve point
    pub fn from_hex(public_key: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            var: "DISCORD_PUBLIC_KEY".to_string(),
            reason,
        };

        let bytes: [u8; PUBLIC_KEY_LENGTH] = hex::decode(public_key.trim())
            .map_err(|e| invalid(e.to_string()))?
            .try_into()
            .map_err(|_| invalid(format!("expected {} bytes", PUBLIC_KEY_LENGTH)))?;

        let key = VerifyingKey::from_bytes(&bytes).map_err(|e| invalid(e.to_string()))?;

        Ok(Self { key })
    }

    /// Checks `signature_hex` against `timestamp ‖ body`.
    pub fn verify(&self, timestamp: &str, body: &[u8], signature_hex: &str) -> bool {
        let Ok(bytes) = hex::decode(signature_hex) else {
            return false;
        };
        let Ok(bytes): Result<[u8; SIGNATURE_LENGTH], _> = bytes.try_into() else {
            return false;
        };
        let signature = Signature::from_bytes(&bytes);

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key.verify_strict(&message, &signature).is_ok()
    }

    /// Checks the signature headers of a request against its raw body.
    ///
    /// Missing or non-UTF-8 headers fail verification.
    pub fn verify_headers(&self, headers: &HeaderMap, body: &[u8]) -> bool {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

        match (header(SIGNATURE_HEADER), header(TIMESTAMP_HEADER)) {
            (Some(signature), Some(timestamp)) => self.verify(timestamp, body, signature),
            _ => false,
        }
    }
}
