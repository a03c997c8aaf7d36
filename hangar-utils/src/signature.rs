//! Ed25519 verification of inbound interaction requests.
//!
//! Discord signs `timestamp || body` with the application's key and sends the
//! hex signature and timestamp as headers.

use ed25519_dalek::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH, Signature, VerifyingKey};

/// Header carrying the hex-encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
/// Header carrying the signed timestamp.
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("public key is not a valid hex ed25519 key")]
    InvalidKey,
    #[error("request is missing the signature or timestamp header")]
    MissingHeader,
    #[error("signature header is not a hex ed25519 signature")]
    MalformedSignature,
    #[error("signature does not match the request")]
    Mismatch,
}

/// Verifies request signatures against the application's public key.
#[derive(Clone, Debug)]
pub struct RequestVerifier {
    key: VerifyingKey,
}

impl RequestVerifier {
    /// Parse the hex public key shown in the developer portal.
    pub fn from_hex(public_key: &str) -> Result<Self, SignatureError> {
        let bytes = decode_fixed::<PUBLIC_KEY_LENGTH>(public_key.trim())
            .ok_or(SignatureError::InvalidKey)?;
        let key = VerifyingKey::from_bytes(&bytes).map_err(|_| SignatureError::InvalidKey)?;

        Ok(Self { key })
    }

    /// Check `signature` (hex) over `timestamp || body`.
    pub fn verify(
        &self,
        signature: Option<&str>,
        timestamp: Option<&str>,
        body: &[u8],
    ) -> Result<(), SignatureError> {
        let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
            return Err(SignatureError::MissingHeader);
        };

        let signature = decode_fixed::<SIGNATURE_LENGTH>(signature.trim())
            .map(|bytes| Signature::from_bytes(&bytes))
            .ok_or(SignatureError::MalformedSignature)?;

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key
            .verify_strict(&message, &signature)
            .map_err(|_| SignatureError::Mismatch)
    }
}

fn decode_fixed<const N: usize>(raw: &str) -> Option<[u8; N]> {
    let bytes = hex::decode(raw).ok()?;
    bytes.try_into().ok()
}
