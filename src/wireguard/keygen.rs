//! WireGuard Curve25519 key pair generation

use base64::Engine;
use rand::rngs::OsRng;
use x25519_dalek::{PublicKey, StaticSecret};

use crate::error::KeyError;

/// Generated WireGuard key pair (Base64 encoded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WgKeyPair {
    pub private_key: String,
    pub public_key: String,
}

/// Source of fresh key pairs
pub trait KeyGenerator: Send + Sync {
    fn generate(&self) -> Result<WgKeyPair, KeyError>;
}

/// Curve25519 key generator backed by the OS RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct X25519KeyGenerator;

impl KeyGenerator for X25519KeyGenerator {
    fn generate(&self) -> Result<WgKeyPair, KeyError> {
        let keypair = generate_keypair();
        validate_key(&keypair.private_key)?;
        validate_key(&keypair.public_key)?;
        Ok(keypair)
    }
}

/// Generate a new Curve25519 key pair for WireGuard
pub fn generate_keypair() -> WgKeyPair {
    let secret = StaticSecret::random_from_rng(OsRng);
    let public = PublicKey::from(&secret);

    WgKeyPair {
        private_key: base64::engine::general_purpose::STANDARD.encode(secret.as_bytes()),
        public_key: base64::engine::general_purpose::STANDARD.encode(public.as_bytes()),
    }
}

/// Check that a Base64 key decodes to exactly 32 bytes
///
/// Whitespace anywhere in the input is rejected.
pub fn validate_key(key: &str) -> Result<(), KeyError> {
    let decoded = base64::engine::general_purpose::STANDARD.decode(key)?;
    if decoded.len() != 32 {
        return Err(KeyError::InvalidLength(decoded.len()));
    }
    Ok(())
}
