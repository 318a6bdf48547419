//! WireGuard key material and client config rendering

pub mod config;
pub mod keygen;

pub use config::{generate_config, WgClientConfigParams, CONFIG_FILENAME};
pub use keygen::{KeyGenerator, WgKeyPair, X25519KeyGenerator};
