//! wg24-conf - WireGuard client config generator
//!
//! Generates a local key pair, registers the public key with a WireGuard
//! server over HTTP and saves the resulting client config as `wg24.conf`.

pub mod config;
pub mod error;
pub mod generator;
pub mod registration;
pub mod saver;
pub mod wireguard;

pub use crate::error::GenerateError;
pub use crate::generator::ConfigGenerator;
