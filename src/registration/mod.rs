//! Peer registration
//!
//! Sends the local public key to the server and receives the address
//! assigned to the new peer together with the server's public key.

mod client;

pub use self::client::HttpPeerRegistration;

use async_trait::async_trait;
use ipnetwork::IpNetwork;
use serde::Deserialize;

use crate::error::RegistrationError;
use crate::wireguard::keygen::validate_key;

/// Assignment returned by the registration server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PeerAssignment {
    pub address: String,
    pub server_public_key: String,
}

impl PeerAssignment {
    /// Reject assignments that cannot produce a usable config
    ///
    /// Both fields are rendered verbatim, so they must be exact: no
    /// surrounding whitespace and no embedded line breaks.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        validate_key(&self.server_public_key).map_err(|e| {
            RegistrationError::MalformedResponse(format!(
                "server_public_key {:?} is not a WireGuard key: {}",
                self.server_public_key, e
            ))
        })?;

        // Bare addresses and CIDR both parse as IpNetwork
        self.address.parse::<IpNetwork>().map_err(|e| {
            RegistrationError::MalformedResponse(format!(
                "address {:?} is not an IP or CIDR: {}",
                self.address, e
            ))
        })?;

        Ok(())
    }
}

/// Registers a public key as a new peer
#[async_trait]
pub trait PeerRegistrationService: Send + Sync {
    async fn register(&self, public_key: &str) -> Result<PeerAssignment, RegistrationError>;
}
