//! HTTP registration client
//!
//! `POST /peers` with an urlencoded `public_key` field, JSON response.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use super::{PeerAssignment, PeerRegistrationService};
use crate::error::RegistrationError;

const PEERS_PATH: &str = "/peers";

/// reqwest-backed registration against a WireGuard server
pub struct HttpPeerRegistration {
    client: reqwest::Client,
    peers_url: Url,
    timeout: Duration,
}

impl HttpPeerRegistration {
    pub fn new(server_url: &Url, timeout: Duration) -> Result<Self, RegistrationError> {
        Ok(Self {
            client: reqwest::Client::new(),
            peers_url: server_url.join(PEERS_PATH)?,
            timeout,
        })
    }

    pub fn peers_url(&self) -> &Url {
        &self.peers_url
    }
}

#[async_trait]
impl PeerRegistrationService for HttpPeerRegistration {
    async fn register(&self, public_key: &str) -> Result<PeerAssignment, RegistrationError> {
        tracing::debug!("Registering peer at {}", self.peers_url);

        // Form encoding sets Content-Type: application/x-www-form-urlencoded
        let response = self
            .client
            .post(self.peers_url.clone())
            .form(&[("public_key", public_key)])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Peer registration rejected: {}", status);
            return Err(RegistrationError::Status { status, body });
        }

        let assignment: PeerAssignment = serde_json::from_str(&body)
            .map_err(|e| RegistrationError::MalformedResponse(e.to_string()))?;
        assignment.validate()?;

        tracing::debug!("Assigned address {}", assignment.address);
        Ok(assignment)
    }
}
