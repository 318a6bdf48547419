//! Client config generation
//!
//! Generates a key pair, registers the public key as a peer, renders the
//! client config and saves it. Nothing is saved unless every step before
//! it succeeded.

use std::path::PathBuf;

use crate::error::GenerateError;
use crate::registration::PeerRegistrationService;
use crate::saver::FileSaver;
use crate::wireguard::config::{generate_config, WgClientConfigParams, CONFIG_FILENAME};
use crate::wireguard::keygen::KeyGenerator;

pub struct ConfigGenerator {
    keys: Box<dyn KeyGenerator>,
    registration: Box<dyn PeerRegistrationService>,
    saver: Box<dyn FileSaver>,
    endpoint_host: String,
}

impl ConfigGenerator {
    pub fn new(
        keys: Box<dyn KeyGenerator>,
        registration: Box<dyn PeerRegistrationService>,
        saver: Box<dyn FileSaver>,
        endpoint_host: impl Into<String>,
    ) -> Self {
        Self {
            keys,
            registration,
            saver,
            endpoint_host: endpoint_host.into(),
        }
    }

    /// Run one generation and return the path of the saved config
    pub async fn generate_config(&self) -> Result<PathBuf, GenerateError> {
        let keypair = self.keys.generate()?;
        tracing::info!("Generated key pair, public key {}", keypair.public_key);

        let assignment = self.registration.register(&keypair.public_key).await?;
        tracing::info!("Peer registered with address {}", assignment.address);

        let conf = generate_config(&WgClientConfigParams {
            private_key: keypair.private_key,
            address: assignment.address,
            server_public_key: assignment.server_public_key,
            endpoint_host: self.endpoint_host.clone(),
        });

        let path = self.saver.save(CONFIG_FILENAME, conf.as_bytes()).await?;
        tracing::info!("Saved client config to {}", path.display());

        Ok(path)
    }
}
