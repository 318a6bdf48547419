//! WireGuard client configuration file generator

/// Filename of the generated client config
pub const CONFIG_FILENAME: &str = "wg24.conf";

/// Server-side WireGuard listen port
pub const ENDPOINT_PORT: u16 = 51820;

/// Route everything through the tunnel
pub const ALLOWED_IPS: &str = "0.0.0.0/0, ::0/0";

/// Parameters for generating a WireGuard client config file
#[derive(Debug, Clone)]
pub struct WgClientConfigParams {
    pub private_key: String,
    pub address: String,
    pub server_public_key: String,
    pub endpoint_host: String,
}

/// Generate a WireGuard client configuration string (.conf format)
///
/// The output has no trailing newline after the `Endpoint` line.
pub fn generate_config(params: &WgClientConfigParams) -> String {
    format!(
        "[Interface]\n\
         PrivateKey = {}\n\
         Address = {}\n\
         \n\
         [Peer]\n\
         PublicKey = {}\n\
         AllowedIPs = {}\n\
         Endpoint = {}:{}",
        params.private_key,
        params.address,
        params.server_public_key,
        ALLOWED_IPS,
        params.endpoint_host,
        ENDPOINT_PORT,
    )
}
