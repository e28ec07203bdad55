//! Node configuration domain model

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};
use super::Asset;

/// Connection details for a bring-your-own full node
///
/// At most one per asset; replaced wholesale by the set-node operation.
/// No connection is ever opened by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub asset: Asset,
    /// Bare `host` or `host:port`, no scheme
    pub endpoint: String,
    pub tls: bool,
}

impl NodeConfig {
    /// Validate and build a node configuration from a raw endpoint string
    ///
    /// The endpoint is trimmed and must be non-empty. When it contains a
    /// colon, the part before the first colon must be non-empty and the part
    /// after it must be all ASCII digits.
    pub fn parse(asset: Asset, endpoint: &str, tls: bool) -> Result<Self> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(Error::validation(
                "Node endpoint is required for production use.",
            ));
        }

        if let Some((host, port)) = endpoint.split_once(':') {
            let port_ok = !port.is_empty() && port.chars().all(|c| c.is_ascii_digit());
            if host.is_empty() || !port_ok {
                return Err(Error::validation(
                    "Node endpoint must use host:port form without a scheme.",
                ));
            }
        }

        Ok(Self {
            asset,
            endpoint: endpoint.to_string(),
            tls,
        })
    }

    /// Endpoint with the scheme implied by the TLS flag, for display
    pub fn display_label(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!("{}://{}", scheme, self.endpoint)
    }
}
