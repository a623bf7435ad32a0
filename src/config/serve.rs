//! `[serve]`: where `folio serve` listens for the preview.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// Preview server settings.
///
/// ```toml
/// [serve]
/// interface = "0.0.0.0"  # preview from a phone on the same network
/// port = 5277
/// watch = true
/// ```
///
/// `interface` must be a literal address; host names such as `localhost`
/// are rejected when the file is parsed.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    #[serde(default = "defaults::serve::interface")]
    #[educe(Default = defaults::serve::interface())]
    pub interface: IpAddr,

    /// First port tried; the server walks upward when it is taken.
    #[serde(default = "defaults::serve::port")]
    #[educe(Default = defaults::serve::port())]
    pub port: u16,

    /// Reload the config and rebuild when sources change.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub watch: bool,
}

impl ServeConfig {
    /// Address of the first bind attempt.
    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.interface, self.port)
    }

    /// Whether the preview is reachable from other machines.
    pub fn is_exposed(&self) -> bool {
        !self.interface.is_loopback()
    }
}
