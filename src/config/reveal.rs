//! `[reveal]` section configuration.
//!
//! Tuning for the browser runtime. Values are written into the page as
//! `data-*` attributes on `<body>` and read back when the runtime mounts.

use super::defaults;
use crate::runtime::{ScrollBehavior, Settings};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[reveal]` section in folio.toml.
///
/// # Example
/// ```toml
/// [reveal]
/// threshold = 0.1     # fraction of an element that must be visible
/// scroll = "smooth"   # smooth | instant | auto
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RevealConfig {
    #[serde(default = "defaults::reveal::threshold")]
    #[educe(Default = defaults::reveal::threshold())]
    pub threshold: f64,

    #[serde(default = "defaults::reveal::scroll")]
    #[educe(Default = defaults::reveal::scroll())]
    pub scroll: ScrollBehavior,
}

impl RevealConfig {
    pub const fn settings(&self) -> Settings {
        Settings {
            threshold: self.threshold,
            scroll: self.scroll,
        }
    }
}
