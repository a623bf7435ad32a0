//! `[base]` section configuration.
//!
//! Contains the page metadata and the identity shown in the nav bar and
//! footer.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml - page metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Jane.Dev"
/// description = "Portfolio of Jane Doe"
/// author = "Jane Doe"
/// brand = "Jane.Dev"
/// initials = "JD"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Page title displayed in the browser tab.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Description for SEO meta tags.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,

    /// Full name, used in the hero greeting and image alt texts.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Wordmark next to the logo in the nav bar.
    #[serde(default = "defaults::base::brand")]
    #[educe(Default = defaults::base::brand())]
    pub brand: String,

    /// Logo text (one or two letters).
    #[serde(default = "defaults::base::initials")]
    #[educe(Default = defaults::base::initials())]
    pub initials: String,

    /// BCP 47 language code (e.g., "en", "en-US").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Copyright notice for the footer, without the © sign. `{year}` is
    /// replaced by the year of the build.
    #[serde(default = "defaults::base::copyright")]
    #[educe(Default = defaults::base::copyright())]
    pub copyright: String,
}
