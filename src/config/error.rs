//! Errors raised while loading or checking `folio.toml`.

use super::content::SocialKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed folio.toml")]
    Toml(#[from] toml::de::Error),

    #[error("[reveal] threshold must be between 0 and 1, got {0}")]
    ThresholdOutOfRange(f64),

    #[error("[contact] email `{0}` is not a mail address")]
    InvalidEmail(String),

    #[error("[[socials]] {} link has an empty href", .0.label())]
    EmptySocialHref(SocialKind),

    #[error("[hero] headline needs at least one line")]
    EmptyHeadline,
}
