//! Portfolio configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section                      | Purpose                                   |
//! |------------------------------|-------------------------------------------|
//! | `[base]`                     | Page metadata, name, brand, copyright     |
//! | `[hero]` `[about]`           | First screen and biography                |
//! | `[stack]` `[projects]`       | Technology grid and project cards         |
//! | `[contact]` `[[socials]]`    | Mail action and profile links             |
//! | `[reveal]`                   | Browser runtime tuning                    |
//! | `[build]`                    | Paths, minification, runtime bundle       |
//! | `[serve]`                    | Preview server (port, interface, watch)   |
//!
//! Every field has a default, so an empty file renders the example
//! portfolio.
//!
//! # Example
//!
//! ```toml
//! [base]
//! author = "Jane Doe"
//! brand = "Jane.Dev"
//! initials = "JD"
//!
//! [contact]
//! email = "jane@example.com"
//!
//! [[socials]]
//! kind = "github"
//! href = "https://github.com/jane"
//!
//! [serve]
//! port = 5277
//! ```

mod base;
mod build;
pub mod content;
pub mod defaults;
mod error;
mod handle;
mod reveal;
mod serve;

pub use base::BaseConfig;
pub use build::BuildConfig;
pub use content::{AboutConfig, ContactConfig, HeroConfig, ProjectsConfig, SocialLink, StackConfig};
pub use error::ConfigError;
pub use handle::{cfg, init_config, reload_config};
pub use reveal::RevealConfig;
pub use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default)]
    pub hero: HeroConfig,

    #[serde(default)]
    pub about: AboutConfig,

    #[serde(default)]
    pub stack: StackConfig,

    #[serde(default)]
    pub projects: ProjectsConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    /// External profile links in the footer.
    #[serde(default = "defaults::socials::links")]
    #[educe(Default = defaults::socials::links())]
    pub socials: Vec<SocialLink>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config file selected by the CLI (defaults if it is absent)
    /// and apply CLI overrides.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let root = Self::cli_root(cli);
        let config_path = root.join(&cli.config);

        let mut config = if config_path.is_file() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Root directory requested on the command line, including the
    /// `init <name>` subdirectory.
    fn cli_root(cli: &Cli) -> PathBuf {
        let base = cli
            .root
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned()))
            .unwrap_or_else(|| PathBuf::from("./"));
        match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Path of the runtime bundle, if configured.
    pub fn runtime_dir(&self) -> Option<&Path> {
        self.build.runtime.as_deref()
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = Self::cli_root(cli);
        self.update_path_with_root(&root, cli);

        if let Some(args) = cli.build_args() {
            if args.clean {
                self.build.clean = true;
            }
            Self::update_option(&mut self.build.minify, args.minify.as_ref());
            if let Some(runtime) = &args.runtime {
                self.build.runtime = Some(Self::normalize_path(&self.get_root().join(runtime)));
            }
        }

        if let Commands::Serve {
            interface,
            port,
            watch,
            ..
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
            Self::update_option(&mut self.serve.watch, watch.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, cli: &Cli) {
        Self::update_option(&mut self.build.assets, cli.assets.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
        if let Some(runtime) = self.build.runtime.take() {
            self.build.runtime = Some(Self::normalize_path(&root.join(runtime)));
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Check values that parse but cannot render a working page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }

        let email = &self.contact.email;
        if email.is_empty() || email.chars().any(char::is_whitespace) || !email.contains('@') {
            return Err(ConfigError::InvalidEmail(email.clone()));
        }

        if let Some(link) = self.socials.iter().find(|link| link.href.trim().is_empty()) {
            return Err(ConfigError::EmptySocialHref(link.kind));
        }

        if self.hero.headline.is_empty() {
            return Err(ConfigError::EmptyHeadline);
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
