//! `[build]` section configuration.
//!
//! Contains paths and output settings of the build pipeline.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"        # Output directory
/// assets = "assets"        # Images and other static files
/// minify = true            # Minify HTML
/// runtime = "pkg"          # wasm-pack output of the browser runtime
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root", skip_serializing_if = "Option::is_none")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Output directory for generated files.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static assets directory, copied verbatim into the output.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Minify the generated HTML.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Remove the output directory before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Directory containing the browser runtime bundle (`folio.js` and
    /// `folio_bg.wasm`). Without it the page ships static: everything
    /// visible, no reveal animation.
    #[serde(default = "defaults::build::runtime", skip_serializing_if = "Option::is_none")]
    #[educe(Default = defaults::build::runtime())]
    pub runtime: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.assets, PathBuf::from("assets"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert_eq!(config.build.runtime, None);
    }

    #[test]
    fn test_build_config_full() {
        let config = r#"
            [build]
            output = "dist"
            assets = "static"
            minify = false
            clean = true
            runtime = "pkg"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.assets, PathBuf::from("static"));
        assert!(!config.build.minify);
        assert!(config.build.clean);
        assert_eq!(config.build.runtime, Some(PathBuf::from("pkg")));
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str("[build]\ncontent = \"posts\"");
        assert!(result.is_err());
    }
}
