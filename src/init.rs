//! Project initialization.
//!
//! Creates a portfolio project: `folio.toml` with every default written
//! out, an empty assets directory and ignore files for the build output.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Create a new portfolio project at the configured root.
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    if !is_dir_empty(root)? {
        if has_name {
            bail!("Directory `{}` is not empty.", root.display());
        }
        bail!("Current directory is not empty. Use `folio init <NAME>` to create in a subdirectory.");
    }

    fs::create_dir_all(root).with_context(|| format!("Failed to create {}", root.display()))?;
    fs::create_dir_all(&config.build.assets)
        .with_context(|| format!("Failed to create {}", config.build.assets.display()))?;
    init_default_config(&config.config_path)?;

    let output = config.build.output.strip_prefix(root).unwrap_or(&config.build.output);
    let output = format!("/{}/", output.display());
    init_ignored_files(root, &[output.as_str()])?;

    log!("init"; "created {}", root.display());
    Ok(())
}

/// Check if a directory is missing or completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write the default configuration file
fn init_default_config(path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Initialize .gitignore and .ignore files with the given patterns
fn init_ignored_files(root: &Path, patterns: &[&str]) -> Result<()> {
    let mut content = patterns.join("\n");
    content.push('\n');

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_at(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.config_path = root.join("folio.toml");
        config.build.output = root.join("public");
        config.build.assets = root.join("assets");
        config
    }

    #[test]
    fn test_new_site_layout() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("me");
        let config = config_at(&root);

        new_site(&config, true).unwrap();

        assert!(root.join("assets").is_dir());
        assert!(root.join("folio.toml").is_file());
        assert_eq!(fs::read_to_string(root.join(".gitignore")).unwrap(), "/public/\n");
        assert!(root.join(".ignore").is_file());
    }

    #[test]
    fn test_default_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let config = config_at(dir.path());

        new_site(&config, false).unwrap();

        let loaded = SiteConfig::from_path(&config.config_path).unwrap();
        let default = SiteConfig::default();
        assert_eq!(loaded.base.title, default.base.title);
        assert_eq!(loaded.stack.items, default.stack.items);
        assert_eq!(loaded.projects.items, default.projects.items);
        assert_eq!(loaded.socials, default.socials);
        assert_eq!(loaded.reveal.threshold, default.reveal.threshold);
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_new_site_refuses_non_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "keep me").unwrap();
        let config = config_at(dir.path());

        let err = new_site(&config, false).unwrap_err();
        assert!(err.to_string().contains("not empty"));
        assert!(new_site(&config, true).is_err());
        assert!(!dir.path().join("folio.toml").exists());
    }

    #[test]
    fn test_is_dir_empty() {
        let dir = TempDir::new().unwrap();
        assert!(is_dir_empty(dir.path()).unwrap());
        assert!(is_dir_empty(&dir.path().join("missing")).unwrap());

        fs::create_dir(dir.path().join("sub")).unwrap();
        assert!(!is_dir_empty(dir.path()).unwrap());
    }
}
