//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()   ──► clean / create output directory
//!     │
//!     ├── render_page()      ──► index.html (+ minify)
//!     │
//!     ├── folio.css
//!     │
//!     ├── copy_dir(assets)   ──► output/
//!     │
//!     └── copy_dir(runtime)  ──► output/runtime/  (optional)
//! ```
//!
//! A configured but missing runtime bundle is not an error: the page is
//! written without the loader script and everything stays visible.

use crate::{
    config::SiteConfig,
    log,
    page::{RUNTIME_DIR, RUNTIME_ENTRY, STYLESHEET, STYLESHEET_NAME, render_page},
    utils::minify::minify,
};
use anyhow::{Context, Result};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    /// Files written, including copied assets and runtime files.
    pub files: usize,
    /// Revealable elements on the page.
    pub reveals: usize,
    /// Whether the runtime bundle was shipped.
    pub runtime: bool,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files, {} revealable elements -> {}",
            self.files,
            self.reveals,
            self.output.display()
        )?;
        if !self.runtime {
            write!(f, " (static, no runtime)")?;
        }
        Ok(())
    }
}

/// Build the portfolio into `[build] output`.
///
/// If `config.build.clean` is true, clears the output directory first.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let runtime = locate_runtime(config);

    let page = render_page(config, runtime.is_some())?;
    let html = minify(&page.html, config);
    write_file(&output.join("index.html"), &html)?;
    write_file(&output.join(STYLESHEET_NAME), STYLESHEET.as_bytes())?;
    let mut files = 2;

    files += copy_dir(&config.build.assets, output, output)
        .with_context(|| format!("Failed to copy assets from {}", config.build.assets.display()))?;

    if let Some(runtime) = runtime {
        files += copy_dir(runtime, &output.join(RUNTIME_DIR), output)
            .with_context(|| format!("Failed to copy runtime from {}", runtime.display()))?;
    }

    Ok(BuildReport {
        output: output.clone(),
        files,
        reveals: page.reveal_ids.len(),
        runtime: runtime.is_some(),
    })
}

/// Ensure the output directory exists, removing old content when `clean`.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Runtime bundle directory, if configured and complete enough to load.
fn locate_runtime(config: &SiteConfig) -> Option<&Path> {
    let dir = config.runtime_dir()?;
    if dir.join(RUNTIME_ENTRY).is_file() {
        Some(dir)
    } else {
        log!(
            "warn";
            "runtime bundle not found at {}, page ships without reveal animation",
            dir.display()
        );
        None
    }
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Copy every file under `src` into `dst`, keeping relative paths.
///
/// Anything inside `output` is skipped so an assets directory that contains
/// the output directory never copies into itself. A missing `src` copies
/// nothing.
fn copy_dir(src: &Path, dst: &Path, output: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Ok(0);
    }

    let mut count = 0;
    let entries = WalkDir::new(src)
        .into_iter()
        .filter_entry(|e| !e.path().starts_with(output));

    for entry in entries {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(src)?;
        let dest = dst.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site(dir: &TempDir) -> SiteConfig {
        let root = dir.path();
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.build.output = root.join("public");
        config.build.assets = root.join("assets");
        config.build.minify = false;
        config
    }

    fn index(config: &SiteConfig) -> String {
        fs::read_to_string(config.build.output.join("index.html")).unwrap()
    }

    #[test]
    fn test_build_writes_page_and_stylesheet() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);

        let report = build_site(&config).unwrap();

        assert_eq!(report.files, 2);
        assert!(!report.runtime);
        assert_eq!(report.reveals, 13);
        assert!(index(&config).contains(r#"<section id="contact""#));
        assert!(config.build.output.join("folio.css").is_file());
        assert!(report.to_string().ends_with("(static, no runtime)"));
    }

    #[test]
    fn test_build_copies_assets() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        fs::create_dir_all(config.build.assets.join("img")).unwrap();
        fs::write(config.build.assets.join("me.jpg"), b"jpg").unwrap();
        fs::write(config.build.assets.join("img/cv.pdf"), b"pdf").unwrap();

        let report = build_site(&config).unwrap();

        assert_eq!(report.files, 4);
        assert_eq!(fs::read(config.build.output.join("me.jpg")).unwrap(), b"jpg");
        assert!(config.build.output.join("img/cv.pdf").is_file());
    }

    #[test]
    fn test_build_ships_runtime_when_present() {
        let dir = TempDir::new().unwrap();
        let mut config = site(&dir);
        let pkg = dir.path().join("pkg");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join(RUNTIME_ENTRY), b"export default function init() {}").unwrap();
        fs::write(pkg.join("folio_bg.wasm"), b"\0asm").unwrap();
        config.build.runtime = Some(pkg);

        let report = build_site(&config).unwrap();

        assert!(report.runtime);
        assert!(config.build.output.join("runtime/folio.js").is_file());
        assert!(config.build.output.join("runtime/folio_bg.wasm").is_file());
        assert!(index(&config).contains("./runtime/folio.js"));
    }

    #[test]
    fn test_build_missing_runtime_fails_open() {
        let dir = TempDir::new().unwrap();
        let mut config = site(&dir);
        config.build.runtime = Some(dir.path().join("pkg"));

        let report = build_site(&config).unwrap();

        assert!(!report.runtime);
        assert!(!index(&config).contains("<script"));
    }

    #[test]
    fn test_build_clean_removes_stale_files() {
        let dir = TempDir::new().unwrap();
        let mut config = site(&dir);
        fs::create_dir_all(&config.build.output).unwrap();
        fs::write(config.build.output.join("stale.html"), b"old").unwrap();

        build_site(&config).unwrap();
        assert!(config.build.output.join("stale.html").exists());

        config.build.clean = true;
        build_site(&config).unwrap();
        assert!(!config.build.output.join("stale.html").exists());
        assert!(config.build.output.join("index.html").is_file());
    }

    #[test]
    fn test_assets_containing_output_not_recursive() {
        let dir = TempDir::new().unwrap();
        let mut config = site(&dir);
        config.build.assets = dir.path().to_path_buf();
        fs::write(dir.path().join("photo.jpg"), b"jpg").unwrap();

        build_site(&config).unwrap();
        build_site(&config).unwrap();

        assert!(config.build.output.join("photo.jpg").is_file());
        assert!(!config.build.output.join("public").exists());
    }

    #[test]
    fn test_build_minified() {
        let dir = TempDir::new().unwrap();
        let mut config = site(&dir);
        config.build.minify = true;

        build_site(&config).unwrap();

        let html = index(&config);
        assert!(!html.contains("\n  "));
        assert!(html.contains("data-reveal"));
    }
}
