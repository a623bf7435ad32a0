//! File system watcher for live rebuild while serving.
//!
//! Monitors the config file, the assets directory and the runtime bundle,
//! and rebuilds the site when any of them change. A config change is
//! reloaded into the global handle first, so the rebuild and the server
//! both see the new values. When the reload moves `[build] assets` or
//! `[build] runtime`, the watches follow.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Event Loop                              │
//! │                                                              │
//! │  ┌──────────┐    ┌──────────┐    ┌────────────────────────┐  │
//! │  │ notify   │───▶│ Debouncer│───▶│    handle_changes()    │  │
//! │  │ events   │    │ (300ms)  │    │                        │  │
//! │  └──────────┘    └──────────┘    │  config → reload_config│  │
//! │                                  │  any    → build_site   │  │
//! │                                  └────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use crate::{
    build::build_site,
    config::{SiteConfig, cfg, reload_config},
    log,
};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{self, RecvTimeoutError},
    time::{Duration, Instant},
};

// =============================================================================
// Constants
// =============================================================================

const DEBOUNCE_MS: u64 = 300;
const REBUILD_COOLDOWN_MS: u64 = 800;

// =============================================================================
// Path Utilities
// =============================================================================

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// What a changed path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Change {
    Config,
    Runtime,
    Asset,
}

impl Change {
    const fn name(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Runtime => "runtime",
            Self::Asset => "assets",
        }
    }
}

/// Classify a changed path. Paths inside the output directory are ignored
/// so a rebuild never triggers another one.
fn classify(path: &Path, config: &SiteConfig) -> Option<Change> {
    let build = &config.build;

    if path.starts_with(&build.output) {
        return None;
    }
    if path == config.config_path.as_path() {
        return Some(Change::Config);
    }
    if let Some(runtime) = config.runtime_dir()
        && path.starts_with(runtime)
    {
        return Some(Change::Runtime);
    }
    path.starts_with(&build.assets).then_some(Change::Asset)
}

// =============================================================================
// Debounce State
// =============================================================================

/// Batches rapid file events with debouncing and rebuild cooldown.
struct Debouncer {
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
    last_rebuild: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: FxHashSet::default(),
            last_event: None,
            last_rebuild: None,
        }
    }

    fn in_cooldown(&self) -> bool {
        self.last_rebuild
            .is_some_and(|t| t.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS))
    }

    fn add(&mut self, event: Event) {
        for path in event.paths {
            if !is_temp_file(&path) {
                self.pending.insert(path);
            }
        }
        self.last_event = Some(Instant::now());
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn mark_rebuild(&mut self) {
        self.last_rebuild = Some(Instant::now());
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(60)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

// =============================================================================
// Event Handler
// =============================================================================

/// Distinct change kinds in a batch, in a stable order.
fn collect_changes(paths: &[PathBuf], config: &SiteConfig) -> Vec<Change> {
    let mut changes: Vec<_> = paths.iter().filter_map(|p| classify(p, config)).collect();
    changes.sort_unstable();
    changes.dedup();
    changes
}

/// Process a debounced batch. Returns true if a rebuild succeeded.
fn handle_changes(paths: &[PathBuf], watcher: &mut impl Watcher) -> bool {
    let changes = collect_changes(paths, &cfg());
    if changes.is_empty() {
        return false;
    }

    if changes.contains(&Change::Config) {
        let before = watch_targets(&cfg());
        match reload_config() {
            // Saved without edits; rebuild only if something else changed too
            Ok(false) if changes.len() == 1 => return false,
            Ok(true) => retarget_watches(watcher, &before, &watch_targets(&cfg())),
            Ok(false) => {}
            Err(e) => {
                log!("watch"; "config reload failed, keeping previous config");
                log!("error"; "{e:#}");
                return false;
            }
        }
    }

    let reason = changes.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ");
    log!("watch"; "{reason} changed, rebuilding...");

    match build_site(&cfg()) {
        Ok(report) => {
            log!("build"; "{report}");
            true
        }
        Err(e) => {
            log!("watch"; "build failed");
            log!("error"; "{e:#}");
            false
        }
    }
}

// =============================================================================
// Watcher Setup
// =============================================================================

/// Format absolute path as relative to root, with trailing slash for directories.
fn format_rel(path: &Path, root: &Path, is_dir: bool) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let suffix = if is_dir { "/" } else { "" };
    format!("{}{}", rel.display(), suffix)
}

/// Watch targets: `(path, recursive)`.
///
/// The config file is watched through its parent directory, because editors
/// that save by rename would otherwise detach a watch on the file itself.
fn watch_targets(config: &SiteConfig) -> Vec<(PathBuf, bool)> {
    let mut targets = Vec::new();
    if let Some(parent) = config.config_path.parent() {
        targets.push((parent.to_path_buf(), false));
    }
    targets.push((config.build.assets.clone(), true));
    if let Some(runtime) = config.runtime_dir() {
        targets.push((runtime.to_path_buf(), true));
    }
    targets
}

/// Targets to drop and to add when moving from `before` to `after`.
fn diff_targets<'a>(
    before: &'a [(PathBuf, bool)],
    after: &'a [(PathBuf, bool)],
) -> (Vec<&'a PathBuf>, Vec<&'a (PathBuf, bool)>) {
    let removed = before
        .iter()
        .filter(|target| !after.contains(target))
        .map(|(path, _)| path)
        .collect();
    let added = after.iter().filter(|target| !before.contains(target)).collect();
    (removed, added)
}

fn watch_target(watcher: &mut impl Watcher, path: &Path, recursive: bool) -> Result<()> {
    let mode = if recursive {
        RecursiveMode::Recursive
    } else {
        RecursiveMode::NonRecursive
    };
    watcher
        .watch(path, mode)
        .with_context(|| format!("Failed to watch {}", path.display()))
}

/// Move watches after a config reload changed the watched directories.
fn retarget_watches(watcher: &mut impl Watcher, before: &[(PathBuf, bool)], after: &[(PathBuf, bool)]) {
    let (removed, added) = diff_targets(before, after);

    for path in removed {
        // Never watched if it did not exist at the time
        let _ = watcher.unwatch(path);
    }
    for (path, recursive) in added {
        if !path.exists() {
            continue;
        }
        match watch_target(watcher, path, *recursive) {
            Ok(()) => log!("watch"; "now watching {}", path.display()),
            Err(e) => log!("watch"; "{e:#}"),
        }
    }
}

fn setup_watchers(watcher: &mut impl Watcher, config: &SiteConfig) -> Result<()> {
    let root = config.get_root();
    let mut watched = Vec::new();

    for (path, recursive) in watch_targets(config) {
        if !path.exists() {
            continue;
        }
        watch_target(watcher, &path, recursive)?;
        if recursive {
            watched.push(format_rel(&path, root, true));
        }
    }

    watched.insert(0, format_rel(&config.config_path, root, false));
    log!("watch"; "{}", watched.join(", "));
    Ok(())
}

const fn is_relevant(event: &Event) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
}

// =============================================================================
// Public API
// =============================================================================

/// Start blocking file watcher with debouncing and live rebuild.
pub fn watch_for_changes_blocking() -> Result<()> {
    let config = cfg();
    if !config.serve.watch {
        return Ok(());
    }

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    setup_watchers(&mut watcher, &config)?;

    let mut debouncer = Debouncer::new();

    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) && !debouncer.in_cooldown() => {
                debouncer.add(event);
            }
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(RecvTimeoutError::Timeout) if debouncer.ready() => {
                if handle_changes(&debouncer.take(), &mut watcher) {
                    debouncer.mark_rebuild();
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
            // Irrelevant events, timeout without pending changes
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};

    fn config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/site"));
        config.config_path = PathBuf::from("/site/folio.toml");
        config.build.output = PathBuf::from("/site/public");
        config.build.assets = PathBuf::from("/site/assets");
        config.build.runtime = Some(PathBuf::from("/site/pkg"));
        config
    }

    fn event(kind: EventKind, paths: &[&str]) -> Event {
        paths
            .iter()
            .fold(Event::new(kind), |e, p| e.add_path(PathBuf::from(p)))
    }

    #[test]
    fn test_is_temp_file() {
        assert!(is_temp_file(Path::new("/site/.folio.toml.swp")));
        assert!(is_temp_file(Path::new("/site/folio.toml~")));
        assert!(is_temp_file(Path::new("/site/assets/me.jpg.tmp")));
        assert!(!is_temp_file(Path::new("/site/assets/me.jpg")));
    }

    #[test]
    fn test_classify() {
        let config = config();

        assert_eq!(classify(Path::new("/site/folio.toml"), &config), Some(Change::Config));
        assert_eq!(classify(Path::new("/site/assets/me.jpg"), &config), Some(Change::Asset));
        assert_eq!(classify(Path::new("/site/pkg/folio_bg.wasm"), &config), Some(Change::Runtime));
        assert_eq!(classify(Path::new("/site/public/index.html"), &config), None);
        assert_eq!(classify(Path::new("/site/README.md"), &config), None);
    }

    #[test]
    fn test_classify_output_inside_assets() {
        let mut config = config();
        config.build.assets = PathBuf::from("/site");

        assert_eq!(classify(Path::new("/site/public/me.jpg"), &config), None);
        assert_eq!(classify(Path::new("/site/me.jpg"), &config), Some(Change::Asset));
    }

    #[test]
    fn test_collect_changes_dedup_sorted() {
        let config = config();
        let paths = [
            PathBuf::from("/site/assets/a.jpg"),
            PathBuf::from("/site/assets/b.jpg"),
            PathBuf::from("/site/folio.toml"),
            PathBuf::from("/site/public/index.html"),
        ];

        assert_eq!(collect_changes(&paths, &config), vec![Change::Config, Change::Asset]);
    }

    #[test]
    fn test_watch_targets() {
        let targets = watch_targets(&config());

        assert_eq!(
            targets,
            vec![
                (PathBuf::from("/site"), false),
                (PathBuf::from("/site/assets"), true),
                (PathBuf::from("/site/pkg"), true),
            ]
        );
    }

    #[test]
    fn test_diff_targets_after_assets_move() {
        let before = watch_targets(&config());
        let mut moved = config();
        moved.build.assets = PathBuf::from("/site/static");
        moved.build.runtime = None;
        let after = watch_targets(&moved);

        let (removed, added) = diff_targets(&before, &after);

        assert_eq!(removed, vec![&PathBuf::from("/site/assets"), &PathBuf::from("/site/pkg")]);
        assert_eq!(added, vec![&(PathBuf::from("/site/static"), true)]);
    }

    #[test]
    fn test_diff_targets_unchanged() {
        let targets = watch_targets(&config());
        let (removed, added) = diff_targets(&targets, &targets);
        assert!(removed.is_empty());
        assert!(added.is_empty());
    }

    #[test]
    fn test_debouncer_batches_and_filters() {
        let mut debouncer = Debouncer::new();
        assert!(!debouncer.ready());
        assert_eq!(debouncer.timeout(), Duration::from_secs(60));

        debouncer.add(event(
            EventKind::Create(CreateKind::File),
            &["/site/assets/a.jpg", "/site/assets/.a.jpg.swp"],
        ));
        debouncer.add(event(EventKind::Modify(ModifyKind::Any), &["/site/assets/a.jpg"]));

        // Not ready until the debounce window has passed
        assert!(!debouncer.ready());
        assert_eq!(debouncer.timeout(), Duration::from_millis(DEBOUNCE_MS));

        debouncer.last_event = Some(Instant::now() - Duration::from_millis(DEBOUNCE_MS));
        assert!(debouncer.ready());
        assert_eq!(debouncer.take(), vec![PathBuf::from("/site/assets/a.jpg")]);
        assert!(!debouncer.ready());
    }

    #[test]
    fn test_debouncer_cooldown() {
        let mut debouncer = Debouncer::new();
        assert!(!debouncer.in_cooldown());
        debouncer.mark_rebuild();
        assert!(debouncer.in_cooldown());
    }

    #[test]
    fn test_is_relevant() {
        assert!(is_relevant(&event(EventKind::Create(CreateKind::File), &[])));
        assert!(is_relevant(&event(EventKind::Modify(ModifyKind::Any), &[])));
        assert!(!is_relevant(&event(EventKind::Access(notify::event::AccessKind::Any), &[])));
    }
}
