//! Preview server with rebuild on change.
//!
//! Lightweight HTTP server on `tiny_http`:
//!
//! - Static file serving from the build output directory
//! - `index.html` resolution for directories
//! - File watching and auto-rebuild (via `watch` module)
//! - Graceful shutdown on Ctrl+C
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │   Main Thread   │     │  Watcher Thread  │
//! │  (HTTP Server)  │     │  (File Monitor)  │
//! └────────┬────────┘     └────────┬─────────┘
//!          │                       │
//!          ▼                       ▼
//!    Handle requests         Detect changes
//!    Serve files             Reload config, rebuild
//! └─────────────────────────────────────────────┘
//!                    │
//!                    ▼
//!            config.build.output
//!              (public/ dir)
//! ```

use crate::{
    config::{SiteConfig, cfg},
    log,
    watch::watch_for_changes_blocking,
};
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    io::Cursor,
    net::SocketAddr,
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

const NOT_FOUND: &str = "404 Not Found";

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the preview server with optional file watching.
///
/// 1. Binds to the configured interface and port (with auto-retry on port conflict)
/// 2. Sets up Ctrl+C handler for graceful shutdown
/// 3. Spawns file watcher thread (if enabled)
/// 4. Enters the main request handling loop
///
/// Blocks until Ctrl+C is received.
pub fn serve_site() -> Result<()> {
    let c = cfg();
    let (server, addr) = try_bind_port(c.serve.addr(), MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);
    if c.serve.is_exposed() {
        log!("serve"; "listening on {}, reachable from the network", addr.ip());
    }

    if c.serve.watch {
        std::thread::spawn(move || {
            if let Err(err) = watch_for_changes_blocking() {
                log!("watch"; "{err}");
            }
        });
    }

    for request in server.incoming_requests() {
        // Re-load config on each request to pick up hot-reloaded changes
        if let Err(e) = handle_request(request, &cfg()) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(base: SocketAddr, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let base_port = base.port();
    let mut last_err = None;

    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(base.ip(), port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_err = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_err.map(|e| e.to_string()).unwrap_or_default()
    ))
}

// ============================================================================
// Request Handling
// ============================================================================

/// Handle a single HTTP request: file, directory `index.html`, or 404.
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    match resolve_path(&config.build.output, request.url()) {
        Some(path) => serve_file(request, &path),
        None => serve_not_found(request),
    }
}

/// Map a request URL onto a file under `root`.
///
/// Percent-decodes the path, drops the query string, resolves directories
/// to their `index.html` and refuses anything that would leave `root`.
fn resolve_path(root: &Path, url: &str) -> Option<PathBuf> {
    // Decode URL-encoded characters (e.g., %20 → space)
    let url_path = urlencoding::decode(url).ok()?;

    // Strip query string (e.g., ?t=123456) and fragment
    let path = url_path.split(['?', '#']).next().unwrap_or_default();
    let rel = Path::new(path.trim_matches('/'));

    if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }

    let local = root.join(rel);
    if local.is_file() {
        return Some(local);
    }

    let index = local.join("index.html");
    index.is_file().then_some(index)
}

// ============================================================================
// Response Helpers
// ============================================================================

fn header(name: &str, value: &str) -> Result<Header> {
    Header::from_bytes(name, value).map_err(|()| anyhow!("invalid header `{name}: {value}`"))
}

/// Serve a file with appropriate content type.
fn serve_file(request: Request, path: &Path) -> Result<()> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let response = Response::from_data(content)
        .with_header(header("Content-Type", guess_content_type(path))?)
        .with_header(header("Cache-Control", "no-cache")?);

    request.respond(response)?;
    Ok(())
}

/// Serve 404 Not Found response.
fn serve_not_found(request: Request) -> Result<()> {
    let response = Response::new(
        StatusCode(404),
        vec![header("Content-Type", "text/plain; charset=utf-8")?],
        Cursor::new(NOT_FOUND),
        Some(NOT_FOUND.len()),
        None,
    );
    request.respond(response)?;
    Ok(())
}

// ============================================================================
// Content Type Detection
// ============================================================================

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        // Web content
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        // Required for streaming instantiation of the runtime
        Some("wasm") => "application/wasm",

        // Images
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",

        // Documents
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn output() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::create_dir_all(dir.path().join("runtime")).unwrap();
        fs::write(dir.path().join("runtime/folio.js"), "").unwrap();
        fs::write(dir.path().join("my photo.jpg"), "").unwrap();
        dir
    }

    #[test]
    fn test_resolve_root_index() {
        let dir = output();
        let root = dir.path();

        assert_eq!(resolve_path(root, "/"), Some(root.join("index.html")));
        assert_eq!(resolve_path(root, "/index.html"), Some(root.join("index.html")));
    }

    #[test]
    fn test_resolve_strips_query_and_decodes() {
        let dir = output();
        let root = dir.path();

        assert_eq!(
            resolve_path(root, "/runtime/folio.js?t=1"),
            Some(root.join("runtime/folio.js"))
        );
        assert_eq!(resolve_path(root, "/my%20photo.jpg"), Some(root.join("my photo.jpg")));
    }

    #[test]
    fn test_resolve_missing() {
        let dir = output();
        assert_eq!(resolve_path(dir.path(), "/nope.css"), None);
        // Directory without index.html
        assert_eq!(resolve_path(dir.path(), "/runtime/"), None);
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let dir = output();
        let root = dir.path().join("runtime");

        assert_eq!(resolve_path(&root, "/../index.html"), None);
        assert_eq!(resolve_path(&root, "/%2e%2e/index.html"), None);
    }

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(guess_content_type(Path::new("folio_bg.wasm")), "application/wasm");
        assert_eq!(guess_content_type(Path::new("folio.js")), "application/javascript; charset=utf-8");
        assert_eq!(guess_content_type(Path::new("me.JPG")), "application/octet-stream");
        assert_eq!(guess_content_type(Path::new("LICENSE")), "application/octet-stream");
    }
}
