//! Folio - a single-page portfolio generator.
//!
//! The crate has two halves:
//!
//! - [`runtime`]: the page behavior (scroll reveal, section navigation, the
//!   mobile menu) as plain state machines behind capability traits. It
//!   compiles for every target.
//! - the generator (native only): `folio.toml` → static `index.html`, plus a
//!   preview server and a file watcher.
//!
//! On `wasm32` the `web` module binds the runtime to the live document.

pub mod runtime;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub mod build;
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod init;
#[cfg(not(target_arch = "wasm32"))]
pub mod page;
#[cfg(not(target_arch = "wasm32"))]
pub mod serve;
#[cfg(not(target_arch = "wasm32"))]
pub mod utils;
#[cfg(not(target_arch = "wasm32"))]
pub mod watch;
