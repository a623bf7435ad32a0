//! Utility modules.
//!
//! | Module   | Purpose                                   |
//! |----------|-------------------------------------------|
//! | `log`    | `log!` macro with colored module prefixes |
//! | `minify` | HTML minification                         |

pub mod log;
pub mod minify;
