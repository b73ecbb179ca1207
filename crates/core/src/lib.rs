//! Fetch Material Symbols from Google Fonts and cache them for a build.
//!
//! A [`FontCache`] resolves its target files from the requested rendering
//! axes and icon set. Running it is a no-op when both the font and the
//! stylesheet are already on disk; otherwise it removes stale variants,
//! downloads the stylesheet and font, and writes a local stylesheet that
//! points at the cached font.
//!
//! ```no_run
//! use symfont_core::{FontCache, FontOptions, FontSettings};
//!
//! let options = FontOptions::new(".")
//!     .with_settings(FontSettings::default().with_weight(400))
//!     .with_icons(["home", "search"]);
//! FontCache::new(options)?.run()?;
//! # Ok::<(), symfont_core::Error>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod fingerprint;
pub mod hook;
pub mod io;
pub mod naming;
pub mod report;
pub mod stylesheet;

pub use cache::{FontCache, Outcome};
pub use config::{FontOptions, FontSettings};
pub use error::{Error, Result, Stage};
pub use fingerprint::IconSet;
pub use hook::{BuildHook, HookRunner};
pub use naming::CacheEntry;
pub use report::{Event, LogReporter, Reporter};
