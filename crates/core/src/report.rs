//! Diagnostics emitted while refreshing the cache.

use std::path::Path;

use log::{debug, error, info};

use crate::error::Error;

/// Something worth telling the user about.
#[derive(Debug)]
pub enum Event<'a> {
    /// Both cached files exist; nothing was fetched.
    CacheHit { font_file_name: &'a str },
    /// A font file left over from another configuration was deleted.
    RemovedStale { path: &'a Path },
    StylesheetFetched { url: &'a str },
    FontDownloaded { url: &'a str, bytes: u64 },
    /// Font and stylesheet were written.
    Generated { font_file_name: &'a str },
    Failed { error: &'a Error },
}

/// Receives [`Event`]s from a [`FontCache`](crate::FontCache).
pub trait Reporter {
    fn report(&self, event: &Event<'_>);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, event: &Event<'_>) {
        match event {
            Event::CacheHit { font_file_name } => {
                info!("Font files already exist: {font_file_name}")
            }
            Event::RemovedStale { path } => info!("Removed stale font {}", path.display()),
            Event::StylesheetFetched { url } => debug!("Fetched stylesheet {url}"),
            Event::FontDownloaded { url, bytes } => {
                let size_kb = *bytes as f64 / 1024.0;
                info!("Downloaded {url} ({size_kb:.1} KB)")
            }
            Event::Generated { font_file_name } => {
                info!("Generated font files: {font_file_name}")
            }
            Event::Failed { error } => error!("Error refreshing font cache: {error}"),
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, event: &Event<'_>) {
        (**self).report(event)
    }
}
