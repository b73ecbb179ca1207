//! The font cache: validity check, stale-file cleanup and the fetch sequence.

use log::debug;

use crate::{
    config::{FONT_FILE_PREFIX, FontOptions, FontSettings},
    error::{Error, Result},
    extract::font_url,
    fetch::Fetcher,
    fingerprint::IconSet,
    hook::BuildHook,
    io::{ensure_dir, glob_prefixed, remove, write_text},
    naming::{CacheEntry, stylesheet_url},
    report::{Event, LogReporter, Reporter},
    stylesheet::local_stylesheet,
};

/// Result of a successful [`FontCache::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both files were already present.
    CacheHit,
    /// The font was downloaded and the stylesheet written.
    Generated { bytes: u64 },
}

/// One configured Material Symbols variant and its on-disk cache entry.
///
/// File names and the stylesheet URL are resolved once, at construction.
#[derive(Debug)]
pub struct FontCache<R = LogReporter> {
    settings: FontSettings,
    icons: IconSet,
    fingerprint: String,
    entry: CacheEntry,
    css_url: String,
    fetcher: Fetcher,
    reporter: R,
}

impl FontCache {
    pub fn new(options: FontOptions) -> Result<Self> {
        let FontOptions { settings, icons, output_dir, endpoint, timeout } = options;
        let icons = IconSet::new(icons);
        let fingerprint = icons.fingerprint();
        let entry = CacheEntry::new(output_dir, &settings, &fingerprint);
        let css_url = stylesheet_url(&endpoint, &settings, &icons);
        Ok(Self {
            settings,
            icons,
            fingerprint,
            entry,
            css_url,
            fetcher: Fetcher::new(timeout)?,
            reporter: LogReporter,
        })
    }
}

impl<R: Reporter> FontCache<R> {
    /// Replace the reporter that receives diagnostics.
    pub fn with_reporter<R2: Reporter>(self, reporter: R2) -> FontCache<R2> {
        FontCache {
            settings: self.settings,
            icons: self.icons,
            fingerprint: self.fingerprint,
            entry: self.entry,
            css_url: self.css_url,
            fetcher: self.fetcher,
            reporter,
        }
    }

    pub fn settings(&self) -> &FontSettings {
        &self.settings
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn entry(&self) -> &CacheEntry {
        &self.entry
    }

    pub fn css_url(&self) -> &str {
        &self.css_url
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn is_cached(&self) -> bool {
        self.entry.is_valid()
    }

    /// Make sure the cache entry exists, fetching it if either file is missing.
    pub fn run(&self) -> Result<Outcome> {
        let result = if self.is_cached() {
            self.reporter.report(&Event::CacheHit { font_file_name: self.entry.font_file_name() });
            Ok(Outcome::CacheHit)
        } else {
            self.refresh().map(|bytes| Outcome::Generated { bytes })
        };
        if let Err(error) = &result {
            self.reporter.report(&Event::Failed { error });
        }
        result
    }

    /// Delete font files left behind by other configurations.
    pub fn purge_stale(&self) -> Result<usize> {
        let mut removed = 0;
        for path in glob_prefixed(self.entry.dir(), FONT_FILE_PREFIX)? {
            let stale = path
                .file_name()
                .is_some_and(|name| self.entry.is_stale(&name.to_string_lossy()));
            if stale {
                remove(&path)?;
                self.reporter.report(&Event::RemovedStale { path: &path });
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn refresh(&self) -> Result<u64> {
        let entry = &self.entry;
        ensure_dir(entry.dir())?;
        let removed = self.purge_stale()?;
        debug!("Removed {removed} stale font files from {}", entry.dir().display());

        let css = self.fetcher.fetch_stylesheet(&self.css_url)?;
        self.reporter.report(&Event::StylesheetFetched { url: &self.css_url });

        let url = font_url(&css).ok_or(Error::Extraction)?;
        let bytes = self.fetcher.download_font(&url, entry.font_path())?;
        self.reporter.report(&Event::FontDownloaded { url: &url, bytes });

        let local = local_stylesheet(&self.settings, entry.font_file_name());
        write_text(entry.css_path(), &local)?;
        self.reporter.report(&Event::Generated { font_file_name: entry.font_file_name() });
        Ok(bytes)
    }
}

impl<R: Reporter> BuildHook for FontCache<R> {
    fn name(&self) -> &str {
        "material-symbols"
    }

    fn before_run(&self) -> Result<()> {
        self.run().map(|_| ())
    }
}
