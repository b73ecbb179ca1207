//! Cache file names and the remote stylesheet URL.

use std::path::{Path, PathBuf};

use crate::{
    config::{CSS_FILE_NAME, FONT_EXTENSION, FONT_FAMILY, FONT_FILE_PREFIX, FontSettings},
    fingerprint::IconSet,
};

/// File name of the cached font binary for a settings/fingerprint pair.
pub fn font_file_name(settings: &FontSettings, fingerprint: &str) -> String {
    let FontSettings { fill, weight, grade, optical_size } = settings;
    format!("{FONT_FILE_PREFIX}f{fill}w{weight}g{grade}o{optical_size}-{fingerprint}.{FONT_EXTENSION}")
}

/// Stylesheet request URL. Axes are always sent as `opsz,wght,FILL,GRAD`.
pub fn stylesheet_url(endpoint: &str, settings: &FontSettings, icons: &IconSet) -> String {
    let FontSettings { fill, weight, grade, optical_size } = settings;
    let family = FONT_FAMILY.replace(' ', "+");
    let mut url = format!(
        "{endpoint}?family={family}:opsz,wght,FILL,GRAD@{optical_size},{weight},{fill},{grade}&display=swap"
    );
    if !icons.is_empty() {
        url.push_str("&text=");
        url.push_str(&icons.join("+"));
    }
    url
}

/// The (font, stylesheet) pair that makes up one cached variant.
///
/// Both files must exist for the entry to be valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    dir: PathBuf,
    font_file_name: String,
    font_path: PathBuf,
    css_path: PathBuf,
}

impl CacheEntry {
    pub fn new(dir: impl Into<PathBuf>, settings: &FontSettings, fingerprint: &str) -> Self {
        let dir = dir.into();
        let font_file_name = font_file_name(settings, fingerprint);
        let font_path = dir.join(&font_file_name);
        let css_path = dir.join(CSS_FILE_NAME);
        Self { dir, font_file_name, font_path, css_path }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn font_file_name(&self) -> &str {
        &self.font_file_name
    }

    pub fn font_path(&self) -> &Path {
        &self.font_path
    }

    pub fn css_path(&self) -> &Path {
        &self.css_path
    }

    pub fn is_valid(&self) -> bool {
        self.font_path.exists() && self.css_path.exists()
    }

    /// Whether `file_name` is a cached font from a different configuration.
    pub fn is_stale(&self, file_name: &str) -> bool {
        file_name.starts_with(FONT_FILE_PREFIX) && file_name != self.font_file_name
    }
}
