//! Configuration constants and options for Material Symbols font fetching.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Google Fonts CSS2 endpoint serving the Material Symbols stylesheet.
pub const CSS_ENDPOINT: &str = "https://fonts.googleapis.com/css2";

/// Font family requested from the stylesheet endpoint.
pub const FONT_FAMILY: &str = "Material Symbols Outlined";

/// Prefix shared by every cached font file. Files with this prefix that do not
/// match the current configuration are considered stale.
pub const FONT_FILE_PREFIX: &str = "material-symbols-";

/// Extension of the cached font binary.
pub const FONT_EXTENSION: &str = "woff2";

/// Name of the generated local stylesheet, shared by every variant.
pub const CSS_FILE_NAME: &str = "material-symbols.css";

/// Output directory used when none is given, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "src/assets/fonts";

/// Fingerprint used when no icons are requested.
pub const DEFAULT_FINGERPRINT: &str = "default";

/// Request timeout applied to both the stylesheet and the font download.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Headers sent with the stylesheet request. The service picks the font
/// formats it advertises from the client identification.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36",
    ),
    ("accept", "text/css,*/*;q=0.1"),
    ("accept-encoding", "gzip, deflate, br"),
    ("sec-ch-ua", "\"Chromium\";v=\"122\""),
    ("sec-ch-ua-platform", "\"Windows\""),
];

/// Rendering axes of the variable font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontSettings {
    pub fill: i32,
    pub weight: i32,
    pub grade: i32,
    pub optical_size: i32,
}

impl FontSettings {
    pub const DEFAULT: Self = Self { fill: 0, weight: 300, grade: 0, optical_size: 20 };

    pub fn with_fill(mut self, fill: i32) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_grade(mut self, grade: i32) -> Self {
        self.grade = grade;
        self
    }

    pub fn with_optical_size(mut self, optical_size: i32) -> Self {
        self.optical_size = optical_size;
        self
    }
}

impl Default for FontSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything needed to construct a [`FontCache`](crate::FontCache).
///
/// The working directory is passed in explicitly; nothing is read from the
/// process environment.
#[derive(Debug, Clone)]
pub struct FontOptions {
    pub settings: FontSettings,
    pub icons: Vec<String>,
    pub output_dir: PathBuf,
    pub endpoint: String,
    pub timeout: Duration,
}

impl FontOptions {
    /// Default options with the output directory resolved against `working_dir`.
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            settings: FontSettings::default(),
            icons: Vec::new(),
            output_dir: working_dir.as_ref().join(DEFAULT_OUTPUT_DIR),
            endpoint: CSS_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_settings(mut self, settings: FontSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_icons<I, S>(mut self, icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.icons = icons.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Override the stylesheet endpoint, e.g. to point at a mirror.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
