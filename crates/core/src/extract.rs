//! Locating the font binary URL inside a fetched stylesheet.

use std::sync::LazyLock;

use regex::Regex;

static FONT_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"src:\s*url\((.*?)\)\s+format\(['"](?:truetype|ttf|woff2)['"]\)"#)
        .expect("valid font src regex")
});

/// Return the first truetype/woff2 source URL in `css`, with quotes stripped
/// and a `.ttf` suffix rewritten to `.woff2`.
pub fn font_url(css: &str) -> Option<String> {
    let captures = FONT_SRC.captures(css)?;
    let url: String = captures[1].chars().filter(|c| !matches!(c, '\'' | '"')).collect();
    Some(match url.strip_suffix(".ttf") {
        Some(stem) => format!("{stem}.woff2"),
        None => url,
    })
}
