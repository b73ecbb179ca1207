use std::path::Path;

use anyhow::Result;
use symfont_core::{
    config::{CSS_FILE_NAME, FONT_FILE_PREFIX},
    io::{glob_prefixed, remove},
};

/// Remove cached fonts and the generated stylesheet from `dir`.
pub fn clean(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        println!("Skipped {} (not found)", dir.display());
        return Ok(0);
    }

    let mut targets = glob_prefixed(dir, FONT_FILE_PREFIX)?;
    let css = dir.join(CSS_FILE_NAME);
    if css.is_file() {
        targets.push(css);
    }

    for path in &targets {
        remove(path)?;
        println!("Removed {}", path.display());
    }

    println!("Cleaned {} files", targets.len());
    Ok(targets.len())
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;

    #[test]
    fn test_clean_removes_cache_only() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path().join("material-symbols-f0w300g0o20-default.woff2"), b"a").unwrap();
        write(dir.path().join("material-symbols-f1w300g0o20-default.woff2"), b"b").unwrap();
        write(dir.path().join("material-symbols.css"), b"c").unwrap();
        write(dir.path().join("app.css"), b"d").unwrap();

        assert_eq!(clean(dir.path()).unwrap(), 3);
        assert!(dir.path().join("app.css").exists());
        assert!(!dir.path().join("material-symbols.css").exists());
    }

    #[test]
    fn test_clean_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(clean(&dir.path().join("missing")).unwrap(), 0);
    }
}
