//! Filesystem helpers for the cache directory.

use std::{
    fs::{create_dir_all, read_dir, remove_file, write},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use glob::Pattern;

use crate::error::{Error, Result};

/// Find files in `dir` whose names start with `prefix`.
///
/// Names are matched on their own, so the directory path itself may hold
/// any bytes. A missing directory has no files.
pub fn glob_prefixed(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(&format!("{}*", Pattern::escape(prefix)))
        .map_err(|e| Error::fs("list", dir, std::io::Error::other(e)))?;
    let entries = match read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::fs("list", dir, e)),
    };

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::fs("list", dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::fs("list", entry.path(), e))?;
        if file_type.is_file() && pattern.matches(&entry.file_name().to_string_lossy()) {
            paths.push(entry.path());
        }
    }
    Ok(paths)
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir).map_err(|e| Error::fs("create directory", dir, e))
}

pub fn remove(path: &Path) -> Result<()> {
    remove_file(path).map_err(|e| Error::fs("remove", path, e))
}

pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    write(path, contents).map_err(|e| Error::fs("write", path, e))
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir;

    use super::*;

    #[test]
    fn test_glob_prefixed() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path().join("material-symbols-a.woff2"), b"a").unwrap();
        write(dir.path().join("material-symbols-b.woff2"), b"b").unwrap();
        write(dir.path().join("material-symbols.css"), b"c").unwrap();
        write(dir.path().join("other.txt"), b"d").unwrap();
        create_dir(dir.path().join("material-symbols-dir")).unwrap();

        let mut found: Vec<_> = glob_prefixed(dir.path(), "material-symbols-")
            .unwrap()
            .into_iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        found.sort();
        assert_eq!(found, ["material-symbols-a.woff2", "material-symbols-b.woff2"]);
    }

    #[test]
    fn test_glob_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(glob_prefixed(&missing, "material-symbols-").unwrap().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_glob_non_utf8_dir() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join(OsStr::from_bytes(b"fonts-\xff"));
        create_dir(&dir).unwrap();
        write(dir.join("material-symbols-f1w300g0o20-default.woff2"), b"a").unwrap();

        let found = glob_prefixed(&dir, "material-symbols-").unwrap();
        assert_eq!(found, [dir.join("material-symbols-f1w300g0o20-default.woff2")]);
    }

    #[test]
    fn test_glob_not_a_directory() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("plain.txt");
        write(&file, b"x").unwrap();
        let err = glob_prefixed(&file, "material-symbols-").unwrap_err();
        assert!(matches!(err, Error::Filesystem { action: "list", .. }));
    }

    #[test]
    fn test_ensure_dir_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src/assets/fonts");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).unwrap();
    }
}
