//! Stable short identifiers for requested icon sets.

use std::collections::BTreeSet;

use crate::config::DEFAULT_FINGERPRINT;

/// A de-duplicated, sorted set of glyph names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet(BTreeSet<String>);

impl IconSet {
    pub fn new<I, S>(icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(icons.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Glyph names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Glyph names in lexicographic order, joined by `sep`.
    pub fn join(&self, sep: &str) -> String {
        self.iter().collect::<Vec<_>>().join(sep)
    }

    /// Derive the eight-digit hex fingerprint, or `"default"` for an empty set.
    pub fn fingerprint(&self) -> String {
        if self.is_empty() {
            return DEFAULT_FINGERPRINT.to_string();
        }
        let hash = string_hash(&self.join(","));
        let hex = format!("{:08x}", hash.unsigned_abs());
        hex[..8].to_string()
    }
}

impl<S: Into<String>> FromIterator<S> for IconSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// 31-multiplier rolling hash over UTF-16 code units with i32 wrap-around.
fn string_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(IconSet::default().fingerprint(), "default");
        assert_eq!(IconSet::new(Vec::<String>::new()).fingerprint(), "default");
    }

    #[test]
    fn test_known_values() {
        assert_eq!(IconSet::new(["home", "search"]).fingerprint(), "67473715");
        assert_eq!(IconSet::new(["home"]).fingerprint(), "0030f4df");
        assert_eq!(IconSet::new(["a"]).fingerprint(), "00000061");
    }

    #[test]
    fn test_order_independent() {
        let names = ["search", "home", "settings", "delete"];
        let expected = IconSet::new(names).fingerprint();
        for rotation in 0..names.len() {
            let mut permuted = names.to_vec();
            permuted.rotate_left(rotation);
            assert_eq!(IconSet::new(permuted.iter().copied()).fingerprint(), expected);
            permuted.reverse();
            assert_eq!(IconSet::new(permuted).fingerprint(), expected);
        }
    }

    #[test]
    fn test_duplicates_ignored() {
        assert_eq!(
            IconSet::new(["home", "home", "search"]).fingerprint(),
            IconSet::new(["search", "home"]).fingerprint()
        );
    }

    #[test]
    fn test_distinct_sets_differ() {
        let a = IconSet::new(["home", "search"]).fingerprint();
        let b = IconSet::new(["home", "settings"]).fingerprint();
        let c = IconSet::new(["home"]).fingerprint();
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_fingerprint_shape() {
        let fp = IconSet::new(["arrow_back", "close", "menu", "more_vert"]).fingerprint();
        assert_eq!(fp.len(), 8);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_wraps() {
        // Long input overflows i32 many times over without panicking.
        let long = "x".repeat(10_000);
        assert_eq!(IconSet::new([long]).fingerprint().len(), 8);
    }
}
