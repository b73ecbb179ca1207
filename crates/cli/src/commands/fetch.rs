use std::time::Instant;

use anyhow::{Context, Result};
use log::debug;
use symfont_core::{FontCache, FontOptions, Outcome};

pub fn fetch(options: FontOptions) -> Result<()> {
    let cache = FontCache::new(options).context("Failed to set up font cache")?;
    debug!("Stylesheet source: {}", cache.css_url());
    let start = Instant::now();

    let outcome = cache.run().context("Failed to refresh Material Symbols")?;

    let entry = cache.entry();
    println!("{} {}", entry.font_file_name(), describe(outcome));
    println!(
        "Fonts ready in {}/ ({:.2}s)",
        entry.dir().display(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::CacheHit => "already cached".to_string(),
        Outcome::Generated { bytes } => {
            format!("downloaded ({:.2} MB)", bytes as f64 / 1024.0 / 1024.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe(Outcome::CacheHit), "already cached");
        assert_eq!(describe(Outcome::Generated { bytes: 1024 * 1024 }), "downloaded (1.00 MB)");
    }
}
