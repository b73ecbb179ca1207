use anyhow::{Context, Result};
use symfont_core::{FontCache, FontOptions};

pub fn paths(options: FontOptions) -> Result<()> {
    let cache = FontCache::new(options).context("Failed to set up font cache")?;
    let entry = cache.entry();

    println!("Fingerprint: {}", cache.fingerprint());
    println!("Icons:       {}", cache.icons().len());
    println!("Font:        {}", entry.font_path().display());
    println!("Stylesheet:  {}", entry.css_path().display());
    println!("Source:      {}", cache.css_url());
    println!("Cached:      {}", if cache.is_cached() { "yes" } else { "no" });
    Ok(())
}
