//! CLI definitions and command dispatch.

use std::{env::current_dir, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, value_parser};
use symfont_core::{FontOptions, FontSettings};

use crate::commands::{clean, fetch, paths};

#[derive(Parser)]
#[command(name = "symfont")]
#[command(about = "Download and cache Material Symbols fonts before a build")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct FontArgs {
    /// FILL axis
    #[arg(long, default_value_t = 0, value_parser = value_parser!(i32).range(0..=1))]
    pub fill: i32,
    /// wght axis
    #[arg(long, default_value_t = 300, value_parser = value_parser!(i32).range(100..=700))]
    pub weight: i32,
    /// GRAD axis
    #[arg(long, default_value_t = 0, allow_negative_numbers = true,
          value_parser = value_parser!(i32).range(-50..=200))]
    pub grade: i32,
    /// opsz axis
    #[arg(long, default_value_t = 20, value_parser = value_parser!(i32).range(20..=48))]
    pub optical_size: i32,
    /// Glyph names to include, comma separated. All glyphs when omitted.
    #[arg(long, value_delimiter = ',')]
    pub icons: Vec<String>,
    /// Defaults to src/assets/fonts under the current directory.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    #[arg(long, default_value = symfont_core::config::CSS_ENDPOINT)]
    pub endpoint: String,
    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout: u64,
}

impl FontArgs {
    pub fn options(&self) -> Result<FontOptions> {
        let cwd = current_dir().context("Failed to read current directory")?;
        let settings = FontSettings::default()
            .with_fill(self.fill)
            .with_weight(self.weight)
            .with_grade(self.grade)
            .with_optical_size(self.optical_size);
        let mut options = FontOptions::new(&cwd)
            .with_settings(settings)
            .with_icons(self.icons.iter().filter(|s| !s.is_empty()).cloned())
            .with_endpoint(self.endpoint.clone())
            .with_timeout(Duration::from_secs(self.timeout));
        if let Some(dir) = &self.output_dir {
            options = options.with_output_dir(cwd.join(dir));
        }
        Ok(options)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the font and stylesheet unless they are already cached
    Fetch {
        #[command(flatten)]
        args: FontArgs,
    },
    /// Show the resolved fingerprint, files and stylesheet URL
    Paths {
        #[command(flatten)]
        args: FontArgs,
    },
    /// Remove every cached font and the generated stylesheet
    Clean {
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Fetch { args } => fetch(args.options()?)?,
            Commands::Paths { args } => paths(args.options()?)?,
            Commands::Clean { output_dir } => {
                let cwd = current_dir().context("Failed to read current directory")?;
                let dir = match output_dir {
                    Some(dir) => cwd.join(dir),
                    None => FontOptions::new(&cwd).output_dir,
                };
                clean(&dir)?;
            }
        }
        Ok(())
    }
}
