//! CLI for the fixgen fixture generator.

mod report;

use anyhow::Result;
use clap::Parser;
use fixgen_core::config::{self, GeneratorConfig};
use fixgen_core::generate::{generate_reporting, make_rng};
use std::path::PathBuf;

/// Generate test data for the SMPP application: templated text messages
/// (`text.txt`) and random URLs (`url.txt`).
#[derive(Debug, Parser)]
#[command(name = "fixgen", version)]
#[command(about = "Generate test data for SMPP application", long_about = None)]
#[command(after_help = report::AFTER_HELP)]
pub struct Cli {
    /// Number of messages to generate (default: 100).
    #[arg(long, value_name = "N")]
    pub msgnum: Option<usize>,

    /// Number of URLs to generate (default: 50).
    #[arg(long, value_name = "N")]
    pub urlnum: Option<usize>,

    /// Enable multilingual message generation (default: English only).
    #[arg(long)]
    pub multilingual: bool,

    /// Directory for text.txt and url.txt (default: data).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Seed the random generator for reproducible output.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// After writing, print N payloads composed from the generated files.
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub preview: usize,

    /// TOML file with defaults (default: ~/.config/fixgen/config.toml if present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log progress details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of `base`.
    pub fn resolve(&self, base: GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            msg_count: self.msgnum.unwrap_or(base.msg_count),
            url_count: self.urlnum.unwrap_or(base.url_count),
            multilingual: self.multilingual || base.multilingual,
            output_dir: self.output_dir.clone().unwrap_or(base.output_dir),
            seed: self.seed.or(base.seed),
        }
    }

    pub fn run(&self) -> Result<()> {
        let base = config::load(self.config.as_deref())?;
        let cfg = self.resolve(base);
        tracing::debug!("resolved config: {:?}", cfg);

        let summary = generate_reporting(&cfg, &mut report::print_stage)?;
        report::print_summary(&summary);

        if self.preview > 0 {
            // Offset the seed so previews don't just replay the first draws.
            let mut rng = make_rng(cfg.seed.map(|s| s.wrapping_add(1)));
            report::print_preview(&summary.paths, self.preview, &mut rng)?;
        }
        Ok(())
    }
}
