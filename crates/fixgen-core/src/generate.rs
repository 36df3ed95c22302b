//! Fixture file generation: `text.txt` with messages, `url.txt` with URLs.
//!
//! Each file is written in one pass through a buffered writer. On any I/O
//! error the run stops; files already written are left in place.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::message::random_message;
use crate::url_gen::random_url;

pub const TEXT_FILE_NAME: &str = "text.txt";
pub const URL_FILE_NAME: &str = "url.txt";

/// Paths of the two fixture files inside an output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub text: PathBuf,
    pub url: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            text: dir.join(TEXT_FILE_NAME),
            url: dir.join(URL_FILE_NAME),
        }
    }
}

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub paths: OutputPaths,
    pub messages: usize,
    pub urls: usize,
    pub multilingual: bool,
}

/// Step a run is about to start; reported before each file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Messages { count: usize, multilingual: bool },
    Urls { count: usize },
}

/// RNG for a run: seeded when `seed` is set, from the OS otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Writes `count` lines produced by `next_line`, each terminated by `\n`.
pub fn write_lines<F>(path: &Path, count: usize, mut next_line: F) -> Result<()>
where
    F: FnMut() -> String,
{
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    for _ in 0..count {
        writeln!(w, "{}", next_line()).with_context(|| format!("write {}", path.display()))?;
    }
    w.flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Creates the output directory and writes both fixture files using `rng`.
/// Messages are drawn first, then URLs. `on_stage` is called before each file.
pub fn generate_with_rng<R: Rng + ?Sized>(
    cfg: &GeneratorConfig,
    rng: &mut R,
    on_stage: &mut dyn FnMut(Stage),
) -> Result<GenerateSummary> {
    let dir = cfg.output_dir.as_path();
    fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
    let paths = OutputPaths::in_dir(dir);

    on_stage(Stage::Messages {
        count: cfg.msg_count,
        multilingual: cfg.multilingual,
    });
    tracing::info!(
        count = cfg.msg_count,
        multilingual = cfg.multilingual,
        "writing messages to {}",
        paths.text.display()
    );
    write_lines(&paths.text, cfg.msg_count, || {
        random_message(rng, cfg.multilingual)
    })?;

    on_stage(Stage::Urls {
        count: cfg.url_count,
    });
    tracing::info!(count = cfg.url_count, "writing urls to {}", paths.url.display());
    write_lines(&paths.url, cfg.url_count, || random_url(rng))?;

    Ok(GenerateSummary {
        paths,
        messages: cfg.msg_count,
        urls: cfg.url_count,
        multilingual: cfg.multilingual,
    })
}

/// Validates `cfg` and runs generation with an RNG built from `cfg.seed`.
pub fn generate(cfg: &GeneratorConfig) -> Result<GenerateSummary> {
    generate_reporting(cfg, &mut |_| {})
}

/// Like [`generate`], reporting each [`Stage`] to `on_stage`.
pub fn generate_reporting(
    cfg: &GeneratorConfig,
    on_stage: &mut dyn FnMut(Stage),
) -> Result<GenerateSummary> {
    cfg.validate()?;
    let mut rng = make_rng(cfg.seed);
    tracing::debug!(seed = ?cfg.seed, "starting generation");
    generate_with_rng(cfg, &mut rng, on_stage)
}
