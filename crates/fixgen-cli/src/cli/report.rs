//! Human-readable progress and summary output on stdout.

use anyhow::Result;
use fixgen_core::fixtures::{expand_random_url, FixtureSet};
use fixgen_core::generate::{GenerateSummary, OutputPaths, Stage};
use fixgen_core::templates::Language;
use rand::Rng;

pub const AFTER_HELP: &str = "\
Language options:
  default           English only
  --multilingual    English, Chinese, Japanese, Korean, Hebrew

Examples:
  fixgen
  fixgen --multilingual
  fixgen --msgnum 200 --urlnum 100 --multilingual

Output files:
  data/text.txt     generated messages
  data/url.txt      generated random URLs";

pub fn lang_mode(multilingual: bool) -> &'static str {
    if multilingual {
        "multiple languages"
    } else {
        "English"
    }
}

pub fn stage_line(stage: Stage) -> String {
    match stage {
        Stage::Messages {
            count,
            multilingual,
        } => format!("Generating {} messages in {}...", count, lang_mode(multilingual)),
        Stage::Urls { count } => format!("Generating {} random URLs...", count),
    }
}

pub fn print_stage(stage: Stage) {
    println!("{}", stage_line(stage));
}

pub fn summary_lines(summary: &GenerateSummary) -> Vec<String> {
    let mode = lang_mode(summary.multilingual);
    let mut lines = vec![
        String::new(),
        "Done! Files generated:".to_string(),
        format!("- {} (Messages in {})", summary.paths.text.display(), mode),
        format!("- {} (Random URLs)", summary.paths.url.display()),
    ];
    if summary.multilingual {
        lines.push(String::new());
        lines.push("Supported languages:".to_string());
        lines.extend(Language::ALL.iter().map(|l| format!("- {}", l.display_name())));
    }
    lines
}

pub fn print_summary(summary: &GenerateSummary) {
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}

/// Reads the generated files back and prints `count` composed payloads.
pub fn print_preview<R: Rng + ?Sized>(paths: &OutputPaths, count: usize, rng: &mut R) -> Result<()> {
    let set = FixtureSet::load_dir(paths)?;
    println!();
    println!("Sample payloads:");
    for _ in 0..count {
        let payload = expand_random_url(&set.compose(rng), rng);
        println!("  {}", payload);
    }
    Ok(())
}
