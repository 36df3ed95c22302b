//! Reading fixtures back the way the SMPP client consumes them.
//!
//! The client loads both files, drops blank lines, and sends a random text
//! line followed by a random URL. Message bodies that carry a `{random url}`
//! token get a fresh URL spliced in instead.

use anyhow::{Context, Result};
use rand::Rng;
use std::fs;
use std::path::Path;

use crate::generate::OutputPaths;
use crate::url_gen::random_url;

/// Content sent when either fixture list is empty.
pub const DEFAULT_CONTENT: &str = "default message content";

/// Token replaced by [`expand_random_url`].
pub const RANDOM_URL_TOKEN: &str = "{random url}";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureSet {
    pub texts: Vec<String>,
    pub urls: Vec<String>,
}

impl FixtureSet {
    pub fn load(text_path: &Path, url_path: &Path) -> Result<Self> {
        Ok(Self {
            texts: read_nonblank_lines(text_path)?,
            urls: read_nonblank_lines(url_path)?,
        })
    }

    pub fn load_dir(paths: &OutputPaths) -> Result<Self> {
        Self::load(&paths.text, &paths.url)
    }

    /// `"<text> <url>"` from a uniformly chosen pair, or [`DEFAULT_CONTENT`].
    pub fn compose<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        if self.texts.is_empty() || self.urls.is_empty() {
            return DEFAULT_CONTENT.to_string();
        }
        let text = &self.texts[rng.random_range(0..self.texts.len())];
        let url = &self.urls[rng.random_range(0..self.urls.len())];
        format!("{text} {url}")
    }
}

/// Lines of `path`, trimmed, with blank lines removed.
pub fn read_nonblank_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(parse_nonblank_lines(&content))
}

fn parse_nonblank_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replaces the first `{random url}` in `content` with a new URL.
pub fn expand_random_url<R: Rng + ?Sized>(content: &str, rng: &mut R) -> String {
    if content.contains(RANDOM_URL_TOKEN) {
        content.replacen(RANDOM_URL_TOKEN, &random_url(rng), 1)
    } else {
        content.to_string()
    }
}
