//! Integration test: generate fixture files into a temp dir and check their shape.

use fixgen_core::config::GeneratorConfig;
use fixgen_core::fixtures::FixtureSet;
use fixgen_core::generate::{generate, OutputPaths};
use fixgen_core::templates::pool;
use regex::Regex;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const URL_PATTERN: &str = r"^(http|https)://[A-Za-z0-9]{5}\.[A-Za-z0-9]{8}\.(com|org|net|io|dev)/[A-Za-z0-9]{10}\?[A-Za-z0-9]{5}=[A-Za-z0-9]{5}$";

fn config(dir: &Path, msgs: usize, urls: usize, multilingual: bool, seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        msg_count: msgs,
        url_count: urls,
        multilingual,
        output_dir: dir.to_path_buf(),
        seed: Some(seed),
    }
}

fn lines(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path).unwrap();
    assert!(content.is_empty() || content.ends_with('\n'));
    content.lines().map(str::to_string).collect()
}

/// Regex for a template with every placeholder replaced by the value shape it
/// can take in English mode.
fn skeleton(template: &str) -> Regex {
    let mut pattern = regex::escape(template);
    for (token, value) in [
        ("{name}", r"[A-Za-z0-9]{8}"),
        ("{code}", r"[0-9]{6}"),
        ("{discount}", r"(1[0-9]|[2-6][0-9]|70)"),
        ("{order}", r"[0-9]{8}"),
        ("{news}", r"[A-Za-z0-9]{6} [A-Za-z0-9]{6}"),
        ("{time}", r"([1-9]|1[0-2]):[0-5][0-9] (AM|PM)"),
        ("{location}", r"[A-Za-z0-9]{8}"),
        ("{points}", r"([1-9][0-9]{2}|1000)"),
        ("{feature}", r"[A-Za-z0-9]{10}"),
        ("{amount}", r"([1-9][0-9]{1,2}|1000)\.[0-9]{2}"),
        ("{id}", r"[A-Z0-9]{12}"),
    ] {
        pattern = pattern.replace(&regex::escape(token), value);
    }
    Regex::new(&format!("^{pattern}$")).unwrap()
}

#[test]
fn files_have_requested_line_counts() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("data");
    let summary = generate(&config(&out, 37, 12, false, 1)).unwrap();

    assert_eq!(summary.paths, OutputPaths::in_dir(&out));
    assert_eq!(lines(&summary.paths.text).len(), 37);
    assert_eq!(lines(&summary.paths.url).len(), 12);
}

#[test]
fn zero_counts_produce_empty_files() {
    let dir = tempdir().unwrap();
    let summary = generate(&config(dir.path(), 0, 0, true, 2)).unwrap();
    assert_eq!(fs::read_to_string(&summary.paths.text).unwrap(), "");
    assert_eq!(fs::read_to_string(&summary.paths.url).unwrap(), "");
}

#[test]
fn url_lines_match_shape_and_parse() {
    let dir = tempdir().unwrap();
    let summary = generate(&config(dir.path(), 0, 200, false, 3)).unwrap();
    let re = Regex::new(URL_PATTERN).unwrap();
    for line in lines(&summary.paths.url) {
        assert!(re.is_match(&line), "{line}");
        let parsed = url::Url::parse(&line).unwrap();
        assert!(parsed.scheme() == "http" || parsed.scheme() == "https");
        assert_eq!(parsed.query_pairs().count(), 1);
    }
}

#[test]
fn english_lines_match_template_skeletons() {
    let dir = tempdir().unwrap();
    let summary = generate(&config(dir.path(), 300, 0, false, 4)).unwrap();
    let skeletons: Vec<Regex> = pool(false).iter().map(|t| skeleton(t)).collect();
    for line in lines(&summary.paths.text) {
        assert!(!line.contains('{'), "{line}");
        assert!(skeletons.iter().any(|re| re.is_match(&line)), "{line}");
    }
}

#[test]
fn single_message_single_url() {
    let dir = tempdir().unwrap();
    let summary = generate(&config(dir.path(), 1, 1, false, 5)).unwrap();
    let text = lines(&summary.paths.text);
    let url = lines(&summary.paths.url);
    assert_eq!(text.len(), 1);
    assert_eq!(url.len(), 1);
    assert!(pool(false).iter().any(|t| skeleton(t).is_match(&text[0])));
    assert!(Regex::new(URL_PATTERN).unwrap().is_match(&url[0]));
}

#[test]
fn multilingual_lines_have_no_tokens_and_use_other_scripts() {
    let dir = tempdir().unwrap();
    let summary = generate(&config(dir.path(), 200, 0, true, 6)).unwrap();
    let text = lines(&summary.paths.text);
    assert_eq!(text.len(), 200);
    let tokens = [
        "{name}", "{code}", "{discount}", "{order}", "{news}", "{time}", "{location}",
        "{points}", "{feature}", "{amount}", "{id}",
    ];
    for line in &text {
        assert!(tokens.iter().all(|t| !line.contains(t)), "{line}");
    }
    assert!(text.iter().any(|l| !l.is_ascii()));
}

#[test]
fn same_seed_same_bytes() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    let sa = generate(&config(a.path(), 50, 20, true, 77)).unwrap();
    let sb = generate(&config(b.path(), 50, 20, true, 77)).unwrap();
    assert_eq!(
        fs::read(&sa.paths.text).unwrap(),
        fs::read(&sb.paths.text).unwrap()
    );
    assert_eq!(fs::read(&sa.paths.url).unwrap(), fs::read(&sb.paths.url).unwrap());

    let c = tempdir().unwrap();
    let sc = generate(&config(c.path(), 50, 20, true, 78)).unwrap();
    assert_ne!(
        fs::read(&sa.paths.text).unwrap(),
        fs::read(&sc.paths.text).unwrap()
    );
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = tempdir().unwrap();
    generate(&config(dir.path(), 30, 30, false, 8)).unwrap();
    let summary = generate(&config(dir.path(), 3, 2, false, 9)).unwrap();
    assert_eq!(lines(&summary.paths.text).len(), 3);
    assert_eq!(lines(&summary.paths.url).len(), 2);
}

#[test]
fn output_dir_that_is_a_file_fails() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("data");
    fs::write(&blocker, "not a dir").unwrap();
    let err = generate(&config(&blocker, 1, 1, false, 10)).unwrap_err();
    assert!(format!("{err:#}").contains("data"));
}

#[test]
fn generated_fixtures_load_back_and_compose() {
    let dir = tempdir().unwrap();
    let summary = generate(&config(dir.path(), 10, 5, false, 11)).unwrap();
    let set = FixtureSet::load_dir(&summary.paths).unwrap();
    assert_eq!(set.texts.len(), 10);
    assert_eq!(set.urls.len(), 5);

    let mut rng = fixgen_core::generate::make_rng(Some(12));
    let payload = set.compose(&mut rng);
    let (_, url) = payload.rsplit_once(' ').unwrap();
    assert!(set.urls.iter().any(|u| u == url));
    assert!(set.texts.iter().any(|t| payload.starts_with(t.as_str())));
}
