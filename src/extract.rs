//! Streaming corpus token extraction.
//!
//! The input is read one raw line at a time. Lines that are not clean
//! printable ASCII or lack the configured column are skipped; every
//! accepted token is written the first time it is seen.

use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::Path;

use log::{debug, info};

use crate::config::ExtractConfig;
use crate::io_utils::{create_output, open_input};
use crate::progress::{ExtractSummary, LineTicker, Progress};
use crate::token::{is_record, tokens_for_line};
use crate::{LexlistError, Result};

/// Extract tokens from `reader` into `writer`.
///
/// `total_bytes` only feeds the percentage in progress snapshots. The
/// `progress` callback fires every `config.progress_interval` lines and
/// has no influence on the output. Errors carry `input`/`output` as the
/// paths to blame.
pub fn extract_tokens<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &ExtractConfig,
    total_bytes: u64,
    progress: Option<&mut dyn FnMut(&Progress)>,
    input: &Path,
    output: &Path,
) -> Result<ExtractSummary> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut state = Progress {
        total_bytes,
        ..Progress::default()
    };
    let mut skipped = 0u64;
    let mut ticker = LineTicker::new(config.progress_interval, progress);
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| LexlistError::io("reading input file", input, e))?;
        if n == 0 {
            break;
        }
        state.lines += 1;
        state.bytes_read += n as u64;

        if is_record(&line, config) {
            for token in tokens_for_line(&line, config) {
                if seen.contains(&token) {
                    continue;
                }
                writer
                    .write_all(token.as_bytes())
                    .and_then(|_| writer.write_all(b"\n"))
                    .map_err(|e| LexlistError::io("writing output file", output, e))?;
                seen.insert(token);
                state.tokens += 1;
            }
        } else {
            skipped += 1;
        }
        ticker.tick(&state);
    }

    writer
        .flush()
        .map_err(|e| LexlistError::io("writing output file", output, e))?;

    debug!("skipped {skipped} malformed lines");
    Ok(ExtractSummary {
        lines: state.lines,
        skipped,
        tokens: seen.len() as u64,
        bytes_read: state.bytes_read,
    })
}

/// Open `input`, create `output`, and run [`extract_tokens`] between them.
pub fn extract_file(
    input: &Path,
    output: &Path,
    config: &ExtractConfig,
    progress: Option<&mut dyn FnMut(&Progress)>,
) -> Result<ExtractSummary> {
    let reader = open_input(input)?;
    let total_bytes = reader
        .get_ref()
        .metadata()
        .map_err(|e| LexlistError::io("reading input file", input, e))?
        .len();
    let writer = create_output(output)?;
    let summary = extract_tokens(reader, writer, config, total_bytes, progress, input, output)?;
    info!(
        "extracted {} tokens from {} lines of '{}'",
        summary.tokens,
        summary.lines,
        input.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, config: &ExtractConfig) -> (String, ExtractSummary) {
        let mut out = Vec::new();
        let summary = extract_tokens(
            input.as_bytes(),
            &mut out,
            config,
            input.len() as u64,
            None,
            Path::new("in"),
            Path::new("out"),
        )
        .unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn surface_dedup_in_first_seen_order() {
        let corpus = "1\tThe\tthe\tat\n\
                      2\tdog's\tdog\tnn1\n\
                      3\tthe\tthe\tat\n\
                      4\tself-made\tself-made\tjj\n\
                      5\tMade\tmake\tvvn\n";
        let (out, summary) = run(corpus, &ExtractConfig::surface());
        assert_eq!(out, "the\ndogs\nself\nmade\n");
        assert_eq!(summary.lines, 5);
        assert_eq!(summary.tokens, 4);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn lemma_column() {
        let corpus = "1\tran\trun\tvvd\n2\truns\trun\tvvz\n3\tx\tself-made\tjj\n";
        let (out, summary) = run(corpus, &ExtractConfig::lemma());
        assert_eq!(out, "run\n");
        assert_eq!(summary.tokens, 1);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let corpus = "justoneword\n1\tcaf\u{e9}\tcafe\n2\tgood\tgood\n\n";
        let (out, summary) = run(corpus, &ExtractConfig::surface());
        assert_eq!(out, "good\n");
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.skipped, 3);
    }

    #[test]
    fn last_line_without_newline() {
        let (out, _) = run("1\tcat\n2\tdog", &ExtractConfig::surface());
        assert_eq!(out, "cat\ndog\n");
    }

    #[test]
    fn crlf_input() {
        let (out, _) = run("1\tcat\r\n2\tdog\r\n", &ExtractConfig::surface());
        assert_eq!(out, "cat\ndog\n");
    }

    #[test]
    fn progress_does_not_change_output() {
        let corpus: String = (0..25).map(|i| format!("{i}\tw{}\n", "a".repeat(i % 3 + 1))).collect();
        let config = ExtractConfig {
            progress_interval: 10,
            ..ExtractConfig::surface()
        };
        let mut snapshots = Vec::new();
        let mut cb = |p: &Progress| snapshots.push(*p);
        let mut with = Vec::new();
        extract_tokens(
            corpus.as_bytes(),
            &mut with,
            &config,
            corpus.len() as u64,
            Some(&mut cb),
            Path::new("in"),
            Path::new("out"),
        )
        .unwrap();
        let (without, _) = run(&corpus, &config);
        assert_eq!(String::from_utf8(with).unwrap(), without);
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].lines, 10);
        assert_eq!(snapshots[1].lines, 20);
        assert!(snapshots[1].percent() > snapshots[0].percent());
        assert_eq!(snapshots[1].tokens, 3);
    }

    #[test]
    fn snapshot_counts_the_current_line() {
        let corpus = "1\tcat\n2\tdog\n";
        let config = ExtractConfig {
            progress_interval: 1,
            ..ExtractConfig::surface()
        };
        let mut tokens = Vec::new();
        let mut cb = |p: &Progress| tokens.push(p.tokens);
        extract_tokens(
            corpus.as_bytes(),
            std::io::sink(),
            &config,
            corpus.len() as u64,
            Some(&mut cb),
            Path::new("in"),
            Path::new("out"),
        )
        .unwrap();
        assert_eq!(tokens, vec![1, 2]);
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_file(
            &dir.path().join("source.txt"),
            &dir.path().join("all.txt"),
            &ExtractConfig::surface(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, LexlistError::Io { .. }));
        assert!(!dir.path().join("all.txt").exists());
    }
}
