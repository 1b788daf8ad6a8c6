//! Per-record token predicates used by the extractors.

use crate::config::ExtractConfig;

/// True when every byte is printable ASCII or ASCII whitespace
/// (`\t`, `\n`, `\r`, `\x0b`, `\x0c`). Any non-ASCII byte fails.
pub fn is_printable(line: &[u8]) -> bool {
    line.iter()
        .all(|&b| matches!(b, 0x20..=0x7e | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
}

/// Length of the longest run of one repeated character.
pub fn longest_run(token: &str) -> usize {
    let mut best = 0;
    let mut run = 0;
    let mut prev = None;
    for c in token.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        best = best.max(run);
    }
    best
}

/// True if some character repeats at least `n` times consecutively.
pub fn has_long_run(token: &str, n: usize) -> bool {
    longest_run(token) >= n.max(1)
}

/// Strip apostrophes, require a non-empty alphabetic remainder, lowercase.
pub fn clean_candidate(fragment: &str, strip_apostrophes: bool) -> Option<String> {
    let cleaned: String = if strip_apostrophes {
        fragment.chars().filter(|&c| c != '\'').collect()
    } else {
        fragment.to_owned()
    };
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(cleaned.to_ascii_lowercase())
}

/// Split a raw line (terminator included or not) into its tab columns.
pub fn split_record(line: &str) -> std::str::Split<'_, char> {
    line.trim_end_matches(['\r', '\n']).split('\t')
}

/// Every accepted token for one raw corpus line, in field order.
///
/// Returns an empty vector for lines that fail the printable check or are
/// missing the configured column. Duplicates within the line are kept;
/// deduplication happens across the run.
pub fn tokens_for_line(line: &[u8], config: &ExtractConfig) -> Vec<String> {
    if !is_printable(line) {
        return Vec::new();
    }
    // printable implies ASCII
    let Ok(text) = std::str::from_utf8(line) else {
        return Vec::new();
    };
    let Some(field) = split_record(text).nth(config.column) else {
        return Vec::new();
    };

    let fragments: Vec<&str> = if config.split_hyphens {
        field.split('-').collect()
    } else {
        vec![field]
    };

    fragments
        .into_iter()
        .filter_map(|frag| clean_candidate(frag, config.strip_apostrophes))
        .filter(|tok| !(config.reject_long_runs && has_long_run(tok, config.max_run)))
        .collect()
}

/// Whether a raw line is a usable record for `config`.
pub fn is_record(line: &[u8], config: &ExtractConfig) -> bool {
    is_printable(line)
        && std::str::from_utf8(line)
            .map(|text| split_record(text).count() >= config.min_columns())
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn printable_set() {
        assert!(is_printable(b"1\tcat\tcat\tnn1\r\n"));
        assert!(is_printable(b"a\x0bb\x0c"));
        assert!(!is_printable(b"caf\xc3\xa9"));
        assert!(!is_printable(b"nul\x00byte"));
        assert!(!is_printable(b"del\x7f"));
    }

    #[test]
    fn cleaning() {
        assert_eq!(clean_candidate("Don't", true).as_deref(), Some("dont"));
        assert_eq!(clean_candidate("Don't", false), None);
        assert_eq!(clean_candidate("'''", true), None);
        assert_eq!(clean_candidate("", true), None);
        assert_eq!(clean_candidate("abc1", true), None);
        assert_eq!(clean_candidate("ABC", true).as_deref(), Some("abc"));
    }

    #[test]
    fn runs() {
        assert_eq!(longest_run(""), 0);
        assert_eq!(longest_run("bookkeeper"), 2);
        assert!(!has_long_run("zzz", 4));
        assert!(has_long_run("zzzz", 4));
        assert!(has_long_run("ahhhhh", 4));
    }

    #[test]
    fn surface_line() {
        let cfg = ExtractConfig::surface();
        let toks = tokens_for_line(b"42\tWell-Known\twell-known\tjj\n", &cfg);
        assert_eq!(toks, vec!["well", "known"]);
        let toks = tokens_for_line(b"1\tbrrrr-cold\tx\n", &cfg);
        assert_eq!(toks, vec!["cold"]);
        assert!(tokens_for_line(b"lonely\n", &cfg).is_empty());
    }

    #[test]
    fn lemma_line() {
        let cfg = ExtractConfig::lemma();
        assert_eq!(tokens_for_line(b"1\tRan\tRun\tvvd\n", &cfg), vec!["run"]);
        assert!(tokens_for_line(b"1\tx\twell-known\n", &cfg).is_empty());
        assert_eq!(tokens_for_line(b"1\tx\tbrrrr\n", &cfg), vec!["brrrr"]);
        assert!(tokens_for_line(b"1\tonly-two\n", &cfg).is_empty());
    }

    #[test]
    fn record_shape() {
        let cfg = ExtractConfig::surface();
        assert!(is_record(b"1\tcat\n", &cfg));
        assert!(!is_record(b"cat\n", &cfg));
        assert!(!is_record(b"1\tcaf\xc3\xa9\n", &cfg));
    }

    quickcheck! {
        fn run_predicate_matches_windows(s: String) -> bool {
            let chars: Vec<char> = s.chars().collect();
            let naive = chars.windows(4).any(|w| w.iter().all(|&c| c == w[0]));
            has_long_run(&s, 4) == naive
        }
    }
}
