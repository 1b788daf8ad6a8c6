use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::LexlistError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn lexlist_cli_error(err: LexlistError) -> CliError {
    let msg = match &err {
        LexlistError::Io {
            context,
            path,
            source,
        } => format_io_error(context, path, source),
        LexlistError::Usage(msg) => format!("Error: {msg}"),
        LexlistError::Format(msg) => format!("Error: {msg}. This is a bug."),
    };
    CliError {
        msg,
        source: Some(Box::new(err)),
    }
}

impl From<LexlistError> for CliError {
    fn from(err: LexlistError) -> Self {
        lexlist_cli_error(err)
    }
}

/// Open `path` for buffered reading.
pub fn open_input(path: &Path) -> crate::Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LexlistError::io("opening input file", path, e))
}

/// Create (or truncate) `path` for buffered writing.
pub fn create_output(path: &Path) -> crate::Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| LexlistError::io("creating output file", path, e))
}

/// Read every non-blank line of a word list, trimmed, in file order.
///
/// Invalid UTF-8 is decoded lossily rather than rejected.
pub fn read_word_lines(path: &Path) -> crate::Result<Vec<String>> {
    let mut reader = open_input(path)?;
    let mut words = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| LexlistError::io("reading input file", path, e))?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}

/// Write `lines` to `path`, one per line.
pub fn write_lines<'a, I>(path: &Path, lines: I) -> crate::Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut writer = create_output(path)?;
    for line in lines {
        writeln!(writer, "{line}").map_err(|e| LexlistError::io("writing output file", path, e))?;
    }
    writer
        .flush()
        .map_err(|e| LexlistError::io("writing output file", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = open_input(&path).unwrap_err();
        let cli = lexlist_cli_error(err);
        assert!(cli.msg.contains("nope.txt"));
        assert!(cli.msg.contains("Check that the file exists"));
    }

    #[test]
    fn word_lines_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "  cat \n\n\tdog\r\n   \ncat\n").unwrap();
        assert_eq!(read_word_lines(&path).unwrap(), vec!["cat", "dog", "cat"]);
    }

    #[test]
    fn usage_error_message() {
        let cli: CliError = LexlistError::Usage("<num> must be non-negative.".into()).into();
        assert_eq!(cli.msg, "Error: <num> must be non-negative.");
    }
}
