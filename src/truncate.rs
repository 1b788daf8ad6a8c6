use std::io::{BufRead, Write};
use std::path::Path;

use crate::io_utils::{create_output, open_input};
use crate::{LexlistError, Result};

/// Validate a raw line count argument.
pub fn parse_count(num: i64) -> Result<usize> {
    usize::try_from(num).map_err(|_| LexlistError::Usage("<num> must be non-negative.".into()))
}

/// Copy at most `limit` lines verbatim from `reader` to `writer`.
///
/// Stops reading as soon as the limit is reached. Returns the number of
/// lines actually copied.
pub fn copy_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    limit: usize,
) -> std::io::Result<usize> {
    let mut line = Vec::new();
    let mut copied = 0;
    while copied < limit {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        writer.write_all(&line)?;
        copied += 1;
    }
    writer.flush()?;
    Ok(copied)
}

/// File-level wrapper around [`copy_lines`].
pub fn head_file(input: &Path, output: &Path, limit: usize) -> Result<usize> {
    let reader = open_input(input)?;
    let writer = create_output(output)?;
    let copied = copy_lines(reader, writer, limit)
        .map_err(|e| LexlistError::io("copying lines to", output, e))?;
    log::debug!("copied {copied} of at most {limit} lines");
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN: &str = "l1\nl2\nl3\nl4\nl5\nl6\nl7\nl8\nl9\nl10\n";

    fn head(input: &str, limit: usize) -> (String, usize) {
        let mut out = Vec::new();
        let n = copy_lines(input.as_bytes(), &mut out, limit).unwrap();
        (String::from_utf8(out).unwrap(), n)
    }

    #[test]
    fn first_five() {
        assert_eq!(head(TEN, 5), ("l1\nl2\nl3\nl4\nl5\n".to_string(), 5));
    }

    #[test]
    fn zero_and_overlong() {
        assert_eq!(head(TEN, 0), (String::new(), 0));
        assert_eq!(head(TEN, 100), (TEN.to_string(), 10));
    }

    #[test]
    fn preserves_terminators() {
        assert_eq!(head("a\r\nb\r\nc", 5), ("a\r\nb\r\nc".to_string(), 3));
    }

    #[test]
    fn negative_count_rejected() {
        assert!(matches!(parse_count(-1), Err(LexlistError::Usage(_))));
        assert_eq!(parse_count(7).unwrap(), 7);
    }
}
