//! Word list to array literal conversion.

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::io_utils::read_word_lines;
use crate::{LexlistError, Result};

pub const DEFAULT_NAME: &str = "words";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `const words = ['a', 'b'];`
    #[default]
    Js,
    /// `["a","b"]`
    Json,
}

const RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Check `name` is usable as a JavaScript binding.
pub fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let ok = !RESERVED.contains(&name) && match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if ok {
        Ok(())
    } else {
        Err(LexlistError::Usage(format!(
            "'{name}' is not a valid identifier."
        )))
    }
}

fn js_quote(word: &str) -> String {
    let mut out = String::with_capacity(word.len() + 2);
    out.push('\'');
    for c in word.chars() {
        if c == '\\' || c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Render `words` as one declaration (or JSON array) plus newline.
pub fn render(words: &[String], format: OutputFormat, name: &str) -> Result<String> {
    match format {
        OutputFormat::Js => {
            validate_identifier(name)?;
            let items: Vec<String> = words.iter().map(|w| js_quote(w)).collect();
            Ok(format!("const {name} = [{}];\n", items.join(", ")))
        }
        OutputFormat::Json => {
            let body =
                serde_json::to_string(words).map_err(|e| LexlistError::Format(e.to_string()))?;
            Ok(body + "\n")
        }
    }
}

/// Convert the list at `input` and write it to `output`. Returns the
/// number of words written.
///
/// The declared name is checked before the input is opened.
pub fn convert_file(input: &Path, output: &Path, format: OutputFormat, name: &str) -> Result<usize> {
    if format == OutputFormat::Js {
        validate_identifier(name)?;
    }
    let words = read_word_lines(input)?;
    let text = render(&words, format, name)?;
    fs::write(output, text).map_err(|e| LexlistError::io("writing output file", output, e))?;
    Ok(words.len())
}
