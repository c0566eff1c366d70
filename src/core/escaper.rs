use regex::{Captures, Regex};
use tracing::{debug, instrument};

use crate::config::{ESCAPED_NEWLINE, TARGET_KEYS};
use crate::error::Result;

/// Rewrites raw line breaks inside the quoted values of the equation fields.
///
/// Fields are found by text pattern only: a target key, a colon, then the
/// shortest quoted run up to the next `"`, line breaks included.
#[derive(Debug, Clone)]
pub struct LiteralNewlineEscaper {
    pattern: Regex,
}

/// Output of a single escape pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escaped {
    pub text: String,
    /// Number of field values that were rewritten.
    pub replaced: usize,
}

impl LiteralNewlineEscaper {
    pub fn new() -> Result<Self> {
        Self::with_keys(TARGET_KEYS)
    }

    pub fn with_keys(keys: &[&str]) -> Result<Self> {
        let alternation = keys
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r#"({alternation}):"(?s:(.*?))""#))?;
        debug!("Field pattern: {}", pattern.as_str());
        Ok(Self { pattern })
    }

    #[instrument(skip_all, fields(len = text.len()))]
    pub fn escape(&self, text: &str) -> Escaped {
        let mut replaced = 0;

        let rewritten = self.pattern.replace_all(text, |caps: &Captures| {
            let whole = &caps[0];
            let value = &caps[2];

            match escape_value(value) {
                Some(escaped) => {
                    replaced += 1;
                    debug!("Escaped line breaks in {}", &caps[1]);
                    format!("{}:\"{}\"", &caps[1], escaped)
                }
                None => whole.to_string(),
            }
        });

        Escaped {
            text: rewritten.into_owned(),
            replaced,
        }
    }
}

/// Returns the rewritten value, or `None` when it holds no raw line break.
///
/// CRLF is replaced as a unit before lone LF so it yields a single escape.
/// A lone CR is not a line break here and is left alone.
pub fn escape_value(value: &str) -> Option<String> {
    if !value.contains(['\r', '\n']) {
        return None;
    }

    let escaped = value
        .replace("\r\n", ESCAPED_NEWLINE)
        .replace('\n', ESCAPED_NEWLINE);

    (escaped != value).then_some(escaped)
}
