use serde_json::Value;

use crate::error::{Result, TransformError};

#[derive(Clone, Copy, Debug)]
pub struct PreprocessOpts {
    /// Retry failed parses after dropping trailing commas and wrapping bare members in `{}`.
    pub lenient: bool,
}

impl Default for PreprocessOpts {
    fn default() -> Self {
        Self { lenient: true }
    }
}

/// Turns pasted text into a JSON value. The strict parser's message is the
/// one reported when every attempt fails.
pub fn preprocess(raw: &str, opts: &PreprocessOpts) -> Result<Value> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw).trim();
    let strict_err = match serde_json::from_str::<Value>(text) {
        Ok(v) => return Ok(v),
        Err(e) => e.to_string(),
    };
    if !opts.lenient || text.is_empty() {
        return Err(TransformError::Parse(strict_err));
    }

    let mut fixed = strip_trailing_commas(text);
    if !fixed.starts_with('{') && !fixed.starts_with('[') {
        fixed = strip_trailing_commas(&format!("{{{}}}", fixed));
    }
    match serde_json::from_str::<Value>(&fixed) {
        Ok(v) => {
            tracing::debug!("input repaired before parsing");
            Ok(v)
        }
        Err(_) => Err(TransformError::Parse(strict_err)),
    }
}

// Drops commas directly followed (ignoring whitespace) by `}` or `]`, outside strings.
fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_str = false;
    let mut escaped = false;
    for (i, &ch) in chars.iter().enumerate() {
        if in_str {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_str = false;
            }
            continue;
        }
        match ch {
            '"' => {
                in_str = true;
                out.push(ch);
            }
            ',' => {
                let next = chars[i + 1..].iter().copied().find(|c| !c.is_whitespace());
                if !matches!(next, Some('}') | Some(']')) {
                    out.push(ch);
                }
            }
            _ => out.push(ch),
        }
    }
    out
}
