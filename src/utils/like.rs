//! SQL `LIKE` patterns as used by owner search: `%` matches any run of
//! characters, `_` matches exactly one, everything else is literal.

use regex::Regex;

use crate::utils::errors::ApiError;

/// Wraps a search term into the `%term%` form the owner search expects.
pub fn wildcard(term: &str) -> String {
    format!("%{}%", term)
}

/// Translates a `LIKE` pattern into an anchored regular expression source.
pub fn to_regex_source(pattern: &str) -> String {
    let mut source = String::with_capacity(pattern.len() + 2);
    source.push('^');
    let mut literal = [0u8; 4];
    for ch in pattern.chars() {
        match ch {
            '%' => source.push_str(".*"),
            '_' => source.push('.'),
            other => source.push_str(&regex::escape(other.encode_utf8(&mut literal))),
        }
    }
    source.push('$');
    source
}

/// Compiled `LIKE` pattern.
#[derive(Debug, Clone)]
pub struct LikePattern {
    regex: Regex,
}

impl LikePattern {
    pub fn new(pattern: &str) -> Result<Self, ApiError> {
        // `(?s)` lets `%` span newlines the way SQL does.
        let source = format!("(?s){}", to_regex_source(pattern));
        let regex = Regex::new(&source)
            .map_err(|e| ApiError::InvalidData(format!("Invalid search pattern: {}", e)))?;
        Ok(LikePattern { regex })
    }

    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}
