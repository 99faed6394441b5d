//! Regex-derived setting parts

use regex::Regex;

/// Return the text captured by group `match_index` when `pattern` matches
/// `text`.
///
/// Group 0 is the whole match. A pattern that fails to compile, a text that
/// does not match, and a group that did not take part in the match all
/// yield `None`.
pub fn extract_pattern_part(pattern: &str, text: &str, match_index: usize) -> Option<String> {
    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::debug!(pattern, error = %e, "Ignoring invalid setting pattern");
            return None;
        }
    };

    re.captures(text)?
        .get(match_index)
        .map(|m| m.as_str().to_string())
}
