//! Name normalization for context identifiers.
//!
//! Context names arrive as free-form identifiers (`user_profile`,
//! `Billing`, `order-line`). Templates need two forms of each:
//!
//! | Form     | Example        | Used for                              |
//! |----------|----------------|---------------------------------------|
//! | `lower`  | `user_profile` | destination paths, package imports   |
//! | `pascal` | `UserProfile`  | type names inside rendered templates  |
//!
//! None of these functions fail. Garbage in yields an empty or degenerate
//! token rather than an error; callers decide whether that matters.

use std::fmt;

/// Characters that separate segments of a compound identifier.
const SEPARATORS: [char; 3] = ['_', '-', ' '];

/// A normalized context name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextName {
    lower: String,
    pascal: String,
}

impl ContextName {
    /// Trimmed, lower-cased copy of the raw identifier.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Capitalized compound form (`user_profile` -> `UserProfile`).
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    pub fn into_parts(self) -> (String, String) {
        (self.lower, self.pascal)
    }
}

impl fmt::Display for ContextName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lower)
    }
}

/// Normalize a raw identifier into its lower and Pascal forms.
pub fn normalize(raw: &str) -> ContextName {
    let lower = raw.trim().to_lowercase();
    let pascal = pascal_case(&lower);
    ContextName { lower, pascal }
}

/// Split on `_`, `-` and space, capitalize each non-empty segment, and join.
///
/// Only the first character of each segment is upper-cased; the rest is
/// lower-cased, so `HTTP_server` becomes `HttpServer`.
pub fn pascal_case(s: &str) -> String {
    s.split(SEPARATORS.as_slice())
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Turn a comma-delimited argument into a list of context names.
///
/// Tokens are trimmed and lower-cased; empty tokens are dropped. Order and
/// duplicates are preserved.
pub fn split_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
