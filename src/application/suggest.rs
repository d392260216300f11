//! Similar-command suggestions for unknown names

use tracing::debug;

use crate::application::registry::CommandRegistry;
use crate::domain::CommandDefinition;

/// Similarity threshold: fraction of positionally matching characters over
/// the longer length.
const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Maximum length difference before two names stop being comparable.
const MAX_LENGTH_DELTA: usize = 2;

/// Collect up to `limit` commands similar to an unresolved name.
///
/// Only canonical names are scanned (aliases never suggest), in registration
/// order.
pub fn suggestions<'a>(
    registry: &'a CommandRegistry,
    unknown: &str,
    limit: usize,
) -> Vec<&'a CommandDefinition> {
    let mut found = Vec::new();
    for name in registry.registration_order() {
        if found.len() >= limit {
            break;
        }
        if is_similar(unknown, name) {
            if let Some(definition) = registry.get(name) {
                found.push(definition);
            }
        }
    }
    debug!(unknown, count = found.len(), "collected suggestions");
    found
}

/// Whether `candidate` is close enough to `input` to suggest.
///
/// True when `candidate` starts with `input` as a literal prefix, or when the
/// lengths differ by at most two and more than 60% of the characters match
/// position by position over the longer of the two lengths.
pub fn is_similar(input: &str, candidate: &str) -> bool {
    if input.is_empty() || candidate.is_empty() {
        return false;
    }

    if candidate.starts_with(input) {
        return true;
    }

    let input_len = input.chars().count();
    let candidate_len = candidate.chars().count();
    if input_len.abs_diff(candidate_len) > MAX_LENGTH_DELTA {
        return false;
    }

    let matches = input
        .chars()
        .zip(candidate.chars())
        .filter(|(a, b)| a == b)
        .count();
    matches as f64 / input_len.max(candidate_len) as f64 > SIMILARITY_THRESHOLD
}
