//! Name availability

use crate::domain::entities::NamedRecord;

/// Check whether `candidate` can name a new record.
///
/// Blank names are never available. Otherwise the name is available when no
/// record in `existing` has exactly that name (case-sensitive).
pub fn is_name_available(candidate: &str, existing: &[NamedRecord]) -> bool {
    !candidate.trim().is_empty() && existing.iter().all(|record| record.name != candidate)
}
