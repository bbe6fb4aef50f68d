//! Canonical robot-name sanitation.
//!
//! The host reports names with irregular whitespace (padding around the
//! duplicate-instance suffix varies between host versions).  Every name-keyed
//! structure in the core stores the sanitized form, so two sightings of the
//! same robot always collapse onto one record.

/// Normalize a raw sighted name into the canonical key.
///
/// Deterministic and total: trims the ends and collapses internal whitespace
/// runs to a single space.  Distinct logical opponents (including duplicate
/// instances like `"Walls (2)"`) stay distinct.
pub fn sanitize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
