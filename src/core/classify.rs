//! Secret classification.
//!
//! Decides from a field *name* alone whether its value must be masked.
//! Matching is plain substring containment, so `GOOGLE_CLIENT_SECRET` is
//! sensitive while `GOOGLE_CLIENT_ID` is not, and an incidental match such
//! as `MONKEY_COUNT` is masked too. There is no allow-list.

use crate::core::constants::SENSITIVE_MARKERS;

/// Whether a field or variable name denotes a sensitive value.
pub fn is_sensitive(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    SENSITIVE_MARKERS.iter().any(|marker| upper.contains(marker))
}
