use std::collections::BTreeMap;

/// Punch lists keyed by date key (`dd-mm-yyyy`), as reported by the badge API.
pub type Hours = BTreeMap<String, Vec<String>>;
