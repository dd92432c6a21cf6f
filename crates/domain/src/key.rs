/// Derives the canonical lookup key for a group name: trimmed, lower-cased,
/// with every internal whitespace run collapsed to a single `-`.
///
/// The same function runs at write time and at uniqueness-check time, so two
/// equal names can never end up with distinct keys.
pub fn to_key(name: &str) -> String {
    name.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
