//! Key Derivation Module
//!
//! Builds deterministic cache keys from identifying parameters, so repeated
//! lookups with the same parameters collide on the same entry. Callers that
//! need full control can always pass an explicit key instead.

// == Derive Key ==
/// Joins a namespace and its identifying parts with `:` separators.
///
/// `derive_key("pokemon", &["42"])` yields `"pokemon:42"`. The mapping is
/// deterministic: equal inputs always produce the same key.
pub fn derive_key(namespace: &str, parts: &[&str]) -> String {
    let mut key = String::from(namespace);
    for part in parts {
        key.push(':');
        key.push_str(part);
    }
    key
}
