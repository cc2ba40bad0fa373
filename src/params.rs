//! Parameter key normalization for rendered error messages.
//!
//! Every parameter that reaches a rendered message or a translation template
//! is keyed by the fixed bracket convention: `filename` becomes
//! `__FILENAME__`-style `__<name>__`. Translators interpolate by replacing
//! those bracketed tokens, and the untranslated trailer prints them verbatim,
//! so no parameter may ever appear un-bracketed in output.
//!
//! # Determinism
//!
//! Normalization produces a fresh [`BTreeMap`], never mutating the caller's
//! map. `BTreeMap` iteration is lexicographic, so the processing order (and
//! any intermediate state a caller logs) is deterministic regardless of how
//! the raw map was populated. Re-normalizing an already-normalized map yields
//! the same map: stripping the underscores of `__X__` recovers `X`.
//!
//! # Collision rule
//!
//! `__X_` and `X` both normalize to `__X__`. When two raw keys collide, the
//! lexicographically later raw key wins.

use std::collections::BTreeMap;

/// Wrap a raw parameter name in the fixed bracket convention.
///
/// Leading and trailing runs of underscores are stripped first, the core is
/// uppercased, then exactly two underscores are prepended and two appended.
/// A key consisting only of underscores normalizes to `____`.
///
/// # Example
///
/// ```rust
/// use citadel_errors::bracket_key;
///
/// assert_eq!(bracket_key("filename"), "__FILENAME__");
/// assert_eq!(bracket_key("__FILENAME__"), "__FILENAME__");
/// assert_eq!(bracket_key("_FILENAME___"), "__FILENAME__");
/// ```
#[must_use]
pub fn bracket_key(raw: &str) -> String {
    let core = raw.trim_matches('_');
    let mut key = String::with_capacity(core.len() + 4);
    key.push_str("__");
    for c in core.chars() {
        key.extend(c.to_uppercase());
    }
    key.push_str("__");
    key
}

/// Produce a normalized copy of a parameter map.
///
/// Every key is rewritten via [`bracket_key`]; values are copied untouched.
/// The input map is not modified, so rendering the same error twice cannot
/// double-apply the bracket convention.
#[must_use]
pub fn normalize_params(raw: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut normalized = BTreeMap::new();
    for (key, value) in raw {
        normalized.insert(bracket_key(key), value.clone());
    }
    normalized
}
