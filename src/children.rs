//! Child error values and their aggregation into the parent's parameters.
//!
//! An error may carry an ordered sequence of nested child values, each either
//! another structured error or a plain text fragment. At raise time their
//! rendered forms are folded into a single accumulated string and merged into
//! the parameter map under [`ERRVAL_KEY`], so the parent's displayed value
//! includes every child's contribution.
//!
//! The two shapes are a tagged variant rather than runtime type inspection:
//! both answer [`ChildValue::rendered_form`], and the aggregator treats them
//! uniformly. There is no singular `child` field anywhere in the API; a lone
//! child is simply a one-element sequence.

use crate::PlatformError;
use std::collections::BTreeMap;

/// Raw parameter key that receives the accumulated child error value.
///
/// Normalization later rewrites it to `__ERRVAL__` like any other key.
pub const ERRVAL_KEY: &str = "ERRVAL";

/// A nested error value attached to a parent error.
#[derive(Debug, Clone)]
pub enum ChildValue {
    /// A structured child error; contributes its fully rendered message.
    Error(Box<PlatformError>),
    /// A plain text fragment; contributes its text verbatim.
    Text(String),
}

impl ChildValue {
    /// The string form this child contributes to the accumulated value.
    #[inline]
    #[must_use]
    pub fn rendered_form(&self) -> &str {
        match self {
            Self::Error(err) => err.rendered(),
            Self::Text(text) => text,
        }
    }

    /// True if this child contributes no text (and therefore no separator).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rendered_form().is_empty()
    }
}

impl From<PlatformError> for ChildValue {
    fn from(err: PlatformError) -> Self {
        Self::Error(Box::new(err))
    }
}

impl From<String> for ChildValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ChildValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Fold child values into the raw parameter map under [`ERRVAL_KEY`].
///
/// Empty children are skipped silently. The remaining rendered forms are
/// joined with single spaces; if the map already holds a non-empty
/// accumulated value (a caller-supplied `ERRVAL` param), a space is inserted
/// before appending. With no contributing children the map is left untouched.
///
/// Called exactly once per raise, on a working copy of the caller's params.
pub fn aggregate_into(children: &[ChildValue], params: &mut BTreeMap<String, String>) {
    let mut accumulated = String::new();
    for child in children {
        let rendered = child.rendered_form();
        if rendered.is_empty() {
            continue;
        }
        if !accumulated.is_empty() {
            accumulated.push(' ');
        }
        accumulated.push_str(rendered);
    }
    if accumulated.is_empty() {
        return;
    }

    let slot = params.entry(ERRVAL_KEY.to_string()).or_default();
    if !slot.is_empty() {
        slot.push(' ');
    }
    slot.push_str(&accumulated);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_params() -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    #[test]
    fn no_children_leaves_params_unchanged() {
        let mut params = empty_params();
        aggregate_into(&[], &mut params);
        assert!(params.is_empty());
    }

    #[test]
    fn empty_text_children_are_skipped() {
        let mut params = empty_params();
        aggregate_into(&[ChildValue::from("")], &mut params);
        assert!(params.is_empty());
    }

    #[test]
    fn single_child_contributes_without_separator() {
        let mut params = empty_params();
        aggregate_into(&[ChildValue::from("boom")], &mut params);
        assert_eq!(params[ERRVAL_KEY], "boom");
    }

    #[test]
    fn two_children_join_with_one_space() {
        let mut params = empty_params();
        aggregate_into(
            &[ChildValue::from("first"), ChildValue::from("second")],
            &mut params,
        );
        assert_eq!(params[ERRVAL_KEY], "first second");
    }

    #[test]
    fn empty_child_between_others_adds_no_extra_space() {
        let mut params = empty_params();
        aggregate_into(
            &[
                ChildValue::from("first"),
                ChildValue::from(""),
                ChildValue::from("second"),
            ],
            &mut params,
        );
        assert_eq!(params[ERRVAL_KEY], "first second");
    }

    #[test]
    fn preexisting_value_gets_space_before_append() {
        let mut params = empty_params();
        params.insert(ERRVAL_KEY.to_string(), "earlier".to_string());
        aggregate_into(&[ChildValue::from("later")], &mut params);
        assert_eq!(params[ERRVAL_KEY], "earlier later");
    }

    #[test]
    fn preexisting_empty_value_gets_no_leading_space() {
        let mut params = empty_params();
        params.insert(ERRVAL_KEY.to_string(), String::new());
        aggregate_into(&[ChildValue::from("only")], &mut params);
        assert_eq!(params[ERRVAL_KEY], "only");
    }

    #[test]
    fn no_contribution_leaves_preexisting_value_alone() {
        let mut params = empty_params();
        params.insert(ERRVAL_KEY.to_string(), "kept".to_string());
        aggregate_into(&[ChildValue::from("")], &mut params);
        assert_eq!(params[ERRVAL_KEY], "kept");
    }
}
