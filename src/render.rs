//! Message rendering: translation lookup with a deterministic fallback.
//!
//! The renderer asks the translation collaborator for a localized message.
//! The collaborator has no separate error channel; returning the code
//! unchanged is the "no translation found" sentinel. Any other return value
//! is taken as a fully interpolated, successful translation (interpolation
//! correctness is the translator's own contract).
//!
//! When untranslated, the renderer synthesizes a message from the raw code
//! and the normalized parameters in lexicographic key order, so output never
//! depends on insertion order, hashing order, or time:
//!
//! ```text
//! ERR_FILE_MISSING, __FILENAME__ => a.txt
//! ```

use std::collections::{BTreeMap, HashMap};

/// Translation lookup collaborator.
///
/// Implementations return a fully interpolated localized string, or the code
/// unchanged to signal "no translation found". Params arrive with keys
/// already in the bracket convention (`__NAME__`).
pub trait Translator: Send + Sync {
    /// Translate a message code, interpolating the supplied parameters.
    fn translate(&self, code: &str, params: &BTreeMap<String, String>) -> String;
}

/// Translator that never finds a translation.
///
/// Useful as a default in deployments without a catalog and in tests that
/// exercise the untranslated rendering path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTranslator;

impl Translator for NullTranslator {
    fn translate(&self, code: &str, _params: &BTreeMap<String, String>) -> String {
        code.to_string()
    }
}

/// Static in-memory message catalog with bracket-token interpolation.
///
/// Templates reference parameters by their bracketed key, which the
/// translator replaces with the parameter value:
///
/// ```rust
/// use citadel_errors::{CatalogTranslator, Translator};
/// use std::collections::BTreeMap;
///
/// let catalog = CatalogTranslator::new(&[
///     ("ERR_FILE_MISSING", "File __FILENAME__ could not be found"),
/// ]);
///
/// let mut params = BTreeMap::new();
/// params.insert("__FILENAME__".to_string(), "a.txt".to_string());
/// assert_eq!(
///     catalog.translate("ERR_FILE_MISSING", &params),
///     "File a.txt could not be found"
/// );
/// // Unknown codes come back unchanged.
/// assert_eq!(catalog.translate("ERR_UNKNOWN", &params), "ERR_UNKNOWN");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    entries: HashMap<&'static str, &'static str>,
}

impl CatalogTranslator {
    /// Build a catalog from `(code, template)` pairs.
    #[must_use]
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, code: &str, params: &BTreeMap<String, String>) -> String {
        let Some(template) = self.entries.get(code) else {
            return code.to_string();
        };
        let mut message = (*template).to_string();
        for (key, value) in params {
            if message.contains(key.as_str()) {
                message = message.replace(key.as_str(), value);
            }
        }
        message
    }
}

/// Produce the final display string for a code and its normalized params.
///
/// Translation is attempted first; a return value different from the code is
/// the final message. Otherwise the code itself is the message, with a
/// `", <KEY> => <value>"` trailer per parameter in lexicographic order when
/// params are non-empty.
#[must_use]
pub fn render_message(
    code: &str,
    params: &BTreeMap<String, String>,
    translator: &dyn Translator,
) -> String {
    let translated = translator.translate(code, params);
    if translated != code {
        return translated;
    }
    if params.is_empty() {
        return translated;
    }

    let mut message = String::from(code);
    for (key, value) in params {
        message.push_str(", ");
        message.push_str(key);
        message.push_str(" => ");
        message.push_str(value);
    }
    message
}
