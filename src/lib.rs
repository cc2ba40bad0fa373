//! # Citadel Errors
//!
//! Structured, internationalized error reporting for the Citadel server
//! platform.
//!
//! ## Design Philosophy
//!
//! 1. **One way to raise**: every subsystem reports failures through the same
//!    throw pipeline, so logs and handlers see one consistent shape
//! 2. **Machine-parsable identity**: the message code is a stable tag that
//!    doubles as the translation key
//! 3. **Deterministic rendering**: the same code and parameters always
//!    produce the same string, independent of insertion or hashing order
//! 4. **The error path may not fail**: translation misses, missing loggers,
//!    and uninitialized registries all degrade silently inside the pipeline
//! 5. **Exactly one log entry per raise**, unless explicitly suppressed
//!
//! ## Pipeline
//!
//! A raise runs child aggregation, parameter normalization, message
//! rendering, and log routing, in that order, synchronously, before the
//! error object is handed back for propagation:
//!
//! - child errors fold their rendered forms into the `__ERRVAL__` parameter
//! - parameter keys are rewritten into the `__NAME__` bracket convention
//! - the translation collaborator gets first shot at the message; when it
//!   signals "not found" (by returning the code unchanged) the renderer
//!   synthesizes `CODE, __KEY__ => value, ...` with sorted keys
//! - the logging router emits the single log entry through the caller's
//!   sink, the registry's platform logger, or the last-resort system channel
//!
//! ## Quick Start
//!
//! ```rust
//! use citadel_errors::{ErrorBuilder, NullTranslator, Reporter, StaticRegistry, definitions};
//! use std::sync::Arc;
//!
//! let reporter = Reporter::new(
//!     Arc::new(NullTranslator),
//!     Arc::new(StaticRegistry::new()),
//! );
//!
//! let err = reporter.throw(
//!     ErrorBuilder::new(definitions::ERR_FILE_MISSING).param("filename", "a.txt"),
//! );
//!
//! // Stable identity for handlers:
//! assert!(err.matches(&definitions::ERR_FILE_MISSING));
//! // Deterministic rendered form (no translation catalog configured):
//! assert_eq!(
//!     err.to_string(),
//!     "I18N_CITADEL_ERR_FILE_MISSING, __FILENAME__ => a.txt"
//! );
//! ```
//!
//! ## Catching and Re-Raising
//!
//! Errors propagate as ordinary `Result` values; handlers inspect fields or
//! pass the instance along unchanged:
//!
//! ```rust
//! use citadel_errors::{ErrorBuilder, NullTranslator, Reporter, Result, StaticRegistry, definitions};
//! use std::sync::Arc;
//!
//! fn inner(reporter: &Reporter) -> Result<()> {
//!     Err(reporter.throw(ErrorBuilder::new(definitions::ERR_CONNECTION_TIMEOUT)))
//! }
//!
//! fn outer(reporter: &Reporter) -> Result<()> {
//!     match inner(reporter) {
//!         Err(err) if err.matches(&definitions::ERR_CONNECTION_TIMEOUT) => {
//!             // Same instance, no re-rendering, no second log entry.
//!             Err(reporter.rethrow(err))
//!         }
//!         other => other,
//!     }
//! }
//!
//! let reporter = Reporter::new(Arc::new(NullTranslator), Arc::new(StaticRegistry::new()));
//! assert!(outer(&reporter).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fmt;
use std::result;
use std::sync::Arc;

pub mod children;
pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod logging;
pub mod params;
pub mod registry;
pub mod render;

pub use children::*;
pub use codes::*;
pub use logging::*;
pub use params::*;
pub use registry::*;
pub use render::*;

/// Type alias for Results using the platform error type.
pub type Result<T> = result::Result<T, PlatformError>;

// ============================================================================
// Error Object
// ============================================================================

/// The carrier type for a raised platform error.
///
/// Holds the message code, the caller's raw parameters, the ordered child
/// values, an optional errno-like numeric code, and the message rendered at
/// raise time. All fields are read-only after construction; re-raising
/// propagates the same instance unchanged.
///
/// Instances are produced by [`Reporter::throw`] and consumed by ordinary
/// `Result` handling. `Display` yields the rendered message, so a top-level
/// handler that stringifies the error shows exactly what was logged.
#[must_use = "errors should be propagated or inspected"]
#[derive(Debug, Clone)]
pub struct PlatformError {
    code: MessageCode,
    params: BTreeMap<String, String>,
    children: SmallVec<[ChildValue; 2]>,
    numeric_code: Option<i64>,
    rendered: String,
}

impl PlatformError {
    /// The untranslated, unmodified message code.
    ///
    /// This is the stable identity for programmatic matching, distinct from
    /// the rendered message.
    #[inline]
    #[must_use]
    pub fn message_code(&self) -> &str {
        self.code.as_str()
    }

    /// The message code as its typed form.
    #[inline]
    #[must_use]
    pub const fn code(&self) -> &MessageCode {
        &self.code
    }

    /// True if this error carries the given message code.
    #[inline]
    #[must_use]
    pub fn matches(&self, code: &MessageCode) -> bool {
        self.code == *code
    }

    /// The raw parameters as the caller supplied them.
    ///
    /// Keys here are un-normalized; the bracket convention is applied to
    /// working copies during rendering only.
    #[inline]
    #[must_use]
    pub const fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// The ordered child values attached at raise time.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[ChildValue] {
        &self.children
    }

    /// The caller-supplied errno-like code, passed through uninterpreted.
    #[inline]
    #[must_use]
    pub const fn numeric_code(&self) -> Option<i64> {
        self.numeric_code
    }

    /// The message rendered at raise time.
    #[inline]
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.children.iter().find_map(|child| match child {
            ChildValue::Error(err) => Some(err.as_ref() as &(dyn std::error::Error + 'static)),
            ChildValue::Text(_) => None,
        })
    }
}

// ============================================================================
// Error Builder
// ============================================================================

/// Fluent specification of an error to be raised.
///
/// Collects the message code, parameters, children, numeric code, and the
/// per-raise log directive, then hands everything to [`Reporter::throw`].
/// The directive exists only here; it is consumed during routing and never
/// stored on the resulting [`PlatformError`].
///
/// # Example
///
/// ```rust
/// use citadel_errors::{ErrorBuilder, LogDirective, definitions};
///
/// let builder = ErrorBuilder::new(definitions::ERR_FILE_MISSING)
///     .param("filename", "a.txt")
///     .numeric_code(2)
///     .log(LogDirective::Suppress);
/// ```
#[derive(Debug)]
pub struct ErrorBuilder {
    code: MessageCode,
    params: BTreeMap<String, String>,
    children: SmallVec<[ChildValue; 2]>,
    numeric_code: Option<i64>,
    directive: LogDirective,
}

impl ErrorBuilder {
    /// Start a specification for the given message code.
    #[inline]
    pub fn new(code: MessageCode) -> Self {
        Self {
            code,
            params: BTreeMap::new(),
            children: SmallVec::new(),
            numeric_code: None,
            directive: LogDirective::Standard,
        }
    }

    /// Add a parameter. Raw key; normalization happens at render time.
    #[inline]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Append a child value (a structured error or plain text).
    #[inline]
    pub fn child(mut self, child: impl Into<ChildValue>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Attach an errno-like numeric code, passed through uninterpreted.
    #[inline]
    pub fn numeric_code(mut self, code: i64) -> Self {
        self.numeric_code = Some(code);
        self
    }

    /// Set the per-raise log directive (default: standard entry through the
    /// fallback chain).
    #[inline]
    pub fn log(mut self, directive: LogDirective) -> Self {
        self.directive = directive;
        self
    }

    /// Shorthand for [`LogDirective::Suppress`].
    #[inline]
    pub fn suppress_log(self) -> Self {
        self.log(LogDirective::Suppress)
    }

    /// Raise through the given reporter. Equivalent to
    /// [`Reporter::throw`].
    #[inline]
    pub fn throw(self, reporter: &Reporter) -> PlatformError {
        reporter.throw(self)
    }
}

// ============================================================================
// Reporter
// ============================================================================

/// The injected capability bundle for raising errors.
///
/// Holds the translation collaborator and the logging router (which in turn
/// holds the context registry). One reporter is typically constructed at
/// platform startup and shared by reference; tests construct their own with
/// fake collaborators.
#[derive(Clone)]
pub struct Reporter {
    translator: Arc<dyn Translator>,
    router: LogRouter,
}

impl Reporter {
    /// Create a reporter from a translator and a context registry.
    #[must_use]
    pub fn new(translator: Arc<dyn Translator>, registry: Arc<dyn ContextRegistry>) -> Self {
        Self {
            translator,
            router: LogRouter::new(registry),
        }
    }

    /// Raise a new error.
    ///
    /// Runs the full pipeline synchronously: aggregate children into a
    /// working copy of the params, normalize the keys, render the message,
    /// dispatch the single logging attempt, then return the structured
    /// object for the caller to propagate with `Err(...)`.
    ///
    /// The caller's raw params are stored on the object untouched; only the
    /// working copies see aggregation and normalization, so throwing (and
    /// re-inspecting) the same data twice can never double-apply either.
    pub fn throw(&self, builder: ErrorBuilder) -> PlatformError {
        let ErrorBuilder {
            code,
            params,
            children,
            numeric_code,
            directive,
        } = builder;

        let mut merged = params.clone();
        aggregate_into(&children, &mut merged);
        let normalized = normalize_params(&merged);
        let rendered = render_message(code.as_str(), &normalized, self.translator.as_ref());

        self.router.dispatch(&rendered, &directive);

        PlatformError {
            code,
            params,
            children,
            numeric_code,
            rendered,
        }
    }

    /// Re-raise an existing error.
    ///
    /// Identity by construction: the instance comes back unchanged, with no
    /// re-rendering and no new log entry. Typed so a re-raise cannot
    /// accidentally reconstruct or mutate the error.
    #[inline]
    pub fn rethrow(&self, err: PlatformError) -> PlatformError {
        err
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}
