//! Convenience macros for raising errors from deep call stacks.
//!
//! Both macros expand to an early `return Err(...)`, so they are usable only
//! in functions returning [`crate::Result`] (or any `Result` with a
//! compatible error type).
//!
//! # Rules
//!
//! 1. **Parameter keys must be string literals** - the parameter schema of a
//!    message code is part of its contract and should be greppable.
//! 2. Values may be any `Into<String>` expression.
//!
//! # Usage
//!
//! ```rust
//! use citadel_errors::{throw, NullTranslator, Reporter, Result, StaticRegistry, definitions};
//! use std::sync::Arc;
//!
//! fn load_config(reporter: &Reporter, path: &str) -> Result<()> {
//!     if !path.ends_with(".conf") {
//!         throw!(reporter, definitions::ERR_CONFIG_PARSE_FAILED, "filename" => path);
//!     }
//!     Ok(())
//! }
//!
//! let reporter = Reporter::new(Arc::new(NullTranslator), Arc::new(StaticRegistry::new()));
//! let err = load_config(&reporter, "broken.txt").unwrap_err();
//! assert_eq!(err.message_code(), "I18N_CITADEL_ERR_CONFIG_PARSE_FAILED");
//! ```

/// Raise a new error: construct, render, log, and return `Err`.
///
/// Expands to `return Err(reporter.throw(...))`. Parameter keys must be
/// string literals.
///
/// ```rust
/// # use citadel_errors::{throw, MessageCode, NullTranslator, Reporter, Result, StaticRegistry};
/// # use std::sync::Arc;
/// fn fail(reporter: &Reporter) -> Result<()> {
///     throw!(reporter, MessageCode::from_static("ERR_X"), "key" => "value");
/// }
/// # let reporter = Reporter::new(Arc::new(NullTranslator), Arc::new(StaticRegistry::new()));
/// # assert!(fail(&reporter).is_err());
/// ```
#[macro_export]
macro_rules! throw {
    ($reporter:expr, $code:expr $(, $key:literal => $value:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut builder = $crate::ErrorBuilder::new($code);
        $( builder = builder.param($key, $value); )*
        return ::core::result::Result::Err($reporter.throw(builder));
    }};
}

/// Re-raise an existing error unchanged: no re-rendering, no re-logging.
///
/// ```rust
/// # use citadel_errors::{rethrow, PlatformError, Reporter, Result};
/// fn propagate(reporter: &Reporter, err: PlatformError) -> Result<()> {
///     rethrow!(reporter, err);
/// }
/// ```
#[macro_export]
macro_rules! rethrow {
    ($reporter:expr, $err:expr) => {
        return ::core::result::Result::Err($reporter.rethrow($err))
    };
}
