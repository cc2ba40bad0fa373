//! Message code identity for platform errors.
//!
//! A message code is the stable, untranslated string identity of an error
//! kind (for example `I18N_CITADEL_ERR_FILE_MISSING`). It serves two roles at
//! once:
//!
//! - **Translation key**: the renderer hands the code to the translation
//!   collaborator to obtain a localized message.
//! - **Machine-matchable tag**: handlers compare codes to decide how to react
//!   without parsing rendered text.
//!
//! # Governance
//!
//! Codes are validated once, at the construction boundary:
//!
//! - `MessageCode::from_static` is a `const fn` that rejects empty codes at
//!   compile time. All codes in [`crate::definitions`] go through it.
//! - `MessageCode::parse` validates runtime-supplied codes and returns
//!   [`CodeError`] instead of panicking.
//!
//! An empty code is a construction error and is never silently defaulted.
//! Everything downstream (rendering, logging, matching) can therefore assume
//! a non-empty code without re-checking.
//!
//! # Example
//!
//! ```rust
//! use citadel_errors::MessageCode;
//!
//! const ERR_FILE_MISSING: MessageCode = MessageCode::from_static("ERR_FILE_MISSING");
//!
//! let dynamic = MessageCode::parse("ERR_FILE_MISSING").unwrap();
//! assert_eq!(dynamic, ERR_FILE_MISSING);
//! assert!(MessageCode::parse("").is_err());
//! ```

use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// The untranslated string identity of an error kind.
///
/// Guaranteed non-empty. Immutable after creation; the raising code path
/// sets it exactly once and handlers only ever read it.
///
/// Uses `Cow<'static, str>` so the common case (codes from
/// [`crate::definitions`]) stays allocation-free while runtime-assembled
/// codes remain possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageCode(Cow<'static, str>);

impl MessageCode {
    /// Create a message code from a static string, validated at compile time.
    ///
    /// # Panics
    ///
    /// Panics at compile time (in const contexts) if the code is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use citadel_errors::MessageCode;
    /// const ERR_X: MessageCode = MessageCode::from_static("ERR_X");
    /// ```
    #[inline]
    pub const fn from_static(code: &'static str) -> Self {
        assert!(!code.is_empty(), "message code must not be empty");
        Self(Cow::Borrowed(code))
    }

    /// Validate a runtime-supplied code.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::Empty`] if the code is empty.
    #[inline]
    pub fn parse(code: impl Into<String>) -> Result<Self, CodeError> {
        let code = code.into();
        if code.is_empty() {
            return Err(CodeError::Empty);
        }
        Ok(Self(Cow::Owned(code)))
    }

    /// Get the raw code string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MessageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error type for message code validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// The supplied message code was empty.
    #[error("message code must not be empty")]
    Empty,
}

/// Define message codes as const statics with compile-time validation.
///
/// Each entry becomes a `pub const` [`MessageCode`] carrying a generated doc
/// comment. Additional attributes (including extra doc comments) can be
/// attached per entry.
///
/// # Example
///
/// ```rust
/// mod platform_codes {
///     citadel_errors::define_message_codes! {
///         /// Raised when a required file cannot be found.
///         ERR_FILE_MISSING = "I18N_CITADEL_ERR_FILE_MISSING";
///         ERR_FILE_UNREADABLE = "I18N_CITADEL_ERR_FILE_UNREADABLE";
///     }
/// }
///
/// assert_eq!(platform_codes::ERR_FILE_MISSING.as_str(), "I18N_CITADEL_ERR_FILE_MISSING");
/// ```
#[macro_export]
macro_rules! define_message_codes {
    ($( $(#[$meta:meta])* $name:ident = $code:literal; )+) => {
        $(
            #[doc = concat!("Message code `", $code, "`.")]
            $(#[$meta])*
            pub const $name: $crate::MessageCode = $crate::MessageCode::from_static($code);
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    define_message_codes! {
        TEST_CODE = "I18N_CITADEL_TEST_CODE";
    }

    #[test]
    fn from_static_preserves_code() {
        const CODE: MessageCode = MessageCode::from_static("ERR_X");
        assert_eq!(CODE.as_str(), "ERR_X");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(MessageCode::parse(""), Err(CodeError::Empty));
    }

    #[test]
    fn parse_accepts_nonempty() {
        let code = MessageCode::parse("ERR_FILE_MISSING").unwrap();
        assert_eq!(code.as_str(), "ERR_FILE_MISSING");
    }

    #[test]
    fn static_and_parsed_codes_compare_equal() {
        let parsed = MessageCode::parse("I18N_CITADEL_TEST_CODE").unwrap();
        assert_eq!(parsed, TEST_CODE);
    }

    #[test]
    fn display_is_the_raw_code() {
        assert_eq!(TEST_CODE.to_string(), "I18N_CITADEL_TEST_CODE");
    }
}
