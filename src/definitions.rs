//! Pre-defined message codes for the Citadel platform.
//!
//! Codes follow the `I18N_CITADEL_ERR_<SUBSYSTEM>_<CONDITION>` convention so
//! translation catalogs can key on them directly. The constants here are the
//! codes the core platform raises itself; subsystems define their own codes
//! with [`crate::define_message_codes`] in the same style.
//!
//! Adding a code here means adding a catalog entry for every supported
//! locale. Until the catalog catches up, the renderer's untranslated
//! fallback keeps the output machine-parsable.

// -----------------------------------------------------------------------------
// System - process lifecycle and platform internals
// -----------------------------------------------------------------------------
crate::define_message_codes! {
    ERR_SYSTEM_INIT_FAILED = "I18N_CITADEL_ERR_SYSTEM_INIT_FAILED";
    ERR_SYSTEM_SHUTDOWN_FAILED = "I18N_CITADEL_ERR_SYSTEM_SHUTDOWN_FAILED";
    ERR_SYSTEM_INVALID_STATE = "I18N_CITADEL_ERR_SYSTEM_INVALID_STATE";
    ERR_SYSTEM_CONTEXT_MISSING = "I18N_CITADEL_ERR_SYSTEM_CONTEXT_MISSING";
}

// -----------------------------------------------------------------------------
// Config - configuration loading and validation
// -----------------------------------------------------------------------------
crate::define_message_codes! {
    ERR_CONFIG_PARSE_FAILED = "I18N_CITADEL_ERR_CONFIG_PARSE_FAILED";
    ERR_CONFIG_VALIDATION_FAILED = "I18N_CITADEL_ERR_CONFIG_VALIDATION_FAILED";
    ERR_CONFIG_MISSING_REQUIRED = "I18N_CITADEL_ERR_CONFIG_MISSING_REQUIRED";
    ERR_CONFIG_INVALID_VALUE = "I18N_CITADEL_ERR_CONFIG_INVALID_VALUE";
}

// -----------------------------------------------------------------------------
// IO - filesystem and network operations
// -----------------------------------------------------------------------------
crate::define_message_codes! {
    ERR_FILE_MISSING = "I18N_CITADEL_ERR_FILE_MISSING";
    ERR_FILE_UNREADABLE = "I18N_CITADEL_ERR_FILE_UNREADABLE";
    ERR_FILE_WRITE_FAILED = "I18N_CITADEL_ERR_FILE_WRITE_FAILED";
    ERR_CONNECTION_FAILED = "I18N_CITADEL_ERR_CONNECTION_FAILED";
    ERR_CONNECTION_TIMEOUT = "I18N_CITADEL_ERR_CONNECTION_TIMEOUT";
}

// -----------------------------------------------------------------------------
// Auth - authentication and sessions
// -----------------------------------------------------------------------------
crate::define_message_codes! {
    ERR_AUTH_LOGIN_FAILED = "I18N_CITADEL_ERR_AUTH_LOGIN_FAILED";
    ERR_AUTH_SESSION_EXPIRED = "I18N_CITADEL_ERR_AUTH_SESSION_EXPIRED";
    ERR_AUTH_PERMISSION_DENIED = "I18N_CITADEL_ERR_AUTH_PERMISSION_DENIED";
}

// -----------------------------------------------------------------------------
// Workflow - workflow engine activity
// -----------------------------------------------------------------------------
crate::define_message_codes! {
    ERR_WORKFLOW_CREATE_FAILED = "I18N_CITADEL_ERR_WORKFLOW_CREATE_FAILED";
    ERR_WORKFLOW_INVALID_TRANSITION = "I18N_CITADEL_ERR_WORKFLOW_INVALID_TRANSITION";
    ERR_WORKFLOW_ACTIVITY_FAILED = "I18N_CITADEL_ERR_WORKFLOW_ACTIVITY_FAILED";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn code_values_follow_platform_convention() {
        for code in [
            &ERR_SYSTEM_INIT_FAILED,
            &ERR_CONFIG_PARSE_FAILED,
            &ERR_FILE_MISSING,
            &ERR_AUTH_LOGIN_FAILED,
            &ERR_WORKFLOW_CREATE_FAILED,
        ] {
            assert!(code.as_str().starts_with("I18N_CITADEL_ERR_"));
        }
    }

    #[test]
    fn code_values_are_unique() {
        let all = [
            ERR_SYSTEM_INIT_FAILED,
            ERR_SYSTEM_SHUTDOWN_FAILED,
            ERR_SYSTEM_INVALID_STATE,
            ERR_SYSTEM_CONTEXT_MISSING,
            ERR_CONFIG_PARSE_FAILED,
            ERR_CONFIG_VALIDATION_FAILED,
            ERR_CONFIG_MISSING_REQUIRED,
            ERR_CONFIG_INVALID_VALUE,
            ERR_FILE_MISSING,
            ERR_FILE_UNREADABLE,
            ERR_FILE_WRITE_FAILED,
            ERR_CONNECTION_FAILED,
            ERR_CONNECTION_TIMEOUT,
            ERR_AUTH_LOGIN_FAILED,
            ERR_AUTH_SESSION_EXPIRED,
            ERR_AUTH_PERMISSION_DENIED,
            ERR_WORKFLOW_CREATE_FAILED,
            ERR_WORKFLOW_INVALID_TRANSITION,
            ERR_WORKFLOW_ACTIVITY_FAILED,
        ];
        let unique: BTreeSet<_> = all.iter().map(|code| code.as_str()).collect();
        assert_eq!(unique.len(), all.len());
    }
}
