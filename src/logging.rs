//! Log entry model and per-raise routing.
//!
//! Every raised error produces exactly one logging attempt, unless the
//! caller explicitly suppresses it. Routing is synchronous and completes
//! before the error propagates; a failure anywhere in the logging path is
//! degraded internally and never reaches the thrower.
//!
//! # Routing state machine (per raise)
//!
//! - **Standard** (no directive): build the standard entry
//!   (`"Exception: <rendered>"`, system facility, error priority, caller
//!   level 1) and route it through the fallback chain.
//! - **Suppress**: skip all logging.
//! - **Override**: start from the standard entry, overwrite only the
//!   supplied fields. An explicit sink receives the final entry directly and
//!   the fallback chain is untouched; otherwise the chain routes it.
//!
//! # Fallback chain
//!
//! Resolve the platform logger via the context registry under
//! [`crate::LOGGER_KEY`]. Lookup failures (registry not initialized, key
//! missing) are treated locally as "logger unavailable" and the entry's
//! message text is forwarded to the last-resort system channel: a
//! process-wide handle, lazily initialized on first use and cached for the
//! process lifetime, that emits a flat `tracing` event at debug level on
//! target [`SYSTEM_CHANNEL`]. The forwarded text is the entry's final
//! message, standard `Exception:` prefix or caller override included, so a
//! degraded raise loses the facility and priority structure but never any
//! message content.

use crate::registry::{ContextRegistry, LOGGER_KEY};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Log facility of an entry, mirroring the platform's log channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facility {
    /// Authentication and session handling.
    Auth,
    /// Tamper-evident audit trail.
    Audit,
    /// Health and liveness monitoring.
    Monitor,
    /// Platform internals; the default for raised errors.
    #[default]
    System,
    /// Workflow engine activity.
    Workflow,
}

impl Facility {
    /// Canonical lowercase label, as used in log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Audit => "audit",
            Self::Monitor => "monitor",
            Self::System => "system",
            Self::Workflow => "workflow",
        }
    }
}

/// Log priority of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    /// Diagnostic detail.
    Debug,
    /// Routine operational events.
    Info,
    /// Degraded but recoverable conditions.
    Warn,
    /// Failed operations; the default for raised errors.
    #[default]
    Error,
    /// Unrecoverable platform failures.
    Fatal,
}

impl Priority {
    /// Canonical lowercase label, as used in log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

/// A leveled, faceted log entry produced for a raised error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Human-readable message.
    pub message: String,
    /// Log facility.
    pub facility: Facility,
    /// Log priority.
    pub priority: Priority,
    /// How many call frames to skip when attributing the entry to a caller.
    pub caller_level: u32,
}

impl LogEntry {
    /// The standard entry for a raised error.
    #[must_use]
    pub fn standard(rendered: &str) -> Self {
        Self {
            message: format!("Exception: {rendered}"),
            facility: Facility::System,
            priority: Priority::Error,
            caller_level: 1,
        }
    }
}

/// Structured logger collaborator.
///
/// The signature is infallible by design: sinks swallow their own failures
/// so that logging can never prevent an error from being raised.
pub trait ErrorLogger: Send + Sync {
    /// Record a log entry.
    fn log(&self, entry: &LogEntry);
}

/// [`ErrorLogger`] backed by `tracing` events.
///
/// Facility and caller level are attached as structured fields; the priority
/// selects the event level. Fatal maps to an error-level event with a
/// `fatal` marker field, since `tracing` has no level above error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ErrorLogger for TracingLogger {
    fn log(&self, entry: &LogEntry) {
        let facility = entry.facility.as_str();
        let caller_level = entry.caller_level;
        match entry.priority {
            Priority::Debug => {
                tracing::debug!(target: "citadel.log", facility, caller_level, "{}", entry.message);
            }
            Priority::Info => {
                tracing::info!(target: "citadel.log", facility, caller_level, "{}", entry.message);
            }
            Priority::Warn => {
                tracing::warn!(target: "citadel.log", facility, caller_level, "{}", entry.message);
            }
            Priority::Error => {
                tracing::error!(target: "citadel.log", facility, caller_level, "{}", entry.message);
            }
            Priority::Fatal => {
                tracing::error!(
                    target: "citadel.log",
                    facility,
                    caller_level,
                    fatal = true,
                    "{}",
                    entry.message
                );
            }
        }
    }
}

/// Per-raise logging directive, supplied at throw time only.
///
/// The directive is consumed during routing and is never persisted on the
/// error object.
#[derive(Clone, Default)]
pub enum LogDirective {
    /// No directive: standard entry through the fallback chain.
    #[default]
    Standard,
    /// Explicit suppression: no logging attempt at all.
    Suppress,
    /// Explicit overrides, optionally with a caller-supplied sink.
    Override(LogOverride),
}

impl fmt::Debug for LogDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("Standard"),
            Self::Suppress => f.write_str("Suppress"),
            Self::Override(overrides) => f.debug_tuple("Override").field(overrides).finish(),
        }
    }
}

/// Field overrides for the standard log entry.
///
/// Only supplied fields replace their standard counterparts. A sink, when
/// present, receives the final entry directly instead of the fallback chain.
#[derive(Clone, Default)]
pub struct LogOverride {
    message: Option<String>,
    facility: Option<Facility>,
    priority: Option<Priority>,
    sink: Option<Arc<dyn ErrorLogger>>,
}

impl LogOverride {
    /// Start with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the standard message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Replace the standard facility.
    #[must_use]
    pub fn facility(mut self, facility: Facility) -> Self {
        self.facility = Some(facility);
        self
    }

    /// Replace the standard priority.
    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Send the final entry to this sink instead of the fallback chain.
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn ErrorLogger>) -> Self {
        self.sink = Some(sink);
        self
    }

    fn apply(&self, entry: &mut LogEntry) {
        if let Some(message) = &self.message {
            entry.message = message.clone();
        }
        if let Some(facility) = self.facility {
            entry.facility = facility;
        }
        if let Some(priority) = self.priority {
            entry.priority = priority;
        }
    }
}

impl fmt::Debug for LogOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogOverride")
            .field("message", &self.message)
            .field("facility", &self.facility)
            .field("priority", &self.priority)
            .field("sink", &self.sink.as_ref().map(|_| "<PRESENT>"))
            .finish()
    }
}

/// Routes the per-raise logging attempt.
///
/// Holds the injected registry capability; one router is shared by all
/// raises that go through the same [`crate::Reporter`].
#[derive(Clone)]
pub struct LogRouter {
    registry: Arc<dyn ContextRegistry>,
}

impl LogRouter {
    /// Create a router resolving loggers through the given registry.
    #[must_use]
    pub fn new(registry: Arc<dyn ContextRegistry>) -> Self {
        Self { registry }
    }

    /// Perform the single logging attempt for a raised error.
    pub fn dispatch(&self, rendered: &str, directive: &LogDirective) {
        match directive {
            LogDirective::Suppress => {}
            LogDirective::Standard => {
                self.route_through_chain(&LogEntry::standard(rendered));
            }
            LogDirective::Override(overrides) => {
                let mut entry = LogEntry::standard(rendered);
                overrides.apply(&mut entry);
                match &overrides.sink {
                    Some(sink) => sink.log(&entry),
                    None => self.route_through_chain(&entry),
                }
            }
        }
    }

    /// Platform logger if resolvable, last-resort channel otherwise.
    fn route_through_chain(&self, entry: &LogEntry) {
        match self.registry.lookup(LOGGER_KEY) {
            Ok(logger) => logger.log(entry),
            Err(_) => system_channel().debug(&entry.message),
        }
    }
}

impl fmt::Debug for LogRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRouter").finish_non_exhaustive()
    }
}

// ============================================================================
// Last-Resort System Channel
// ============================================================================

/// Target of the last-resort fallback channel.
pub const SYSTEM_CHANNEL: &str = "citadel.system";

/// Degraded logging channel used when no structured logger is available.
///
/// Accepts only a flat message string at debug level. Obtained through
/// [`system_channel`]; never constructed directly and never torn down.
#[derive(Debug)]
pub struct SystemChannel {
    _private: (),
}

impl SystemChannel {
    /// Emit a flat message at debug level on the system channel.
    pub fn debug(&self, message: &str) {
        tracing::debug!(target: SYSTEM_CHANNEL, "{message}");
    }
}

static SYSTEM_CHANNEL_HANDLE: OnceLock<SystemChannel> = OnceLock::new();

/// Process-wide handle to the last-resort channel.
///
/// Initialized lazily on first fallback use and cached for the remainder of
/// the process lifetime. `OnceLock` makes the initialization idempotent if
/// the host happens to be multi-threaded.
#[must_use]
pub fn system_channel() -> &'static SystemChannel {
    SYSTEM_CHANNEL_HANDLE.get_or_init(|| SystemChannel { _private: () })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{StaticRegistry, UninitializedRegistry};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        entries: Mutex<Vec<LogEntry>>,
    }

    impl RecordingLogger {
        fn entries(&self) -> Vec<LogEntry> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl ErrorLogger for RecordingLogger {
        fn log(&self, entry: &LogEntry) {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }

    /// Minimal subscriber recording `(target, level, message)` per event.
    struct CapturingSubscriber {
        events: Arc<Mutex<Vec<(String, tracing::Level, String)>>>,
    }

    struct MessageVisitor(String);

    impl tracing::field::Visit for MessageVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl tracing::Subscriber for CapturingSubscriber {
        fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _span: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}

        fn event(&self, event: &tracing::Event<'_>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.events.lock().unwrap().push((
                event.metadata().target().to_string(),
                *event.metadata().level(),
                visitor.0,
            ));
        }

        fn enter(&self, _span: &tracing::span::Id) {}

        fn exit(&self, _span: &tracing::span::Id) {}
    }

    fn capture_events(f: impl FnOnce()) -> Vec<(String, tracing::Level, String)> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = CapturingSubscriber {
            events: events.clone(),
        };
        tracing::subscriber::with_default(subscriber, f);
        let captured = events.lock().unwrap();
        captured.clone()
    }

    #[test]
    fn standard_entry_has_documented_shape() {
        let entry = LogEntry::standard("ERR_X, __A__ => 1");
        assert_eq!(entry.message, "Exception: ERR_X, __A__ => 1");
        assert_eq!(entry.facility, Facility::System);
        assert_eq!(entry.priority, Priority::Error);
        assert_eq!(entry.caller_level, 1);
    }

    #[test]
    fn standard_directive_routes_through_registry_logger() {
        let sink = Arc::new(RecordingLogger::default());
        let registry = StaticRegistry::with_logger(sink.clone());
        let router = LogRouter::new(Arc::new(registry));

        router.dispatch("ERR_X", &LogDirective::Standard);

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "Exception: ERR_X");
    }

    #[test]
    fn suppress_directive_logs_nothing() {
        let sink = Arc::new(RecordingLogger::default());
        let registry = StaticRegistry::with_logger(sink.clone());
        let router = LogRouter::new(Arc::new(registry));

        router.dispatch("ERR_X", &LogDirective::Suppress);

        assert!(sink.entries().is_empty());
    }

    #[test]
    fn override_fields_replace_only_supplied_parts() {
        let sink = Arc::new(RecordingLogger::default());
        let registry = StaticRegistry::with_logger(sink.clone());
        let router = LogRouter::new(Arc::new(registry));

        let overrides = LogOverride::new()
            .facility(Facility::Audit)
            .priority(Priority::Warn);
        router.dispatch("ERR_X", &LogDirective::Override(overrides));

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        // Message was not overridden, so the standard prefix remains.
        assert_eq!(entries[0].message, "Exception: ERR_X");
        assert_eq!(entries[0].facility, Facility::Audit);
        assert_eq!(entries[0].priority, Priority::Warn);
        assert_eq!(entries[0].caller_level, 1);
    }

    #[test]
    fn override_message_replaces_standard_prefix() {
        let sink = Arc::new(RecordingLogger::default());
        let registry = StaticRegistry::with_logger(sink.clone());
        let router = LogRouter::new(Arc::new(registry));

        let overrides = LogOverride::new().message("custom message");
        router.dispatch("ERR_X", &LogDirective::Override(overrides));

        assert_eq!(sink.entries()[0].message, "custom message");
    }

    #[test]
    fn explicit_sink_bypasses_fallback_chain() {
        let registry_sink = Arc::new(RecordingLogger::default());
        let explicit_sink = Arc::new(RecordingLogger::default());
        let registry = StaticRegistry::with_logger(registry_sink.clone());
        let router = LogRouter::new(Arc::new(registry));

        let overrides = LogOverride::new().sink(explicit_sink.clone());
        router.dispatch("ERR_X", &LogDirective::Override(overrides));

        assert_eq!(explicit_sink.entries().len(), 1);
        assert!(registry_sink.entries().is_empty());
    }

    #[test]
    fn unresolvable_registry_degrades_without_escaping() {
        let router = LogRouter::new(Arc::new(UninitializedRegistry));
        // Falls back to the system channel; nothing may panic or propagate.
        router.dispatch("ERR_X", &LogDirective::Standard);
    }

    #[test]
    fn fallback_channel_emits_one_debug_event_on_system_target() {
        let router = LogRouter::new(Arc::new(UninitializedRegistry));
        let events = capture_events(|| {
            router.dispatch("ERR_X, __A__ => 1", &LogDirective::Standard);
        });

        assert_eq!(events.len(), 1);
        let (target, level, message) = &events[0];
        assert_eq!(target, SYSTEM_CHANNEL);
        assert_eq!(*level, tracing::Level::DEBUG);
        assert_eq!(message, "Exception: ERR_X, __A__ => 1");
    }

    #[test]
    fn fallback_channel_forwards_overridden_message() {
        let router = LogRouter::new(Arc::new(UninitializedRegistry));
        let overrides = LogOverride::new().message("custom message");
        let events = capture_events(|| {
            router.dispatch("ERR_X", &LogDirective::Override(overrides));
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, SYSTEM_CHANNEL);
        assert_eq!(events[0].2, "custom message");
    }

    #[test]
    fn system_channel_handle_is_cached() {
        let first = system_channel() as *const SystemChannel;
        let second = system_channel() as *const SystemChannel;
        assert_eq!(first, second);
    }

    #[test]
    fn facility_and_priority_labels_are_stable() {
        assert_eq!(Facility::System.as_str(), "system");
        assert_eq!(Facility::Audit.as_str(), "audit");
        assert_eq!(Priority::Error.as_str(), "error");
        assert_eq!(Priority::Debug.as_str(), "debug");
    }
}
