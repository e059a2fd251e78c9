//! Severity-ranked diagnostics sink shared by conversions.
//!
//! Every conversion reports lossy or invalid input here instead of failing.
//! The sink is internally synchronized, so one instance can be shared (via
//! `Arc`) by conversions running on several threads. Callers inspect
//! [`ErrorHandler::worst_severity`] after a batch to decide whether to accept
//! the results.

use std::fmt;
use std::panic::Location;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Echoed to the tracing output but never retained.
    #[default]
    Debug,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Debug => "debug",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// A single retained diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Source location that reported the diagnostic (`file.rs:line`).
    pub location: String,
}

#[derive(Debug, Default)]
struct State {
    worst: Severity,
    worst_message: String,
    queue: Vec<Diagnostic>,
}

/// Append-only diagnostics log.
#[derive(Debug, Default)]
pub struct ErrorHandler {
    state: Mutex<State>,
}

impl ErrorHandler {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave `State` half-updated, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a diagnostic at an explicit location.
    pub fn add(&self, severity: Severity, message: impl Into<String>, location: impl Into<String>) {
        let message = message.into();
        let location = location.into();

        match severity {
            Severity::Debug => tracing::debug!(%location, "{message}"),
            Severity::Warning => tracing::warn!(%location, "{message}"),
            Severity::Error | Severity::Critical => {
                tracing::error!(%location, %severity, "{message}")
            }
        }

        if severity == Severity::Debug {
            return;
        }

        let mut state = self.lock();
        if severity > state.worst {
            state.worst = severity;
            state.worst_message = message.clone();
        }
        state.queue.push(Diagnostic {
            severity,
            message,
            location,
        });
    }

    /// Record a diagnostic located at the caller.
    #[track_caller]
    pub fn report(&self, severity: Severity, message: impl Into<String>) {
        self.add(severity, message, caller_location(Location::caller()));
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.report(Severity::Debug, message);
    }

    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        self.report(Severity::Warning, message);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.report(Severity::Error, message);
    }

    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) {
        self.report(Severity::Critical, message);
    }

    /// Worst severity recorded since the last [`clear`](Self::clear).
    pub fn worst_severity(&self) -> Severity {
        self.lock().worst
    }

    /// Message of the first diagnostic that reached the worst severity.
    pub fn worst_message(&self) -> String {
        self.lock().worst_message.clone()
    }

    /// Snapshot of the retained diagnostics, oldest first.
    pub fn messages(&self) -> Vec<Diagnostic> {
        self.lock().queue.clone()
    }

    /// Number of retained diagnostics with exactly this severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.lock()
            .queue
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().queue.is_empty()
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.queue.clear();
        state.worst = Severity::Debug;
        state.worst_message.clear();
    }
}

/// `path/to/file.rs:42` becomes `file.rs:42`.
fn caller_location(location: &Location<'_>) -> String {
    let file = location
        .file()
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(location.file());
    format!("{}:{}", file, location.line())
}
