//! Toast notifications
//!
//! One visible toast at a time. Every `notify` takes a fresh ticket;
//! the auto-dismiss of a superseded toast checks its ticket before
//! clearing, so a stale timer can never hide a newer message.

use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Auto-dismiss delay
const TOAST_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
}

impl Severity {
    /// CSS modifier on the toast element
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A transient status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Handle to the single toast slot
#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notification>>,
    sequence: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            sequence: RwSignal::new(0),
        }
    }

    /// Signal the toast view renders from
    pub fn current(&self) -> RwSignal<Option<Notification>> {
        self.current
    }

    /// Show a toast, replacing any visible one
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let ticket = self.sequence.get_untracked() + 1;
        self.sequence.set(ticket);
        self.current.set(Some(Notification {
            message: message.into(),
            severity,
        }));

        let current = self.current;
        let sequence = self.sequence;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            if sequence.get_untracked() == ticket {
                current.set(None);
            }
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
