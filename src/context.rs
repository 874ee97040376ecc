//! Application Context
//!
//! Shared notification state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays on screen.
pub const NOTICE_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

/// One transient banner message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    seq: u64,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current banner notice, if any - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Current banner notice - write
    set_notice: WriteSignal<Option<Notice>>,
    /// Monotonic notice counter, guards stale dismiss timers
    seq: StoredValue<u64>,
}

impl AppContext {
    pub fn new(notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>)) -> Self {
        Self {
            notice: notice.0,
            set_notice: notice.1,
            seq: StoredValue::new(0),
        }
    }

    /// Show a banner notice that auto-dismisses after
    /// [`NOTICE_DISMISS_MS`]. A newer notice restarts the clock.
    pub fn notify(&self, severity: Severity, message: impl Into<String>) {
        let seq = self.seq.with_value(|s| s + 1);
        self.seq.set_value(seq);
        self.set_notice.set(Some(Notice {
            message: message.into(),
            severity,
            seq,
        }));

        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            set_notice.update(|current| {
                if current.as_ref().is_some_and(|n| n.seq == seq) {
                    *current = None;
                }
            });
        });
    }
}

/// Get the app context; panics if [`AppContext`] was never provided.
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
