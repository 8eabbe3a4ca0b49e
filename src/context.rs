//! Application Context
//!
//! Error notices shared via the Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use food_dashboard_core::DashboardError;

/// A message shown in the notice banner
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Sequence number, so a timer only clears the notice it was started for
    pub seq: u32,
    pub message: String,
}

/// App-wide notice signals provided via context
#[derive(Clone, Copy)]
pub struct NoticeContext {
    /// Current notice - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Current notice - write
    set_notice: WriteSignal<Option<Notice>>,
    /// Last sequence number handed out
    last_seq: StoredValue<u32>,
    /// Auto-dismiss delay
    timeout_ms: u32,
}

impl NoticeContext {
    pub fn new(notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>), timeout_ms: u32) -> Self {
        Self {
            notice: notice.0,
            set_notice: notice.1,
            last_seq: StoredValue::new(0),
            timeout_ms,
        }
    }

    /// Show `err` to the user; it disappears after the configured delay
    pub fn report(&self, err: &DashboardError) {
        self.last_seq.update_value(|seq| *seq = seq.wrapping_add(1));
        let seq = self.last_seq.get_value();
        self.set_notice.set(Some(Notice {
            seq,
            message: err.to_string(),
        }));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(ctx.timeout_ms).await;
            if ctx.notice.with_untracked(|current| current.as_ref().map(|n| n.seq)) == Some(seq) {
                ctx.dismiss();
            }
        });
    }

    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }
}
