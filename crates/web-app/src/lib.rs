#![warn(clippy::pedantic)]

use chrono::Utc;
use resistance_gen_domain as domain;

pub mod log;

/// Confirmation through the browser's modal `confirm` dialog.
///
/// Declines when no window is available or the dialog cannot be shown.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserConfirmation;

impl domain::Confirmation for BrowserConfirmation {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Set ids of the form `set-{millis}-{offset}`.
///
/// The offset grows with every id, so ids stay unique within the same millisecond.
#[derive(Debug, Default, Clone)]
pub struct TimestampSetIds {
    offset: usize,
}

impl TimestampSetIds {
    fn id_at(&mut self, millis: i64) -> domain::SetID {
        let id = format!("set-{millis}-{}", self.offset);
        self.offset += 1;
        id.into()
    }
}

impl domain::SetIdSource for TimestampSetIds {
    fn next_set_id(&mut self) -> domain::SetID {
        self.id_at(Utc::now().timestamp_millis())
    }
}
