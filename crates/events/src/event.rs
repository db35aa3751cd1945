use chrono::{DateTime, Utc};

/// A domain-agnostic notification.
///
/// Events are immutable facts about something that already happened.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "pallet.inserted").
    fn event_type(&self) -> &'static str;

    /// When the change was committed.
    fn occurred_at(&self) -> DateTime<Utc>;
}
