use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One scheduled item as the UI layer sees it.
///
/// `start` and `end` are kept as the caller-supplied strings; the store
/// never parses or validates them. An absent `end` means the event is
/// open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl CalendarEvent {
    /// Creates an event with a freshly generated id and no end.
    pub fn new(title: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            start: start.into(),
            end: None,
        }
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Best-effort RFC 3339 parse of `start`. Values that do not parse
    /// yield `None` rather than an error.
    pub fn start_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.start).ok()
    }

    /// Best-effort RFC 3339 parse of `end`, when present.
    pub fn end_time(&self) -> Option<DateTime<FixedOffset>> {
        self.end
            .as_deref()
            .and_then(|end| DateTime::parse_from_rfc3339(end).ok())
    }

    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_gets_a_unique_id() {
        let a = CalendarEvent::new("Standup", "2024-01-01T09:00:00Z");
        let b = CalendarEvent::new("Standup", "2024-01-01T09:00:00Z");

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn new_event_is_open_ended() {
        let event = CalendarEvent::new("Standup", "2024-01-01T09:00:00Z");
        assert!(event.is_open_ended());
        assert_eq!(event.end_time(), None);
    }

    #[test]
    fn with_end_sets_the_end() {
        let event = CalendarEvent::new("Standup", "2024-01-01T09:00:00Z")
            .with_end("2024-01-01T09:15:00Z");

        assert!(!event.is_open_ended());
        assert_eq!(event.end.as_deref(), Some("2024-01-01T09:15:00Z"));
    }

    #[test]
    fn start_time_parses_rfc3339() {
        let event = CalendarEvent::new("Standup", "2024-01-01T09:00:00+02:00");

        let parsed = event.start_time().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-01T09:00:00+02:00");
    }

    #[test]
    fn unparseable_start_yields_none() {
        let event = CalendarEvent::new("Standup", "next tuesday");
        assert_eq!(event.start_time(), None);
    }

    #[test]
    fn deserializes_without_end_field() {
        let event: CalendarEvent =
            serde_json::from_str(r#"{"id":"1","title":"A","start":"2024-01-01"}"#).unwrap();

        assert_eq!(event.id, "1");
        assert_eq!(event.end, None);
    }

    #[test]
    fn serializes_omit_absent_end() {
        let event = CalendarEvent {
            id: "1".to_string(),
            title: "A".to_string(),
            start: "2024-01-01".to_string(),
            end: None,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("end"));
    }
}
