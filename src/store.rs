use tracing::debug;

use crate::calendar::CalendarEvent;

/// In-memory holder of the event list for the UI layer.
///
/// Owned and injected by the embedding application; one instance per
/// session. Every mutation is synchronous and total: bad or unmatched
/// input is a silent no-op, never an error. Id uniqueness is the
/// caller's responsibility and is not enforced here.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    /// Creates a store with an empty event sequence.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// The current event sequence, in stored order.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// First event with the given id, if any.
    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Replaces the entire sequence with `events`, in their order.
    /// Typically called after an external load. Contents are not
    /// inspected.
    pub fn set_events(&mut self, events: Vec<CalendarEvent>) {
        debug!(count = events.len(), "replacing event list");
        self.events = events;
    }

    /// Appends `event` at the end. Duplicate ids are allowed and kept.
    pub fn add_event(&mut self, event: CalendarEvent) {
        debug!(id = %event.id, title = %event.title, "adding event");
        self.events.push(event);
    }

    /// Replaces the first event whose id matches `updated.id`, keeping
    /// its position. No match leaves the sequence unchanged.
    pub fn update_event(&mut self, updated: CalendarEvent) {
        match self.events.iter_mut().find(|e| e.id == updated.id) {
            Some(slot) => {
                debug!(id = %updated.id, "updating event");
                *slot = updated;
            }
            None => debug!(id = %updated.id, "update matched no event"),
        }
    }

    /// Removes every event with the given id, preserving the relative
    /// order of the rest. No match leaves the sequence unchanged.
    pub fn delete_event(&mut self, id: &str) {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        debug!(id = %id, removed = before - self.events.len(), "deleting event");
    }
}
