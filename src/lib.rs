pub mod calendar;
pub mod store;

pub use calendar::CalendarEvent;
pub use store::EventStore;
