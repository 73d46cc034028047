//! Engine notifications
//!
//! Engines may report changes from any thread. They only push into the
//! [`EventQueue`]; the UI thread drains it and applies every event itself,
//! so tab and history state are only ever touched from one place.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The page location changed
    LocationChanged(Option<String>),
    /// The page title changed
    TitleChanged(Option<String>),
    /// The current load completed
    LoadFinished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEvent {
    pub tab_id: String,
    pub event: EngineEvent,
}

/// Shared FIFO of pending engine events
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: Arc<Mutex<VecDeque<TabEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that tags every event with `tab_id`
    pub fn sink(&self, tab_id: impl Into<String>) -> EngineEvents {
        EngineEvents {
            tab_id: tab_id.into(),
            queue: self.clone(),
        }
    }

    pub fn push(&self, event: TabEvent) {
        self.pending.lock().push_back(event);
    }

    /// Take everything queued so far, oldest first
    pub fn drain(&self) -> Vec<TabEvent> {
        self.pending.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

/// Per-tab handle handed to an engine
#[derive(Debug, Clone)]
pub struct EngineEvents {
    tab_id: String,
    queue: EventQueue,
}

impl EngineEvents {
    pub fn tab_id(&self) -> &str {
        &self.tab_id
    }

    pub fn emit(&self, event: EngineEvent) {
        self.queue.push(TabEvent {
            tab_id: self.tab_id.clone(),
            event,
        });
    }

    pub fn location_changed(&self, location: Option<String>) {
        self.emit(EngineEvent::LocationChanged(location));
    }

    pub fn title_changed(&self, title: Option<String>) {
        self.emit(EngineEvent::TitleChanged(title));
    }

    pub fn load_finished(&self) {
        self.emit(EngineEvent::LoadFinished);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_events_keep_order() {
        let queue = EventQueue::new();
        let sink = queue.sink("tab-1");

        sink.location_changed(Some("https://a.example".to_string()));
        sink.title_changed(Some("A".to_string()));
        sink.load_finished();

        let events: Vec<EngineEvent> = queue.drain().into_iter().map(|e| e.event).collect();
        assert_eq!(
            events,
            vec![
                EngineEvent::LocationChanged(Some("https://a.example".to_string())),
                EngineEvent::TitleChanged(Some("A".to_string())),
                EngineEvent::LoadFinished,
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_emit_from_other_thread() {
        let queue = EventQueue::new();
        let sink = queue.sink("tab-2");

        thread::spawn(move || sink.load_finished()).join().unwrap();

        let events = queue.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tab_id, "tab-2");
        assert_eq!(events[0].event, EngineEvent::LoadFinished);
    }
}
