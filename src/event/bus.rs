use crate::event::{SceneEvent, SceneObserver, SceneView};

/// Observers notified synchronously, in subscription order.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<Box<dyn SceneObserver>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &format!("<{} observers>", self.observers.len()))
            .finish()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe an observer to receive events
    pub fn subscribe(&mut self, observer: Box<dyn SceneObserver>) {
        self.observers.push(observer);
    }

    /// Emit an event to all registered observers
    pub fn emit(&mut self, event: SceneEvent, view: &SceneView<'_>) {
        log::trace!("Emitting {event:?} to {} observers", self.observers.len());
        for observer in &mut self.observers {
            observer.scene_changed(event, view);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
