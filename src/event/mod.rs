use std::cell::RefCell;
use std::rc::Rc;

mod bus;
mod events;

pub use bus::EventBus;
pub use events::{SceneEvent, SceneView};

/// Receives a notification after every scene mutation.
///
/// Observers must not mutate the scene from inside the callback.
pub trait SceneObserver {
    fn scene_changed(&mut self, event: SceneEvent, view: &SceneView<'_>);
}

/// Lets the owner keep a handle on an observer after subscribing it.
impl<T: SceneObserver> SceneObserver for Rc<RefCell<T>> {
    fn scene_changed(&mut self, event: SceneEvent, view: &SceneView<'_>) {
        self.borrow_mut().scene_changed(event, view);
    }
}
