#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use sticker_sketchpad::{Scene, SceneEvent, SceneObserver, SceneView, SketchConfig};

/// Records every notification and whether a cursor preview was present.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<SceneEvent>,
    pub cursor_present: Vec<bool>,
    pub committed_len: Vec<usize>,
}

impl SceneObserver for EventLog {
    fn scene_changed(&mut self, event: SceneEvent, view: &SceneView<'_>) {
        self.events.push(event);
        self.cursor_present.push(view.cursor.is_some());
        self.committed_len.push(view.committed.len());
    }
}

pub fn seeded_config() -> SketchConfig {
    SketchConfig {
        seed: Some(42),
        ..SketchConfig::default()
    }
}

/// A scene with an event log attached. The log's initial sync event is
/// cleared.
pub fn observed_scene() -> (Scene, Rc<RefCell<EventLog>>) {
    let mut scene = Scene::new(&seeded_config()).unwrap();
    let log = Rc::new(RefCell::new(EventLog::default()));
    scene.subscribe(Box::new(Rc::clone(&log)));
    log.borrow_mut().events.clear();
    log.borrow_mut().cursor_present.clear();
    log.borrow_mut().committed_len.clear();
    (scene, log)
}

/// Press, drag through `points`, release at the last one.
pub fn drag(scene: &mut Scene, points: &[(f32, f32)]) {
    let (x0, y0) = points[0];
    scene.on_pointer_down(x0, y0);
    for &(x, y) in &points[1..] {
        scene.on_pointer_move(x, y);
    }
    let &(xn, yn) = points.last().unwrap();
    scene.on_pointer_up(xn, yn);
}

pub fn select(scene: &mut Scene, label: &str) {
    let id = scene.tools().find(label).unwrap().id();
    assert!(scene.select_tool(id));
}
