//! Deterministic stand-ins for the browser, shared by unit tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::navigation::{ElementGeometry, ElementLocator, ViewportController};
use crate::scroll::ScrollSource;

type OnScroll = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Default)]
pub struct FakeScrollSource {
    listeners: Arc<Mutex<Vec<(usize, OnScroll)>>>,
    next_id: Arc<Mutex<usize>>,
}

impl FakeScrollSource {
    pub fn emit(&self) {
        for listener in self.listeners() {
            listener();
        }
    }

    pub fn listeners(&self) -> Vec<OnScroll> {
        self.listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, l)| l.clone())
            .collect()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl ScrollSource for FakeScrollSource {
    fn listen(&self, on_scroll: OnScroll) -> Box<dyn FnOnce() + Send + Sync> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        self.listeners.lock().unwrap().push((id, on_scroll));
        let listeners = self.listeners.clone();
        Box::new(move || listeners.lock().unwrap().retain(|(i, _)| *i != id))
    }
}

/// Records requested scroll targets and jumps straight to them.
#[derive(Clone, Default)]
pub struct RecordingViewport {
    offset: Arc<Mutex<f64>>,
    requests: Arc<Mutex<Vec<f64>>>,
}

impl RecordingViewport {
    pub fn at(offset: f64) -> Self {
        let viewport = Self::default();
        *viewport.offset.lock().unwrap() = offset;
        viewport
    }

    pub fn requests(&self) -> Vec<f64> {
        self.requests.lock().unwrap().clone()
    }
}

impl ViewportController for RecordingViewport {
    fn scroll_offset(&self) -> f64 {
        *self.offset.lock().unwrap()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.requests.lock().unwrap().push(top);
        *self.offset.lock().unwrap() = top;
    }
}

#[derive(Clone, Default)]
pub struct MapLocator(pub HashMap<String, ElementGeometry>);

impl MapLocator {
    pub fn with(id: &str, top: f64, height: f64) -> Self {
        let mut map = HashMap::new();
        map.insert(id.to_string(), ElementGeometry { top, height });
        Self(map)
    }
}

impl ElementLocator for MapLocator {
    fn locate(&self, id: &str) -> Option<ElementGeometry> {
        self.0.get(id).copied()
    }
}
