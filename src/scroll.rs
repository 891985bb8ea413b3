//! Scroll-driven visibility for the floating navbar and the back-to-top control.
//!
//! [`VisibilityFlags::derive`] is the pure rule. [`ScrollObserver`] holds the
//! current flags, recomputes them on each [`ScrollSample`] and notifies
//! subscribers when they change. [`bind_scroll_visibility`] exposes the flags as
//! read-only Leptos signals that live as long as the owning view.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard, PoisonError, Weak,
};

use leptos::prelude::*;
use serde::Deserialize;

pub const DEFAULT_HERO_TOLERANCE: f64 = 100.0;
pub const DEFAULT_SCROLL_TO_TOP: f64 = 400.0;

/// Pixel thresholds for the visibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollThresholds {
    /// Subtracted from the hero height so the navbar doesn't flicker at the boundary.
    pub hero_tolerance: f64,
    /// Offset past which the back-to-top control is shown.
    pub scroll_to_top: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            hero_tolerance: DEFAULT_HERO_TOLERANCE,
            scroll_to_top: DEFAULT_SCROLL_TO_TOP,
        }
    }
}

/// One reading of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    pub offset: f64,
    /// `None` until the hero section has been laid out.
    pub hero_height: Option<f64>,
}

impl ScrollSample {
    pub fn new(offset: f64, hero_height: Option<f64>) -> Self {
        Self {
            offset,
            hero_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityFlags {
    pub beyond_hero: bool,
    pub show_scroll_to_top: bool,
}

impl VisibilityFlags {
    pub fn derive(sample: ScrollSample, thresholds: &ScrollThresholds) -> Self {
        // elastic overscroll reports negative offsets
        let offset = sample.offset.max(0.0);
        Self {
            beyond_hero: sample
                .hero_height
                .is_some_and(|height| offset > height - thresholds.hero_tolerance),
            show_scroll_to_top: offset > thresholds.scroll_to_top,
        }
    }
}

/// A stream of "the viewport scrolled" notifications.
pub trait ScrollSource {
    /// Registers `on_scroll` and returns a function that unregisters it.
    fn listen(&self, on_scroll: Arc<dyn Fn() + Send + Sync>) -> Box<dyn FnOnce() + Send + Sync>;
}

type Listener = Arc<dyn Fn(VisibilityFlags) + Send + Sync>;

struct ObserverState {
    flags: VisibilityFlags,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

fn lock(state: &Mutex<ObserverState>) -> MutexGuard<'_, ObserverState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owner of the visibility flags. Clones share the same state.
#[derive(Clone)]
pub struct ScrollObserver {
    thresholds: ScrollThresholds,
    state: Arc<Mutex<ObserverState>>,
}

impl std::fmt::Debug for ScrollObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollObserver")
            .field("thresholds", &self.thresholds)
            .field("flags", &self.flags())
            .finish()
    }
}

impl ScrollObserver {
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            thresholds,
            state: Arc::new(Mutex::new(ObserverState {
                flags: VisibilityFlags::default(),
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn thresholds(&self) -> ScrollThresholds {
        self.thresholds
    }

    pub fn flags(&self) -> VisibilityFlags {
        lock(&self.state).flags
    }

    /// Recomputes the flags from `sample`. Returns the new flags if they changed.
    pub fn on_scroll(&self, sample: ScrollSample) -> Option<VisibilityFlags> {
        let next = VisibilityFlags::derive(sample, &self.thresholds);
        let listeners = {
            let mut state = lock(&self.state);
            if state.flags == next {
                return None;
            }
            state.flags = next;
            state
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect::<Vec<_>>()
        };
        log::trace!("visibility changed: {next:?}");
        // called without the lock held so listeners may read `flags()`
        for listener in listeners {
            listener(next);
        }
        Some(next)
    }

    /// Calls `listener` with the new flags each time they change, until the
    /// returned [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(VisibilityFlags) + Send + Sync + 'static,
    {
        let mut state = lock(&self.state);
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, Arc::new(listener)));
        Subscription {
            state: Arc::downgrade(&self.state),
            id,
        }
    }

    /// Feeds `sampler()` into [`Self::on_scroll`] on every notification from `source`.
    pub fn watch<S, F>(&self, source: &S, sampler: F) -> ScrollWatch
    where
        S: ScrollSource + ?Sized,
        F: Fn() -> ScrollSample + Send + Sync + 'static,
    {
        let active = Arc::new(AtomicBool::new(true));
        let observer = self.clone();
        let is_active = active.clone();
        let unlisten = source.listen(Arc::new(move || {
            if is_active.load(Ordering::Acquire) {
                observer.on_scroll(sampler());
            }
        }));
        ScrollWatch {
            active,
            unlisten: Some(unlisten),
        }
    }
}

/// Removes its listener from the [`ScrollObserver`] when dropped.
pub struct Subscription {
    state: Weak<Mutex<ObserverState>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            lock(&state).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Registration of a [`ScrollObserver`] on a [`ScrollSource`].
///
/// Once stopped (or dropped), later notifications from the source have no effect.
pub struct ScrollWatch {
    active: Arc<AtomicBool>,
    unlisten: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ScrollWatch {
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn stop(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.active.store(false, Ordering::Release);
        if let Some(unlisten) = self.unlisten.take() {
            unlisten();
        }
    }
}

impl Drop for ScrollWatch {
    fn drop(&mut self) {
        self.release();
    }
}

/// Read-only view of the flags for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct ScrollVisibility {
    pub beyond_hero: Signal<bool>,
    pub show_scroll_to_top: Signal<bool>,
}

/// Mirrors `observer` into signals and watches `source` until the current
/// reactive owner is cleaned up.
pub fn bind_scroll_visibility<S, F>(
    observer: &ScrollObserver,
    source: &S,
    sampler: F,
) -> ScrollVisibility
where
    S: ScrollSource + ?Sized,
    F: Fn() -> ScrollSample + Send + Sync + 'static,
{
    let flags = RwSignal::new(observer.flags());
    let subscription = observer.subscribe(move |next| flags.set(next));
    let watch = observer.watch(source, sampler);
    on_cleanup(move || {
        watch.stop();
        drop(subscription);
    });

    let beyond_hero = Memo::new(move |_| flags.with(|f| f.beyond_hero));
    let show_scroll_to_top = Memo::new(move |_| flags.with(|f| f.show_scroll_to_top));
    ScrollVisibility {
        beyond_hero: beyond_hero.into(),
        show_scroll_to_top: show_scroll_to_top.into(),
    }
}
