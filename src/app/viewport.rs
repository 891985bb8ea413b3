use std::sync::Arc;

use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::navigation::{ElementGeometry, ElementLocator, NavigationActions, ViewportController};
use crate::scroll::{
    bind_scroll_visibility, ScrollObserver, ScrollSample, ScrollSource, ScrollThresholds,
    ScrollVisibility,
};

pub type BrowserNavigation = NavigationActions<WindowViewport, DocumentLocator>;

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl ViewportController for WindowViewport {
    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentLocator;

impl ElementLocator for DocumentLocator {
    fn locate(&self, id: &str) -> Option<ElementGeometry> {
        let el = document()
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(ElementGeometry {
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
    }
}

/// Passive `scroll` listener on `window`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn listen(&self, on_scroll: Arc<dyn Fn() + Send + Sync>) -> Box<dyn FnOnce() + Send + Sync> {
        let stop = use_event_listener_with_options(
            use_window(),
            ev::scroll,
            move |_| on_scroll(),
            UseEventListenerOptions::default().passive(true),
        );
        Box::new(stop)
    }
}

pub fn provide_navigation() {
    provide_context(BrowserNavigation::new(WindowViewport, DocumentLocator));
}

pub fn use_navigation() -> BrowserNavigation {
    expect_context::<BrowserNavigation>()
}

fn hero_height(el: Option<HtmlElement>) -> Option<f64> {
    el.map(|el| el.offset_height() as f64)
}

/// Tracks the window scroll against the height of `hero`.
pub fn use_scroll_visibility(
    hero: NodeRef<html::Section>,
    thresholds: ScrollThresholds,
) -> ScrollVisibility {
    let observer = ScrollObserver::new(thresholds);
    let visibility = bind_scroll_visibility(&observer, &WindowScroll, move || {
        ScrollSample::new(
            WindowViewport.scroll_offset(),
            hero_height(hero.get_untracked()),
        )
    });

    // effects only run in the browser; reruns once the hero is mounted so a
    // reload in the middle of the page starts with the right flags
    Effect::new(move |_| {
        let height = hero_height(hero.get());
        observer.on_scroll(ScrollSample::new(WindowViewport.scroll_offset(), height));
    });

    visibility
}
