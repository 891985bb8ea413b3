//! Smooth-scroll navigation triggered by clicks on the logo, the hero CTA and
//! the back-to-top control.

/// The scrollable viewport.
pub trait ViewportController {
    /// Current vertical scroll offset in pixels.
    fn scroll_offset(&self) -> f64;
    /// Starts an eased scroll to `top`. A later manual scroll may interrupt it.
    fn smooth_scroll_to(&self, top: f64);
}

/// Resolves element ids to layout geometry.
pub trait ElementLocator {
    fn locate(&self, id: &str) -> Option<ElementGeometry>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementGeometry {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationActions<V, L> {
    viewport: V,
    locator: L,
}

impl<V, L> NavigationActions<V, L>
where
    V: ViewportController,
    L: ElementLocator,
{
    pub fn new(viewport: V, locator: L) -> Self {
        Self { viewport, locator }
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn scroll_to_top(&self) {
        self.viewport.smooth_scroll_to(0.0);
    }

    /// Scrolls to the top of the element with `id`. Unknown ids are ignored;
    /// returns whether a scroll was started.
    pub fn scroll_to_element(&self, id: &str) -> bool {
        match self.locator.locate(id) {
            Some(geometry) => {
                self.viewport.smooth_scroll_to(geometry.top);
                true
            }
            None => {
                log::debug!("no element with id {id:?} to scroll to");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MapLocator, RecordingViewport};

    #[test]
    fn test_scroll_to_top() {
        let viewport = RecordingViewport::at(1250.0);
        let nav = NavigationActions::new(viewport.clone(), MapLocator::default());
        nav.scroll_to_top();
        assert_eq!(viewport.requests(), vec![0.0]);
        assert_eq!(viewport.scroll_offset(), 0.0);
    }

    #[test]
    fn test_scroll_to_top_at_top_stays_at_top() {
        let viewport = RecordingViewport::at(0.0);
        let nav = NavigationActions::new(viewport.clone(), MapLocator::default());
        nav.scroll_to_top();
        nav.scroll_to_top();
        assert_eq!(nav.viewport().scroll_offset(), 0.0);
        assert!(viewport.requests().iter().all(|top| *top == 0.0));
    }

    #[test]
    fn test_scroll_to_element() {
        let viewport = RecordingViewport::at(0.0);
        let nav = NavigationActions::new(
            viewport.clone(),
            MapLocator::with("projects", 742.0, 900.0),
        );
        assert!(nav.scroll_to_element("projects"));
        assert_eq!(viewport.requests(), vec![742.0]);
        assert_eq!(viewport.scroll_offset(), 742.0);
    }

    #[test]
    fn test_missing_element_is_ignored() {
        let viewport = RecordingViewport::at(320.0);
        let nav = NavigationActions::new(viewport.clone(), MapLocator::default());
        assert!(!nav.scroll_to_element("projects"));
        assert!(viewport.requests().is_empty());
        assert_eq!(viewport.scroll_offset(), 320.0);
    }

    #[test]
    fn test_later_request_replaces_earlier() {
        let viewport = RecordingViewport::at(0.0);
        let nav = NavigationActions::new(
            viewport.clone(),
            MapLocator::with("projects", 742.0, 900.0),
        );
        nav.scroll_to_element("projects");
        nav.scroll_to_top();
        assert_eq!(viewport.requests(), vec![742.0, 0.0]);
        assert_eq!(viewport.scroll_offset(), 0.0);
    }
}
