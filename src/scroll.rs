//! Smooth-scroll navigation to page sections.

use crate::section::Section;
use log::debug;
use serde::Serialize;

/// How the surface should move to a new scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// A request for the viewport to scroll to `top` (document-relative, px).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Anything that owns a vertical scroll position: a browser window binding or
/// the simulated viewport.
///
/// Issuing a request while a previous smooth scroll is still animating
/// retargets it; there is no cancellation.
pub trait ScrollSurface: Send + Sync {
    fn scroll_to(&self, request: ScrollRequest);

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &S {
    fn scroll_to(&self, request: ScrollRequest) {
        (**self).scroll_to(request)
    }

    fn scroll_y(&self) -> f64 {
        (**self).scroll_y()
    }
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for std::sync::Arc<S> {
    fn scroll_to(&self, request: ScrollRequest) {
        (**self).scroll_to(request)
    }

    fn scroll_y(&self) -> f64 {
        (**self).scroll_y()
    }
}

/// Scrolls the viewport to a section's top offset.
pub struct SmoothScrollNavigator<S> {
    surface: S,
    last_target: Option<f64>,
}

impl<S: ScrollSurface> SmoothScrollNavigator<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            last_target: None,
        }
    }

    /// Request an animated scroll to `section`.
    ///
    /// A section without a rendered region is skipped. Returns the request
    /// that was issued, if any.
    pub fn scroll_to(&mut self, section: &Section) -> Option<ScrollRequest> {
        let Some(dom_ref) = section.dom_ref else {
            debug!("scroll_to({}) has no rendered target; ignoring", section.id);
            return None;
        };
        let request = ScrollRequest {
            top: dom_ref.offset_top,
            behavior: ScrollBehavior::Smooth,
        };
        if let Some(prev) = self.last_target.replace(request.top) {
            if (prev - request.top).abs() > f64::EPSILON {
                debug!("retargeting scroll from {} to {}", prev, request.top);
            }
        }
        debug!("scrolling to {} at {}", section.id, request.top);
        self.surface.scroll_to(request);
        Some(request)
    }

    /// Most recent target offset, if any request has been issued.
    pub fn last_target(&self) -> Option<f64> {
        self.last_target
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{DomRef, SectionId};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        requests: Mutex<Vec<ScrollRequest>>,
    }

    impl ScrollSurface for Recorder {
        fn scroll_to(&self, request: ScrollRequest) {
            self.requests.lock().unwrap().push(request);
        }

        fn scroll_y(&self) -> f64 {
            self.requests.lock().unwrap().last().map(|r| r.top).unwrap_or(0.0)
        }
    }

    #[test]
    fn missing_target_is_noop() {
        let rec = Recorder::default();
        let mut nav = SmoothScrollNavigator::new(&rec);
        assert!(nav.scroll_to(&Section::unmounted(SectionId::About)).is_none());
        assert!(rec.requests.lock().unwrap().is_empty());
        assert_eq!(nav.last_target(), None);
    }

    #[test]
    fn scrolls_to_section_offset() {
        let rec = Recorder::default();
        let mut nav = SmoothScrollNavigator::new(&rec);
        let section = Section::new(SectionId::Skills, Some(DomRef::new(1432.0, 500.0)));
        let req = nav.scroll_to(&section).unwrap();
        assert_eq!(req.top, 1432.0);
        assert_eq!(req.behavior, ScrollBehavior::Smooth);
        assert_eq!(*rec.requests.lock().unwrap(), vec![req]);
    }

    #[test]
    fn second_call_retargets() {
        let rec = Recorder::default();
        let mut nav = SmoothScrollNavigator::new(&rec);
        nav.scroll_to(&Section::new(SectionId::About, Some(DomRef::new(720.0, 1.0))));
        nav.scroll_to(&Section::new(SectionId::Contact, Some(DomRef::new(3000.0, 1.0))));
        assert_eq!(nav.last_target(), Some(3000.0));
        assert_eq!(rec.requests.lock().unwrap().len(), 2);
        assert_eq!(rec.scroll_y(), 3000.0);
    }
}
