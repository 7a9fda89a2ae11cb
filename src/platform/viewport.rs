//! Simulated browser viewport for deterministic scroll sessions

use crate::scroll::{ScrollRequest, ScrollSurface};
use crate::Viewport;
use log::debug;

#[derive(Debug, Default)]
struct ScrollState {
    y: f64,
    document_height: f64,
    requests: Vec<ScrollRequest>,
}

/// A viewport that records scroll requests and jumps straight to their
/// (clamped) target; smooth-scroll animation time is not modelled.
#[derive(Debug)]
pub struct SimulatedViewport {
    viewport: Viewport,
    state: std::sync::Mutex<ScrollState>,
}

impl SimulatedViewport {
    pub fn new(viewport: Viewport, document_height: f64) -> Self {
        SimulatedViewport {
            viewport,
            state: std::sync::Mutex::new(ScrollState {
                document_height,
                ..Default::default()
            }),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_document_height(&self, height: f64) {
        let mut s = self.lock();
        s.document_height = height;
        s.y = clamp(s.y, s.document_height, self.viewport);
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        let s = self.lock();
        (s.document_height - self.viewport.height as f64).max(0.0)
    }

    /// Every request received, oldest first.
    pub fn requests(&self) -> Vec<ScrollRequest> {
        self.lock().requests.clone()
    }

    /// Move by a user scroll (wheel, touch) rather than a navigation request.
    /// A non-finite `dy` is ignored.
    pub fn scroll_by(&self, dy: f64) -> f64 {
        let mut s = self.lock();
        if !dy.is_finite() {
            debug!("ignoring non-finite scroll delta {}", dy);
            return s.y;
        }
        s.y = clamp(s.y + dy, s.document_height, self.viewport);
        s.y
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScrollState> {
        // A poisoned lock only means a panicking test thread; the state is plain data.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn clamp(y: f64, document_height: f64, viewport: Viewport) -> f64 {
    let max = (document_height - viewport.height as f64).max(0.0);
    y.clamp(0.0, max)
}

impl ScrollSurface for SimulatedViewport {
    fn scroll_to(&self, request: ScrollRequest) {
        let mut s = self.lock();
        if !request.top.is_finite() {
            debug!("ignoring scroll request to non-finite offset {}", request.top);
            return;
        }
        let y = clamp(request.top, s.document_height, self.viewport);
        debug!("viewport scroll {:?} to {} (requested {})", request.behavior, y, request.top);
        s.y = y;
        s.requests.push(request);
    }

    fn scroll_y(&self) -> f64 {
        self.lock().y
    }
}
