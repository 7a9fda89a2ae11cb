//! The mounted page.
//!
//! `Portfolio` wires the pieces together: it renders and lays out the
//! content, registers every section with the reveal controller, and turns
//! viewport movement (user scrolling or navigation) into intersection
//! entries for the controller.

use crate::content::Content;
use crate::platform::{IntersectionTracker, SimulatedViewport};
use crate::rendering::{render_document, render_page, PageLayout};
use crate::reveal::SectionRevealController;
use crate::scroll::{ScrollSurface, SmoothScrollNavigator};
use crate::section::SectionId;
use crate::{Error, Result, SiteConfig};
use log::{debug, info};
use serde::Serialize;
use std::sync::Arc;

/// In-page navigation affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavAction {
    /// Chevron under the hero.
    ScrollHint,
    /// Call-to-action button in the about section.
    GetInTouch,
}

impl NavAction {
    pub const ALL: [NavAction; 2] = [NavAction::ScrollHint, NavAction::GetInTouch];

    pub fn name(self) -> &'static str {
        match self {
            NavAction::ScrollHint => "scroll-hint",
            NavAction::GetInTouch => "get-in-touch",
        }
    }

    pub fn target(self) -> SectionId {
        match self {
            NavAction::ScrollHint => SectionId::About,
            NavAction::GetInTouch => SectionId::Contact,
        }
    }

    /// Label for icon-only controls.
    pub fn aria_label(self) -> Option<&'static str> {
        match self {
            NavAction::ScrollHint => Some("Scroll to About section"),
            NavAction::GetInTouch => None,
        }
    }

    pub fn from_name(name: &str) -> Option<NavAction> {
        NavAction::ALL.into_iter().find(|a| a.name() == name)
    }
}

/// One reveal observed during a scroll session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevealEvent {
    pub scroll_y: f64,
    pub section: SectionId,
}

pub struct Portfolio {
    content: Content,
    config: SiteConfig,
    reveal: SectionRevealController,
    tracker: IntersectionTracker,
    viewport: Arc<SimulatedViewport>,
    navigator: SmoothScrollNavigator<Arc<SimulatedViewport>>,
    layout: PageLayout,
}

impl Portfolio {
    /// Render, lay out and observe every section, then run the initial
    /// intersection pass at the top of the page.
    pub fn mount(content: Content, config: SiteConfig) -> Result<Self> {
        config.validate()?;
        content.validate()?;

        let mut reveal = SectionRevealController::new(config.reveal_threshold);
        let rendered = render_document(&content, &reveal, &config)?;
        let layout = rendered.layout;
        if layout.sections.len() != SectionId::ALL.len() {
            return Err(Error::Render(format!(
                "expected {} sections, laid out {}",
                SectionId::ALL.len(),
                layout.sections.len()
            )));
        }

        let viewport = Arc::new(SimulatedViewport::new(config.viewport, layout.document_height));
        let navigator = SmoothScrollNavigator::new(viewport.clone());

        let mut tracker = IntersectionTracker::new();
        for b in &layout.sections {
            reveal.observe(b.id, Some(b.dom_ref()));
            if reveal.is_observed(b.id) {
                tracker.observe(b.id, b.dom_ref());
            }
        }
        if config.reveal_all {
            reveal.reveal_all();
            tracker.clear();
        }

        info!(
            "mounted portfolio for '{}' ({}x{}, document height {})",
            content.profile.name, config.viewport.width, config.viewport.height, layout.document_height
        );

        let mut page = Self {
            content,
            config,
            reveal,
            tracker,
            viewport,
            navigator,
            layout,
        };
        page.dispatch();
        Ok(page)
    }

    // Feed intersection changes at the current scroll position to the
    // controller; revealed sections stop being tracked.
    fn dispatch(&mut self) -> Vec<SectionId> {
        if self.tracker.is_empty() {
            return Vec::new();
        }
        let y = self.viewport.scroll_y();
        let entries = self
            .tracker
            .changes_at(y, self.config.viewport.height as f64);
        let flipped = self.reveal.notify_all(entries);
        for id in &flipped {
            self.tracker.unobserve(*id);
        }
        if !flipped.is_empty() {
            debug!("scroll {} revealed {:?}", y, flipped);
        }
        flipped
    }

    /// User scroll by `dy` px. Returns the sections revealed by the move.
    pub fn scroll_by(&mut self, dy: f64) -> Vec<SectionId> {
        self.viewport.scroll_by(dy);
        self.dispatch()
    }

    /// User scroll to an absolute offset.
    pub fn scroll_to_y(&mut self, y: f64) -> Vec<SectionId> {
        if !y.is_finite() {
            debug!("ignoring scroll to non-finite offset {}", y);
            return Vec::new();
        }
        let dy = y - self.viewport.scroll_y();
        self.scroll_by(dy)
    }

    /// Smooth-scroll to a section.
    pub fn scroll_to_section(&mut self, id: SectionId) -> Vec<SectionId> {
        if let Some(section) = self.reveal.section(id).cloned() {
            self.navigator.scroll_to(&section);
        }
        self.dispatch()
    }

    /// Activate a navigation affordance.
    pub fn navigate(&mut self, action: NavAction) -> Vec<SectionId> {
        debug!("nav {} -> {}", action.name(), action.target());
        self.scroll_to_section(action.target())
    }

    /// Scroll from the current position to the bottom in `step` px
    /// increments, recording every reveal.
    pub fn run_scroll_session(&mut self, step: f64) -> Result<Vec<RevealEvent>> {
        if !(step > 0.0) {
            return Err(Error::Config(format!("scroll step must be positive, got {}", step)));
        }
        let mut events = Vec::new();
        loop {
            let before = self.viewport.scroll_y();
            for section in self.scroll_by(step) {
                events.push(RevealEvent { scroll_y: self.viewport.scroll_y(), section });
            }
            if self.viewport.scroll_y() <= before {
                break;
            }
        }
        Ok(events)
    }

    /// Markup for the current reveal state.
    pub fn render(&self) -> Result<String> {
        render_page(&self.content, &self.reveal, &self.config)
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.reveal.is_revealed(id)
    }

    pub fn reveal(&self) -> &SectionRevealController {
        &self.reveal
    }

    /// Register the re-render hook invoked when a section reveals.
    pub fn on_reveal<F>(&mut self, cb: F)
    where
        F: Fn(SectionId) + Send + Sync + 'static,
    {
        self.reveal.on_reveal(cb);
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn viewport(&self) -> &SimulatedViewport {
        &self.viewport
    }

    pub fn scroll_y(&self) -> f64 {
        self.viewport.scroll_y()
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Tear down observation and latches.
    pub fn unmount(mut self) {
        self.reveal.unmount();
        self.tracker.clear();
        info!("unmounted portfolio");
    }
}
