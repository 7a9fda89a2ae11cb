//! Scroll-triggered section reveals.
//!
//! `SectionRevealController` keeps one latch per section. A section is put
//! under observation once it has a rendered region; the first intersection
//! report at or above the threshold flips its latch and removes it from
//! observation, so later reports (including scrolling it back out of view)
//! are ignored.

use crate::section::{DomRef, Section, SectionId};
use log::{debug, info, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Default fraction of a section that must be visible before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.3;

type OnRevealHandler = Arc<dyn Fn(SectionId) + Send + Sync>;

/// A visibility-change notification for one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub section: SectionId,
    /// Visible fraction of the section, in `[0, 1]`.
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn new(section: SectionId, ratio: f64) -> Self {
        Self { section, ratio }
    }
}

pub struct SectionRevealController {
    threshold: f64,
    sections: BTreeMap<SectionId, Section>,
    observed: BTreeSet<SectionId>,
    on_reveal: Option<OnRevealHandler>,
}

impl std::fmt::Debug for SectionRevealController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionRevealController")
            .field("threshold", &self.threshold)
            .field("sections", &self.sections)
            .field("observed", &self.observed)
            .finish()
    }
}

impl Default for SectionRevealController {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl SectionRevealController {
    /// Create a controller with one unmounted section per `SectionId`.
    ///
    /// A threshold outside `(0, 1]` (including NaN) falls back to
    /// `DEFAULT_REVEAL_THRESHOLD`.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold > 0.0 && threshold <= 1.0 {
            threshold
        } else {
            warn!(
                "reveal threshold {} outside (0, 1]; using {}",
                threshold, DEFAULT_REVEAL_THRESHOLD
            );
            DEFAULT_REVEAL_THRESHOLD
        };
        let sections = SectionId::ALL
            .into_iter()
            .map(|id| (id, Section::unmounted(id)))
            .collect();
        Self {
            threshold,
            sections,
            observed: BTreeSet::new(),
            on_reveal: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Register a section's region for visibility tracking.
    ///
    /// `None` leaves the section untouched. Calling this again only updates
    /// the region handle; an already revealed section stays revealed and is
    /// not observed again.
    pub fn observe(&mut self, id: SectionId, dom_ref: Option<DomRef>) {
        let Some(dom_ref) = dom_ref else {
            debug!("observe({}) without a region; ignoring", id);
            return;
        };
        let section = self
            .sections
            .entry(id)
            .or_insert_with(|| Section::unmounted(id));
        section.dom_ref = Some(dom_ref);
        if section.revealed {
            debug!("observe({}) on a revealed section; nothing to track", id);
            return;
        }
        if self.observed.insert(id) {
            debug!("observing {} at offset {}", id, dom_ref.offset_top);
        }
    }

    /// Apply a visibility-change notification.
    ///
    /// Returns `true` when this entry flipped the section's latch.
    pub fn notify(&mut self, entry: IntersectionEntry) -> bool {
        if !self.observed.contains(&entry.section) {
            return false;
        }
        // NaN never reaches the threshold.
        if !(entry.ratio >= self.threshold) {
            return false;
        }
        let Some(section) = self.sections.get_mut(&entry.section) else {
            return false;
        };
        if section.revealed {
            self.observed.remove(&entry.section);
            return false;
        }
        section.revealed = true;
        self.observed.remove(&entry.section);
        info!(
            "revealed {} (visible ratio {:.2} >= {:.2})",
            entry.section, entry.ratio, self.threshold
        );
        if let Some(cb) = &self.on_reveal {
            cb(entry.section);
        }
        true
    }

    /// Apply a batch of notifications, returning the sections that revealed.
    pub fn notify_all<I>(&mut self, entries: I) -> Vec<SectionId>
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        entries
            .into_iter()
            .filter_map(|e| self.notify(e).then_some(e.section))
            .collect()
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.sections.get(&id).map(|s| s.revealed).unwrap_or(false)
    }

    pub fn is_observed(&self, id: SectionId) -> bool {
        self.observed.contains(&id)
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(&id)
    }

    /// Sections in page order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn revealed_sections(&self) -> Vec<SectionId> {
        self.sections
            .values()
            .filter(|s| s.revealed)
            .map(|s| s.id)
            .collect()
    }

    pub fn observed_sections(&self) -> Vec<SectionId> {
        self.observed.iter().copied().collect()
    }

    /// Flip every latch without going through observation (print and no-JS
    /// rendering).
    pub fn reveal_all(&mut self) {
        for section in self.sections.values_mut() {
            section.revealed = true;
        }
        self.observed.clear();
    }

    /// Register a callback invoked once per section when its latch flips.
    pub fn on_reveal<F>(&mut self, cb: F)
    where
        F: Fn(SectionId) + Send + Sync + 'static,
    {
        self.on_reveal = Some(Arc::new(cb));
    }

    pub fn clear_on_reveal(&mut self) {
        self.on_reveal = None;
    }

    /// Drop all regions, latches and the listener; sections return to their
    /// freshly created state.
    pub fn unmount(&mut self) {
        for (id, section) in self.sections.iter_mut() {
            *section = Section::unmounted(*id);
        }
        self.observed.clear();
        self.on_reveal = None;
        debug!("reveal controller unmounted");
    }
}
