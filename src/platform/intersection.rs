//! Viewport intersection for laid out sections

use crate::reveal::IntersectionEntry;
use crate::section::{DomRef, SectionId};
use std::collections::BTreeMap;

/// Visible fraction of `target` for a viewport scrolled to `scroll_y`.
///
/// Zero-height targets never intersect.
pub fn intersection_ratio(target: DomRef, scroll_y: f64, viewport_height: f64) -> f64 {
    if target.height <= 0.0 {
        return 0.0;
    }
    let top = target.offset_top.max(scroll_y);
    let bottom = target.bottom().min(scroll_y + viewport_height);
    ((bottom - top).max(0.0) / target.height).clamp(0.0, 1.0)
}

/// Tracks regions and reports ratio changes, the way a browser intersection
/// observer delivers entries only when a target's visibility changes.
#[derive(Debug, Default, Clone)]
pub struct IntersectionTracker {
    targets: BTreeMap<SectionId, DomRef>,
    last: BTreeMap<SectionId, f64>,
}

impl IntersectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, id: SectionId, target: DomRef) {
        self.targets.insert(id, target);
        self.last.remove(&id);
    }

    pub fn unobserve(&mut self, id: SectionId) {
        self.targets.remove(&id);
        self.last.remove(&id);
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Current ratio for every tracked region, in page order.
    pub fn entries_at(&self, scroll_y: f64, viewport_height: f64) -> Vec<IntersectionEntry> {
        self.targets
            .iter()
            .map(|(id, t)| IntersectionEntry::new(*id, intersection_ratio(*t, scroll_y, viewport_height)))
            .collect()
    }

    /// Entries whose ratio changed since the previous call. The first call
    /// after `observe` always reports the region.
    pub fn changes_at(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<IntersectionEntry> {
        let entries = self.entries_at(scroll_y, viewport_height);
        entries
            .into_iter()
            .filter(|e| {
                let prev = self.last.insert(e.section, e.ratio);
                prev.map(|p| (p - e.ratio).abs() > f64::EPSILON).unwrap_or(true)
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.targets.clear();
        self.last.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_geometry() {
        let t = DomRef::new(1000.0, 500.0);
        assert_eq!(intersection_ratio(t, 0.0, 720.0), 0.0);
        assert_eq!(intersection_ratio(t, 430.0, 720.0), 0.3);
        assert_eq!(intersection_ratio(t, 1000.0, 720.0), 1.0);
        assert_eq!(intersection_ratio(t, 1400.0, 720.0), 0.2);
        assert_eq!(intersection_ratio(DomRef::new(0.0, 0.0), 0.0, 720.0), 0.0);
    }

    #[test]
    fn tall_target_caps_at_viewport_share() {
        let t = DomRef::new(0.0, 2000.0);
        assert_eq!(intersection_ratio(t, 500.0, 500.0), 0.25);
    }

    #[test]
    fn changes_only_report_differences() {
        let mut tr = IntersectionTracker::new();
        tr.observe(SectionId::About, DomRef::new(720.0, 400.0));
        tr.observe(SectionId::Skills, DomRef::new(1120.0, 400.0));
        assert_eq!(tr.changes_at(0.0, 720.0).len(), 2);
        assert!(tr.changes_at(0.0, 720.0).is_empty());
        let moved = tr.changes_at(200.0, 720.0);
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].section, SectionId::About);
        assert_eq!(moved[0].ratio, 0.5);
    }
}
