//! Named, scroll-addressable regions of the page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a page section, declared in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Every section in the order it appears on the page.
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Stable anchor used as the element id and in `#fragment` links.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About Me",
            SectionId::Skills => "Skills & Technologies",
            SectionId::Projects => "Featured Projects",
            SectionId::Contact => "Get in Touch",
        }
    }

    /// The hero is rendered visible from the first paint and never latched.
    pub fn is_always_visible(self) -> bool {
        matches!(self, SectionId::Hero)
    }

    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Opaque handle to a rendered region, in CSS pixels relative to the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomRef {
    pub offset_top: f64,
    pub height: f64,
}

impl DomRef {
    pub fn new(offset_top: f64, height: f64) -> Self {
        Self { offset_top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.offset_top + self.height
    }
}

/// A page section and its reveal latch.
///
/// `dom_ref` is `None` until the section has been laid out; `revealed` only
/// ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub dom_ref: Option<DomRef>,
    pub(crate) revealed: bool,
}

impl Section {
    pub fn new(id: SectionId, dom_ref: Option<DomRef>) -> Self {
        Self {
            id,
            dom_ref,
            revealed: id.is_always_visible(),
        }
    }

    /// A section that has not been rendered yet.
    pub fn unmounted(id: SectionId) -> Self {
        Self::new(id, None)
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_starts_revealed_others_hidden() {
        for id in SectionId::ALL {
            let s = Section::unmounted(id);
            assert_eq!(s.revealed(), id == SectionId::Hero, "{}", id);
        }
    }

    #[test]
    fn anchors_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
        assert_eq!(SectionId::from_anchor("footer"), None);
    }

    #[test]
    fn page_order_matches_declaration() {
        let mut sorted = SectionId::ALL;
        sorted.sort();
        assert_eq!(sorted, SectionId::ALL);
    }
}
