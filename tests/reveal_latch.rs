//! Reveal latch behavior through the public API

use folio::{DomRef, IntersectionEntry, SectionId, SectionRevealController};
use std::sync::{Arc, Mutex};

fn mounted() -> SectionRevealController {
    let mut c = SectionRevealController::default();
    let mut top = 0.0;
    for id in SectionId::ALL {
        c.observe(id, Some(DomRef::new(top, 600.0)));
        top += 600.0;
    }
    c
}

#[test]
fn non_hero_sections_start_hidden() {
    let c = mounted();
    for id in SectionId::ALL {
        assert_eq!(c.is_revealed(id), id == SectionId::Hero, "{}", id);
    }
}

#[test]
fn latch_survives_scrolling_back_out() {
    for id in SectionId::ALL.into_iter().filter(|s| *s != SectionId::Hero) {
        let mut c = mounted();
        assert!(c.notify(IntersectionEntry::new(id, 0.3)));
        assert!(c.is_revealed(id));
        c.notify(IntersectionEntry::new(id, 0.0));
        assert!(c.is_revealed(id), "{} un-revealed", id);
    }
}

#[test]
fn below_threshold_never_reveals() {
    let mut c = mounted();
    for ratio in [0.0, 0.1, 0.2, 0.299] {
        assert!(!c.notify(IntersectionEntry::new(SectionId::Projects, ratio)));
    }
    assert!(!c.is_revealed(SectionId::Projects));
}

#[test]
fn repeated_observe_does_not_reset() {
    let mut c = mounted();
    c.notify(IntersectionEntry::new(SectionId::Skills, 0.9));
    c.observe(SectionId::Skills, Some(DomRef::new(1200.0, 600.0)));
    c.observe(SectionId::Skills, Some(DomRef::new(1200.0, 600.0)));
    c.observe(SectionId::Skills, None);
    assert!(c.is_revealed(SectionId::Skills));
    assert!(!c.observed_sections().contains(&SectionId::Skills));
}

#[test]
fn about_reveals_at_forty_percent() {
    let mut c = mounted();
    assert!(!c.is_revealed(SectionId::About));
    c.notify(IntersectionEntry::new(SectionId::About, 0.4));
    assert!(c.is_revealed(SectionId::About));
    for ratio in [0.0, 0.1, 1.0, 0.0] {
        c.notify(IntersectionEntry::new(SectionId::About, ratio));
        assert!(c.is_revealed(SectionId::About));
    }
}

#[test]
fn custom_threshold_applies() {
    let mut c = SectionRevealController::new(0.75);
    c.observe(SectionId::Contact, Some(DomRef::new(0.0, 100.0)));
    assert!(!c.notify(IntersectionEntry::new(SectionId::Contact, 0.5)));
    assert!(c.notify(IntersectionEntry::new(SectionId::Contact, 0.75)));
}

#[test]
fn reveal_listener_sees_each_section_once() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let mut c = mounted();
    c.on_reveal(move |id| sink.lock().unwrap().push(id));

    for _ in 0..3 {
        for id in SectionId::ALL {
            c.notify(IntersectionEntry::new(id, 1.0));
        }
    }
    assert_eq!(
        *seen.lock().unwrap(),
        vec![SectionId::About, SectionId::Skills, SectionId::Projects, SectionId::Contact]
    );

    c.clear_on_reveal();
    c.unmount();
    c.observe(SectionId::About, Some(DomRef::new(0.0, 10.0)));
    c.notify(IntersectionEntry::new(SectionId::About, 1.0));
    assert_eq!(seen.lock().unwrap().len(), 4);
}

#[test]
fn nan_ratio_never_reveals() {
    let mut c = mounted();
    assert!(!c.notify(IntersectionEntry::new(SectionId::About, f64::NAN)));
    assert!(!c.is_revealed(SectionId::About));
    assert!(c.is_observed(SectionId::About));
    assert!(c.notify(IntersectionEntry::new(SectionId::About, 0.3)));
}

#[test]
fn invalid_threshold_falls_back_to_default() {
    for bad in [f64::NAN, 0.0, -1.0, 1.5, f64::INFINITY] {
        let mut c = SectionRevealController::new(bad);
        assert_eq!(c.threshold(), 0.3, "{}", bad);
        c.observe(SectionId::Skills, Some(DomRef::new(0.0, 100.0)));
        assert!(!c.notify(IntersectionEntry::new(SectionId::Skills, 0.0)));
        assert!(!c.notify(IntersectionEntry::new(SectionId::Skills, 0.29)));
        assert!(c.notify(IntersectionEntry::new(SectionId::Skills, 0.3)));
    }
}
