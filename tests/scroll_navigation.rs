//! Smooth-scroll navigation against the simulated viewport

use folio::platform::SimulatedViewport;
use folio::{
    Content, DomRef, NavAction, Portfolio, ScrollBehavior, ScrollSurface, Section, SectionId,
    SiteConfig, SmoothScrollNavigator, Viewport,
};

fn viewport() -> SimulatedViewport {
    SimulatedViewport::new(Viewport { width: 1280, height: 720 }, 5000.0)
}

#[test]
fn unset_target_issues_no_request() {
    let vp = viewport();
    let mut nav = SmoothScrollNavigator::new(&vp);
    for id in SectionId::ALL {
        assert!(nav.scroll_to(&Section::unmounted(id)).is_none());
    }
    assert!(vp.requests().is_empty());
    assert_eq!(vp.scroll_y(), 0.0);
}

#[test]
fn request_matches_section_offset() {
    let vp = viewport();
    let mut nav = SmoothScrollNavigator::new(&vp);
    let about = Section::new(SectionId::About, Some(DomRef::new(720.0, 672.0)));
    nav.scroll_to(&about);

    let reqs = vp.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].top, 720.0);
    assert_eq!(reqs[0].behavior, ScrollBehavior::Smooth);
    assert_eq!(vp.scroll_y(), 720.0);
}

#[test]
fn later_call_supersedes_earlier_target() {
    let vp = viewport();
    let mut nav = SmoothScrollNavigator::new(&vp);
    nav.scroll_to(&Section::new(SectionId::Projects, Some(DomRef::new(2000.0, 600.0))));
    nav.scroll_to(&Section::new(SectionId::About, Some(DomRef::new(720.0, 600.0))));
    assert_eq!(vp.scroll_y(), 720.0);
    assert_eq!(nav.last_target(), Some(720.0));
}

#[test]
fn scroll_hint_lands_on_about() {
    let mut page = Portfolio::mount(Content::default(), SiteConfig::default()).unwrap();
    let about = page.layout().dom_ref(SectionId::About).unwrap();

    let revealed = page.navigate(NavAction::ScrollHint);
    assert_eq!(page.scroll_y(), about.offset_top);
    assert!(revealed.contains(&SectionId::About));
    assert!(page.is_revealed(SectionId::About));
    assert!(!page.is_revealed(SectionId::Skills));
}

#[test]
fn get_in_touch_reveals_contact() {
    let mut page = Portfolio::mount(Content::default(), SiteConfig::default()).unwrap();
    page.navigate(NavAction::GetInTouch);
    assert!(page.is_revealed(SectionId::Contact));
    assert_eq!(page.scroll_y(), page.viewport().max_scroll());

    let reqs = page.viewport().requests();
    let contact = page.layout().dom_ref(SectionId::Contact).unwrap();
    assert_eq!(reqs.last().unwrap().top, contact.offset_top);
}
