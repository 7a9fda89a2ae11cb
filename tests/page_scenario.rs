//! End-to-end scroll sessions over the default page

use folio::{Content, Portfolio, SectionId, SiteConfig, Viewport};
use scraper::{Html, Selector};
use std::sync::{Arc, Mutex};

fn config() -> SiteConfig {
    SiteConfig { copyright_year: Some(2025), ..Default::default() }
}

fn revealed_attrs(html: &str) -> Vec<(String, bool)> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("section[data-section]").unwrap();
    doc.select(&sel)
        .map(|s| {
            (
                s.value().attr("data-section").unwrap().to_string(),
                s.value().attr("data-revealed") == Some("true"),
            )
        })
        .collect()
}

#[test]
fn sections_are_laid_out_in_page_order() {
    let page = Portfolio::mount(Content::default(), config()).unwrap();
    let boxes = &page.layout().sections;
    let ids: Vec<SectionId> = boxes.iter().map(|b| b.id).collect();
    assert_eq!(ids, SectionId::ALL.to_vec());
    assert_eq!(boxes[0].rect.y, 0.0);
    assert_eq!(boxes[0].rect.height, 720.0);
    for pair in boxes.windows(2) {
        assert!(pair[1].rect.height > 0.0);
        assert_eq!(pair[1].rect.y, pair[0].rect.y + pair[0].rect.height);
    }
}

#[test]
fn about_stays_hidden_until_forty_percent_visible() {
    let mut page = Portfolio::mount(Content::default(), config()).unwrap();
    assert!(page.is_revealed(SectionId::Hero));
    assert!(!page.is_revealed(SectionId::About));

    let about = page.layout().dom_ref(SectionId::About).unwrap();
    // Viewport bottom sits 25% into the about section.
    page.scroll_to_y(about.offset_top - 720.0 + about.height * 0.25);
    assert!(!page.is_revealed(SectionId::About));

    // 40% of the section is now on screen.
    let revealed = page.scroll_to_y(about.offset_top - 720.0 + about.height * 0.4);
    assert_eq!(revealed, vec![SectionId::About]);

    page.scroll_to_y(0.0);
    assert!(page.is_revealed(SectionId::About));
    let attrs = revealed_attrs(&page.render().unwrap());
    assert_eq!(attrs[1], ("about".to_string(), true));
    assert_eq!(attrs[2], ("skills".to_string(), false));
}

#[test]
fn full_scroll_reveals_every_section_once() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let mut page = Portfolio::mount(Content::default(), config()).unwrap();
    page.on_reveal(move |id| sink.lock().unwrap().push(id));

    let events = page.run_scroll_session(120.0).unwrap();
    let order: Vec<SectionId> = events.iter().map(|e| e.section).collect();
    assert_eq!(
        order,
        vec![SectionId::About, SectionId::Skills, SectionId::Projects, SectionId::Contact]
    );
    assert_eq!(*seen.lock().unwrap(), order);
    assert!(events.windows(2).all(|w| w[0].scroll_y <= w[1].scroll_y));

    // Scrolling back up and down again changes nothing.
    page.scroll_to_y(0.0);
    assert!(page.run_scroll_session(120.0).unwrap().is_empty());
    assert!(revealed_attrs(&page.render().unwrap()).iter().all(|(_, r)| *r));
}

#[test]
fn narrow_viewport_still_reveals_everything() {
    let cfg = SiteConfig {
        viewport: Viewport { width: 375, height: 667 },
        ..config()
    };
    let mut page = Portfolio::mount(Content::default(), cfg).unwrap();
    let wide = Portfolio::mount(Content::default(), config()).unwrap();
    let skills_narrow = page.layout().dom_ref(SectionId::Skills).unwrap();
    let skills_wide = wide.layout().dom_ref(SectionId::Skills).unwrap();
    assert!(skills_narrow.height > skills_wide.height);

    page.run_scroll_session(50.0).unwrap();
    for id in SectionId::ALL {
        assert!(page.is_revealed(id), "{} hidden", id);
    }
}

#[test]
fn unmount_consumes_the_page() {
    let mut page = Portfolio::mount(Content::default(), config()).unwrap();
    page.run_scroll_session(200.0).unwrap();
    page.unmount();
}
