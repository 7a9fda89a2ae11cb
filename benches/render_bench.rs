use criterion::{criterion_group, criterion_main, Criterion};

use folio::rendering::render_document;
use folio::{Content, Portfolio, SectionRevealController, SiteConfig};

fn bench_render_document(c: &mut Criterion) {
    let content = Content::default();
    let cfg = SiteConfig {
        copyright_year: Some(2025),
        ..Default::default()
    };
    let reveal = SectionRevealController::default();

    c.bench_function("render_document", |b| {
        b.iter(|| {
            render_document(&content, &reveal, &cfg).unwrap();
        })
    });
}

fn bench_scroll_session(c: &mut Criterion) {
    c.bench_function("mount_and_scroll", |b| {
        b.iter(|| {
            let mut page = Portfolio::mount(Content::default(), SiteConfig::default()).unwrap();
            page.run_scroll_session(60.0).unwrap();
        })
    });
}

criterion_group!(benches, bench_render_document, bench_scroll_session);
criterion_main!(benches);
