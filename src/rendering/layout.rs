//! Block layout estimation for the rendered page
//!
//! Stacks sections vertically and estimates each section's height from its
//! markup: headings and paragraphs (wrapped at a fixed character width),
//! images, buttons and card grids whose column count depends on the viewport
//! breakpoint. Good enough to place sections for scroll and intersection; not
//! a CSS engine.

use crate::section::{DomRef, SectionId};
use crate::Viewport;
use scraper::{ElementRef, Html, Selector};

const CHAR_WIDTH: f64 = 8.0;
const FOOTER_HEIGHT: f64 = 72.0;

/// Breakpoints (min-width px) in `data-columns` order: base, sm, md, lg.
const BREAKPOINTS: [u32; 3] = [640, 768, 1024];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A laid out page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: SectionId,
    pub rect: Rect,
}

impl SectionBox {
    pub fn dom_ref(&self) -> DomRef {
        DomRef::new(self.rect.y, self.rect.height)
    }
}

/// Result of laying out a document.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub sections: Vec<SectionBox>,
    pub document_height: f64,
}

impl PageLayout {
    pub fn dom_ref(&self, id: SectionId) -> Option<DomRef> {
        self.sections.iter().find(|b| b.id == id).map(|b| b.dom_ref())
    }
}

fn breakpoint_index(width: u32) -> usize {
    BREAKPOINTS.iter().filter(|bp| width >= **bp).count()
}

fn is_md(vw: u32) -> bool {
    vw >= 768
}

/// Content width inside a `container px-4 md:px-6`.
fn container_width(vw: u32) -> f64 {
    let max = [1536u32, 1280, 1024, 768, 640]
        .into_iter()
        .find(|bp| vw >= *bp)
        .unwrap_or(vw);
    let pad = if is_md(vw) { 48.0 } else { 32.0 };
    (max as f64 - pad).max(CHAR_WIDTH)
}

fn has_class(el: &ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

fn wrapped_lines(text: &str, width: f64) -> usize {
    let chars_per_line = ((width / CHAR_WIDTH) as usize).max(1);
    let mut lines = 0usize;
    let mut cur = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if cur > 0 && cur + 1 + len > chars_per_line {
            lines += 1;
            cur = len;
        } else {
            cur += if cur == 0 { len } else { len + 1 };
        }
    }
    if cur > 0 {
        lines += 1;
    }
    lines.max(1)
}

fn line_height(el: &ElementRef) -> f64 {
    if has_class(el, "text-sm") {
        20.0
    } else if has_class(el, "text-lg") {
        28.0
    } else {
        24.0
    }
}

fn parse_columns(el: &ElementRef, vw: u32) -> Option<usize> {
    let columns = el.value().attr("data-columns")?;
    let cols: Vec<usize> = columns
        .split(',')
        .filter_map(|c| c.trim().parse().ok())
        .collect();
    // "base,sm,md,lg": one count per breakpoint tier.
    let n = cols
        .get(breakpoint_index(vw))
        .or_else(|| cols.last())
        .copied()
        .unwrap_or(1);
    Some(n.max(1))
}

/// Estimated height of `el` when laid out `width` px wide.
fn block_height(el: ElementRef, width: f64, vw: u32) -> f64 {
    match el.value().name() {
        "h1" => 72.0,
        "h2" => 48.0 + 32.0,
        "h3" => 28.0,
        "p" => {
            let text = el.text().collect::<String>();
            wrapped_lines(&text, width) as f64 * line_height(&el)
        }
        "img" => {
            if has_class(&el, "aspect-square") {
                return width.min(400.0);
            }
            let w: f64 = el.value().attr("width").and_then(|v| v.parse().ok()).unwrap_or(width);
            let h: f64 = el.value().attr("height").and_then(|v| v.parse().ok()).unwrap_or(0.0);
            if w > 0.0 { h * (width / w).min(1.0) } else { h }
        }
        "button" | "a" => 40.0,
        "span" => 24.0,
        _ => container_height(el, width, vw),
    }
}

fn container_height(el: ElementRef, width: f64, vw: u32) -> f64 {
    let children: Vec<ElementRef> = el.children().filter_map(ElementRef::wrap).collect();
    if children.is_empty() {
        return 0.0;
    }

    if has_class(&el, "aspect-video") {
        return width * 9.0 / 16.0;
    }

    if let Some(cols) = parse_columns(&el, vw) {
        let gap: f64 = el.value().attr("data-gap").and_then(|g| g.parse().ok()).unwrap_or(0.0);
        let col_w = (width - gap * (cols as f64 - 1.0)) / cols as f64;
        let rows: Vec<f64> = children
            .chunks(cols)
            .map(|row| {
                row.iter()
                    .map(|c| block_height(*c, col_w, vw))
                    .fold(0.0, f64::max)
            })
            .collect();
        return rows.iter().sum::<f64>() + gap * (rows.len() as f64 - 1.0);
    }

    let is_row = has_class(&el, "flex") && !has_class(&el, "flex-col");
    let mut h = if is_row {
        children
            .iter()
            .map(|c| block_height(*c, width, vw))
            .fold(0.0, f64::max)
    } else {
        let spacing = if has_class(&el, "space-y-4") { 16.0 } else { 0.0 };
        let stacked: f64 = children.iter().map(|c| block_height(*c, width, vw)).sum();
        stacked + spacing * (children.len() as f64 - 1.0)
    };
    if has_class(&el, "mt-8") {
        h += 32.0;
    } else if has_class(&el, "pt-4") {
        h += 16.0;
    }
    h
}

fn section_height(el: ElementRef, viewport: Viewport) -> f64 {
    if has_class(&el, "h-screen") {
        return viewport.height as f64;
    }
    let padding = if is_md(viewport.width) { 96.0 * 2.0 } else { 80.0 * 2.0 };
    let width = container_width(viewport.width);
    let content: f64 = el
        .children()
        .filter_map(ElementRef::wrap)
        .map(|c| block_height(c, width, viewport.width))
        .sum();
    padding + content
}

/// Lay out the page's sections top to bottom.
///
/// Only `<section data-section=...>` elements with a known anchor are
/// returned; the footer is counted in `document_height`.
pub fn layout_document(document: &Html, viewport: Viewport) -> PageLayout {
    let sel = Selector::parse("section[data-section]").unwrap();
    let mut y = 0.0f64;
    let mut sections = Vec::new();

    for el in document.select(&sel) {
        let Some(id) = el.value().attr("data-section").and_then(SectionId::from_anchor) else {
            continue;
        };
        let height = section_height(el, viewport);
        sections.push(SectionBox {
            id,
            rect: Rect { x: 0.0, y, width: viewport.width as f64, height },
        });
        y += height;
    }

    let footer_sel = Selector::parse("footer").unwrap();
    if document.select(&footer_sel).next().is_some() {
        y += FOOTER_HEIGHT;
    }

    PageLayout { sections, document_height: y }
}
