//! Accessibility tree export for the rendered page

use crate::rendering::PageLayout;
use crate::section::SectionId;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityNode {
    pub id: String,
    pub role: String,
    pub name: Option<String>,
    pub bounds: Option<(i32, i32, u32, u32)>,
    pub children: Vec<AccessibilityNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityTree {
    pub root_id: Option<String>,
    pub nodes: Vec<AccessibilityNode>,
}

impl AccessibilityTree {
    /// Depth-first search by role and accessible name.
    pub fn find(&self, role: &str, name: &str) -> Option<&AccessibilityNode> {
        fn walk<'a>(n: &'a AccessibilityNode, role: &str, name: &str) -> Option<&'a AccessibilityNode> {
            if n.role == role && n.name.as_deref() == Some(name) {
                return Some(n);
            }
            n.children.iter().find_map(|c| walk(c, role, name))
        }
        self.nodes.iter().find_map(|n| walk(n, role, name))
    }
}

pub trait AccessibilityProvider: Send + Sync {
    /// Export a reproducible accessibility tree snapshot for tests
    fn export_tree(&self) -> AccessibilityTree;
}

/// Builds the tree from rendered markup: one region per section, with its
/// headings, links, buttons and images underneath.
pub struct DocumentAccessibility {
    html: String,
    layout: Option<PageLayout>,
}

impl DocumentAccessibility {
    pub fn new(html: impl Into<String>) -> Self {
        DocumentAccessibility { html: html.into(), layout: None }
    }

    /// Attach section bounds from a layout pass.
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    fn bounds(&self, id: SectionId) -> Option<(i32, i32, u32, u32)> {
        let layout = self.layout.as_ref()?;
        let b = layout.sections.iter().find(|b| b.id == id)?;
        Some((
            b.rect.x.round() as i32,
            b.rect.y.round() as i32,
            b.rect.width.round() as u32,
            b.rect.height.round() as u32,
        ))
    }
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn accessible_name(el: &ElementRef) -> Option<String> {
    let v = el.value();
    if let Some(label) = v.attr("aria-label") {
        return Some(label.to_string());
    }
    if v.name() == "img" {
        return v.attr("alt").map(|s| s.to_string());
    }
    let text = collapse(&el.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

fn role_of(el: &ElementRef) -> Option<&'static str> {
    match el.value().name() {
        "h1" | "h2" | "h3" => Some("heading"),
        "a" => Some("link"),
        "button" => Some("button"),
        "img" => Some("img"),
        _ => None,
    }
}

impl AccessibilityProvider for DocumentAccessibility {
    fn export_tree(&self) -> AccessibilityTree {
        let doc = Html::parse_document(&self.html);
        let section_sel = Selector::parse("section[data-section]").unwrap();
        let inner_sel = Selector::parse("h1, h2, h3, a, button, img").unwrap();
        let title_sel = Selector::parse("title").unwrap();

        let mut regions = Vec::new();
        for (si, section) in doc.select(&section_sel).enumerate() {
            let anchor = section.value().attr("data-section").unwrap_or_default();
            let id = SectionId::from_anchor(anchor);
            let heading = section
                .value()
                .attr("aria-labelledby")
                .and_then(|h| Selector::parse(&format!("#{}", h)).ok())
                .and_then(|s| doc.select(&s).next())
                .map(|h| collapse(&h.text().collect::<String>()));

            let children = section
                .select(&inner_sel)
                .enumerate()
                .filter_map(|(ci, el)| {
                    Some(AccessibilityNode {
                        id: format!("{}-{}", anchor, ci),
                        role: role_of(&el)?.to_string(),
                        name: accessible_name(&el),
                        bounds: None,
                        children: Vec::new(),
                    })
                })
                .collect();

            regions.push(AccessibilityNode {
                id: if anchor.is_empty() { format!("section-{}", si) } else { anchor.to_string() },
                role: "region".to_string(),
                name: heading,
                bounds: id.and_then(|id| self.bounds(id)),
                children,
            });
        }

        let title = doc
            .select(&title_sel)
            .next()
            .map(|t| collapse(&t.text().collect::<String>()));

        AccessibilityTree {
            root_id: Some("document".to_string()),
            nodes: vec![AccessibilityNode {
                id: "document".to_string(),
                role: "document".to_string(),
                name: title,
                bounds: None,
                children: regions,
            }],
        }
    }
}
