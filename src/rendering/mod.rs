//! Rendering: markup generation and block layout

pub mod layout;
pub mod markup;
pub mod page;

pub use layout::{layout_document, PageLayout, SectionBox};
pub use page::render_page;

use crate::content::Content;
use crate::reveal::SectionRevealController;
use crate::{Result, SiteConfig};
use scraper::Html;
use sha2::{Digest, Sha256};

/// A rendered page together with its layout.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub layout: PageLayout,
}

impl RenderedPage {
    /// Hex SHA-256 of the markup; stable for identical content, config and
    /// reveal state.
    pub fn digest(&self) -> String {
        digest_html(&self.html)
    }
}

pub fn digest_html(html: &str) -> String {
    hex::encode(Sha256::digest(html.as_bytes()))
}

/// Render the page and lay it out for the configured viewport.
pub fn render_document(
    content: &Content,
    reveal: &SectionRevealController,
    config: &SiteConfig,
) -> Result<RenderedPage> {
    let html = render_page(content, reveal, config)?;
    let document = Html::parse_document(&html);
    let layout = layout_document(&document, config.viewport);
    Ok(RenderedPage { html, layout })
}
