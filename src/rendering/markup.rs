//! Small HTML builder with escaping

use std::fmt::Write;

/// Escape text content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const VOID_TAGS: &[&str] = &["img", "meta", "link", "br", "hr", "input"];

/// An element under construction. Children are already-rendered markup.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<String>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, attrs: Vec::new(), children: Vec::new() }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append escaped text.
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(escape(text));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child.render());
        self
    }

    pub fn children<I: IntoIterator<Item = Element>>(mut self, children: I) -> Self {
        self.children.extend(children.into_iter().map(|c| c.render()));
        self
    }

    /// Append markup that has already been rendered (and escaped).
    pub fn raw(mut self, html: impl Into<String>) -> Self {
        self.children.push(html.into());
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "<{}", self.tag);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", k, escape(v));
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return out;
        }
        for c in &self.children {
            out.push_str(c);
        }
        let _ = write!(out, "</{}>", self.tag);
        out
    }
}
