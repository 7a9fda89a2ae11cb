//! Static site content: profile, skills, projects, social links and metadata.
//!
//! `Content::default()` is the published site. Alternative content can be
//! loaded from JSON; it is normalised (duplicate project tags dropped) and
//! validated before use.

use crate::{Error, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: SkillLevel,
}

impl SkillEntry {
    pub fn new(name: &str, level: SkillLevel) -> Self {
        Self { name: name.to_string(), level }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    /// Treated as a set; display order is first occurrence.
    pub tags: Vec<String>,
    pub image: String,
    pub demo_link: String,
    pub code_link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::Email => "Email",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SocialKind::GitHub => "github",
            SocialKind::LinkedIn => "linkedin",
            SocialKind::Email => "mail",
        }
    }

    /// Whether the link should open in a new browsing context.
    pub fn opens_externally(self) -> bool {
        !matches!(self, SocialKind::Email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

impl SocialLink {
    pub fn new(kind: SocialKind, href: &str) -> Self {
        Self { kind, href: href.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub about: Vec<String>,
    pub image: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub kind: String,
    pub locale: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub generator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub metadata: SiteMetadata,
    pub profile: Profile,
    pub hero_links: Vec<SocialLink>,
    pub contact_links: Vec<SocialLink>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    /// Second footer line.
    pub colophon: String,
}

const NAME: &str = "Most. Romana Akter Ria";
const DESCRIPTION: &str = "Front-end developer specializing in React, Next.js, and TypeScript with 5+ years of experience building modern web applications.";
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=300";

fn project(title: &str, description: &str, tags: &[&str]) -> ProjectEntry {
    ProjectEntry {
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: PLACEHOLDER_IMAGE.to_string(),
        demo_link: "#".to_string(),
        code_link: "#".to_string(),
    }
}

impl Default for Content {
    fn default() -> Self {
        use SkillLevel::*;

        let metadata = SiteMetadata {
            title: format!("{} | Front-End Developer", NAME),
            description: DESCRIPTION.to_string(),
            keywords: [
                "front-end developer",
                "react developer",
                "next.js developer",
                "web developer",
                "UI developer",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            authors: vec![NAME.to_string()],
            open_graph: OpenGraph {
                kind: "website".to_string(),
                locale: "en_US".to_string(),
                url: "https://johndoe.dev".to_string(),
                title: "John Doe | Front-End Developer".to_string(),
                description: DESCRIPTION.to_string(),
                site_name: "John Doe Portfolio".to_string(),
            },
            twitter: TwitterCard {
                card: "summary_large_image".to_string(),
                title: format!("{} | Front-End Developer", NAME),
                description: DESCRIPTION.to_string(),
            },
            generator: Some("v0.dev".to_string()),
        };

        let profile = Profile {
            name: NAME.to_string(),
            role: "Front-End Developer".to_string(),
            about: vec![
                "I'm a passionate front-end developer with a keen eye for design and a love for creating intuitive, responsive web applications. With over 5 years of experience in the industry, I specialize in building modern web applications using React, Next.js, and TypeScript.".to_string(),
                "My approach combines technical expertise with creative problem-solving to deliver exceptional user experiences. I'm constantly learning and exploring new technologies to stay at the forefront of web development.".to_string(),
            ],
            image: "profile.png?height=400&width=400".to_string(),
            contact_email: "contact@example.com".to_string(),
        };

        let hero_links = vec![
            SocialLink::new(SocialKind::GitHub, "https://github.com"),
            SocialLink::new(SocialKind::LinkedIn, "https://linkedin.com"),
            SocialLink::new(SocialKind::Email, "mailto:contact@example.com"),
        ];
        let contact_links = vec![
            SocialLink::new(SocialKind::GitHub, "https://github.com"),
            SocialLink::new(SocialKind::LinkedIn, "https://linkedin.com"),
            SocialLink::new(SocialKind::Email, "mailto:riaislam88197@gmail.com"),
        ];

        let skills = vec![
            SkillEntry::new("React", Expert),
            SkillEntry::new("Next.js", Expert),
            SkillEntry::new("TypeScript", Advanced),
            SkillEntry::new("JavaScript", Expert),
            SkillEntry::new("HTML/CSS", Expert),
            SkillEntry::new("Tailwind CSS", Advanced),
            SkillEntry::new("Redux", Advanced),
            SkillEntry::new("GraphQL", Intermediate),
            SkillEntry::new("Framer Motion", Intermediate),
            SkillEntry::new("Jest", Advanced),
            SkillEntry::new("Git", Advanced),
            SkillEntry::new("Figma", Intermediate),
        ];

        let projects = vec![
            project(
                "E-commerce Platform",
                "A modern e-commerce platform built with Next.js and Stripe integration.",
                &["Next.js", "TypeScript", "Stripe", "Tailwind CSS"],
            ),
            project(
                "Task Management App",
                "A collaborative task management application with real-time updates.",
                &["React", "Firebase", "Redux", "Styled Components"],
            ),
            project(
                "Portfolio Website",
                "A responsive portfolio website with animations and dark mode support.",
                &["Next.js", "Framer Motion", "Tailwind CSS"],
            ),
        ];

        Self {
            metadata,
            profile,
            hero_links,
            contact_links,
            skills,
            projects,
            colophon: "Designed and built with \u{2764}\u{fe0f} using Next.js and Tailwind CSS"
                .to_string(),
        }
    }
}

impl Content {
    /// Parse, normalise and validate content from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let mut content: Content = serde_json::from_str(s)?;
        content.normalize();
        content.validate()?;
        Ok(content)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&data)
    }

    /// Drop repeated project tags, keeping the first occurrence.
    pub fn normalize(&mut self) {
        for p in &mut self.projects {
            let before = p.tags.len();
            let mut seen = HashSet::new();
            p.tags.retain(|t| seen.insert(t.clone()));
            if p.tags.len() != before {
                warn!(
                    "project '{}': dropped {} duplicate tag(s)",
                    p.title,
                    before - p.tags.len()
                );
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        non_empty("profile name", &self.profile.name)?;
        non_empty("site title", &self.metadata.title)?;

        let mut names = HashSet::new();
        for s in &self.skills {
            non_empty("skill name", &s.name)?;
            if !names.insert(s.name.as_str()) {
                return Err(Error::Content(format!("duplicate skill '{}'", s.name)));
            }
        }

        let mut titles = HashSet::new();
        for p in &self.projects {
            non_empty("project title", &p.title)?;
            if !titles.insert(p.title.as_str()) {
                return Err(Error::Content(format!("duplicate project '{}'", p.title)));
            }
            check_link(&p.demo_link)?;
            check_link(&p.code_link)?;
            check_link(&p.image)?;
        }

        for l in self.hero_links.iter().chain(&self.contact_links) {
            check_link(&l.href)?;
            if l.kind == SocialKind::Email && !l.href.starts_with("mailto:") {
                return Err(Error::Content(format!(
                    "email link must use mailto: ({})",
                    l.href
                )));
            }
        }
        check_link(&format!("mailto:{}", self.profile.contact_email))?;
        Ok(())
    }
}

fn non_empty(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Content(format!("{} must not be empty", what)));
    }
    Ok(())
}

/// Accepts `#`, `#anchor`, root-relative and bare relative paths, `mailto:`
/// addresses and absolute http(s) URLs.
pub fn check_link(href: &str) -> Result<()> {
    let href = href.trim();
    if href.is_empty() {
        return Err(Error::Content("empty link".into()));
    }
    if href.starts_with('#') || href.starts_with('/') {
        return Ok(());
    }
    match url::Url::parse(href) {
        Ok(u) => match u.scheme() {
            "http" | "https" => Ok(()),
            "mailto" if u.path().contains('@') => Ok(()),
            "mailto" => Err(Error::Content(format!("malformed email link '{}'", href))),
            other => Err(Error::Content(format!(
                "unsupported link scheme '{}' in '{}'",
                other, href
            ))),
        },
        // No scheme: a relative asset path such as `profile.png?height=400`.
        Err(url::ParseError::RelativeUrlWithoutBase) if !href.contains(char::is_whitespace) => {
            Ok(())
        }
        Err(e) => Err(Error::Content(format!("invalid link '{}': {}", href, e))),
    }
}
