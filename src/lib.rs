//! Folio
//!
//! A single-page portfolio site: hero, about, skills, projects and contact
//! sections rendered to static HTML, with scroll-triggered entrance
//! animations driven by a small view-activation model.
//!
//! # Features
//!
//! - **Reveal latch**: each section flips from hidden to visible the first time
//!   at least 30% of it enters the viewport, and stays visible
//! - **Smooth scroll**: navigation affordances scroll the viewport to a
//!   section's document offset
//! - **Deterministic output**: markup, layout and intersection are pure Rust,
//!   so a whole scroll session can be simulated and asserted on
//!
//! # Example
//!
//! ```no_run
//! use folio::{Content, NavAction, Portfolio, SiteConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut page = Portfolio::mount(Content::default(), SiteConfig::default())?;
//! page.navigate(NavAction::GetInTouch);
//! assert!(page.is_revealed(folio::SectionId::Contact));
//! println!("{}", page.render()?);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod error;
pub use error::{Error, Result};

pub mod content;
pub mod motion;
pub mod portfolio;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod theme;

// Markup generation and block layout of the rendered page
pub mod rendering;

// Platform surfaces: simulated viewport, intersection computation, accessibility export
pub mod platform;

pub use content::{Content, ProjectEntry, SkillEntry, SkillLevel, SocialKind, SocialLink};
pub use motion::{Motion, MotionConfig, MotionState, Stagger, Transition};
pub use portfolio::{NavAction, Portfolio};
pub use reveal::{IntersectionEntry, SectionRevealController, DEFAULT_REVEAL_THRESHOLD};
pub use scroll::{ScrollBehavior, ScrollRequest, ScrollSurface, SmoothScrollNavigator};
pub use section::{DomRef, Section, SectionId};
pub use theme::{FontConfig, ThemeMode, ThemeSettings};

/// Configuration for rendering and simulating the site
///
/// The defaults reproduce the published site: a 1280x720 viewport, sections
/// revealing at 30% visibility, system theme detection and the stock motion
/// presets.
///
/// # Examples
///
/// ```
/// let cfg = folio::SiteConfig::default();
/// assert_eq!(cfg.reveal_threshold, 0.3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Viewport used for layout and intersection
    pub viewport: Viewport,
    /// Visible fraction at which a section reveals
    pub reveal_threshold: f64,
    /// Theme application settings
    pub theme: ThemeSettings,
    /// Body font
    pub font: FontConfig,
    /// Entrance animation presets
    pub motion: MotionConfig,
    /// Footer year; the current local year when unset
    pub copyright_year: Option<i32>,
    /// Render every section in its visible state (print, no-script)
    pub reveal_all: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            theme: ThemeSettings::default(),
            font: FontConfig::default(),
            motion: MotionConfig::default(),
            copyright_year: None,
            reveal_all: false,
        }
    }
}

impl SiteConfig {
    /// Load a configuration from a JSON file; missing fields take defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let cfg: SiteConfig = serde_json::from_str(&data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(Error::Config(format!(
                "reveal_threshold must be in (0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(Error::Config(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        Ok(())
    }

    /// Footer copyright year.
    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}
