//! Declarative entrance animations.
//!
//! Each animated element has a hidden and a visible `MotionState` and a
//! `Transition`. Lists stagger their items with a fixed delay step. Motion is
//! rendered to inline CSS so the markup reflects the reveal latch directly.

use serde::{Deserialize, Serialize};

/// Opacity and vertical offset (px) of an animated element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    pub opacity: f32,
    pub y: f32,
}

impl MotionState {
    pub const VISIBLE: MotionState = MotionState { opacity: 1.0, y: 0.0 };

    pub fn hidden(y: f32) -> Self {
        Self { opacity: 0.0, y }
    }
}

/// Timing in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration: f32,
    #[serde(default)]
    pub delay: f32,
}

/// An element's entrance: where it starts, where it ends and how it gets there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub initial: MotionState,
    pub animate: MotionState,
    pub transition: Transition,
}

impl Motion {
    /// State for the current latch value.
    pub fn state(&self, revealed: bool) -> MotionState {
        if revealed {
            self.animate
        } else {
            self.initial
        }
    }

    /// Inline CSS for this motion in the given latch state.
    pub fn style(&self, revealed: bool) -> String {
        let s = self.state(revealed);
        let t = self.transition;
        format!(
            "opacity:{};transform:translateY({}px);transition:opacity {}s ease-out {}s,transform {}s ease-out {}s",
            fmt_num(s.opacity),
            fmt_num(s.y),
            fmt_num(t.duration),
            fmt_num(t.delay),
            fmt_num(t.duration),
            fmt_num(t.delay),
        )
    }
}

/// Uniform timing for list items: item `i` starts `i * delay_step` late.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    pub delay_step: f32,
    pub duration: f32,
    pub offset_y: f32,
}

impl Stagger {
    pub fn transition(&self, index: usize) -> Transition {
        Transition {
            duration: self.duration,
            delay: self.delay_step * index as f32,
        }
    }

    pub fn motion(&self, index: usize) -> Motion {
        Motion {
            initial: MotionState::hidden(self.offset_y),
            animate: MotionState::VISIBLE,
            transition: self.transition(index),
        }
    }
}

/// Animation presets for every animated element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Hero content; animates on mount, independent of scroll.
    pub hero: Motion,
    /// Scroll hint chevron under the hero.
    pub scroll_hint: Motion,
    /// Container of each latched section.
    pub section: Motion,
    /// Skill cards and project cards.
    pub list: Stagger,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            hero: Motion {
                initial: MotionState::hidden(20.0),
                animate: MotionState::VISIBLE,
                transition: Transition { duration: 0.5, delay: 0.0 },
            },
            scroll_hint: Motion {
                initial: MotionState::hidden(0.0),
                animate: MotionState::VISIBLE,
                transition: Transition { duration: 1.0, delay: 1.0 },
            },
            section: Motion {
                initial: MotionState::hidden(50.0),
                animate: MotionState::VISIBLE,
                transition: Transition { duration: 0.5, delay: 0.0 },
            },
            list: Stagger {
                delay_step: 0.1,
                duration: 0.3,
                offset_y: 20.0,
            },
        }
    }
}

// Trims float noise so styles stay stable across platforms ("0.30000001" -> "0.3").
fn fmt_num(v: f32) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
