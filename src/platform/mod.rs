//! Platform surfaces: viewport scrolling, intersection and accessibility
//!
//! A browser binding would supply these from the DOM; the implementations
//! here are deterministic and pure Rust so a whole scroll session can run in
//! tests and from the command line.

pub mod accessibility;
pub mod intersection;
pub mod viewport;

pub use accessibility::{AccessibilityNode, AccessibilityProvider, AccessibilityTree, DocumentAccessibility};
pub use intersection::{intersection_ratio, IntersectionTracker};
pub use viewport::SimulatedViewport;
