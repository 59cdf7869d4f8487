use crate::config::PageConfig;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The kinds of element the page reveals on scroll, each with its own
/// transition profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealKind {
    MenuCard,
    GalleryImage,
}

impl RevealKind {
    /// Downward offset while hidden, in pixels
    fn hidden_offset(&self) -> f64 {
        match self {
            RevealKind::MenuCard => 30.0,
            RevealKind::GalleryImage => 20.0,
        }
    }

    /// Transition duration in seconds
    fn duration(&self) -> f64 {
        match self {
            RevealKind::MenuCard => 0.6,
            RevealKind::GalleryImage => 0.5,
        }
    }

    /// Per-index stagger in seconds
    fn stagger(&self) -> f64 {
        match self {
            RevealKind::MenuCard => 0.1,
            RevealKind::GalleryImage => 0.05,
        }
    }
}

/// Style the host applies to a revealed or hidden element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate_y: f64,
    pub transition: String,
}

/// Options the host passes to its intersection observer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl ObserverOptions {
    /// Observer options for scroll reveals, from the page configuration
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            root_margin: format!("0px 0px -{}px 0px", config.reveal_bottom_margin),
        }
    }
}

struct RevealItem {
    kind: RevealKind,
    index: usize,
    revealed: bool,
}

/// One-time scroll reveal state for registered elements.
///
/// Registration returns the initial hidden style; the first intersection
/// report flips the element to its revealed style and later reports change
/// nothing.
#[derive(Default)]
pub struct RevealController {
    items: HashMap<String, RevealItem>,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element, returning the hidden style to apply up front.
    ///
    /// `index` is the element's position within its kind and drives the
    /// stagger delay.
    pub fn register(&mut self, id: impl Into<String>, kind: RevealKind, index: usize) -> RevealStyle {
        let id = id.into();
        self.items.insert(
            id,
            RevealItem {
                kind,
                index,
                revealed: false,
            },
        );
        Self::style(kind, index, false)
    }

    /// Process an intersection report.
    ///
    /// Returns the revealed style exactly once, on the first intersection;
    /// `None` means nothing changed. Unknown ids are inoperative.
    pub fn on_intersection(&mut self, id: &str, is_intersecting: bool) -> Option<RevealStyle> {
        let item = match self.items.get_mut(id) {
            Some(item) => item,
            None => {
                debug!("Intersection report for unregistered element '{}'", id);
                return None;
            }
        };

        if !is_intersecting || item.revealed {
            return None;
        }

        item.revealed = true;
        Some(Self::style(item.kind, item.index, true))
    }

    /// Whether an element has been revealed
    pub fn is_revealed(&self, id: &str) -> bool {
        self.items.get(id).map(|item| item.revealed).unwrap_or(false)
    }

    /// Number of registered elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no elements are registered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn style(kind: RevealKind, index: usize, revealed: bool) -> RevealStyle {
        let delay = index as f64 * kind.stagger();
        let duration = kind.duration();

        RevealStyle {
            opacity: if revealed { 1.0 } else { 0.0 },
            translate_y: if revealed { 0.0 } else { kind.hidden_offset() },
            transition: format!(
                "opacity {}s ease {}s, transform {}s ease {}s",
                duration, delay, duration, delay
            ),
        }
    }
}
