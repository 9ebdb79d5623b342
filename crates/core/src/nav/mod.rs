use serde::{Deserialize, Serialize};

use crate::{Result, ShowcaseError};

/// Scroll offset past which the navigation bar detaches from the top.
pub const DEFAULT_SCROLL_THRESHOLD: f32 = 50.0;

/// Page sections in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Services,
    Gallery,
    Assets,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::Gallery,
        Section::Assets,
        Section::Contact,
    ];

    /// Fragment id the navigation links scroll to.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "hero",
            Section::Services => "services",
            Section::Gallery => "gallery",
            Section::Assets => "assets",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Gallery => "Gallery",
            Section::Assets => "Assets",
            Section::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Result<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
            .ok_or_else(|| ShowcaseError::msg(format!("unknown section `#{anchor}`")))
    }
}

/// Whether the navigation bar is in its compact, detached form.
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarState {
    threshold: f32,
    detached: bool,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl NavbarState {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            detached: false,
        }
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Feeds the latest vertical scroll offset. Returns `true` when the bar
    /// switched between its attached and detached forms.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        let detached = offset > self.threshold;
        let changed = detached != self.detached;
        if changed {
            tracing::debug!(offset, detached, "navbar visibility changed");
        }
        self.detached = detached;
        changed
    }
}
