//! Section navigation.
//!
//! The navigator never touches the document directly. Anchor lookup and
//! scrolling go through [`SectionAnchors`], which the browser adapter
//! implements with `getElementById` + `scrollIntoView` and tests implement
//! with a map.

use super::menu::MenuController;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Navigable regions of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Stack,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Stack,
        Self::Projects,
        Self::Contact,
    ];

    /// Sections listed as plain links in the nav bar and mobile overlay.
    /// `Contact` is rendered separately as the call-to-action button.
    pub const MENU: [Self; 4] = [Self::Home, Self::About, Self::Stack, Self::Projects];

    /// Anchor id of the section (`id="about"`).
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Stack => "stack",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Human-readable menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Stack => "Stack",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    /// Accepts ids and labels alike (`"about"`, `"About"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

/// How the viewport moves to an anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
    Auto,
}

impl ScrollBehavior {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Instant => "instant",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for ScrollBehavior {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "smooth" => Ok(Self::Smooth),
            "instant" => Ok(Self::Instant),
            "auto" => Ok(Self::Auto),
            _ => Err(()),
        }
    }
}

/// Capability: resolve the anchor of a section, or report it absent.
pub trait SectionAnchors {
    type Anchor;

    /// Find the rendered anchor for `section`.
    fn resolve(&self, section: Section) -> Option<Self::Anchor>;

    /// Bring `anchor` into view.
    fn scroll_into_view(&mut self, anchor: &Self::Anchor, behavior: ScrollBehavior);
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Scrolled(Section),
    /// The section is valid but has no anchor in the current render.
    AnchorMissing(Section),
    /// The identifier is not one of the known sections.
    UnknownTarget,
    /// The page was unmounted; nothing was resolved.
    Detached,
}

impl Navigation {
    pub const fn scrolled(self) -> bool {
        matches!(self, Self::Scrolled(_))
    }
}

/// Moves focus to a named section and closes the overlay menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionNavigator {
    behavior: ScrollBehavior,
}

impl SectionNavigator {
    pub const fn new(behavior: ScrollBehavior) -> Self {
        Self { behavior }
    }

    pub const fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// Navigate to a raw identifier coming from the page (e.g. `data-nav`).
    ///
    /// Missing or unknown targets are a silent no-op. The menu is closed in
    /// every case.
    pub fn navigate<A: SectionAnchors>(
        &self,
        anchors: &mut A,
        menu: &mut MenuController,
        target: &str,
    ) -> Navigation {
        let outcome = match target.parse::<Section>() {
            Ok(section) => self.scroll_to(anchors, section),
            Err(_) => Navigation::UnknownTarget,
        };
        menu.close();
        outcome
    }

    /// Typed variant of [`SectionNavigator::navigate`].
    pub fn navigate_to<A: SectionAnchors>(
        &self,
        anchors: &mut A,
        menu: &mut MenuController,
        section: Section,
    ) -> Navigation {
        let outcome = self.scroll_to(anchors, section);
        menu.close();
        outcome
    }

    fn scroll_to<A: SectionAnchors>(&self, anchors: &mut A, section: Section) -> Navigation {
        match anchors.resolve(section) {
            Some(anchor) => {
                anchors.scroll_into_view(&anchor, self.behavior);
                Navigation::Scrolled(section)
            }
            None => Navigation::AnchorMissing(section),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
