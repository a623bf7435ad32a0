//! Page content sections: `[hero]`, `[about]`, `[stack]`, `[projects]`,
//! `[contact]` and `[[socials]]`.
//!
//! Everything here is static data consumed by the page renderer.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Built-in inline SVG icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Atom,
    Wind,
    Server,
    Code,
    Moon,
    Terminal,
}

/// Accent color of a card. Maps to `accent-*` classes in the stylesheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Blue,
    Cyan,
    Green,
    Yellow,
    Indigo,
    Purple,
}

impl Accent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Indigo => "indigo",
            Self::Purple => "purple",
        }
    }
}

/// Grid footprint of a stack card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    /// 2×2 card with a large watermark icon.
    Feature,
    /// 1×1 card.
    #[default]
    Tile,
    /// 2×1 card with icon and description side by side.
    Wide,
}

impl CardSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Tile => "tile",
            Self::Wide => "wide",
        }
    }
}

/// Illustration drawn next to a project card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectVisual {
    /// Mock browser window with dashboard tiles.
    #[default]
    Dashboard,
    /// Centered terminal icon.
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Twitter,
}

impl SocialKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
        }
    }
}

// ============================================================================
// Items
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackItem {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Icon shown in the card badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    /// Short text used instead of an icon (e.g. "TS").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,

    #[serde(default)]
    pub accent: Accent,

    #[serde(default)]
    pub size: CardSize,

    /// Extra reveal delay in milliseconds (0, 100, 200, ...).
    #[serde(default)]
    pub delay: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub year: String,
    pub description: String,

    #[serde(default)]
    pub tech: Vec<String>,

    /// Live demo link; the link is omitted when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,

    /// Source code link; the link is omitted when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default)]
    pub accent: Accent,

    #[serde(default)]
    pub visual: ProjectVisual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

// ============================================================================
// Sections
// ============================================================================

/// `[hero]` - first screen, photo and headline.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HeroConfig {
    #[serde(default = "defaults::hero::greeting")]
    #[educe(Default = defaults::hero::greeting())]
    pub greeting: String,

    /// Headline lines; the last one is highlighted.
    #[serde(default = "defaults::hero::headline")]
    #[educe(Default = defaults::hero::headline())]
    pub headline: Vec<String>,

    #[serde(default = "defaults::hero::tagline")]
    #[educe(Default = defaults::hero::tagline())]
    pub tagline: String,

    /// Portrait path, relative to the assets directory.
    #[serde(default = "defaults::hero::image")]
    #[educe(Default = defaults::hero::image())]
    pub image: String,
}

/// `[about]` - short biography.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AboutConfig {
    #[serde(default = "defaults::about::heading")]
    #[educe(Default = defaults::about::heading())]
    pub heading: String,

    #[serde(default = "defaults::about::paragraphs")]
    #[educe(Default = defaults::about::paragraphs())]
    pub paragraphs: Vec<String>,

    #[serde(default = "defaults::about::image")]
    #[educe(Default = defaults::about::image())]
    pub image: String,
}

/// `[stack]` - technology grid.
///
/// # Example
/// ```toml
/// [stack]
/// heading = "Tech Stack"
///
/// [[stack.items]]
/// name = "Rust"
/// description = "Systems and CLIs."
/// icon = "code"
/// accent = "yellow"
/// size = "wide"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct StackConfig {
    #[serde(default = "defaults::stack::heading")]
    #[educe(Default = defaults::stack::heading())]
    pub heading: String,

    #[serde(default = "defaults::stack::subtitle")]
    #[educe(Default = defaults::stack::subtitle())]
    pub subtitle: String,

    #[serde(default = "defaults::stack::items")]
    #[educe(Default = defaults::stack::items())]
    pub items: Vec<StackItem>,
}

/// `[projects]` - project cards.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectsConfig {
    #[serde(default = "defaults::projects::heading")]
    #[educe(Default = defaults::projects::heading())]
    pub heading: String,

    #[serde(default = "defaults::projects::subtitle")]
    #[educe(Default = defaults::projects::subtitle())]
    pub subtitle: String,

    /// Label of the link next to the heading.
    #[serde(default = "defaults::projects::link_label")]
    #[educe(Default = defaults::projects::link_label())]
    pub link_label: String,

    #[serde(default = "defaults::projects::link_href")]
    #[educe(Default = defaults::projects::link_href())]
    pub link_href: String,

    #[serde(default = "defaults::projects::items")]
    #[educe(Default = defaults::projects::items())]
    pub items: Vec<Project>,
}

/// `[contact]` - call to action with a `mailto:` link.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    #[serde(default = "defaults::contact::heading")]
    #[educe(Default = defaults::contact::heading())]
    pub heading: String,

    #[serde(default = "defaults::contact::message")]
    #[educe(Default = defaults::contact::message())]
    pub message: String,

    /// Destination address of the mail action.
    #[serde(default = "defaults::contact::email")]
    #[educe(Default = defaults::contact::email())]
    pub email: String,

    #[serde(default = "defaults::contact::label")]
    #[educe(Default = defaults::contact::label())]
    pub label: String,
}

impl ContactConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_content_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.hero.headline, vec!["FULLSTACK", "DEVELOPER"]);
        assert_eq!(config.about.paragraphs.len(), 2);
        assert_eq!(config.stack.items.len(), 6);
        assert_eq!(config.stack.items[0].size, CardSize::Feature);
        assert_eq!(config.stack.items[1].badge.as_deref(), Some("TS"));
        assert_eq!(config.projects.items.len(), 2);
        assert_eq!(config.contact.mailto(), "mailto:hello@example.com");
        assert_eq!(config.socials.len(), 3);
    }

    #[test]
    fn test_stack_items_override() {
        let config: SiteConfig = toml::from_str(
            r#"
            [[stack.items]]
            name = "Rust"
            icon = "code"
            accent = "yellow"
            size = "wide"
            delay = 100
        "#,
        )
        .unwrap();

        assert_eq!(config.stack.heading, "Tech Stack");
        assert_eq!(
            config.stack.items,
            vec![StackItem {
                name: "Rust".into(),
                description: String::new(),
                icon: Some(Icon::Code),
                badge: None,
                accent: Accent::Yellow,
                size: CardSize::Wide,
                delay: 100,
            }]
        );
    }

    #[test]
    fn test_project_links_optional() {
        let config: SiteConfig = toml::from_str(
            r#"
            [[projects.items]]
            title = "Folio"
            category = "CLI"
            year = "2026"
            description = "Portfolio generator"
            tech = ["Rust"]
            visual = "terminal"
        "#,
        )
        .unwrap();

        let project = &config.projects.items[0];
        assert_eq!(project.demo, None);
        assert_eq!(project.code, None);
        assert_eq!(project.visual, ProjectVisual::Terminal);
        assert_eq!(project.accent, Accent::Blue);
    }

    #[test]
    fn test_socials_override() {
        let config: SiteConfig = toml::from_str(
            r#"
            [[socials]]
            kind = "github"
            href = "https://github.com/jg"
        "#,
        )
        .unwrap();

        assert_eq!(config.socials.len(), 1);
        assert_eq!(config.socials[0].kind, SocialKind::Github);
        assert_eq!(config.socials[0].kind.label(), "GitHub");
    }

    #[test]
    fn test_unknown_icon_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [[stack.items]]
            name = "Go"
            icon = "gopher"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_item_field_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r##"
            [[socials]]
            kind = "twitter"
            href = "#"
            handle = "@jg"
        "##,
        );
        assert!(result.is_err());
    }
}
