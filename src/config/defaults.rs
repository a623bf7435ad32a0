//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization. The
//! content defaults describe a complete example portfolio, so a fresh
//! `folio init` renders a full page.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "Johnmark.Dev".into()
    }

    pub fn description() -> String {
        "Portfolio of Johnmark Gulbe, fullstack developer.".into()
    }

    pub fn author() -> String {
        "Johnmark Gulbe".into()
    }

    pub fn brand() -> String {
        "Johnmark.Dev".into()
    }

    pub fn initials() -> String {
        "JG".into()
    }

    pub fn language() -> String {
        "en".into()
    }

    pub fn copyright() -> String {
        "2023 Johnmark Gulbe. All rights reserved.".into()
    }
}

// ============================================================================
// Content Section Defaults
// ============================================================================

pub mod hero {
    pub fn greeting() -> String {
        "Hi, I'm".into()
    }

    pub fn headline() -> Vec<String> {
        vec!["FULLSTACK".into(), "DEVELOPER".into()]
    }

    pub fn tagline() -> String {
        "Transforming ideas into digital reality. I specialize in building robust web \
         applications with modern technologies and clean, efficient code."
            .into()
    }

    pub fn image() -> String {
        "fakejamak.jpg".into()
    }
}

pub mod about {
    pub fn heading() -> String {
        "About Me".into()
    }

    pub fn paragraphs() -> Vec<String> {
        vec![
            "I'm Johnmark Gulbe, an aspiring Full Stack Developer currently navigating the \
             exciting world of Computer Science. As a freshman, I'm fueling my curiosity by \
             building web applications and diving deep into modern technologies like React \
             and Node.js."
                .into(),
            "I'm always eager to learn from others and take on new challenges. When I'm not \
             studying algorithms or debugging code, you can find me exploring new tech trends \
             or working on personal projects to level up my skills."
                .into(),
        ]
    }

    pub fn image() -> String {
        "opawyawa.jpg".into()
    }
}

pub mod stack {
    use super::super::content::{Accent, CardSize, Icon, StackItem};

    pub fn heading() -> String {
        "Tech Stack".into()
    }

    pub fn subtitle() -> String {
        "Tools and technologies I use daily.".into()
    }

    fn item(
        name: &str,
        description: &str,
        icon: Option<Icon>,
        badge: Option<&str>,
        accent: Accent,
        size: CardSize,
        delay: u16,
    ) -> StackItem {
        StackItem {
            name: name.into(),
            description: description.into(),
            icon,
            badge: badge.map(Into::into),
            accent,
            size,
            delay,
        }
    }

    pub fn items() -> Vec<StackItem> {
        vec![
            item(
                "Frontend Architecture",
                "Specialized in React, Next.js ecosystem, and state management.",
                Some(Icon::Atom),
                None,
                Accent::Blue,
                CardSize::Feature,
                0,
            ),
            item("TypeScript", "", None, Some("TS"), Accent::Blue, CardSize::Tile, 100),
            item("Tailwind", "", Some(Icon::Wind), None, Accent::Cyan, CardSize::Tile, 100),
            item(
                "Backend Systems",
                "Node.js, PostgreSQL, Serverless functions.",
                Some(Icon::Server),
                None,
                Accent::Green,
                CardSize::Wide,
                200,
            ),
            item(
                "Python",
                "Scripting, automation, and data processing.",
                Some(Icon::Code),
                None,
                Accent::Yellow,
                CardSize::Wide,
                200,
            ),
            item(
                "Lua",
                "Lightweight scripting for embedded systems and games.",
                Some(Icon::Moon),
                None,
                Accent::Indigo,
                CardSize::Wide,
                200,
            ),
        ]
    }
}

pub mod projects {
    use super::super::content::{Accent, Project, ProjectVisual};

    pub fn heading() -> String {
        "Selected Projects".into()
    }

    pub fn subtitle() -> String {
        "Recent projects shipped to production.".into()
    }

    pub fn link_label() -> String {
        "View GitHub".into()
    }

    pub fn link_href() -> String {
        "#".into()
    }

    pub fn items() -> Vec<Project> {
        vec![
            Project {
                title: "Analytics Dashboard".into(),
                category: "SaaS".into(),
                year: "2023".into(),
                description: "A real-time analytics platform helping e-commerce businesses \
                              track metrics. Features include data visualization with D3.js \
                              and automated reporting."
                    .into(),
                tech: vec!["Next.js".into(), "TypeScript".into(), "Supabase".into()],
                demo: Some("#".into()),
                code: Some("#".into()),
                accent: Accent::Blue,
                visual: ProjectVisual::Dashboard,
            },
            Project {
                title: "AI Chat Assistant".into(),
                category: "AI Tool".into(),
                year: "2023".into(),
                description: "An intelligent conversational agent built with OpenAI's powerful \
                              language models. Features natural language understanding, context \
                              retention for multi-turn conversations, and a sleek, user-friendly \
                              interface for seamless interaction."
                    .into(),
                tech: vec!["React".into(), "Node.js".into(), "OpenAI API".into()],
                demo: None,
                code: None,
                accent: Accent::Purple,
                visual: ProjectVisual::Terminal,
            },
        ]
    }
}

pub mod contact {
    pub fn heading() -> String {
        "Ready to collaborate?".into()
    }

    pub fn message() -> String {
        "I'm currently looking for new opportunities. Whether you have a question or just \
         want to say hi, I'll try my best to get back to you!"
            .into()
    }

    pub fn email() -> String {
        "hello@example.com".into()
    }

    pub fn label() -> String {
        "Say Hello".into()
    }
}

pub mod socials {
    use super::super::content::{SocialKind, SocialLink};

    pub fn links() -> Vec<SocialLink> {
        [SocialKind::Github, SocialKind::Linkedin, SocialKind::Twitter]
            .into_iter()
            .map(|kind| SocialLink {
                kind,
                href: "#".into(),
            })
            .collect()
    }
}

// ============================================================================
// [reveal] Section Defaults
// ============================================================================

pub mod reveal {
    use crate::runtime::{DEFAULT_THRESHOLD, ScrollBehavior};

    pub fn threshold() -> f64 {
        DEFAULT_THRESHOLD
    }

    pub fn scroll() -> ScrollBehavior {
        ScrollBehavior::Smooth
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn assets() -> PathBuf {
        "assets".into()
    }

    pub fn runtime() -> Option<PathBuf> {
        None
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    use std::net::{IpAddr, Ipv4Addr};

    pub fn interface() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    pub fn port() -> u16 {
        5277
    }
}
