//! Page sections, in document order.
//!
//! Each function writes one landmark. Revealable blocks go through
//! [`HtmlWriter::reveal`] so they are numbered for the runtime; navigation
//! targets are plain `href="#id"` anchors carrying `data-nav`.

use super::{icons::Glyph, writer::HtmlWriter};
use crate::config::{
    SiteConfig,
    content::{CardSize, Project, ProjectVisual, StackItem},
};
use crate::runtime::Section;
use anyhow::Result;
use chrono::Datelike;

/// Largest reveal delay class the stylesheet defines.
const MAX_DELAY_MS: u16 = 500;

// ============================================================================
// Helpers
// ============================================================================

/// Join non-empty class names.
fn classes(names: &[&str]) -> String {
    names
        .iter()
        .filter(|name| !name.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// `delay-N` class for a reveal delay, rounded down to 100 ms steps.
fn delay_class(ms: u16) -> String {
    match ms.min(MAX_DELAY_MS) / 100 * 100 {
        0 => String::new(),
        ms => format!("delay-{ms}"),
    }
}

fn accent_class(accent: &str) -> String {
    format!("accent-{accent}")
}

/// Fallback badge text: first two letters of the name.
fn monogram(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Footer notice with `{year}` replaced by `year`.
fn copyright(notice: &str, year: i32) -> String {
    format!("© {}", notice.replace("{year}", &year.to_string()))
}

fn section_href(section: Section) -> String {
    format!("#{}", section.id())
}

/// `<a href="#id" data-nav="id">label</a>`
fn nav_link(w: &mut HtmlWriter, section: Section, class: &str) -> Result<()> {
    let href = section_href(section);
    w.text_elem(
        "a",
        &[("href", href.as_str()), ("data-nav", section.id()), ("class", class)],
        section.label(),
    )
}

// ============================================================================
// Navigation
// ============================================================================

pub fn nav(w: &mut HtmlWriter, config: &SiteConfig) -> Result<()> {
    let home = section_href(Section::Home);

    w.elem("nav", &[("class", "nav")], |w| {
        w.elem("div", &[("class", "container nav-bar")], |w| {
            w.elem(
                "a",
                &[("href", home.as_str()), ("data-nav", Section::Home.id()), ("class", "brand")],
                |w| {
                    w.text_elem("span", &[("class", "brand-logo")], &config.base.initials)?;
                    w.text_elem("span", &[("class", "brand-name")], &config.base.brand)
                },
            )?;

            w.elem("div", &[("class", "nav-links")], |w| {
                for section in Section::MENU {
                    nav_link(w, section, "nav-link")?;
                }
                nav_link(w, Section::Contact, "nav-cta")
            })?;

            w.elem(
                "button",
                &[
                    ("type", "button"),
                    ("class", "menu-toggle"),
                    ("data-menu-toggle", ""),
                    ("aria-controls", "mobile-menu"),
                    ("aria-expanded", "false"),
                    ("aria-label", "Toggle menu"),
                ],
                |w| {
                    w.raw(&Glyph::Menu.svg(24, "icon-open"))?;
                    w.raw(&Glyph::Close.svg(24, "icon-close"))
                },
            )
        })?;

        w.elem(
            "div",
            &[("id", "mobile-menu"), ("class", "mobile-menu"), ("hidden", "")],
            |w| {
                for section in Section::MENU {
                    nav_link(w, section, "mobile-link")?;
                }
                Ok(())
            },
        )
    })
}

// ============================================================================
// Hero / About
// ============================================================================

pub fn hero(w: &mut HtmlWriter, config: &SiteConfig) -> Result<()> {
    let hero = &config.hero;

    w.elem("section", &[("id", Section::Home.id()), ("class", "hero")], |w| {
        w.elem("div", &[("class", "glow glow-left")], |_| Ok(()))?;
        w.elem("div", &[("class", "glow glow-right")], |_| Ok(()))?;

        w.elem("div", &[("class", "container")], |w| {
            w.reveal("div", "hero-body", &[], |w| {
                w.elem("div", &[("class", "portrait")], |w| {
                    w.elem("div", &[("class", "ring")], |_| Ok(()))?;
                    w.elem("div", &[("class", "ring ring-pulse")], |_| Ok(()))?;
                    w.elem("div", &[("class", "portrait-frame")], |w| {
                        w.void("img", &[("src", hero.image.as_str()), ("alt", config.base.author.as_str())])
                    })
                })?;

                w.elem("div", &[("class", "hero-text")], |w| {
                    w.elem("h3", &[("class", "greeting")], |w| {
                        w.text(&format!("{} ", hero.greeting))?;
                        w.text_elem("span", &[], &config.base.author)
                    })?;
                    w.elem("div", &[("class", "headline")], |w| {
                        let last = hero.headline.len().saturating_sub(1);
                        for (i, line) in hero.headline.iter().enumerate() {
                            let attrs: &[(&str, &str)] =
                                if i == last { &[("class", "highlight")] } else { &[] };
                            w.text_elem("span", attrs, line)?;
                        }
                        Ok(())
                    })?;
                    w.text_elem("p", &[("class", "tagline")], &hero.tagline)
                })
            })
        })
    })
}

pub fn about(w: &mut HtmlWriter, config: &SiteConfig) -> Result<()> {
    let about = &config.about;

    w.elem("section", &[("id", Section::About.id()), ("class", "about")], |w| {
        w.elem("div", &[("class", "container narrow")], |w| {
            w.reveal("div", "about-body", &[], |w| {
                w.elem("div", &[], |w| {
                    w.text_elem("h2", &[], &about.heading)?;
                    for paragraph in &about.paragraphs {
                        w.text_elem("p", &[], paragraph)?;
                    }
                    Ok(())
                })?;
                w.elem("div", &[("class", "photo")], |w| {
                    w.elem("div", &[("class", "photo-frame")], |w| {
                        w.void("img", &[("src", about.image.as_str()), ("alt", config.base.author.as_str())])
                    })
                })
            })
        })
    })
}

// ============================================================================
// Stack
// ============================================================================

pub fn stack(w: &mut HtmlWriter, config: &SiteConfig) -> Result<()> {
    let stack = &config.stack;

    w.elem("section", &[("id", Section::Stack.id()), ("class", "stack")], |w| {
        w.elem("div", &[("class", "container")], |w| {
            w.reveal("div", "section-head", &[], |w| {
                w.text_elem("h2", &[], &stack.heading)?;
                w.text_elem("p", &[], &stack.subtitle)
            })?;

            w.elem("div", &[("class", "stack-grid")], |w| {
                for item in &stack.items {
                    stack_card(w, item)?;
                }
                Ok(())
            })
        })
    })
}

fn stack_badge(w: &mut HtmlWriter, item: &StackItem, icon_size: u16) -> Result<()> {
    w.elem("div", &[("class", "badge")], |w| match (item.icon, &item.badge) {
        (Some(icon), _) => w.raw(&Glyph::from(icon).svg(icon_size, "")),
        (None, Some(text)) => w.text_elem("span", &[("class", "badge-text")], text),
        (None, None) => w.text_elem("span", &[("class", "badge-text")], &monogram(&item.name)),
    })
}

fn stack_card(w: &mut HtmlWriter, item: &StackItem) -> Result<()> {
    let accent = accent_class(item.accent.as_str());
    let delay = delay_class(item.delay);
    let class = classes(&["card stack-card", item.size.as_str(), &accent, &delay]);

    w.reveal("div", &class, &[], |w| match item.size {
        CardSize::Feature => {
            if let Some(icon) = item.icon {
                w.elem("div", &[("class", "watermark")], |w| {
                    w.raw(&Glyph::from(icon).svg(160, ""))
                })?;
            }
            w.elem("div", &[("class", "card-body")], |w| {
                stack_badge(w, item, 24)?;
                w.elem("div", &[], |w| {
                    w.text_elem("h3", &[], &item.name)?;
                    w.text_elem("p", &[], &item.description)
                })
            })
        }
        CardSize::Tile => {
            stack_badge(w, item, 20)?;
            w.text_elem("h3", &[], &item.name)
        }
        CardSize::Wide => {
            stack_badge(w, item, 24)?;
            w.elem("div", &[], |w| {
                w.text_elem("h3", &[], &item.name)?;
                w.text_elem("p", &[], &item.description)
            })
        }
    })
}

// ============================================================================
// Projects
// ============================================================================

pub fn projects(w: &mut HtmlWriter, config: &SiteConfig) -> Result<()> {
    let projects = &config.projects;

    w.elem("section", &[("id", Section::Projects.id()), ("class", "projects")], |w| {
        w.elem("div", &[("class", "container")], |w| {
            w.reveal("div", "section-head split", &[], |w| {
                w.elem("div", &[], |w| {
                    w.text_elem("h2", &[], &projects.heading)?;
                    w.text_elem("p", &[], &projects.subtitle)
                })?;
                w.elem("a", &[("href", projects.link_href.as_str()), ("class", "more-link")], |w| {
                    w.text(&format!("{} ", projects.link_label))?;
                    w.raw(&Glyph::ArrowRight.svg(16, ""))
                })
            })?;

            w.elem("div", &[("class", "project-list")], |w| {
                for (i, project) in projects.items.iter().enumerate() {
                    project_card(w, project, i)?;
                }
                Ok(())
            })
        })
    })
}

fn project_card(w: &mut HtmlWriter, project: &Project, index: usize) -> Result<()> {
    let accent = accent_class(project.accent.as_str());
    let delay = delay_class((index.min(5) as u16) * 100);
    let flip = if index % 2 == 1 { "flip" } else { "" };
    let class = classes(&["card project", &accent, &delay, flip]);

    w.reveal("article", &class, &[], |w| {
        w.elem("div", &[("class", "project-text")], |w| {
            w.elem("div", &[("class", "tags")], |w| {
                w.text_elem("span", &[("class", "tag tag-accent")], &project.category)?;
                w.text_elem("span", &[("class", "tag")], &project.year)
            })?;
            w.text_elem("h3", &[], &project.title)?;
            w.text_elem("p", &[], &project.description)?;

            if !project.tech.is_empty() {
                w.elem("ul", &[("class", "tech")], |w| {
                    for tech in &project.tech {
                        w.text_elem("li", &[], tech)?;
                    }
                    Ok(())
                })?;
            }

            if project.demo.is_some() || project.code.is_some() {
                w.elem("div", &[("class", "project-links")], |w| {
                    if let Some(demo) = &project.demo {
                        w.elem("a", &[("href", demo.as_str()), ("class", "demo")], |w| {
                            w.raw(&Glyph::ExternalLink.svg(16, ""))?;
                            w.text(" Live Demo")
                        })?;
                    }
                    if let Some(code) = &project.code {
                        w.elem("a", &[("href", code.as_str()), ("class", "code")], |w| {
                            w.raw(&Glyph::Github.svg(16, ""))?;
                            w.text(" Code")
                        })?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })?;

        project_visual(w, project.visual)
    })
}

fn project_visual(w: &mut HtmlWriter, visual: ProjectVisual) -> Result<()> {
    w.elem("div", &[("class", "project-visual"), ("aria-hidden", "true")], |w| match visual {
        ProjectVisual::Dashboard => w.elem("div", &[("class", "mock-window")], |w| {
            w.elem("div", &[("class", "mock-dots")], |w| {
                w.elem("span", &[], |_| Ok(()))?;
                w.elem("span", &[], |_| Ok(()))
            })?;
            w.elem("div", &[("class", "mock-tiles")], |w| {
                w.elem("div", &[("class", "tile tile-accent")], |_| Ok(()))?;
                w.elem("div", &[("class", "tile")], |_| Ok(()))?;
                w.elem("div", &[("class", "tile tile-wide")], |_| Ok(()))
            })
        }),
        ProjectVisual::Terminal => w.elem("div", &[("class", "mock-terminal")], |w| {
            w.elem("div", &[("class", "terminal-icon")], |w| {
                w.raw(&Glyph::Terminal.svg(32, ""))
            })
        }),
    })
}

// ============================================================================
// Contact / Footer
// ============================================================================

pub fn contact(w: &mut HtmlWriter, config: &SiteConfig) -> Result<()> {
    let contact = &config.contact;
    let mailto = contact.mailto();

    w.elem("section", &[("id", Section::Contact.id()), ("class", "contact")], |w| {
        w.reveal("div", "container narrow center", &[], |w| {
            w.text_elem("h2", &[], &contact.heading)?;
            w.text_elem("p", &[], &contact.message)?;
            w.elem("a", &[("href", mailto.as_str()), ("class", "cta")], |w| {
                w.text(&format!("{} ", contact.label))?;
                w.raw(&Glyph::ArrowRight.svg(16, ""))
            })
        })
    })
}

pub fn footer(w: &mut HtmlWriter, config: &SiteConfig) -> Result<()> {
    w.elem("footer", &[("class", "footer")], |w| {
        w.elem("div", &[("class", "container footer-bar")], |w| {
            let year = chrono::Local::now().year();
            w.text_elem("p", &[], &copyright(&config.base.copyright, year))?;
            w.elem("div", &[("class", "socials")], |w| {
                for link in &config.socials {
                    w.elem(
                        "a",
                        &[("href", link.href.as_str()), ("aria-label", link.kind.label())],
                        |w| w.raw(&Glyph::from(link.kind).svg(20, "")),
                    )?;
                }
                Ok(())
            })
        })
    })
}
