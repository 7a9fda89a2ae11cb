//! Markup for the whole page.
//!
//! Every latched section is rendered as
//! `<section id=ANCHOR data-section=ANCHOR data-revealed=BOOL>` whose
//! container carries the motion style for the current latch state. List items
//! inside a section share the section's latch and stagger by index.
//!
//! Hidden elements also carry their visible style in `data-reveal-style`, and
//! the page then ends with a small IntersectionObserver script that flips each
//! section's latch in the browser once it is visible at the reveal threshold.

use super::markup::{escape, Element};
use crate::content::{Content, ProjectEntry, SkillEntry, SocialLink};
use crate::motion::Motion;
use crate::portfolio::NavAction;
use crate::reveal::SectionRevealController;
use crate::section::SectionId;
use crate::{Error, Result, SiteConfig};

const CONTAINER: &str = "container px-4 md:px-6";
const H2: &str = "mb-8 text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl";

/// Render the complete HTML document for the current reveal state.
pub fn render_page(
    content: &Content,
    reveal: &SectionRevealController,
    config: &SiteConfig,
) -> Result<String> {
    if content.profile.name.trim().is_empty() {
        return Err(Error::Render("profile name is empty".into()));
    }
    let revealed = |id: SectionId| config.reveal_all || reveal.is_revealed(id);

    let mut body = Element::new("body").class(config.font.class_name()).child(
        Element::new("div")
            .class("flex min-h-screen flex-col")
            .child(hero(content, config))
            .child(about(content, config, revealed(SectionId::About)))
            .child(skills(&content.skills, config, revealed(SectionId::Skills)))
            .child(projects(&content.projects, config, revealed(SectionId::Projects)))
            .child(contact(content, config, revealed(SectionId::Contact)))
            .child(footer(content, config)),
    );
    if SectionId::ALL.into_iter().any(|id| !revealed(id)) {
        body = body.child(reveal_script(config.reveal_threshold));
    }

    let theme = config.theme.initial_theme();
    let mut html = Element::new("html").attr("lang", "en");
    html = if config.theme.attribute == "class" {
        html.class(theme.as_str())
    } else {
        html.attr("data-theme", theme.as_str())
    };
    if config.theme.disable_transition_on_change {
        html = html.attr("data-disable-transition-on-change", "true");
    }
    let html = html.raw(head(content, config)).child(body);

    Ok(format!("<!DOCTYPE html>\n{}\n", html.render()))
}

fn head(content: &Content, config: &SiteConfig) -> String {
    let m = &content.metadata;
    let meta = |name: &str, value: &str| {
        format!("<meta name=\"{}\" content=\"{}\">", escape(name), escape(value))
    };
    let prop = |name: &str, value: &str| {
        format!("<meta property=\"{}\" content=\"{}\">", escape(name), escape(value))
    };

    let mut out = String::from("<head><meta charset=\"utf-8\">");
    out.push_str(&meta("viewport", "width=device-width, initial-scale=1"));
    out.push_str(&format!("<title>{}</title>", escape(&m.title)));
    out.push_str(&meta("description", &m.description));
    out.push_str(&meta("keywords", &m.keywords.join(",")));
    for a in &m.authors {
        out.push_str(&meta("author", a));
    }
    if let Some(g) = &m.generator {
        out.push_str(&meta("generator", g));
    }
    let og = &m.open_graph;
    out.push_str(&prop("og:type", &og.kind));
    out.push_str(&prop("og:locale", &og.locale));
    out.push_str(&prop("og:url", &og.url));
    out.push_str(&prop("og:title", &og.title));
    out.push_str(&prop("og:description", &og.description));
    out.push_str(&prop("og:site_name", &og.site_name));
    out.push_str(&meta("twitter:card", &m.twitter.card));
    out.push_str(&meta("twitter:title", &m.twitter.title));
    out.push_str(&meta("twitter:description", &m.twitter.description));
    if config.theme.enable_system {
        out.push_str(&meta("color-scheme", "light dark"));
    }
    out.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\">",
        escape(&config.font.stylesheet_href())
    ));
    out.push_str("</head>");
    out
}

/// Observes every hidden section and reveals it once, the first time its
/// visible fraction reaches `threshold`. Browsers without IntersectionObserver
/// get every section revealed immediately.
fn reveal_script(threshold: f64) -> Element {
    const BODY: &str = r#"(function(){var t=__THRESHOLD__;function show(s){s.setAttribute("data-revealed","true");s.querySelectorAll("[data-reveal-style]").forEach(function(el){el.setAttribute("style",el.getAttribute("data-reveal-style"));el.removeAttribute("data-reveal-style");});}var hidden=document.querySelectorAll('section[data-revealed="false"]');if(!("IntersectionObserver" in window)){hidden.forEach(show);return;}var o=new IntersectionObserver(function(es){es.forEach(function(e){if(e.intersectionRatio>=t){show(e.target);o.unobserve(e.target);}});},{threshold:t});hidden.forEach(function(s){o.observe(s);});})();"#;
    Element::new("script")
        .attr("data-reveal-observer", "")
        .raw(BODY.replace("__THRESHOLD__", &threshold.to_string()))
}

/// Set `motion`'s inline style for the latch state. A hidden element also
/// carries the style it switches to on reveal.
fn animated(el: Element, motion: Motion, revealed: bool) -> Element {
    let el = el.attr("style", motion.style(revealed));
    if revealed {
        el
    } else {
        el.attr("data-reveal-style", motion.style(true))
    }
}

fn section(id: SectionId, class: &str, revealed: bool) -> Element {
    Element::new("section")
        .attr("id", id.anchor())
        .attr("data-section", id.anchor())
        .attr("data-revealed", revealed.to_string())
        .attr("aria-labelledby", format!("{}-heading", id.anchor()))
        .class(class)
}

fn heading(id: SectionId, extra_class: &str) -> Element {
    let class = if extra_class.is_empty() {
        H2.to_string()
    } else {
        format!("{} {}", H2, extra_class)
    };
    Element::new("h2")
        .attr("id", format!("{}-heading", id.anchor()))
        .class(class)
        .text(id.label())
}

fn nav_button(action: NavAction, class: &str, inner: Element) -> Element {
    let mut b = Element::new("button")
        .attr("type", "button")
        .class(class)
        .attr("data-nav", action.name())
        .attr("data-target", action.target().anchor());
    if let Some(label) = action.aria_label() {
        b = b.attr("aria-label", label);
    }
    b.child(inner)
}

fn icon(name: &str, class: &str) -> Element {
    Element::new("span")
        .class(format!("icon icon-{} {}", name, class))
        .attr("aria-hidden", "true")
}

fn social_row(links: &[SocialLink]) -> Element {
    Element::new("div")
        .class("mt-8 flex justify-center space-x-4")
        .children(links.iter().map(|l| {
            let mut a = Element::new("a")
                .class("btn btn-outline btn-icon")
                .attr("href", l.href.as_str());
            if l.kind.opens_externally() {
                a = a.attr("target", "_blank").attr("rel", "noopener noreferrer");
            }
            a.attr("aria-label", l.kind.label())
                .child(icon(l.kind.icon(), "h-5 w-5"))
        }))
}

fn hero(content: &Content, config: &SiteConfig) -> Element {
    let motion = &config.motion;
    section(
        SectionId::Hero,
        "relative flex h-screen flex-col items-center justify-center text-center",
        true,
    )
    .child(
        Element::new("div")
            .class(CONTAINER)
            .attr("style", motion.hero.style(true))
            .child(
                Element::new("h1")
                    .attr("id", "hero-heading")
                    .class("text-4xl font-bold tracking-tighter sm:text-5xl md:text-6xl/none")
                    .child(Element::new("span").class("text-primary").text(&content.profile.name)),
            )
            .child(
                Element::new("p")
                    .class("mx-auto mt-4 max-w-[700px] text-xl text-muted-foreground md:text-2xl")
                    .text(&content.profile.role),
            )
            .child(social_row(&content.hero_links)),
    )
    .child(
        Element::new("div")
            .class("absolute bottom-10")
            .attr("style", motion.scroll_hint.style(true))
            .child(nav_button(
                NavAction::ScrollHint,
                "btn btn-ghost btn-icon",
                icon("chevron-down", "h-6 w-6 animate-bounce"),
            )),
    )
}

fn about(content: &Content, config: &SiteConfig, revealed: bool) -> Element {
    let p = &content.profile;
    let text = Element::new("div")
        .class("space-y-4")
        .children(
            p.about
                .iter()
                .map(|para| Element::new("p").class("text-lg text-muted-foreground").text(para)),
        )
        .child(Element::new("div").class("pt-4").child(nav_button(
            NavAction::GetInTouch,
            "btn btn-primary",
            Element::new("span").text("Get in Touch"),
        )));
    let image = Element::new("div").class("overflow-hidden rounded-xl").child(
        Element::new("img")
            .attr("src", p.image.as_str())
            .attr("alt", "Profile")
            .attr("width", "400")
            .attr("height", "400")
            .class("aspect-square h-full w-full object-cover"),
    );

    section(SectionId::About, "py-20 md:py-24", revealed).child(
        animated(Element::new("div").class(CONTAINER), config.motion.section, revealed)
            .child(heading(SectionId::About, ""))
            .child(
                Element::new("div")
                    .class("grid gap-6 lg:grid-cols-[1fr_400px] lg:gap-12")
                    .attr("data-columns", "1,1,1,2")
                    .attr("data-gap", "24")
                    .child(text)
                    .child(image),
            ),
    )
}

fn skill_card(skill: &SkillEntry, index: usize, config: &SiteConfig, revealed: bool) -> Element {
    let card = Element::new("div").class("skill").attr("data-key", skill.name.as_str());
    animated(card, config.motion.list.motion(index), revealed)
        .child(
            Element::new("div")
                .class("card")
                .child(
                    Element::new("div")
                        .class("card-header pb-2")
                        .child(Element::new("h3").class("card-title").text(&skill.name)),
                )
                .child(
                    Element::new("div")
                        .class("card-content")
                        .child(Element::new("span").class("badge").text(&skill.level.to_string())),
                ),
        )
}

fn skills(skills: &[SkillEntry], config: &SiteConfig, revealed: bool) -> Element {
    section(SectionId::Skills, "bg-muted py-20 md:py-24", revealed).child(
        animated(Element::new("div").class(CONTAINER), config.motion.section, revealed)
            .child(heading(SectionId::Skills, ""))
            .child(
                Element::new("div")
                    .class("grid gap-8 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4")
                    .attr("data-columns", "1,2,3,4")
                    .attr("data-gap", "32")
                    .children(
                        skills
                            .iter()
                            .enumerate()
                            .map(|(i, s)| skill_card(s, i, config, revealed)),
                    ),
            ),
    )
}

fn project_card(p: &ProjectEntry, index: usize, config: &SiteConfig, revealed: bool) -> Element {
    let link = |href: &str, icon_name: &str, label: &str, class: &str| {
        Element::new("a")
            .class(class)
            .attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .child(icon(icon_name, "mr-2 h-4 w-4"))
            .text(label)
    };

    let card = Element::new("div").class("project").attr("data-key", p.title.as_str());
    animated(card, config.motion.list.motion(index), revealed)
        .child(
            Element::new("div")
                .class("card overflow-hidden")
                .child(
                    Element::new("div").class("aspect-video overflow-hidden").child(
                        Element::new("img")
                            .attr("src", if p.image.is_empty() { "/placeholder.svg" } else { p.image.as_str() })
                            .attr("alt", p.title.as_str())
                            .attr("width", "300")
                            .attr("height", "200")
                            .class("h-full w-full object-cover transition-transform duration-300 hover:scale-105"),
                    ),
                )
                .child(
                    Element::new("div")
                        .class("card-header")
                        .child(Element::new("h3").class("card-title").text(&p.title))
                        .child(Element::new("p").class("card-description").text(&p.description)),
                )
                .child(
                    Element::new("div").class("card-content").child(
                        Element::new("div")
                            .class("flex flex-wrap gap-2")
                            .children(p.tags.iter().map(|t| {
                                Element::new("span").class("badge badge-secondary").text(t)
                            })),
                    ),
                )
                .child(
                    Element::new("div")
                        .class("card-footer flex justify-between")
                        .child(link(p.code_link.as_str(), "github", "Code", "btn btn-outline btn-sm"))
                        .child(link(p.demo_link.as_str(), "external-link", "Demo", "btn btn-sm")),
                ),
        )
}

fn projects(projects: &[ProjectEntry], config: &SiteConfig, revealed: bool) -> Element {
    section(SectionId::Projects, "py-20 md:py-24", revealed).child(
        animated(Element::new("div").class(CONTAINER), config.motion.section, revealed)
            .child(heading(SectionId::Projects, ""))
            .child(
                Element::new("div")
                    .class("grid gap-6 sm:grid-cols-2 lg:grid-cols-3")
                    .attr("data-columns", "1,2,2,3")
                    .attr("data-gap", "24")
                    .children(
                        projects
                            .iter()
                            .enumerate()
                            .map(|(i, p)| project_card(p, i, config, revealed)),
                    ),
            ),
    )
}

fn contact(content: &Content, config: &SiteConfig, revealed: bool) -> Element {
    let email = &content.profile.contact_email;
    let intro = Element::new("p")
        .class("text-center text-lg text-muted-foreground")
        .text("Interested in working together? Feel free to reach out to me directly at ")
        .child(
            Element::new("a")
                .attr("href", format!("mailto:{}", email))
                .class("text-primary underline underline-offset-4")
                .text(email),
        )
        .text(" or through the form below.");

    section(SectionId::Contact, "bg-muted py-20 md:py-24", revealed).child(
        animated(Element::new("div").class(CONTAINER), config.motion.section, revealed)
            .child(heading(SectionId::Contact, "text-center"))
            .child(
                Element::new("div")
                    .class("mx-auto max-w-md space-y-4")
                    .child(intro)
                    .child(social_row(&content.contact_links)),
            ),
    )
}

fn footer(content: &Content, config: &SiteConfig) -> Element {
    Element::new("footer").class("border-t py-6 md:py-8").child(
        Element::new("div")
            .class("container flex flex-col items-center justify-between gap-4 px-4 md:flex-row md:px-6")
            .child(
                Element::new("p")
                    .class("text-center text-sm text-muted-foreground")
                    .text(&format!(
                        "\u{a9} {} {}. All rights reserved.",
                        config.year(),
                        content.profile.name
                    )),
            )
            .child(
                Element::new("p")
                    .class("text-center text-sm text-muted-foreground")
                    .text(&content.colophon),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn fixed_config() -> SiteConfig {
        SiteConfig { copyright_year: Some(2025), ..Default::default() }
    }

    #[test]
    fn sections_reflect_latch_state() {
        let mut reveal = SectionRevealController::default();
        reveal.observe(SectionId::About, Some(crate::DomRef::new(720.0, 500.0)));
        reveal.notify(crate::IntersectionEntry::new(SectionId::About, 0.5));

        let html = render_page(&Content::default(), &reveal, &fixed_config()).unwrap();
        let doc = Html::parse_document(&html);
        let sel = Selector::parse("section[data-section]").unwrap();
        let states: Vec<(String, String)> = doc
            .select(&sel)
            .map(|s| {
                (
                    s.value().attr("id").unwrap().to_string(),
                    s.value().attr("data-revealed").unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(
            states,
            vec![
                ("hero".to_string(), "true".to_string()),
                ("about".to_string(), "true".to_string()),
                ("skills".to_string(), "false".to_string()),
                ("projects".to_string(), "false".to_string()),
                ("contact".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn skill_cards_stagger() {
        let cfg = SiteConfig { reveal_all: true, ..fixed_config() };
        let html = render_page(&Content::default(), &SectionRevealController::default(), &cfg).unwrap();
        let doc = Html::parse_document(&html);
        let sel = Selector::parse("#skills .skill").unwrap();
        let styles: Vec<&str> = doc.select(&sel).map(|e| e.value().attr("style").unwrap()).collect();
        assert_eq!(styles.len(), 12);
        assert!(styles[0].starts_with("opacity:1"));
        assert!(styles[0].ends_with("ease-out 0s"));
        assert!(styles[11].ends_with("ease-out 1.1s"));
    }

    #[test]
    fn head_carries_metadata() {
        let html = render_page(&Content::default(), &SectionRevealController::default(), &fixed_config()).unwrap();
        let doc = Html::parse_document(&html);
        let title = doc.select(&Selector::parse("title").unwrap()).next().unwrap();
        assert_eq!(title.text().collect::<String>(), "Most. Romana Akter Ria | Front-End Developer");
        let og = Selector::parse("meta[property=\"og:site_name\"]").unwrap();
        assert_eq!(doc.select(&og).next().unwrap().value().attr("content"), Some("John Doe Portfolio"));
        assert!(html.contains("\u{a9} 2025 Most. Romana Akter Ria. All rights reserved."));
    }

    #[test]
    fn theme_attribute_mode() {
        let mut cfg = fixed_config();
        cfg.theme.attribute = "data-theme".into();
        cfg.theme.default_theme = crate::ThemeMode::Dark;
        let html = render_page(&Content::default(), &SectionRevealController::default(), &cfg).unwrap();
        assert!(html.contains("<html lang=\"en\" data-theme=\"dark\""));
    }

    #[test]
    fn nav_buttons_target_sections() {
        let html = render_page(&Content::default(), &SectionRevealController::default(), &fixed_config()).unwrap();
        let doc = Html::parse_document(&html);
        let sel = Selector::parse("button[data-nav]").unwrap();
        let targets: Vec<&str> = doc.select(&sel).map(|b| b.value().attr("data-target").unwrap()).collect();
        assert_eq!(targets, vec!["about", "contact"]);
    }

    #[test]
    fn hidden_sections_ship_with_reveal_observer() {
        let html = render_page(&Content::default(), &SectionRevealController::default(), &fixed_config()).unwrap();
        let doc = Html::parse_document(&html);

        let scripts: Vec<String> = doc
            .select(&Selector::parse("script").unwrap())
            .map(|s| s.text().collect::<String>())
            .collect();
        assert_eq!(scripts.len(), 1);
        assert!(scripts[0].contains("new IntersectionObserver"));
        assert!(scripts[0].contains("var t=0.3;"));
        assert!(scripts[0].contains("o.unobserve(e.target)"));

        let hidden_containers = Selector::parse("section[data-revealed=\"false\"] > div").unwrap();
        assert_eq!(doc.select(&hidden_containers).count(), 4);
        for el in doc.select(&hidden_containers) {
            assert!(el.value().attr("style").unwrap().starts_with("opacity:0"));
            assert!(el.value().attr("data-reveal-style").unwrap().starts_with("opacity:1"));
        }

        // Nothing starts invisible without a style to switch to.
        let invisible = Selector::parse("[style^=\"opacity:0\"]").unwrap();
        assert_eq!(doc.select(&invisible).count(), 4 + 12 + 3);
        assert!(doc
            .select(&invisible)
            .all(|el| el.value().attr("data-reveal-style").is_some()));
    }

    #[test]
    fn fully_revealed_page_has_no_script() {
        let cfg = SiteConfig { reveal_all: true, ..fixed_config() };
        let html = render_page(&Content::default(), &SectionRevealController::default(), &cfg).unwrap();
        assert!(!html.contains("<script"));
        assert!(!html.contains("data-reveal-style"));
    }

    #[test]
    fn observer_uses_configured_threshold() {
        let cfg = SiteConfig { reveal_threshold: 0.75, ..fixed_config() };
        let html = render_page(&Content::default(), &SectionRevealController::new(0.75), &cfg).unwrap();
        assert!(html.contains("var t=0.75;"));
    }
}
