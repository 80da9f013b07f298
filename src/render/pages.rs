//! Server-rendered pages.
//!
//! The view boundary: these templates consume the canonical model, the
//! section policy's render instructions, and the SEO projector's metadata
//! pair, and emit complete HTML documents. Styling is a small inline
//! sheet keyed by theme classes.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::content::model::{Article, ArticleSet, Language, Localized};
use crate::lang;
use crate::render::policy::{render_sections, Treatment};
use crate::render::theme::theme_class;
use crate::seo::PageMeta;

const STYLESHEET: &str = include_str!("../../assets/site.css");

/// Localized fallback notice shown when the bundle served in place of a
/// live source.
pub fn fallback_notice(lang: Language) -> &'static str {
    match lang {
        Language::Tamil => {
            "நேரடி உள்ளடக்கம் இப்போது கிடைக்கவில்லை — சேமித்த கட்டுரைகள் காட்டப்படுகின்றன."
        }
        Language::English => "Live content is unavailable right now — showing saved articles.",
    }
}

pub fn not_found_heading(lang: Language) -> &'static str {
    match lang {
        Language::Tamil => "பக்கம் கிடைக்கவில்லை",
        Language::English => "Page Not Found",
    }
}

fn toggle_label(lang: Language) -> &'static str {
    // The label names the language the toggle switches to.
    match lang {
        Language::Tamil => "English",
        Language::English => "தமிழ்",
    }
}

fn layout(meta: &PageMeta, lang: Language, theme: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(html_lang(lang)) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                style { (PreEscaped(STYLESHEET)) }
            }
            body class=(format!("theme-{}", theme_class(theme))) {
                (body)
            }
        }
    }
}

fn html_lang(lang: Language) -> &'static str {
    match lang {
        Language::Tamil => "ta",
        Language::English => "en",
    }
}

fn nav(author: &Localized<String>, lang: Language, path: &str, query: &str) -> Markup {
    let toggle_href = format!("{path}?{}", lang::rewrite_query(query, lang.other()));
    html! {
        nav {
            a.brand href=(lang::href("/", lang)) { (author.get(lang)) }
            a.toggle href=(toggle_href) rel="nofollow" { (toggle_label(lang)) }
        }
    }
}

fn notice_banner(lang: Language) -> Markup {
    html! {
        div.notice role="status" { (fallback_notice(lang)) }
    }
}

/// The home page: hero plus one card per article, in set order.
pub fn home(set: &ArticleSet, lang: Language, query: &str, degraded: bool) -> Markup {
    let body = html! {
        (nav(&set.author, lang, "/", query))
        @if degraded { (notice_banner(lang)) }
        main {
            header.hero {
                h1 { (set.author.get(lang)) }
            }
            section.articles {
                @for article in &set.articles {
                    a class=(format!("card accent-{}", theme_class(&article.theme)))
                        href=(lang::href(&format!("/article/{}", article.id), lang)) {
                        h2 { (article.title.get(lang)) }
                        @if let Some(section) = article.content.get(lang).first() {
                            p { (excerpt(&section.value)) }
                        }
                    }
                }
            }
        }
    };
    layout(
        &crate::seo::project(crate::seo::PageContext::Home, lang),
        lang,
        "light",
        body,
    )
}

/// An article page: title, then each section under its decided treatment,
/// in order.
pub fn article(
    article: &Article,
    author: &Localized<String>,
    lang: Language,
    query: &str,
    degraded: bool,
) -> Markup {
    let path = format!("/article/{}", article.id);
    let meta = crate::seo::project(
        crate::seo::PageContext::Article { article, author },
        lang,
    );
    let accent = format!("scripture accent-{}", theme_class(&article.theme));
    let body = html! {
        (nav(author, lang, &path, query))
        @if degraded { (notice_banner(lang)) }
        main {
            article {
                h1 { (article.title.get(lang)) }
                @for section in render_sections(article, lang) {
                    @match section.treatment {
                        Treatment::Scripture => {
                            blockquote class=(accent) { (PreEscaped(section.html)) }
                        }
                        Treatment::Reflection => {
                            div.reflection {
                                @if let Some(heading) = section.heading {
                                    h3 { (heading) }
                                }
                                (PreEscaped(section.html))
                            }
                        }
                        Treatment::Body => {
                            div.body-text { (PreEscaped(section.html)) }
                        }
                    }
                }
            }
        }
    };
    layout(&meta, lang, &article.theme, body)
}

/// The dedicated not-found page, with a path back home.
pub fn not_found(lang: Language) -> Markup {
    let meta = crate::seo::project(
        crate::seo::PageContext::Custom {
            title: not_found_heading(lang),
            description: None,
        },
        lang,
    );
    let body = html! {
        main.not-found {
            h1 { (not_found_heading(lang)) }
            a href=(lang::href("/", lang)) { (back_home_label(lang)) }
        }
    };
    layout(&meta, lang, "light", body)
}

fn back_home_label(lang: Language) -> &'static str {
    match lang {
        Language::Tamil => "முகப்புக்குத் திரும்பு",
        Language::English => "Back to home",
    }
}

// Card preview: the section's raw value, capped. Markdown markers are left
// as-is; previews are short enough that they read fine.
fn excerpt(value: &str) -> String {
    let cap = 140;
    if value.chars().count() <= cap {
        value.to_string()
    } else {
        let cut: String = value.chars().take(cap).collect();
        format!("{cut}…")
    }
}
