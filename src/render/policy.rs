//! Section rendering policy.
//!
//! Maps a section's open `type` tag to one of three structural treatments.
//! Unrecognized tags (including future ones) get the default body
//! treatment; content is never dropped and never an error. Sections
//! render in array order; duplicates are fine and render independently.

use serde::Serialize;

use crate::content::model::{Article, Language, Section};
use crate::render::markdown::render_markdown;

/// Recognized section tags.
pub const SECTION_MAIN_TEXT: &str = "mainText";
pub const SECTION_SCRIPTURE: &str = "scripture";
pub const SECTION_REFLECTION: &str = "reflection";

/// Structural treatment for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    /// Justified body paragraph. The default for `mainText` and every
    /// unrecognized tag.
    Body,
    /// Quoted block with a theme-accented border.
    Scripture,
    /// Highlighted closing callout with a fixed localized heading.
    Reflection,
}

impl Treatment {
    pub fn for_tag(tag: &str) -> Treatment {
        match tag {
            SECTION_SCRIPTURE => Treatment::Scripture,
            SECTION_REFLECTION => Treatment::Reflection,
            _ => Treatment::Body,
        }
    }
}

/// The localized heading the reflection callout carries.
pub fn reflection_heading(lang: Language) -> &'static str {
    match lang {
        Language::Tamil => "சிந்தனை",
        Language::English => "Reflection",
    }
}

/// One section, decided and rendered: which treatment applies, the heading
/// if the treatment carries one, and the markdown-rendered value.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedSection {
    pub treatment: Treatment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,
    pub html: String,
}

/// Apply the decision table to one section.
pub fn render_section(section: &Section, lang: Language) -> RenderedSection {
    let treatment = Treatment::for_tag(&section.kind);
    RenderedSection {
        treatment,
        heading: match treatment {
            Treatment::Reflection => Some(reflection_heading(lang)),
            _ => None,
        },
        html: render_markdown(&section.value),
    }
}

/// Render an article's sections for the active language, in order.
pub fn render_sections(article: &Article, lang: Language) -> Vec<RenderedSection> {
    article
        .content
        .get(lang)
        .iter()
        .map(|section| render_section(section, lang))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::Localized;

    fn article_with(sections: Vec<Section>) -> Article {
        Article {
            id: "t".into(),
            title: Localized::default(),
            theme: "gray".into(),
            content: Localized::new(sections.clone(), sections),
        }
    }

    #[test]
    fn decision_table() {
        assert_eq!(Treatment::for_tag("scripture"), Treatment::Scripture);
        assert_eq!(Treatment::for_tag("reflection"), Treatment::Reflection);
        assert_eq!(Treatment::for_tag("mainText"), Treatment::Body);
    }

    #[test]
    fn unknown_tags_get_the_body_treatment() {
        let rendered = render_section(
            &Section::new("unknown-future-tag", "Hello"),
            Language::English,
        );
        assert_eq!(rendered.treatment, Treatment::Body);
        assert!(rendered.html.contains("Hello"));
    }

    #[test]
    fn reflection_heading_is_localized() {
        let english = render_section(&Section::new("reflection", "x"), Language::English);
        let tamil = render_section(&Section::new("reflection", "x"), Language::Tamil);
        assert_eq!(english.heading, Some("Reflection"));
        assert_eq!(tamil.heading, Some("சிந்தனை"));
    }

    #[test]
    fn only_reflection_carries_a_heading() {
        assert!(render_section(&Section::new("scripture", "x"), Language::English)
            .heading
            .is_none());
        assert!(render_section(&Section::new("mainText", "x"), Language::English)
            .heading
            .is_none());
    }

    #[test]
    fn sections_render_in_order_without_grouping() {
        let article = article_with(vec![
            Section::new("scripture", "first"),
            Section::new("mainText", "second"),
            Section::new("scripture", "third"),
        ]);
        let rendered = render_sections(&article, Language::English);
        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0].treatment, Treatment::Scripture);
        assert_eq!(rendered[1].treatment, Treatment::Body);
        assert_eq!(rendered[2].treatment, Treatment::Scripture);
    }

    #[test]
    fn empty_content_renders_empty() {
        let article = article_with(Vec::new());
        assert!(render_sections(&article, Language::Tamil).is_empty());
    }

    #[test]
    fn section_values_are_markdown_rendered() {
        let rendered = render_section(&Section::new("mainText", "**bold**"), Language::English);
        assert!(rendered.html.contains("<strong>bold</strong>"));
    }
}
