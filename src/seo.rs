//! SEO metadata projection.
//!
//! Computes the `{title, description}` pair for a page context and active
//! language. This is pure computation; the view boundary (the HTML
//! templates) is what actually writes the `<head>`. The projector never
//! fails: incomplete input degrades to empty-string fields.

use crate::content::model::{Article, Language, Localized};
use crate::render::policy::SECTION_REFLECTION;

/// Description length cap, in characters.
const DESCRIPTION_CHARS: usize = 160;

/// Computed document metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// Which page the metadata is for.
pub enum PageContext<'a> {
    /// The home/listing page. Fixed localized pair.
    Home,
    /// An article page; `author` is the site author's display name.
    Article {
        article: &'a Article,
        author: &'a Localized<String>,
    },
    /// Not-found or other custom pages: caller strings used verbatim.
    Custom {
        title: &'a str,
        description: Option<&'a str>,
    },
}

/// Project the metadata pair for a context and language.
pub fn project(context: PageContext<'_>, lang: Language) -> PageMeta {
    match context {
        PageContext::Home => PageMeta {
            title: home_title(lang).to_string(),
            description: home_description(lang).to_string(),
        },
        PageContext::Article { article, author } => PageMeta {
            title: format!("{} | {}", article.title.get(lang), author.get(lang)),
            description: reflection_excerpt(article, lang),
        },
        PageContext::Custom { title, description } => PageMeta {
            title: title.to_string(),
            description: description.unwrap_or_default().to_string(),
        },
    }
}

pub fn home_title(lang: Language) -> &'static str {
    match lang {
        Language::Tamil => "ஊக்கமளிக்கும் சிந்தனைகள் | ஜெஸ்ஸி ஆனந்த்",
        Language::English => "Inspirational Reflections | Jessie Anand",
    }
}

pub fn home_description(lang: Language) -> &'static str {
    match lang {
        Language::Tamil => {
            "நம்பிக்கை, நம்பிக்கை மற்றும் தெய்வீக அன்பின் மூலம் பயணம் செய்யுங்கள், இதயத்தில் பேசும் மற்றும் ஆன்மாவை வளர்க்கும் சிந்தனைமிக்க பிரதிபலிப்புகளுடன்."
        }
        Language::English => {
            "Journey through faith, hope, and divine love with thoughtful reflections that speak to the heart and nurture the soul."
        }
    }
}

// First 160 characters of the first reflection-typed section; empty when
// no such section exists.
fn reflection_excerpt(article: &Article, lang: Language) -> String {
    article
        .content
        .get(lang)
        .iter()
        .find(|section| section.kind == SECTION_REFLECTION)
        .map(|section| section.value.chars().take(DESCRIPTION_CHARS).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::Section;

    fn article(sections: Vec<Section>) -> Article {
        Article {
            id: "a".into(),
            title: Localized::new("நம்பிக்கை".into(), "Faith".into()),
            theme: "gray".into(),
            content: Localized::new(sections.clone(), sections),
        }
    }

    fn site_author() -> Localized<String> {
        Localized::new("ஜெஸ்ஸி ஆனந்த்".into(), "Jessie Anand".into())
    }

    #[test]
    fn home_metadata_is_localized() {
        let tamil = project(PageContext::Home, Language::Tamil);
        let english = project(PageContext::Home, Language::English);
        assert!(tamil.title.contains("ஜெஸ்ஸி ஆனந்த்"));
        assert_eq!(english.title, "Inspirational Reflections | Jessie Anand");
        assert!(!english.description.is_empty());
    }

    #[test]
    fn article_title_composes_title_and_author() {
        let author = site_author();
        let a = article(vec![Section::new("reflection", "Take heart.")]);
        let meta = project(
            PageContext::Article {
                article: &a,
                author: &author,
            },
            Language::English,
        );
        assert_eq!(meta.title, "Faith | Jessie Anand");
        assert_eq!(meta.description, "Take heart.");
    }

    #[test]
    fn description_is_capped_at_160_characters() {
        let author = site_author();
        let long = "x".repeat(500);
        let a = article(vec![Section::new("reflection", long)]);
        let meta = project(
            PageContext::Article {
                article: &a,
                author: &author,
            },
            Language::English,
        );
        assert_eq!(meta.description.chars().count(), 160);
    }

    #[test]
    fn cap_counts_characters_not_bytes() {
        let author = site_author();
        // Tamil codepoints are multi-byte; 200 of them must truncate to 160
        // characters without slicing through one.
        let long: String = std::iter::repeat('த').take(200).collect();
        let a = article(vec![Section::new("reflection", long)]);
        let meta = project(
            PageContext::Article {
                article: &a,
                author: &author,
            },
            Language::Tamil,
        );
        assert_eq!(meta.description.chars().count(), 160);
    }

    #[test]
    fn missing_reflection_yields_empty_description() {
        let author = site_author();
        let a = article(vec![Section::new("mainText", "body only")]);
        let meta = project(
            PageContext::Article {
                article: &a,
                author: &author,
            },
            Language::English,
        );
        assert_eq!(meta.description, "");
        assert_eq!(meta.title, "Faith | Jessie Anand");
    }

    #[test]
    fn custom_context_uses_caller_strings_verbatim() {
        let meta = project(
            PageContext::Custom {
                title: "Page Not Found",
                description: None,
            },
            Language::Tamil,
        );
        assert_eq!(meta.title, "Page Not Found");
        assert_eq!(meta.description, "");
    }
}
