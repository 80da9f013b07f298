//! Canonical content model.
//!
//! Every article, whatever shape its source record had, is normalized into
//! these types before anything downstream (rendering, SEO, the JSON API)
//! touches it. The model is language-keyed: titles and section sequences
//! exist for both supported languages, always.

use serde::{Deserialize, Serialize};

/// The two supported display languages. There is no third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Tamil,
    English,
}

impl Language {
    /// Site-wide default when no valid language is carried in the URL.
    pub const DEFAULT: Language = Language::Tamil;

    /// The query-string value for this language.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Tamil => "tamil",
            Language::English => "english",
        }
    }

    /// Parse a raw query-string value. Anything other than the two exact
    /// tags is rejected, not coerced.
    pub fn from_param(raw: &str) -> Option<Language> {
        match raw {
            "tamil" => Some(Language::Tamil),
            "english" => Some(Language::English),
            _ => None,
        }
    }

    /// The other language, for toggle links.
    pub fn other(self) -> Language {
        match self {
            Language::Tamil => Language::English,
            Language::English => Language::Tamil,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value carried once per language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub tamil: T,
    pub english: T,
}

impl<T> Localized<T> {
    pub fn new(tamil: T, english: T) -> Self {
        Self { tamil, english }
    }

    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::Tamil => &self.tamil,
            Language::English => &self.english,
        }
    }
}

/// One typed block of article content.
///
/// `kind` is an open tag: `mainText`, `scripture` and `reflection` carry
/// rendering semantics, anything else renders via the default body
/// treatment. Unknown tags are never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl Section {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// A normalized article. `id` is the lookup key and routing slug; `theme`
/// is a presentation hint only; section order is the rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: Localized<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    pub content: Localized<Vec<Section>>,
}

/// Fallback presentation theme for absent or unrecognized tags.
pub const DEFAULT_THEME: &str = "gray";

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

/// An ordered set of articles plus the site author's display name.
/// Ordering reflects the source: creation-descending from a backend,
/// declaration order from the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSet {
    pub articles: Vec<Article>,
    pub author: Localized<String>,
}

impl ArticleSet {
    /// Exact-match, case-sensitive id lookup.
    pub fn find(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }
}
