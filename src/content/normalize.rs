//! Schema normalization for raw source records.
//!
//! Three record shapes arrive here: the bundled static JSON (language-keyed
//! section arrays), the REST API shape (language-keyed or flattened fields,
//! sometimes wrapped in an `articles` envelope), and the BaaS row shape
//! (flattened `title_tamil` / `content_english` columns). All of them leave
//! as a [`Article`] and nothing in between is allowed to fail: a missing
//! field degrades to a localized placeholder, never to an error.
//!
//! Field resolution is a fixed precedence chain, evaluated independently
//! per language:
//!
//! - title: nested language-keyed object, then flattened per-language field
//!   (snake or camel case), then a flat single string, then the placeholder
//! - content: language-keyed `{type, value}` array, then a flattened
//!   per-language array, then one synthesized `mainText` section from
//!   `excerpt` / `description`
//!
//! Normalizing an already-canonical record is a fixed point: the nested
//! branches win and reproduce the record unchanged.

use serde_json::Value;

use crate::content::model::{Article, Language, Localized, Section, DEFAULT_THEME};
use crate::render::policy::SECTION_MAIN_TEXT;

/// Localized title placeholder for records with no resolvable title.
pub fn title_placeholder(lang: Language) -> &'static str {
    match lang {
        Language::Tamil => "தலைப்பு இல்லை",
        Language::English => "No Title",
    }
}

/// Localized body placeholder for records with no resolvable content.
pub fn content_placeholder(lang: Language) -> &'static str {
    match lang {
        Language::Tamil => "உள்ளடக்கம் இல்லை",
        Language::English => "No content available",
    }
}

/// Normalize one raw record into a canonical article.
pub fn normalize_record(raw: &Value) -> Article {
    Article {
        id: resolve_id(raw),
        title: Localized::new(
            resolve_title(raw, Language::Tamil),
            resolve_title(raw, Language::English),
        ),
        theme: resolve_theme(raw),
        content: Localized::new(
            resolve_sections(raw, Language::Tamil),
            resolve_sections(raw, Language::English),
        ),
    }
}

/// Normalize a raw collection response into articles.
///
/// Accepts a bare array or an object wrapping the array under `articles`.
/// Anything else normalizes to an empty sequence.
pub fn normalize_collection(raw: &Value) -> Vec<Article> {
    let items = match raw {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("articles").and_then(Value::as_array) {
            Some(items) => items.as_slice(),
            None => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items.iter().map(normalize_record).collect()
}

fn resolve_id(raw: &Value) -> String {
    id_field(raw.get("id"))
        .or_else(|| id_field(raw.get("_id")))
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

// Ids are strings, but numeric ids from loose backends are tolerated.
fn id_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn resolve_title(raw: &Value, lang: Language) -> String {
    nested_str(raw, "title", lang)
        .or_else(|| flat_str(raw, &snake_field("title", lang)))
        .or_else(|| flat_str(raw, &camel_field("title", lang)))
        .or_else(|| flat_str(raw, "title"))
        .unwrap_or_else(|| title_placeholder(lang).to_string())
}

fn resolve_theme(raw: &Value) -> String {
    flat_str(raw, "theme").unwrap_or_else(|| DEFAULT_THEME.to_string())
}

fn resolve_sections(raw: &Value, lang: Language) -> Vec<Section> {
    if let Some(items) = raw
        .get("content")
        .and_then(|c| c.get(lang.as_str()))
        .and_then(Value::as_array)
    {
        return items.iter().filter_map(section_from_value).collect();
    }
    if let Some(items) = raw
        .get(&snake_field("content", lang))
        .or_else(|| raw.get(&camel_field("content", lang)))
        .and_then(Value::as_array)
    {
        return items.iter().filter_map(section_from_value).collect();
    }
    // Legacy single-language shape: content may be a keyed object of named
    // fields (mainText, scripture, reflection, ...) rather than an array.
    if let Some(map) = raw
        .get("content")
        .and_then(|c| c.get(lang.as_str()))
        .and_then(Value::as_object)
    {
        return sections_from_legacy_map(map);
    }
    vec![Section::new(SECTION_MAIN_TEXT, resolve_excerpt(raw, lang))]
}

fn section_from_value(value: &Value) -> Option<Section> {
    match value {
        Value::Object(map) => {
            let kind = map
                .get("type")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(SECTION_MAIN_TEXT);
            let text = match map.get("value") {
                Some(Value::String(s)) => s.clone(),
                Some(other) if !other.is_null() => other.to_string(),
                _ => String::new(),
            };
            Some(Section::new(kind, text))
        }
        Value::String(s) => Some(Section::new(SECTION_MAIN_TEXT, s.clone())),
        _ => None,
    }
}

// The oldest bundle revision stored content as a fixed-key object. The key
// becomes the section tag, so `mainText` / `scripture` / `reflection` keep
// their semantics and any other key falls through to the body treatment.
// mainText leads and reflection closes, matching how those pages rendered.
fn sections_from_legacy_map(map: &serde_json::Map<String, Value>) -> Vec<Section> {
    let mut sections = Vec::new();
    if let Some(text) = map.get(SECTION_MAIN_TEXT).and_then(Value::as_str) {
        sections.push(Section::new(SECTION_MAIN_TEXT, text));
    }
    for (key, value) in map {
        if key == SECTION_MAIN_TEXT || key == "reflection" {
            continue;
        }
        if let Some(text) = value.as_str() {
            sections.push(Section::new(key.clone(), text));
        }
    }
    if let Some(text) = map.get("reflection").and_then(Value::as_str) {
        sections.push(Section::new("reflection", text));
    }
    sections
}

fn resolve_excerpt(raw: &Value, lang: Language) -> String {
    nested_str(raw, "excerpt", lang)
        .or_else(|| nested_str(raw, "description", lang))
        .or_else(|| flat_str(raw, "description"))
        .unwrap_or_else(|| content_placeholder(lang).to_string())
}

fn nested_str(raw: &Value, field: &str, lang: Language) -> Option<String> {
    raw.get(field)
        .and_then(|v| v.get(lang.as_str()))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn flat_str(raw: &Value, field: &str) -> Option<String> {
    raw.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn snake_field(base: &str, lang: Language) -> String {
    format!("{base}_{}", lang.as_str())
}

fn camel_field(base: &str, lang: Language) -> String {
    match lang {
        Language::Tamil => format!("{base}Tamil"),
        Language::English => format!("{base}English"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_title_wins_over_flat_fields() {
        let raw = json!({
            "id": "a",
            "title": { "tamil": "நம்பிக்கை", "english": "Faith" },
            "title_tamil": "ignored",
            "title_english": "ignored",
        });
        let article = normalize_record(&raw);
        assert_eq!(article.title.tamil, "நம்பிக்கை");
        assert_eq!(article.title.english, "Faith");
    }

    #[test]
    fn flattened_titles_resolve_per_language() {
        let raw = json!({
            "id": "row-1",
            "title_tamil": "அன்பு",
            "title_english": "Love",
        });
        let article = normalize_record(&raw);
        assert_eq!(article.title.tamil, "அன்பு");
        assert_eq!(article.title.english, "Love");
    }

    #[test]
    fn camel_case_titles_are_accepted() {
        let raw = json!({ "titleTamil": "ஒளி", "titleEnglish": "Light" });
        let article = normalize_record(&raw);
        assert_eq!(article.title.tamil, "ஒளி");
        assert_eq!(article.title.english, "Light");
    }

    #[test]
    fn flat_single_title_covers_both_languages() {
        let raw = json!({ "title": "Legacy" });
        let article = normalize_record(&raw);
        assert_eq!(article.title.tamil, "Legacy");
        assert_eq!(article.title.english, "Legacy");
    }

    #[test]
    fn missing_titles_fall_back_to_placeholders() {
        let article = normalize_record(&json!({ "id": "empty" }));
        assert_eq!(article.title.tamil, title_placeholder(Language::Tamil));
        assert_eq!(article.title.english, title_placeholder(Language::English));
    }

    #[test]
    fn empty_string_title_is_treated_as_absent() {
        let raw = json!({ "title": { "tamil": "", "english": "Faith" } });
        let article = normalize_record(&raw);
        assert_eq!(article.title.tamil, title_placeholder(Language::Tamil));
        assert_eq!(article.title.english, "Faith");
    }

    #[test]
    fn content_is_always_an_array_even_when_absent() {
        let article = normalize_record(&json!({ "id": "bare" }));
        // Absent content synthesizes one placeholder mainText section.
        assert_eq!(article.content.tamil.len(), 1);
        assert_eq!(article.content.tamil[0].kind, SECTION_MAIN_TEXT);
        assert_eq!(
            article.content.tamil[0].value,
            content_placeholder(Language::Tamil)
        );
        assert_eq!(
            article.content.english[0].value,
            content_placeholder(Language::English)
        );
    }

    #[test]
    fn excerpt_feeds_the_synthesized_section() {
        let raw = json!({
            "id": "excerpted",
            "excerpt": { "tamil": "சுருக்கம்", "english": "Summary" },
        });
        let article = normalize_record(&raw);
        assert_eq!(article.content.english[0].value, "Summary");
        assert_eq!(article.content.tamil[0].value, "சுருக்கம்");
    }

    #[test]
    fn flattened_content_arrays_resolve() {
        let raw = json!({
            "id": "row-2",
            "content_tamil": [{ "type": "mainText", "value": "உரை" }],
            "content_english": [
                { "type": "scripture", "value": "Verse" },
                { "type": "reflection", "value": "Closing" },
            ],
        });
        let article = normalize_record(&raw);
        assert_eq!(article.content.tamil.len(), 1);
        assert_eq!(article.content.english.len(), 2);
        assert_eq!(article.content.english[0].kind, "scripture");
        assert_eq!(article.content.english[1].kind, "reflection");
    }

    #[test]
    fn empty_section_array_stays_empty() {
        let raw = json!({
            "id": "hollow",
            "content": { "tamil": [], "english": [] },
        });
        let article = normalize_record(&raw);
        assert!(article.content.tamil.is_empty());
        assert!(article.content.english.is_empty());
    }

    #[test]
    fn unknown_section_tags_survive() {
        let raw = json!({
            "id": "tagged",
            "content": {
                "tamil": [{ "type": "unknown-future-tag", "value": "Hello" }],
                "english": [{ "type": "unknown-future-tag", "value": "Hello" }],
            },
        });
        let article = normalize_record(&raw);
        assert_eq!(article.content.tamil[0].kind, "unknown-future-tag");
        assert_eq!(article.content.tamil[0].value, "Hello");
    }

    #[test]
    fn legacy_keyed_content_object_becomes_ordered_sections() {
        let raw = json!({
            "id": "legacy",
            "content": {
                "tamil": { "mainText": "உரை", "scripture": "வசனம்", "reflection": "சிந்தனை" },
                "english": { "mainText": "Body", "scripture": "Verse", "reflection": "Closing" },
            },
        });
        let article = normalize_record(&raw);
        let kinds: Vec<&str> = article
            .content
            .english
            .iter()
            .map(|s| s.kind.as_str())
            .collect();
        assert_eq!(kinds.first(), Some(&"mainText"));
        assert_eq!(kinds.last(), Some(&"reflection"));
        assert!(kinds.contains(&"scripture"));
    }

    #[test]
    fn theme_defaults_to_gray() {
        assert_eq!(normalize_record(&json!({})).theme, "gray");
        assert_eq!(normalize_record(&json!({ "theme": "" })).theme, "gray");
        assert_eq!(normalize_record(&json!({ "theme": "warm" })).theme, "warm");
    }

    #[test]
    fn missing_id_generates_a_token() {
        let a = normalize_record(&json!({ "title": "x" }));
        let b = normalize_record(&json!({ "title": "x" }));
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn numeric_ids_are_stringified() {
        assert_eq!(normalize_record(&json!({ "id": 42 })).id, "42");
        assert_eq!(normalize_record(&json!({ "_id": 7 })).id, "7");
    }

    #[test]
    fn normalization_is_idempotent_on_canonical_records() {
        let raw = json!({
            "id": "faith-101",
            "title": { "tamil": "நம்பிக்கை", "english": "Faith" },
            "theme": "warm",
            "content": {
                "tamil": [{ "type": "mainText", "value": "உரை" }],
                "english": [
                    { "type": "mainText", "value": "Body" },
                    { "type": "reflection", "value": "Closing" },
                ],
            },
        });
        let once = normalize_record(&raw);
        let twice = normalize_record(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn collection_accepts_envelope_and_bare_array() {
        let bare = json!([{ "id": "a" }, { "id": "b" }]);
        let wrapped = json!({ "articles": [{ "id": "a" }, { "id": "b" }] });
        let from_bare = normalize_collection(&bare);
        let from_wrapped = normalize_collection(&wrapped);
        assert_eq!(from_bare.len(), 2);
        let ids = |v: &[Article]| v.iter().map(|a| a.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&from_bare), ids(&from_wrapped));
    }

    #[test]
    fn non_array_collection_normalizes_to_empty() {
        assert!(normalize_collection(&json!({ "pages": 3 })).is_empty());
        assert!(normalize_collection(&json!("nope")).is_empty());
        assert!(normalize_collection(&json!(null)).is_empty());
    }
}
