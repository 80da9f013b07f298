//! Active-language resolution against the URL query string.
//!
//! Language is carried in the `la` query parameter and nowhere else; it
//! is not part of the path, so every internal link that must keep the
//! language appends `?la=<value>` explicitly. These functions are the sole
//! writer of that parameter.

use crate::content::model::Language;

/// Query parameter carrying the active language.
pub const LANG_PARAM: &str = "la";

/// Read the active language from a raw query string.
///
/// Only the exact values `tamil` and `english` are adopted; anything else
/// (including an absent parameter) keeps `previous`. On first navigation
/// callers pass [`Language::DEFAULT`] as the previous value.
pub fn resolve(query: &str, previous: Language) -> Language {
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key == LANG_PARAM {
            return Language::from_param(&value).unwrap_or(previous);
        }
    }
    previous
}

/// Rewrite a query string so `la` carries `lang`, preserving every other
/// parameter and their order. The parameter is appended when absent.
pub fn rewrite_query(query: &str, lang: Language) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    let mut written = false;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key == LANG_PARAM {
            if !written {
                out.append_pair(LANG_PARAM, lang.as_str());
                written = true;
            }
        } else {
            out.append_pair(&key, &value);
        }
    }
    if !written {
        out.append_pair(LANG_PARAM, lang.as_str());
    }
    out.finish()
}

/// A path with the language parameter attached, for internal links.
pub fn href(path: &str, lang: Language) -> String {
    format!("{path}?{LANG_PARAM}={}", lang.as_str())
}
