//! Presentation themes.
//!
//! `theme` is an open tag on every article: a known tag selects its CSS
//! class pair, anything else falls back to the gray family. Purely a
//! presentation hint with no structural meaning.

const KNOWN_THEMES: &[&str] = &[
    "gray", "warm", "blue", "brown", "light", "dark", "black", "purple", "green", "red", "pink",
    "yellow", "orange", "teal", "cyan", "lime",
];

/// Validated theme class suffix. Unknown tags map to `gray`.
pub fn theme_class(theme: &str) -> &'static str {
    KNOWN_THEMES
        .iter()
        .find(|known| **known == theme)
        .copied()
        .unwrap_or("gray")
}
