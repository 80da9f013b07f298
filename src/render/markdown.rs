//! Markdown to HTML conversion.
//!
//! Soft breaks are promoted to hard breaks at the event level: the source
//! texts rely on single newlines for stanza-like formatting, and merging
//! them into one paragraph would destroy that.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render GitHub-flavored markdown to an HTML fragment.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_and_emphasis() {
        let out = render_markdown("**bold** and *italic*");
        assert!(out.contains("<strong>bold</strong>"));
        assert!(out.contains("<em>italic</em>"));
    }

    #[test]
    fn single_newlines_become_hard_breaks() {
        let out = render_markdown("line one\nline two");
        assert!(out.contains("<br"));
        // One paragraph, two lines.
        assert_eq!(out.matches("<p>").count(), 1);
    }

    #[test]
    fn blank_lines_still_split_paragraphs() {
        let out = render_markdown("para one\n\npara two");
        assert_eq!(out.matches("<p>").count(), 2);
    }

    #[test]
    fn headings_render_through_level_six() {
        assert!(render_markdown("# Title").contains("<h1>"));
        assert!(render_markdown("###### Deep").contains("<h6>"));
    }

    #[test]
    fn lists_blockquotes_and_code() {
        assert!(render_markdown("- one\n- two").contains("<ul>"));
        assert!(render_markdown("1. one\n2. two").contains("<ol>"));
        assert!(render_markdown("> quoted").contains("<blockquote>"));
        assert!(render_markdown("`inline`").contains("<code>"));
    }

    #[test]
    fn links_render() {
        let out = render_markdown("[home](https://example.org)");
        assert!(out.contains("href=\"https://example.org\""));
    }

    #[test]
    fn tamil_text_passes_through() {
        let out = render_markdown("**விசுவாசம்** நம்மை நடத்துகிறது");
        assert!(out.contains("<strong>விசுவாசம்</strong>"));
    }
}
