//! Converts Markdown bodies to HTML via [`pulldown_cmark`], annotating
//! level-2/3 headings with the same slug the table of contents derives for
//! them ([`crate::toc::slugify`]) so in-page anchor links resolve.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use crate::toc;

/// The extension set enabled when parsing post bodies. Everything that
/// reads the body ([`to_html`], [`crate::toc::extract_headings`]) must use
/// the same set, or the derived heading slugs diverge.
pub(crate) fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Converts `markdown` to HTML, appending the result to `out`.
pub fn to_html(out: &mut String, markdown: &str) {
    let mut events: Vec<Event> = Parser::new_ext(markdown, options()).collect();
    annotate_headings(&mut events);
    html::push_html(out, events.into_iter());
}

/// Replaces the start/end events of every `<h2>`/`<h3>` with raw HTML
/// carrying an `id` attribute derived from the heading's inner text.
fn annotate_headings(events: &mut [Event]) {
    let mut i = 0;
    while i < events.len() {
        let level = match &events[i] {
            Event::Start(Tag::Heading(level @ 2..=3)) => *level,
            _ => {
                i += 1;
                continue;
            }
        };

        let mut text = String::new();
        let mut end = None;
        for (j, event) in events.iter().enumerate().skip(i + 1) {
            match event {
                Event::End(Tag::Heading(_)) => {
                    end = Some(j);
                    break;
                }
                Event::Text(t) | Event::Code(t) => text.push_str(t),
                _ => {}
            }
        }

        let slug = toc::slugify(text.trim());
        events[i] = raw_html(format!(r#"<h{} id="{}">"#, level, slug));
        match end {
            Some(j) => {
                events[j] = raw_html(format!("</h{}>", level));
                i = j + 1;
            }
            None => break, // unterminated heading; parser never emits this
        }
    }
}

fn raw_html(s: String) -> Event<'static> {
    Event::Html(CowStr::Boxed(s.into_boxed_str()))
}

#[cfg(test)]
mod test {
    use super::*;

    fn render(markdown: &str) -> String {
        let mut out = String::new();
        to_html(&mut out, markdown);
        out
    }

    #[test]
    fn test_heading_anchor() {
        let html = render("## Hola Mundo\n\ntexto\n");
        assert!(html.contains(r#"<h2 id="hola-mundo">"#), "{}", html);
        assert!(html.contains("</h2>"), "{}", html);
    }

    #[test]
    fn test_heading_anchor_with_inline_markup() {
        let html = render("### Usar `foo` *bien*\n");
        assert!(html.contains(r#"<h3 id="usar-foo-bien">"#), "{}", html);
    }

    #[test]
    fn test_level_one_heading_untouched() {
        let html = render("# Portada\n");
        assert!(html.contains("<h1>"), "{}", html);
        assert!(!html.contains("id=\"portada\""), "{}", html);
    }

    #[test]
    fn test_body_markup_renders() {
        let html = render("un **parrafo** con [enlace](https://example.org)\n");
        assert!(html.contains("<strong>parrafo</strong>"), "{}", html);
        assert!(html.contains(r#"<a href="https://example.org">"#), "{}", html);
    }

    #[test]
    fn test_heading_anchor_matches_toc_slug() {
        // smart punctuation rewrites `--`, so the rendered text differs
        // from the source line; the anchor must still carry the slug the
        // table of contents links to
        let body = "## Parte 1 -- Resumen\n\ntexto\n";
        let headings = crate::toc::extract_headings(body);
        let html = render(body);
        assert_eq!("parte-1-resumen", headings[0].slug);
        assert!(
            html.contains(&format!(r#"<h2 id="{}">"#, headings[0].slug)),
            "{}",
            html
        );
    }

    #[test]
    fn test_heading_anchor_matches_toc_slug_with_link() {
        let body = "## Ver [esto](https://example.org)\n";
        let headings = crate::toc::extract_headings(body);
        let html = render(body);
        assert_eq!("ver-esto", headings[0].slug);
        assert!(
            html.contains(&format!(r#"<h2 id="{}">"#, headings[0].slug)),
            "{}",
            html
        );
    }

    #[test]
    fn test_duplicate_headings_share_anchor() {
        let html = render("## Introducción\n\na\n\n## Introducción\n");
        assert_eq!(2, html.matches(r#"<h2 id="introduccin">"#).count());
    }
}
