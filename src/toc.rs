//! Extracts level-2/3 headings from a Markdown body and derives the slug
//! identifiers used both for the table of contents and for the `id`
//! attributes of the rendered headings. Headings are read from the parsed
//! event stream, with the same options the renderer uses, so the text a
//! slug is derived from here is the text [`crate::markdown`] annotates.

use pulldown_cmark::{Event, Parser, Tag};

use crate::markdown;

/// Minimum number of headings before a table of contents is emitted.
pub const MIN_HEADINGS: usize = 3;

/// A single heading found in a post body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// 2 or 3.
    pub level: u8,

    /// The heading's plain text, trimmed: inline markup stripped, smart
    /// punctuation applied, exactly as the reader sees it.
    pub text: String,

    /// The derived anchor identifier. Headings with identical text produce
    /// identical slugs; collisions are not deduplicated.
    pub slug: String,
}

/// Collects the `<h2>`/`<h3>` headings of `body`. The inner text of each
/// heading is gathered the same way the HTML renderer gathers it before
/// deriving the `id` attribute, so the two always agree on the slug.
pub fn extract_headings(body: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;
    for event in Parser::new_ext(body, markdown::options()) {
        match event {
            Event::Start(Tag::Heading(level @ 2..=3)) => {
                current = Some((level as u8, String::new()));
            }
            Event::End(Tag::Heading(2..=3)) => {
                if let Some((level, text)) = current.take() {
                    let text = text.trim().to_owned();
                    if !text.is_empty() {
                        headings.push(Heading {
                            level,
                            slug: slugify(&text),
                            text,
                        });
                    }
                }
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some((_, text)) = &mut current {
                    text.push_str(&t);
                }
            }
            _ => {}
        }
    }
    headings
}

/// Whether enough headings were found to warrant a table of contents.
pub fn wants_toc(headings: &[Heading]) -> bool {
    headings.len() >= MIN_HEADINGS
}

/// Derives a URL-safe anchor identifier from heading text: lowercase, drop
/// characters outside ASCII word/space/hyphen, collapse each whitespace run
/// to a single hyphen. Note that non-ASCII letters are dropped rather than
/// transliterated, so `Introducción` becomes `introduccin`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
            in_whitespace = false;
        }
        // anything else is dropped without breaking a whitespace run
    }
    slug
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!("hola-mundo", slugify("Hola Mundo"));
        assert_eq!("whats-in-a-name", slugify("What's in a name?"));
        assert_eq!("a-b", slugify("a  !  b"));
        assert_eq!("ya_con_guion-bajo", slugify("Ya_con_guion-bajo"));
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        // Matches the legacy behavior: accented letters are dropped, not
        // transliterated.
        assert_eq!("introduccin", slugify("Introducción"));
    }

    #[test]
    fn test_extract_headings() {
        let body = "\
intro text
## Primera parte
### Detalle
#### demasiado profundo
# titulo de nivel uno
##sin espacio
## Segunda parte
";
        let headings = extract_headings(body);
        assert_eq!(
            vec![
                Heading {
                    level: 2,
                    text: String::from("Primera parte"),
                    slug: String::from("primera-parte"),
                },
                Heading {
                    level: 3,
                    text: String::from("Detalle"),
                    slug: String::from("detalle"),
                },
                Heading {
                    level: 2,
                    text: String::from("Segunda parte"),
                    slug: String::from("segunda-parte"),
                },
            ],
            headings
        );
    }

    #[test]
    fn test_heading_text_is_rendered_text() {
        // inline markup is stripped and `--` becomes an en dash before the
        // slug is derived
        let headings =
            extract_headings("## Parte 1 -- Resumen\n\n### Usar `foo` *bien*\n");
        assert_eq!("Parte 1 \u{2013} Resumen", headings[0].text);
        assert_eq!("parte-1-resumen", headings[0].slug);
        assert_eq!("Usar foo bien", headings[1].text);
        assert_eq!("usar-foo-bien", headings[1].slug);
    }

    #[test]
    fn test_code_fence_is_not_a_heading() {
        let headings =
            extract_headings("```\n## no es un titulo\n```\n\n## Real\n");
        assert_eq!(1, headings.len());
        assert_eq!("real", headings[0].slug);
    }

    #[test]
    fn test_toc_threshold() {
        let two = extract_headings("## a\n\n## b\n");
        assert!(!wants_toc(&two));
        let three = extract_headings("## a\n\n## b\n\n### c\n");
        assert!(wants_toc(&three));
        assert!(three.iter().all(|h| !h.slug.is_empty()));
    }

    #[test]
    fn test_duplicate_headings_collide() {
        // Two identical headings yield identical slugs. The collision is
        // deliberate and documented: in-page links resolve to the first.
        let headings = extract_headings("## Introducción\n\ntext\n\n## Introducción\n");
        assert_eq!(headings[0].slug, headings[1].slug);
    }
}
