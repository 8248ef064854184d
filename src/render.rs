//! Renders posts and listing shells into HTML strings through [`ramhorns`]
//! templates. Every interpolated text field is escaped by the template
//! engine; the only unescaped interpolation is the article body, which is
//! HTML produced by [`crate::markdown`] itself.

use ramhorns::{Content, Template};

use crate::config::Author;
use crate::post::Post;
use crate::templates;
use crate::toc::{self, Heading};

/// Holds the three parsed page templates.
pub struct Renderer {
    article: Template<'static>,
    author: Template<'static>,
    archive: Template<'static>,
}

impl Renderer {
    /// Parses the built-in templates.
    pub fn new() -> Result<Renderer, ramhorns::Error> {
        Ok(Renderer {
            article: Template::new(templates::ARTICLE)?,
            author: Template::new(templates::AUTHOR)?,
            archive: Template::new(templates::ARCHIVE)?,
        })
    }

    /// Renders one article page. `body_html` is the rendered Markdown body,
    /// `headings` the extracted outline, and `related` the pre-ranked
    /// related posts.
    pub fn render_article(
        &self,
        site_title: &str,
        post: &Post,
        headings: &[Heading],
        body_html: &str,
        related: &[&Post],
    ) -> String {
        self.article.render(&ArticlePage {
            site_title,
            title: &post.title,
            author: &post.author,
            author_slug: &post.author_slug,
            type_class: post.post_type.css_class(),
            type_label: post.post_type.label(),
            readtime: &post.readtime,
            wordcount: post.word_count,
            date: &post.date,
            summary: match post.summary.is_empty() {
                true => None,
                false => Some(Blurb {
                    text: &post.summary,
                }),
            },
            tag_block: match post.tags.is_empty() {
                true => None,
                false => Some(TagBlock {
                    tags: post.tags.iter().map(|t| TagView { tag: t }).collect(),
                }),
            },
            toc: match toc::wants_toc(headings) {
                false => None,
                true => Some(TocBlock {
                    entries: headings
                        .iter()
                        .map(|h| TocEntryView {
                            slug: &h.slug,
                            text: &h.text,
                            nested: h.level == 3,
                        })
                        .collect(),
                }),
            },
            body: body_html,
            related: match related.is_empty() {
                true => None,
                false => Some(RelatedBlock {
                    site_title,
                    items: related
                        .iter()
                        .map(|p| RelatedItemView {
                            url: &p.url,
                            author: &p.author,
                            type_class: p.post_type.css_class(),
                            type_label: p.post_type.label(),
                            title: &p.title,
                            summary: &p.summary,
                        })
                        .collect(),
                }),
            },
        })
    }

    /// Renders an author's index page shell. The post list itself is filled
    /// in client-side from `posts.js`.
    pub fn render_author(&self, site_title: &str, author: &Author) -> String {
        self.author.render(&AuthorPage {
            site_title,
            name: &author.name,
            initial: &author.initial,
            bio: &author.bio,
            slug: &author.slug,
            topics: match author.topics.is_empty() {
                true => None,
                false => Some(TagBlock {
                    tags: author.topics.iter().map(|t| TagView { tag: t }).collect(),
                }),
            },
            links: match author.links.is_empty() {
                true => None,
                false => Some(LinksBlock {
                    items: author
                        .links
                        .iter()
                        .map(|l| LinkView {
                            label: &l.label,
                            url: l.url.as_str(),
                        })
                        .collect(),
                }),
            },
        })
    }

    /// Renders the global archive page shell.
    pub fn render_archive(&self, site_title: &str) -> String {
        self.archive.render(&ArchivePage { site_title })
    }
}

#[derive(Content)]
struct ArticlePage<'a> {
    site_title: &'a str,
    title: &'a str,
    author: &'a str,
    author_slug: &'a str,
    type_class: &'a str,
    type_label: &'a str,
    readtime: &'a str,
    wordcount: usize,
    date: &'a str,
    summary: Option<Blurb<'a>>,
    tag_block: Option<TagBlock<'a>>,
    toc: Option<TocBlock<'a>>,

    // rendered through `{{{body}}}`, so not escaped
    body: &'a str,

    related: Option<RelatedBlock<'a>>,
}

#[derive(Content)]
struct Blurb<'a> {
    text: &'a str,
}

#[derive(Content)]
struct TagBlock<'a> {
    tags: Vec<TagView<'a>>,
}

#[derive(Content)]
struct TagView<'a> {
    tag: &'a str,
}

#[derive(Content)]
struct TocBlock<'a> {
    entries: Vec<TocEntryView<'a>>,
}

#[derive(Content)]
struct TocEntryView<'a> {
    slug: &'a str,
    text: &'a str,
    nested: bool,
}

#[derive(Content)]
struct RelatedBlock<'a> {
    site_title: &'a str,
    items: Vec<RelatedItemView<'a>>,
}

#[derive(Content)]
struct RelatedItemView<'a> {
    url: &'a str,
    author: &'a str,
    type_class: &'a str,
    type_label: &'a str,
    title: &'a str,
    summary: &'a str,
}

#[derive(Content)]
struct AuthorPage<'a> {
    site_title: &'a str,
    name: &'a str,
    initial: &'a str,
    bio: &'a str,
    slug: &'a str,
    topics: Option<TagBlock<'a>>,
    links: Option<LinksBlock<'a>>,
}

#[derive(Content)]
struct LinksBlock<'a> {
    items: Vec<LinkView<'a>>,
}

#[derive(Content)]
struct LinkView<'a> {
    label: &'a str,
    url: &'a str,
}

#[derive(Content)]
struct ArchivePage<'a> {
    site_title: &'a str,
}
