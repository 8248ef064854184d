//! Exports the [`build_site`] function which stitches together the
//! high-level steps of building the site: parsing each author's posts
//! ([`crate::parser`]), cleaning up orphaned output files, sorting the
//! corpus, rendering article and listing pages ([`crate::render`]),
//! persisting the aggregate metadata index ([`crate::index`]), and
//! generating the Atom feed ([`crate::feed`]).

use std::fmt;
use std::fs::{self, File};
use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::feed::{self, Error as FeedError, FeedConfig};
use crate::index::{self, Error as IndexError};
use crate::markdown;
use crate::parser::{Error as ParseError, Parser};
use crate::post::{self, Post};
use crate::related;
use crate::render::Renderer;
use crate::toc;

/// Name of the per-author listing page, regenerated on every build and
/// never subject to orphan cleanup.
const AUTHOR_INDEX: &str = "index.html";

/// Builds the site from a [`Config`] object in a single pass: per-author
/// parse and cleanup, global sort, article pages, `posts.js`, the archive
/// page, and the feed. Per-file parse failures are isolated inside
/// [`Parser::parse_directory`]; everything surfacing here aborts the build.
pub fn build_site(config: &Config) -> Result<()> {
    let renderer = Renderer::new()?;

    // discover authors, parse their posts, clean up stale outputs
    let mut posts: Vec<Post> = Vec::new();
    for author in &config.authors {
        let author_dir = config.root_directory.join(&author.slug);
        if !author_dir.is_dir() {
            fs::create_dir_all(&author_dir)?;
            info!("created directory {}/", author.slug);
        }

        let parsed = Parser::new(author).parse_directory(&author_dir)?;
        info!("{}: {} post(s)", author.slug, parsed.len());
        posts.extend(parsed);

        remove_orphans(&author_dir)?;

        fs::write(
            author_dir.join(AUTHOR_INDEX),
            renderer.render_author(&config.title, author),
        )?;
    }

    // the corpus order doubles as the tie-breaker for related-posts
    // ranking, so sort before rendering any article
    post::sort_posts(&mut posts);

    for post in &posts {
        let headings = toc::extract_headings(&post.body);
        let mut body_html = String::new();
        markdown::to_html(&mut body_html, &post.body);
        let related = related::related_posts(post, &posts, related::MAX_RELATED);
        fs::write(
            config.root_directory.join(&post.url),
            renderer.render_article(
                &config.title,
                post,
                &headings,
                &body_html,
                &related,
            ),
        )?;
    }

    index::write_index(&posts, &config.root_directory.join("posts.js"))?;

    fs::write(
        config.root_directory.join("archive.html"),
        renderer.render_archive(&config.title),
    )?;

    feed::write_feed(
        FeedConfig {
            title: config.title.clone(),
            site_url: config.site_url.clone(),
        },
        &posts,
        File::create(config.root_directory.join("feed.atom"))?,
    )?;

    info!("build complete: {} post(s)", posts.len());
    Ok(())
}

/// Deletes every generated `.html` file in `dir` whose corresponding `.md`
/// source no longer exists. The author's own index page is exempt: it is
/// always regenerated instead.
fn remove_orphans(dir: &Path) -> std::io::Result<()> {
    for result in fs::read_dir(dir)? {
        let entry = result?;
        let os_file_name = entry.file_name();
        let file_name = os_file_name.to_string_lossy();
        if !file_name.ends_with(".html") || file_name == AUTHOR_INDEX {
            continue;
        }
        if !entry.path().with_extension("md").is_file() {
            fs::remove_file(entry.path())?;
            info!("removed orphan {}", entry.path().display());
        }
    }
    Ok(())
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Errors can be during parsing,
/// templating, writing the metadata index, writing the feed, and other I/O.
#[derive(Debug)]
pub enum Error {
    /// Returned for errors during parsing.
    Parse(ParseError),

    /// Returned for errors parsing or rendering page templates.
    Template(ramhorns::Error),

    /// Returned for errors writing the aggregate metadata index.
    Index(IndexError),

    /// Returned for errors writing the feed.
    Feed(FeedError),

    /// Returned for other I/O errors.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(err) => err.fmt(f),
            Error::Template(err) => err.fmt(f),
            Error::Index(err) => err.fmt(f),
            Error::Feed(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Template(err) => Some(err),
            Error::Index(err) => Some(err),
            Error::Feed(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    /// Converts [`ParseError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: ParseError) -> Error {
        Error::Parse(err)
    }
}

impl From<ramhorns::Error> for Error {
    /// Converts [`ramhorns::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: ramhorns::Error) -> Error {
        Error::Template(err)
    }
}

impl From<IndexError> for Error {
    /// Converts [`IndexError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: IndexError) -> Error {
        Error::Index(err)
    }
}

impl From<FeedError> for Error {
    /// Converts [`FeedError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: FeedError) -> Error {
        Error::Feed(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Author;
    use url::Url;

    fn config(root: &Path) -> Config {
        Config {
            title: String::from("NousArchives"),
            site_url: Url::parse("https://example.org/").unwrap(),
            authors: vec![
                Author {
                    slug: String::from("angel"),
                    name: String::from("Ángel"),
                    initial: String::from("Á"),
                    bio: String::from("Ingeniero."),
                    links: Vec::new(),
                    topics: Vec::new(),
                },
                Author {
                    slug: String::from("antonio"),
                    name: String::from("Antonio"),
                    initial: String::from("A"),
                    bio: String::from("Periodista."),
                    links: Vec::new(),
                    topics: Vec::new(),
                },
            ],
            root_directory: root.to_owned(),
        }
    }

    #[test]
    fn test_remove_orphans() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("a.md"), "---\ntitle: a\n---\nbody\n")?;
        fs::write(dir.path().join("a.html"), "generated")?;
        fs::write(dir.path().join("b.html"), "orphan")?;
        fs::write(dir.path().join("index.html"), "listing")?;

        remove_orphans(dir.path())?;

        assert!(dir.path().join("a.html").is_file());
        assert!(!dir.path().join("b.html").exists());
        assert!(dir.path().join("index.html").is_file());
        Ok(())
    }

    #[test]
    fn test_build_site() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let angel = dir.path().join("angel");
        fs::create_dir(&angel)?;
        fs::write(
            angel.join("apis.md"),
            "---\n\
             title: Arquitecturas API\n\
             tldr: Qué aprendí diseñando APIs.\n\
             date: 2026-02-22\n\
             tags: [ia, derecho]\n\
             ---\n\
             ## Contexto\n\ntexto\n\n## Diseño\n\nmás texto\n\n### Detalle\n\nfin\n",
        )?;
        fs::write(angel.join("huerfano.html"), "stale")?;
        // malformed file: skipped with a warning, build continues
        fs::write(angel.join("roto.md"), "no front-matter here\n")?;

        let config = config(dir.path());
        build_site(&config)?;

        // author directory for antonio was created with its index page
        assert!(dir.path().join("antonio/index.html").is_file());
        // article page rendered, orphan removed
        let article = fs::read_to_string(angel.join("apis.html"))?;
        assert!(article.contains("Arquitecturas API"));
        assert!(article.contains(r#"<nav class="toc">"#));
        assert!(article.contains(r#"<h2 id="contexto">"#));
        assert!(!angel.join("huerfano.html").exists());
        assert!(!angel.join("roto.html").exists());
        // aggregate index, archive, and feed written at the root
        let posts_js = fs::read_to_string(dir.path().join("posts.js"))?;
        assert!(posts_js.starts_with("const POSTS = ["));
        assert!(posts_js.contains(r#""authorSlug": "angel""#));
        assert!(dir.path().join("archive.html").is_file());
        assert!(dir.path().join("feed.atom").is_file());
        Ok(())
    }

    #[test]
    fn test_build_site_related_links() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let angel = dir.path().join("angel");
        let antonio = dir.path().join("antonio");
        fs::create_dir(&angel)?;
        fs::create_dir(&antonio)?;
        fs::write(
            angel.join("uno.md"),
            "---\ntitle: Uno\ndate: 2026-01-01\ntags: [cine]\n---\nbody\n",
        )?;
        fs::write(
            antonio.join("dos.md"),
            "---\ntitle: Dos\ndate: 2026-01-02\ntags: [cine]\n---\nbody\n",
        )?;

        build_site(&config(dir.path()))?;

        let uno = fs::read_to_string(angel.join("uno.html"))?;
        assert!(uno.contains(r#"<a href="../antonio/dos.html" class="related-item">"#));
        let dos = fs::read_to_string(antonio.join("dos.html"))?;
        assert!(dos.contains(r#"<a href="../angel/uno.html" class="related-item">"#));
        Ok(())
    }
}
