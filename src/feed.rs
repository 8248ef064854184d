//! Support for creating an Atom feed from the post corpus.

use crate::post::Post;
use atom_syndication::{Entry, Error as AtomError, Feed, Link, Person, Text};
use chrono::{FixedOffset, TimeZone, Utc};
use std::fmt;
use std::io::Write;
use url::Url;

/// Bundled configuration for creating a feed.
pub struct FeedConfig {
    /// The feed (site) title.
    pub title: String,

    /// The absolute base URL of the published site; also the feed id. Post
    /// URLs are relative to it, so it should end with a trailing slash.
    pub site_url: Url,
}

/// Creates a feed from some configuration ([`FeedConfig`]) and a list of
/// [`Post`]s and writes the result to a [`std::io::Write`]. Posts whose
/// date did not parse carry no usable timestamp and are omitted.
pub fn write_feed<W: Write>(config: FeedConfig, posts: &[Post], w: W) -> Result<()> {
    feed(config, posts)?.write_to(w)?;
    Ok(())
}

fn feed(config: FeedConfig, posts: &[Post]) -> Result<Feed> {
    let mut feed = Feed::default();
    feed.entries = feed_entries(&config, posts)?;
    feed.id = config.site_url.to_string();
    feed.updated = FixedOffset::east(0).from_utc_datetime(&Utc::now().naive_utc());
    feed.links = vec![alternate_link(config.site_url.to_string())];
    // Text::plain takes the title by value, so it goes last
    feed.title = Text::plain(config.title);
    Ok(feed)
}

fn feed_entries(config: &FeedConfig, posts: &[Post]) -> Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = Vec::with_capacity(posts.len());

    for post in posts {
        let date = match post.parsed_date {
            Some(date) => date,
            None => continue,
        };
        let updated =
            FixedOffset::east(0).from_utc_datetime(&date.and_hms(0, 0, 0));
        let href = config.site_url.join(&post.url)?.to_string();

        let mut entry = Entry::default();
        entry.id = href.clone();
        entry.title = Text::plain(post.title.clone());
        entry.updated = updated;
        entry.published = Some(updated);
        entry.authors = vec![person(&post.author)];
        entry.links = vec![alternate_link(href)];
        entry.summary = match post.summary.is_empty() {
            true => None,
            false => Some(Text::plain(post.summary.clone())),
        };
        entries.push(entry);
    }
    Ok(entries)
}

fn alternate_link(href: String) -> Link {
    let mut link = Link::default();
    link.href = href;
    link.rel = String::from("alternate");
    link
}

fn person(name: &str) -> Person {
    let mut person = Person::default();
    person.name = name.to_owned();
    person
}

type Result<T> = std::result::Result<T, Error>;

/// Represents a problem creating a feed.
#[derive(Debug)]
pub enum Error {
    /// Returned when there is a generic I/O error.
    Io(std::io::Error),

    /// Returned when there is an Atom-related error.
    Atom(AtomError),

    /// Returned when a post URL cannot be joined onto the site URL.
    UrlParse(url::ParseError),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => err.fmt(f),
            Error::Atom(err) => err.fmt(f),
            Error::UrlParse(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Atom(err) => Some(err),
            Error::UrlParse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator in fallible feed operations.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<AtomError> for Error {
    /// Converts [`AtomError`]s into [`Error`]. This allows us to use the
    /// `?` operator in fallible feed operations.
    fn from(err: AtomError) -> Error {
        Error::Atom(err)
    }
}

impl From<url::ParseError> for Error {
    /// Converts [`url::ParseError`]s into [`Error`]. This allows us to use
    /// the `?` operator when joining post URLs.
    fn from(err: url::ParseError) -> Error {
        Error::UrlParse(err)
    }
}
