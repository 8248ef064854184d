//! Persists the aggregate metadata index (`posts.js`): a script-embedded
//! array of post records consumed by the client-side listing code on author
//! and archive pages.

use std::fmt;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::post::{Post, PostType};

/// One record of the aggregate index. Field names are part of the contract
/// with the page scripts in [`crate::templates`].
#[derive(Serialize)]
pub struct PostRecord<'a> {
    pub title: &'a str,
    pub summary: &'a str,
    pub date: &'a str,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub tags: &'a [String],
    pub readtime: &'a str,
    pub wordcount: usize,
    pub author: &'a str,
    #[serde(rename = "authorSlug")]
    pub author_slug: &'a str,
    pub url: &'a str,
}

impl<'a> From<&'a Post> for PostRecord<'a> {
    fn from(post: &'a Post) -> PostRecord<'a> {
        PostRecord {
            title: &post.title,
            summary: &post.summary,
            date: &post.date,
            post_type: post.post_type,
            tags: &post.tags,
            readtime: &post.readtime,
            wordcount: post.word_count,
            author: &post.author,
            author_slug: &post.author_slug,
            url: &post.url,
        }
    }
}

/// Writes `posts.js` for the given (already sorted) corpus.
pub fn write_index(posts: &[Post], path: &Path) -> Result<()> {
    let records: Vec<PostRecord> = posts.iter().map(PostRecord::from).collect();
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "const POSTS = {};", serde_json::to_string_pretty(&records)?)?;
    Ok(())
}

/// The result of writing the aggregate index.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error writing the aggregate index.
#[derive(Debug)]
pub enum Error {
    /// Returned when serialization fails.
    Json(serde_json::Error),

    /// Returned for I/O errors.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Json(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    /// Converts a [`serde_json::Error`] into an [`Error`]. It allows us to
    /// use the `?` operator for serialization functions.
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts a [`std::io::Error`] into an [`Error`]. It allows us to use
    /// the `?` operator for fallible I/O functions.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
