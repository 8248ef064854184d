//! Parses [`Post`] objects from an author's source directory. Defines the
//! per-file [`Error`] taxonomy: malformed front-matter and a missing title
//! are recoverable (the file is skipped with a warning); everything else
//! propagates and aborts the build.

use std::{
    fmt,
    fs::{read_dir, File},
    path::Path,
};

use tracing::warn;

use crate::config::Author;
use crate::post::{self, Post, Frontmatter};

const MARKDOWN_EXTENSION: &str = ".md";
const HTML_EXTENSION: &str = ".html";

/// Parses the posts of a single author.
pub struct Parser<'a> {
    author: &'a Author,
}

impl<'a> Parser<'a> {
    pub fn new(author: &'a Author) -> Parser<'a> {
        Parser { author }
    }

    /// Searches `source_directory` for post files (extension = `.md`) and
    /// returns the posts that parsed, in directory-encounter order. Files
    /// with malformed front-matter or no title are skipped with a warning.
    /// Each post file must be structured as follows:
    ///
    /// 1. Initial front-matter fence (`---`)
    /// 2. YAML front-matter with a `title` field and optionally `summary`,
    ///    `date`, `type`, `tags`, `readtime`, and `author`
    /// 3. Terminal front-matter fence (`---`)
    /// 4. Post body
    ///
    /// For example:
    ///
    /// ```md
    /// ---
    /// title: Hola, mundo
    /// date: 2026-02-22
    /// tags: [cine, ia]
    /// ---
    /// ## Hola
    ///
    /// Mundo
    /// ```
    pub fn parse_directory(&self, source_directory: &Path) -> Result<Vec<Post>> {
        let mut posts = Vec::new();
        for result in read_dir(source_directory)? {
            let entry = result?;
            let os_file_name = entry.file_name();
            let file_name = os_file_name.to_string_lossy();
            if !file_name.ends_with(MARKDOWN_EXTENSION) {
                continue;
            }
            match self.parse_post(&entry.path(), &file_name) {
                Ok(post) => posts.push(post),
                Err(e) if e.is_recoverable() => warn!("skipping: {}", e),
                Err(e) => return Err(e),
            }
        }
        Ok(posts)
    }

    /// Parses a single [`Post`] from a source file.
    fn parse_post(&self, path: &Path, file_name: &str) -> Result<Post> {
        use std::io::Read;
        let mut contents = String::new();
        File::open(path)?.read_to_string(&mut contents)?;
        self.parse_source(file_name, &contents)
    }

    /// Parses a single [`Post`] from `input`. `file_name` is the source file
    /// name within the author's directory; the output URL is derived from it
    /// by swapping the extension.
    pub fn parse_source(&self, file_name: &str, input: &str) -> Result<Post> {
        match self._parse_source(file_name, input) {
            Ok(p) => Ok(p),
            Err(e) => Err(Error::Annotated(
                format!("parsing post `{}/{}`", self.author.slug, file_name),
                Box::new(e),
            )),
        }
    }

    fn _parse_source(&self, file_name: &str, input: &str) -> Result<Post> {
        fn frontmatter_indices(input: &str) -> Result<(usize, usize, usize)> {
            const FENCE: &str = "---";
            if !input.starts_with(FENCE) {
                return Err(Error::FrontmatterMissingStartFence);
            }
            match input[FENCE.len()..].find("---") {
                None => Err(Error::FrontmatterMissingEndFence),
                Some(offset) => Ok((
                    FENCE.len(),                        // yaml_start
                    FENCE.len() + offset,               // yaml_stop
                    FENCE.len() + offset + FENCE.len(), // body_start
                )),
            }
        }

        let (yaml_start, yaml_stop, body_start) = frontmatter_indices(input)?;
        let frontmatter: Frontmatter =
            serde_yaml::from_str(&input[yaml_start..yaml_stop])?;

        let title = match frontmatter.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(Error::MissingTitle),
        };

        let body = input[body_start..].trim_start_matches('\n').to_owned();
        let word_count = post::word_count(&body);
        let date = frontmatter.date.unwrap_or_default();

        Ok(Post {
            title,
            summary: frontmatter.summary,
            parsed_date: chrono::NaiveDate::parse_from_str(
                &date,
                post::DATE_FORMAT,
            )
            .ok(),
            date,
            post_type: frontmatter.post_type,
            tags: frontmatter
                .tags
                .map(|tags| tags.normalize())
                .unwrap_or_default(),
            readtime: frontmatter.readtime.unwrap_or_else(|| {
                format!("{} min", post::reading_time_minutes(word_count))
            }),
            word_count,
            author: frontmatter
                .author
                .unwrap_or_else(|| self.author.name.clone()),
            author_slug: self.author.slug.clone(),
            url: format!(
                "{}/{}{}",
                self.author.slug,
                file_name.trim_end_matches(MARKDOWN_EXTENSION),
                HTML_EXTENSION,
            ),
            body,
        })
    }
}

/// Represents the result of a [`Post`]-parse operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error parsing a [`Post`] object.
#[derive(Debug)]
pub enum Error {
    /// Returned when a post source file is missing its starting front-matter
    /// fence (`---`).
    FrontmatterMissingStartFence,

    /// Returned when a post source file is missing its terminal front-matter
    /// fence (`---` i.e., the starting fence was found but the ending one
    /// was missing).
    FrontmatterMissingEndFence,

    /// Returned when there was an error parsing the front-matter as YAML.
    DeserializeYaml(serde_yaml::Error),

    /// Returned when the front-matter has no (non-blank) `title` field.
    MissingTitle,

    /// Returned for other I/O errors.
    Io(std::io::Error),

    /// An error with an annotation.
    Annotated(String, Box<Error>),
}

impl Error {
    /// Whether the error is isolated to one source file. Recoverable errors
    /// skip the file; everything else aborts the build.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::FrontmatterMissingStartFence => true,
            Error::FrontmatterMissingEndFence => true,
            Error::DeserializeYaml(_) => true,
            Error::MissingTitle => true,
            Error::Io(_) => false,
            Error::Annotated(_, err) => err.is_recoverable(),
        }
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::FrontmatterMissingStartFence => {
                write!(f, "Post must begin with `---`")
            }
            Error::FrontmatterMissingEndFence => {
                write!(f, "Missing closing `---`")
            }
            Error::DeserializeYaml(err) => err.fmt(f),
            Error::MissingTitle => write!(f, "Missing `title` field"),
            Error::Io(err) => err.fmt(f),
            Error::Annotated(annotation, err) => {
                write!(f, "{}: {}", &annotation, err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FrontmatterMissingStartFence => None,
            Error::FrontmatterMissingEndFence => None,
            Error::DeserializeYaml(err) => Some(err),
            Error::MissingTitle => None,
            Error::Io(err) => Some(err),
            Error::Annotated(_, err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts a [`serde_yaml::Error`] into an [`Error`]. It allows us to
    /// use the `?` operator for [`serde_yaml`] deserialization functions.
    fn from(err: serde_yaml::Error) -> Error {
        Error::DeserializeYaml(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts a [`std::io::Error`] into an [`Error`]. It allows us to
    /// use the `?` operator for fallible I/O functions.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
