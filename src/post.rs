//! Defines the [`Post`] type and its front-matter representation, plus the
//! derived metrics (word count, reading time) and the global date sort.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The date format accepted in front-matter. Anything else is treated as an
/// unparseable date: the post still builds, but it sorts after all dated
/// posts and is omitted from the feed.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Words-per-minute figure used to estimate reading time.
const WORDS_PER_MINUTE: usize = 200;

/// A single parsed post. Identity is the relative output `url`, which is
/// unique because each post maps to exactly one source file.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    pub title: String,

    /// Short summary shown under the title and in listings. May be empty.
    pub summary: String,

    /// The date string as authored. Displayed verbatim.
    pub date: String,

    /// The date parsed strictly as [`DATE_FORMAT`], if it parsed at all.
    pub parsed_date: Option<NaiveDate>,

    pub post_type: PostType,

    /// Tags in authored order, trimmed, empties discarded.
    pub tags: Vec<String>,

    /// Display reading time, e.g. `9 min`. Author-overridable.
    pub readtime: String,

    pub word_count: usize,

    /// Display name of the author.
    pub author: String,

    /// Identifier of the author; also the output directory name.
    pub author_slug: String,

    /// Output path relative to the site root, e.g. `angel/ensayo.html`.
    pub url: String,

    /// The Markdown body, kept in memory so article pages can be rendered
    /// after the whole corpus has been assembled.
    pub body: String,
}

/// The post taxonomy. Unrecognized values in front-matter are a parse error
/// and cause the file to be skipped with a warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Article,
    Comment,
    Reply,
    Essay,
    Reference,
}

impl Default for PostType {
    fn default() -> Self {
        PostType::Article
    }
}

impl PostType {
    /// The lowercase name, used as a CSS class on type badges.
    pub fn css_class(&self) -> &'static str {
        match self {
            PostType::Article => "article",
            PostType::Comment => "comment",
            PostType::Reply => "reply",
            PostType::Essay => "essay",
            PostType::Reference => "reference",
        }
    }

    /// The capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            PostType::Article => "Article",
            PostType::Comment => "Comment",
            PostType::Reply => "Reply",
            PostType::Essay => "Essay",
            PostType::Reference => "Reference",
        }
    }
}

/// The deserialized front-matter block. `title` is required but modeled as
/// an `Option` so its absence can be reported as a recoverable error rather
/// than a YAML type error.
#[derive(Deserialize)]
pub struct Frontmatter {
    pub title: Option<String>,

    #[serde(default, alias = "tldr")]
    pub summary: String,

    pub date: Option<String>,

    #[serde(default, rename = "type")]
    pub post_type: PostType,

    pub tags: Option<TagsValue>,

    /// Optional reading-time override, taken verbatim (e.g. `8 min`).
    pub readtime: Option<String>,

    /// Optional display-name override for the author.
    pub author: Option<String>,
}

/// Tags as authored: either a YAML list or a single delimited string such
/// as `cine, literatura`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum TagsValue {
    List(Vec<String>),
    Delimited(String),
}

impl TagsValue {
    /// Normalizes to an ordered list: brackets stripped (for the delimited
    /// form), entries trimmed, empty entries discarded.
    pub fn normalize(self) -> Vec<String> {
        match self {
            TagsValue::List(tags) => tags
                .into_iter()
                .map(|t| t.trim().to_owned())
                .filter(|t| !t.is_empty())
                .collect(),
            TagsValue::Delimited(s) => s
                .replace(|c| c == '[' || c == ']', "")
                .split(',')
                .map(|t| t.trim().to_owned())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

/// Counts whitespace-separated words in the body.
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Estimated reading time in minutes: `max(1, round(words / 200))`.
pub fn reading_time_minutes(word_count: usize) -> usize {
    std::cmp::max(1, (word_count as f64 / WORDS_PER_MINUTE as f64).round() as usize)
}

/// Sorts posts by date, most recent first. The sort is stable; posts whose
/// date did not parse sort after all dated posts and keep their encounter
/// order among themselves.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| match (a.parsed_date, b.parsed_date) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod test {
    use super::*;

    fn post(url: &str, date: &str) -> Post {
        Post {
            title: String::from(url),
            summary: String::new(),
            date: date.to_owned(),
            parsed_date: NaiveDate::parse_from_str(date, DATE_FORMAT).ok(),
            post_type: PostType::default(),
            tags: Vec::new(),
            readtime: String::from("1 min"),
            word_count: 0,
            author: String::from("Ana"),
            author_slug: String::from("ana"),
            url: url.to_owned(),
            body: String::new(),
        }
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(9, reading_time_minutes(1791));
        assert_eq!(2, reading_time_minutes(433));
        assert_eq!(1, reading_time_minutes(0));
        assert_eq!(1, reading_time_minutes(99));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(4, word_count("  one two\tthree\nfour  "));
        assert_eq!(0, word_count("   "));
    }

    #[test]
    fn test_normalize_delimited_tags() {
        let tags = TagsValue::Delimited(String::from("cine, literatura"));
        assert_eq!(vec!["cine", "literatura"], tags.normalize());
    }

    #[test]
    fn test_normalize_bracketed_tags() {
        let tags = TagsValue::Delimited(String::from("[ia, musica, ]"));
        assert_eq!(vec!["ia", "musica"], tags.normalize());
    }

    #[test]
    fn test_normalize_tag_list() {
        let tags = TagsValue::List(vec![
            String::from(" cine "),
            String::from(""),
            String::from("ml"),
        ]);
        assert_eq!(vec!["cine", "ml"], tags.normalize());
    }

    #[test]
    fn test_sort_invalid_dates_last() {
        let mut posts = vec![
            post("a.html", "sometime in winter"),
            post("b.html", "2025-11-29"),
            post("c.html", "2026-02-22"),
        ];
        sort_posts(&mut posts);
        let order: Vec<&str> = posts.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(vec!["c.html", "b.html", "a.html"], order);
    }

    #[test]
    fn test_sort_stable_among_invalid() {
        let mut posts = vec![
            post("x.html", "not a date"),
            post("y.html", "also not a date"),
            post("z.html", "2026-01-01"),
        ];
        sort_posts(&mut posts);
        let order: Vec<&str> = posts.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(vec!["z.html", "x.html", "y.html"], order);
    }

    #[test]
    fn test_post_type_labels() {
        assert_eq!("essay", PostType::Essay.css_class());
        assert_eq!("Essay", PostType::Essay.label());
    }
}
