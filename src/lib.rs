//! The library code for the `tintero` static site generator, a batch tool
//! for a small multi-author blog. The architecture can be generally broken
//! down into two distinct steps:
//!
//! 1. Parsing posts from each author's source files on disk
//!    ([`crate::parser`])
//! 2. Converting the corpus into output files on disk ([`crate::build`])
//!
//! The second step is the more involved. After cleaning up orphaned output
//! files and sorting the corpus by date, it renders one article page per
//! post. This needs the whole corpus, because each page carries a
//! related-posts section ranked by shared tags and author
//! ([`crate::related`]). It then writes the per-author listing shells, the
//! global archive shell, the aggregate metadata index (`posts.js`) those
//! shells read at view time, and an Atom feed.
//!
//! Page HTML goes through escaping mustache templates ([`crate::render`]);
//! the only unescaped interpolation is the article body, which is produced
//! by the Markdown renderer itself ([`crate::markdown`]).

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod feed;
pub mod index;
pub mod markdown;
pub mod parser;
pub mod post;
pub mod related;
pub mod render;
pub mod templates;
pub mod toc;
mod util;
