//! Ranks the corpus against a target post to pick the "also on this site"
//! links at the bottom of each article page.

use crate::post::Post;

/// Maximum number of related posts shown per article.
pub const MAX_RELATED: usize = 3;

/// Relevance of `candidate` with respect to `target`: two points per shared
/// tag plus one point when both posts have the same author.
pub fn score(target: &Post, candidate: &Post) -> u32 {
    let shared_tags = candidate
        .tags
        .iter()
        .filter(|tag| target.tags.contains(tag))
        .count() as u32;
    let same_author = (candidate.author_slug == target.author_slug) as u32;
    shared_tags * 2 + same_author
}

/// Returns up to `limit` posts related to `target`, descending by score.
/// The target itself and zero-score candidates are excluded. Ties keep the
/// corpus order (stable sort), which is date-descending by the time this
/// runs, so among equally-scored candidates the most recent wins.
pub fn related_posts<'a>(
    target: &Post,
    corpus: &'a [Post],
    limit: usize,
) -> Vec<&'a Post> {
    let mut scored: Vec<(u32, &Post)> = corpus
        .iter()
        .filter(|candidate| candidate.url != target.url)
        .filter_map(|candidate| match score(target, candidate) {
            0 => None,
            s => Some((s, candidate)),
        })
        .collect();
    scored.sort_by(|(a, _), (b, _)| b.cmp(a));
    scored.truncate(limit);
    scored.into_iter().map(|(_, post)| post).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::post::PostType;

    fn post(url: &str, author_slug: &str, tags: &[&str]) -> Post {
        Post {
            title: url.to_owned(),
            summary: String::new(),
            date: String::from("2026-01-01"),
            parsed_date: None,
            post_type: PostType::default(),
            tags: tags.iter().map(|t| String::from(*t)).collect(),
            readtime: String::from("1 min"),
            word_count: 0,
            author: author_slug.to_owned(),
            author_slug: author_slug.to_owned(),
            url: url.to_owned(),
            body: String::new(),
        }
    }

    #[test]
    fn test_shared_tag_different_author() {
        let target = post("a/1.html", "a", &["cine"]);
        let candidate = post("b/1.html", "b", &["cine", "ia"]);
        assert!(score(&target, &candidate) >= 2);
        assert_eq!(2, score(&target, &candidate));
    }

    #[test]
    fn test_same_author_no_shared_tags() {
        let target = post("a/1.html", "a", &["cine"]);
        let candidate = post("a/2.html", "a", &["derecho"]);
        assert_eq!(1, score(&target, &candidate));
    }

    #[test]
    fn test_unrelated_posts_excluded() {
        let target = post("a/1.html", "a", &["cine"]);
        let corpus = vec![target.clone(), post("b/1.html", "b", &["derecho"])];
        assert!(related_posts(&target, &corpus, MAX_RELATED).is_empty());
    }

    #[test]
    fn test_target_excluded_from_own_results() {
        let target = post("a/1.html", "a", &["cine"]);
        let corpus = vec![target.clone(), post("a/2.html", "a", &["cine"])];
        let related = related_posts(&target, &corpus, MAX_RELATED);
        assert_eq!(1, related.len());
        assert_eq!("a/2.html", related[0].url);
    }

    #[test]
    fn test_ordering_and_limit() {
        let target = post("a/0.html", "a", &["cine", "ia"]);
        let corpus = vec![
            target.clone(),
            // score 1: same author only
            post("a/1.html", "a", &["musica"]),
            // score 2: one shared tag
            post("b/1.html", "b", &["ia"]),
            // score 5: two shared tags, same author
            post("a/2.html", "a", &["cine", "ia"]),
            // score 4: two shared tags
            post("c/1.html", "c", &["cine", "ia"]),
        ];
        let related = related_posts(&target, &corpus, MAX_RELATED);
        let urls: Vec<&str> = related.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(vec!["a/2.html", "c/1.html", "b/1.html"], urls);
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let target = post("a/0.html", "a", &["cine"]);
        let corpus = vec![
            target.clone(),
            post("b/newer.html", "b", &["cine"]),
            post("b/older.html", "b", &["cine"]),
        ];
        let related = related_posts(&target, &corpus, MAX_RELATED);
        let urls: Vec<&str> = related.iter().map(|p| p.url.as_str()).collect();
        // corpus is date-descending, so the earlier element wins the tie
        assert_eq!(vec!["b/newer.html", "b/older.html"], urls);
    }
}
