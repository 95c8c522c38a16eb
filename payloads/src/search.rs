use crate::Post;

/// Posts whose title contains `keyword`, ignoring case.
///
/// Surrounding whitespace in the keyword is ignored and a blank keyword
/// matches every post. Order is preserved.
pub fn filter_posts<'a>(posts: &'a [Post], keyword: &str) -> Vec<&'a Post> {
    let needle = keyword.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| {
            needle.is_empty() || post.title.to_lowercase().contains(&needle)
        })
        .collect()
}
