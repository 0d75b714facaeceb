//! Blog list statistics
//!
//! Pure reductions over an ordered sequence of blogs. Every function is a
//! single left-to-right pass carrying a running best candidate, so ties are
//! always won by whatever was seen first.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::blog::{Blog, BlogView};

/// Read access to the blog fields the statistics look at
pub trait BlogMetrics {
    fn title(&self) -> &str;
    fn author(&self) -> Option<&str>;
    fn likes(&self) -> u64;
}

impl BlogMetrics for Blog {
    fn title(&self) -> &str {
        Blog::title(self)
    }

    fn author(&self) -> Option<&str> {
        Blog::author(self)
    }

    fn likes(&self) -> u64 {
        Blog::likes(self)
    }
}

impl BlogMetrics for BlogView {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    fn likes(&self) -> u64 {
        self.likes
    }
}

impl<T: BlogMetrics + ?Sized> BlogMetrics for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn author(&self) -> Option<&str> {
        (**self).author()
    }

    fn likes(&self) -> u64 {
        (**self).likes()
    }
}

/// The most liked blog, reduced to its headline fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteBlog {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub likes: u64,
}

/// Author with the most blogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBlogCount {
    pub author: String,
    pub blogs: usize,
}

/// Author with the most likes across their blogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: u64,
}

/// Sum of likes across all blogs, saturating at `u64::MAX`
pub fn total_likes<B: BlogMetrics>(blogs: &[B]) -> u64 {
    blogs
        .iter()
        .fold(0u64, |total, blog| total.saturating_add(blog.likes()))
}

/// The blog with the most likes, `None` for an empty list
pub fn favorite_blog<B: BlogMetrics>(blogs: &[B]) -> Option<FavoriteBlog> {
    let favorite = blogs.iter().fold(None::<&B>, |best, blog| match best {
        Some(current) if blog.likes() <= current.likes() => Some(current),
        _ => Some(blog),
    })?;

    Some(FavoriteBlog {
        title: favorite.title().to_string(),
        author: favorite.author().map(str::to_string),
        likes: favorite.likes(),
    })
}

/// Author with the most blogs, `None` when no blog names an author
pub fn most_blogs<B: BlogMetrics>(blogs: &[B]) -> Option<AuthorBlogCount> {
    let (author, count) = leading_author(blogs, |_| 1)?;

    Some(AuthorBlogCount {
        author: author.to_string(),
        blogs: count as usize,
    })
}

/// Author with the most total likes, `None` when no blog names an author
pub fn most_likes<B: BlogMetrics>(blogs: &[B]) -> Option<AuthorLikes> {
    let (author, likes) = leading_author(blogs, |blog| blog.likes())?;

    Some(AuthorLikes {
        author: author.to_string(),
        likes,
    })
}

/// Blogs ordered by likes, most liked first; equal likes keep input order
pub fn sort_by_likes<B: BlogMetrics>(blogs: &[B]) -> Vec<&B> {
    let mut sorted: Vec<&B> = blogs.iter().collect();
    sorted.sort_by(|a, b| b.likes().cmp(&a.likes()));
    sorted
}

/// Accumulate a per-author score and track the leader in the same pass
///
/// The leader only changes when an author's running score strictly exceeds
/// the current leader's, so the first author to reach the maximum keeps it.
fn leading_author<B, F>(blogs: &[B], score: F) -> Option<(&str, u64)>
where
    B: BlogMetrics,
    F: Fn(&B) -> u64,
{
    let mut totals: HashMap<&str, u64> = HashMap::new();

    blogs
        .iter()
        .filter_map(|blog| blog.author().map(|author| (author, score(blog))))
        .fold(None, |leader, (author, points)| {
            let total = totals.entry(author).or_insert(0);
            *total = total.saturating_add(points);

            match leader {
                Some((_, best)) if *total <= best => leader,
                _ => Some((author, *total)),
            }
        })
}

/// All statistics for a blog list in one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStatistics {
    pub blogs: usize,
    pub total_likes: u64,
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: Option<AuthorBlogCount>,
    pub most_likes: Option<AuthorLikes>,
}

impl BlogStatistics {
    pub fn compute<B: BlogMetrics>(blogs: &[B]) -> Self {
        Self {
            blogs: blogs.len(),
            total_likes: total_likes(blogs),
            favorite_blog: favorite_blog(blogs),
            most_blogs: most_blogs(blogs),
            most_likes: most_likes(blogs),
        }
    }
}
