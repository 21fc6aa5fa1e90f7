//! # SmartCalc Content Library
//!
//! The built-in editorial posts that ship with the calculator suite. The
//! catalogue is static: three articles, each tied to the calculator it walks
//! through.

mod posts;

use chrono::NaiveDate;
use serde::Serialize;

/// Which shelf a post belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Finance,
    Health,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Finance => "Finance",
            Category::Health => "Health",
        }
    }
}

/// One editorial post, with the calculator it demonstrates.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub published: NaiveDate,
    pub read_minutes: u32,
    pub category: Category,
    /// Display name of the related calculator.
    pub related_tool: &'static str,
    /// The CLI subcommand that runs it.
    pub related_command: &'static str,
    /// Markdown body.
    pub body: &'static str,
}

/// All posts, newest first.
pub fn all() -> &'static [BlogPost] {
    posts::catalogue()
}

/// Looks a post up by its slug.
pub fn find(slug: &str) -> Option<&'static BlogPost> {
    all().iter().find(|post| post.slug == slug)
}

/// All posts in one category, newest first.
pub fn by_category(category: Category) -> Vec<&'static BlogPost> {
    all().iter().filter(|post| post.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_newest_first() {
        let posts = all();
        assert_eq!(posts.len(), 3);
        assert!(posts.windows(2).all(|w| w[0].published >= w[1].published));
    }

    #[test]
    fn finds_posts_by_slug() {
        let post = find("rent-vs-buy-case-study").unwrap();
        assert_eq!(post.category, Category::Finance);
        assert_eq!(post.related_command, "rent-vs-buy");
        assert!(find("no-such-post").is_none());
    }

    #[test]
    fn categories_partition_the_catalogue() {
        let finance = by_category(Category::Finance);
        let health = by_category(Category::Health);
        assert_eq!(finance.len() + health.len(), all().len());
        assert_eq!(health.len(), 1);
    }

    #[test]
    fn every_post_has_a_body() {
        for post in all() {
            assert!(!post.body.trim().is_empty(), "empty body for {}", post.slug);
            assert!(post.read_minutes > 0);
        }
    }
}
